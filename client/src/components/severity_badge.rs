//! Severity pill used in IOC tables and threat lists.

use leptos::prelude::*;

use crate::net::types::SeverityLevel;
use crate::util::format::severity_badge_class;

#[component]
pub fn SeverityBadge(severity: SeverityLevel) -> impl IntoView {
    view! {
        <span class=format!("badge {}", severity_badge_class(severity))>
            {severity.as_str().to_uppercase()}
        </span>
    }
}
