//! KPI stat card for the dashboard grid.

use leptos::prelude::*;

/// A single headline metric.
#[component]
pub fn KpiCard(
    title: &'static str,
    value: String,
    #[prop(default = "blue")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("card kpi-card kpi-card--{accent}")>
            <p class="kpi-card__title">{title}</p>
            <p class="kpi-card__value">{value}</p>
        </div>
    }
}
