//! Left navigation rail for the protected area.

use leptos::prelude::*;

/// Navigation entries: path and label.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/iocs", "IOC Search"),
    ("/reports", "Reports"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"◆"</span>
                <span class="sidebar__name">"Sentinel"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="sidebar__link" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
