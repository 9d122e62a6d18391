//! Loading placeholders for tables and charts.

use leptos::prelude::*;

#[component]
pub fn SkeletonTable(#[prop(default = 8)] rows: usize) -> impl IntoView {
    view! {
        <div class="skeleton skeleton--table" aria-hidden="true">
            {(0..rows)
                .map(|_| view! { <div class="skeleton__row"></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn SkeletonChart() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--chart" aria-hidden="true">
            <div class="skeleton__block"></div>
        </div>
    }
}
