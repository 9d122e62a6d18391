//! Proportional-bar charts for the reports page.
//!
//! DESIGN
//! ======
//! Distribution charts are plain labeled bars scaled against the largest
//! bucket — no chart-library dependency, everything renders server-side.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::net::types::SeverityCounts;
use crate::util::format::{format_number, severity_color};

/// One labeled bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: i64,
    /// CSS color for the bar fill.
    pub color: String,
}

/// Bar width as a percentage of the largest value. Zero when the chart
/// is empty so missing data renders as empty tracks, not full ones.
fn bar_width_pct(value: i64, max: i64) -> f64 {
    if max <= 0 || value <= 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = (value as f64 / max as f64) * 100.0;
    pct.min(100.0)
}

/// Horizontal bar list scaled to the largest entry.
#[component]
pub fn BreakdownBars(data: Vec<BarDatum>) -> impl IntoView {
    let max = data.iter().map(|d| d.value).max().unwrap_or(0);

    view! {
        <div class="chart-bars">
            {data
                .into_iter()
                .map(|datum| {
                    let width = bar_width_pct(datum.value, max);
                    view! {
                        <div class="chart-bars__row">
                            <span class="chart-bars__label">{datum.label}</span>
                            <div class="chart-bars__track">
                                <div
                                    class="chart-bars__fill"
                                    style=format!("width: {width:.1}%; background-color: {};", datum.color)
                                ></div>
                            </div>
                            <span class="chart-bars__value">{format_number(datum.value)}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Severity distribution chart; zero-count levels are dropped.
#[component]
pub fn SeverityDistributionChart(counts: SeverityCounts) -> impl IntoView {
    let data: Vec<BarDatum> = counts
        .entries()
        .into_iter()
        .filter(|(_, value)| *value > 0)
        .map(|(level, value)| BarDatum {
            label: level.as_str().to_uppercase(),
            value,
            color: severity_color(level).to_owned(),
        })
        .collect();

    view! { <BreakdownBars data=data/> }
}
