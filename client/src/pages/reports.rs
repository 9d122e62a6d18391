//! Threat reports page: severity distribution, type/source breakdowns,
//! top threats, and report export.

use leptos::prelude::*;

use crate::components::charts::{BarDatum, BreakdownBars, SeverityDistributionChart};
use crate::components::severity_badge::SeverityBadge;
use crate::components::shell::DashboardShell;
use crate::components::skeleton::SkeletonChart;
use crate::net::types::ReportSummary;
use crate::util::export;
use crate::util::format::{format_date, format_number, ioc_type_label, ioc_type_label_for};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let report = RwSignal::new(None::<ReportSummary>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let load = move || {
        loading.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_report_summary().await {
                Ok(summary) => report.set(Some(summary)),
                Err(e) => error.set(e),
            }
            loading.set(false);
        });
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load();
    });

    let on_export_report = move |_| {
        let Some(summary) = report.get_untracked() else {
            return;
        };
        if let Ok(json) = export::to_json_pretty(&summary) {
            export::download_file(&export::export_filename("threat-report", "json"), "application/json", &json);
        }
    };

    let on_export_threats = move |_| {
        let Some(summary) = report.get_untracked() else {
            return;
        };
        let csv = export::iocs_to_csv(&summary.top_threats);
        export::download_file(&export::export_filename("top-threats", "csv"), "text/csv", &csv);
    };

    let type_bars = move || {
        report.get().map_or_else(Vec::new, |summary| {
            let mut bars: Vec<BarDatum> = summary
                .types
                .iter()
                .map(|(kind, count)| BarDatum {
                    label: ioc_type_label_for(kind),
                    value: *count,
                    color: "#3B82F6".to_owned(),
                })
                .collect();
            bars.sort_by(|a, b| b.value.cmp(&a.value));
            bars
        })
    };

    let source_bars = move || {
        report.get().map_or_else(Vec::new, |summary| {
            let mut bars: Vec<BarDatum> = summary
                .sources
                .iter()
                .map(|(source, count)| BarDatum {
                    label: source.clone(),
                    value: *count,
                    color: "#8B5CF6".to_owned(),
                })
                .collect();
            bars.sort_by(|a, b| b.value.cmp(&a.value));
            bars
        })
    };

    view! {
        <DashboardShell>
            <div class="page reports-page">
                <div class="page__header">
                    <div>
                        <h1>"Threat Reports"</h1>
                        <p class="page__subtitle">
                            {move || {
                                report
                                    .get()
                                    .map_or_else(String::new, |summary| {
                                        format!("Generated {}", format_date(&summary.generated_at))
                                    })
                            }}
                        </p>
                    </div>
                    <div class="page__actions">
                        <button class="btn" on:click=on_export_threats>
                            "Export Top Threats CSV"
                        </button>
                        <button class="btn btn--primary" on:click=on_export_report>
                            "Export Report JSON"
                        </button>
                    </div>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <div class="card page__error-card">
                        <p class="page__error">{move || error.get()}</p>
                        <button class="btn" on:click=move |_| load()>
                            "Retry"
                        </button>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get() && report.get().is_some()
                    fallback=move || {
                        view! {
                            <Show when=move || loading.get()>
                                <SkeletonChart/>
                            </Show>
                        }
                    }
                >
                    <div class="report-grid">
                        <section class="card report-grid__panel">
                            <h2>"Severity Distribution"</h2>
                            {move || {
                                report
                                    .get()
                                    .map(|summary| view! { <SeverityDistributionChart counts=summary.severity/> })
                            }}
                        </section>
                        <section class="card report-grid__panel">
                            <h2>"IOCs by Type"</h2>
                            <BreakdownBars data=type_bars()/>
                        </section>
                        <section class="card report-grid__panel">
                            <h2>"IOCs by Source"</h2>
                            <BreakdownBars data=source_bars()/>
                        </section>
                    </div>

                    <section class="card table-card">
                        <h2>"Top Threats"</h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"Value"</th>
                                    <th>"Severity"</th>
                                    <th>"Confidence"</th>
                                    <th>"Observed"</th>
                                    <th>"Last Seen"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    report
                                        .get()
                                        .map_or_else(Vec::new, |summary| summary.top_threats)
                                        .into_iter()
                                        .map(|ioc| {
                                            view! {
                                                <tr>
                                                    <td>{ioc_type_label(ioc.kind)}</td>
                                                    <td class="data-table__value">{ioc.value}</td>
                                                    <td>
                                                        <SeverityBadge severity=ioc.severity/>
                                                    </td>
                                                    <td>{format!("{}%", ioc.confidence)}</td>
                                                    <td>{format_number(ioc.observed_count)}</td>
                                                    <td>{format_date(&ioc.last_seen)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </section>
                </Show>
            </div>
        </DashboardShell>
    }
}
