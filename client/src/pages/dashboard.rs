//! Dashboard landing page: headline KPIs and the current top threats.

use leptos::prelude::*;

use crate::components::kpi_card::KpiCard;
use crate::components::severity_badge::SeverityBadge;
use crate::components::shell::DashboardShell;
use crate::components::skeleton::{SkeletonChart, SkeletonTable};
use crate::net::types::ReportSummary;
use crate::util::format::{format_date, format_number, ioc_type_label};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let report = RwSignal::new(None::<ReportSummary>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_report_summary().await {
                Ok(summary) => report.set(Some(summary)),
                Err(e) => error.set(e),
            }
            loading.set(false);
        });
    });

    view! {
        <DashboardShell>
            <div class="page dashboard-page">
                <div class="page__header">
                    <div>
                        <h1>"Security Operations Center"</h1>
                        <p class="page__subtitle">"Live threat intelligence overview"</p>
                    </div>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>

                <Show when=move || !loading.get() fallback=move || view! { <SkeletonChart/> }>
                    <div class="kpi-grid">
                        {move || {
                            let summary = report.get().unwrap_or_default();
                            view! {
                                <KpiCard
                                    title="Total IOCs"
                                    value=format_number(summary.total_iocs)
                                />
                                <KpiCard
                                    title="Critical"
                                    value=format_number(summary.severity.critical)
                                    accent="red"
                                />
                                <KpiCard
                                    title="High"
                                    value=format_number(summary.severity.high)
                                    accent="orange"
                                />
                                <KpiCard
                                    title="Active Sources"
                                    value=summary.sources.len().to_string()
                                    accent="violet"
                                />
                            }
                        }}
                    </div>
                </Show>

                <section class="card table-card">
                    <div class="table-card__header">
                        <h2>"Top Threats"</h2>
                        <a class="btn" href="/iocs">
                            "View all IOCs"
                        </a>
                    </div>
                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <SkeletonTable rows=5/> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"Value"</th>
                                    <th>"Severity"</th>
                                    <th>"Source"</th>
                                    <th>"Last Seen"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    report
                                        .get()
                                        .map_or_else(Vec::new, |summary| summary.top_threats)
                                        .into_iter()
                                        .take(5)
                                        .map(|ioc| {
                                            view! {
                                                <tr>
                                                    <td>{ioc_type_label(ioc.kind)}</td>
                                                    <td class="data-table__value">{ioc.value}</td>
                                                    <td>
                                                        <SeverityBadge severity=ioc.severity/>
                                                    </td>
                                                    <td>{ioc.source}</td>
                                                    <td>{format_date(&ioc.last_seen)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                        <Show when=move || {
                            report.get().is_none_or(|summary| summary.top_threats.is_empty())
                        }>
                            <p class="table-card__empty">"No active threats reported."</p>
                        </Show>
                    </Show>
                </section>
            </div>
        </DashboardShell>
    }
}
