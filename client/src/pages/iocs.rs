//! IOC search & analysis page: query, filters, pagination, export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Search ranking lives upstream; this page only sends filters and
//! renders the returned window of results.

#[cfg(test)]
#[path = "iocs_test.rs"]
mod iocs_test;

use leptos::prelude::*;

use crate::components::severity_badge::SeverityBadge;
use crate::components::shell::DashboardShell;
use crate::components::skeleton::SkeletonTable;
use crate::net::types::{Ioc, IocType, SeverityLevel};
use crate::util::export;
use crate::util::format::{format_last_seen, format_number, ioc_type_label};

/// Results per page.
const PAGE_SIZE: u32 = 50;

/// Number of pages needed to show `total` results.
fn total_pages(total: i64, limit: u32) -> u32 {
    if total <= 0 || limit == 0 {
        return 0;
    }
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let pages = (total as u64).div_ceil(u64::from(limit)) as u32;
    pages
}

#[component]
pub fn IocsPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let kind = RwSignal::new(None::<IocType>);
    let severity = RwSignal::new(None::<SeverityLevel>);
    let page = RwSignal::new(0u32);
    let results = RwSignal::new(Vec::<Ioc>::new());
    let total = RwSignal::new(0i64);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let load = move || {
        loading.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let params = crate::net::api::IocSearchParams {
                query: Some(query.get_untracked().trim().to_owned()).filter(|q| !q.is_empty()),
                kind: kind.get_untracked(),
                severity: severity.get_untracked(),
                limit: PAGE_SIZE,
                offset: page.get_untracked() * PAGE_SIZE,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::search_iocs(&params).await {
                    Ok(resp) => {
                        results.set(resp.results);
                        total.set(resp.total);
                    }
                    Err(e) => error.set(e),
                }
                loading.set(false);
            });
        }
    };

    // Initial load, once, after hydration.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load();
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(0);
        load();
    };

    let on_export_csv = move |_| {
        let csv = export::iocs_to_csv(&results.get_untracked());
        export::download_file(&export::export_filename("iocs", "csv"), "text/csv", &csv);
    };

    let on_export_json = move |_| {
        if let Ok(json) = export::to_json_pretty(&results.get_untracked()) {
            export::download_file(&export::export_filename("iocs", "json"), "application/json", &json);
        }
    };

    let on_prev = move |_| {
        if page.get() > 0 {
            page.update(|p| *p -= 1);
            load();
        }
    };
    let on_next = move |_| {
        if page.get() + 1 < total_pages(total.get(), PAGE_SIZE) {
            page.update(|p| *p += 1);
            load();
        }
    };

    view! {
        <DashboardShell>
            <div class="page iocs-page">
                <div class="page__header">
                    <div>
                        <h1>"IOC Search & Analysis"</h1>
                        <p class="page__subtitle">
                            {move || format!("{} indicators of compromise detected", format_number(total.get()))}
                        </p>
                    </div>
                    <div class="page__actions">
                        <button class="btn" on:click=on_export_csv>
                            "Export CSV"
                        </button>
                        <button class="btn" on:click=on_export_json>
                            "Export JSON"
                        </button>
                    </div>
                </div>

                <form class="card filter-bar" on:submit=on_search>
                    <label class="filter-bar__field filter-bar__field--wide">
                        "Search IOC Value"
                        <input
                            class="input"
                            type="text"
                            placeholder="Search by IP, domain, hash..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="filter-bar__field">
                        "Type"
                        <select
                            class="input"
                            on:change=move |ev| {
                                kind.set(IocType::from_wire(&event_target_value(&ev)));
                                page.set(0);
                                load();
                            }
                        >
                            <option value="">"All Types"</option>
                            {IocType::ALL
                                .into_iter()
                                .map(|k| view! { <option value=k.as_str()>{ioc_type_label(k)}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="filter-bar__field">
                        "Severity"
                        <select
                            class="input"
                            on:change=move |ev| {
                                severity.set(SeverityLevel::from_wire(&event_target_value(&ev)));
                                page.set(0);
                                load();
                            }
                        >
                            <option value="">"All Severities"</option>
                            {SeverityLevel::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.as_str().to_uppercase()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <button class="btn btn--primary filter-bar__submit" type="submit">
                        "Search"
                    </button>
                </form>

                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>

                <Show when=move || !loading.get() fallback=move || view! { <SkeletonTable/> }>
                    <div class="card table-card">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"Value"</th>
                                    <th>"Severity"</th>
                                    <th>"Confidence"</th>
                                    <th>"Source"</th>
                                    <th>"Observed"</th>
                                    <th>"Last Seen"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    results
                                        .get()
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
                                                    <td>{ioc.source}</td>
                                                    <td>{ioc.observed_count}</td>
                                                    <td>{format_last_seen(&ioc.last_seen)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                        <Show when=move || results.get().is_empty()>
                            <p class="table-card__empty">"No indicators match the current filters."</p>
                        </Show>
                    </div>
                    <div class="pagination">
                        <button class="btn" on:click=on_prev disabled=move || page.get() == 0>
                            "Previous"
                        </button>
                        <span class="pagination__status">
                            {move || {
                                let pages = total_pages(total.get(), PAGE_SIZE).max(1);
                                format!("Page {} of {pages}", page.get() + 1)
                            }}
                        </span>
                        <button
                            class="btn"
                            on:click=on_next
                            disabled=move || page.get() + 1 >= total_pages(total.get(), PAGE_SIZE)
                        >
                            "Next"
                        </button>
                    </div>
                </Show>
            </div>
        </DashboardShell>
    }
}
