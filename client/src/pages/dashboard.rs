//! Dashboard page with aggregate request statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Pulls `/audit/stats` once on mount and
//! renders headline counters, the risk distribution and daily volume.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{AuditStats, DailyRequests, RiskBucket};

/// Percentage of requests that were blocked, or zero when nothing was sent.
pub(crate) fn block_rate(stats: &AuditStats) -> f64 {
    if stats.total_requests == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let rate = stats.blocked_requests as f64 * 100.0 / stats.total_requests as f64;
    rate
}

/// Share of one bucket within the distribution, as a whole percentage.
pub(crate) fn bucket_share(bucket: &RiskBucket, buckets: &[RiskBucket]) -> u64 {
    let total: u64 = buckets.iter().map(|b| b.value).sum();
    if total == 0 {
        return 0;
    }
    (bucket.value * 100 + total / 2) / total
}

#[component]
pub fn DashboardPage(api: ApiClient) -> impl IntoView {
    let stats = RwSignal::new(None::<AuditStats>);
    let load_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.audit_stats().await {
                Ok(loaded) => stats.set(Some(loaded)),
                Err(e) => {
                    leptos::logging::warn!("stats load failed: {e}");
                    load_error.set(Some(e.display_message()));
                }
            }
        });
    });

    view! {
        <div class="page page--dashboard">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <p>"Prompt traffic and risk at a glance."</p>
            </header>
            {move || load_error.get().map(|message| view! { <p class="page__error">{message}</p> })}
            {move || match stats.get() {
                None if load_error.get().is_none() => view! { <p class="page__loading">"Loading..."</p> }.into_any(),
                None => ().into_any(),
                Some(stats) => view! { <StatsPanel stats=stats/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StatsPanel(stats: AuditStats) -> impl IntoView {
    let rate = format!("{:.1}%", block_rate(&stats));
    let average = format!("{:.1}", stats.average_risk_score);
    let buckets = stats.risk_distribution.clone();
    view! {
        <div class="stat-grid">
            <div class="stat-tile">
                <span>"Total requests"</span>
                <strong>{stats.total_requests}</strong>
            </div>
            <div class="stat-tile">
                <span>"Blocked"</span>
                <strong>{stats.blocked_requests}</strong>
                <small>{rate}</small>
            </div>
            <div class="stat-tile">
                <span>"Average risk"</span>
                <strong>{average}</strong>
            </div>
            <div class="stat-tile">
                <span>"Today"</span>
                <strong>{stats.requests_today}</strong>
            </div>
        </div>
        <section class="card">
            <h2>"Risk distribution"</h2>
            <ul class="risk-distribution">
                {stats
                    .risk_distribution
                    .into_iter()
                    .map(|bucket| {
                        let share = bucket_share(&bucket, &buckets);
                        view! {
                            <li>
                                <span>{bucket.name}</span>
                                <span>{format!("{} ({share}%)", bucket.value)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
        <section class="card">
            <h2>"Requests over time"</h2>
            <table class="daily-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Requests"</th>
                        <th>"Blocked"</th>
                    </tr>
                </thead>
                <tbody>
                    {stats.requests_over_time.into_iter().map(daily_row).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

fn daily_row(day: DailyRequests) -> impl IntoView {
    view! {
        <tr>
            <td>{day.date}</td>
            <td>{day.requests}</td>
            <td>{day.blocked}</td>
        </tr>
    }
}
