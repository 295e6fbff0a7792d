//! Audit log table with client-side search and risk filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the first page of the current user's records once on mount. Search
//! and filtering run over that page only; the summary tiles describe the
//! filtered rows.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{AuditLog, RiskLevel};

pub const PAGE_SIZE: u32 = 50;

/// Risk-level dropdown selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RiskFilter {
    #[default]
    All,
    Level(RiskLevel),
}

impl RiskFilter {
    pub fn parse(raw: &str) -> Self {
        RiskLevel::parse(raw).map_or(Self::All, Self::Level)
    }

    fn matches(self, log: &AuditLog) -> bool {
        match self {
            Self::All => true,
            Self::Level(level) => log.risk_level == level,
        }
    }
}

/// Rows whose prompt or user id contains `search` (case-insensitive) and whose
/// level passes `filter`.
pub(crate) fn filter_logs(logs: &[AuditLog], search: &str, filter: RiskFilter) -> Vec<AuditLog> {
    let needle = search.trim().to_lowercase();
    logs.iter()
        .filter(|log| {
            needle.is_empty()
                || log.prompt.as_deref().unwrap_or_default().to_lowercase().contains(&needle)
                || log.user_id.to_lowercase().contains(&needle)
        })
        .filter(|log| filter.matches(log))
        .cloned()
        .collect()
}

/// Summary tiles above the table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct AuditSummary {
    pub total: usize,
    pub blocked: usize,
    pub critical: usize,
    pub average_risk: f64,
}

impl AuditSummary {
    pub fn from_logs(logs: &[AuditLog]) -> Self {
        if logs.is_empty() {
            return Self::default();
        }
        let total_risk: i64 = logs.iter().map(|log| i64::from(log.risk_score)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_risk = total_risk as f64 / logs.len() as f64;
        Self {
            total: logs.len(),
            blocked: logs.iter().filter(|log| log.blocked).count(),
            critical: logs.iter().filter(|log| log.risk_level == RiskLevel::Critical).count(),
            average_risk,
        }
    }
}

#[component]
pub fn AuditPage(api: ApiClient) -> impl IntoView {
    let logs = RwSignal::new(Vec::<AuditLog>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let filter = RwSignal::new(RiskFilter::All);

    Effect::new(move || {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.audit_logs(0, PAGE_SIZE).await {
                Ok(page) => logs.set(page.content),
                Err(e) => {
                    leptos::logging::warn!("audit log load failed: {e}");
                    load_error.set(Some(e.display_message()));
                }
            }
            loading.set(false);
        });
    });

    let visible = Memo::new(move |_| logs.with(|all| filter_logs(all, &search.get(), filter.get())));
    let summary = move || visible.with(|rows| AuditSummary::from_logs(rows));

    view! {
        <div class="page page--audit">
            <header class="page__header">
                <h1>"Audit Logs"</h1>
                <p>"Every analyzed prompt, with its risk verdict."</p>
            </header>
            <div class="card audit-filters">
                <input
                    class="input-field"
                    type="search"
                    placeholder="Search prompt or user..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select class="input-field" on:change=move |ev| filter.set(RiskFilter::parse(&event_target_value(&ev)))>
                    <option value="all">"All risk levels"</option>
                    {RiskLevel::ALL
                        .into_iter()
                        .map(|level| view! { <option value={level.as_str()}>{level.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || load_error.get().map(|message| view! { <p class="page__error">{message}</p> })}
            <div class="card">
                <table class="audit-table">
                    <thead>
                        <tr>
                            <th>"Time"</th>
                            <th>"User"</th>
                            <th>"Prompt"</th>
                            <th>"Risk"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! { <tr><td colspan="5">"Loading..."</td></tr> }.into_any();
                            }
                            let rows = visible.get();
                            if rows.is_empty() {
                                return view! { <tr><td colspan="5">"No logs found"</td></tr> }.into_any();
                            }
                            rows.into_iter().map(|log| view! { <AuditRow log=log/> }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
            <div class="audit-summary">
                <div class="stat-tile">
                    <span>"Total"</span>
                    <strong>{move || summary().total}</strong>
                </div>
                <div class="stat-tile">
                    <span>"Blocked"</span>
                    <strong>{move || summary().blocked}</strong>
                </div>
                <div class="stat-tile">
                    <span>"Critical"</span>
                    <strong>{move || summary().critical}</strong>
                </div>
                <div class="stat-tile">
                    <span>"Avg risk"</span>
                    <strong>{move || format!("{:.0}", summary().average_risk)}</strong>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AuditRow(log: AuditLog) -> impl IntoView {
    let status = if log.blocked { "Blocked" } else { "Allowed" };
    let title = log.block_reason.clone().unwrap_or_default();
    view! {
        <tr>
            <td>{log.timestamp}</td>
            <td>{log.user_id}</td>
            <td class="audit-table__prompt">{log.prompt.unwrap_or_default()}</td>
            <td>
                <span class={log.risk_level.css_class()}>{format!("{} ({})", log.risk_level.as_str(), log.risk_score)}</span>
            </td>
            <td title=title>{status}</td>
        </tr>
    }
}
