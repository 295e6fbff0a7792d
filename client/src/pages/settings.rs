//! Read-only account settings.

use leptos::prelude::*;

use crate::auth::token::Identity;
use crate::config;
use crate::state::session::SessionContext;

fn identity_field(session: &SessionContext, pick: fn(Identity) -> String) -> impl Fn() -> String + use<> {
    let session = session.clone();
    move || session.identity().map_or_else(|| "Unknown".to_owned(), pick)
}

#[component]
pub fn SettingsPage(session: SessionContext) -> impl IntoView {
    view! {
        <div class="page page--settings">
            <header class="page__header">
                <h1>"Settings"</h1>
                <p>"Account details from your current session."</p>
            </header>
            <section class="card settings-card">
                <dl>
                    <dt>"Email"</dt>
                    <dd>{identity_field(&session, |i| i.email)}</dd>
                    <dt>"Role"</dt>
                    <dd>{identity_field(&session, |i| i.role)}</dd>
                    <dt>"Plan"</dt>
                    <dd>{identity_field(&session, |i| i.plan)}</dd>
                    <dt>"API endpoint"</dt>
                    <dd>{config::api_base_url()}</dd>
                </dl>
            </section>
        </div>
    }
}
