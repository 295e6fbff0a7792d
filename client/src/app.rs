//! Root application component with routing and shared services.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::auth::gateway::HttpAuthGateway;
use crate::auth::store::{CredentialStore, LocalStorageStore};
use crate::components::protected::ProtectedRoute;
use crate::config;
use crate::net::api::{ApiClient, GlooTransport};
use crate::pages::{
    analyzer::AnalyzerPage, audit::AuditPage, dashboard::DashboardPage, login::LoginPage, settings::SettingsPage,
};
use crate::routes::AppRoute;
use crate::state::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the credential store, API client and session once, then hands them
/// to pages as props. The session is also provided as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: Arc<dyn CredentialStore> = Arc::new(LocalStorageStore);
    let api = ApiClient::new(config::api_base_url(), store.clone(), Arc::new(GlooTransport));
    let session = SessionContext::new(store, Arc::new(HttpAuthGateway::new(api.clone())));
    provide_context(session.clone());

    let login_session = session.clone();
    let dashboard = guarded(&session, AppRoute::Dashboard, {
        let api = api.clone();
        move || view! { <DashboardPage api=api.clone()/> }.into_any()
    });
    let analyzer = guarded(&session, AppRoute::Analyzer, {
        let api = api.clone();
        move || view! { <AnalyzerPage api=api.clone()/> }.into_any()
    });
    let audit = guarded(&session, AppRoute::Audit, move || view! { <AuditPage api=api.clone()/> }.into_any());
    let settings = guarded(&session, AppRoute::Settings, {
        let session = session.clone();
        move || view! { <SettingsPage session=session.clone()/> }.into_any()
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/console.css"/>
        <Title text="AI Security Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=move || view! { <LoginPage session=login_session.clone()/> }/>
                <Route path=StaticSegment("dashboard") view=dashboard/>
                <Route path=StaticSegment("analyzer") view=analyzer/>
                <Route path=StaticSegment("audit") view=audit/>
                <Route path=StaticSegment("settings") view=settings/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <Redirect
                                path=AppRoute::HOME.path()
                                options=NavigateOptions { replace: true, ..NavigateOptions::default() }
                            />
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Route view that renders `page` behind the session guard.
fn guarded<F>(session: &SessionContext, route: AppRoute, page: F) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static + use<F>
where
    F: Fn() -> AnyView + Clone + Send + Sync + 'static,
{
    let session = session.clone();
    move || {
        let page = page.clone();
        view! {
            <ProtectedRoute session=session.clone() route=route>
                {page()}
            </ProtectedRoute>
        }
        .into_any()
    }
}
