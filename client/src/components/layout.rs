//! Application shell: sidebar navigation, identity card and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::AppRoute;
use crate::state::session::SessionContext;

#[component]
pub fn Layout(session: SessionContext, children: Children) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let sidebar_open = RwSignal::new(false);

    let pathname = location.pathname;
    let active = move || AppRoute::from_path(&pathname.get());

    let email_session = session.clone();
    let email = move || email_session.identity().map(|i| i.email).unwrap_or_default();
    let plan_session = session.clone();
    let plan = move || {
        plan_session
            .identity()
            .map(|i| format!("{} Plan", i.plan))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.logout();
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="app-shell">
            <button
                class="app-shell__toggle"
                on:click=move |_| sidebar_open.update(|open| *open = !*open)
            >
                {move || if sidebar_open.get() { "Close" } else { "Menu" }}
            </button>
            <aside class=move || {
                if sidebar_open.get() { "app-shell__sidebar app-shell__sidebar--open" } else { "app-shell__sidebar" }
            }>
                <div class="app-shell__brand">
                    <h1>"AI Security"</h1>
                    <p>"Trust & Security Layer"</p>
                </div>
                <nav class="app-shell__nav">
                    {AppRoute::NAV
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href={item.path()}
                                    class=move || {
                                        if active() == Some(item) { "nav-item nav-item--active" } else { "nav-item" }
                                    }
                                    on:click=move |_| sidebar_open.set(false)
                                >
                                    {item.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="app-shell__identity">
                    <p class="app-shell__email">{email}</p>
                    <p class="app-shell__plan">{plan}</p>
                    <button class="app-shell__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="app-shell__main">{children()}</main>
        </div>
    }
}
