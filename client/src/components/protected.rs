//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page. Anonymous visitors are sent to `/login` with
//! history replaced; authenticated visitors get the page inside `Layout`.
//! Until the component has mounted on the client, a neutral placeholder is
//! rendered so SSR output (which never sees `localStorage`) hydrates cleanly.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::routes::{AppRoute, GuardOutcome, guard};
use crate::state::session::SessionContext;

/// What the guard component shows for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuardView {
    /// Not mounted yet, so the session is unknown. Children stay unrendered.
    Pending,
    /// Children inside the application shell.
    Shell,
    /// Children stay unrendered while navigation moves away.
    Redirect { to: &'static str, replace: bool },
}

pub(crate) fn guarded_view(mounted: bool, authenticated: bool, route: AppRoute) -> GuardView {
    if !mounted {
        return GuardView::Pending;
    }
    match guard(route, authenticated) {
        GuardOutcome::Render => GuardView::Shell,
        GuardOutcome::Redirect { to, replace } => GuardView::Redirect { to, replace },
    }
}

#[component]
pub fn ProtectedRoute(session: SessionContext, route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    let navigate = use_navigate();
    let guard_session = session.clone();
    Effect::new(move || {
        if let GuardView::Redirect { to, replace } =
            guarded_view(mounted.get(), guard_session.is_authenticated(), route)
        {
            navigate(to, NavigateOptions { replace, ..NavigateOptions::default() });
        }
    });

    move || match guarded_view(mounted.get(), session.is_authenticated(), route) {
        GuardView::Shell => {
            let children = children.clone();
            view! { <Layout session=session.clone()>{children()}</Layout> }.into_any()
        }
        GuardView::Pending | GuardView::Redirect { .. } => view! { <div class="route-pending"></div> }.into_any(),
    }
}
