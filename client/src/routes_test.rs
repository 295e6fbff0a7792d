use super::*;

// =============================================================
// guard
// =============================================================

#[test]
fn guard_redirects_anonymous_visitor_to_login() {
    assert_eq!(
        guard(AppRoute::Audit, false),
        GuardOutcome::Redirect { to: "/login", replace: true }
    );
}

#[test]
fn guard_renders_protected_view_when_authenticated() {
    assert_eq!(guard(AppRoute::Audit, true), GuardOutcome::Render);
}

#[test]
fn guard_blocks_every_protected_view() {
    for route in AppRoute::NAV {
        assert!(
            matches!(guard(route, false), GuardOutcome::Redirect { .. }),
            "{route:?} rendered for anonymous visitor"
        );
    }
}

#[test]
fn guard_always_renders_login() {
    assert_eq!(guard(AppRoute::Login, false), GuardOutcome::Render);
    assert_eq!(guard(AppRoute::Login, true), GuardOutcome::Render);
}

// =============================================================
// AppRoute
// =============================================================

#[test]
fn from_path_round_trips_known_routes() {
    for route in [AppRoute::Login, AppRoute::Dashboard, AppRoute::Analyzer, AppRoute::Audit, AppRoute::Settings] {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_ignores_trailing_slash_and_rejects_unknown() {
    assert_eq!(AppRoute::from_path("/audit/"), Some(AppRoute::Audit));
    assert_eq!(AppRoute::from_path("/admin"), None);
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(AppRoute::Analyzer.segment(), "analyzer");
}

#[test]
fn home_is_dashboard() {
    assert_eq!(AppRoute::HOME.path(), "/dashboard");
}
