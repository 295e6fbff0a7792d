use super::*;

#[test]
fn unmounted_guard_is_pending_regardless_of_session() {
    for authenticated in [false, true] {
        for route in AppRoute::NAV {
            assert_eq!(guarded_view(false, authenticated, route), GuardView::Pending);
        }
    }
}

#[test]
fn mounted_authenticated_visitor_gets_the_shell() {
    for route in AppRoute::NAV {
        assert_eq!(guarded_view(true, true, route), GuardView::Shell, "{route:?}");
    }
}

#[test]
fn mounted_anonymous_visitor_is_redirected_to_login_with_replace() {
    for route in AppRoute::NAV {
        assert_eq!(
            guarded_view(true, false, route),
            GuardView::Redirect { to: "/login", replace: true },
            "{route:?}"
        );
    }
}

#[test]
fn only_the_shell_outcome_renders_children() {
    let renders_children = |view: GuardView| matches!(view, GuardView::Shell);
    assert!(!renders_children(guarded_view(false, true, AppRoute::Audit)));
    assert!(!renders_children(guarded_view(true, false, AppRoute::Audit)));
    assert!(renders_children(guarded_view(true, true, AppRoute::Audit)));
}
