//! Route table and access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected::ProtectedRoute` renders whatever [`guard`] decides.
//! Keeping the decision a pure function of the route and the session's
//! authentication flag means it holds no state of its own and is re-evaluated
//! on every navigation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Console views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    Analyzer,
    Audit,
    Settings,
}

impl AppRoute {
    /// Shell navigation, in display order.
    pub const NAV: [Self; 4] = [Self::Dashboard, Self::Analyzer, Self::Audit, Self::Settings];

    /// Where `/` lands.
    pub const HOME: Self = Self::Dashboard;

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Analyzer => "/analyzer",
            Self::Audit => "/audit",
            Self::Settings => "/settings",
        }
    }

    /// Path segment used by the router.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Analyzer => "Prompt Analyzer",
            Self::Audit => "Audit Logs",
            Self::Settings => "Settings",
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        [Self::Login, Self::Dashboard, Self::Analyzer, Self::Audit, Self::Settings]
            .into_iter()
            .find(|route| route.path() == trimmed)
    }
}

/// What the guard does with a requested view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the view (inside the shell when protected).
    Render,
    /// Navigate away. `replace` keeps the blocked page out of history.
    Redirect { to: &'static str, replace: bool },
}

/// Decide whether `route` may render for a visitor with the given auth flag.
pub fn guard(route: AppRoute, authenticated: bool) -> GuardOutcome {
    if route.is_protected() && !authenticated {
        GuardOutcome::Redirect {
            to: AppRoute::Login.path(),
            replace: true,
        }
    } else {
        GuardOutcome::Render
    }
}
