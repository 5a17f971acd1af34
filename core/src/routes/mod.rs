//! Client-side route table.
//!
//! Every view is reachable by path. Navigation is a same-process view
//! transition; nothing here talks to a server.

use serde::Serialize;
use std::fmt;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Upload,
    Processing,
    Results,
    DetailedReport,
    History,
    Settings,
    Help,
    NotFound,
}

/// Page chrome a route is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Layout {
    /// Public header, no sidebar.
    Marketing,
    /// Branding panel beside a form; header actions hidden.
    Auth,
    /// Authenticated shell with sidebar and mobile bottom bar.
    Dashboard,
}

/// Sidebar / bottom-bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

impl Route {
    /// Every routable view, in declaration order (excludes `NotFound`).
    pub const ALL: [Route; 11] = [
        Route::Landing,
        Route::Login,
        Route::Signup,
        Route::Dashboard,
        Route::Upload,
        Route::Processing,
        Route::Results,
        Route::DetailedReport,
        Route::History,
        Route::Settings,
        Route::Help,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Upload => "/upload",
            Route::Processing => "/processing",
            Route::Results => "/results",
            Route::DetailedReport => "/detailed-report",
            Route::History => "/history",
            Route::Settings => "/settings",
            Route::Help => "/help",
            Route::NotFound => "*",
        }
    }

    /// Resolve a location path. Trailing slashes and query strings are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Route::NotFound)
    }

    pub fn layout(&self) -> Layout {
        match self {
            Route::Landing | Route::NotFound => Layout::Marketing,
            Route::Login | Route::Signup => Layout::Auth,
            _ => Layout::Dashboard,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.layout() == Layout::Dashboard
    }

    /// Where the header logo leads from this view.
    pub fn home(&self) -> Route {
        if self.is_authenticated() {
            Route::Dashboard
        } else {
            Route::Landing
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Main sidebar entries (also the mobile bottom bar).
pub const PRIMARY_NAV: [NavItem; 4] = [
    NavItem { label: "Dashboard", route: Route::Dashboard },
    NavItem { label: "Upload Report", route: Route::Upload },
    NavItem { label: "Results", route: Route::Results },
    NavItem { label: "History", route: Route::History },
];

/// Secondary sidebar entries.
pub const BOTTOM_NAV: [NavItem; 2] = [
    NavItem { label: "Settings", route: Route::Settings },
    NavItem { label: "Help", route: Route::Help },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_from_path_normalizes() {
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/history/"), Route::History);
        assert_eq!(Route::from_path("/upload?ref=dash"), Route::Upload);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn test_layouts() {
        assert_eq!(Route::Landing.layout(), Layout::Marketing);
        assert_eq!(Route::Signup.layout(), Layout::Auth);
        assert_eq!(Route::Processing.layout(), Layout::Dashboard);
        assert_eq!(Route::Help.home(), Route::Dashboard);
        assert_eq!(Route::Login.home(), Route::Landing);
    }

    #[test]
    fn test_nav_items_live_in_dashboard_shell() {
        for item in PRIMARY_NAV.iter().chain(BOTTOM_NAV.iter()) {
            assert_eq!(item.route.layout(), Layout::Dashboard);
        }
    }
}
