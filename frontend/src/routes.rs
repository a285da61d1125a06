//! Path routing and the auth guard.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Transactions,
    Profile,
    Settings,
}

impl Route {
    /// Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/transactions" => Route::Transactions,
            "/profile" => Route::Profile,
            "/settings" => Route::Settings,
            _ => Route::Dashboard,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Transactions => "/transactions",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
        }
    }

    pub fn requires_auth(self) -> bool {
        self != Route::Login
    }
}

/// Where a request for `requested` actually ends up.
pub fn guard(requested: Route, authenticated: bool) -> Route {
    match (requested.requires_auth(), authenticated) {
        (true, false) => Route::Login,
        (false, true) => Route::Dashboard,
        _ => requested,
    }
}

/// Resolves a raw path; the flag is true when the browser URL must be
/// rewritten (unknown path or guard redirect).
pub fn resolve(path: &str, authenticated: bool) -> (Route, bool) {
    let route = guard(Route::from_path(path), authenticated);
    let canonical = path.trim_end_matches('/');
    let target = route.path().trim_end_matches('/');
    (route, canonical != target)
}
