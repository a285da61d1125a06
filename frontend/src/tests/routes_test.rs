//! Unit tests for routing and the auth guard

use super::super::routes::*;

#[test]
fn test_known_paths() {
    assert_eq!(Route::from_path("/"), Route::Dashboard);
    assert_eq!(Route::from_path("/login"), Route::Login);
    assert_eq!(Route::from_path("/transactions"), Route::Transactions);
    assert_eq!(Route::from_path("/profile/"), Route::Profile);
    assert_eq!(Route::from_path("/settings"), Route::Settings);
}

#[test]
fn test_unknown_path_goes_to_dashboard() {
    assert_eq!(Route::from_path("/nope"), Route::Dashboard);
    assert_eq!(Route::from_path("/transactions/42"), Route::Dashboard);
}

#[test]
fn test_paths_round_trip() {
    for route in [
        Route::Login,
        Route::Dashboard,
        Route::Transactions,
        Route::Profile,
        Route::Settings,
    ] {
        assert_eq!(Route::from_path(route.path()), route);
    }
}

#[test]
fn test_guard_sends_anonymous_users_to_login() {
    assert_eq!(guard(Route::Dashboard, false), Route::Login);
    assert_eq!(guard(Route::Settings, false), Route::Login);
    assert_eq!(guard(Route::Login, false), Route::Login);
}

#[test]
fn test_guard_keeps_signed_in_users_off_login() {
    assert_eq!(guard(Route::Login, true), Route::Dashboard);
    assert_eq!(guard(Route::Profile, true), Route::Profile);
}

#[test]
fn test_resolve_reports_rewrites() {
    assert_eq!(resolve("/profile", true), (Route::Profile, false));
    assert_eq!(resolve("/profile", false), (Route::Login, true));
    assert_eq!(resolve("/login", true), (Route::Dashboard, true));
    assert_eq!(resolve("/unknown", true), (Route::Dashboard, true));
    assert_eq!(resolve("/", true), (Route::Dashboard, false));
    assert_eq!(resolve("/settings/", true), (Route::Settings, false));
}
