use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::server::util::token::SESSION_TTL_HOURS;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "authToken";

/// Session cookie carrying a freshly issued token.
///
/// `SameSite=None` requires `Secure`; the frontend is served from another origin.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(time::Duration::hours(SESSION_TTL_HOURS))
        .build()
}

/// Expired, empty session cookie that clears the session in the browser.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, ""))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
