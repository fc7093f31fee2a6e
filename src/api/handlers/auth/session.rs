//! `auth_token` cookie construction and lookup.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

use super::state::AuthConfig;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

/// Cookie carrying a provider-issued access token.
pub(super) fn session_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(config.session_cookie_secure())
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(config.session_ttl_seconds()))
        .build()
}

/// Cookie that tells the browser to drop `auth_token`.
///
/// Always emitted, even when the request carried no cookie.
pub(super) fn clear_session_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .secure(config.session_cookie_secure())
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

/// Session token from the request cookies; an empty value counts as absent.
pub(super) fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(AUTH_COOKIE_NAME)
        .map(Cookie::value)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::auth::state::Environment;
    use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

    #[test]
    fn session_cookie_attributes() {
        let config = AuthConfig::new(Environment::Development);
        let cookie = session_cookie(&config, "token".to_string()).to_string();
        assert!(cookie.starts_with("auth_token=token"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn session_cookie_secure_in_production() {
        let config = AuthConfig::new(Environment::Production);
        let cookie = session_cookie(&config, "token".to_string()).to_string();
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let config = AuthConfig::new(Environment::Development);
        let cookie = clear_session_cookie(&config).to_string();
        assert!(cookie.starts_with("auth_token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn session_token_reads_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; auth_token=abc123"),
        );
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(session_token(&jar), Some("abc123"));
    }

    #[test]
    fn session_token_ignores_missing_or_empty() {
        let jar = CookieJar::from_headers(&HeaderMap::new());
        assert_eq!(session_token(&jar), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("auth_token="));
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(session_token(&jar), None);
    }
}
