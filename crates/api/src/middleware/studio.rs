//! Session gate for the studio.
//!
//! Applied as a layer over the protected `/studio` subtree. Requests with
//! a valid session cookie pass through unmodified; everything else is
//! redirected to the login page. The originally requested path is not
//! preserved across the redirect.

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session::{validate_session_token, SESSION_COOKIE};
use crate::state::AppState;

/// Path unauthenticated studio requests are redirected to.
pub const LOGIN_PATH: &str = "/studio/login";

/// Require a valid studio session; redirect to the login page otherwise.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let valid = session_cookie(&request)
        .and_then(|token| validate_session_token(&token, &state.config.studio).ok());

    match valid {
        Some(_) => next.run(request).await,
        None => {
            tracing::debug!(
                path = %request.uri().path(),
                "No valid studio session; redirecting to login"
            );
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

/// The session cookie value from the request, if present.
fn session_cookie(request: &Request) -> Option<String> {
    let header = request.headers().get(COOKIE)?.to_str().ok()?;
    find_cookie(header, SESSION_COOKIE)
}

/// Extract a named cookie value from a `Cookie` header.
fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_many() {
        let header = "theme=dark; studio_session=abc.def.ghi; lang=en";
        assert_eq!(
            find_cookie(header, SESSION_COOKIE).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn missing_cookie_is_none() {
        assert!(find_cookie("theme=dark; lang=en", SESSION_COOKIE).is_none());
        assert!(find_cookie("", SESSION_COOKIE).is_none());
    }

    #[test]
    fn name_must_match_exactly() {
        let header = "studio_session_old=zzz";
        assert!(find_cookie(header, SESSION_COOKIE).is_none());
    }

    #[test]
    fn value_may_contain_equals() {
        // JWT padding or query-ish values keep everything after the first '='.
        let header = "studio_session=abc=def";
        assert_eq!(find_cookie(header, SESSION_COOKIE).as_deref(), Some("abc=def"));
    }
}
