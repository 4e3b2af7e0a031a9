//! Authentication middleware
//!
//! `require_auth` wraps the protected routes. It resolves the bearer token
//! to an account id and stores it in the request extensions, where handlers
//! pick it up through the [`AuthUser`] extractor.
//!
//! Clients only ever see "Token requerido" or "Token inválido". Which check
//! failed is logged server-side.

use crate::auth::TokenService;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use patient_records_shared::AccountId;
use tracing::warn;

pub const TOKEN_REQUIRED: &str = "Token requerido";
pub const TOKEN_INVALID: &str = "Token inválido";

/// Authenticated account resolved from the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub account_id: AccountId,
}

/// Resolve the caller from the `Authorization` header
///
/// The `Bearer ` prefix is optional, a bare token is accepted too.
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
    now: DateTime<Utc>,
) -> Result<AuthUser, ApiError> {
    let header = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::Unauthorized(TOKEN_REQUIRED.to_string())),
    };

    let raw = header.to_str().map_err(|_| {
        warn!("Authorization header is not valid UTF-8");
        ApiError::Unauthorized(TOKEN_INVALID.to_string())
    })?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

    let account_id = tokens.verify(token, now).map_err(|reason| {
        warn!(%reason, "Rejected session token");
        ApiError::Unauthorized(TOKEN_INVALID.to_string())
    })?;

    Ok(AuthUser { account_id })
}

/// Middleware guarding protected routes
///
/// Apply with `axum::middleware::from_fn_with_state`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(request.headers(), state.tokens(), Utc::now())?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| ApiError::Unauthorized(TOKEN_REQUIRED.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Duration;
    use secrecy::Secret;

    fn service() -> TokenService {
        TokenService::new(&Secret::new("middleware-test-secret".to_string()), 86_400)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn message(err: ApiError) -> String {
        match err {
            ApiError::Unauthorized(msg) => msg,
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_header_requires_token() {
        let err = authenticate(&HeaderMap::new(), &service(), Utc::now()).unwrap_err();
        assert_eq!(message(err), TOKEN_REQUIRED);
    }

    #[test]
    fn test_empty_header_requires_token() {
        let err = authenticate(&headers_with(""), &service(), Utc::now()).unwrap_err();
        assert_eq!(message(err), TOKEN_REQUIRED);
    }

    #[test]
    fn test_bearer_token_resolves_subject() {
        let tokens = service();
        let now = Utc::now();
        let token = tokens.issue(9, now).unwrap();

        let user = authenticate(&headers_with(&format!("Bearer {}", token)), &tokens, now).unwrap();
        assert_eq!(user, AuthUser { account_id: 9 });
    }

    #[test]
    fn test_bare_token_is_accepted() {
        let tokens = service();
        let now = Utc::now();
        let token = tokens.issue(9, now).unwrap();

        let user = authenticate(&headers_with(&token), &tokens, now).unwrap();
        assert_eq!(user.account_id, 9);
    }

    #[test]
    fn test_all_token_failures_share_one_message() {
        let tokens = service();
        let now = Utc::now();
        let token = tokens.issue(9, now).unwrap();
        let foreign = TokenService::new(&Secret::new("other".to_string()), 86_400)
            .issue(9, now)
            .unwrap();

        let expired = authenticate(
            &headers_with(&format!("Bearer {}", token)),
            &tokens,
            now + Duration::days(2),
        )
        .unwrap_err();
        let wrong_key =
            authenticate(&headers_with(&format!("Bearer {}", foreign)), &tokens, now).unwrap_err();
        let garbage = authenticate(&headers_with("Bearer nope"), &tokens, now).unwrap_err();

        assert_eq!(message(expired), TOKEN_INVALID);
        assert_eq!(message(wrong_key), TOKEN_INVALID);
        assert_eq!(message(garbage), TOKEN_INVALID);
    }

    #[test]
    fn test_non_utf8_header_is_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap());

        let err = authenticate(&headers, &service(), Utc::now()).unwrap_err();
        assert_eq!(message(err), TOKEN_INVALID);
    }
}
