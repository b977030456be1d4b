//! Bearer-token identification of callers.

use std::collections::HashMap;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use waypoint_core::auth::{Actor, Role};
use waypoint_core::error::DomainError;

use crate::error::{ApiError, AppError};
use crate::state::AppState;

/// Bearer tokens and the role each grants.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiTokens(HashMap<String, Role>);

// Tokens are secrets; only their count is printed.
impl fmt::Debug for ApiTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiTokens")
            .field("count", &self.0.len())
            .finish()
    }
}

impl ApiTokens {
    /// Parses `token:role` pairs separated by commas, e.g.
    /// `"s3cret:admin,guest:member"`. Blank input yields no tokens.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for a pair without a colon, an empty
    /// token, or a role other than `admin` or `member`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let mut tokens = HashMap::new();
        for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (token, role) = pair.split_once(':').ok_or_else(|| {
                AppError::Config("API_TOKENS entries must look like token:role".to_owned())
            })?;
            let token = token.trim();
            if token.is_empty() {
                return Err(AppError::Config("API_TOKENS contains an empty token".to_owned()));
            }
            let role = match role.trim() {
                "admin" => Role::Admin,
                "member" => Role::Member,
                other => {
                    return Err(AppError::Config(format!(
                        "API_TOKENS role must be admin or member, got '{other}'"
                    )));
                }
            };
            tokens.insert(token.to_owned(), role);
        }
        Ok(Self(tokens))
    }

    /// The role granted by `token`, if it is known.
    #[must_use]
    pub fn role_for(&self, token: &str) -> Option<Role> {
        self.0.get(token).copied()
    }
}

/// The caller identified by the request's bearer token.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub Actor);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or_else(|| DomainError::unauthenticated("Authentication is required"))?;

        let role = state
            .tokens
            .role_for(token)
            .ok_or_else(|| DomainError::unauthenticated("Invalid credentials"))?;

        Ok(Self(Actor { role }))
    }
}
