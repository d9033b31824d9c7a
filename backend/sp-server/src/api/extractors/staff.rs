//! Axum extractor for staff authentication

use crate::{ApiError, ServerState};

use sp_auth::OrgContext;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Authenticated staff member and the organization they act for.
///
/// With authentication enabled the context comes from the bearer token.
/// Otherwise the configured development organization is used.
pub struct Staff(pub OrgContext);

impl FromRequestParts<ServerState> for Staff {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(validator) = state.jwt_validator.as_ref() else {
                log::debug!("Auth disabled, using development org {}", state.dev_org_id);
                return Ok(Staff(OrgContext::development(
                    state.dev_org_id.clone(),
                    state.dev_user_id.clone(),
                )));
            };

            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok());
            let claims = validator.validate_bearer(header)?;

            Ok(Staff(OrgContext::from_claims(claims)))
        }
    }
}
