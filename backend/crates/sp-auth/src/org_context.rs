use crate::Claims;

/// Trusted caller identity for staff routes, derived from verified claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgContext {
    pub org_id: String,
    pub user_id: String,
    pub role: String,
}

impl OrgContext {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            org_id: claims.org_id,
            user_id: claims.sub,
            role: claims.role,
        }
    }

    /// Context used when authentication is disabled (local development)
    pub fn development(org_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            user_id: user_id.into(),
            role: "admin".to_string(),
        }
    }
}
