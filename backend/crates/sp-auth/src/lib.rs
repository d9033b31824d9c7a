pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod org_context;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use org_context::OrgContext;


/// Longest organization identifier accepted from a token
pub const MAX_ORG_ID_LENGTH: usize = 128;
