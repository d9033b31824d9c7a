pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod incidents;
pub mod notify;
pub mod public;
pub mod services;
pub mod validation;
