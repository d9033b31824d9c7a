use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Unknown services for organization: {} {location}", ids.join(", "))]
    UnknownServices {
        ids: Vec<String>,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
