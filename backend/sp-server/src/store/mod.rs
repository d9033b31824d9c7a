mod error;
mod status_store;

pub use error::{Result as StoreResult, StoreError};
pub use status_store::StatusStore;
