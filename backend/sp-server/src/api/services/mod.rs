pub mod service_list_response;
pub mod service_request;
pub mod service_response;
#[allow(clippy::module_inception)]
pub mod services;
