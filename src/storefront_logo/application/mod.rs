pub mod error;
pub mod logo_endpoint;
