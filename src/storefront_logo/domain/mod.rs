pub mod error;
pub mod font;
pub mod logo;
pub mod logo_request;
pub mod logo_service_trait;
pub mod preview;
