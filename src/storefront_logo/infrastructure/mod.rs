pub mod axum_handler;
pub mod config;
pub mod error;
pub mod in_memory_logo_service;
