use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid bind address {address}")]
    InvalidBindAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}
