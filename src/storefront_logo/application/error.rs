use thiserror::Error;
use crate::domain::error::{DomainError, LogoServiceError};
use crate::domain::logo_request::LogoResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Validation failed: {0}")]
    Validation(#[from] DomainError),

    // JSON ボディやクエリが読めなかった場合
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("{operation} failed: {source}")]
    Service {
        operation: &'static str,
        #[source]
        source: LogoServiceError,
    },

    // サービスが Success=false を返した場合。ボディはそのまま返す
    #[error("{operation} was not applied: {}", .response.message)]
    Unsuccessful {
        operation: &'static str,
        response: LogoResponse,
    },
}

impl ApplicationError {
    pub fn service(operation: &'static str, source: LogoServiceError) -> Self {
        ApplicationError::Service { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) | ApplicationError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::Service { source, .. } => match source {
                LogoServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                LogoServiceError::Rejected(_) => StatusCode::BAD_REQUEST,
                LogoServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApplicationError::Unsuccessful { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

// IntoResponse implementation for ApplicationError
use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;
use axum::Json;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApplicationError::Validation(domain_err) => {
                tracing::debug!("Rejected logo request: {}", domain_err);
                LogoResponse::failure(domain_err.to_string())
            }
            ApplicationError::InvalidPayload(msg) => {
                tracing::debug!("Unreadable logo request: {}", msg);
                LogoResponse::failure(msg)
            }
            ApplicationError::Service { operation, source } => match source {
                LogoServiceError::NotFound(msg) | LogoServiceError::Rejected(msg) => {
                    tracing::info!(operation, "Logo service declined: {}", msg);
                    LogoResponse::failure(msg)
                }
                LogoServiceError::Internal(err) => {
                    // 詳細はログのみ。クライアントには汎用メッセージを返す
                    tracing::error!(operation, error = ?err, "Unhandled logo service fault");
                    LogoResponse::failure(INTERNAL_ERROR_MESSAGE)
                }
            },
            ApplicationError::Unsuccessful { operation, response } => {
                tracing::info!(operation, "Logo service reported failure: {}", response.message);
                response
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_bad_request() {
        let response = ApplicationError::from(DomainError::FontSizeOutOfRange).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["Success"], false);
        assert_eq!(json["Message"], "font size must be between 12-48px");
    }

    #[tokio::test]
    async fn test_service_error_kinds_map_to_status() {
        let not_found = ApplicationError::service(
            "GetCurrentLogo",
            LogoServiceError::NotFound("no logo has been configured".to_string()),
        );
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        let json = body_json(not_found.into_response()).await;
        assert_eq!(json["Message"], "no logo has been configured");

        let rejected = ApplicationError::service(
            "UpdateLogo",
            LogoServiceError::Rejected("locked".to_string()),
        );
        assert_eq!(rejected.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_fault_is_not_exposed() {
        let err = ApplicationError::service(
            "GetLogoHistory",
            LogoServiceError::Internal(anyhow!("connection refused: db-primary:5432")),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["Message"], INTERNAL_ERROR_MESSAGE);
        assert!(!json.to_string().contains("db-primary"));
    }

    #[tokio::test]
    async fn test_unsuccessful_response_body_is_passed_through() {
        let err = ApplicationError::Unsuccessful {
            operation: "UpdateLogo",
            response: LogoResponse::failure("logo is locked for editing"),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["Success"], false);
        assert_eq!(json["Message"], "logo is locked for editing");
    }
}
