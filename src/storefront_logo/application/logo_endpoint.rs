use std::sync::Arc;
use super::error::ApplicationError;

use crate::domain::font::FontInfo;
use crate::domain::logo::Logo;
use crate::domain::logo_request::{LogoRequest, LogoResponse};
use crate::domain::logo_service_trait::LogoService;
use crate::domain::preview::{LogoPreview, PreviewParams};

/// Request/response adapter in front of the logo service.
///
/// Holds no state of its own; every call validates its input, delegates to
/// the injected service and hands back either the payload or an
/// [`ApplicationError`] that the HTTP layer turns into a status code.
pub struct LogoEndpoint {
    logo_service: Arc<dyn LogoService>, // トレイトオブジェクトとして保持
}

impl LogoEndpoint {
    pub fn new(logo_service: Arc<dyn LogoService>) -> Self {
        Self { logo_service }
    }

    pub async fn current_logo(&self) -> Result<Logo, ApplicationError> {
        self.logo_service
            .current_logo()
            .await
            .map_err(|e| ApplicationError::service("GetCurrentLogo", e))
    }

    pub async fn update_logo(&self, request: LogoRequest) -> Result<LogoResponse, ApplicationError> {
        let logo_type = request.validate()?;
        tracing::debug!(
            logo_type = logo_type.map_or(request.logo_type.as_str(), |t| t.as_str()),
            "Logo request passed validation"
        );

        let response = self
            .logo_service
            .update_logo(&request)
            .await
            .map_err(|e| ApplicationError::service("UpdateLogo", e))?;

        if !response.success {
            return Err(ApplicationError::Unsuccessful {
                operation: "UpdateLogo",
                response,
            });
        }
        Ok(response)
    }

    pub async fn available_fonts(&self) -> Result<Vec<FontInfo>, ApplicationError> {
        self.logo_service
            .available_fonts()
            .await
            .map_err(|e| ApplicationError::service("GetAvailableFonts", e))
    }

    pub async fn logo_history(&self) -> Result<Vec<Logo>, ApplicationError> {
        self.logo_service
            .logo_history()
            .await
            .map_err(|e| ApplicationError::service("GetLogoHistory", e))
    }

    // サービスを呼ばず、既定値を補って返すだけ
    pub fn preview_logo(&self, params: PreviewParams) -> LogoPreview {
        LogoPreview::from(params)
    }
}
