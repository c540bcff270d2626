use async_trait::async_trait;

use crate::domain::error::LogoServiceError;
use crate::domain::font::FontInfo;
use crate::domain::logo::Logo;
use crate::domain::logo_request::{LogoRequest, LogoResponse};

// 保存・履歴・フォントの管理はこのトレイトの実装側が担う
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoService: Send + Sync {
    async fn current_logo(&self) -> Result<Logo, LogoServiceError>;

    /// Receives a request that already passed validation.
    async fn update_logo(&self, request: &LogoRequest) -> Result<LogoResponse, LogoServiceError>;

    async fn available_fonts(&self) -> Result<Vec<FontInfo>, LogoServiceError>;

    async fn logo_history(&self) -> Result<Vec<Logo>, LogoServiceError>;
}
