use thiserror::Error;

// 入力検証のエラー。メッセージはそのままクライアントに返す
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("LOGO type cannot be empty")]
    MissingLogoType,

    #[error("unsupported LOGO type: {0}")]
    UnsupportedLogoType(String),

    #[error("text is required for a text logo")]
    MissingText,

    #[error("image URL is required for an image logo")]
    MissingImageUrl,

    #[error("text and image URL are required for a combined logo")]
    MissingCombinedContent,

    #[error("size out of allowed range")]
    SizeOutOfRange,

    #[error("font size must be between 12-48px")]
    FontSizeOutOfRange,

    #[error("font weight must be between 100-900")]
    FontWeightOutOfRange,
}

// サービス境界のエラー種別
#[derive(Error, Debug)]
pub enum LogoServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Rejected(String),

    // 想定外の障害。内容はログにのみ出す
    #[error("logo service fault: {0:#}")]
    Internal(#[from] anyhow::Error),
}
