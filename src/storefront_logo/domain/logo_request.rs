use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::domain::error::DomainError;
use crate::domain::logo::{Logo, LogoType};

pub const WIDTH_RANGE: RangeInclusive<i32> = 50..=300;
pub const HEIGHT_RANGE: RangeInclusive<i32> = 20..=100;
pub const FONT_SIZE_RANGE: RangeInclusive<i32> = 12..=48;
pub const FONT_WEIGHT_RANGE: RangeInclusive<i32> = 100..=900;

// POST /logo/update のボディ。欠けたフィールドは既定値になり、検証で弾かれる
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoRequest {
    #[serde(rename = "type")]
    pub logo_type: String,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub width: i32,
    pub height: i32,
    pub font_family: String,
    pub font_size: i32,
    pub font_weight: i32,
    pub color: String,
    pub layout: String,
}

impl LogoRequest {
    /// Checks the request in a fixed order and reports the first violation.
    ///
    /// Returns the parsed type when it is one of the known kinds. Other
    /// non-empty types pass through; the logo service decides on them.
    pub fn validate(&self) -> Result<Option<LogoType>, DomainError> {
        if self.logo_type.trim().is_empty() {
            return Err(DomainError::MissingLogoType);
        }

        let logo_type = self.logo_type.parse::<LogoType>().ok();
        match logo_type {
            Some(LogoType::Text) if is_blank(&self.text) => return Err(DomainError::MissingText),
            Some(LogoType::Image) if is_blank(&self.image_url) => {
                return Err(DomainError::MissingImageUrl)
            }
            Some(LogoType::Combined) if is_blank(&self.text) || is_blank(&self.image_url) => {
                return Err(DomainError::MissingCombinedContent)
            }
            _ => {}
        }

        if !WIDTH_RANGE.contains(&self.width) || !HEIGHT_RANGE.contains(&self.height) {
            return Err(DomainError::SizeOutOfRange);
        }
        if !FONT_SIZE_RANGE.contains(&self.font_size) {
            return Err(DomainError::FontSizeOutOfRange);
        }
        if !FONT_WEIGHT_RANGE.contains(&self.font_weight) {
            return Err(DomainError::FontWeightOutOfRange);
        }

        Ok(logo_type)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Envelope shared by the update endpoint and every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LogoResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub logo: Option<Logo>,
}

impl LogoResponse {
    pub fn ok(message: impl Into<String>, logo: Logo) -> Self {
        Self {
            success: true,
            message: message.into(),
            logo: Some(logo),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            logo: None,
        }
    }
}
