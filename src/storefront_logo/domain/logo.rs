use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoType {
    Text,
    Image,
    Combined,
}

impl LogoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoType::Text => "text",
            LogoType::Image => "image",
            LogoType::Combined => "combined",
        }
    }
}

impl FromStr for LogoType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogoType::Text),
            "image" => Ok(LogoType::Image),
            "combined" => Ok(LogoType::Combined),
            "" => Err(DomainError::MissingLogoType),
            other => Err(DomainError::UnsupportedLogoType(other.to_string())),
        }
    }
}

/// A saved logo configuration as owned by the logo service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub id: u64,
    #[serde(rename = "type")]
    pub logo_type: LogoType,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub width: i32,
    pub height: i32,
    pub font_family: String,
    pub font_size: i32,
    pub font_weight: i32,
    pub color: String,
    pub layout: String,
    pub active: bool,
    pub updated_at: DateTime<Utc>,
}
