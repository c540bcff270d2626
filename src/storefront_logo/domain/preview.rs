use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: i32 = 24;
pub const DEFAULT_COLOR: &str = "#007AFF";
pub const DEFAULT_FONT_WEIGHT: i32 = 700;
pub const DEFAULT_LAYOUT: &str = "left-right";

// GET /logo/preview のクエリ
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreviewParams {
    #[serde(rename = "type", default)]
    pub logo_type: String,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<i32>,
    pub color: Option<String>,
    pub font_weight: Option<i32>,
    pub layout: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogoPreview {
    #[serde(rename = "type")]
    pub logo_type: String,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub font_family: String,
    pub font_size: i32,
    pub color: String,
    pub font_weight: i32,
    pub layout: String,
}

impl From<PreviewParams> for LogoPreview {
    fn from(params: PreviewParams) -> Self {
        Self {
            logo_type: params.logo_type,
            text: params.text,
            image_url: params.image_url,
            font_family: params
                .font_family
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_size: params.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            color: params.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            font_weight: params.font_weight.unwrap_or(DEFAULT_FONT_WEIGHT),
            layout: params.layout.unwrap_or_else(|| DEFAULT_LAYOUT.to_string()),
        }
    }
}
