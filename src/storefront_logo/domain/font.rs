use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    pub name: String,
    pub family: String,
    #[serde(default)]
    pub weights: Vec<i32>,
}

impl FontInfo {
    pub fn new(name: &str, family: &str, weights: &[i32]) -> Self {
        Self {
            name: name.to_string(),
            family: family.to_string(),
            weights: weights.to_vec(),
        }
    }
}
