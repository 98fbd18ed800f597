use serde::{Deserialize, Serialize};

/// A cart row as rendered on the page.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartSnapshotItem {
    pub id: String,
    pub price: String,
    #[serde(default)]
    pub currency: Option<String>,
    pub quantity: String,
    #[serde(default)]
    pub subtotal: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CartSnapshotTotal {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub original_total: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CartSnapshot {
    pub items: Vec<CartSnapshotItem>,
    #[serde(default)]
    pub total: Option<CartSnapshotTotal>,
}

impl CartSnapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
