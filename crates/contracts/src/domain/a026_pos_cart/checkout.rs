//! Wire DTOs of `POST /checkout`.

use super::aggregate::CartLine;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub items: Vec<CartLine>,
    pub total: f64,
}

/// Материал, остаток которого после продажи упал ниже порога
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockEntry {
    pub name: String,
    pub qty: f64,
}

impl std::fmt::Display for LowStockEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.qty)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutResponse {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    /// `null` and a missing key both mean "nothing is low"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub low: Vec<LowStockEntry>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<LowStockEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<LowStockEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CheckoutResponse {
    /// Server message, if it sent a non-blank one
    pub fn failure_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// `"Sand (3), Gravel (1.5)"`
    pub fn low_stock_summary(&self) -> Option<String> {
        if self.low.is_empty() {
            return None;
        }
        Some(
            self.low
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
