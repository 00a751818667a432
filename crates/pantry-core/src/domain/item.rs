//! Pantry Item
//!
//! Raw records as the backend sends them, and the normalized item every
//! renderer works from.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_UNIT: &str = "pcs";

/// Backend record. Any field may be missing, null, a number where text is
/// expected, or the literal string "NaN".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPantryItem {
    pub id: Value,
    pub product_name: Value,
    pub description: Value,
    pub category: Value,
    pub quantity: Value,
    pub unit: Value,
    pub expiry_date: Value,
    pub storage_tags: Value,
    pub storage_tag: Value,
    pub price: Value,
    pub order_id: Value,
}

/// Row identity. Backend ids win; otherwise the position the item had in the
/// fetch that produced it. `generation` tells fetches apart, so a position
/// from an older fetch never matches a row of a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKey {
    Backend(String),
    Fetched { generation: u32, seq: usize },
}

impl RowKey {
    pub fn fetched(seq: usize) -> Self {
        RowKey::Fetched { generation: 0, seq }
    }

    /// Element id for the rendered row
    pub fn dom_id(&self) -> String {
        match self {
            RowKey::Backend(id) => format!("pantry-row-id-{}", id),
            RowKey::Fetched { generation, seq } => format!("pantry-row-{}-{}", generation, seq),
        }
    }

    pub fn backend_id(&self) -> Option<&str> {
        match self {
            RowKey::Backend(id) => Some(id),
            RowKey::Fetched { .. } => None,
        }
    }

    /// Re-stamp a positional key with the fetch it now belongs to
    pub fn in_generation(self, generation: u32) -> Self {
        match self {
            RowKey::Fetched { seq, .. } => RowKey::Fetched { generation, seq },
            backend => backend,
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Backend(id) => write!(f, "id:{}", id),
            RowKey::Fetched { generation, seq } => write!(f, "#{}.{}", generation, seq),
        }
    }
}

/// Normalized item with every default applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub key: RowKey,
    pub product_name: String,
    pub description: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    /// None means no expiry is tracked (shown as "N/A")
    pub expiry_date: Option<String>,
    /// Raw storage label, "N/A" when missing
    pub storage: String,
    pub price: f64,
    pub order_id: Option<String>,
}

impl PantryItem {
    pub fn from_raw(raw: &RawPantryItem, seq: usize) -> Self {
        let key = text(&raw.id).map(RowKey::Backend).unwrap_or_else(|| RowKey::fetched(seq));
        Self {
            key,
            product_name: text(&raw.product_name).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            description: text(&raw.description).unwrap_or_default(),
            category: text(&raw.category).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            quantity: number(&raw.quantity).unwrap_or(0.0),
            unit: text(&raw.unit).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            expiry_date: text(&raw.expiry_date),
            storage: text(&raw.storage_tags)
                .or_else(|| text(&raw.storage_tag))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            price: number(&raw.price).unwrap_or(0.0),
            order_id: text(&raw.order_id),
        }
    }

    /// "2 pcs", "1.5 kg"
    pub fn quantity_label(&self) -> String {
        format!("{} {}", format_quantity(self.quantity), self.unit)
    }

    pub fn expiry_label(&self) -> &str {
        self.expiry_date.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Normalize a fetched collection. Never fails; bad fields get defaults.
pub fn normalize_items(raw: &[RawPantryItem]) -> Vec<PantryItem> {
    raw.iter()
        .enumerate()
        .map(|(seq, item)| PantryItem::from_raw(item, seq))
        .collect()
}

pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

/// Text field or None for null, blank, and the "NaN" sentinel
pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(|_| n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Finite number from a JSON number or numeric text
pub(crate) fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Body of the add-item form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub product_name: String,
    pub category: String,
    pub storage_tags: String,
    pub expiry_date: String,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}
