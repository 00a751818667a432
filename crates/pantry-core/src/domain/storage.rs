//! Storage Tags
//!
//! Where an item physically lives. Unknown labels are kept as `Other` and get
//! the generic icon and tip.

use serde::{Deserialize, Serialize};

const FALLBACK_ICON: &str = "fas fa-box";
const FALLBACK_TIP: &str = "Store in appropriate conditions for best quality.";

/// Shown by the per-product "Storage Tips" dialog
pub const GENERAL_STORAGE_TIPS: &[&str] = &[
    "Store in appropriate temperature conditions",
    "Keep away from direct sunlight",
    "Use airtight containers to maintain freshness",
    "Check regularly for signs of spoilage",
    "Follow first-in-first-out rotation",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageTag {
    Refrigerator,
    Freezer,
    Pantry,
    Counter,
    Cupboard,
    Cellar,
    Other(String),
}

impl StorageTag {
    /// Filter buttons in display order
    pub fn filters() -> [StorageTag; 6] {
        [
            StorageTag::Refrigerator,
            StorageTag::Freezer,
            StorageTag::Pantry,
            StorageTag::Counter,
            StorageTag::Cupboard,
            StorageTag::Cellar,
        ]
    }

    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "refrigerator" | "fridge" => StorageTag::Refrigerator,
            "freezer" => StorageTag::Freezer,
            "pantry" => StorageTag::Pantry,
            "counter" => StorageTag::Counter,
            "cupboard" => StorageTag::Cupboard,
            "cellar" => StorageTag::Cellar,
            _ => StorageTag::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StorageTag::Refrigerator => "Refrigerator",
            StorageTag::Freezer => "Freezer",
            StorageTag::Pantry => "Pantry",
            StorageTag::Counter => "Counter",
            StorageTag::Cupboard => "Cupboard",
            StorageTag::Cellar => "Cellar",
            StorageTag::Other(label) => label,
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            StorageTag::Refrigerator => "fas fa-snowflake",
            StorageTag::Freezer => "fas fa-ice-cream",
            StorageTag::Pantry => "fas fa-archive",
            StorageTag::Counter => "fas fa-table",
            StorageTag::Cupboard => "fas fa-box",
            StorageTag::Cellar => "fas fa-wine-bottle",
            StorageTag::Other(_) => FALLBACK_ICON,
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            StorageTag::Refrigerator => "Keep at 32-40°F (0-4°C). Store in sealed containers.",
            StorageTag::Freezer => "Maintain 0°F (-18°C). Use within 3-6 months for best quality.",
            StorageTag::Pantry => "Store in cool, dry place. Check expiration dates regularly.",
            StorageTag::Counter => "Keep at room temperature. Use within 2-3 days for freshness.",
            StorageTag::Cupboard => "Store in airtight containers. Keep away from heat and moisture.",
            StorageTag::Cellar => "Cool, dark environment. Ideal for long-term storage.",
            StorageTag::Other(_) => FALLBACK_TIP,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, StorageTag::Other(_))
    }
}
