//! Allergens
//!
//! Pantry items flagged against the household allergen list, plus the
//! select/custom input used to add a new allergen.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::item::{text, UNKNOWN_PRODUCT};

/// Select value that switches to the free-text input
pub const OTHER_CHOICE: &str = "other";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAllergenItem {
    pub product_name: Value,
    pub matched_allergens: Value,
    pub allergens: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllergenItem {
    pub product_name: String,
    /// Matched allergens, else the item's full list, else "Unknown"
    pub allergens: String,
}

impl AllergenItem {
    pub fn from_raw(raw: &RawAllergenItem) -> Self {
        Self {
            product_name: text(&raw.product_name).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            allergens: text(&raw.matched_allergens)
                .or_else(|| text(&raw.allergens))
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// What the user picked in the allergen form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllergenChoice {
    /// Add this allergen
    Add(String),
    /// "Other" selected, show the custom input
    NeedsCustom,
    /// Nothing usable; message for the user
    Invalid(&'static str),
}

/// Resolve the select value, or the custom text when `custom` is given
pub fn resolve_allergen_choice(selected: &str, custom: Option<&str>) -> AllergenChoice {
    if let Some(custom) = custom {
        let custom = custom.trim();
        return if custom.is_empty() {
            AllergenChoice::Invalid("Please enter a custom allergen")
        } else {
            AllergenChoice::Add(custom.to_string())
        };
    }
    let selected = selected.trim();
    if selected == OTHER_CHOICE {
        AllergenChoice::NeedsCustom
    } else if selected.is_empty() {
        AllergenChoice::Invalid("Please select an allergen")
    } else {
        AllergenChoice::Add(selected.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_allergen_fallback_chain() {
        let raw: RawAllergenItem = serde_json::from_value(json!({
            "product_name": "Peanut Butter", "matched_allergens": "peanuts", "allergens": "peanuts, soy"
        }))
        .unwrap();
        assert_eq!(AllergenItem::from_raw(&raw).allergens, "peanuts");

        let raw: RawAllergenItem = serde_json::from_value(json!({"product_name": "Bread", "allergens": "gluten"})).unwrap();
        assert_eq!(AllergenItem::from_raw(&raw).allergens, "gluten");

        let raw: RawAllergenItem = serde_json::from_value(json!({"matched_allergens": "NaN"})).unwrap();
        let item = AllergenItem::from_raw(&raw);
        assert_eq!(item.allergens, "Unknown");
        assert_eq!(item.product_name, "Unknown Product");
    }

    #[test]
    fn test_choice_resolution() {
        assert_eq!(resolve_allergen_choice("milk", None), AllergenChoice::Add("milk".to_string()));
        assert_eq!(resolve_allergen_choice("other", None), AllergenChoice::NeedsCustom);
        assert_eq!(resolve_allergen_choice("", None), AllergenChoice::Invalid("Please select an allergen"));
        assert_eq!(resolve_allergen_choice("other", Some("  sesame ")), AllergenChoice::Add("sesame".to_string()));
        assert_eq!(resolve_allergen_choice("other", Some("  ")), AllergenChoice::Invalid("Please enter a custom allergen"));
    }
}
