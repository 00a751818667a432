//! API Configuration
//!
//! Backend base URL and endpoint paths. Every field has a default matching the
//! pantry backend routes, so a partial JSON override is enough.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme + host (+ port), no trailing slash required
    pub base_url: String,
    pub all_items: String,
    pub filter_by_tag: String,
    pub order_items: String,
    pub search: String,
    pub add_item: String,
    pub remove_item: String,
    pub allergen_items: String,
    pub add_allergen: String,
    pub remove_allergen: String,
    pub extend_warranty: String,
    pub cart_count: String,
    pub add_to_cart: String,
    pub nutrition_highlights: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            all_items: "/pantry/all_items".to_string(),
            filter_by_tag: "/pantry/filter_by_tag".to_string(),
            order_items: "/pantry/order_items".to_string(),
            search: "/pantry/search".to_string(),
            add_item: "/pantry/add_item".to_string(),
            remove_item: "/pantry/remove_item".to_string(),
            allergen_items: "/pantry/allergen_items".to_string(),
            add_allergen: "/pantry/add_allergen".to_string(),
            remove_allergen: "/pantry/remove_allergen".to_string(),
            extend_warranty: "/pantry/extend_warranty".to_string(),
            cart_count: "/get_cart_count".to_string(),
            add_to_cart: "/add_to_cart".to_string(),
            nutrition_highlights: "/nutrition_highlights".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Parse overrides; keys not present keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Join base URL and path, appending percent-encoded query pairs
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_pairs(query));
        }
        url
    }
}

/// `k=v&k=v` with both sides encoded like `encodeURIComponent`
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", utf8_percent_encode(k, COMPONENT), utf8_percent_encode(v, COMPONENT)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ApiConfig::from_json(r#"{"base_url":"http://localhost:5000","search":"/api/search"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.search, "/api/search");
        assert_eq!(config.remove_item, "/pantry/remove_item");
    }

    #[test]
    fn test_url_joins_and_encodes() {
        let config = ApiConfig::with_base_url("http://localhost:5000/");
        assert_eq!(config.url(&config.all_items, &[]), "http://localhost:5000/pantry/all_items");
        assert_eq!(
            config.url(&config.search, &[("q", "whole milk & eggs")]),
            "http://localhost:5000/pantry/search?q=whole%20milk%20%26%20eggs"
        );
    }

    #[test]
    fn test_relative_base() {
        let config = ApiConfig::default();
        assert_eq!(
            config.url(&config.order_items, &[("order_id", "17"), ("storage_tag", "Freezer")]),
            "/pantry/order_items?order_id=17&storage_tag=Freezer"
        );
    }
}
