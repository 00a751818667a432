//! Backend Collaborator
//!
//! Request/response contract with the pantry backend. `HttpBackend` speaks
//! it over HTTP; tests plug in an in-memory implementation.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    normalize_items, AllergenItem, NewItem, NutritionHighlight, PantryItem, RawAllergenItem, RawPantryItem,
};
use crate::error::FetchError;

pub use http::HttpBackend;

// ========================
// Queries & Payloads
// ========================

/// Which item listing to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    All,
    ByStorageTag(String),
    Order {
        order_id: String,
        storage_tag: Option<String>,
    },
    Search(String),
}

impl ItemQuery {
    /// Storage filter button: scoped to the selected order when there is one
    pub fn for_storage_filter(order_id: Option<&str>, tag: &str) -> Self {
        match order_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(order_id) => ItemQuery::Order {
                order_id: order_id.to_string(),
                storage_tag: Some(tag.to_string()),
            },
            None => ItemQuery::ByStorageTag(tag.to_string()),
        }
    }

    /// None when no order is selected
    pub fn for_order(order_id: &str) -> Option<Self> {
        let order_id = order_id.trim();
        (!order_id.is_empty()).then(|| ItemQuery::Order {
            order_id: order_id.to_string(),
            storage_tag: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub product_name: String,
    /// Sent when the backend gave the row an id, so duplicates are unambiguous
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RemoveRequest {
    pub fn for_item(item: &PantryItem) -> Self {
        Self {
            product_name: item.product_name.clone(),
            id: item.key.backend_id().map(str::to_string),
        }
    }
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<RawPantryItem>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AllergenItemsResponse {
    #[serde(default)]
    pub items: Vec<RawAllergenItem>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HighlightsResponse {
    #[serde(default)]
    pub highlights: Vec<NutritionHighlight>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CountResponse {
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SuccessResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SuccessResponse {
    /// Backend message on success, `Rejected` otherwise
    pub fn into_result(self) -> Result<String, FetchError> {
        if self.success {
            Ok(self.message.unwrap_or_default())
        } else {
            Err(FetchError::Rejected(self.message.unwrap_or_else(|| "Unknown error".to_string())))
        }
    }
}

// ========================
// Contract
// ========================

#[async_trait(?Send)]
pub trait PantryBackend {
    async fn list_items(&self, query: &ItemQuery) -> Result<Vec<RawPantryItem>, FetchError>;
    async fn add_item(&self, item: &NewItem) -> Result<(), FetchError>;
    /// Ok carries the backend's confirmation message
    async fn remove_item(&self, request: &RemoveRequest) -> Result<String, FetchError>;
    async fn list_allergen_items(&self) -> Result<Vec<RawAllergenItem>, FetchError>;
    async fn add_allergen(&self, allergen: &str) -> Result<(), FetchError>;
    async fn remove_allergen(&self, allergen: &str) -> Result<(), FetchError>;
    async fn extend_warranty(&self, product_name: &str, cost: f64) -> Result<(), FetchError>;
    async fn cart_count(&self) -> Result<u32, FetchError>;
    async fn add_to_cart(&self, product_name: &str, quantity: u32) -> Result<(), FetchError>;
    async fn nutrition_highlights(&self) -> Result<Vec<NutritionHighlight>, FetchError>;
}

/// Read a listing and normalize it
pub async fn fetch_items<B: PantryBackend + ?Sized>(
    backend: &B,
    query: &ItemQuery,
) -> Result<Vec<PantryItem>, FetchError> {
    match backend.list_items(query).await {
        Ok(raw) => {
            let items = normalize_items(&raw);
            log::info!("[Pantry] Loaded {} items for {:?}", items.len(), query);
            Ok(items)
        }
        Err(e) => {
            log::error!("[Pantry] Error loading items for {:?}: {}", query, e);
            Err(e)
        }
    }
}

pub async fn fetch_allergen_items<B: PantryBackend + ?Sized>(backend: &B) -> Result<Vec<AllergenItem>, FetchError> {
    let raw = backend.list_allergen_items().await.map_err(|e| {
        log::error!("[Allergens] Error loading allergen items: {}", e);
        e
    })?;
    Ok(raw.iter().map(AllergenItem::from_raw).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RowKey;

    #[test]
    fn test_storage_filter_scopes_to_order() {
        assert_eq!(
            ItemQuery::for_storage_filter(Some("12"), "Freezer"),
            ItemQuery::Order { order_id: "12".to_string(), storage_tag: Some("Freezer".to_string()) }
        );
        assert_eq!(ItemQuery::for_storage_filter(Some(" "), "Freezer"), ItemQuery::ByStorageTag("Freezer".to_string()));
        assert_eq!(ItemQuery::for_storage_filter(None, "Pantry"), ItemQuery::ByStorageTag("Pantry".to_string()));
        assert_eq!(ItemQuery::for_order(""), None);
    }

    #[test]
    fn test_success_envelope() {
        let ok: SuccessResponse = serde_json::from_str(r#"{"success":true,"message":"Removed Milk from pantry"}"#).unwrap();
        assert_eq!(ok.into_result().unwrap(), "Removed Milk from pantry");
        let rejected: SuccessResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(rejected.into_result(), Err(FetchError::Rejected("Unknown error".to_string())));
    }

    #[test]
    fn test_remove_request_carries_backend_id() {
        let mut item = PantryItem::from_raw(&RawPantryItem::default(), 0);
        item.product_name = "Milk".to_string();
        let body = serde_json::to_value(RemoveRequest::for_item(&item)).unwrap();
        assert_eq!(body, serde_json::json!({"product_name": "Milk"}));

        item.key = RowKey::Backend("9".to_string());
        assert_eq!(RemoveRequest::for_item(&item).id.as_deref(), Some("9"));
    }
}
