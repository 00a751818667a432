//! Card Listing
//!
//! Result of the last order, storage-filter or search fetch. A failure
//! replaces the cards so stale ones never stay up, and keeps the query so the
//! same listing can be retried.

use std::fmt::Display;

use crate::backend::ItemQuery;
use crate::domain::{PantryItem, RowKey};
use crate::render::{render_cards, CardGrid};

#[derive(Debug, Clone, PartialEq)]
pub enum CardListing {
    Loaded { query: ItemQuery, items: Vec<PantryItem> },
    Failed { query: ItemQuery, message: String },
}

impl CardListing {
    pub fn from_fetch<E: Display>(query: ItemQuery, result: Result<Vec<PantryItem>, E>) -> Self {
        match result {
            Ok(items) => CardListing::Loaded { query, items },
            Err(e) => CardListing::Failed {
                query,
                message: e.to_string(),
            },
        }
    }

    /// The query to re-run for Retry
    pub fn query(&self) -> &ItemQuery {
        match self {
            CardListing::Loaded { query, .. } | CardListing::Failed { query, .. } => query,
        }
    }

    pub fn grid(&self) -> Option<CardGrid> {
        match self {
            CardListing::Loaded { items, .. } => Some(render_cards(items)),
            CardListing::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CardListing::Failed { message, .. } => Some(message),
            CardListing::Loaded { .. } => None,
        }
    }

    pub fn find(&self, key: &RowKey) -> Option<&PantryItem> {
        match self {
            CardListing::Loaded { items, .. } => items.iter().find(|item| &item.key == key),
            CardListing::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{normalize_items, RawPantryItem};
    use crate::error::FetchError;
    use serde_json::json;

    fn items() -> Vec<PantryItem> {
        let raw: Vec<RawPantryItem> = serde_json::from_value(json!([
            {"product_name": "Milk", "storage_tags": "Refrigerator"}
        ]))
        .unwrap();
        normalize_items(&raw)
    }

    fn order_query() -> ItemQuery {
        ItemQuery::for_storage_filter(Some("1003"), "Freezer")
    }

    #[test]
    fn test_failure_drops_cards_and_keeps_query() {
        let err: Result<Vec<PantryItem>, FetchError> = Err(FetchError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        });
        let listing = CardListing::from_fetch(order_query(), err);

        assert_eq!(listing.grid(), None);
        assert_eq!(listing.error(), Some("HTTP 500: Internal Server Error"));
        assert_eq!(listing.query(), &order_query());
        assert!(listing.find(&RowKey::fetched(0)).is_none());
    }

    #[test]
    fn test_loaded_renders_cards() {
        let listing = CardListing::from_fetch::<String>(ItemQuery::Search("milk".to_string()), Ok(items()));

        assert_eq!(listing.error(), None);
        let grid = listing.grid().expect("grid");
        assert_eq!(grid.cards().len(), 1);
        assert_eq!(listing.find(&RowKey::fetched(0)).map(|i| i.product_name.as_str()), Some("Milk"));
    }

    #[test]
    fn test_empty_result_is_placeholder_not_error() {
        let listing = CardListing::from_fetch::<String>(ItemQuery::Search("x".to_string()), Ok(Vec::new()));
        assert!(matches!(listing.grid(), Some(CardGrid::Placeholder(_))));
        assert_eq!(listing.error(), None);
    }
}
