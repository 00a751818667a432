//! Pantry Item Commands

use pantry_core::domain::{NewItem, PantryItem};
use pantry_core::{ApiConfig, ItemQuery, PantryBackend, RemoveOutcome};

use super::{backend, BrowserConfirm};

pub async fn list_items(config: &ApiConfig, query: &ItemQuery) -> Result<Vec<PantryItem>, String> {
    pantry_core::fetch_items(&backend(config), query).await.map_err(|e| e.to_string())
}

pub async fn add_item(config: &ApiConfig, item: &NewItem) -> Result<(), String> {
    backend(config).add_item(item).await.map_err(|e| e.to_string())
}

/// Confirms through `window.confirm` first
pub async fn remove_item(config: &ApiConfig, item: &PantryItem) -> Result<RemoveOutcome, String> {
    pantry_core::remove_item(&backend(config), &BrowserConfirm, item)
        .await
        .map_err(|e| e.to_string())
}

/// Ok(false) when the user declined
pub async fn extend_warranty(config: &ApiConfig, product_name: &str, cost: f64) -> Result<bool, String> {
    pantry_core::extend_warranty(&backend(config), &BrowserConfirm, product_name, cost)
        .await
        .map_err(|e| e.to_string())
}
