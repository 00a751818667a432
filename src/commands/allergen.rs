//! Allergen Commands

use pantry_core::domain::AllergenItem;
use pantry_core::{ApiConfig, PantryBackend};

use super::backend;

pub async fn list_allergen_items(config: &ApiConfig) -> Result<Vec<AllergenItem>, String> {
    pantry_core::fetch_allergen_items(&backend(config)).await.map_err(|e| e.to_string())
}

pub async fn add_allergen(config: &ApiConfig, allergen: &str) -> Result<(), String> {
    backend(config).add_allergen(allergen).await.map_err(|e| e.to_string())
}

pub async fn remove_allergen(config: &ApiConfig, allergen: &str) -> Result<(), String> {
    backend(config).remove_allergen(allergen).await.map_err(|e| e.to_string())
}
