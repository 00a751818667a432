//! Cart Commands

use pantry_core::{ApiConfig, PantryBackend};

use super::backend;

pub async fn cart_count(config: &ApiConfig) -> Result<u32, String> {
    backend(config).cart_count().await.map_err(|e| e.to_string())
}

pub async fn add_to_cart(config: &ApiConfig, product_name: &str, quantity: u32) -> Result<(), String> {
    backend(config)
        .add_to_cart(product_name, quantity)
        .await
        .map_err(|e| e.to_string())
}
