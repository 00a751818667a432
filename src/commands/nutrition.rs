//! Nutrition Commands

use pantry_core::domain::NutritionAnalysis;
use pantry_core::{ApiConfig, PantryBackend};

use super::backend;

pub async fn nutrition_analysis(config: &ApiConfig) -> Result<NutritionAnalysis, String> {
    let highlights = backend(config).nutrition_highlights().await.map_err(|e| {
        log::error!("[Nutrition] Error loading nutrition data: {}", e);
        e.to_string()
    })?;
    Ok(NutritionAnalysis::from_highlights(&highlights))
}
