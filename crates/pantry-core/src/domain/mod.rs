//! Domain Layer
//!
//! Pantry records and the pure rules derived from them.

pub mod allergen;
pub mod freshness;
pub mod item;
pub mod nutrition;
pub mod storage;
pub mod suggestions;

pub use allergen::{resolve_allergen_choice, AllergenChoice, AllergenItem, RawAllergenItem};
pub use freshness::{classify, classify_at, Freshness, FreshnessLevel};
pub use item::{normalize_items, NewItem, PantryItem, RawPantryItem, RowKey};
pub use nutrition::{NutritionAnalysis, NutritionHighlight};
pub use storage::StorageTag;
pub use suggestions::{DisposalClass, UseCases};
