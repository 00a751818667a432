//! Pantry Core
//!
//! Everything behind the pantry dashboard that isn't DOM:
//! - domain: items, freshness, storage tags, allergens, nutrition
//! - render: table/card view models
//! - backend: collaborator contract and its HTTP client
//! - board: fetched collection, count badges, row actions
//! - camera: scoped capture stream

pub mod backend;
pub mod board;
pub mod camera;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;

pub use backend::{fetch_allergen_items, fetch_items, HttpBackend, ItemQuery, PantryBackend, RemoveRequest};
pub use board::{extend_warranty, remove_item, CardListing, Confirm, CountBadge, PantryBoard, RemoveOutcome};
pub use config::ApiConfig;
pub use error::FetchError;
