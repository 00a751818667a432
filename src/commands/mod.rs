//! Backend Command Wrappers
//!
//! Frontend bindings to the pantry backend, organized by domain. Each call
//! builds an `HttpBackend` from the current config and flattens errors to
//! `String` for display.

mod allergen;
mod cart;
mod dialog;
mod nutrition;
mod pantry;

use pantry_core::{ApiConfig, HttpBackend};

fn backend(config: &ApiConfig) -> HttpBackend {
    HttpBackend::new(config.clone())
}

// Re-export all public items
pub use allergen::*;
pub use cart::*;
pub use dialog::*;
pub use nutrition::*;
pub use pantry::*;
