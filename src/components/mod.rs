//! UI Components
//!
//! Leptos components for the pantry dashboard.

mod add_item_form;
mod allergen_panel;
mod camera_modal;
mod count_badges;
mod item_actions;
mod modal;
mod notice;
mod nutrition_modal;
mod order_items;
mod pantry_table;
mod search_bar;

pub use add_item_form::AddItemForm;
pub use allergen_panel::AllergenPanel;
pub use camera_modal::CameraModal;
pub use count_badges::{refresh_cart_count, AllergenCountBadge, CartCountBadge, PantryCountBadge};
pub use item_actions::ItemActionsModal;
pub use modal::Modal;
pub use notice::NoticeBar;
pub use nutrition_modal::NutritionModal;
pub use order_items::{load_listing, ListingView, OrderItemsPanel};
pub use pantry_table::{PantryTableModal, PlaceholderBlock};
pub use search_bar::SearchBar;
