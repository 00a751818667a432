//! Pantry Board
//!
//! The fetched item collection behind the "All Pantry Items" table, the
//! pantry count badge, and the row actions that mutate them.
//!
//! Rows are addressed by `RowKey`, never by their current position, so
//! removing one row can't retarget a later removal. Each fetch loaded into
//! the board gets a new generation, so an outcome for a row of an earlier
//! fetch can't hit a row of the current one.

mod badge;
mod listing;
#[cfg(test)]
mod tests;

use chrono::NaiveDate;

use crate::backend::{PantryBackend, RemoveRequest};
use crate::domain::suggestions::warranty_prompt;
use crate::domain::{PantryItem, RowKey};
use crate::error::FetchError;
use crate::render::{remove_prompt, render_table, ItemTable};

pub use badge::CountBadge;
pub use listing::CardListing;

/// Synchronous yes/no prompt supplied by the caller (`window.confirm` in the
/// browser, a closure in tests)
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// User declined, nothing was sent
    Cancelled,
    Removed { key: RowKey, message: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PantryBoard {
    items: Vec<PantryItem>,
    badge: CountBadge,
    generation: u32,
}

impl PantryBoard {
    pub fn new(items: Vec<PantryItem>, badge: CountBadge) -> Self {
        let mut board = Self {
            items: Vec::new(),
            badge,
            generation: 0,
        };
        board.load(items);
        board
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn badge(&self) -> CountBadge {
        self.badge
    }

    pub fn set_badge(&mut self, badge: CountBadge) {
        self.badge = badge;
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Replace the collection with a fresh fetch
    pub fn replace_items(&mut self, items: Vec<PantryItem>) {
        self.generation = self.generation.wrapping_add(1);
        self.load(items);
    }

    fn load(&mut self, items: Vec<PantryItem>) {
        let generation = self.generation;
        self.items = items
            .into_iter()
            .map(|mut item| {
                item.key = item.key.in_generation(generation);
                item
            })
            .collect();
    }

    pub fn find(&self, key: &RowKey) -> Option<&PantryItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn table(&self, today: NaiveDate) -> ItemTable {
        render_table(&self.items, today)
    }

    /// Drop exactly the row with `key` and decrement the badge. Unknown keys
    /// leave the board untouched.
    pub fn remove_row(&mut self, key: &RowKey) -> bool {
        let Some(index) = self.items.iter().position(|item| &item.key == key) else {
            return false;
        };
        self.items.remove(index);
        self.badge.decrement();
        true
    }

    pub fn apply(&mut self, outcome: &RemoveOutcome) -> bool {
        match outcome {
            RemoveOutcome::Cancelled => false,
            RemoveOutcome::Removed { key, .. } => self.remove_row(key),
        }
    }
}

/// Confirm, then ask the backend to remove `item`. The caller applies a
/// `Removed` outcome to its board; on error the board must stay as it was.
pub async fn remove_item<B, C>(backend: &B, confirm: &C, item: &PantryItem) -> Result<RemoveOutcome, FetchError>
where
    B: PantryBackend + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(&remove_prompt(&item.product_name)) {
        return Ok(RemoveOutcome::Cancelled);
    }
    match backend.remove_item(&RemoveRequest::for_item(item)).await {
        Ok(message) => {
            log::info!("[Pantry] Removed {} ({}) from pantry", item.product_name, item.key);
            Ok(RemoveOutcome::Removed {
                key: item.key.clone(),
                message,
            })
        }
        Err(e) => {
            log::error!("[Pantry] Error removing {}: {}", item.product_name, e);
            Err(e)
        }
    }
}

/// Ok(false) when the user declined
pub async fn extend_warranty<B, C>(backend: &B, confirm: &C, product_name: &str, cost: f64) -> Result<bool, FetchError>
where
    B: PantryBackend + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(&warranty_prompt(product_name, cost)) {
        return Ok(false);
    }
    backend.extend_warranty(product_name, cost).await.map_err(|e| {
        log::error!("[Pantry] Error extending warranty for {}: {}", product_name, e);
        e
    })?;
    Ok(true)
}
