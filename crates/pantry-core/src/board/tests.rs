//! Board Integration Tests
//!
//! Row actions against an in-memory backend.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use super::*;
use crate::backend::{fetch_items, ItemQuery};
use crate::domain::{NewItem, NutritionHighlight, RawAllergenItem, RawPantryItem};

#[derive(Default)]
struct FakeBackend {
    items: RefCell<Vec<RawPantryItem>>,
    removed: RefCell<Vec<RemoveRequest>>,
    warranties: RefCell<Vec<(String, f64)>>,
    fail_with: RefCell<Option<FetchError>>,
    calls: Cell<usize>,
}

impl FakeBackend {
    fn with_items(value: serde_json::Value) -> Self {
        Self {
            items: RefCell::new(serde_json::from_value(value).expect("raw items")),
            ..Default::default()
        }
    }

    fn fail(&self, err: FetchError) {
        *self.fail_with.borrow_mut() = Some(err);
    }

    fn check(&self) -> Result<(), FetchError> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_with.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl PantryBackend for FakeBackend {
    async fn list_items(&self, _query: &ItemQuery) -> Result<Vec<RawPantryItem>, FetchError> {
        self.check()?;
        Ok(self.items.borrow().clone())
    }

    async fn add_item(&self, _item: &NewItem) -> Result<(), FetchError> {
        self.check()
    }

    async fn remove_item(&self, request: &RemoveRequest) -> Result<String, FetchError> {
        self.check()?;
        self.removed.borrow_mut().push(request.clone());
        Ok(format!("Removed {} from pantry", request.product_name))
    }

    async fn list_allergen_items(&self) -> Result<Vec<RawAllergenItem>, FetchError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn add_allergen(&self, _allergen: &str) -> Result<(), FetchError> {
        self.check()
    }

    async fn remove_allergen(&self, _allergen: &str) -> Result<(), FetchError> {
        self.check()
    }

    async fn extend_warranty(&self, product_name: &str, cost: f64) -> Result<(), FetchError> {
        self.check()?;
        self.warranties.borrow_mut().push((product_name.to_string(), cost));
        Ok(())
    }

    async fn cart_count(&self) -> Result<u32, FetchError> {
        self.check()?;
        Ok(0)
    }

    async fn add_to_cart(&self, _product_name: &str, _quantity: u32) -> Result<(), FetchError> {
        self.check()
    }

    async fn nutrition_highlights(&self) -> Result<Vec<NutritionHighlight>, FetchError> {
        self.check()?;
        Ok(Vec::new())
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
}

async fn load_board(backend: &FakeBackend) -> PantryBoard {
    let items = fetch_items(backend, &ItemQuery::All).await.expect("items");
    let count = items.len() as u32;
    PantryBoard::new(items, CountBadge::new(count))
}

fn yes(_: &str) -> bool {
    true
}

fn no(_: &str) -> bool {
    false
}

#[tokio::test]
async fn test_remove_deletes_exactly_that_row() {
    let backend = FakeBackend::with_items(json!([
        {"product_name": "Milk"},
        {"product_name": "Bread"},
        {"product_name": "Eggs"}
    ]));
    let mut board = load_board(&backend).await;
    let bread = board.items()[1].clone();

    let outcome = remove_item(&backend, &yes, &bread).await.expect("removed");
    assert!(board.apply(&outcome));

    let names: Vec<_> = board.items().iter().map(|i| i.product_name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Eggs"]);
    assert_eq!(board.badge().count(), 2);
    assert_eq!(backend.removed.borrow()[0].product_name, "Bread");
}

#[tokio::test]
async fn test_keys_survive_earlier_removals() {
    let backend = FakeBackend::with_items(json!([
        {"product_name": "Milk"},
        {"product_name": "Bread"},
        {"product_name": "Eggs"}
    ]));
    let mut board = load_board(&backend).await;
    let milk = board.items()[0].clone();
    let eggs = board.items()[2].clone();

    // both confirmed before either completes
    let first = remove_item(&backend, &yes, &milk).await.unwrap();
    let second = remove_item(&backend, &yes, &eggs).await.unwrap();
    board.apply(&second);
    board.apply(&first);

    assert_eq!(board.items().len(), 1);
    assert_eq!(board.items()[0].product_name, "Bread");
    assert_eq!(board.items()[0].key, RowKey::fetched(1));
}

#[tokio::test]
async fn test_outcome_from_earlier_fetch_is_ignored() {
    let backend = FakeBackend::with_items(json!([
        {"product_name": "Milk"},
        {"product_name": "Bread"},
        {"product_name": "Eggs"}
    ]));
    let mut board = load_board(&backend).await;
    let milk = board.items()[0].clone();

    let outcome = remove_item(&backend, &yes, &milk).await.unwrap();

    // table reopened before the reply was applied; Bread is now position 0
    *backend.items.borrow_mut() = serde_json::from_value(json!([
        {"product_name": "Bread"},
        {"product_name": "Eggs"}
    ]))
    .unwrap();
    board.replace_items(fetch_items(&backend, &ItemQuery::All).await.unwrap());
    board.set_badge(CountBadge::new(2));

    assert!(!board.apply(&outcome));
    let names: Vec<_> = board.items().iter().map(|i| i.product_name.as_str()).collect();
    assert_eq!(names, vec!["Bread", "Eggs"]);
    assert_eq!(board.badge().count(), 2);
    assert_eq!(board.items()[0].key, RowKey::Fetched { generation: 1, seq: 0 });
}

#[tokio::test]
async fn test_outcome_from_current_fetch_after_reload_applies() {
    let backend = FakeBackend::with_items(json!([
        {"product_name": "Milk"},
        {"product_name": "Bread"}
    ]));
    let mut board = load_board(&backend).await;
    board.replace_items(fetch_items(&backend, &ItemQuery::All).await.unwrap());
    let bread = board.items()[1].clone();

    let outcome = remove_item(&backend, &yes, &bread).await.unwrap();

    assert!(board.apply(&outcome));
    assert_eq!(board.items().len(), 1);
    assert_eq!(board.items()[0].product_name, "Milk");
}

#[tokio::test]
async fn test_duplicate_names_remove_only_clicked_row() {
    let backend = FakeBackend::with_items(json!([
        {"id": 1, "product_name": "Apples"},
        {"id": 2, "product_name": "Apples"}
    ]));
    let mut board = load_board(&backend).await;
    let second = board.items()[1].clone();

    let outcome = remove_item(&backend, &yes, &second).await.unwrap();
    board.apply(&outcome);

    assert_eq!(board.items().len(), 1);
    assert_eq!(board.items()[0].key, RowKey::Backend("1".to_string()));
    assert_eq!(backend.removed.borrow()[0].id.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_cancel_sends_nothing() {
    let backend = FakeBackend::with_items(json!([{"product_name": "Milk"}]));
    let mut board = load_board(&backend).await;
    let calls_before = backend.calls.get();
    let milk = board.items()[0].clone();

    let outcome = remove_item(&backend, &no, &milk).await.unwrap();

    assert_eq!(outcome, RemoveOutcome::Cancelled);
    assert!(!board.apply(&outcome));
    assert_eq!(backend.calls.get(), calls_before);
    assert_eq!(board.items().len(), 1);
}

#[tokio::test]
async fn test_failure_leaves_board_untouched() {
    let backend = FakeBackend::with_items(json!([{"product_name": "Milk"}]));
    let board = load_board(&backend).await;
    let before = board.clone();
    backend.fail(FetchError::Rejected("Item Milk not found in pantry".to_string()));

    let err = remove_item(&backend, &yes, &board.items()[0]).await.unwrap_err();

    assert_eq!(err.to_string(), "Item Milk not found in pantry");
    assert_eq!(board, before);
}

#[tokio::test]
async fn test_last_removal_empties_table() {
    let backend = FakeBackend::with_items(json!([{"product_name": "Milk", "expiry_date": "2024-01-01"}]));
    let mut board = load_board(&backend).await;
    board.set_badge(CountBadge::new(0));
    let milk = board.items()[0].clone();

    let outcome = remove_item(&backend, &yes, &milk).await.unwrap();
    board.apply(&outcome);

    assert!(board.is_empty());
    assert!(board.table(today()).rows().is_empty());
    // badge was already 0
    assert_eq!(board.badge().count(), 0);
}

#[tokio::test]
async fn test_prompt_mentions_product() {
    let backend = FakeBackend::with_items(json!([{"product_name": "Milk"}]));
    let board = load_board(&backend).await;
    let seen = RefCell::new(String::new());
    let confirm = |msg: &str| {
        *seen.borrow_mut() = msg.to_string();
        false
    };

    remove_item(&backend, &confirm, &board.items()[0]).await.unwrap();
    assert_eq!(*seen.borrow(), "Are you sure you want to remove \"Milk\" from your pantry?");
}

#[tokio::test]
async fn test_listing_failure_is_surfaced() {
    let backend = FakeBackend::default();
    backend.fail(FetchError::Status { status: 500, message: "Internal Server Error".to_string() });
    let err = fetch_items(&backend, &ItemQuery::All).await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_warranty_requires_confirmation() {
    let backend = FakeBackend::default();
    assert!(!extend_warranty(&backend, &no, "Blender", 19.99).await.unwrap());
    assert!(backend.warranties.borrow().is_empty());
    assert!(extend_warranty(&backend, &yes, "Blender", 19.99).await.unwrap());
    assert_eq!(backend.warranties.borrow()[0], ("Blender".to_string(), 19.99));
}

#[test]
fn test_unknown_key_is_noop() {
    let mut board = PantryBoard::new(Vec::new(), CountBadge::new(3));
    assert!(!board.remove_row(&RowKey::fetched(7)));
    assert_eq!(board.badge().count(), 3);
}
