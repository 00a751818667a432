//! View Models
//!
//! Pure renderers turning normalized items into table rows or cards. The UI
//! maps these one-to-one onto elements; nothing here touches the network.

use chrono::NaiveDate;

use crate::domain::{classify, Freshness, PantryItem, RowKey, StorageTag};

pub const TABLE_EMPTY_TITLE: &str = "No pantry items found";
pub const TABLE_EMPTY_HINT: &str = "Start adding items to your pantry!";
pub const CARDS_EMPTY: &str = "No items found for the selected filters.";
pub const TABLE_COLUMNS: [&str; 7] = ["Product", "Category", "Quantity", "Expiry Date", "Storage", "Price", "Actions"];

#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub title: &'static str,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: RowKey,
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: String,
    pub expiry: String,
    pub freshness: Freshness,
    pub storage: String,
    pub price: String,
}

impl TableRow {
    pub fn expiry_class(&self) -> &'static str {
        self.freshness.level.css_class()
    }

    pub fn remove_prompt(&self) -> String {
        remove_prompt(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemTable {
    Placeholder(Placeholder),
    Rows(Vec<TableRow>),
}

impl ItemTable {
    pub fn rows(&self) -> &[TableRow] {
        match self {
            ItemTable::Placeholder(_) => &[],
            ItemTable::Rows(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub key: RowKey,
    pub name: String,
    pub storage: StorageTag,
    pub icon_class: &'static str,
    pub quantity: String,
    pub tip: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardGrid {
    Placeholder(Placeholder),
    Cards(Vec<ItemCard>),
}

impl CardGrid {
    pub fn cards(&self) -> &[ItemCard] {
        match self {
            CardGrid::Placeholder(_) => &[],
            CardGrid::Cards(cards) => cards,
        }
    }
}

pub fn table_placeholder() -> Placeholder {
    Placeholder {
        title: TABLE_EMPTY_TITLE,
        hint: Some(TABLE_EMPTY_HINT),
    }
}

pub fn render_row(item: &PantryItem, today: NaiveDate) -> TableRow {
    TableRow {
        key: item.key.clone(),
        name: item.product_name.clone(),
        description: item.description.clone(),
        category: item.category.clone(),
        quantity: item.quantity_label(),
        expiry: item.expiry_label().to_string(),
        freshness: classify(item.expiry_date.as_deref(), today),
        storage: item.storage.clone(),
        price: item.price_label(),
    }
}

pub fn render_table(items: &[PantryItem], today: NaiveDate) -> ItemTable {
    if items.is_empty() {
        return ItemTable::Placeholder(table_placeholder());
    }
    ItemTable::Rows(items.iter().map(|item| render_row(item, today)).collect())
}

pub fn render_card(item: &PantryItem) -> ItemCard {
    let storage = StorageTag::parse(&item.storage);
    ItemCard {
        key: item.key.clone(),
        name: item.product_name.clone(),
        icon_class: storage.icon_class(),
        tip: storage.tip(),
        storage,
        quantity: crate::domain::item::format_quantity(item.quantity),
    }
}

pub fn render_cards(items: &[PantryItem]) -> CardGrid {
    if items.is_empty() {
        return CardGrid::Placeholder(Placeholder { title: CARDS_EMPTY, hint: None });
    }
    CardGrid::Cards(items.iter().map(render_card).collect())
}

pub fn remove_prompt(product_name: &str) -> String {
    format!("Are you sure you want to remove \"{}\" from your pantry?", product_name)
}
