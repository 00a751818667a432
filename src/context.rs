//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the page-supplied
//! settings it is built from.

use leptos::prelude::*;
use pantry_core::camera::ScanResult;
use pantry_core::ApiConfig;

/// `<meta name="pantry-api-config" content='{"all_items": "..."}'>`
const CONFIG_META: &str = "pantry-api-config";
/// `<meta name="pantry-orders" content="1003,1002,1001">`, newest first
const ORDERS_META: &str = "pantry-orders";
/// `<meta name="pantry-allergens" content="peanuts,milk">`
const ALLERGENS_META: &str = "pantry-allergens";

/// App-wide settings and dialog triggers provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApiConfig>,
    orders: StoredValue<Vec<String>>,
    allergens: StoredValue<Vec<String>>,
    /// Scan that prefills the add-item form - read
    pub scan: ReadSignal<Option<ScanResult>>,
    set_scan: WriteSignal<Option<ScanResult>>,
    /// Add-item modal visibility - read
    pub add_item_open: ReadSignal<bool>,
    set_add_item_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(config: ApiConfig, orders: Vec<String>, allergens: Vec<String>) -> Self {
        let (scan, set_scan) = signal(None);
        let (add_item_open, set_add_item_open) = signal(false);
        Self {
            config: StoredValue::new(config),
            orders: StoredValue::new(orders),
            allergens: StoredValue::new(allergens),
            scan,
            set_scan,
            add_item_open,
            set_add_item_open,
        }
    }

    /// Resolve from the hosting page
    pub fn from_page() -> Self {
        Self::new(resolve_api_config(), meta_list(ORDERS_META), meta_list(ALLERGENS_META))
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    pub fn orders(&self) -> Vec<String> {
        self.orders.get_value()
    }

    /// The user's allergens as rendered by the server
    pub fn allergens(&self) -> Vec<String> {
        self.allergens.get_value()
    }

    /// Open the add-item form, prefilled when coming from a scan
    pub fn open_add_item(&self, scan: Option<ScanResult>) {
        self.set_scan.set(scan);
        self.set_add_item_open.set(true);
    }

    pub fn close_add_item(&self) {
        self.set_add_item_open.set(false);
        self.set_scan.set(None);
    }
}

// ========================
// Page Settings
// ========================

/// Base URL: build-time `PANTRY_API_BASE`, else the page origin. Endpoint
/// paths may be overridden by a JSON meta tag.
pub fn resolve_api_config() -> ApiConfig {
    let mut config = meta_content(CONFIG_META)
        .and_then(|json| match ApiConfig::from_json(&json) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("[Config] Ignoring malformed {} meta: {}", CONFIG_META, e);
                None
            }
        })
        .unwrap_or_default();

    if config.base_url.is_empty() {
        config.base_url = option_env!("PANTRY_API_BASE")
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_default();
    }
    log::debug!("[Config] API base: {}", config.base_url);
    config
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(&format!("meta[name=\"{}\"]", name)).ok()??;
    meta.get_attribute("content")
}

fn meta_list(name: &str) -> Vec<String> {
    meta_content(name)
        .map(|content| {
            content
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
