//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::{CountBadge, PantryBoard};
use reactive_stores::Store;

/// How long a notice stays up before it dismisses itself
const NOTICE_MS: u32 = 5_000;

static NEXT_NOTICE: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Danger,
}

impl NoticeKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert-success alert-dismissible notice-toast",
            NoticeKind::Info => "alert alert-info alert-dismissible notice-toast",
            NoticeKind::Danger => "alert alert-danger alert-dismissible notice-toast",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PantryState {
    /// Fetched pantry items plus the pantry count badge
    pub board: PantryBoard,
    /// Items in the pantry matching the user's allergens
    pub allergen_badge: CountBadge,
    pub cart_badge: CountBadge,
    /// Transient message shown top-right
    pub notice: Option<Notice>,
}

/// Type alias for the store
pub type PantryStore = Store<PantryState>;

/// Get the pantry store from context
pub fn use_pantry_store() -> PantryStore {
    expect_context::<PantryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice; it clears itself after a few seconds unless replaced
pub fn notify(store: PantryStore, kind: NoticeKind, text: impl Into<String>) {
    let id = NEXT_NOTICE.fetch_add(1, Ordering::Relaxed);
    store.notice().set(Some(Notice {
        id,
        kind,
        text: text.into(),
    }));
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        // a newer notice owns the slot now
        if store.notice().get_untracked().map(|n| n.id) == Some(id) {
            store.notice().set(None);
        }
    });
}

pub fn dismiss_notice(store: PantryStore) {
    store.notice().set(None);
}

/// Pantry count tracks the full listing on load
pub fn store_set_pantry_count(store: PantryStore, count: u32) {
    store.board().update(|board| board.set_badge(CountBadge::new(count)));
}
