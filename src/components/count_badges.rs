//! Count Badge Components
//!
//! Navbar badges for the pantry, allergen and cart counts. Hidden at zero.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::CountBadge;

use crate::commands;
use crate::context::AppContext;
use crate::store::{use_pantry_store, PantryStateStoreFields, PantryStore};

#[component]
fn Badge(#[prop(into)] badge: Signal<CountBadge>, class: &'static str) -> impl IntoView {
    view! {
        <Show when=move || badge.get().is_visible()>
            <span class=class>{move || badge.get().count()}</span>
        </Show>
    }
}

#[component]
pub fn PantryCountBadge() -> impl IntoView {
    let store = use_pantry_store();
    let badge = Signal::derive(move || store.board().with(|board| board.badge()));
    view! { <Badge badge=badge class="badge rounded-pill bg-primary" /> }
}

#[component]
pub fn AllergenCountBadge() -> impl IntoView {
    let store = use_pantry_store();
    let badge = Signal::derive(move || store.allergen_badge().get());
    view! { <Badge badge=badge class="badge rounded-pill bg-danger" /> }
}

#[component]
pub fn CartCountBadge() -> impl IntoView {
    let store = use_pantry_store();
    let badge = Signal::derive(move || store.cart_badge().get());
    view! { <Badge badge=badge class="badge rounded-pill bg-success cart-count" /> }
}

// ========================
// Count Loaders
// ========================

/// Reload the cart badge, e.g. after an add-to-cart
pub fn refresh_cart_count(ctx: AppContext, store: PantryStore) {
    let config = ctx.config();
    spawn_local(async move {
        match commands::cart_count(&config).await {
            Ok(count) => store.cart_badge().update(|badge| badge.set(count)),
            Err(e) => log::error!("[Cart] Error loading cart count: {}", e),
        }
    });
}
