//! Pantry Dashboard App
//!
//! Navbar with count badges and dialog launchers, search, order items and
//! allergen alerts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::{CountBadge, ItemQuery, PantryBoard};
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    refresh_cart_count, AddItemForm, AllergenCountBadge, AllergenPanel, CameraModal, CartCountBadge, NoticeBar,
    NutritionModal, OrderItemsPanel, PantryCountBadge, PantryTableModal, SearchBar,
};
use crate::context::AppContext;
use crate::store::{PantryState, PantryStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::from_page();
    let store = Store::new(PantryState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    let (pantry_open, set_pantry_open) = signal(false);
    let (nutrition_open, set_nutrition_open) = signal(false);
    let (camera_open, set_camera_open) = signal(false);

    // Initial load: pantry items and their count, cart count
    Effect::new(move |_| {
        let config = ctx.config();
        spawn_local(async move {
            match commands::list_items(&config, &ItemQuery::All).await {
                Ok(items) => {
                    log::info!("[App] Loaded {} pantry items", items.len());
                    let badge = CountBadge::new(items.len() as u32);
                    store.board().set(PantryBoard::new(items, badge));
                }
                Err(e) => log::error!("[App] Error loading pantry: {}", e),
            }
        });
        refresh_cart_count(ctx, store);
    });

    view! {
        <nav class="navbar navbar-expand navbar-light bg-light px-3 mb-3">
            <span class="navbar-brand">"My Pantry"</span>
            <div class="navbar-nav gap-2">
                <button class="btn btn-outline-primary" on:click=move |_| set_pantry_open.set(true)>
                    <i class="fas fa-list"></i>
                    " All Items "
                    <PantryCountBadge />
                </button>
                <button class="btn btn-outline-primary" on:click=move |_| ctx.open_add_item(None)>
                    <i class="fas fa-plus"></i>
                    " Add Item"
                </button>
                <button class="btn btn-outline-primary" on:click=move |_| set_camera_open.set(true)>
                    <i class="fas fa-barcode"></i>
                    " Scan"
                </button>
                <button class="btn btn-outline-primary" on:click=move |_| set_nutrition_open.set(true)>
                    <i class="fas fa-heartbeat"></i>
                    " Nutrition"
                </button>
                <span class="nav-link">
                    <i class="fas fa-exclamation-triangle"></i>
                    " "
                    <AllergenCountBadge />
                </span>
                <span class="nav-link">
                    <i class="fas fa-shopping-cart"></i>
                    " "
                    <CartCountBadge />
                </span>
            </div>
        </nav>

        <main class="container">
            <SearchBar />
            <div class="row g-4">
                <div class="col-lg-8">
                    <OrderItemsPanel />
                </div>
                <div class="col-lg-4">
                    <AllergenPanel />
                </div>
            </div>
        </main>

        <PantryTableModal open=pantry_open set_open=set_pantry_open />
        <NutritionModal open=nutrition_open set_open=set_nutrition_open />
        <CameraModal open=camera_open set_open=set_camera_open />
        <AddItemForm />
        <NoticeBar />
    }
}
