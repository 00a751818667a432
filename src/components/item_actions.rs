//! Item Actions Modal
//!
//! Per-product suggestions (use ideas, disposal, storage tips) plus the cart
//! and warranty actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::domain::storage::GENERAL_STORAGE_TIPS;
use pantry_core::domain::suggestions::DISPOSAL_NOTE;
use pantry_core::domain::{DisposalClass, PantryItem, StorageTag, UseCases};
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::{refresh_cart_count, Modal};
use crate::context::AppContext;
use crate::store::{notify, use_pantry_store, NoticeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Ideas,
    Disposal,
    Storage,
    Warranty,
}

const TABS: [(Tab, &str); 4] = [
    (Tab::Ideas, "Use Ideas"),
    (Tab::Disposal, "Disposal"),
    (Tab::Storage, "Storage Tips"),
    (Tab::Warranty, "Warranty"),
];

fn list(entries: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="list-group">
            {entries.iter().map(|entry| view! { <li class="list-group-item">{*entry}</li> }).collect_view()}
        </ul>
    }
}

/// Opened with the item it acts on; `None` closes it
#[component]
pub fn ItemActionsModal(item: ReadSignal<Option<PantryItem>>, set_item: WriteSignal<Option<PantryItem>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_pantry_store();
    let (tab, set_tab) = signal(Tab::Ideas);
    let (warranty_cost, set_warranty_cost) = signal(String::new());

    let open = Signal::derive(move || item.with(Option::is_some));
    let title = move || item.with(|i| i.as_ref().map(|i| i.product_name.clone()).unwrap_or_default());

    let add_to_cart = move |_: web_sys::MouseEvent| {
        let Some(product) = item.get_untracked() else { return };
        let config = ctx.config();
        spawn_local(async move {
            match commands::add_to_cart(&config, &product.product_name, 1).await {
                Ok(()) => {
                    notify(store, NoticeKind::Success, format!("{} added to cart!", product.product_name));
                    refresh_cart_count(ctx, store);
                }
                Err(e) => {
                    log::error!("[Cart] Error adding {}: {}", product.product_name, e);
                    notify(store, NoticeKind::Danger, "Error adding item to cart");
                }
            }
        });
    };

    let extend_warranty = move |_: web_sys::MouseEvent| {
        let Some(product) = item.get_untracked() else { return };
        let Ok(cost) = warranty_cost.get_untracked().trim().parse::<f64>() else {
            commands::alert("Please enter a warranty cost");
            return;
        };
        let config = ctx.config();
        spawn_local(async move {
            match commands::extend_warranty(&config, &product.product_name, cost).await {
                Ok(true) => notify(store, NoticeKind::Success, format!("Warranty extended for {}", product.product_name)),
                Ok(false) => {}
                Err(e) => commands::alert(&format!("Error extending warranty: {}", e)),
            }
        });
    };

    let body = move || {
        let Some(product) = item.get() else {
            return ().into_any();
        };
        match tab.get() {
            Tab::Ideas => list(UseCases::for_product(&product.product_name).ideas()).into_any(),
            Tab::Disposal => view! {
                {list(DisposalClass::for_category(&product.category).options())}
                <p class="text-muted small mt-2">{DISPOSAL_NOTE}</p>
            }
            .into_any(),
            Tab::Storage => {
                let storage = StorageTag::parse(&product.storage);
                view! {
                    <p>
                        <i class=storage.icon_class()></i>
                        " "
                        <strong>{storage.label().to_string()}</strong>
                        ": "
                        {storage.tip()}
                    </p>
                    {list(GENERAL_STORAGE_TIPS)}
                }
                .into_any()
            }
            Tab::Warranty => view! {
                <div class="input-group">
                    <span class="input-group-text">"$"</span>
                    <input
                        type="number"
                        class="form-control"
                        min="0"
                        step="0.01"
                        placeholder="Cost"
                        prop:value=move || warranty_cost.get()
                        on:input=move |ev| {
                            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                                set_warranty_cost.set(input.value());
                            }
                        }
                    />
                    <button class="btn btn-outline-primary" on:click=extend_warranty>"Extend Warranty"</button>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <Modal title="Item Actions" open=open on_close=move |_| set_item.set(None) size="modal-lg">
            <h5 class="mb-3">{title}</h5>
            <ul class="nav nav-tabs mb-3">
                {TABS.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <li class="nav-item">
                            <button
                                class=move || if tab.get() == value { "nav-link active" } else { "nav-link" }
                                on:click=move |_| set_tab.set(value)
                            >
                                {*label}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            {body}
            <button class="btn btn-success mt-3" on:click=add_to_cart>
                <i class="fas fa-cart-plus"></i>
                " Add to Cart"
            </button>
        </Modal>
    }
}
