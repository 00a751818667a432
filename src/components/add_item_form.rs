//! Add Item Form
//!
//! Modal form for adding a pantry item, optionally prefilled from a scan.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::domain::{NewItem, StorageTag};
use pantry_core::ItemQuery;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::Modal;
use crate::context::AppContext;
use crate::store::{notify, store_set_pantry_count, use_pantry_store, NoticeKind, PantryStateStoreFields};

const CATEGORIES: &[&str] = &["Fruit", "Vegetable", "Dairy", "Meat", "Bakery", "Grains", "Snacks", "Beverages", "Other"];

fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_pantry_store();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(CATEGORIES[0].to_string());
    let (storage, set_storage) = signal(StorageTag::Pantry.label().to_string());
    let (expiry, set_expiry) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let (saving, set_saving) = signal(false);

    // Prefill on open
    Effect::new(move |_| {
        if ctx.add_item_open.get() {
            let prefill = ctx.scan.get().map(|scan| scan.suggested_name).unwrap_or_default();
            set_name.set(prefill);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let product_name = name.get_untracked().trim().to_string();
        if product_name.is_empty() {
            commands::alert("Please enter a product name");
            return;
        }
        let item = NewItem {
            product_name,
            category: category.get_untracked(),
            storage_tags: storage.get_untracked(),
            expiry_date: expiry.get_untracked(),
            quantity: quantity.get_untracked().trim().parse().unwrap_or(1.0),
            barcode: ctx.scan.get_untracked().map(|scan| scan.barcode),
        };
        let config = ctx.config();
        set_saving.set(true);
        spawn_local(async move {
            match commands::add_item(&config, &item).await {
                Ok(()) => {
                    ctx.close_add_item();
                    notify(store, NoticeKind::Success, format!("Added {} to your pantry", item.product_name));
                    // Keep the board and its badge in step with the backend
                    match commands::list_items(&config, &ItemQuery::All).await {
                        Ok(items) => {
                            let count = items.len() as u32;
                            store.board().update(|board| board.replace_items(items));
                            store_set_pantry_count(store, count);
                        }
                        Err(e) => log::error!("[Pantry] Error reloading items after add: {}", e),
                    }
                }
                Err(e) => {
                    log::error!("[Pantry] Error adding item: {}", e);
                    commands::alert("Error adding item to pantry");
                }
            }
            set_saving.set(false);
        });
    };

    let open = Signal::derive(move || ctx.add_item_open.get());

    view! {
        <Modal title="Add Pantry Item" open=open on_close=move |_| ctx.close_add_item()>
            <form id="addItemForm" on:submit=submit>
                <div class="mb-2">
                    <label class="form-label">"Product name"</label>
                    <input
                        type="text"
                        class="form-control"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| if let Some(v) = input_value(&ev) { set_name.set(v) }
                    />
                </div>
                <div class="row g-2 mb-2">
                    <div class="col">
                        <label class="form-label">"Category"</label>
                        <select class="form-select" prop:value=move || category.get() on:change=move |ev| set_category.set(event_target_value(&ev))>
                            {CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="col">
                        <label class="form-label">"Storage"</label>
                        <select class="form-select" prop:value=move || storage.get() on:change=move |ev| set_storage.set(event_target_value(&ev))>
                            {StorageTag::filters().iter().map(|tag| {
                                let label = tag.label().to_string();
                                view! { <option value=label.clone()>{label.clone()}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>
                <div class="row g-2 mb-3">
                    <div class="col">
                        <label class="form-label">"Expiry date"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || expiry.get()
                            on:input=move |ev| if let Some(v) = input_value(&ev) { set_expiry.set(v) }
                        />
                    </div>
                    <div class="col">
                        <label class="form-label">"Quantity"</label>
                        <input
                            type="number"
                            class="form-control"
                            min="0"
                            step="any"
                            prop:value=move || quantity.get()
                            on:input=move |ev| if let Some(v) = input_value(&ev) { set_quantity.set(v) }
                        />
                    </div>
                </div>
                {move || ctx.scan.get().map(|scan| view! {
                    <p class="small text-muted">"Barcode: " {scan.barcode}</p>
                })}
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>"Add to Pantry"</button>
            </form>
        </Modal>
    }
}
