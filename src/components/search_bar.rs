//! Search Bar
//!
//! Free-text pantry search, results shown as storage cards.

use leptos::prelude::*;
use pantry_core::domain::{PantryItem, RowKey};
use pantry_core::{CardListing, ItemQuery};
use wasm_bindgen::JsCast;

use crate::components::{load_listing, ItemActionsModal, ListingView};
use crate::context::AppContext;
use crate::store::use_pantry_store;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_pantry_store();
    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(None::<CardListing>);
    let (acting_on, set_acting_on) = signal(None::<PantryItem>);

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked().trim().to_string();
        if text.is_empty() {
            set_results.set(None);
            return;
        }
        log::debug!("[Search] {}", text);
        load_listing(ctx, store, ItemQuery::Search(text), set_results);
    };

    let on_select = Callback::new(move |key: RowKey| {
        let item = results.with_untracked(|found| found.as_ref().and_then(|l| l.find(&key).cloned()));
        set_acting_on.set(item);
    });
    let on_retry = Callback::new(move |query: ItemQuery| load_listing(ctx, store, query, set_results));

    view! {
        <form class="d-flex mb-3" role="search" on:submit=search>
            <input
                type="search"
                class="form-control me-2"
                placeholder="Search pantry..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_query.set(input.value());
                    }
                }
            />
            <button class="btn btn-outline-success" type="submit">"Search"</button>
        </form>
        {move || results.get().map(|listing| view! {
            <ListingView listing=listing on_select=on_select on_retry=on_retry />
        })}
        <ItemActionsModal item=acting_on set_item=set_acting_on />
    }
}
