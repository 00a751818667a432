//! Allergen Panel
//!
//! Pantry items that match the household allergens, and the form for
//! adding or removing an allergen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::domain::allergen::OTHER_CHOICE;
use pantry_core::domain::{resolve_allergen_choice, AllergenChoice, AllergenItem};
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::store::{notify, use_pantry_store, NoticeKind, PantryStateStoreFields};

const COMMON_ALLERGENS: &[&str] = &[
    "Milk",
    "Eggs",
    "Fish",
    "Shellfish",
    "Tree Nuts",
    "Peanuts",
    "Wheat",
    "Soybeans",
    "Sesame",
];

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded(Vec<AllergenItem>),
    Failed(String),
}

#[component]
pub fn AllergenPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_pantry_store();

    let (state, set_state) = signal(LoadState::Loading);
    let (allergens, set_allergens) = signal(ctx.allergens());
    let (selected, set_selected) = signal(String::new());
    let (custom, set_custom) = signal(String::new());

    let load = move || {
        set_state.set(LoadState::Loading);
        let config = ctx.config();
        spawn_local(async move {
            match commands::list_allergen_items(&config).await {
                Ok(items) => {
                    store.allergen_badge().update(|badge| badge.set(items.len() as u32));
                    set_state.set(LoadState::Loaded(items));
                }
                Err(e) => {
                    log::error!("[Allergen] Error loading allergen items: {}", e);
                    set_state.set(LoadState::Failed(e));
                }
            }
        });
    };

    Effect::new(move |_| load());

    let add = move |_: web_sys::MouseEvent| {
        let selected_value = selected.get_untracked();
        let custom_value = custom.get_untracked();
        let custom_input = (selected_value == OTHER_CHOICE).then_some(custom_value.as_str());
        let allergen = match resolve_allergen_choice(&selected_value, custom_input) {
            AllergenChoice::Add(allergen) => allergen,
            AllergenChoice::NeedsCustom => return,
            AllergenChoice::Invalid(message) => {
                commands::alert(message);
                return;
            }
        };
        let config = ctx.config();
        spawn_local(async move {
            match commands::add_allergen(&config, &allergen).await {
                Ok(()) => {
                    set_allergens.update(|list| {
                        if !list.iter().any(|a| a.eq_ignore_ascii_case(&allergen)) {
                            list.push(allergen.clone());
                        }
                    });
                    set_selected.set(String::new());
                    set_custom.set(String::new());
                    notify(store, NoticeKind::Success, format!("Added {} to your allergens", allergen));
                    load();
                }
                Err(e) => commands::alert(&format!("Error adding allergen: {}", e)),
            }
        });
    };

    let remove = move |allergen: String| {
        if !commands::confirm(&format!("Remove {} from your allergens?", allergen)) {
            return;
        }
        let config = ctx.config();
        spawn_local(async move {
            match commands::remove_allergen(&config, &allergen).await {
                Ok(()) => {
                    set_allergens.update(|list| list.retain(|a| a != &allergen));
                    load();
                }
                Err(e) => commands::alert(&format!("Error removing allergen: {}", e)),
            }
        });
    };

    let matches = move || match state.get() {
        LoadState::Loading => view! {
            <div class="text-center"><div class="spinner-border spinner-border-sm"></div>" Checking pantry..."</div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="text-danger">
                "Error loading allergen data: "
                {message}
                " "
                <button class="btn btn-link btn-sm p-0" on:click=move |_| load()>"Try Again"</button>
            </div>
        }
        .into_any(),
        LoadState::Loaded(items) if items.is_empty() => view! {
            <p class="text-success mb-0">
                <i class="fas fa-check-circle"></i>
                " No allergen items found in your pantry."
            </p>
        }
        .into_any(),
        LoadState::Loaded(items) => view! {
            <ul class="list-group">
                {items.into_iter().map(|item| view! {
                    <li class="list-group-item list-group-item-warning">
                        <strong>{item.product_name}</strong>
                        <br/>
                        <small>"Contains: " {item.allergens}</small>
                    </li>
                }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <section class="allergen-panel card">
            <div class="card-header">
                <i class="fas fa-exclamation-triangle text-danger"></i>
                " Allergen Alerts"
            </div>
            <div class="card-body">
                <div class="mb-3">
                    {move || allergens.get().into_iter().map(|allergen| {
                        let label = allergen.clone();
                        view! {
                            <span class="badge bg-danger me-1">
                                {label}
                                <button
                                    type="button"
                                    class="btn-close btn-close-white btn-sm ms-1"
                                    on:click=move |_| remove(allergen.clone())
                                ></button>
                            </span>
                        }
                    }).collect_view()}
                </div>
                <div class="input-group mb-3">
                    <select
                        class="form-select"
                        prop:value=move || selected.get()
                        on:change=move |ev| set_selected.set(event_target_value(&ev))
                    >
                        <option value="">"Select an allergen"</option>
                        {COMMON_ALLERGENS.iter().map(|a| view! { <option value=*a>{*a}</option> }).collect_view()}
                        <option value=OTHER_CHOICE>"Other..."</option>
                    </select>
                    <Show when=move || selected.get() == OTHER_CHOICE>
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Enter allergen"
                            prop:value=move || custom.get()
                            on:input=move |ev| {
                                if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                                    set_custom.set(input.value());
                                }
                            }
                        />
                    </Show>
                    <button class="btn btn-outline-danger" on:click=add>"Add"</button>
                </div>
                {matches}
            </div>
        </section>
    }
}
