//! Order Items Panel
//!
//! Items from one order as storage cards, narrowed by storage-tag filter
//! buttons. Changing the order resets the filter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::domain::{PantryItem, RowKey, StorageTag};
use pantry_core::render::{CardGrid, ItemCard};
use pantry_core::{CardListing, ItemQuery};

use crate::commands;
use crate::components::{ItemActionsModal, PlaceholderBlock};
use crate::context::AppContext;
use crate::store::{notify, use_pantry_store, NoticeKind, PantryStore};

/// Fetch a card listing; failures are announced and replace the cards
pub fn load_listing(ctx: AppContext, store: PantryStore, query: ItemQuery, set_listing: WriteSignal<Option<CardListing>>) {
    let config = ctx.config();
    spawn_local(async move {
        let result = commands::list_items(&config, &query).await;
        if let Err(e) = &result {
            log::error!("[Listing] Error loading items: {}", e);
            notify(store, NoticeKind::Danger, format!("Error loading items: {}", e));
        }
        set_listing.set(Some(CardListing::from_fetch(query, result)));
    });
}

#[component]
pub fn OrderItemsPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_pantry_store();
    let orders = ctx.orders();
    let latest = orders.first().cloned().unwrap_or_default();

    let (order_id, set_order_id) = signal(latest.clone());
    let (active_tag, set_active_tag) = signal(None::<StorageTag>);
    let (listing, set_listing) = signal(None::<CardListing>);
    let (acting_on, set_acting_on) = signal(None::<PantryItem>);

    let run = move |query: Option<ItemQuery>| match query {
        Some(query) => load_listing(ctx, store, query, set_listing),
        None => set_listing.set(None),
    };

    // Order change (and first load) clears the tag filter
    Effect::new(move |_| {
        let id = order_id.get();
        set_active_tag.set(None);
        run(ItemQuery::for_order(&id));
    });

    let on_filter = move |tag: StorageTag| {
        let id = order_id.get_untracked();
        let query = ItemQuery::for_storage_filter(Some(&id), tag.label());
        set_active_tag.set(Some(tag));
        run(Some(query));
    };

    let on_select = Callback::new(move |key: RowKey| {
        let item = listing.with_untracked(|listing| listing.as_ref().and_then(|l| l.find(&key).cloned()));
        set_acting_on.set(item);
    });
    let on_retry = Callback::new(move |query: ItemQuery| run(Some(query)));

    let order_options = orders
        .into_iter()
        .map(|id| {
            let selected = id == latest;
            let label = format!("Order #{}", id);
            view! { <option value=id selected=selected>{label}</option> }
        })
        .collect_view();

    let filter_buttons = StorageTag::filters()
        .into_iter()
        .map(|tag| {
            let icon = tag.icon_class();
            let label = tag.label().to_string();
            let clicked = tag.clone();
            let class = move || {
                if active_tag.with(|active| active.as_ref() == Some(&tag)) {
                    "btn btn-sm btn-primary storage-tag active"
                } else {
                    "btn btn-sm btn-outline-primary storage-tag"
                }
            };
            view! {
                <button type="button" class=class on:click=move |_| on_filter(clicked.clone())>
                    <i class=icon></i>
                    " "
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="order-items">
            <div class="d-flex gap-2 align-items-center mb-3">
                <select
                    class="form-select w-auto"
                    id="orderSelect"
                    on:change=move |ev| set_order_id.set(event_target_value(&ev))
                >
                    <option value="">"Select an order"</option>
                    {order_options}
                </select>
                <div class="btn-group flex-wrap">{filter_buttons}</div>
            </div>
            {move || listing.get().map(|listing| view! {
                <ListingView listing=listing on_select=on_select on_retry=on_retry />
            })}
            <ItemActionsModal item=acting_on set_item=set_acting_on />
        </section>
    }
}

/// Cards, or the failure with a Retry that re-runs the same query
#[component]
pub fn ListingView(
    listing: CardListing,
    #[prop(into)] on_select: Callback<RowKey>,
    #[prop(into)] on_retry: Callback<ItemQuery>,
) -> impl IntoView {
    match (listing.grid(), listing.error()) {
        (Some(grid), _) => view! { <CardGridView grid=grid on_select=on_select /> }.into_any(),
        (None, message) => {
            let message = message.unwrap_or_default().to_string();
            let query = listing.query().clone();
            view! {
                <div class="alert alert-danger text-center">
                    <h5>"Error loading items"</h5>
                    <p>{message}</p>
                    <button class="btn btn-outline-danger" on:click=move |_| on_retry.run(query.clone())>"Retry"</button>
                </div>
            }
            .into_any()
        }
    }
}

/// Cards for a listing, or the empty-filter placeholder
#[component]
fn CardGridView(grid: CardGrid, #[prop(into)] on_select: Callback<RowKey>) -> impl IntoView {
    match grid {
        CardGrid::Placeholder(placeholder) => view! { <PlaceholderBlock placeholder=placeholder /> }.into_any(),
        CardGrid::Cards(cards) => view! {
            <div class="row g-3">
                {cards.into_iter().map(|card| view! { <ItemCardView card=card on_select=on_select /> }).collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ItemCardView(card: ItemCard, on_select: Callback<RowKey>) -> impl IntoView {
    let ItemCard {
        key,
        name,
        storage,
        icon_class,
        quantity,
        tip,
    } = card;
    let storage_label = storage.label().to_string();

    view! {
        <div class="col-md-4">
            <div class="card h-100 storage-card">
                <div class="card-body">
                    <h6 class="card-title">
                        <i class=icon_class></i>
                        " "
                        {name}
                    </h6>
                    <p class="card-text mb-1">
                        <span class="badge bg-info text-dark">{storage_label}</span>
                        " "
                        <small class="text-muted">"Qty: " {quantity}</small>
                    </p>
                    <p class="card-text small text-muted">{tip}</p>
                    <button class="btn btn-sm btn-outline-secondary" on:click=move |_| on_select.run(key.clone())>
                        "Actions"
                    </button>
                </div>
            </div>
        </div>
    }
}
