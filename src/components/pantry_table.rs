//! Pantry Table Modal
//!
//! "All Pantry Items": fetched fresh on every open, one row per item with a
//! freshness-coloured expiry cell and a Remove action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::domain::RowKey;
use pantry_core::render::{ItemTable, Placeholder, TableRow, TABLE_COLUMNS};
use pantry_core::ItemQuery;

use crate::commands;
use crate::components::Modal;
use crate::context::AppContext;
use crate::store::{use_pantry_store, PantryStateStoreFields};

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

#[component]
pub fn PantryTableModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_pantry_store();
    let (state, set_state) = signal(LoadState::Loading);

    let load = move || {
        set_state.set(LoadState::Loading);
        let config = ctx.config();
        spawn_local(async move {
            match commands::list_items(&config, &ItemQuery::All).await {
                Ok(items) => {
                    store.board().update(|board| board.replace_items(items));
                    set_state.set(LoadState::Loaded);
                }
                Err(e) => set_state.set(LoadState::Failed(e)),
            }
        });
    };

    Effect::new(move |_| {
        if open.get() {
            load();
        }
    });

    let on_remove = move |key: RowKey| {
        let Some(item) = store.board().with_untracked(|board| board.find(&key).cloned()) else {
            return;
        };
        let config = ctx.config();
        spawn_local(async move {
            match commands::remove_item(&config, &item).await {
                Ok(outcome) => store.board().update(|board| {
                    board.apply(&outcome);
                }),
                Err(e) => commands::alert(&format!("Error removing item: {}", e)),
            }
        });
    };

    let body = move || match state.get() {
        LoadState::Loading => view! {
            <div class="text-center py-4">
                <div class="spinner-border" role="status"></div>
                <h4>"Loading pantry items..."</h4>
            </div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="alert alert-danger text-center">
                <h5>"Error loading items"</h5>
                <p>{message}</p>
                <button class="btn btn-outline-danger" on:click=move |_| load()>"Retry"</button>
            </div>
        }
        .into_any(),
        LoadState::Loaded => {
            let today = chrono::Local::now().date_naive();
            match store.board().with(|board| board.table(today)) {
                ItemTable::Placeholder(placeholder) => view! { <PlaceholderBlock placeholder=placeholder /> }.into_any(),
                ItemTable::Rows(rows) => view! { <ItemTableView rows=rows on_remove=on_remove /> }.into_any(),
            }
        }
    };

    view! {
        <Modal title="All Pantry Items" open=open on_close=move |_| set_open.set(false) size="modal-xl">
            {body}
        </Modal>
    }
}

#[component]
pub fn PlaceholderBlock(placeholder: Placeholder) -> impl IntoView {
    view! {
        <div class="text-center text-muted py-4">
            <i class="fas fa-box-open fa-3x mb-3"></i>
            <h4>{placeholder.title}</h4>
            {placeholder.hint.map(|hint| view! { <p>{hint}</p> })}
        </div>
    }
}

#[component]
fn ItemTableView(rows: Vec<TableRow>, #[prop(into)] on_remove: Callback<RowKey>) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="table table-striped table-hover align-middle">
                <thead class="table-dark">
                    <tr>{TABLE_COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! { <ItemRow row=row on_remove=on_remove /> }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ItemRow(row: TableRow, on_remove: Callback<RowKey>) -> impl IntoView {
    let expiry_class = row.expiry_class();
    let days_note = row.freshness.days_note();
    let TableRow {
        key,
        name,
        description,
        category,
        quantity,
        expiry,
        storage,
        price,
        ..
    } = row;
    let dom_id = key.dom_id();

    view! {
        <tr id=dom_id>
            <td>
                <strong>{name}</strong>
                <br/>
                <small class="text-muted">{description}</small>
            </td>
            <td><span class="badge bg-secondary">{category}</span></td>
            <td>{quantity}</td>
            <td class=expiry_class>
                {expiry}
                {days_note.map(|note| view! { <br/><small>{note}</small> })}
            </td>
            <td><span class="badge bg-info text-dark">{storage}</span></td>
            <td>{price}</td>
            <td>
                <button
                    class="btn btn-sm btn-outline-danger"
                    title="Remove from pantry"
                    on:click=move |_| on_remove.run(key.clone())
                >
                    <i class="fas fa-trash"></i>
                    " Remove"
                </button>
            </td>
        </tr>
    }
}
