//! Notice Component
//!
//! Renders the store's transient notice; `store::notify` handles expiry.

use leptos::prelude::*;

use crate::store::{dismiss_notice, use_pantry_store, PantryStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_pantry_store();

    view! {
        {move || store.notice().get().map(|notice| view! {
            <div class=notice.kind.alert_class() role="alert">
                {notice.text}
                <button type="button" class="btn-close" on:click=move |_| dismiss_notice(store)></button>
            </div>
        })}
    }
}
