//! Modal Component
//!
//! Bootstrap-styled dialog shell shared by every pantry dialog.

use leptos::prelude::*;

/// Dialog with a header, close controls and arbitrary body content
///
/// # Arguments
/// * `size` - extra dialog class such as "modal-lg" or "modal-xl"
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] size: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let dialog_class = StoredValue::new(format!("modal-dialog modal-dialog-scrollable {}", size));

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop fade show" on:click=move |_| on_close.run(())></div>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class=dialog_class.get_value()>
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{title.get_value()}</h5>
                            <button type="button" class="btn-close" on:click=move |_| on_close.run(())></button>
                        </div>
                        <div class="modal-body">{children()}</div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
