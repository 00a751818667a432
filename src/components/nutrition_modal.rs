//! Nutrition Modal
//!
//! Pantry-wide nutrition summary: category groups, nutrients covered, gaps
//! and where to find them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pantry_core::domain::NutritionAnalysis;

use crate::commands;
use crate::components::Modal;
use crate::context::AppContext;

#[component]
pub fn NutritionModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (analysis, set_analysis) = signal(None::<NutritionAnalysis>);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        set_analysis.set(None);
        let config = ctx.config();
        spawn_local(async move {
            match commands::nutrition_analysis(&config).await {
                Ok(loaded) => set_analysis.set(Some(loaded)),
                Err(_) => {
                    set_open.set(false);
                    commands::alert("Unable to load nutrition analysis. Please try again.");
                }
            }
        });
    });

    let body = move || match analysis.get() {
        None => view! {
            <div class="text-center py-4"><div class="spinner-border" role="status"></div></div>
        }
        .into_any(),
        Some(analysis) => view! { <AnalysisView analysis=analysis /> }.into_any(),
    };

    view! {
        <Modal title="Pantry Nutrition Analysis" open=open on_close=move |_| set_open.set(false) size="modal-lg">
            {body}
        </Modal>
    }
}

#[component]
fn AnalysisView(analysis: NutritionAnalysis) -> impl IntoView {
    let suggestions = analysis.suggestions();
    let has_gaps = analysis.has_gaps();
    let foundation = analysis.foundation();
    let NutritionAnalysis {
        highlighted_items,
        categories,
        available_nutrients,
        missing_nutrients,
    } = analysis;

    view! {
        <p class="lead">
            {format!("{} highlighted items across {} food groups.", highlighted_items, categories.len())}
        </p>

        <div class="row g-3 mb-3">
            {categories.into_iter().map(|group| {
                let class = group.card_class();
                view! {
                    <div class="col-md-6">
                        <div class=class>
                            <div class="card-body">
                                <h6><i class=group.icon></i>" "{group.category}</h6>
                                <p class="small text-muted mb-1">{group.benefits}</p>
                                <p class="small mb-0">{group.products.join(", ")}</p>
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>

        <h6>"Nutrients covered"</h6>
        <div class="mb-3">
            {available_nutrients.into_iter().map(|n| view! { <span class="badge bg-success me-1">{n}</span> }).collect_view()}
        </div>

        <Show
            when=move || has_gaps
            fallback=|| view! { <p class="text-success">"Your pantry covers every tracked nutrient."</p> }
        >
            <h6>"Nutrients to add"</h6>
            <div class="mb-2">
                {missing_nutrients.iter().map(|n| view! { <span class="badge bg-warning text-dark me-1">{n.clone()}</span> }).collect_view()}
            </div>
            <ul class="list-unstyled small">
                {suggestions.iter().map(|s| view! {
                    <li><strong>{s.nutrient.clone()}</strong>": "{s.sources}</li>
                }).collect_view()}
            </ul>
        </Show>

        <p class="text-muted small">{format!("Your pantry provides a {} nutritional foundation.", foundation)}</p>
    }
}
