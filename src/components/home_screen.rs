//! Home Screen Component
//!
//! Lists saved TopGrids as clickable preview cards.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::TopGrid;

/// Fallback when none of the previewed categories carries an image
const PLACEHOLDER_IMAGE: &str = "assets/placeholder.png";

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_app_context();

    let grids = move || {
        ctx.with_collection(|c| {
            c.grids()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<(usize, TopGrid)>>()
        })
    };

    view! {
        <section class="home-screen">
            <h1>"TopGrid"</h1>
            <button
                class="create-new-btn"
                on:click=move |_| ctx.open_editor(None)
            >
                "Create New TopGrid"
            </button>
            <div class="topgrids-list">
                <For
                    each=grids
                    key=|(_, grid)| grid.title.clone()
                    children=move |(index, grid)| {
                        view! { <GridCard index=index grid=grid/> }
                    }
                />
            </div>
        </section>
    }
}

/// One saved grid: first few category images plus the title
#[component]
fn GridCard(index: usize, grid: TopGrid) -> impl IntoView {
    let ctx = use_app_context();

    let mut previews: Vec<String> = grid
        .categories
        .iter()
        .take(3)
        .map(|c| c.image_url.clone())
        .filter(|url| !url.is_empty())
        .collect();
    if previews.is_empty() {
        previews.push(PLACEHOLDER_IMAGE.to_string());
    }

    view! {
        <div class="topgrid-item" on:click=move |_| ctx.show_grid(index)>
            <div class="preview-container">
                {previews
                    .into_iter()
                    .map(|url| view! { <img class="preview-image" src=url/> })
                    .collect_view()}
            </div>
            <div class="topgrid-item-title">{grid.title}</div>
        </div>
    }
}
