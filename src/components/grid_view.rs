//! Grid View Component
//!
//! Renders the selected TopGrid and hosts the edit / share / export / back
//! actions. The rendered region carries a fixed DOM id so the exporter can
//! capture exactly what is displayed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::export;
use crate::share;

/// DOM id of the exportable grid region
const GRID_REGION_ID: &str = "grid-container";

#[component]
pub fn GridView() -> impl IntoView {
    let ctx = use_app_context();

    let current = move || {
        ctx.cursor
            .get()
            .and_then(|i| ctx.with_collection(|c| c.get(i).cloned()))
    };

    let edit_grid = move |_| {
        if let Some(index) = ctx.cursor.get_untracked() {
            ctx.open_editor(Some(index));
        }
    };

    let share_grid = move |_| {
        let grid = ctx
            .cursor
            .get_untracked()
            .and_then(|i| ctx.with_collection(|c| c.get(i).cloned()));
        let Some(grid) = grid else { return };
        let Some(link) = share::shareable_link(&grid) else {
            ctx.flash_status("Could not build a shareable link");
            return;
        };
        spawn_local(async move {
            match share::copy_to_clipboard(&link).await {
                Ok(()) => ctx.flash_status("Shareable link copied to clipboard!"),
                Err(e) => ctx.flash_status(&format!("Failed to copy link: {}", e)),
            }
        });
    };

    let export_grid = move |_| {
        spawn_local(async move {
            if let Err(e) = export::export_element_as_png(GRID_REGION_ID, "topgrid.png").await {
                log::error!("Error capturing the image: {}", e);
                ctx.flash_status("Export failed");
            }
        });
    };

    view! {
        <section class="grid-screen">
            <div class="grid-actions">
                <button class="edit-btn" on:click=edit_grid>"Edit"</button>
                <button class="share-btn" on:click=share_grid>"Share"</button>
                <button class="export-btn" on:click=export_grid>"Export"</button>
                <button class="back-to-home-btn" on:click=move |_| ctx.show_home()>
                    "Back to Home"
                </button>
            </div>

            <div id=GRID_REGION_ID class="grid-container">
                {move || {
                    current().map(|grid| {
                        view! {
                            <h1 class="grid-title">{grid.title.clone()}</h1>
                            <div class="grid">
                                {grid
                                    .categories
                                    .iter()
                                    .map(|category| {
                                        view! {
                                            <div class="grid-item">
                                                <h2>{category.category_name.clone()}</h2>
                                                <img src=category.image_url.clone()/>
                                                <h3>{category.choice_name.clone()}</h3>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                }}
            </div>
        </section>
    }
}
