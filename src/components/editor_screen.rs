//! Editor Screen Component
//!
//! Title input plus dynamic category rows. "Finish & Save" trims the draft,
//! runs it through the collection store and navigates to the grid view on
//! success; any rejection leaves the collection untouched.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Category, TopGrid};

#[component]
pub fn EditorScreen() -> impl IntoView {
    let ctx = use_app_context();
    let cursor = ctx.cursor.get_untracked();

    // Draft state, pre-filled when editing an existing grid
    let (initial_title, initial_rows) = match cursor {
        Some(index) => ctx.with_collection(|c| {
            c.get(index)
                .map(|g| (g.title.clone(), g.categories.clone()))
                .unwrap_or_default()
        }),
        None => (String::new(), Vec::new()),
    };
    let title = RwSignal::new(initial_title);
    let rows = RwSignal::new(initial_rows);

    let add_category = move |_| {
        rows.update(|r| r.push(Category::new("", "", "")));
    };

    let finish_and_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TopGrid::new(
            title.get().trim(),
            rows.get()
                .iter()
                .map(|c| {
                    Category::new(
                        c.category_name.trim(),
                        c.choice_name.trim(),
                        c.image_url.trim(),
                    )
                })
                .collect(),
        );
        match ctx.update_collection(|c| c.upsert(cursor, draft)) {
            Ok(slot) => ctx.show_grid(slot),
            Err(e) => ctx.flash_status(&e.to_string()),
        }
    };

    view! {
        <section class="editor-screen">
            <form class="editor-form" on:submit=finish_and_save>
                <input
                    type="text"
                    class="topgrid-title"
                    placeholder="Enter TopGrid title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />

                <div class="categories">
                    <For
                        each=move || 0..rows.get().len()
                        key=|i| *i
                        children=move |i| view! { <CategoryRow rows=rows index=i/> }
                    />
                </div>

                <button type="button" class="add-category-btn" on:click=add_category>
                    "Add Category"
                </button>
                <button type="submit" class="finish-btn">"Finish & Save"</button>
            </form>
        </section>
    }
}

/// Three text inputs editing the category draft at `index`
#[component]
fn CategoryRow(rows: RwSignal<Vec<Category>>, index: usize) -> impl IntoView {
    view! {
        <div class="category">
            <input
                type="text"
                placeholder="Enter category name"
                prop:value=move || rows.with(|r| r[index].category_name.clone())
                on:input=move |ev| {
                    rows.update(|r| r[index].category_name = event_target_value(&ev))
                }
            />
            <input
                type="text"
                placeholder="Enter your choice"
                prop:value=move || rows.with(|r| r[index].choice_name.clone())
                on:input=move |ev| {
                    rows.update(|r| r[index].choice_name = event_target_value(&ev))
                }
            />
            <input
                type="text"
                placeholder="Enter image URL"
                prop:value=move || rows.with(|r| r[index].image_url.clone())
                on:input=move |ev| {
                    rows.update(|r| r[index].image_url = event_target_value(&ev))
                }
            />
        </div>
    }
}
