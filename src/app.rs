//! TopGrid App
//!
//! Top-level component: owns the context, switches screens, and runs the
//! shared-grid import on startup.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::{EditorScreen, GridView, HomeScreen};
use crate::context::{AppContext, Screen};
use crate::error::GridError;
use crate::exchange;
use crate::share;
use crate::storage::BrowserStorage;
use crate::store::CollectionStore;

#[component]
pub fn App() -> impl IntoView {
    let store = CollectionStore::load(Rc::new(BrowserStorage::new()));
    let ctx = AppContext::new(store);
    provide_context(ctx);

    // Import a shared grid if the URL carries one; runs once on mount
    Effect::new(move |_| {
        let Some(token) = share::shared_token_from_url() else {
            return;
        };
        match ctx.update_collection(|c| exchange::import_shared(&token, c)) {
            Ok(_) => ctx.flash_status("TopGrid added to your collection!"),
            Err(GridError::DuplicateTitle(_)) => {
                ctx.flash_status("You already have a TopGrid with this title.");
            }
            Err(e) => ctx.flash_status(&e.to_string()),
        }
    });

    view! {
        <div class="app-shell">
            {move || match ctx.screen.get() {
                Screen::Home => view! { <HomeScreen/> }.into_any(),
                Screen::Editor => view! { <EditorScreen/> }.into_any(),
                Screen::View => view! { <GridView/> }.into_any(),
            }}

            {move || {
                ctx.status
                    .get()
                    .map(|message| view! { <div class="status-message">{message}</div> })
            }}
        </div>
    }
}
