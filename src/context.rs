//! Application Context
//!
//! Shared state provided via Leptos Context API: the collection store, the
//! current screen, the selection cursor and the transient status message.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::CollectionStore;

/// Which screen is currently shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Saved-grid list
    Home,
    /// Create/edit form
    Editor,
    /// Rendered grid
    View,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The collection store; CollectionStore holds an Rc, so the signal
    /// lives in local (same-thread) storage
    collection: RwSignal<CollectionStore, LocalStorage>,
    /// Current screen
    pub screen: RwSignal<Screen>,
    /// Index of the grid being viewed/edited; None while creating a new one
    pub cursor: RwSignal<Option<usize>>,
    /// Transient user-visible message
    pub status: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(collection: CollectionStore) -> Self {
        Self {
            collection: RwSignal::new_local(collection),
            screen: RwSignal::new(Screen::Home),
            cursor: RwSignal::new(None),
            status: RwSignal::new(None),
        }
    }

    /// Read access to the collection (reactive)
    pub fn with_collection<R>(&self, f: impl FnOnce(&CollectionStore) -> R) -> R {
        self.collection.with(f)
    }

    /// Mutate the collection and notify subscribers
    pub fn update_collection<R>(&self, f: impl FnOnce(&mut CollectionStore) -> R) -> R {
        self.collection
            .try_update(f)
            .expect("collection signal should be alive")
    }

    /// Go back to the saved-grid list
    pub fn show_home(&self) {
        self.screen.set(Screen::Home);
    }

    /// Open the editor; `cursor` is None for a new grid
    pub fn open_editor(&self, cursor: Option<usize>) {
        self.cursor.set(cursor);
        self.screen.set(Screen::Editor);
    }

    /// Show the grid at `index`
    pub fn show_grid(&self, index: usize) {
        self.cursor.set(Some(index));
        self.screen.set(Screen::View);
    }

    /// Show a status message, cleared after a few seconds unless replaced
    pub fn flash_status(&self, message: &str) {
        let status = self.status;
        let shown = message.to_string();
        status.set(Some(shown.clone()));
        spawn_local(async move {
            TimeoutFuture::new(3_000).await;
            status.update(|s| {
                if s.as_deref() == Some(shown.as_str()) {
                    *s = None;
                }
            });
        });
    }
}

/// Get the app context from Leptos context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
