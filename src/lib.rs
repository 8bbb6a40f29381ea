//! TopGrid - a browser editor for ranked-choice grids
//!
//! Core modules:
//! - `models`: TopGrid/Category value types and save-time validation
//! - `store`: collection store, mirrored to localStorage on every mutation
//! - `exchange`: URL-safe share tokens (encode / decode / import)
//! - `storage`: key-value storage abstraction over localStorage
//! - `share` / `export`: browser glue for share links and PNG export
//! - `components` / `app`: Leptos UI

pub mod app;
pub mod components;
pub mod context;
pub mod error;
pub mod exchange;
pub mod export;
pub mod models;
pub mod share;
pub mod storage;
pub mod store;

pub use error::{GridError, GridResult};
pub use models::{Category, TopGrid};
pub use store::CollectionStore;
