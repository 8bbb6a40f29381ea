//! UI Components
//!
//! One component per screen.

mod editor_screen;
mod grid_view;
mod home_screen;

pub use editor_screen::EditorScreen;
pub use grid_view::GridView;
pub use home_screen::HomeScreen;
