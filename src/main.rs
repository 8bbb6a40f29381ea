//! TopGrid Frontend Entry Point

use leptos::prelude::*;
use topgrid_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
