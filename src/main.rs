//! Tudus Frontend Entry Point

use leptos::prelude::*;
use tudus::{logging, App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
