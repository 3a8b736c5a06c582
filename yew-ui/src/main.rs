/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use log::Level;
use netdash_ui::app::App;
use netdash_ui::constants::APP_ROOT_ID;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    let _ = console_log::init_with_level(level);

    // The backend serves index.html with the initial settings values stamped
    // onto this element as data attributes.
    let root = gloo_utils::document()
        .get_element_by_id(APP_ROOT_ID)
        .expect("index.html must contain the app mount element");
    yew::Renderer::<App>::with_root(root).render();
}
