// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for netdash-ui component tests.
//
// Provides mount/cleanup helpers and native-event dispatch so individual
// test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not
// every function is used in every compilation unit.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use netdash_types::MetricSample;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Query a descendant and cast it, panicking with the selector on failure.
pub fn query<T: JsCast>(mount: &web_sys::Element, selector: &str) -> T {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<T>()
}

pub fn has_class(mount: &web_sys::Element, selector: &str, class: &str) -> bool {
    query::<web_sys::Element>(mount, selector)
        .class_list()
        .contains(class)
}

// ---------------------------------------------------------------------------
// Native event dispatch
// ---------------------------------------------------------------------------

fn bubbling_event(kind: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    web_sys::Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Set an input's value and fire a bubbling `input` event, as typing would.
pub fn type_into(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    input.dispatch_event(&bubbling_event("input")).unwrap();
}

/// Select an option and fire a bubbling `change` event.
pub fn choose_option(select: &HtmlSelectElement, value: &str) {
    select.set_value(value);
    select.dispatch_event(&bubbling_event("change")).unwrap();
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A measurement taken at 09:`minute` UTC with the given readings.
pub fn sample(minute: u32, download: f64, upload: f64, ping: f64, packet_loss: f64) -> MetricSample {
    MetricSample {
        id: minute as u64,
        download,
        upload,
        ping,
        packet_loss,
        isp: "Test ISP".to_string(),
        server_id: 1,
        server_name: "Test Server".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, minute, 0).unwrap(),
    }
}
