// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the settings form: preset detection, dirty tracking
// and reset.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{choose_option, cleanup, create_mount_point, has_class, query, type_into};
use wasm_bindgen_test::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::time::sleep;
use yew::prelude::*;

use netdash_ui::components::settings_form::{SettingsForm, SettingsSnapshot};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn preset_initial() -> SettingsSnapshot {
    SettingsSnapshot {
        cron: "0 0 * * *".to_string(),
        server: "1.2.3.4".to_string(),
        history: "30".to_string(),
    }
}

#[derive(Properties, PartialEq)]
struct WrapperProps {
    initial: SettingsSnapshot,
}

#[function_component(Wrapper)]
fn wrapper(props: &WrapperProps) -> Html {
    html! { <SettingsForm initial={props.initial.clone()} /> }
}

async fn mount_form(initial: SettingsSnapshot) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps { initial },
    )
    .render();
    sleep(Duration::ZERO).await;
    mount
}

#[wasm_bindgen_test]
async fn preset_cron_starts_on_that_preset_with_field_hidden() {
    let mount = mount_form(preset_initial()).await;

    let select: HtmlSelectElement = query(&mount, "#scheduleSelect");
    assert_eq!(select.value(), "0 0 * * *");
    assert!(has_class(&mount, "#cronInput", "hidden"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unknown_cron_starts_on_custom_with_field_visible() {
    let mount = mount_form(SettingsSnapshot {
        cron: "5 4 * * 1".to_string(),
        server: "1.2.3.4".to_string(),
        history: "30".to_string(),
    })
    .await;

    let select: HtmlSelectElement = query(&mount, "#scheduleSelect");
    assert_eq!(select.value(), "custom");
    assert!(!has_class(&mount, "#cronInput", "hidden"));
    let cron: HtmlInputElement = query(&mount, "#cronInput");
    assert_eq!(cron.value(), "5 4 * * 1");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn editing_a_field_reveals_the_save_bar() {
    let mount = mount_form(preset_initial()).await;
    assert!(!has_class(&mount, "#actionBar", "visible"));

    let server: HtmlInputElement = query(&mount, "#serverInput");
    type_into(&server, "1.2.3.5");
    sleep(Duration::ZERO).await;
    assert!(has_class(&mount, "#actionBar", "visible"));

    // Reverting the edit hides the bar again.
    type_into(&server, "1.2.3.4");
    sleep(Duration::ZERO).await;
    assert!(!has_class(&mount, "#actionBar", "visible"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn switching_presets_mirrors_the_cron_field() {
    let mount = mount_form(preset_initial()).await;

    let select: HtmlSelectElement = query(&mount, "#scheduleSelect");
    choose_option(&select, "0 * * * *");
    sleep(Duration::ZERO).await;

    let cron: HtmlInputElement = query(&mount, "#cronInput");
    assert_eq!(cron.value(), "0 * * * *");
    assert!(has_class(&mount, "#cronInput", "hidden"));
    assert!(has_class(&mount, "#actionBar", "visible"));

    choose_option(&select, "custom");
    sleep(Duration::ZERO).await;
    assert!(!has_class(&mount, "#cronInput", "hidden"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn reset_restores_initial_values_and_hides_the_bar() {
    let mount = mount_form(preset_initial()).await;

    let server: HtmlInputElement = query(&mount, "#serverInput");
    let history: HtmlInputElement = query(&mount, "#historyInput");
    type_into(&server, "9.9.9.9");
    type_into(&history, "7");
    sleep(Duration::ZERO).await;
    assert!(has_class(&mount, "#actionBar", "visible"));

    let reset: web_sys::HtmlElement = query(&mount, "#resetBtn");
    reset.click();
    sleep(Duration::ZERO).await;

    assert_eq!(server.value(), "1.2.3.4");
    assert_eq!(history.value(), "30");
    assert!(!has_class(&mount, "#actionBar", "visible"));

    cleanup(&mount);
}
