// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the SpeedChart SVG rendering.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, sample};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use netdash_ui::components::speed_chart::{ChartSeries, SpeedChart};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn renders_one_polyline_per_metric() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let samples = vec![
            sample(0, 100.0, 20.0, 12.0, 0.0),
            sample(15, 95.5, 19.2, 14.0, 0.5),
            sample(30, 110.0, 21.0, 11.0, 0.0),
        ];
        html! { <SpeedChart series={ChartSeries::from_samples(&samples)} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let polylines = mount.query_selector_all("polyline").unwrap();
    assert_eq!(polylines.length(), 4, "download, upload, ping, packet loss");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn legend_shows_formatted_latest_values() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let samples = vec![sample(0, 3.4, 1.2, 12.0, 0.0)];
        html! { <SpeedChart series={ChartSeries::from_samples(&samples)} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Download: 3.40 Mbps"), "got: {text}");
    assert!(text.contains("Ping: 12.00 ms"), "got: {text}");
    // Zero packet loss renders without decimals.
    assert!(text.contains("Packet Loss: 0%"), "got: {text}");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn empty_history_shows_placeholder() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <SpeedChart series={ChartSeries::default()} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("No data available"));
    assert!(mount.query_selector("polyline").unwrap().is_none());

    cleanup(&mount);
}
