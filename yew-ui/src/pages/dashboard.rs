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

//! Dashboard page: measurement summary, speed chart and the live status
//! widget. Owns the chart refresh schedule.

use gloo_timers::callback::{Interval, Timeout};
use netdash_types::MetricSample;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::api::{fetch_stats, FetchError};
use crate::components::speed_chart::{ChartSeries, SpeedChart};
use crate::components::stats_summary::StatsSummary;
use crate::components::status_panel::StatusPanel;
use crate::components::top_bar::TopBar;
use crate::constants::{CHART_REFRESH_INTERVAL_MS, EVENT_REFRESH_DELAY_MS, REFRESH_CHART_EVENT};

pub enum DashboardMsg {
    /// Fetch the stats endpoint now.
    Refresh,
    /// External code asked for a refresh; run one after a short delay so a
    /// just-finished test's write lands before we read.
    RefreshRequested,
    Loaded(Vec<MetricSample>),
    FetchFailed(FetchError),
}

pub struct Dashboard {
    samples: Vec<MetricSample>,
    _poll: Interval,
    /// Pending event-triggered refresh; replaced (debounced) by a newer
    /// event, dropped on unmount.
    event_refresh: Option<Timeout>,
    refresh_listener: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Component for Dashboard {
    type Message = DashboardMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(DashboardMsg::Refresh);

        let link = ctx.link().clone();
        let poll = Interval::new(CHART_REFRESH_INTERVAL_MS, move || {
            link.send_message(DashboardMsg::Refresh);
        });

        let link = ctx.link().clone();
        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
            link.send_message(DashboardMsg::RefreshRequested);
        }) as Box<dyn FnMut(web_sys::Event)>);
        if let Some(body) = gloo_utils::document().body() {
            body.add_event_listener_with_callback(
                REFRESH_CHART_EVENT,
                listener.as_ref().unchecked_ref(),
            )
            .ok();
        }

        Self {
            samples: Vec::new(),
            _poll: poll,
            event_refresh: None,
            refresh_listener: Some(listener),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DashboardMsg::Refresh => {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_stats().await {
                        // A null body means nothing to report; keep the
                        // current series.
                        Ok(None) => {}
                        Ok(Some(samples)) => link.send_message(DashboardMsg::Loaded(samples)),
                        Err(e) => link.send_message(DashboardMsg::FetchFailed(e)),
                    }
                });
                false
            }
            DashboardMsg::RefreshRequested => {
                let link = ctx.link().clone();
                self.event_refresh = Some(Timeout::new(EVENT_REFRESH_DELAY_MS, move || {
                    link.send_message(DashboardMsg::Refresh);
                }));
                false
            }
            DashboardMsg::Loaded(samples) => {
                self.samples = samples;
                true
            }
            DashboardMsg::FetchFailed(e) => {
                // Skip this refresh; the next interval tries again.
                log::debug!("chart refresh skipped: {e}");
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(body)) =
            (self.refresh_listener.take(), gloo_utils::document().body())
        {
            body.remove_event_listener_with_callback(
                REFRESH_CHART_EVENT,
                listener.as_ref().unchecked_ref(),
            )
            .ok();
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <TopBar />
                <main class="dashboard-page">
                    <StatsSummary latest={self.samples.last().cloned()} />
                    <section class="chart-panel">
                        <SpeedChart series={ChartSeries::from_samples(&self.samples)} />
                    </section>
                    <StatusPanel />
                </main>
            </>
        }
    }
}
