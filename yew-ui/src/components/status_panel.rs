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

//! Polls the server-rendered status fragment and swaps it in only when its
//! content actually changed, so CSS animations inside the fragment are not
//! restarted by every poll.

use gloo_timers::callback::Interval;
use once_cell::sync::Lazy;
use regex::Regex;
use yew::prelude::*;

use crate::api::{fetch_status_fragment, FetchError};
use crate::constants::STATUS_POLL_INTERVAL_MS;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Strip all whitespace so formatting differences don't count as changes.
fn normalize_markup(markup: &str) -> String {
    WHITESPACE.replace_all(markup, "").into_owned()
}

/// Whether an incoming fragment differs from the rendered one once
/// whitespace is ignored.
fn fragment_changed(rendered: Option<&str>, incoming: &str) -> bool {
    match rendered {
        Some(current) => normalize_markup(current) != normalize_markup(incoming),
        None => true,
    }
}

pub enum StatusPanelMsg {
    Poll,
    Loaded(String),
    Failed(FetchError),
}

/// The poll interval lives on the component, so navigating away from the
/// dashboard stops the polling with the widget.
pub struct StatusPanel {
    fragment: Option<AttrValue>,
    _poll: Interval,
}

impl Component for StatusPanel {
    type Message = StatusPanelMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(StatusPanelMsg::Poll);

        let link = ctx.link().clone();
        let poll = Interval::new(STATUS_POLL_INTERVAL_MS, move || {
            link.send_message(StatusPanelMsg::Poll);
        });

        Self {
            fragment: None,
            _poll: poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StatusPanelMsg::Poll => {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_status_fragment().await {
                        Ok(markup) => link.send_message(StatusPanelMsg::Loaded(markup)),
                        Err(e) => link.send_message(StatusPanelMsg::Failed(e)),
                    }
                });
                false
            }
            StatusPanelMsg::Loaded(markup) => {
                if fragment_changed(self.fragment.as_deref(), &markup) {
                    self.fragment = Some(AttrValue::from(markup));
                    true
                } else {
                    false
                }
            }
            StatusPanelMsg::Failed(e) => {
                // Non-fatal: the next tick polls again.
                log::error!("Status check failed: {e}");
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let fragment = self
            .fragment
            .clone()
            .map(Html::from_html_unchecked)
            .unwrap_or_default();
        html! {
            <div id="status-container">{ fragment }</div>
        }
    }
}
