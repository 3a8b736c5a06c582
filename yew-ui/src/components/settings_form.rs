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

//! Settings form: preset/custom schedule handling, dirty tracking against
//! the initially loaded values, and the destructive-clear confirmation.

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::constants::{
    is_preset, APP_ROOT_ID, SCHEDULE_CUSTOM, SCHEDULE_PRESETS, SETTINGS_FORM_ACTION,
};

/// The three user-editable settings, as strings the way the form holds them.
///
/// Dirty detection serializes a snapshot to canonical JSON and compares the
/// strings, so any field difference flips the same toggle.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SettingsSnapshot {
    pub cron: String,
    pub server: String,
    pub history: String,
}

impl SettingsSnapshot {
    /// Read the initial values the backend stamped onto the app mount
    /// element. `None` on pages served without them.
    pub fn from_dom() -> Option<Self> {
        let root = gloo_utils::document().get_element_by_id(APP_ROOT_ID)?;
        Some(Self {
            cron: root.get_attribute("data-initial-cron")?,
            server: root.get_attribute("data-initial-server").unwrap_or_default(),
            history: root
                .get_attribute("data-initial-history")
                .unwrap_or_default(),
        })
    }

    pub fn canonical(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Selector mode for a stored cron value: the matching preset, or custom.
fn initial_schedule(cron: &str) -> String {
    if is_preset(cron) {
        cron.to_string()
    } else {
        SCHEDULE_CUSTOM.to_string()
    }
}

/// Current form values as a snapshot. The cron comes from the selector, or
/// from the trimmed free-text field when in custom mode.
fn current_snapshot(schedule: &str, cron_text: &str, server: &str, history: &str) -> SettingsSnapshot {
    let cron = if schedule == SCHEDULE_CUSTOM {
        cron_text.trim().to_string()
    } else {
        schedule.to_string()
    };
    SettingsSnapshot {
        cron,
        server: server.trim().to_string(),
        history: history.to_string(),
    }
}

pub enum SettingsFormMsg {
    ScheduleChanged(String),
    CronChanged(String),
    ServerChanged(String),
    HistoryChanged(String),
    Reset,
    OpenModal,
    CloseModal,
}

#[derive(Properties, PartialEq)]
pub struct SettingsFormProps {
    /// Values the form was loaded with; never mutated.
    pub initial: SettingsSnapshot,
}

pub struct SettingsForm {
    schedule: String,
    cron_text: String,
    server: String,
    history: String,
    dirty: bool,
    modal_open: bool,
}

impl SettingsForm {
    fn check_changes(&mut self, initial: &SettingsSnapshot) {
        let current = current_snapshot(&self.schedule, &self.cron_text, &self.server, &self.history);
        self.dirty = current.canonical() != initial.canonical();
    }
}

impl Component for SettingsForm {
    type Message = SettingsFormMsg;
    type Properties = SettingsFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let initial = &ctx.props().initial;
        Self {
            schedule: initial_schedule(&initial.cron),
            cron_text: initial.cron.clone(),
            server: initial.server.clone(),
            history: initial.history.clone(),
            dirty: false,
            modal_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let initial = &ctx.props().initial;
        match msg {
            SettingsFormMsg::ScheduleChanged(value) => {
                self.schedule = value;
                if self.schedule != SCHEDULE_CUSTOM {
                    // Mirror the preset into the (hidden) cron field so the
                    // form posts it as cron_schedule.
                    self.cron_text = self.schedule.clone();
                }
                self.check_changes(initial);
                true
            }
            SettingsFormMsg::CronChanged(value) => {
                self.cron_text = value;
                self.check_changes(initial);
                true
            }
            SettingsFormMsg::ServerChanged(value) => {
                self.server = value;
                self.check_changes(initial);
                true
            }
            SettingsFormMsg::HistoryChanged(value) => {
                self.history = value;
                self.check_changes(initial);
                true
            }
            SettingsFormMsg::Reset => {
                self.server = initial.server.clone();
                self.history = initial.history.clone();
                self.schedule = initial_schedule(&initial.cron);
                self.cron_text = initial.cron.clone();
                self.check_changes(initial);
                true
            }
            SettingsFormMsg::OpenModal => {
                self.modal_open = true;
                true
            }
            SettingsFormMsg::CloseModal => {
                self.modal_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        fn select_value(event: Event) -> String {
            event
                .target()
                .expect("change event has a target")
                .unchecked_into::<HtmlSelectElement>()
                .value()
        }
        fn input_value(event: InputEvent) -> String {
            event
                .target()
                .expect("input event has a target")
                .unchecked_into::<HtmlInputElement>()
                .value()
        }

        let on_schedule = ctx
            .link()
            .callback(|e: Event| SettingsFormMsg::ScheduleChanged(select_value(e)));
        let on_cron = ctx
            .link()
            .callback(|e: InputEvent| SettingsFormMsg::CronChanged(input_value(e)));
        let on_server = ctx
            .link()
            .callback(|e: InputEvent| SettingsFormMsg::ServerChanged(input_value(e)));
        let on_history = ctx
            .link()
            .callback(|e: InputEvent| SettingsFormMsg::HistoryChanged(input_value(e)));

        let cron_class = classes!(
            "cron-input",
            (self.schedule != SCHEDULE_CUSTOM).then_some("hidden")
        );
        let bar_class = classes!("action-bar", self.dirty.then_some("visible"));

        html! {
            <>
                <form id="settingsForm" class="settings-form" method="post" action={SETTINGS_FORM_ACTION}>
                    <div class="form-field">
                        <label for="scheduleSelect">{ "Test schedule" }</label>
                        <select id="scheduleSelect" onchange={on_schedule}>
                            { for SCHEDULE_PRESETS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={self.schedule == *value}>{ *label }</option>
                            }) }
                            <option value={SCHEDULE_CUSTOM} selected={self.schedule == SCHEDULE_CUSTOM}>{ "Custom cron" }</option>
                        </select>
                        <input
                            id="cronInput"
                            name="cron_schedule"
                            type="text"
                            class={cron_class}
                            value={self.cron_text.clone()}
                            oninput={on_cron}
                            placeholder="*/30 * * * *"
                        />
                    </div>

                    <div class="form-field">
                        <label for="serverInput">{ "Speedtest server id" }</label>
                        <input
                            id="serverInput"
                            name="server_id"
                            type="text"
                            value={self.server.clone()}
                            oninput={on_server}
                            placeholder="Auto-select"
                        />
                    </div>

                    <div class="form-field">
                        <label for="historyInput">{ "History limit" }</label>
                        <input
                            id="historyInput"
                            name="history_limit"
                            type="number"
                            min="1"
                            value={self.history.clone()}
                            oninput={on_history}
                        />
                    </div>

                    <div id="actionBar" class={bar_class}>
                        <button
                            id="resetBtn"
                            type="button"
                            class="btn-secondary"
                            onclick={ctx.link().callback(|_| SettingsFormMsg::Reset)}
                        >
                            { "Reset" }
                        </button>
                        <button type="submit" class="btn-primary">{ "Save changes" }</button>
                    </div>
                </form>

                <section class="danger-zone">
                    <h3>{ "Danger zone" }</h3>
                    <button
                        type="button"
                        class="btn-danger"
                        onclick={ctx.link().callback(|_| SettingsFormMsg::OpenModal)}
                    >
                        { "Clear history..." }
                    </button>
                </section>

                <ConfirmModal
                    visible={self.modal_open}
                    on_close={ctx.link().callback(|_| SettingsFormMsg::CloseModal)}
                />
            </>
        }
    }
}
