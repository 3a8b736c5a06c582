use yew::prelude::*;

use crate::components::settings_form::{SettingsForm, SettingsSnapshot};
use crate::components::top_bar::TopBar;

#[function_component(Settings)]
pub fn settings() -> Html {
    // Initial values are stamped onto the mount element by the backend;
    // captured once here, mutated only by an explicit form reset.
    let initial = use_memo((), |_| SettingsSnapshot::from_dom().unwrap_or_default());

    html! {
        <>
            <TopBar />
            <main class="settings-page">
                <h2>{ "Settings" }</h2>
                <SettingsForm initial={(*initial).clone()} />
            </main>
        </>
    }
}
