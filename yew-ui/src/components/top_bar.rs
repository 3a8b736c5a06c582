use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[function_component(TopBar)]
pub fn top_bar() -> Html {
    html! {
        <div class="top-bar">
            <span class="top-bar-title">{ "netdash" }</span>
            <nav class="top-bar-nav">
                <Link<Route> to={Route::Dashboard}>{ "Dashboard" }</Link<Route>>
                <Link<Route> to={Route::Settings}>{ "Settings" }</Link<Route>>
            </nav>
        </div>
    }
}
