//! Root component: router plus the page switch.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard::Dashboard;
use crate::pages::settings::Settings;
use crate::routing::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Settings => html! { <Settings /> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
