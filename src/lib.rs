use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod chart;
pub mod config;
pub mod content;
pub mod nav;
pub mod poll;

pub mod components {
    pub mod benefits_chart;
    pub mod content_panel;
    pub mod nav_bar;
    pub mod poll_widget;
}
pub mod pages {
    pub mod spec_page;
}

use config::PageConfig;
use pages::spec_page::{NotFound, SpecPage};

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/overview")]
    Overview,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering full page");
            html! { <SpecPage config={PageConfig::full()} /> }
        },
        Route::Overview => {
            info!("Rendering overview page");
            html! { <SpecPage config={PageConfig::overview()} /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
