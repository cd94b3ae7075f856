#![deny(clippy::all)]
#![deny(missing_debug_implementations)]

use yew::prelude::*;
use yew_router::prelude::*;

pub mod boundary;
pub mod components;
mod pages;
pub use pages::{NotFound, SearchLayout, SearchPage, SearchParams, SearchResults};

#[derive(Routable, Debug, Clone, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Search => html! { <SearchPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn Main() -> Html {
    html! {
        <Switch<Route> render={switch} />
    }
}
