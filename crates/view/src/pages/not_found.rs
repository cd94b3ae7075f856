use yew::prelude::*;
use yew_router::prelude::*;

use crate::boundary::CONTAINER_CLASSES;
use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class={CONTAINER_CLASSES}>
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Search}>{"Back to search"}</Link<Route>>
        </div>
    }
}
