use yew::prelude::*;

#[derive(Properties, PartialEq, Debug)]
pub struct SearchErrorProps {
    pub message: AttrValue,
}

#[function_component]
pub fn SearchError(props: &SearchErrorProps) -> Html {
    html! {
        <div class="search-error" role="alert">
            <h2>{"Search failed"}</h2>
            <p>{&props.message}</p>
        </div>
    }
}
