use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Properties, PartialEq, Debug)]
pub struct SearchBoxProps {
    #[prop_or_default]
    pub query: AttrValue,
}

/// A plain `GET` form, so searching works before the client has hydrated.
#[styled_component]
pub fn SearchBox(props: &SearchBoxProps) -> Html {
    html! {
        <form
            class={css!(r#"
                display: flex;
                gap: 0.5rem;
                margin-bottom: 1.5rem;
            "#)}
            action="/search"
            method="get"
            role="search"
        >
            <input
                class={css!(r#"
                    flex-grow: 1;
                    height: 40px;
                    box-sizing: border-box;

                    border: 0;
                    border-radius: 8px;
                    outline: 0;
                    padding-left: 1rem;
                    padding-right: 1rem;

                    background-color: rgb(230, 226, 245);
                    color: rgb(0, 0, 0);
                    font-size: 1rem;

                    @media (prefers-color-scheme: dark) {
                        background-color: rgb(87, 86, 91);
                        color: white;
                    }
                "#)}
                type="search"
                name="q"
                placeholder="Search"
                value={props.query.clone()}
            />
            <button
                class={css!(r#"
                    height: 40px;
                    padding-left: 1rem;
                    padding-right: 1rem;

                    border: 0;
                    border-radius: 8px;

                    background-color: rgb(132, 112, 198);
                    color: white;
                    cursor: pointer;
                    font-size: 1rem;
                    font-weight: bold;

                    @media (prefers-color-scheme: dark) {
                        background-color: rgb(95, 76, 159);
                    }
                "#)}
                type="submit"
            >{"Search"}</button>
        </form>
    }
}
