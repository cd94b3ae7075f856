use search_api::SearchHit;
use yew::prelude::*;

#[derive(Properties, PartialEq, Debug)]
pub struct ResultListProps {
    pub query: AttrValue,
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

/// The line above the hits, e.g. `Showing 20 of 31 results for "yew"`.
pub fn summary(query: &str, shown: usize, total: usize) -> String {
    let noun = if total == 1 { "result" } else { "results" };

    if shown < total {
        format!("Showing {shown} of {total} {noun} for \"{query}\"")
    } else {
        format!("{total} {noun} for \"{query}\"")
    }
}

#[function_component]
pub fn ResultList(props: &ResultListProps) -> Html {
    let ResultListProps { query, total, hits } = props;

    if *total == 0 {
        return html! {
            <p class="search-empty">{format!("No results for \"{query}\".")}</p>
        };
    }

    let items = hits.iter().map(|hit| {
        html! {
            <li key={hit.id.clone()} class="search-result">
                <a class="search-result-title" href={hit.url.clone()}>{&hit.title}</a>
                <p class="search-result-snippet">{&hit.snippet}</p>
            </li>
        }
    });

    html! {
        <>
            <p class="search-summary">{summary(query, hits.len(), *total)}</p>
            <ul class="search-results">
                {for items}
            </ul>
        </>
    }
}
