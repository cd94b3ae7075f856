use bounce::helmet::Helmet;
use search_api::{Bridge, SearchInput, SearchQuery};
use serde::{Deserialize, Serialize};
use yew::html::ChildrenProps;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::boundary::{CONTAINER_CLASSES, FALLBACK_TEXT};
use crate::components::{ResultList, SearchBox, SearchError};

/// Query string of the search page, e.g. `/search?q=suspense&limit=10`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchParams {
    pub fn to_input(&self) -> SearchInput {
        SearchInput::new(&self.q).with_limit(self.limit)
    }
}

/// The page container with a loading boundary around its children.
#[function_component]
pub fn SearchLayout(props: &ChildrenProps) -> Html {
    let fallback = html! { <div>{FALLBACK_TEXT}</div> };

    html! {
        <div class={CONTAINER_CLASSES}>
            <Suspense {fallback}>
                {props.children.clone()}
            </Suspense>
        </div>
    }
}

#[function_component]
pub fn SearchPage() -> Html {
    html! {
        <SearchLayout>
            <SearchResults />
        </SearchLayout>
    }
}

/// Searches for the terms in the current location and lists the hits.
///
/// Suspends until the bridge has resolved the query.
#[function_component]
pub fn SearchResults() -> HtmlResult {
    let params = use_location()
        .and_then(|m| m.query::<SearchParams>().ok())
        .unwrap_or_default();
    let input = use_memo(|params| params.to_input(), params);

    let results = Bridge::use_query::<SearchQuery>(input.clone())?;

    let title = if input.is_empty() {
        "Search".to_string()
    } else {
        format!("{} - Search", input.query)
    };

    let content = match results.as_deref() {
        Ok(_) if input.is_empty() => html! {
            <p class="search-prompt">{"Enter a search term to begin."}</p>
        },
        Ok(m) => html! {
            <ResultList query={m.query.clone()} total={m.total} hits={m.hits.clone()} />
        },
        Err(e) => html! { <SearchError message={e.to_string()} /> },
    };

    Ok(html! {
        <>
            <Helmet>
                <title>{title}</title>
            </Helmet>
            <SearchBox query={input.query.clone()} />
            {content}
        </>
    })
}
