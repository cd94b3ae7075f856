use async_trait::async_trait;
use search_index::Catalog;
use stellation_bridge::links::LocalLink;
use stellation_bridge::registry::ResolverRegistry;
use stellation_bridge::resolvers::QueryResolver;
use stellation_bridge::routines::QueryResult;
use stellation_bridge::Bridge as Bridge_;

pub use crate::routines::*;

impl SearchQuery {
    /// Runs a search against a catalog.
    pub fn from_catalog(catalog: &Catalog, input: &SearchInput) -> Result<Self, Error> {
        if let Err(e) = input.validate() {
            tracing::warn!(chars = input.query.chars().count(), "search rejected: {e}");
            return Err(e);
        }

        let outcome = catalog.search(&input.query, input.limit);
        tracing::debug!(query = %input.query, total = outcome.total, "search resolved");

        Ok(Self {
            query: input.query.clone(),
            total: outcome.total,
            hits: outcome
                .hits
                .into_iter()
                .map(|m| SearchHit {
                    id: m.id,
                    title: m.title,
                    url: m.url,
                    snippet: m.snippet,
                    score: m.score,
                })
                .collect(),
        })
    }
}

#[async_trait(?Send)]
impl QueryResolver for SearchQuery {
    type Context = ();

    async fn resolve(_ctx: &(), input: &Self::Input) -> QueryResult<Self> {
        let catalog = search_index::shared();

        Ok(Self::from_catalog(&catalog, input)?.into())
    }
}

pub fn create_resolver_registry() -> ResolverRegistry<()> {
    ResolverRegistry::<()>::builder()
        .add_query::<SearchQuery>()
        .build()
}

pub type Link = LocalLink<()>;
pub type Bridge = Bridge_<Link>;
