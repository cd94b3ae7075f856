use serde::{Deserialize, Serialize};
use stellation_bridge::links::FetchLink;
use stellation_bridge::registry::RoutineRegistry;
use stellation_bridge::routines::BridgedQuery;
use stellation_bridge::Bridge as Bridge_;
use thiserror::Error;

/// The longest query, in characters, the server accepts.
pub const MAX_QUERY_LEN: usize = 256;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchInput {
    pub query: String,
    pub limit: Option<usize>,
}

impl SearchInput {
    pub fn new<S>(query: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            query: query.as_ref().trim().to_string(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.query.chars().count() > MAX_QUERY_LEN {
            return Err(Error::QueryTooLong { max: MAX_QUERY_LEN });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub score: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Error {
    #[error("failed to communicate with server.")]
    Network,

    #[error("search terms are too long, use at most {max} characters.")]
    QueryTooLong { max: usize },
}

impl BridgedQuery for SearchQuery {
    type Error = Error;
    type Input = SearchInput;

    fn into_query_error(e: stellation_bridge::BridgeError) -> Self::Error {
        tracing::warn!("search query failed to reach the server: {e}");
        Error::Network
    }
}

pub fn create_routine_registry() -> RoutineRegistry {
    RoutineRegistry::builder().add_query::<SearchQuery>().build()
}

pub type Link = FetchLink;
pub type Bridge = Bridge_<Link>;

pub fn create_frontend_bridge() -> Bridge {
    Bridge::new(Link::builder().routines(create_routine_registry()).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_trimmed() {
        let input = SearchInput::new("  yew suspense \n");

        assert_eq!(input.query, "yew suspense");
        assert_eq!(input.limit, None);
        assert!(!input.is_empty());
        assert!(SearchInput::new("   ").is_empty());
    }

    #[test]
    fn long_queries_are_rejected() {
        let at_limit = SearchInput::new("검".repeat(MAX_QUERY_LEN));
        assert_eq!(at_limit.validate(), Ok(()));

        let over_limit = SearchInput::new("a".repeat(MAX_QUERY_LEN + 1));
        assert_eq!(
            over_limit.validate(),
            Err(Error::QueryTooLong { max: MAX_QUERY_LEN })
        );
    }

    #[test]
    fn errors_read_well() {
        assert_eq!(
            Error::QueryTooLong { max: 3 }.to_string(),
            "search terms are too long, use at most 3 characters."
        );
        assert_eq!(Error::Network.to_string(), "failed to communicate with server.");
    }
}
