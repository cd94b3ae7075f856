use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, IndexResult};
use crate::tokenize::tokenize;

/// The number of hits returned when a query does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 20;
/// The largest number of hits a single query may return.
pub const MAX_LIMIT: usize = 100;
/// The maximum length of a snippet, in characters.
pub const SNIPPET_LEN: usize = 160;

const TITLE_WEIGHT: u32 = 3;
const TAG_WEIGHT: u32 = 2;
const BODY_WEIGHT: u32 = 1;

static BUILTIN: &str = include_str!("../data/catalog.json");

/// A searchable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier of the document.
    pub id: String,
    /// Title shown as the link text of a hit.
    pub title: String,
    /// Location of the document.
    pub url: String,
    /// Plain text body.
    #[serde(default)]
    pub body: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

struct Entry {
    doc: Document,
    title_terms: BTreeSet<String>,
    tag_terms: BTreeSet<String>,
    body_terms: BTreeSet<String>,
}

impl Entry {
    fn new(doc: Document) -> Self {
        Self {
            title_terms: tokenize(&doc.title).collect(),
            tag_terms: doc.tags.iter().flat_map(|m| tokenize(m)).collect(),
            body_terms: tokenize(&doc.body).collect(),
            doc,
        }
    }

    fn score<'a>(&self, terms: impl Iterator<Item = &'a String>) -> u32 {
        terms
            .map(|term| {
                let mut score = 0;
                if self.title_terms.contains(term) {
                    score += TITLE_WEIGHT;
                }
                if self.tag_terms.contains(term) {
                    score += TAG_WEIGHT;
                }
                if self.body_terms.contains(term) {
                    score += BODY_WEIGHT;
                }
                score
            })
            .sum()
    }
}

/// A ranked match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Id of the matched document.
    pub id: String,
    /// Title of the matched document.
    pub title: String,
    /// Location of the matched document.
    pub url: String,
    /// The leading part of the body.
    pub snippet: String,
    /// Relevance; higher is better.
    pub score: u32,
}

/// The result of [`Catalog::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The number of matching documents before the limit is applied.
    pub total: usize,
    /// Matches in rank order, at most `limit` of them.
    pub hits: Vec<Hit>,
}

/// An immutable set of documents that can be searched.
pub struct Catalog {
    entries: Vec<Entry>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Builds a catalog from documents.
    ///
    /// Fails if two documents share an id.
    pub fn new<I>(docs: I) -> IndexResult<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for doc in docs {
            if !seen.insert(doc.id.clone()) {
                return Err(IndexError::DuplicateId(doc.id));
            }
            entries.push(Entry::new(doc));
        }

        Ok(Self { entries })
    }

    /// Parses a catalog from a JSON array of documents.
    pub fn from_json_str(s: &str) -> IndexResult<Self> {
        let docs: Vec<Document> = serde_json::from_str(s)?;
        Self::new(docs)
    }

    /// Reads a catalog from a JSON file.
    pub fn load<P>(path: P) -> IndexResult<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_owned(),
            source,
        })?;

        let catalog = Self::from_json_str(&s)?;
        tracing::debug!(path = %path.display(), len = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN).expect("bundled catalog is invalid!")
    }

    /// Returns the number of documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the document with the given id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.entries.iter().map(|m| &m.doc).find(|m| m.id == id)
    }

    /// Searches the catalog.
    ///
    /// A query without any terms matches nothing. `limit` defaults to [`DEFAULT_LIMIT`] and is
    /// capped at [`MAX_LIMIT`].
    pub fn search(&self, query: &str, limit: Option<usize>) -> SearchOutcome {
        let terms: BTreeSet<String> = tokenize(query).collect();
        if terms.is_empty() {
            return SearchOutcome::default();
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

        let mut hits: Vec<Hit> = self
            .entries
            .iter()
            .filter_map(|m| {
                let score = m.score(terms.iter());
                (score > 0).then(|| Hit {
                    id: m.doc.id.clone(),
                    title: m.doc.title.clone(),
                    url: m.doc.url.clone(),
                    snippet: snippet(&m.doc.body),
                    score,
                })
            })
            .collect();

        hits.sort_by(Hit::rank);
        let total = hits.len();
        hits.truncate(limit);

        tracing::debug!(query, total, "catalog searched");

        SearchOutcome { total, hits }
    }
}

fn snippet(body: &str) -> String {
    match body.char_indices().nth(SNIPPET_LEN) {
        Some((end, _)) => format!("{}…", body[..end].trim_end()),
        None => body.to_string(),
    }
}

impl Hit {
    /// Rank order: the better hit sorts first.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.id.cmp(&other.id))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn doc(id: &str, title: &str, body: &str, tags: &[&str]) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("/docs/{id}"),
            body: body.to_string(),
            tags: tags.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn ids(outcome: &SearchOutcome) -> Vec<&str> {
        outcome.hits.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 6);
        assert!(catalog.get("yew-suspense").is_some());
    }

    #[test]
    fn ranks_title_over_tags_over_body() {
        let catalog = Catalog::builtin();
        let outcome = catalog.search("suspense", None);

        assert_eq!(outcome.total, 2);
        assert_eq!(ids(&outcome), ["yew-suspense", "query-cache"]);
        assert_eq!(outcome.hits[0].score, 6);
        assert_eq!(outcome.hits[1].score, 2);
    }

    #[test]
    fn ties_are_broken_by_title() {
        let catalog = Catalog::builtin();
        let outcome = catalog.search("Rendering", None);

        assert_eq!(outcome.total, 4);
        assert_eq!(ids(&outcome), ["ssr", "yew-suspense", "bridge", "styling"]);
        assert!(outcome.hits.windows(2).all(|m| m[0] <= m[1]));
    }

    #[test]
    fn rank_ignores_url_and_snippet() {
        let hit = |id: &str, title: &str, score, snippet: &str| Hit {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("/docs/{snippet}"),
            snippet: snippet.to_string(),
            score,
        };

        let a = hit("a", "Alpha", 2, "one");
        let b = hit("a", "Alpha", 2, "two");
        assert_ne!(a, b);
        assert_eq!(a.rank(&b), Ordering::Equal);

        assert_eq!(hit("z", "Zeta", 3, "").rank(&a), Ordering::Less);
        assert_eq!(hit("b", "Alpha", 2, "").rank(&a), Ordering::Greater);
        assert_eq!(hit("a", "Beta", 2, "").rank(&a), Ordering::Greater);
    }

    #[test]
    fn repeated_terms_count_once() {
        let catalog = Catalog::builtin();

        assert_eq!(
            catalog.search("suspense suspense SUSPENSE", None),
            catalog.search("suspense", None)
        );
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.search("", None), SearchOutcome::default());
        assert_eq!(catalog.search(" ?! ", Some(5)), SearchOutcome::default());
    }

    #[test]
    fn limit_truncates_hits_but_not_total() {
        let catalog = Catalog::builtin();

        let outcome = catalog.search("rendering", Some(1));
        assert_eq!(outcome.total, 4);
        assert_eq!(ids(&outcome), ["ssr"]);

        let outcome = catalog.search("rendering", Some(0));
        assert_eq!(outcome.total, 4);
        assert!(outcome.hits.is_empty());
    }

    #[test]
    fn limit_is_capped() {
        let docs = (0..150).map(|i| doc(&format!("d{i:03}"), "Same", "", &[]));
        let catalog = Catalog::new(docs).unwrap();

        let outcome = catalog.search("same", Some(1000));
        assert_eq!(outcome.total, 150);
        assert_eq!(outcome.hits.len(), MAX_LIMIT);

        let outcome = catalog.search("same", None);
        assert_eq!(outcome.hits.len(), DEFAULT_LIMIT);
        assert_eq!(outcome.hits[0].id, "d000");
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundary() {
        let body = "가".repeat(SNIPPET_LEN + 10);
        let catalog = Catalog::new([doc("k", "Korean", &body, &[])]).unwrap();

        let hit = &catalog.search("korean", None).hits[0];
        assert!(hit.snippet.ends_with('…'));
        assert_eq!(hit.snippet.chars().count(), SNIPPET_LEN + 1);

        let catalog = Catalog::new([doc("s", "Short", "tiny body", &[])]).unwrap();
        assert_eq!(catalog.search("short", None).hits[0].snippet, "tiny body");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new([doc("a", "One", "", &[]), doc("a", "Two", "", &[])]);

        assert!(matches!(result, Err(IndexError::DuplicateId(ref m)) if m == "a"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json_str(r#"{"id": "not-an-array"}"#),
            Err(IndexError::Parse(_))
        ));
    }

    #[test]
    fn missing_optional_fields_default() {
        let catalog =
            Catalog::from_json_str(r#"[{"id": "a", "title": "Alpha", "url": "/a"}]"#).unwrap();
        let doc = catalog.get("a").unwrap();

        assert!(doc.body.is_empty());
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "title": "Alpha", "url": "/a", "tags": ["first"]}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.search("first", None).hits[0].score, TAG_WEIGHT);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        match Catalog::load(&path) {
            Err(IndexError::Io { path: p, .. }) => assert_eq!(p, path),
            m => panic!("unexpected result: {m:?}"),
        }
    }
}
