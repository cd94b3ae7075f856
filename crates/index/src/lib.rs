//! In-memory search index for the search page.
//!
//! A [`Catalog`] holds a fixed set of [`Document`]s loaded from a JSON array at start-up and
//! answers term queries with ranked [`Hit`]s. The catalog is immutable once built, so a single
//! instance can be shared by every request through [`shared`].

#![deny(clippy::all)]
#![deny(missing_debug_implementations)]
#![deny(unsafe_code)]
#![deny(non_snake_case)]
#![deny(clippy::cognitive_complexity)]
#![deny(missing_docs)]
#![cfg_attr(any(releasing, not(debug_assertions)), deny(dead_code, unused_imports))]

mod catalog;
mod error;
mod shared;
mod tokenize;

pub use catalog::{Catalog, Document, Hit, SearchOutcome, DEFAULT_LIMIT, MAX_LIMIT, SNIPPET_LEN};
pub use error::{IndexError, IndexResult};
pub use shared::{install, shared};
pub use tokenize::tokenize;
