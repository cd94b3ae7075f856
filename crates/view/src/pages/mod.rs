mod not_found;
mod search;

pub use not_found::NotFound;
pub use search::{SearchLayout, SearchPage, SearchParams, SearchResults};
