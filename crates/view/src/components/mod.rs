//! Building blocks of the search page.

mod result_list;
mod search_box;
mod search_error;

pub use result_list::{summary, ResultList, ResultListProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use search_error::{SearchError, SearchErrorProps};
