//! Discovery Search - Result Formatting
//!
//! Stateless helpers shared by the search results front end: UI catalogs for
//! filters and sort orders, and functions that reshape search service
//! responses (documents plus optional passages) into flat result records.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod sort;
pub mod totals;

pub use catalog::{FilterType, SortKey, SortType, FILTER_TYPES, SORT_KEYS, SORT_TYPES};
pub use error::FormatError;
pub use format::{format_data, format_value, object_without_properties, parse_data, ParsedData};
pub use model::{
    FormattedData, FormattedResult, PassageMatch, RawPassageResponse, RawResultItem,
    RawSearchResponse, SentimentTotals,
};
pub use totals::get_totals;
