//! UI catalogs
//!
//! Read-only tables shared by the result views: paging size, query types,
//! aggregation positions, filter menu entries and sort orders.

use std::sync::LazyLock;

use serde::Serialize;

use crate::error::FormatError;

/// How many items are shown per page
pub const ITEMS_PER_PAGE: usize = 7;

/// Query language used when calling the search service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum QueryType {
    NaturalLanguage = 0,
    DiscoLanguage = 1,
}

pub const QUERY_NATURAL_LANGUAGE: QueryType = QueryType::NaturalLanguage;
pub const QUERY_DISCO_LANGUAGE: QueryType = QueryType::DiscoLanguage;

// Position of each filter dimension in the aggregation array of a query response
pub const ENTITY_DATA_INDEX: usize = 0;
pub const CATEGORY_DATA_INDEX: usize = 1;
pub const CONCEPT_DATA_INDEX: usize = 2;
pub const KEYWORD_DATA_INDEX: usize = 3;

// Keys/values for filter menu items
pub const ENTITY_FILTER: &str = "EN";
pub const CATEGORY_FILTER: &str = "CA";
pub const CONCEPT_FILTER: &str = "CO";
pub const KEYWORD_FILTER: &str = "KW";

/// Sentiment view label meaning no specific term is selected
pub const SENTIMENT_TERM_ITEM: &str = "All Terms";
/// Trending view label meaning no specific term is selected
pub const TRENDING_TERM_ITEM: &str = "Select Term";

/// Filter menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterType {
    pub key: &'static str,
    pub value: &'static str,
    pub text: &'static str,
}

pub static FILTER_TYPES: [FilterType; 4] = [
    FilterType { key: ENTITY_FILTER, value: ENTITY_FILTER, text: "Entities" },
    FilterType { key: CATEGORY_FILTER, value: CATEGORY_FILTER, text: "Categories" },
    FilterType { key: CONCEPT_FILTER, value: CONCEPT_FILTER, text: "Concepts" },
    FilterType { key: KEYWORD_FILTER, value: KEYWORD_FILTER, text: "Keywords" },
];

/// Sort order.
///
/// `sort_by` is the query parameter sent to the search service, `sort_by_int`
/// names the field of a [`FormattedResult`](crate::model::FormattedResult)
/// used when re-sorting fetched results. A leading `-` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sort_by: &'static str,
    pub sort_by_int: &'static str,
    pub text: &'static str,
}

pub static SORT_KEYS: [SortKey; 6] = [
    SortKey {
        kind: "HIGHEST",
        sort_by: "-result_metadata.score",
        sort_by_int: "-score",
        text: "Highest Score",
    },
    SortKey {
        kind: "LOWEST",
        sort_by: "result_metadata.score",
        sort_by_int: "score",
        text: "Lowest Score",
    },
    SortKey {
        kind: "NEWEST",
        sort_by: "-date",
        sort_by_int: "-date",
        text: "Newest First",
    },
    SortKey {
        kind: "OLDEST",
        sort_by: "date",
        sort_by_int: "date",
        text: "Oldest First",
    },
    SortKey {
        kind: "BEST",
        sort_by: "-enriched_text.sentiment.document.score",
        sort_by_int: "-sentimentScore",
        text: "Highest Rated",
    },
    SortKey {
        kind: "WORST",
        sort_by: "enriched_text.sentiment.document.score",
        sort_by_int: "sentimentScore",
        text: "Lowest Rated",
    },
];

/// Sort drop-down entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortType {
    pub key: &'static str,
    pub value: &'static str,
    pub text: &'static str,
}

/// Drop-down entries, one per [`SORT_KEYS`] entry in the same order
pub static SORT_TYPES: LazyLock<Vec<SortType>> = LazyLock::new(|| {
    SORT_KEYS
        .iter()
        .map(|item| SortType {
            key: item.kind,
            value: item.sort_by,
            text: item.text,
        })
        .collect()
});

/// Look up a filter menu entry by key
pub fn filter_type(key: &str) -> Result<&'static FilterType, FormatError> {
    FILTER_TYPES
        .iter()
        .find(|f| f.key == key)
        .ok_or_else(|| FormatError::UnknownFilter(key.to_string()))
}

/// Look up a sort order by its type (`HIGHEST`, `NEWEST`, ...)
pub fn sort_key(kind: &str) -> Result<&'static SortKey, FormatError> {
    SORT_KEYS
        .iter()
        .find(|k| k.kind.eq_ignore_ascii_case(kind))
        .ok_or_else(|| FormatError::UnknownSortKey(kind.to_string()))
}

/// Map a drop-down selection back to the service's sort parameter
pub fn service_sort_param(kind: &str) -> Result<&'static str, FormatError> {
    sort_key(kind).map(|k| k.sort_by)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_types_follow_sort_keys() {
        assert_eq!(SORT_TYPES.len(), SORT_KEYS.len());
        for (ty, key) in SORT_TYPES.iter().zip(SORT_KEYS.iter()) {
            assert_eq!(ty.key, key.kind);
            assert_eq!(ty.value, key.sort_by);
            assert_eq!(ty.text, key.text);
        }
    }

    #[test]
    fn test_filter_types() {
        let keys: Vec<_> = FILTER_TYPES.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["EN", "CA", "CO", "KW"]);
        assert!(FILTER_TYPES.iter().all(|f| f.key == f.value));

        assert_eq!(filter_type(CONCEPT_FILTER).unwrap().text, "Concepts");
        assert!(matches!(
            filter_type("XX"),
            Err(FormatError::UnknownFilter(k)) if k == "XX"
        ));
    }

    #[test]
    fn test_sort_key_lookup() {
        assert_eq!(sort_key("NEWEST").unwrap().sort_by_int, "-date");
        assert_eq!(sort_key("best").unwrap().text, "Highest Rated");
        assert_eq!(
            service_sort_param("WORST").unwrap(),
            "enriched_text.sentiment.document.score"
        );
        assert!(sort_key("RANDOM").is_err());
    }

    #[test]
    fn test_constants() {
        assert_eq!(ITEMS_PER_PAGE, 7);
        assert_eq!(QUERY_NATURAL_LANGUAGE as u8, 0);
        assert_eq!(QUERY_DISCO_LANGUAGE as u8, 1);
        assert_eq!(
            [ENTITY_DATA_INDEX, CATEGORY_DATA_INDEX, CONCEPT_DATA_INDEX, KEYWORD_DATA_INDEX],
            [0, 1, 2, 3]
        );
        assert_eq!(SENTIMENT_TERM_ITEM, "All Terms");
        assert_eq!(TRENDING_TERM_ITEM, "Select Term");
    }

    #[test]
    fn test_sort_key_serializes_with_ui_names() {
        let json = serde_json::to_value(SORT_KEYS[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "HIGHEST",
                "sortBy": "-result_metadata.score",
                "sortByInt": "-score",
                "text": "Highest Score"
            })
        );
    }
}
