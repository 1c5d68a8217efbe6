//! Client-side ordering and paging
//!
//! Re-sorts already formatted results by a sort key's internal field
//! (`sortByInt`) and slices them into pages for display.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::catalog::{SortKey, ITEMS_PER_PAGE};
use crate::error::FormatError;
use crate::model::FormattedResult;

/// Result view options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewConfig {
    /// Results per page
    pub items_per_page: usize,

    /// 1-based page to show; `None` shows everything
    pub page: Option<usize>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            items_per_page: ITEMS_PER_PAGE,
            page: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Score,
    Date,
    SentimentScore,
}

fn parse_sort_field(sort_by_int: &str) -> Result<(SortField, bool), FormatError> {
    let (name, descending) = match sort_by_int.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (sort_by_int, false),
    };

    let field = match name {
        "score" => SortField::Score,
        "date" => SortField::Date,
        "sentimentScore" => SortField::SentimentScore,
        _ => return Err(FormatError::UnknownSortKey(sort_by_int.to_string())),
    };
    Ok((field, descending))
}

// Missing values order before any number
fn compare_numbers(a: Option<&Number>, b: Option<&Number>) -> Ordering {
    match (a.and_then(Number::as_f64), b.and_then(Number::as_f64)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (x, y) => x.is_some().cmp(&y.is_some()),
    }
}

fn compare(a: &FormattedResult, b: &FormattedResult, field: SortField) -> Ordering {
    match field {
        SortField::Score => compare_numbers(a.score.as_ref(), b.score.as_ref()),
        SortField::SentimentScore => {
            compare_numbers(a.sentiment_score.as_ref(), b.sentiment_score.as_ref())
        }
        SortField::Date => a.date.cmp(&b.date),
    }
}

/// Sort results by `key`. The sort is stable: ties keep their input order.
pub fn sort_results(
    mut results: Vec<FormattedResult>,
    key: &SortKey,
) -> Result<Vec<FormattedResult>, FormatError> {
    let (field, descending) = parse_sort_field(key.sort_by_int)?;

    results.sort_by(|a, b| {
        let ord = compare(a, b, field);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    Ok(results)
}

/// Number of pages needed for `total` results
pub fn page_count(total: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total.div_ceil(items_per_page)
}

/// Slice out one 1-based page. Pages past the end are empty.
pub fn paginate(results: &[FormattedResult], config: &ViewConfig) -> Vec<FormattedResult> {
    let Some(page) = config.page else {
        return results.to_vec();
    };
    if page == 0 || config.items_per_page == 0 {
        return Vec::new();
    }
    let Some(start) = (page - 1).checked_mul(config.items_per_page) else {
        return Vec::new();
    };

    results
        .iter()
        .skip(start)
        .take(config.items_per_page)
        .cloned()
        .collect()
}
