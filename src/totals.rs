//! Sentiment tallies

use crate::model::{FormattedData, SentimentLabel, SentimentTotals};

/// Count positive, negative and neutral results. Any other label, or none
/// at all, is not counted.
pub fn get_totals(data: &FormattedData) -> SentimentTotals {
    data.results
        .iter()
        .fold(SentimentTotals::default(), |mut totals, result| {
            match result.sentiment_label {
                Some(SentimentLabel::Positive) => totals.num_positive += 1,
                Some(SentimentLabel::Negative) => totals.num_negative += 1,
                Some(SentimentLabel::Neutral) => totals.num_neutral += 1,
                Some(SentimentLabel::Other(_)) | None => {}
            }
            totals
        })
}
