//! Search service and UI record types
//!
//! Input types follow the search service's response schema (snake_case,
//! nested enrichment objects). Output types follow what the UI components
//! read (camelCase, flattened).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ============================================================================
// Search service responses
// ============================================================================

/// Document identifier. The service uses strings; numbers are accepted too.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(Number),
    Text(String),
}

impl PartialEq for DocumentId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DocumentId::Text(a), DocumentId::Text(b)) => a == b,
            (DocumentId::Number(a), DocumentId::Number(b)) => a.as_f64() == b.as_f64(),
            _ => false,
        }
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId::Text(id.to_string())
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        DocumentId::Number(id.into())
    }
}

/// Document query response. `results` is required; anything else the
/// service returns (aggregations, matching_results, ...) is kept in `extra`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSearchResponse {
    pub results: Vec<RawResultItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawResultItem {
    pub id: DocumentId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub result_metadata: ResultMetadata,
    pub enriched_text: EnrichedText,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnrichedText {
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sentiment {
    pub document: DocumentSentiment,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentSentiment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SentimentLabel>,
}

/// Passage query response. `None` means no passage query was made; an
/// empty list means one was made and nothing matched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPassageResponse {
    #[serde(default)]
    pub results: Option<Vec<PassageMatch>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PassageMatch {
    pub document_id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_score: Option<Number>,
}

// ============================================================================
// UI records
// ============================================================================

/// Overall document tone
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl From<String> for SentimentLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            "neutral" => SentimentLabel::Neutral,
            _ => SentimentLabel::Other(label),
        }
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => "positive".to_string(),
            SentimentLabel::Negative => "negative".to_string(),
            SentimentLabel::Neutral => "neutral".to_string(),
            SentimentLabel::Other(s) => s,
        }
    }
}

/// Passage score shown next to a result: the string `"0"` until a passage
/// is linked, then the passage's numeric score as the service sent it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PassageScore {
    Score(Number),
    Text(String),
}

impl Default for PassageScore {
    fn default() -> Self {
        PassageScore::Text("0".to_string())
    }
}

/// One result row as the UI consumes it.
///
/// Leaf values the service left out stay `None` and are omitted on output.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    pub id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_label: Option<SentimentLabel>,
    pub has_passage: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_end: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_score: Option<PassageScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FormattedData {
    pub results: Vec<FormattedResult>,
}

/// Sentiment counts over a set of formatted results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentTotals {
    pub num_positive: usize,
    pub num_negative: usize,
    pub num_neutral: usize,
}
