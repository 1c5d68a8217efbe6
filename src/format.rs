//! Response shaping
//!
//! Turns search service responses into the flat records the result views
//! render. Everything here is a pure function of its arguments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::FormatError;
use crate::model::{
    FormattedData, FormattedResult, PassageScore, RawPassageResponse, RawResultItem,
    RawSearchResponse,
};

/// Copy `object` without the keys listed in `properties`.
///
/// Remaining keys keep their insertion order. Listed keys that are not
/// present are ignored.
pub fn object_without_properties<S: AsRef<str>>(
    object: &Map<String, Value>,
    properties: &[S],
) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !properties.iter().any(|p| p.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Raw response alongside its result list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedData {
    pub raw_response: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
}

/// Keep a copy of the whole response next to its `results`, untouched
pub fn parse_data(data: &Map<String, Value>) -> ParsedData {
    ParsedData {
        raw_response: data.clone(),
        results: data.get("results").cloned(),
    }
}

/// Flatten search results for the UI, linking each to its passage.
///
/// When `passages.results` is present only documents with a passage are
/// kept, and the first passage in list order wins. Otherwise every document
/// is kept without passage data. Output order follows `data.results`.
pub fn format_data(data: &RawSearchResponse, passages: &RawPassageResponse) -> FormattedData {
    let results: Vec<FormattedResult> = data
        .results
        .iter()
        .filter_map(|item| {
            let mut result = flatten(item);

            let Some(matches) = &passages.results else {
                return Some(result);
            };

            let found = matches.iter().find(|m| m.document_id == item.id)?;
            result.has_passage = true;
            result.passage_start = found.start_offset;
            result.passage_end = found.end_offset;
            result.passage_field = found.field.clone();
            result.passage_score = found.passage_score.clone().map(PassageScore::Score);
            Some(result)
        })
        .collect();

    info!("Formatting Data: size = {}", results.len());
    FormattedData { results }
}

/// Deserialize both responses and format them.
///
/// A missing nested object (`result_metadata`, `enriched_text`, `sentiment`
/// or `document`) is an error. Missing leaf values are carried through as
/// absent, never defaulted.
pub fn format_value(data: &Value, passages: &Value) -> Result<FormattedData, FormatError> {
    let data = RawSearchResponse::deserialize(data)?;
    let passages = RawPassageResponse::deserialize(passages)?;
    Ok(format_data(&data, &passages))
}

fn flatten(item: &RawResultItem) -> FormattedResult {
    let sentiment = &item.enriched_text.sentiment.document;
    FormattedResult {
        id: item.id.clone(),
        title: item.title.clone(),
        text: item.text.clone(),
        date: item.date.clone(),
        score: item.result_metadata.score.clone(),
        sentiment_score: sentiment.score.clone(),
        sentiment_label: sentiment.label.clone(),
        has_passage: false,
        passage_start: None,
        passage_end: None,
        passage_field: Some(String::new()),
        passage_score: Some(PassageScore::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, SentimentLabel};
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn doc(id: Value, label: &str) -> Value {
        json!({
            "id": id,
            "title": "Title",
            "text": "Some text",
            "date": "2017-06-01T00:00:00Z",
            "result_metadata": { "score": 1.5 },
            "enriched_text": {
                "sentiment": { "document": { "score": 0.25, "label": label } }
            }
        })
    }

    #[test]
    fn test_object_without_properties() {
        let object = as_map(json!({ "a": 1, "b": 2, "c": 3 }));

        let stripped = object_without_properties(&object, &["b"]);
        assert_eq!(Value::Object(stripped.clone()), json!({ "a": 1, "c": 3 }));
        assert_eq!(stripped.keys().collect::<Vec<_>>(), vec!["a", "c"]);

        let unchanged = object_without_properties(&object, &["z"]);
        assert_eq!(unchanged, object);

        let empty = object_without_properties(&object, &["a", "b", "c"]);
        assert!(empty.is_empty());

        assert_eq!(Value::Object(object), json!({ "a": 1, "b": 2, "c": 3 }));
    }

    #[test]
    fn test_parse_data() {
        let input = as_map(json!({ "results": [{ "id": 1 }], "extra": "x" }));

        let parsed = parse_data(&input);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({
                "rawResponse": { "results": [{ "id": 1 }], "extra": "x" },
                "results": [{ "id": 1 }]
            })
        );

        let mut raw = parsed.raw_response;
        raw.insert("extra".to_string(), json!("changed"));
        assert_eq!(input.get("extra"), Some(&json!("x")));
    }

    #[test]
    fn test_format_without_passages_keeps_everything() {
        let data = json!({ "results": [doc(json!(1), "positive")] });

        let formatted = format_value(&data, &json!({})).unwrap();
        assert_eq!(formatted.results.len(), 1);

        let result = &formatted.results[0];
        assert_eq!(result.id, DocumentId::from(1));
        assert_eq!(result.sentiment_label, Some(SentimentLabel::Positive));
        assert!(!result.has_passage);
        assert_eq!(result.passage_field.as_deref(), Some(""));
        assert_eq!(result.passage_score, Some(PassageScore::Text("0".to_string())));

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["score"], json!(1.5));
        assert_eq!(json["sentimentScore"], json!(0.25));
        assert_eq!(json["sentimentLabel"], json!("positive"));
        assert_eq!(json["passageScore"], json!("0"));
        assert_eq!(json["hasPassage"], json!(false));
        assert!(json.get("passageStart").is_none());
    }

    #[test]
    fn test_format_with_passages_drops_unmatched() {
        let data = json!({ "results": [doc(json!(1), "positive"), doc(json!(2), "negative")] });
        let passages = json!({
            "results": [{
                "document_id": 1,
                "start_offset": 0,
                "end_offset": 5,
                "field": "text",
                "passage_score": 0.9
            }]
        });

        let formatted = format_value(&data, &passages).unwrap();
        assert_eq!(formatted.results.len(), 1);

        let json = serde_json::to_value(&formatted.results[0]).unwrap();
        assert_eq!(json["id"], json!(1));
        assert_eq!(json["hasPassage"], json!(true));
        assert_eq!(json["passageScore"], json!(0.9));
        assert_eq!(json["passageStart"], json!(0));
        assert_eq!(json["passageEnd"], json!(5));
        assert_eq!(json["passageField"], json!("text"));
    }

    #[test]
    fn test_first_passage_wins() {
        let data = json!({ "results": [doc(json!("d1"), "neutral")] });
        let passages = json!({
            "results": [
                { "document_id": "d1", "start_offset": 3, "end_offset": 9, "field": "text", "passage_score": 0.2 },
                { "document_id": "d1", "start_offset": 10, "end_offset": 20, "field": "title", "passage_score": 0.8 }
            ]
        });

        let formatted = format_value(&data, &passages).unwrap();
        let result = &formatted.results[0];
        assert_eq!(result.passage_start, Some(3));
        assert_eq!(result.passage_field.as_deref(), Some("text"));

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["passageScore"], json!(0.2));
    }

    #[test]
    fn test_empty_passage_list_drops_everything() {
        let data = json!({ "results": [doc(json!(1), "positive")] });

        let formatted = format_value(&data, &json!({ "results": [] })).unwrap();
        assert!(formatted.results.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let data = json!({
            "results": [doc(json!("c"), "neutral"), doc(json!("a"), "neutral"), doc(json!("b"), "neutral")]
        });

        let formatted = format_value(&data, &json!({})).unwrap();
        let ids: Vec<_> = formatted.results.iter().map(|r| r.id.clone()).collect();
        assert_eq!(
            ids,
            vec![DocumentId::from("c"), DocumentId::from("a"), DocumentId::from("b")]
        );
    }

    #[test]
    fn test_missing_nested_field_fails() {
        let mut item = doc(json!(1), "positive");
        item.as_object_mut().unwrap().remove("result_metadata");
        let err = format_value(&json!({ "results": [item] }), &json!({})).unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));

        let mut item = doc(json!(1), "positive");
        item["enriched_text"]["sentiment"]
            .as_object_mut()
            .unwrap()
            .remove("document");
        assert!(format_value(&json!({ "results": [item] }), &json!({})).is_err());

        assert!(format_value(&json!({}), &json!({})).is_err());
    }

    #[test]
    fn test_missing_leaf_fields_pass_through() {
        let data = json!({
            "results": [{
                "id": "d1",
                "result_metadata": { "score": 1.0 },
                "enriched_text": { "sentiment": { "document": { "score": 0.1 } } }
            }]
        });

        let formatted = format_value(&data, &json!({})).unwrap();
        assert_eq!(formatted.results.len(), 1);
        assert!(formatted.results[0].sentiment_label.is_none());

        let json = serde_json::to_value(&formatted.results[0]).unwrap();
        assert!(json.get("sentimentLabel").is_none());
        assert_eq!(json["sentimentScore"], json!(0.1));
    }

    #[test]
    fn test_passage_without_optional_fields() {
        let data = json!({ "results": [doc(json!("d1"), "neutral")] });
        let passages = json!({ "results": [{ "document_id": "d1" }] });

        let formatted = format_value(&data, &passages).unwrap();
        let json = serde_json::to_value(&formatted.results[0]).unwrap();
        assert_eq!(json["hasPassage"], json!(true));
        assert!(json.get("passageField").is_none());
        assert!(json.get("passageScore").is_none());
        assert!(json.get("passageStart").is_none());
    }

    #[test]
    fn test_integer_scores_keep_their_form() {
        let mut item = doc(json!(1), "positive");
        item["result_metadata"]["score"] = json!(3);
        let passages = json!({
            "results": [{ "document_id": 1, "start_offset": 0, "end_offset": 2, "field": "text", "passage_score": 7 }]
        });

        let formatted = format_value(&json!({ "results": [item] }), &passages).unwrap();
        let out = serde_json::to_string(&formatted.results[0]).unwrap();
        assert!(out.contains("\"score\":3,"));
        assert!(out.contains("\"passageScore\":7"));
    }

    #[test]
    fn test_format_is_idempotent() {
        let data = json!({ "results": [doc(json!(1), "positive"), doc(json!(2), "negative")] });
        let passages = json!({
            "results": [{ "document_id": 2, "start_offset": 1, "end_offset": 4, "field": "text", "passage_score": 0.5 }]
        });

        let first = format_value(&data, &passages).unwrap();
        let second = format_value(&data, &passages).unwrap();
        assert_eq!(first, second);
    }
}
