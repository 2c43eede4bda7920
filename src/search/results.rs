// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! FT.SEARCH reply decoding
//!
//! The reply is a flat array: the total match count followed by one group
//! per returned document. Group width depends on the request flags
//! (see [`QueryOptions::stride`]):
//!
//! ```text
//! [ total,
//!   key, [score], [explanation], [field list],
//!   key, [score], [explanation], [field list],
//!   ... ]
//! ```
//!
//! The length is checked against the stride before anything is indexed, so a
//! reply that does not match the request is a [`DecodeError`] rather than a
//! silently shifted result set.

use std::collections::HashMap;

use redis::Value;

use crate::error::DecodeError;

use super::query::QueryOptions;

/// Server-side breakdown of how a score was computed (`EXPLAINSCORE`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreExplanation {
    pub text: String,
    pub children: Vec<ScoreExplanation>,
}

impl ScoreExplanation {
    fn decode(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let (head, rest) = items.split_first()?;
                let text = value_to_string(head)?;
                let mut children = Vec::new();
                for item in rest {
                    match item {
                        Value::Array(nested) => {
                            for child in nested {
                                children.push(Self::decode(child)?);
                            }
                        }
                        other => children.push(Self::decode(other)?),
                    }
                }
                Some(Self { text, children })
            }
            other => value_to_string(other).map(|text| Self {
                text,
                children: Vec::new(),
            }),
        }
    }
}

/// One matched document.
///
/// `score`, `explanation` and `fields` are `Some` exactly when the query asked
/// for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub key: String,
    pub score: Option<f64>,
    pub explanation: Option<ScoreExplanation>,
    pub fields: Option<HashMap<String, String>>,
}

impl QueryResult {
    /// Shortcut for a single returned field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.as_ref()?.get(name).map(String::as_str)
    }
}

/// Decoded FT.SEARCH reply, results in server order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResults {
    /// Total matches on the server, not just the returned page
    pub total: i64,
    pub results: Vec<QueryResult>,
}

impl QueryResults {
    /// Decode `reply` using the flags of the query that produced it.
    pub fn decode(reply: &Value, query: &QueryOptions) -> Result<Self, DecodeError> {
        let elements = match reply {
            Value::Array(elements) => elements,
            _ => return Err(DecodeError::NotAnArray),
        };

        let (count, rest) = elements.split_first().ok_or(DecodeError::Empty)?;
        let total = decode_count(count)?;

        let stride = query.stride();
        if rest.len() % stride != 0 {
            return Err(DecodeError::StrideMismatch {
                elements: rest.len(),
                stride,
            });
        }

        let mut results = Vec::with_capacity(rest.len() / stride);
        for (index, group) in rest.chunks(stride).enumerate() {
            results.push(decode_group(index, group, query)?);
        }

        Ok(Self { total, results })
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Look up a result by document key
    pub fn get(&self, key: &str) -> Option<&QueryResult> {
        self.results.iter().find(|r| r.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryResult> {
        self.results.iter()
    }
}

impl IntoIterator for QueryResults {
    type Item = QueryResult;
    type IntoIter = std::vec::IntoIter<QueryResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

fn decode_group(index: usize, group: &[Value], query: &QueryOptions) -> Result<QueryResult, DecodeError> {
    let mut values = group.iter();
    // chunks() guarantees the group is exactly `stride` long, and stride >= 1
    let key = values
        .next()
        .and_then(value_to_string)
        .ok_or(DecodeError::InvalidKey { index })?;

    let mut result = QueryResult {
        key,
        ..Default::default()
    };

    if query.with_scores {
        let score = values
            .next()
            .and_then(decode_score)
            .ok_or_else(|| DecodeError::InvalidScore { key: result.key.clone() })?;
        result.score = Some(score);
    }

    if query.explain_score {
        let explanation = values
            .next()
            .and_then(ScoreExplanation::decode)
            .ok_or_else(|| DecodeError::InvalidExplanation { key: result.key.clone() })?;
        result.explanation = Some(explanation);
    }

    if !query.no_content {
        let fields = values
            .next()
            .and_then(decode_fields)
            .ok_or_else(|| DecodeError::InvalidFields { key: result.key.clone() })?;
        result.fields = Some(fields);
    }

    Ok(result)
}

fn decode_count(value: &Value) -> Result<i64, DecodeError> {
    match value {
        Value::Int(n) => Ok(*n),
        other => value_to_string(other)
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| DecodeError::InvalidCount(format!("{:?}", other))),
    }
}

fn decode_score(value: &Value) -> Option<f64> {
    match value {
        Value::Double(score) => Some(*score),
        Value::Int(score) => Some(*score as f64),
        // WITHSCORES + EXPLAINSCORE on some server versions nests [score, explanation]
        Value::Array(items) => items.first().and_then(decode_score),
        other => value_to_string(other)?.parse::<f64>().ok(),
    }
}

fn decode_fields(value: &Value) -> Option<HashMap<String, String>> {
    match value {
        Value::Array(items) => {
            if items.len() % 2 != 0 {
                return None;
            }
            items
                .chunks(2)
                .map(|pair| Some((value_to_string(&pair[0])?, value_to_string(&pair[1])?)))
                .collect()
        }
        Value::Map(pairs) => pairs
            .iter()
            .map(|(k, v)| Some((value_to_string(k)?, value_to_string(v)?)))
            .collect(),
        Value::Nil => Some(HashMap::new()),
        _ => None,
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::BulkString(bytes) => String::from_utf8(bytes.clone()).ok(),
        Value::SimpleString(s) => Some(s.clone()),
        Value::VerbatimString { text, .. } => Some(text.clone()),
        Value::Int(n) => Some(n.to_string()),
        Value::Double(v) => Some(v.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulk(s: &str) -> Value {
        Value::BulkString(s.as_bytes().to_vec())
    }

    fn fields(pairs: &[(&str, &str)]) -> Value {
        Value::Array(pairs.iter().flat_map(|(k, v)| [bulk(k), bulk(v)]).collect())
    }

    #[test]
    fn test_decode_default_query() {
        let query = QueryOptions::new("idx", "hello");
        let reply = Value::Array(vec![
            Value::Int(2),
            bulk("doc:1"),
            fields(&[("title", "Hello"), ("body", "world")]),
            bulk("doc:2"),
            fields(&[("title", "Hi")]),
        ]);

        let results = QueryResults::decode(&reply, &query).unwrap();
        assert_eq!(results.total, 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["doc:1", "doc:2"]);

        let first = results.get("doc:1").unwrap();
        assert_eq!(first.field("title"), Some("Hello"));
        assert_eq!(first.field("body"), Some("world"));
        assert!(first.score.is_none());
        assert!(first.explanation.is_none());
    }

    #[test]
    fn test_decode_with_scores() {
        let query = QueryOptions::new("idx", "hello").with_scores();
        let reply = Value::Array(vec![
            Value::Int(1),
            bulk("doc:1"),
            bulk("1.5"),
            fields(&[("title", "Hello")]),
        ]);

        let results = QueryResults::decode(&reply, &query).unwrap();
        let doc = results.get("doc:1").unwrap();
        assert_eq!(doc.score, Some(1.5));
        assert_eq!(doc.field("title"), Some("Hello"));
    }

    #[test]
    fn test_decode_no_content() {
        let query = QueryOptions::new("idx", "hello").no_content();
        let reply = Value::Array(vec![Value::Int(3), bulk("a"), bulk("b"), bulk("c")]);

        let results = QueryResults::decode(&reply, &query).unwrap();
        assert_eq!(results.total, 3);
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(results.iter().all(|r| r.fields.is_none()));
    }

    #[test]
    fn test_decode_with_explanation() {
        let query = QueryOptions::new("idx", "hello").with_scores().explain_score();
        let explanation = Value::Array(vec![
            bulk("Final TFIDF : words TFIDF 1.00 * document score 1.00"),
            Value::Array(vec![bulk("(TFIDF 1.00 = Weight 1.00 * Frequency 1)")]),
        ]);
        let reply = Value::Array(vec![
            Value::Int(1),
            bulk("doc:1"),
            bulk("1"),
            explanation,
            fields(&[("title", "hello")]),
        ]);

        let results = QueryResults::decode(&reply, &query).unwrap();
        let doc = results.get("doc:1").unwrap();
        let explanation = doc.explanation.as_ref().unwrap();
        assert!(explanation.text.starts_with("Final TFIDF"));
        assert_eq!(explanation.children.len(), 1);
        assert_eq!(doc.score, Some(1.0));
    }

    #[test]
    fn test_decode_empty_result_set() {
        let query = QueryOptions::new("idx", "nothing");
        let results = QueryResults::decode(&Value::Array(vec![Value::Int(0)]), &query).unwrap();
        assert_eq!(results.total, 0);
        assert!(results.is_empty());
    }

    #[test]
    fn test_count_only_page() {
        // LIMIT 0 0 returns the total with no documents
        let query = QueryOptions::new("idx", "*").with_limit(0, 0);
        let results = QueryResults::decode(&Value::Array(vec![Value::Int(42)]), &query).unwrap();
        assert_eq!(results.total, 42);
        assert!(results.is_empty());
    }

    #[test]
    fn test_stride_mismatch_is_an_error() {
        // Scores were requested but the reply has none
        let query = QueryOptions::new("idx", "hello").with_scores();
        let reply = Value::Array(vec![
            Value::Int(2),
            bulk("doc:1"),
            fields(&[("a", "1")]),
            bulk("doc:2"),
            fields(&[("a", "2")]),
        ]);

        assert_eq!(
            QueryResults::decode(&reply, &query),
            Err(DecodeError::StrideMismatch { elements: 4, stride: 3 })
        );
    }

    #[test]
    fn test_wrong_element_type_is_an_error() {
        let query = QueryOptions::new("idx", "hello").with_scores().no_content();
        let reply = Value::Array(vec![Value::Int(1), bulk("doc:1"), bulk("not-a-number")]);
        assert_eq!(
            QueryResults::decode(&reply, &query),
            Err(DecodeError::InvalidScore { key: "doc:1".into() })
        );

        let query = QueryOptions::new("idx", "hello");
        let reply = Value::Array(vec![Value::Int(1), bulk("doc:1"), Value::Array(vec![bulk("odd")])]);
        assert_eq!(
            QueryResults::decode(&reply, &query),
            Err(DecodeError::InvalidFields { key: "doc:1".into() })
        );

        let reply = Value::Array(vec![Value::Int(1), Value::Array(vec![]), fields(&[])]);
        assert_eq!(QueryResults::decode(&reply, &query), Err(DecodeError::InvalidKey { index: 0 }));
    }

    #[test]
    fn test_malformed_envelope() {
        let query = QueryOptions::new("idx", "q");
        assert_eq!(QueryResults::decode(&Value::Okay, &query), Err(DecodeError::NotAnArray));
        assert_eq!(QueryResults::decode(&Value::Array(vec![]), &query), Err(DecodeError::Empty));
        assert!(matches!(
            QueryResults::decode(&Value::Array(vec![Value::Nil]), &query),
            Err(DecodeError::InvalidCount(_))
        ));
    }

    #[test]
    fn test_resp3_shapes() {
        let query = QueryOptions::new("idx", "q").with_scores();
        let reply = Value::Array(vec![
            bulk("1"),
            bulk("doc:1"),
            Value::Double(0.75),
            Value::Map(vec![(bulk("title"), bulk("t"))]),
        ]);

        let results = QueryResults::decode(&reply, &query).unwrap();
        assert_eq!(results.total, 1);
        let doc = results.get("doc:1").unwrap();
        assert_eq!(doc.score, Some(0.75));
        assert_eq!(doc.field("title"), Some("t"));
    }

    #[test]
    fn test_into_iter_keeps_server_order() {
        let query = QueryOptions::new("idx", "q").no_content();
        let reply = Value::Array(vec![Value::Int(2), bulk("z"), bulk("a")]);
        let keys: Vec<String> = QueryResults::decode(&reply, &query)
            .unwrap()
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
