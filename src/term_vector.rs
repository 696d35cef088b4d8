//! Typed term vector results.
//!
//! These are the values produced by [`crate::parser`]: one
//! [`TermVectorDocumentResult`] per document in the response, each holding the
//! per-field, per-term statistics the server reported.
//!
//! # Examples
//!
//! ```
//! use termvec::term_vector::{
//!     Offset, TermVectorDocumentResult, TermVectorResult, TermVectorResults,
//! };
//!
//! let term = TermVectorResult::new("title", "rust")
//!     .with_tf(2)
//!     .with_offsets(vec![Offset::new(0, 4), Offset::new(10, 14)]);
//! let doc = TermVectorDocumentResult::new(Some("doc1".to_string()), vec![term]);
//! let results = TermVectorResults::from(vec![doc]);
//!
//! let doc = results.by_unique_key("doc1").unwrap();
//! assert_eq!(doc.term("title", "rust").unwrap().tf, Some(2));
//! ```

use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;

use serde::{Deserialize, Serialize};

/// A (start, end) character position pair locating a term occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    /// Start offset (inclusive).
    pub start: i64,
    /// End offset (exclusive).
    pub end: i64,
}

impl Offset {
    pub fn new(start: i64, end: i64) -> Self {
        Offset { start, end }
    }

    /// Length of the occurrence in characters, saturating at the `i64` bounds.
    pub fn len(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }
}

/// Statistics for a single term in a single field of a document.
///
/// `tf`, `df` and `tf_idf` are `None` when the server did not report them,
/// which is distinct from a reported zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermVectorResult {
    /// Field the term was indexed in.
    pub field: String,
    /// The term text.
    pub term: String,
    /// Term frequency within the field.
    pub tf: Option<i64>,
    /// Document frequency across the index.
    pub df: Option<i64>,
    /// Term frequency times inverse document frequency.
    pub tf_idf: Option<f64>,
    /// Character offsets of each occurrence.
    pub offsets: Vec<Offset>,
    /// Token positions of each occurrence.
    pub positions: Vec<i64>,
}

impl TermVectorResult {
    /// Create a result with no statistics, offsets or positions.
    pub fn new<F: Into<String>, T: Into<String>>(field: F, term: T) -> Self {
        TermVectorResult {
            field: field.into(),
            term: term.into(),
            tf: None,
            df: None,
            tf_idf: None,
            offsets: Vec::new(),
            positions: Vec::new(),
        }
    }

    pub fn with_tf(mut self, tf: i64) -> Self {
        self.tf = Some(tf);
        self
    }

    pub fn with_df(mut self, df: i64) -> Self {
        self.df = Some(df);
        self
    }

    pub fn with_tf_idf(mut self, tf_idf: f64) -> Self {
        self.tf_idf = Some(tf_idf);
        self
    }

    pub fn with_offsets(mut self, offsets: Vec<Offset>) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn with_positions(mut self, positions: Vec<i64>) -> Self {
        self.positions = positions;
        self
    }
}

/// Term vectors of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermVectorDocumentResult {
    /// Value of the document's unique key, if the response carried one.
    pub unique_key: Option<String>,
    /// Term vectors of all fields, in response order.
    pub terms: Vec<TermVectorResult>,
}

impl TermVectorDocumentResult {
    pub fn new(unique_key: Option<String>, terms: Vec<TermVectorResult>) -> Self {
        TermVectorDocumentResult { unique_key, terms }
    }

    /// Iterate over the terms of a single field.
    pub fn terms_for_field<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a TermVectorResult> {
        self.terms.iter().filter(move |t| t.field == field)
    }

    /// Get the first result for `term` in `field`.
    pub fn term(&self, field: &str, term: &str) -> Option<&TermVectorResult> {
        self.terms
            .iter()
            .find(|t| t.field == field && t.term == term)
    }
}

/// All term vector documents of a response, in response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVectorResults {
    documents: Vec<TermVectorDocumentResult>,
}

impl TermVectorResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, document: TermVectorDocumentResult) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TermVectorDocumentResult> {
        self.documents.get(index)
    }

    pub fn iter(&self) -> Iter<'_, TermVectorDocumentResult> {
        self.documents.iter()
    }

    /// Find the first document whose unique key equals `key`.
    pub fn by_unique_key(&self, key: &str) -> Option<&TermVectorDocumentResult> {
        self.documents
            .iter()
            .find(|d| d.unique_key.as_deref() == Some(key))
    }

    pub fn as_slice(&self) -> &[TermVectorDocumentResult] {
        &self.documents
    }

    pub fn into_vec(self) -> Vec<TermVectorDocumentResult> {
        self.documents
    }
}

impl From<Vec<TermVectorDocumentResult>> for TermVectorResults {
    fn from(documents: Vec<TermVectorDocumentResult>) -> Self {
        TermVectorResults { documents }
    }
}

impl Index<usize> for TermVectorResults {
    type Output = TermVectorDocumentResult;

    fn index(&self, index: usize) -> &Self::Output {
        &self.documents[index]
    }
}

impl IntoIterator for TermVectorResults {
    type Item = TermVectorDocumentResult;
    type IntoIter = IntoIter<TermVectorDocumentResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a TermVectorResults {
    type Item = &'a TermVectorDocumentResult;
    type IntoIter = Iter<'a, TermVectorDocumentResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> TermVectorDocumentResult {
        TermVectorDocumentResult::new(
            Some("42".to_string()),
            vec![
                TermVectorResult::new("title", "the").with_tf(3),
                TermVectorResult::new("body", "the").with_tf(7),
                TermVectorResult::new("title", "rust").with_df(1),
            ],
        )
    }

    #[test]
    fn test_offset_len() {
        let offset = Offset::new(10, 20);
        assert_eq!(offset.len(), 10);
        assert!(!offset.is_empty());
        assert!(Offset::new(5, 5).is_empty());
    }

    #[test]
    fn test_offset_len_at_i64_bounds() {
        let offset = Offset::new(i64::MIN, i64::MAX);
        assert_eq!(offset.len(), i64::MAX);
        assert!(!offset.is_empty());

        let reversed = Offset::new(i64::MAX, i64::MIN);
        assert_eq!(reversed.len(), i64::MIN);
        assert!(reversed.is_empty());
    }

    #[test]
    fn test_absent_statistics_are_not_zero() {
        let result = TermVectorResult::new("title", "the");
        assert_eq!(result.tf, None);
        assert_ne!(result.tf, Some(0));
        assert!(result.offsets.is_empty());
        assert!(result.positions.is_empty());
    }

    #[test]
    fn test_terms_for_field() {
        let doc = sample_document();
        let terms: Vec<&str> = doc.terms_for_field("title").map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["the", "rust"]);
        assert_eq!(doc.terms_for_field("missing").count(), 0);
    }

    #[test]
    fn test_term_lookup() {
        let doc = sample_document();
        assert_eq!(doc.term("body", "the").unwrap().tf, Some(7));
        assert!(doc.term("body", "rust").is_none());
    }

    #[test]
    fn test_results_lookup() {
        let results = TermVectorResults::from(vec![
            TermVectorDocumentResult::new(None, Vec::new()),
            sample_document(),
        ]);

        assert_eq!(results.len(), 2);
        assert!(results.by_unique_key("42").is_some());
        assert!(results.by_unique_key("43").is_none());
        assert_eq!(results[1].terms.len(), 3);
        assert_eq!(results.iter().filter(|d| d.unique_key.is_none()).count(), 1);
    }

    #[test]
    fn test_results_serialize_as_array() {
        let results = TermVectorResults::from(vec![sample_document()]);
        let json = serde_json::to_value(&results).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["unique_key"], "42");
        assert_eq!(json[0]["terms"][0]["tf"], 3);
        assert!(json[0]["terms"][0]["tf_idf"].is_null());
    }
}
