//! Decoding of the term vector section of a search response.
//!
//! The section is a tree of named lists:
//!
//! ```text
//! termVectors
//! ├── uniqueKeyFieldName = "id"          (skipped)
//! ├── warnings { ... }                   (skipped)
//! └── doc1
//!     ├── uniqueKey = "42"
//!     └── includes
//!         └── title                      field
//!             └── the                    term
//!                 ├── tf = 3
//!                 ├── df = 1
//!                 ├── tf-idf = 0.5
//!                 ├── offsets { start = 0, end = 3 }
//!                 └── positions { position = 0 }
//! ```
//!
//! Decoding runs leaves first: [`offset`] and [`position`] decode the value
//! lists of a term, [`term`] a single term, [`field`] a field's terms,
//! [`document`] one document, and [`results`] the whole section.
//!
//! # Examples
//!
//! ```
//! use termvec::node::NamedNode;
//! use termvec::parser::TermVectorResultsParser;
//!
//! let response = NamedNode::unnamed_list(vec![NamedNode::list(
//!     "termVectors",
//!     vec![NamedNode::list(
//!         "doc1",
//!         vec![
//!             NamedNode::text("uniqueKey", "42"),
//!             NamedNode::list(
//!                 "includes",
//!                 vec![NamedNode::list(
//!                     "title",
//!                     vec![NamedNode::list("the", vec![NamedNode::text("tf", "3")])],
//!                 )],
//!             ),
//!         ],
//!     )],
//! )]);
//!
//! let parser = TermVectorResultsParser::new();
//! let results = parser.parse_response(&response).unwrap().unwrap();
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].unique_key.as_deref(), Some("42"));
//! assert_eq!(results[0].terms[0].tf, Some(3));
//! ```

use serde::{Deserialize, Serialize};

pub mod document;
pub mod field;
pub mod offset;
pub mod position;
pub mod results;
pub mod term;

mod numeric;

pub use document::parse_document;
pub use field::parse_field;
pub use offset::parse_offsets;
pub use position::parse_positions;
pub use results::TermVectorResultsParser;
pub use term::parse_term;

/// Names of the structural nodes of the term vector section.
///
/// The defaults match what Solr's term vector component emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermVectorParserConfig {
    /// Name of the section list under the response root.
    pub root_section: String,

    /// Children of the section that are not documents.
    pub skipped_sections: Vec<String>,

    /// Child of a document holding its unique key.
    pub unique_key_name: String,

    /// Child of a document holding its field lists.
    pub includes_name: String,
}

impl Default for TermVectorParserConfig {
    fn default() -> Self {
        TermVectorParserConfig {
            root_section: "termVectors".to_string(),
            skipped_sections: vec!["warnings".to_string(), "uniqueKeyFieldName".to_string()],
            unique_key_name: "uniqueKey".to_string(),
            includes_name: "includes".to_string(),
        }
    }
}

impl TermVectorParserConfig {
    /// Whether a child of the section is a known non-document section.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skipped_sections.iter().any(|s| s == name)
    }
}
