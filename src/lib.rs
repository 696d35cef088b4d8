//! # termvec
//!
//! Decoding of search engine term vector responses into typed results.
//!
//! A term vector response is a tree of named lists with no schema: documents,
//! fields, terms and their statistics are told apart only by node names and
//! positions. This crate walks that tree and produces
//! [`TermVectorResults`](term_vector::TermVectorResults).
//!
//! ## Features
//!
//! - Format-independent decoding over the [`TreeNode`](node::TreeNode) trait
//! - Solr JSON responses in all `json.nl` named-list styles
//! - Optional statistics kept distinct from reported zeros
//! - All-or-nothing decoding with typed errors
//!
//! ## Example
//!
//! ```
//! use termvec::node::json::{JsonTreeReader, NamedListStyle};
//! use termvec::parser::TermVectorResultsParser;
//!
//! let json = r#"{
//!     "responseHeader": {"status": 0},
//!     "termVectors": [
//!         "uniqueKeyFieldName", "id",
//!         "doc1", [
//!             "uniqueKey", "42",
//!             "includes", ["title", ["the", ["tf", 3, "positions", ["position", 0]]]]
//!         ]
//!     ]
//! }"#;
//!
//! let tree = JsonTreeReader::new(NamedListStyle::Flat).read_str(json).unwrap();
//! let results = TermVectorResultsParser::new().parse_response(&tree).unwrap().unwrap();
//!
//! let doc = results.by_unique_key("42").unwrap();
//! let the = doc.term("title", "the").unwrap();
//! assert_eq!(the.tf, Some(3));
//! assert_eq!(the.df, None);
//! assert_eq!(the.positions, vec![0]);
//! ```

pub mod error;
pub mod node;
pub mod parser;
pub mod response;
pub mod term_vector;

pub mod prelude {
    pub use crate::error::{Result, TermVecError};
    pub use crate::node::json::{JsonTreeReader, NamedListStyle};
    pub use crate::node::{NamedNode, NodeValue, TreeNode};
    pub use crate::parser::{TermVectorParserConfig, TermVectorResultsParser};
    pub use crate::response::{MoreLikeThisResults, QueryResults, ResponseParser, SearchResults};
    pub use crate::term_vector::{
        Offset, TermVectorDocumentResult, TermVectorResult, TermVectorResults,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
