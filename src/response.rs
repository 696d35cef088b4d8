//! Query result containers populated by response section parsers.

use crate::error::Result;
use crate::node::TreeNode;
use crate::term_vector::TermVectorResults;

/// A parser for one section of a search response.
///
/// Implementations read their section out of the full response tree and
/// store what they decode in `results`. A parser whose section is absent
/// leaves `results` untouched.
pub trait ResponseParser {
    fn parse<N: TreeNode>(&self, tree: &N, results: &mut QueryResults) -> Result<()>;
}

/// Results of a standard query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    term_vector_results: Option<TermVectorResults>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Term vectors of the matched documents. `None` when the query did not
    /// request them.
    pub fn term_vector_results(&self) -> Option<&TermVectorResults> {
        self.term_vector_results.as_ref()
    }

    pub fn take_term_vector_results(&mut self) -> Option<TermVectorResults> {
        self.term_vector_results.take()
    }

    pub(crate) fn set_term_vector_results(&mut self, results: TermVectorResults) {
        self.term_vector_results = Some(results);
    }
}

/// Results of a more-like-this handler query.
///
/// Term vectors are not decoded for this response shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoreLikeThisResults;

impl MoreLikeThisResults {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The result container a response is decoded into.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResults {
    Query(SearchResults),
    MoreLikeThis(MoreLikeThisResults),
}

impl Default for QueryResults {
    fn default() -> Self {
        QueryResults::Query(SearchResults::default())
    }
}

impl QueryResults {
    pub fn query() -> Self {
        QueryResults::Query(SearchResults::new())
    }

    pub fn more_like_this() -> Self {
        QueryResults::MoreLikeThis(MoreLikeThisResults::new())
    }

    /// Term vectors, if this is a standard query result that has them.
    pub fn term_vector_results(&self) -> Option<&TermVectorResults> {
        match self {
            QueryResults::Query(results) => results.term_vector_results(),
            QueryResults::MoreLikeThis(_) => None,
        }
    }
}
