//! Decoding of the whole term vector section.

use log::debug;

use crate::error::Result;
use crate::node::TreeNode;
use crate::parser::TermVectorParserConfig;
use crate::parser::document::parse_document;
use crate::parser::field::parse_field;
use crate::parser::term::parse_term;
use crate::response::{QueryResults, ResponseParser};
use crate::term_vector::{TermVectorDocumentResult, TermVectorResult, TermVectorResults};

/// Decodes the term vector section of a search response.
///
/// The `warnings` and `uniqueKeyFieldName` children of the section are
/// skipped: their contents are not decoded and not reported to callers.
/// More-like-this responses are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TermVectorResultsParser {
    config: TermVectorParserConfig,
}

impl TermVectorResultsParser {
    /// Create a parser for Solr's default section layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TermVectorParserConfig) -> Self {
        TermVectorResultsParser { config }
    }

    pub fn config(&self) -> &TermVectorParserConfig {
        &self.config
    }

    /// Find the term vector section among the children of the response root.
    pub fn find_root<'a, N: TreeNode>(&self, tree: &'a N) -> Option<&'a N> {
        let root_section = self.config.root_section.as_str();
        tree.children()
            .iter()
            .find(|child| child.is_list() && child.name() == Some(root_section))
    }

    /// Decode the term vector section of a full response.
    ///
    /// Returns `None` when the response has no term vector section, i.e. term
    /// vectors were not requested.
    pub fn parse_response<N: TreeNode>(&self, tree: &N) -> Result<Option<TermVectorResults>> {
        match self.find_root(tree) {
            Some(root) => self.parse_all(root).map(Some),
            None => {
                debug!("No '{}' section in response", self.config.root_section);
                Ok(None)
            }
        }
    }

    /// Decode every document of a term vector section node, in order.
    pub fn parse_all<N: TreeNode>(&self, root: &N) -> Result<TermVectorResults> {
        let mut results = TermVectorResults::new();

        for child in root.children() {
            if let Some(name) = child.name() {
                if self.config.is_skipped(name) {
                    debug!("Skipping unsupported term vector section '{name}'");
                    continue;
                }
            }
            if !child.is_list() {
                debug!("Skipping scalar term vector entry {:?}", child.name());
                continue;
            }

            let document = self.parse_document(child)?;
            debug!(
                "Decoded term vectors of document {:?}: {} terms",
                document.unique_key,
                document.terms.len()
            );
            results.push(document);
        }

        Ok(results)
    }

    pub fn parse_document<N: TreeNode>(&self, node: &N) -> Result<TermVectorDocumentResult> {
        parse_document(node, &self.config)
    }

    /// Decode a field node eagerly.
    pub fn parse_field<N: TreeNode>(&self, node: &N) -> Result<Vec<TermVectorResult>> {
        parse_field(node)?.collect()
    }

    pub fn parse_term<N: TreeNode>(&self, node: &N, field_name: &str) -> Result<TermVectorResult> {
        parse_term(node, field_name)
    }
}

impl ResponseParser for TermVectorResultsParser {
    fn parse<N: TreeNode>(&self, tree: &N, results: &mut QueryResults) -> Result<()> {
        match results {
            QueryResults::Query(results) => {
                if let Some(term_vectors) = self.parse_response(tree)? {
                    results.set_term_vector_results(term_vectors);
                }
            }
            QueryResults::MoreLikeThis(_) => {}
        }
        Ok(())
    }
}
