//! Decoding of a document node.

use crate::error::Result;
use crate::node::TreeNode;
use crate::parser::TermVectorParserConfig;
use crate::parser::field::parse_field;
use crate::term_vector::TermVectorDocumentResult;

/// Decode a document node.
///
/// The unique key is the text of the first `uniqueKey` child, if any. Terms
/// are collected from the field lists inside every `includes` child, in
/// order. Any other child is ignored.
pub fn parse_document<N: TreeNode>(
    node: &N,
    config: &TermVectorParserConfig,
) -> Result<TermVectorDocumentResult> {
    let unique_key = node
        .find_child(&config.unique_key_name)
        .map(|key| key.text().into_owned());

    let mut terms = Vec::new();
    for includes in node.children_named(&config.includes_name) {
        for field in includes.children() {
            for term in parse_field(field)? {
                terms.push(term?);
            }
        }
    }

    Ok(TermVectorDocumentResult::new(unique_key, terms))
}
