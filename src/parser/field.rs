//! Decoding of a field node.

use log::trace;

use crate::error::{Result, TermVecError};
use crate::node::TreeNode;
use crate::parser::term::parse_term;
use crate::term_vector::TermVectorResult;

/// Decode a field node into its terms.
///
/// The node's name is the field. Terms are decoded lazily, one per child, in
/// order; each item fails independently.
pub fn parse_field<N: TreeNode>(
    node: &N,
) -> Result<impl Iterator<Item = Result<TermVectorResult>> + '_> {
    let field = node
        .name()
        .ok_or_else(|| TermVecError::missing_attribute("name of field node"))?;

    trace!("Decoding {} terms of field '{field}'", node.children().len());

    Ok(node
        .children()
        .iter()
        .map(move |term| parse_term(term, field)))
}
