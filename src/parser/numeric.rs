//! Numeric decoding of scalar node text.

use crate::error::{Result, TermVecError};
use crate::node::TreeNode;

fn label<N: TreeNode>(node: &N) -> &str {
    node.name().unwrap_or("<unnamed>")
}

/// Parse a node's text as a base-10 integer.
pub(crate) fn parse_int<N: TreeNode>(node: &N) -> Result<i64> {
    let text = node.text();
    text.trim()
        .parse::<i64>()
        .map_err(|_| TermVecError::malformed_numeric(label(node), &text))
}

/// Parse a node's text as a float. The decimal separator is always `.`.
pub(crate) fn parse_float<N: TreeNode>(node: &N) -> Result<f64> {
    let text = node.text();
    text.trim()
        .parse::<f64>()
        .map_err(|_| TermVecError::malformed_numeric(label(node), &text))
}
