//! Decoding of a term's `positions` list.

use crate::error::Result;
use crate::node::TreeNode;
use crate::parser::numeric::parse_int;

/// Name of the list node holding positions.
pub const POSITIONS: &str = "positions";

/// Decode a `positions` node. Every child is a position regardless of its
/// name. Any other node yields no positions.
pub fn parse_positions<N: TreeNode>(node: &N) -> Result<Vec<i64>> {
    if node.name() != Some(POSITIONS) {
        return Ok(Vec::new());
    }

    node.children().iter().map(parse_int).collect()
}
