//! Decoding of a term's `offsets` list.
//!
//! Each offset is two consecutive nodes. Only the first one is named
//! (`start`); the end value is whatever node follows it:
//!
//! ```text
//! offsets
//! ├── start = 10
//! ├── end   = 20
//! ├── start = 25
//! └── end   = 40
//! ```

use crate::error::{Result, TermVecError};
use crate::node::TreeNode;
use crate::parser::numeric::parse_int;
use crate::term_vector::Offset;

/// Name of the list node holding offsets.
pub const OFFSETS: &str = "offsets";

/// Name of the node opening an offset pair.
pub const START: &str = "start";

/// Decode an `offsets` node. Any other node yields no offsets.
pub fn parse_offsets<N: TreeNode>(node: &N) -> Result<Vec<Offset>> {
    if node.name() != Some(OFFSETS) {
        return Ok(Vec::new());
    }

    let siblings = node.children();
    siblings
        .iter()
        .enumerate()
        .filter(|(_, child)| child.name() == Some(START))
        .map(|(index, start)| -> Result<Offset> {
            let end = pair_with_next_sibling(siblings, index)?;
            Ok(Offset::new(parse_int(start)?, parse_int(end)?))
        })
        .collect()
}

/// The node directly after `siblings[index]`, which holds its paired value.
///
/// Each `start` is paired on its own: a `start` that directly follows another
/// one is used as that one's end and still opens a pair of its own.
pub fn pair_with_next_sibling<N: TreeNode>(siblings: &[N], index: usize) -> Result<&N> {
    siblings.get(index + 1).ok_or_else(|| {
        TermVecError::malformed_offset(format!(
            "'{}' at position {index} has no following end value",
            siblings
                .get(index)
                .and_then(|n| n.name())
                .unwrap_or("<unnamed>"),
        ))
    })
}
