//! Decoding of a single term node.

use crate::error::{Result, TermVecError};
use crate::node::TreeNode;
use crate::parser::numeric::{parse_float, parse_int};
use crate::parser::offset::parse_offsets;
use crate::parser::position::parse_positions;
use crate::term_vector::TermVectorResult;

pub const TF: &str = "tf";
pub const DF: &str = "df";
pub const TF_IDF: &str = "tf-idf";

/// Decode a term node of `field_name`.
///
/// The node's name is the term. Statistics come from the first child with
/// the matching name and are `None` when there is no such child; offsets and
/// positions are gathered from every `offsets` / `positions` child.
pub fn parse_term<N: TreeNode>(node: &N, field_name: &str) -> Result<TermVectorResult> {
    let term = node.name().ok_or_else(|| {
        TermVecError::missing_attribute(format!("name of term node in field '{field_name}'"))
    })?;

    let tf = node.find_child(TF).map(parse_int).transpose()?;
    let df = node.find_child(DF).map(parse_int).transpose()?;
    let tf_idf = node.find_child(TF_IDF).map(parse_float).transpose()?;

    let mut offsets = Vec::new();
    let mut positions = Vec::new();
    for child in node.children() {
        offsets.extend(parse_offsets(child)?);
        positions.extend(parse_positions(child)?);
    }

    Ok(TermVectorResult {
        field: field_name.to_string(),
        term: term.to_string(),
        tf,
        df,
        tf_idf,
        offsets,
        positions,
    })
}
