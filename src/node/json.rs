//! JSON response reader.
//!
//! Builds a [`NamedNode`] tree from a Solr JSON response. Solr renders its
//! named lists according to the `json.nl` request parameter:
//!
//! ```json
//! "tv": ["tf", 3, "df", 1]                 // json.nl=flat (default)
//! "tv": {"tf": 3, "df": 1}                 // json.nl=map
//! "tv": [["tf", 3], ["df", 1]]             // json.nl=arrarr
//! ```
//!
//! The reader is told which style to expect. JSON objects always become
//! named lists; object key order and duplicate keys are preserved, which
//! matters for `map` style offsets (`{"start":0,"end":3,"start":5,"end":9}`).
//!
//! Under `flat`, any array of even length whose even elements are all strings
//! (or null) is taken to be a named list. Term vector sections never contain
//! plain string arrays, so the ambiguity does not affect them.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Serialize;

use crate::error::Result;
use crate::node::{NamedNode, NodeValue};

/// How Solr rendered its named lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedListStyle {
    /// `[name1, value1, name2, value2, ...]`
    #[default]
    Flat,
    /// `{"name1": value1, "name2": value2}`
    Map,
    /// `[[name1, value1], [name2, value2]]`
    ArrArr,
}

/// Reads JSON responses into [`NamedNode`] trees.
#[derive(Debug, Clone, Default)]
pub struct JsonTreeReader {
    style: NamedListStyle,
}

impl JsonTreeReader {
    pub fn new(style: NamedListStyle) -> Self {
        JsonTreeReader { style }
    }

    pub fn style(&self) -> NamedListStyle {
        self.style
    }

    /// Parse a JSON document. The top-level value becomes the unnamed root.
    pub fn read_str(&self, json: &str) -> Result<NamedNode> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(self.convert(None, value))
    }

    pub fn read_reader<R: Read>(&self, reader: R) -> Result<NamedNode> {
        let value: JsonValue = serde_json::from_reader(reader)?;
        Ok(self.convert(None, value))
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<NamedNode> {
        let file = File::open(path.as_ref())?;
        self.read_reader(BufReader::new(file))
    }

    fn convert(&self, name: Option<String>, value: JsonValue) -> NamedNode {
        match value {
            JsonValue::String(text) | JsonValue::Number(text) => {
                NamedNode::new(name, NodeValue::Text(text))
            }
            JsonValue::Bool(b) => NamedNode::new(name, NodeValue::Text(b.to_string())),
            JsonValue::Null => NamedNode::new(name, NodeValue::Text(String::new())),
            JsonValue::Object(entries) => {
                let children = entries
                    .into_iter()
                    .map(|(key, value)| self.convert(Some(key), value))
                    .collect();
                NamedNode::new(name, NodeValue::List(children))
            }
            JsonValue::Array(items) => {
                let children = match self.style {
                    NamedListStyle::Flat if is_flat_named_list(&items) => {
                        self.convert_flat(items)
                    }
                    NamedListStyle::ArrArr if is_pair_named_list(&items) => {
                        self.convert_pairs(items)
                    }
                    _ => items
                        .into_iter()
                        .map(|item| self.convert(None, item))
                        .collect(),
                };
                NamedNode::new(name, NodeValue::List(children))
            }
        }
    }

    fn convert_flat(&self, items: Vec<JsonValue>) -> Vec<NamedNode> {
        let mut children = Vec::with_capacity(items.len() / 2);
        let mut iter = items.into_iter();
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            children.push(self.convert(key.into_name(), value));
        }
        children
    }

    fn convert_pairs(&self, items: Vec<JsonValue>) -> Vec<NamedNode> {
        items
            .into_iter()
            .filter_map(|item| match item {
                JsonValue::Array(pair) => {
                    let mut pair = pair.into_iter();
                    match (pair.next(), pair.next()) {
                        (Some(key), Some(value)) => Some(self.convert(key.into_name(), value)),
                        _ => None,
                    }
                }
                _ => None,
            })
            .collect()
    }
}

fn is_name(value: &JsonValue) -> bool {
    matches!(value, JsonValue::String(_) | JsonValue::Null)
}

fn is_flat_named_list(items: &[JsonValue]) -> bool {
    items.len() % 2 == 0 && items.iter().step_by(2).all(is_name)
}

fn is_pair_named_list(items: &[JsonValue]) -> bool {
    !items.is_empty()
        && items.iter().all(|item| match item {
            JsonValue::Array(pair) => pair.len() == 2 && is_name(&pair[0]),
            _ => false,
        })
}

/// Order- and duplicate-preserving JSON value.
///
/// `serde_json::Value` collapses repeated object keys, which would lose all
/// but one offset in a `map` style response.
#[derive(Debug, Clone, PartialEq)]
enum JsonValue {
    Null,
    Bool(bool),
    /// Number in its shortest round-trip decimal form.
    Number(String),
    String(String),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    fn into_name(self) -> Option<String> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Number(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Number(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Number(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<JsonValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<JsonValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
            entries.push((key, value));
        }
        Ok(JsonValue::Object(entries))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::TermVecError;
    use crate::node::TreeNode;

    fn names(node: &NamedNode) -> Vec<Option<&str>> {
        node.children().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_scalars_become_text() {
        let reader = JsonTreeReader::default();
        let root = reader
            .read_str(r#"{"s": "abc", "i": 3, "f": 0.25, "b": true, "n": null}"#)
            .unwrap();

        assert!(root.name().is_none());
        assert_eq!(names(&root), vec![Some("s"), Some("i"), Some("f"), Some("b"), Some("n")]);
        let texts: Vec<String> = root.children().iter().map(|c| c.text().into_owned()).collect();
        assert_eq!(texts, vec!["abc", "3", "0.25", "true", ""]);
    }

    #[test]
    fn test_flat_named_list() {
        let reader = JsonTreeReader::new(NamedListStyle::Flat);
        let root = reader
            .read_str(r#"{"tv": ["tf", 3, "offsets", ["start", 0, "end", 3]]}"#)
            .unwrap();

        let tv = root.find_child("tv").unwrap();
        assert_eq!(names(tv), vec![Some("tf"), Some("offsets")]);
        let offsets = tv.find_child("offsets").unwrap();
        assert_eq!(names(offsets), vec![Some("start"), Some("end")]);
        assert_eq!(offsets.children()[1].text(), "3");
    }

    #[test]
    fn test_flat_plain_array_stays_unnamed() {
        let reader = JsonTreeReader::new(NamedListStyle::Flat);
        let root = reader.read_str(r#"{"a": [1, 2, 3]}"#).unwrap();

        let a = root.find_child("a").unwrap();
        assert_eq!(names(a), vec![None, None, None]);
        assert_eq!(a.text(), "123");
    }

    #[test]
    fn test_map_preserves_duplicate_keys() {
        let reader = JsonTreeReader::new(NamedListStyle::Map);
        let root = reader
            .read_str(r#"{"offsets": {"start": 0, "end": 3, "start": 5, "end": 9}}"#)
            .unwrap();

        let offsets = root.find_child("offsets").unwrap();
        assert_eq!(
            names(offsets),
            vec![Some("start"), Some("end"), Some("start"), Some("end")]
        );
        assert_eq!(offsets.children()[2].text(), "5");
    }

    #[test]
    fn test_map_does_not_pair_arrays() {
        let reader = JsonTreeReader::new(NamedListStyle::Map);
        let root = reader.read_str(r#"{"a": ["x", 1]}"#).unwrap();

        assert_eq!(names(root.find_child("a").unwrap()), vec![None, None]);
    }

    #[test]
    fn test_arrarr_named_list() {
        let reader = JsonTreeReader::new(NamedListStyle::ArrArr);
        let root = reader
            .read_str(r#"{"tv": [["tf", 3], ["positions", [["position", 7]]]]}"#)
            .unwrap();

        let tv = root.find_child("tv").unwrap();
        assert_eq!(names(tv), vec![Some("tf"), Some("positions")]);
        let positions = tv.find_child("positions").unwrap();
        assert_eq!(positions.children()[0].name(), Some("position"));
        assert_eq!(positions.children()[0].text(), "7");
    }

    #[test]
    fn test_invalid_json() {
        let reader = JsonTreeReader::default();
        let result = reader.read_str("{\"tv\": [");
        assert!(matches!(result, Err(TermVecError::Json(_))));
    }

    #[test]
    fn test_read_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"termVectors": ["uniqueKeyFieldName", "id"]}}"#).unwrap();
        file.flush().unwrap();

        let root = JsonTreeReader::default().read_path(file.path()).unwrap();
        let tv = root.find_child("termVectors").unwrap();
        assert_eq!(tv.find_child("uniqueKeyFieldName").unwrap().text(), "id");
    }

    #[test]
    fn test_read_missing_path() {
        let result = JsonTreeReader::default().read_path("/nonexistent/termvec/response.json");
        assert!(matches!(result, Err(TermVecError::Io(_))));
    }
}
