#![forbid(unsafe_code)]

//! Parsing, lookup and serialization over a `xot` arena.

use hagalund_core::Error;
use xot::{Node, Xot};

/// Parse XML text into `xot` and return the document node.
pub fn parse(xot: &mut Xot, text: &str) -> Result<Node, Error> {
    xot.parse(text).map_err(|e| Error::XmlParse(e.to_string()))
}

/// Parse XML text and return its document element.
pub fn parse_element(xot: &mut Xot, text: &str) -> Result<Node, Error> {
    let doc = parse(xot, text)?;
    Ok(xot.document_element(doc)?)
}

/// Find the first descendant-or-self element of `root` with the given
/// namespace and local name.
pub fn find_element(xot: &Xot, root: Node, ns: &str, local_name: &str) -> Option<Node> {
    let namespace = xot.namespace(ns)?;
    let name = xot.name_ns(local_name, namespace)?;
    xot.descendants(root)
        .find(|n| xot.element(*n).is_some_and(|e| e.name() == name))
}

/// Serialize a node (and its subtree) to a string.
pub fn serialize(xot: &Xot, node: Node) -> Result<String, Error> {
    Ok(xot.to_string(node)?)
}
