#![forbid(unsafe_code)]

//! Element, attribute and child-list helpers.
//!
//! Attribute names handled here are unqualified, which covers every
//! attribute XMLDSig defines on its own elements.

use hagalund_core::Error;
use xot::{NamespaceId, Node, Xot};

/// Create a detached element `{namespace}prefix:local_name`.
///
/// The namespace is declared on the element itself, so it serializes
/// correctly without any ancestor. `None` declares it as the default
/// namespace.
pub fn create_element(
    xot: &mut Xot,
    namespace: &str,
    prefix: Option<&str>,
    local_name: &str,
) -> Node {
    let ns = xot.add_namespace(namespace);
    let name = xot.add_name_ns(local_name, ns);
    let prefix = match prefix {
        Some(p) => xot.add_prefix(p),
        None => xot.empty_prefix(),
    };
    let element = xot.new_element(name);
    xot.namespaces_mut(element).insert(prefix, ns);
    element
}

/// Deep-copy `node` into the target arena as a new detached subtree.
///
/// Prefixes in scope at the source are declared on a copied element, so
/// the copy stays self-describing once it leaves its original document.
/// Document nodes cannot be imported.
pub fn import_node(xot: &mut Xot, node: Node, operation: &'static str) -> Result<Node, Error> {
    if xot.is_document(node) {
        return Err(Error::InvalidArgument {
            operation,
            argument: "node",
        });
    }
    if xot.is_element(node) {
        Ok(xot.clone_with_prefixes(node))
    } else {
        Ok(xot.clone_node(node))
    }
}

/// Value of an unqualified attribute, if present.
pub fn get_attribute<'a>(xot: &'a Xot, element: Node, name: &str) -> Option<&'a str> {
    let name = xot.name(name)?;
    xot.attributes(element).get(name).map(String::as_str)
}

pub fn has_attribute(xot: &Xot, element: Node, name: &str) -> bool {
    get_attribute(xot, element, name).is_some()
}

/// Set (or overwrite) an unqualified attribute.
pub fn set_attribute(xot: &mut Xot, element: Node, name: &str, value: &str) {
    let name = xot.add_name(name);
    xot.attributes_mut(element).insert(name, value.to_owned());
}

/// Ordered child nodes of `element`. Attribute and namespace nodes are not
/// included.
pub fn child_nodes(xot: &Xot, element: Node) -> impl Iterator<Item = Node> + '_ {
    xot.children(element)
}

pub fn append_child(xot: &mut Xot, parent: Node, child: Node) -> Result<(), Error> {
    Ok(xot.append(parent, child)?)
}

/// Deep-copy `node` and append the copy as the last child of `parent`.
///
/// A copied element in no namespace keeps it: if `parent` has a non-empty
/// default namespace in scope, the copy undeclares it with `xmlns=""`.
pub fn import_child(
    xot: &mut Xot,
    parent: Node,
    node: Node,
    operation: &'static str,
) -> Result<Node, Error> {
    let copy = import_node(xot, node, operation)?;
    let no_namespace = xot.no_namespace();
    let inherited = default_namespace_in_scope(xot, parent);
    if let Some(name) = xot.element(copy).map(|e| e.name()) {
        let empty = xot.empty_prefix();
        let own_default = xot.get_namespace(copy, empty).is_some();
        if !own_default
            && inherited.is_some_and(|ns| ns != no_namespace)
            && xot.namespace_for_name(name) == no_namespace
        {
            xot.namespaces_mut(copy).insert(empty, no_namespace);
        }
    }
    append_child(xot, parent, copy)?;
    Ok(copy)
}

/// The default namespace declared on `node` or its nearest ancestor.
fn default_namespace_in_scope(xot: &Xot, node: Node) -> Option<NamespaceId> {
    let empty = xot.empty_prefix();
    xot.ancestors(node)
        .filter(|n| xot.is_element(*n))
        .find_map(|n| xot.get_namespace(n, empty))
}

/// Remove and free every child of `element`.
pub fn remove_children(xot: &mut Xot, element: Node) -> Result<(), Error> {
    // Front to back: the removed node never has a preceding sibling, so
    // adjacent-text consolidation cannot free a node still in the list.
    let children: Vec<Node> = xot.children(element).collect();
    for child in children {
        xot.remove(child)?;
    }
    Ok(())
}
