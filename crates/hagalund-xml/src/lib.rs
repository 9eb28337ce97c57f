#![forbid(unsafe_code)]

//! XML document abstraction for the Hagalund signature object model.
//!
//! All trees live in a caller-supplied [`xot::Xot`] arena. Every helper that
//! creates or copies nodes takes that arena explicitly; nothing here reaches
//! for an implicit "current document".

pub mod document;
pub mod element;

pub use document::{find_element, parse, parse_element, serialize};
pub use element::{
    append_child, child_nodes, create_element, get_attribute, has_attribute, import_child,
    import_node, remove_children, set_attribute,
};
pub use xot::{Node, Xot};
