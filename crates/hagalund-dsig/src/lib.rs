#![forbid(unsafe_code)]

//! XML Digital Signature (XML-DSig) object model nodes.
//!
//! An [`ElementNode`] wraps one signature sub-element. A node loaded from
//! caller input only borrows its element and never writes to it; the first
//! mutation forks a private copy that the node owns from then on. See
//! [`OwnershipState`].

pub mod context;
pub mod method;
pub mod node;
pub mod object;
pub mod ownership;

pub use context::DsigContext;
pub use node::{ElementNode, SignatureElement};
pub use object::{DataObject, ObjectElement};
pub use ownership::OwnershipState;
