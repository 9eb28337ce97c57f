#![forbid(unsafe_code)]

//! Copy-on-write wrapper around a signature sub-element.
//!
//! A node is bound to at most one element in a caller-supplied `Xot` arena:
//!
//! * [`ElementNode::load_xml`] binds a caller element as *borrowed*. Reads go
//!   straight to it and [`ElementNode::get_xml`] hands the very same node
//!   back.
//! * The first mutation of a borrowed node forks it: the element is
//!   deep-copied into a detached root owned by the node, and the caller's
//!   tree is never touched.
//! * [`ElementNode::build`] creates an owned element directly.
//!
//! Reading an owned node re-synthesizes a fresh element on every call, with
//! only the recognized fields of the element kind and all current children.

use std::fmt;
use std::marker::PhantomData;

use hagalund_core::{ns, Error};
use hagalund_xml::{
    child_nodes, create_element, get_attribute, import_child, import_node, remove_children,
    set_attribute,
};
use tracing::{debug, trace, warn};
use xot::{Node, Xot};

use crate::context::DsigContext;
use crate::ownership::{Binding, OwnershipState};

/// An XML-DSig element kind: its qualified name and recognized attributes.
pub trait SignatureElement {
    const LOCAL_NAME: &'static str;
    const NAMESPACE: &'static str = ns::DSIG;
    /// Recognized attribute names, in the order they are written.
    const FIELDS: &'static [&'static str];
}

pub struct ElementNode<E> {
    binding: Binding,
    context: DsigContext,
    _kind: PhantomData<fn() -> E>,
}

impl<E: SignatureElement> ElementNode<E> {
    /// An unbound node using the default context.
    pub fn new() -> Self {
        Self::with_context(DsigContext::default())
    }

    pub fn with_context(context: DsigContext) -> Self {
        Self {
            binding: Binding::Unbound,
            context,
            _kind: PhantomData,
        }
    }

    /// Create a node owning a fresh element.
    ///
    /// Only fields with a value are written, in `E::FIELDS` order. Each
    /// content node is deep-copied into the new element, in order.
    pub fn build(
        xot: &mut Xot,
        context: DsigContext,
        fields: &[(&str, Option<&str>)],
        content: &[Node],
    ) -> Result<Self, Error> {
        const OP: &str = "build";
        if fields.iter().any(|(name, _)| !E::FIELDS.contains(name)) {
            return Err(Error::InvalidArgument {
                operation: OP,
                argument: "fields",
            });
        }
        if content.iter().any(|n| xot.is_document(*n)) {
            return Err(Error::InvalidArgument {
                operation: OP,
                argument: "content",
            });
        }

        let element = create_element(xot, E::NAMESPACE, context.prefix(), E::LOCAL_NAME);
        for field in E::FIELDS {
            let value = fields
                .iter()
                .find(|(name, _)| name == field)
                .and_then(|(_, value)| *value);
            if let Some(value) = value {
                set_attribute(xot, element, field, value);
            }
        }
        if let Err(e) = append_copies(xot, element, content, OP) {
            release(xot, element);
            return Err(e);
        }

        debug!(element = E::LOCAL_NAME, children = content.len(), "built owned element");
        Ok(Self {
            binding: Binding::Owned(element),
            context,
            _kind: PhantomData,
        })
    }

    pub fn context(&self) -> &DsigContext {
        &self.context
    }

    pub fn ownership(&self) -> OwnershipState {
        self.binding.state()
    }

    /// The current backing element, if bound.
    ///
    /// For an owned node this is the private root; it is replaced (and
    /// freed) by [`Self::set_content`], so do not hold on to it.
    pub fn element(&self) -> Option<Node> {
        self.binding.element()
    }

    /// Current value of a field. Unbound nodes have no fields.
    pub fn get_field<'a>(&self, xot: &'a Xot, name: &str) -> Option<&'a str> {
        self.binding
            .element()
            .and_then(|element| get_attribute(xot, element, name))
    }

    /// Write a field, forking first if the element is borrowed.
    ///
    /// `None` is a no-op: a field that has been set is never removed
    /// through this method. Load a fresh element to drop one.
    pub fn set_field(
        &mut self,
        xot: &mut Xot,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        let element = self.fork_for(xot, "set_field")?;
        set_attribute(xot, element, name, value);
        Ok(())
    }

    /// Make the backing element private to this node.
    ///
    /// Borrowed elements are deep-copied into a new detached root; an owned
    /// node keeps its element. Returns the (now owned) backing element.
    pub fn fork(&mut self, xot: &mut Xot) -> Result<Node, Error> {
        self.fork_for(xot, "fork")
    }

    fn fork_for(&mut self, xot: &mut Xot, operation: &'static str) -> Result<Node, Error> {
        match self.binding {
            Binding::Unbound => Err(missing_binding::<E>(operation)),
            Binding::Owned(element) => Ok(element),
            Binding::Borrowed(element) => {
                let copy = import_node(xot, element, operation)?;
                debug!(element = E::LOCAL_NAME, operation, "forked borrowed element");
                self.binding = Binding::Owned(copy);
                Ok(copy)
            }
        }
    }

    /// The element this node represents.
    ///
    /// A borrowed node returns its bound element itself, which may alias
    /// caller state. An owned node returns a newly created detached element
    /// on every call; the caller owns it.
    pub fn get_xml(&self, xot: &mut Xot) -> Result<Node, Error> {
        match self.binding {
            Binding::Unbound => Err(missing_binding::<E>("get_xml")),
            Binding::Borrowed(element) => Ok(element),
            Binding::Owned(element) => self.synthesize(xot, element),
        }
    }

    fn synthesize(&self, xot: &mut Xot, source: Node) -> Result<Node, Error> {
        let element = create_element(xot, E::NAMESPACE, self.context.prefix(), E::LOCAL_NAME);
        for field in E::FIELDS {
            if let Some(value) = get_attribute(xot, source, field).map(str::to_owned) {
                set_attribute(xot, element, field, &value);
            }
        }
        let children: Vec<Node> = child_nodes(xot, source).collect();
        if let Err(e) = append_copies(xot, element, &children, "get_xml") {
            release(xot, element);
            return Err(e);
        }
        trace!(element = E::LOCAL_NAME, children = children.len(), "synthesized element");
        Ok(element)
    }

    /// Bind to a caller-owned element. The element's name is not checked.
    ///
    /// A private root held from an earlier binding is freed.
    pub fn load_xml(&mut self, xot: &mut Xot, element: Node) -> Result<(), Error> {
        if !xot.is_element(element) {
            return Err(Error::InvalidArgument {
                operation: "load_xml",
                argument: "element",
            });
        }
        if let Some(previous) = self.binding.owned() {
            release(xot, previous);
        }
        self.binding = Binding::Borrowed(element);
        debug!(element = E::LOCAL_NAME, "bound borrowed element");
        Ok(())
    }

    /// Live, ordered view of the backing element's children.
    pub fn get_content<'a>(&self, xot: &'a Xot) -> Result<impl Iterator<Item = Node> + 'a, Error> {
        let element = self
            .binding
            .element()
            .ok_or_else(|| missing_binding::<E>("get_content"))?;
        Ok(child_nodes(xot, element))
    }

    /// Replace all children with deep copies of `nodes`, in order.
    ///
    /// The new child list is staged on a private copy of the element and
    /// only swapped in once complete; on error the node is left exactly as
    /// it was, including its ownership.
    ///
    /// Adjacent text nodes in `nodes` are merged by the DOM on append, so
    /// the resulting child count can be lower than `nodes.len()`.
    pub fn set_content(&mut self, xot: &mut Xot, nodes: &[Node]) -> Result<(), Error> {
        const OP: &str = "set_content";
        let current = self
            .binding
            .element()
            .ok_or_else(|| missing_binding::<E>(OP))?;
        if nodes.iter().any(|n| xot.is_document(*n)) {
            return Err(Error::InvalidArgument {
                operation: OP,
                argument: "nodes",
            });
        }

        let scratch = import_node(xot, current, OP)?;
        let staged =
            remove_children(xot, scratch).and_then(|()| append_copies(xot, scratch, nodes, OP));
        if let Err(e) = staged {
            release(xot, scratch);
            return Err(e);
        }

        if let Some(previous) = self.binding.owned() {
            release(xot, previous);
        }
        self.binding = Binding::Owned(scratch);
        debug!(element = E::LOCAL_NAME, children = nodes.len(), "replaced content");
        Ok(())
    }
}

impl<E: SignatureElement> Default for ElementNode<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SignatureElement> fmt::Debug for ElementNode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementNode")
            .field("kind", &E::LOCAL_NAME)
            .field("binding", &self.binding)
            .field("context", &self.context)
            .finish()
    }
}

fn missing_binding<E: SignatureElement>(operation: &'static str) -> Error {
    Error::MissingBinding {
        operation,
        element: E::LOCAL_NAME,
    }
}

fn append_copies(
    xot: &mut Xot,
    parent: Node,
    nodes: &[Node],
    operation: &'static str,
) -> Result<(), Error> {
    for &node in nodes {
        import_child(xot, parent, node, operation)?;
    }
    Ok(())
}

/// Free a detached root this node created.
fn release(xot: &mut Xot, root: Node) {
    if let Err(e) = xot.remove(root) {
        warn!(error = %e, "could not free private element");
    }
}
