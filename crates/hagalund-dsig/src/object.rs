#![forbid(unsafe_code)]

//! The `Object` element: the payload carrier of enveloping signatures.

use hagalund_core::{ns, Error};
use xot::{Node, Xot};

use crate::context::DsigContext;
use crate::node::{ElementNode, SignatureElement};
use crate::ownership::OwnershipState;

/// `<ds:Object Id? MimeType? Encoding?>`
#[derive(Debug)]
pub struct ObjectElement;

impl SignatureElement for ObjectElement {
    const LOCAL_NAME: &'static str = ns::node::OBJECT;
    const FIELDS: &'static [&'static str] =
        &[ns::attr::ID, ns::attr::MIME_TYPE, ns::attr::ENCODING];
}

/// A signature data object holding arbitrary content to be signed.
#[derive(Debug, Default)]
pub struct DataObject {
    node: ElementNode<ObjectElement>,
}

impl DataObject {
    /// An unbound data object; call [`Self::load_xml`] before using it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: DsigContext) -> Self {
        Self {
            node: ElementNode::with_context(context),
        }
    }

    /// Build a new `Object` element. `data`, if given, is deep-copied in as
    /// the only child.
    pub fn build(
        xot: &mut Xot,
        context: DsigContext,
        id: Option<&str>,
        mime_type: Option<&str>,
        encoding: Option<&str>,
        data: Option<Node>,
    ) -> Result<Self, Error> {
        let content: Vec<Node> = data.into_iter().collect();
        let node = ElementNode::build(
            xot,
            context,
            &[
                (ns::attr::ID, id),
                (ns::attr::MIME_TYPE, mime_type),
                (ns::attr::ENCODING, encoding),
            ],
            &content,
        )?;
        Ok(Self { node })
    }

    pub fn id<'a>(&self, xot: &'a Xot) -> Option<&'a str> {
        self.node.get_field(xot, ns::attr::ID)
    }

    pub fn set_id(&mut self, xot: &mut Xot, value: Option<&str>) -> Result<(), Error> {
        self.node.set_field(xot, ns::attr::ID, value)
    }

    pub fn mime_type<'a>(&self, xot: &'a Xot) -> Option<&'a str> {
        self.node.get_field(xot, ns::attr::MIME_TYPE)
    }

    pub fn set_mime_type(&mut self, xot: &mut Xot, value: Option<&str>) -> Result<(), Error> {
        self.node.set_field(xot, ns::attr::MIME_TYPE, value)
    }

    pub fn encoding<'a>(&self, xot: &'a Xot) -> Option<&'a str> {
        self.node.get_field(xot, ns::attr::ENCODING)
    }

    pub fn set_encoding(&mut self, xot: &mut Xot, value: Option<&str>) -> Result<(), Error> {
        self.node.set_field(xot, ns::attr::ENCODING, value)
    }

    /// The object's content, in document order.
    pub fn data<'a>(&self, xot: &'a Xot) -> Result<impl Iterator<Item = Node> + 'a, Error> {
        self.node.get_content(xot)
    }

    /// Replace the object's content with copies of `nodes`.
    ///
    /// Adjacent text nodes are merged into one on append.
    pub fn set_data(&mut self, xot: &mut Xot, nodes: &[Node]) -> Result<(), Error> {
        self.node.set_content(xot, nodes)
    }

    pub fn get_xml(&self, xot: &mut Xot) -> Result<Node, Error> {
        self.node.get_xml(xot)
    }

    pub fn load_xml(&mut self, xot: &mut Xot, element: Node) -> Result<(), Error> {
        self.node.load_xml(xot, element)
    }

    pub fn fork(&mut self, xot: &mut Xot) -> Result<Node, Error> {
        self.node.fork(xot)
    }

    pub fn ownership(&self) -> OwnershipState {
        self.node.ownership()
    }

    pub fn element(&self) -> Option<Node> {
        self.node.element()
    }

    pub fn as_node(&self) -> &ElementNode<ObjectElement> {
        &self.node
    }
}
