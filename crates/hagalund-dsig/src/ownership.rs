#![forbid(unsafe_code)]

//! Ownership state of a node's backing element.

use xot::Node;

/// Who owns the element behind a node.
///
/// Transitions only go `Unbound -> Borrowed`, `Unbound -> Owned` and
/// `Borrowed -> Owned` (a fork). Loading a new element rebinds the node,
/// which is the only way to end up `Borrowed` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipState {
    /// No backing element.
    #[default]
    Unbound,
    /// The element belongs to the caller and must not be mutated.
    Borrowed,
    /// The element is a private root held only by this node.
    Owned,
}

/// Backing element together with its ownership.
#[derive(Debug, Default)]
pub(crate) enum Binding {
    #[default]
    Unbound,
    Borrowed(Node),
    Owned(Node),
}

impl Binding {
    pub(crate) fn state(&self) -> OwnershipState {
        match self {
            Self::Unbound => OwnershipState::Unbound,
            Self::Borrowed(_) => OwnershipState::Borrowed,
            Self::Owned(_) => OwnershipState::Owned,
        }
    }

    pub(crate) fn element(&self) -> Option<Node> {
        match *self {
            Self::Unbound => None,
            Self::Borrowed(node) | Self::Owned(node) => Some(node),
        }
    }

    /// The private root, if this binding holds one.
    pub(crate) fn owned(&self) -> Option<Node> {
        match *self {
            Self::Owned(node) => Some(node),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xot::Xot;

    #[test]
    fn test_default_is_unbound() {
        let binding = Binding::default();
        assert_eq!(binding.state(), OwnershipState::Unbound);
        assert_eq!(binding.element(), None);
        assert_eq!(binding.owned(), None);
    }

    #[test]
    fn test_projection() {
        let mut xot = Xot::new();
        let name = xot.add_name("a");
        let el = xot.new_element(name);

        let borrowed = Binding::Borrowed(el);
        assert_eq!(borrowed.state(), OwnershipState::Borrowed);
        assert_eq!(borrowed.element(), Some(el));
        assert_eq!(borrowed.owned(), None);

        let owned = Binding::Owned(el);
        assert_eq!(owned.state(), OwnershipState::Owned);
        assert_eq!(owned.element(), Some(el));
        assert_eq!(owned.owned(), Some(el));
    }
}
