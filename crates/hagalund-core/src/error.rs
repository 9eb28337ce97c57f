#![forbid(unsafe_code)]

/// Errors produced by the Hagalund signature object model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation that needs a backing element ran on an unbound node.
    #[error("{operation}: {element} node is not bound to an element")]
    MissingBinding {
        operation: &'static str,
        element: &'static str,
    },

    /// A required argument was absent or not usable.
    #[error("{operation}: invalid argument `{argument}`")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
    },

    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error(transparent)]
    Xml(#[from] xot::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_operation_and_argument() {
        let err = Error::MissingBinding {
            operation: "set_content",
            element: "Object",
        };
        assert_eq!(
            err.to_string(),
            "set_content: Object node is not bound to an element"
        );

        let err = Error::InvalidArgument {
            operation: "load_xml",
            argument: "element",
        };
        assert_eq!(err.to_string(), "load_xml: invalid argument `element`");

        let err = Error::UnknownAlgorithm("MD5".into());
        assert_eq!(err.to_string(), "unknown digest algorithm: MD5");
    }
}
