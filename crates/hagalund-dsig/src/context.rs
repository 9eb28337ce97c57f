#![forbid(unsafe_code)]

//! DSig context — configuration shared by the nodes it builds.

use hagalund_core::ns;

/// Context for XML-DSig element construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsigContext {
    /// Prefix bound to the XML-DSig namespace on elements this library
    /// creates. `None` declares it as the default namespace instead.
    pub prefix: Option<String>,
}

impl DsigContext {
    /// Create a context using the conventional `ds` prefix.
    pub fn new() -> Self {
        Self {
            prefix: Some(ns::DSIG_PREFIX.to_owned()),
        }
    }

    /// Create a context with an explicit prefix (or none).
    pub fn with_prefix(prefix: Option<&str>) -> Self {
        Self {
            prefix: prefix.map(str::to_owned),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl Default for DsigContext {
    fn default() -> Self {
        Self::new()
    }
}
