#![forbid(unsafe_code)]

//! Core types for the Hagalund XML signature object model.
//!
//! Shared error type, namespace and name constants, and the digest method
//! URIs used by the registry in `hagalund-crypto`.

pub mod algorithm;
pub mod error;
pub mod ns;

pub use error::{Error, Result};
