#![forbid(unsafe_code)]

//! Digest algorithms for the Hagalund XML signature object model.
//!
//! The [`registry`] is a closed table of the digest methods a `Reference`
//! may name. Computing a digest is a separate concern behind the
//! [`DigestProvider`] trait; [`RustCryptoProvider`] is the bundled
//! implementation.

pub mod digest;
pub mod registry;

pub use crate::digest::{digest_value, DigestProvider, Hasher, RustCryptoProvider};
pub use crate::registry::{DigestAlgorithm, DigestAlgorithmDescriptor, DigestAlgorithmRegistry};
