#![forbid(unsafe_code)]

//! Digest algorithm identifiers.
//!
//! Each `*_NAME` is the canonical identifier callers look up by; each URI
//! constant is the literal string that appears in the `Algorithm` attribute
//! of a `DigestMethod` element.

// ── Canonical names ──────────────────────────────────────────────────

pub const SHA1_NAME: &str = "SHA-1";
pub const SHA256_NAME: &str = "SHA-256";
pub const SHA384_NAME: &str = "SHA-384";
pub const SHA512_NAME: &str = "SHA-512";

// ── Digest method URIs ───────────────────────────────────────────────

pub const SHA1: &str = "http://www.w3.org/2000/09/xmldsig#sha1";
pub const SHA256: &str = "http://www.w3.org/2001/04/xmlenc#sha256";
pub const SHA384: &str = "http://www.w3.org/2001/04/xmldsig-more#sha384";
pub const SHA512: &str = "http://www.w3.org/2001/04/xmlenc#sha512";
