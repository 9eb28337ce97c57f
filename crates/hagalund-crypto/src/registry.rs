#![forbid(unsafe_code)]

//! Registry mapping digest identifiers to their digest-method URIs.

use hagalund_core::{algorithm, Error};

/// The closed set of supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

/// Public identifiers for one digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestAlgorithmDescriptor {
    pub algorithm: DigestAlgorithm,
    /// Canonical identifier, e.g. `SHA-256`.
    pub name: &'static str,
    /// Value of `DigestMethod/@Algorithm`.
    pub namespace_uri: &'static str,
    /// Digest size in bytes.
    pub output_len: usize,
}

static ENTRIES: [DigestAlgorithmDescriptor; 4] = [
    DigestAlgorithmDescriptor {
        algorithm: DigestAlgorithm::Sha1,
        name: algorithm::SHA1_NAME,
        namespace_uri: algorithm::SHA1,
        output_len: 20,
    },
    DigestAlgorithmDescriptor {
        algorithm: DigestAlgorithm::Sha256,
        name: algorithm::SHA256_NAME,
        namespace_uri: algorithm::SHA256,
        output_len: 32,
    },
    DigestAlgorithmDescriptor {
        algorithm: DigestAlgorithm::Sha384,
        name: algorithm::SHA384_NAME,
        namespace_uri: algorithm::SHA384,
        output_len: 48,
    },
    DigestAlgorithmDescriptor {
        algorithm: DigestAlgorithm::Sha512,
        name: algorithm::SHA512_NAME,
        namespace_uri: algorithm::SHA512,
        output_len: 64,
    },
];

impl DigestAlgorithm {
    pub fn descriptor(self) -> &'static DigestAlgorithmDescriptor {
        match self {
            Self::Sha1 => &ENTRIES[0],
            Self::Sha256 => &ENTRIES[1],
            Self::Sha384 => &ENTRIES[2],
            Self::Sha512 => &ENTRIES[3],
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn namespace_uri(self) -> &'static str {
        self.descriptor().namespace_uri
    }
}

/// Central lookup for digest algorithm identifiers.
///
/// Read-only for the life of the process; safe to share across threads.
pub struct DigestAlgorithmRegistry;

impl DigestAlgorithmRegistry {
    /// Look up a digest algorithm by its canonical name (case-sensitive).
    pub fn lookup(identifier: &str) -> Result<&'static DigestAlgorithmDescriptor, Error> {
        ENTRIES
            .iter()
            .find(|d| d.name == identifier)
            .ok_or_else(|| Error::UnknownAlgorithm(identifier.to_owned()))
    }

    /// Look up a digest algorithm by its `DigestMethod` URI.
    pub fn from_uri(uri: &str) -> Result<&'static DigestAlgorithmDescriptor, Error> {
        ENTRIES
            .iter()
            .find(|d| d.namespace_uri == uri)
            .ok_or_else(|| Error::UnknownAlgorithm(uri.to_owned()))
    }

    /// All entries, in declaration order.
    pub fn entries() -> &'static [DigestAlgorithmDescriptor] {
        &ENTRIES
    }
}
