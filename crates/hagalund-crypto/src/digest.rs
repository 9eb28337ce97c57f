#![forbid(unsafe_code)]

//! Digest computation behind the [`DigestProvider`] seam.

use crate::registry::DigestAlgorithm;
use base64::Engine;
use digest::Digest;
use hagalund_core::Error;

/// Something that can hash bytes with a registry algorithm.
pub trait DigestProvider {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, Error>;
}

/// Incremental hasher for one algorithm.
pub trait Hasher: Send {
    /// Feed data into the hash.
    fn update(&mut self, data: &[u8]);
    /// Finalize and return the hash value.
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Pure-Rust digests from the RustCrypto `sha1`/`sha2` crates.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub fn hasher(&self, algorithm: DigestAlgorithm) -> Box<dyn Hasher> {
        match algorithm {
            DigestAlgorithm::Sha1 => Box::new(Sha1Hasher::new()),
            DigestAlgorithm::Sha256 => Box::new(Sha256Hasher::new()),
            DigestAlgorithm::Sha384 => Box::new(Sha384Hasher::new()),
            DigestAlgorithm::Sha512 => Box::new(Sha512Hasher::new()),
        }
    }
}

impl DigestProvider for RustCryptoProvider {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, Error> {
        let mut hasher = self.hasher(algorithm);
        hasher.update(data);
        Ok(hasher.finalize())
    }
}

/// Digest `data` and base64-encode it for a `DigestValue` element.
pub fn digest_value<P: DigestProvider + ?Sized>(
    provider: &P,
    algorithm: DigestAlgorithm,
    data: &[u8],
) -> Result<String, Error> {
    let raw = provider.digest(algorithm, data)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(raw))
}

// ── Concrete implementations ─────────────────────────────────────────

macro_rules! impl_hasher {
    ($name:ident, $hasher:ty) => {
        struct $name {
            inner: $hasher,
        }

        impl $name {
            fn new() -> Self {
                Self {
                    inner: <$hasher>::new(),
                }
            }
        }

        impl Hasher for $name {
            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.inner, data);
            }

            fn finalize(self: Box<Self>) -> Vec<u8> {
                Digest::finalize(self.inner).to_vec()
            }
        }
    };
}

impl_hasher!(Sha1Hasher, sha1::Sha1);
impl_hasher!(Sha256Hasher, sha2::Sha256);
impl_hasher!(Sha384Hasher, sha2::Sha384);
impl_hasher!(Sha512Hasher, sha2::Sha512);
