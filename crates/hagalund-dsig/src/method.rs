#![forbid(unsafe_code)]

//! `DigestMethod` and `DigestValue` elements for a `Reference`.

use hagalund_core::{ns, Error};
use hagalund_crypto::{digest_value, DigestAlgorithm, DigestAlgorithmRegistry, DigestProvider};
use hagalund_xml::{append_child, create_element, get_attribute, set_attribute};
use xot::{Node, Xot};

use crate::context::DsigContext;

/// Create a detached `<DigestMethod Algorithm="…"/>` for `algorithm`.
pub fn digest_method(xot: &mut Xot, context: &DsigContext, algorithm: DigestAlgorithm) -> Node {
    let element = create_element(xot, ns::DSIG, context.prefix(), ns::node::DIGEST_METHOD);
    set_attribute(xot, element, ns::attr::ALGORITHM, algorithm.namespace_uri());
    element
}

/// Like [`digest_method`], resolving a canonical name such as `SHA-256`.
pub fn digest_method_by_name(
    xot: &mut Xot,
    context: &DsigContext,
    name: &str,
) -> Result<Node, Error> {
    let descriptor = DigestAlgorithmRegistry::lookup(name)?;
    Ok(digest_method(xot, context, descriptor.algorithm))
}

/// Resolve the algorithm named by a `DigestMethod` element.
pub fn read_digest_method(xot: &Xot, element: Node) -> Result<DigestAlgorithm, Error> {
    let uri = get_attribute(xot, element, ns::attr::ALGORITHM).ok_or(Error::InvalidArgument {
        operation: "read_digest_method",
        argument: "Algorithm",
    })?;
    Ok(DigestAlgorithmRegistry::from_uri(uri)?.algorithm)
}

/// Digest `data` and wrap the base64 result in a detached `<DigestValue>`.
pub fn digest_value_element<P: DigestProvider + ?Sized>(
    xot: &mut Xot,
    context: &DsigContext,
    provider: &P,
    algorithm: DigestAlgorithm,
    data: &[u8],
) -> Result<Node, Error> {
    let value = digest_value(provider, algorithm, data)?;
    let element = create_element(xot, ns::DSIG, context.prefix(), ns::node::DIGEST_VALUE);
    let text = xot.new_text(&value);
    append_child(xot, element, text)?;
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hagalund_crypto::RustCryptoProvider;
    use hagalund_xml::{parse_element, serialize};

    #[test]
    fn test_digest_method_carries_registry_uri() {
        let mut xot = Xot::new();
        let el = digest_method(&mut xot, &DsigContext::new(), DigestAlgorithm::Sha256);
        assert_eq!(
            serialize(&xot, el).unwrap(),
            r#"<ds:DigestMethod xmlns:ds="http://www.w3.org/2000/09/xmldsig#" Algorithm="http://www.w3.org/2001/04/xmlenc#sha256"/>"#
        );
        assert_eq!(read_digest_method(&xot, el).unwrap(), DigestAlgorithm::Sha256);
    }

    #[test]
    fn test_digest_method_by_name() {
        let mut xot = Xot::new();
        let ctx = DsigContext::new();
        let el = digest_method_by_name(&mut xot, &ctx, "SHA-384").unwrap();
        assert_eq!(
            get_attribute(&xot, el, "Algorithm"),
            Some("http://www.w3.org/2001/04/xmldsig-more#sha384")
        );
        assert!(matches!(
            digest_method_by_name(&mut xot, &ctx, "MD5"),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_read_digest_method_errors() {
        let mut xot = Xot::new();
        let missing = parse_element(&mut xot, "<DigestMethod/>").unwrap();
        assert!(matches!(
            read_digest_method(&xot, missing),
            Err(Error::InvalidArgument {
                argument: "Algorithm",
                ..
            })
        ));
        let md5 = parse_element(
            &mut xot,
            r#"<DigestMethod Algorithm="http://www.w3.org/2001/04/xmldsig-more#md5"/>"#,
        )
        .unwrap();
        assert!(matches!(
            read_digest_method(&xot, md5),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_digest_value_element() {
        let mut xot = Xot::new();
        let el = digest_value_element(
            &mut xot,
            &DsigContext::with_prefix(None),
            &RustCryptoProvider,
            DigestAlgorithm::Sha1,
            b"",
        )
        .unwrap();
        assert_eq!(
            serialize(&xot, el).unwrap(),
            r#"<DigestValue xmlns="http://www.w3.org/2000/09/xmldsig#">2jmj7l5rSw0yVb/vlWAYkK/YBwk=</DigestValue>"#
        );
    }
}
