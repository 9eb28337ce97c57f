use hagalund::core::{ns, Error};
use hagalund::crypto::{DigestAlgorithmRegistry, DigestProvider, RustCryptoProvider};
use hagalund::dsig::method::{digest_method_by_name, digest_value_element, read_digest_method};
use hagalund::dsig::{DataObject, DsigContext, OwnershipState};
use hagalund::xml::{find_element, get_attribute, parse, parse_element, serialize};
use xot::Xot;

const RECEIVED: &str = concat!(
    r#"<ds:Signature xmlns:ds="http://www.w3.org/2000/09/xmldsig#">"#,
    r##"<ds:SignedInfo><ds:Reference URI="#obj"><ds:DigestMethod Algorithm="http://www.w3.org/2001/04/xmlenc#sha256"/></ds:Reference></ds:SignedInfo>"##,
    r#"<ds:Object Id="obj"><note>signed text</note></ds:Object>"#,
    r#"</ds:Signature>"#,
);

#[test]
fn test_read_received_object_without_side_effects() {
    let mut xot = Xot::new();
    let doc = parse(&mut xot, RECEIVED).unwrap();
    let element = find_element(&xot, doc, ns::DSIG, ns::node::OBJECT).unwrap();

    let mut object = DataObject::new();
    object.load_xml(&mut xot, element).unwrap();
    assert_eq!(object.id(&xot), Some("obj"));

    let method = find_element(&xot, doc, ns::DSIG, ns::node::DIGEST_METHOD).unwrap();
    let algorithm = read_digest_method(&xot, method).unwrap();
    assert_eq!(algorithm.name(), "SHA-256");

    // Reading leaves the node borrowing the caller's element.
    let out = object.get_xml(&mut xot).unwrap();
    assert_eq!(out, element);
    assert_eq!(object.ownership(), OwnershipState::Borrowed);
    assert_eq!(serialize(&xot, doc).unwrap(), RECEIVED);
}

#[test]
fn test_assemble_object_and_reference_parts() {
    let mut xot = Xot::new();
    let ctx = DsigContext::new();
    let payload = parse_element(&mut xot, "<note>signed text</note>").unwrap();
    let object = DataObject::build(
        &mut xot,
        ctx.clone(),
        Some("obj"),
        Some("text/xml"),
        None,
        Some(payload),
    )
    .unwrap();

    let snapshot = object.get_xml(&mut xot).unwrap();
    let bytes = serialize(&xot, snapshot).unwrap();

    let method = digest_method_by_name(&mut xot, &ctx, "SHA-512").unwrap();
    let algorithm = read_digest_method(&xot, method).unwrap();
    let value =
        digest_value_element(&mut xot, &ctx, &RustCryptoProvider, algorithm, bytes.as_bytes())
            .unwrap();
    assert!(xot.first_child(value).and_then(|t| xot.text_str(t)).is_some());

    let raw = RustCryptoProvider.digest(algorithm, bytes.as_bytes()).unwrap();
    assert_eq!(
        raw.len(),
        DigestAlgorithmRegistry::lookup("SHA-512").unwrap().output_len
    );

    // Snapshots are stable: digesting a second one gives the same bytes.
    let again = object.get_xml(&mut xot).unwrap();
    assert_ne!(again, snapshot);
    assert_eq!(serialize(&xot, again).unwrap(), bytes);
    assert_eq!(get_attribute(&xot, again, "Id"), Some("obj"));
}

#[test]
fn test_unknown_digest_name() {
    let mut xot = Xot::new();
    let err = digest_method_by_name(&mut xot, &DsigContext::new(), "MD5").unwrap_err();
    assert_eq!(err.to_string(), "unknown digest algorithm: MD5");
    assert!(matches!(err, Error::UnknownAlgorithm(_)));
}
