#![forbid(unsafe_code)]

pub use hagalund_core as core;
pub use hagalund_crypto as crypto;
pub use hagalund_dsig as dsig;
pub use hagalund_xml as xml;
