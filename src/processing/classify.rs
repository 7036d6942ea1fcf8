//! Public and private address classes.

use crate::error::CalcError;
use crate::models::{parse_address, IpClassification, PrivateClass, PublicClass};
use std::net::Ipv4Addr;

/// Classful range by first octet. 0 and 127 have no class and report `Invalid`.
pub fn classify_public(addr: Ipv4Addr) -> PublicClass {
    match addr.octets()[0] {
        1..=126 => PublicClass::A,
        128..=191 => PublicClass::B,
        192..=223 => PublicClass::C,
        224..=239 => PublicClass::D,
        240..=255 => PublicClass::E,
        _ => PublicClass::Invalid,
    }
}

/// Private range: 10/8, 172.16/12 or 192.168/16.
pub fn classify_private(addr: Ipv4Addr) -> PrivateClass {
    match addr.octets() {
        [10, ..] => PrivateClass::A,
        [172, 16..=31, ..] => PrivateClass::B,
        [192, 168, ..] => PrivateClass::C,
        _ => PrivateClass::NotPrivate,
    }
}

/// Validate `ip` and report its private class, or its public class when not private.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::analyze;
/// assert_eq!(analyze("8.8.8.8").unwrap().to_string(), "Public IP, class A");
/// ```
pub fn analyze(ip: &str) -> Result<IpClassification, CalcError> {
    let addr = parse_address(ip)?;
    let classification = match classify_private(addr) {
        PrivateClass::NotPrivate => IpClassification::Public(classify_public(addr)),
        private => IpClassification::Private(private),
    };
    log::debug!("analyze({ip}) = {classification}");
    Ok(classification)
}
