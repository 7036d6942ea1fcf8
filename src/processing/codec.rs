//! Conversion between decimal and binary dotted notation.

use crate::error::CalcError;
use crate::models::parse_octet;
use itertools::Itertools;

/// Zero-padded 8-bit binary form of an octet.
pub(crate) fn octet_to_binary(octet: u8) -> String {
    format!("{octet:08b}")
}

/// Convert decimal octets to 8-bit binary, joined with '.'.
///
/// The number of octets is not checked, so `["10", "1"]` gives `00001010.00000001`.
/// Each octet must be an integer in 0-255.
pub fn decimal_to_binary<S: AsRef<str>>(octets: &[S]) -> Result<String, CalcError> {
    let converted = octets.iter().map(|octet| {
        let octet = octet.as_ref();
        parse_octet(octet)
            .map(octet_to_binary)
            .ok_or_else(|| CalcError::InvalidOctet(octet.trim().to_string()))
    });
    itertools::process_results(converted, |mut parts| parts.join("."))
}

/// Convert '.' separated base-2 numbers to decimal, joined with '.'.
///
/// Part length is not checked against 8 bits: `111111111` converts to `511`. Each part
/// is read as a `u64`, so a part wider than 64 bits is rejected as
/// [`CalcError::InvalidOctet`] even when it only holds 0s and 1s.
pub fn binary_to_decimal(binary: &str) -> Result<String, CalcError> {
    let converted = binary.trim().split('.').map(|part| {
        let part = part.trim();
        if part.is_empty() || !part.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(CalcError::InvalidOctet(part.to_string()));
        }
        u64::from_str_radix(part, 2).map_err(|_| CalcError::InvalidOctet(part.to_string()))
    });
    itertools::process_results(converted, |mut parts| parts.join("."))
}
