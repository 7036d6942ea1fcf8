//! Subnet mask validation, prefix lengths and host counts.

use super::codec::octet_to_binary;
use crate::error::CalcError;
use crate::models::{get_cidr_mask, parse_address, MaskAnalysis};
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;

/// An octet is all 1s, all 0s, or 1s followed by 0s.
static OCTET_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_octet_pattern() -> &'static Regex {
    OCTET_PATTERN.get_or_init(|| Regex::new(r"^(1+|0+|1+0+)$").expect("Invalid Regex"))
}

/// Check one binary octet for a contiguous run of leading 1s.
pub fn validate_octet_pattern(octet_binary: &str) -> bool {
    get_octet_pattern().is_match(octet_binary)
}

/// Validate a dotted-decimal mask and compute its binary form and prefix length.
///
/// Each octet is checked on its own, so `255.0.255.0` is accepted with prefix 16.
/// Use [`analyze_mask_strict`] to also require one run of 1s across all 32 bits.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::analyze_mask;
/// let mask = analyze_mask("255.255.255.0").unwrap();
/// assert_eq!(mask.prefix_length, 24);
/// ```
pub fn analyze_mask(mask_decimal: &str) -> Result<MaskAnalysis, CalcError> {
    let octets = parse_address(mask_decimal)?.octets();
    let binary_octets: Vec<String> = octets.iter().copied().map(octet_to_binary).collect();
    let binary = binary_octets.join(".");
    let prefix_length = octets.iter().map(|o| o.count_ones()).sum::<u32>() as u8;
    log::trace!("analyze_mask({mask_decimal}) binary={binary} ones={prefix_length}");

    if let Some((index, octet)) = binary_octets
        .iter()
        .find_position(|octet| !validate_octet_pattern(octet))
    {
        log::debug!("mask {mask_decimal} rejected at octet {}", index + 1);
        return Err(CalcError::InvalidMaskPattern {
            octet: index + 1,
            binary: octet.clone(),
        });
    }

    Ok(MaskAnalysis {
        binary,
        prefix_length,
    })
}

/// Like [`analyze_mask`], but a 1 may not follow a 0 anywhere in the mask.
pub fn analyze_mask_strict(mask_decimal: &str) -> Result<MaskAnalysis, CalcError> {
    let analysis = analyze_mask(mask_decimal)?;
    let bits: String = analysis.binary.chars().filter(|c| *c != '.').collect();
    if let Some(pos) = bits.find("01") {
        let index = (pos + 1) / 8;
        let octet = analysis
            .binary
            .split('.')
            .nth(index)
            .unwrap_or_default()
            .to_string();
        log::debug!("mask {mask_decimal} not contiguous at octet {}", index + 1);
        return Err(CalcError::InvalidMaskPattern {
            octet: index + 1,
            binary: octet,
        });
    }
    Ok(analysis)
}

/// Size of the address block for a binary mask: 2 to the number of 0 bits.
///
/// Separators are ignored. Saturates at `u64::MAX` for oversized input.
pub fn count_hosts(mask_binary: &str) -> u64 {
    let zeros = mask_binary.chars().filter(|c| *c == '0').count();
    2u64.saturating_pow(u32::try_from(zeros).unwrap_or(u32::MAX))
}

/// [`count_hosts`] minus network and broadcast, without a floor.
pub fn usable_hosts(mask_binary: &str) -> i64 {
    i64::try_from(count_hosts(mask_binary)).unwrap_or(i64::MAX) - 2
}

/// Binary mask for a prefix length, e.g. 24 gives `11111111.11111111.11111111.00000000`.
pub fn prefix_to_binary_mask(prefix: i64) -> Result<String, CalcError> {
    let len = u8::try_from(prefix).map_err(|_| CalcError::InvalidPrefix(prefix))?;
    let mask = get_cidr_mask(len)?;
    Ok(mask
        .to_be_bytes()
        .iter()
        .copied()
        .map(octet_to_binary)
        .join("."))
}
