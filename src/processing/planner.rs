//! Partitioning a network into equally sized subnets.

use super::codec::binary_to_decimal;
use super::mask::{analyze_mask, prefix_to_binary_mask};
use crate::error::CalcError;
use crate::models::{parse_address, Ipv4, SubnetPlan, SubnetRecords, MAX_LENGTH};

/// Smallest `m` with `2^m >= subnet_count`. Counts below 1 are rejected.
pub fn bits_needed(subnet_count: i64) -> Result<u32, CalcError> {
    let count = u64::try_from(subnet_count)
        .ok()
        .filter(|c| *c > 0)
        .ok_or(CalcError::InvalidSubnetCount(subnet_count))?;
    Ok(count.next_power_of_two().trailing_zeros())
}

/// Turn the first `bits` 0s of a binary mask into 1s, scanning left to right across octets.
///
/// When the mask has fewer 0s than `bits`, all of them are flipped.
pub fn borrow_bits(mask_binary: &str, bits: u32) -> String {
    let mut remaining = bits;
    mask_binary
        .chars()
        .map(|c| {
            if c == '0' && remaining > 0 {
                remaining -= 1;
                '1'
            } else {
                c
            }
        })
        .collect()
}

/// Split the network starting at `ip` into `subnet_count` subnets.
///
/// The starting prefix is extended by the fewest bits that give at least `subnet_count`
/// subnets. Subnets follow each other from `ip` as entered (it is not aligned to the
/// network boundary), wrapping past `255.255.255.255`. A prefix that would pass 32 is held
/// at 32 and flagged in [`SubnetPlan::prefix_capped`].
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::plan_subnets;
/// let plan = plan_subnets("192.168.1.0", 4, 24).unwrap();
/// assert_eq!(plan.new_prefix, 26);
/// assert_eq!(plan.network_jump, 64);
/// ```
pub fn plan_subnets(
    ip: &str,
    subnet_count: i64,
    base_prefix: i64,
) -> Result<SubnetPlan, CalcError> {
    let addr = parse_address(ip)?;
    let bits_borrowed = bits_needed(subnet_count)?;
    let base_mask = prefix_to_binary_mask(base_prefix)?;

    let new_mask_binary = borrow_bits(&base_mask, bits_borrowed);
    let new_mask_decimal = binary_to_decimal(&new_mask_binary)?;
    let new_prefix = analyze_mask(&new_mask_decimal)?.prefix_length;
    let new_mask = parse_address(&new_mask_decimal)?;
    let network_jump = 1u64 << (MAX_LENGTH - new_prefix);
    let prefix_capped = base_prefix + i64::from(bits_borrowed) > i64::from(MAX_LENGTH);

    log::debug!("plan_subnets({ip}, {subnet_count}, /{base_prefix}) borrowed={bits_borrowed}");
    log::debug!("new=/{new_prefix} jump={network_jump} capped={prefix_capped}");

    // base_prefix is within 0..=32 once prefix_to_binary_mask accepted it
    let base = Ipv4::new(addr, base_prefix as u8)?;
    let subnet_count = subnet_count as u64;

    Ok(SubnetPlan {
        base,
        subnet_count,
        bits_borrowed,
        new_prefix,
        new_mask,
        network_jump,
        prefix_capped,
        subnets: SubnetRecords::new(addr, network_jump, subnet_count),
    })
}
