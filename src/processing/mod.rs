//! Calculator core.
//!
//! Pure functions over short strings and small integers:
//! - [`codec`] - Decimal/binary octet conversion
//! - [`mask`] - Mask validation, prefix lengths and host counts
//! - [`planner`] - Splitting a network into subnets
//! - [`classify`] - Public/private address classes

mod classify;
mod codec;
mod mask;
mod planner;

// Re-export public functions
pub use classify::{analyze, classify_private, classify_public};
pub use codec::{binary_to_decimal, decimal_to_binary};
pub use mask::{
    analyze_mask, analyze_mask_strict, count_hosts, prefix_to_binary_mask, usable_hosts,
    validate_octet_pattern,
};
pub use planner::{bits_needed, borrow_bits, plan_subnets};
