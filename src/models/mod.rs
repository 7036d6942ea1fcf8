//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus parsing and offset helpers
//! - [`MaskAnalysis`] - A validated subnet mask
//! - [`IpClassification`] - Public/private class of an address
//! - [`SubnetPlan`] and [`SubnetRecord`] - Output of subnet partitioning

mod class;
mod ipv4;
mod mask;
mod subnet;

// Re-export public types
pub use class::{IpClassification, PrivateClass, PublicClass};
pub use ipv4::{get_cidr_mask, offset_addr, parse_address, Ipv4, MAX_LENGTH};
pub(crate) use ipv4::parse_octet;
pub use mask::MaskAnalysis;
pub use subnet::{SubnetIter, SubnetPlan, SubnetRecord, SubnetRecords};
