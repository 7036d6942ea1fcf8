//! Result of analysing a dotted-decimal subnet mask.

use serde::Serialize;

/// A mask that passed validation, in binary form with its prefix length.
///
/// Host counts come from [`crate::processing::count_hosts`] and
/// [`crate::processing::usable_hosts`] applied to `binary`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MaskAnalysis {
    /// Binary octets joined with '.', e.g. `11111111.11111111.11111111.00000000`.
    pub binary: String,
    /// Total number of 1-bits across the four octets.
    pub prefix_length: u8,
}
