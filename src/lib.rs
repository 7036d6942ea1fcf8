//! IPv4 subnet calculator.
//!
//! The calculator core lives in [`processing`]: address parsing and classification,
//! decimal/binary conversion, mask analysis and subnet planning. Everything in it is a
//! pure function returning `Result<_, CalcError>`. [`shell`] is the interactive menu
//! built on top, and [`output`] renders plans as a table, CSV or JSON.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

pub use config::Config;
pub use error::CalcError;
pub use models::{MaskAnalysis, SubnetPlan, SubnetRecord};
pub use processing::{
    analyze, analyze_mask, binary_to_decimal, count_hosts, decimal_to_binary, plan_subnets,
    prefix_to_binary_mask, usable_hosts,
};
