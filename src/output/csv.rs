//! CSV output formatting for subnet plans.

use crate::models::SubnetPlan;
use std::io::{self, Write};

/// Write the subnets of a plan as CSV with a header row, one row at a time.
///
/// # Arguments
/// * `out` - Destination writer
/// * `plan` - The plan to render
/// * `max_rows` - Optional cap on the number of subnet rows
pub fn write_plan_csv<W: Write>(
    out: &mut W,
    plan: &SubnetPlan,
    max_rows: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "subnet,first,last,broadcast")?;
    for record in plan.subnets.iter().take(max_rows.unwrap_or(usize::MAX)) {
        writeln!(
            out,
            "{},{},{},{}",
            record.network, record.first_usable, record.last_usable, record.broadcast
        )?;
    }
    Ok(())
}
