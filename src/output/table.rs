//! Box-drawn subnet table and plan summary.

use super::terminal::format_field;
use crate::models::{SubnetPlan, SubnetRecord};
use colored::Colorize;
use std::io::{self, Write};

const COLUMN_WIDTH: usize = 14;

const TABLE_HEADER: [&str; 5] = [
    "╔═══════════════════════════════════════════════════════════════════╗",
    "║                         Subnet Table                              ║",
    "╠════════════════╦════════════════╦════════════════╦════════════════╣",
    "║ Subnet         ║ First          ║ Last           ║ Broadcast      ║",
    "╠════════════════╬════════════════╬════════════════╬════════════════╣",
];
const TABLE_FOOTER: &str =
    "╚═══════════════════════════════════════════════════════════════════╝";

/// Write new prefix, new mask and network jump, one per line.
pub fn write_plan_summary<W: Write>(out: &mut W, plan: &SubnetPlan) -> io::Result<()> {
    writeln!(out, "{}/{}", ".- New Prefix ----- ".yellow(), plan.new_prefix)?;
    writeln!(out, "{}{}", ".- New Mask ------- ".yellow(), plan.new_mask)?;
    writeln!(out, "{}{}", ".- Network Jump --- ".yellow(), plan.displayed_jump())?;
    if plan.prefix_capped {
        let warning = format!(
            "Warning: /{} + {} bits exceeds /32, prefix held at /32",
            plan.base.mask, plan.bits_borrowed
        );
        writeln!(out, "{}", warning.on_red())?;
    }
    Ok(())
}

fn table_row(record: &SubnetRecord) -> String {
    format!(
        "║ {network} ║ {first} ║ {last} ║ {broadcast} ║",
        network = format_field(record.network, COLUMN_WIDTH),
        first = format_field(record.first_usable, COLUMN_WIDTH),
        last = format_field(record.last_usable, COLUMN_WIDTH),
        broadcast = format_field(record.broadcast, COLUMN_WIDTH),
    )
}

/// Write the subnet table row by row, stopping after `max_rows` rows when given.
pub fn write_subnet_table<W: Write>(
    out: &mut W,
    plan: &SubnetPlan,
    max_rows: Option<usize>,
) -> io::Result<()> {
    for line in TABLE_HEADER {
        writeln!(out, "{line}")?;
    }
    let shown = max_rows.unwrap_or(usize::MAX);
    for record in plan.subnets.iter().take(shown) {
        writeln!(out, "{}", table_row(&record))?;
    }
    writeln!(out, "{TABLE_FOOTER}")?;

    let hidden = plan.subnets.len().saturating_sub(shown as u64);
    if hidden > 0 {
        log::info!("subnet table truncated, {hidden} rows hidden");
        writeln!(out, "... {hidden} more subnets not shown")?;
    }
    Ok(())
}
