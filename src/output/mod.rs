//! Output formatting for calculator results.
//!
//! Plans are written straight to a [`Write`] one row at a time, so a plan with millions of
//! subnets never has to exist in memory as text.
//!
//! - [`csv`] - CSV rendering of subnet plans
//! - [`table`] - Box-drawn subnet table
//! - [`terminal`] - Field padding and screen control

mod csv;
mod table;
mod terminal;

use crate::models::SubnetPlan;
use std::error::Error;
use std::io::Write;
use std::str::FromStr;

pub use csv::write_plan_csv;
pub use table::{write_plan_summary, write_subnet_table};
pub use terminal::{format_field, CLEAR_SCREEN};

/// How a subnet plan is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}'")),
        }
    }
}

/// Write a plan in the chosen format.
///
/// `max_rows` limits the subnets written in every format. In JSON, `subnet_count` still
/// holds the number requested while `subnets` holds at most `max_rows` entries.
pub fn render_plan<W: Write>(
    out: &mut W,
    plan: &SubnetPlan,
    format: OutputFormat,
    max_rows: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Table => {
            write_plan_summary(out, plan)?;
            writeln!(out)?;
            write_subnet_table(out, plan, max_rows)?;
        }
        OutputFormat::Csv => write_plan_csv(out, plan, max_rows)?,
        OutputFormat::Json => {
            let shown = SubnetPlan {
                subnets: plan.subnets.truncated(max_rows),
                ..plan.clone()
            };
            serde_json::to_writer_pretty(&mut *out, &shown)
                .map_err(|e| format!("Error serializing plan to JSON: {e}"))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
