//! Interactive menu shell.
//!
//! Reads options and answers from any [`BufRead`] and writes to any [`Write`], so the
//! whole prompt loop can be driven from tests.

mod menu;

pub use menu::{render_menu, MenuOption};

use crate::config::Config;
use crate::error::CalcError;
use crate::output::{render_plan, CLEAR_SCREEN};
use crate::processing::{
    analyze, analyze_mask, analyze_mask_strict, binary_to_decimal, count_hosts,
    decimal_to_binary, plan_subnets, prefix_to_binary_mask, usable_hosts,
};
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

/// Whether the loop keeps going after an option.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Answer to a prefix length question.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PrefixAnswer {
    Prefix(i64),
    /// Not a number; holds the text as typed.
    Unparsable(String),
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    config: Config,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Shell {
            input,
            output,
            config,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each menu. Off by default.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu and run options until `x` or end of input.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        log::info!("#Start shell");
        loop {
            if self.clear_screen {
                write!(self.output, "{CLEAR_SCREEN}")?;
            }
            writeln!(self.output, "{}", render_menu())?;
            let Some(answer) = self.prompt("Choose an option: ")? else {
                break;
            };
            let flow = match answer.parse::<MenuOption>() {
                Ok(option) => {
                    log::info!("option {:?}", option);
                    self.dispatch(option)?
                }
                Err(e) => {
                    log::warn!("{e}");
                    writeln!(self.output, "\n{}", "Invalid option, please try again.".red())?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        log::info!("#End shell");
        Ok(())
    }

    /// Print `question` and read one line. None at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>, Box<dyn Error>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report_error(&mut self, e: &CalcError) -> Result<(), Box<dyn Error>> {
        log::warn!("rejected input: {e}");
        writeln!(self.output, "{}", e.to_string().on_red())?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow, Box<dyn Error>> {
        let answered = match option {
            MenuOption::NetworkMask => self.network_mask()?,
            MenuOption::VerifyIp => self.verify_ip()?,
            MenuOption::DecimalToBinary => self.decimal_to_binary()?,
            MenuOption::BinaryToDecimal => self.binary_to_decimal()?,
            MenuOption::PrefixToMask => self.prefix_to_mask()?,
            MenuOption::Subnet => self.subnet()?,
            MenuOption::Exit => return Ok(Flow::Exit),
        };
        if !answered {
            return Ok(Flow::Exit);
        }
        match self.prompt("\n> Press Enter to continue...")? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Exit),
        }
    }

    // Each handler returns false when input ran out mid-question.

    fn network_mask(&mut self) -> Result<bool, Box<dyn Error>> {
        let question = "\nEnter the network mask in decimal format (255.255.255.0): ";
        let Some(mask) = self.prompt(question)? else {
            return Ok(false);
        };
        writeln!(self.output)?;
        let analysis = if self.config.strict_mask {
            analyze_mask_strict(&mask)
        } else {
            analyze_mask(&mask)
        };
        match analysis {
            Ok(analysis) => {
                writeln!(self.output, "{} {}", "Binary:".yellow(), analysis.binary)?;
                writeln!(self.output, "{} / {}", "Prefix:".yellow(), analysis.prefix_length)?;
                let total = count_hosts(&analysis.binary);
                let valid = usable_hosts(&analysis.binary);
                writeln!(self.output, "{} {}", "Total hosts:".yellow(), total)?;
                writeln!(self.output, "{} {}", "Valid hosts:".yellow(), valid)?;
            }
            Err(e) => {
                self.report_error(&e)?;
                writeln!(self.output, "{}", "Invalid network mask format.".on_red())?;
            }
        }
        Ok(true)
    }

    fn verify_ip(&mut self) -> Result<bool, Box<dyn Error>> {
        let Some(ip) = self.prompt("\nEnter the IP address: ")? else {
            return Ok(false);
        };
        writeln!(self.output)?;
        match analyze(&ip) {
            Ok(classification) => {
                writeln!(self.output, "{}", classification.to_string().yellow())?
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn decimal_to_binary(&mut self) -> Result<bool, Box<dyn Error>> {
        let Some(decimal) = self.prompt("\nEnter the decimal IP address: ")? else {
            return Ok(false);
        };
        writeln!(self.output)?;
        let octets: Vec<&str> = decimal.split('.').collect();
        match decimal_to_binary(&octets) {
            Ok(binary) => writeln!(self.output, "{} {}", "Binary:".yellow(), binary)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn binary_to_decimal(&mut self) -> Result<bool, Box<dyn Error>> {
        let Some(binary) = self.prompt("\nEnter the binary IP address: ")? else {
            return Ok(false);
        };
        writeln!(self.output)?;
        match binary_to_decimal(&binary) {
            Ok(decimal) => writeln!(self.output, "{} {}", "Decimal:".yellow(), decimal)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    /// Read a prefix length, using the configured default for a blank answer.
    fn prompt_prefix(&mut self, question: &str) -> Result<Option<PrefixAnswer>, Box<dyn Error>> {
        let question = format!("{question} ({}): ", self.config.default_prefix);
        let Some(answer) = self.prompt(&question)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(PrefixAnswer::Prefix(i64::from(
                self.config.default_prefix,
            ))));
        }
        Ok(Some(match answer.parse::<i64>() {
            Ok(prefix) => PrefixAnswer::Prefix(prefix),
            Err(_) => PrefixAnswer::Unparsable(answer),
        }))
    }

    fn report_unparsable_prefix(&mut self, answer: &str) -> Result<(), Box<dyn Error>> {
        log::warn!("rejected prefix '{answer}'");
        let msg = format!("Invalid prefix: '{answer}'");
        writeln!(self.output, "{}", msg.on_red())?;
        Ok(())
    }

    fn prefix_to_mask(&mut self) -> Result<bool, Box<dyn Error>> {
        let Some(prefix) = self.prompt_prefix("\nEnter the prefix length")? else {
            return Ok(false);
        };
        writeln!(self.output)?;
        let prefix = match prefix {
            PrefixAnswer::Prefix(prefix) => prefix,
            PrefixAnswer::Unparsable(answer) => {
                self.report_unparsable_prefix(&answer)?;
                return Ok(true);
            }
        };
        let result = prefix_to_binary_mask(prefix)
            .and_then(|binary| binary_to_decimal(&binary).map(|decimal| (binary, decimal)));
        match result {
            Ok((binary, decimal)) => {
                writeln!(self.output, "{} {}", "Binary Mask:".yellow(), binary)?;
                writeln!(self.output, "{} {}", "Decimal Mask:".yellow(), decimal)?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn subnet(&mut self) -> Result<bool, Box<dyn Error>> {
        let Some(ip) = self.prompt("\nEnter the IP address: ")? else {
            return Ok(false);
        };
        let Some(count) = self.prompt("Enter the number of subnets: ")? else {
            return Ok(false);
        };
        let Some(prefix) = self.prompt_prefix("Enter the default mask length")? else {
            return Ok(false);
        };
        writeln!(self.output)?;

        let count = match count.parse::<i64>() {
            Ok(count) => count,
            Err(_) => {
                let msg = format!("Invalid number of subnets: '{count}'");
                writeln!(self.output, "{}", msg.on_red())?;
                return Ok(true);
            }
        };
        let prefix = match prefix {
            PrefixAnswer::Prefix(prefix) => prefix,
            PrefixAnswer::Unparsable(answer) => {
                self.report_unparsable_prefix(&answer)?;
                return Ok(true);
            }
        };

        match plan_subnets(&ip, count, prefix) {
            Ok(plan) => {
                if plan.prefix_capped {
                    log::warn!(
                        "prefix capped at /32 for {} subnets from /{}",
                        plan.subnet_count,
                        plan.base.mask
                    );
                }
                let (format, max_rows) = (self.config.output, self.config.max_rows);
                render_plan(&mut self.output, &plan, format, max_rows)?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_shell(input: &str, config: Config) -> String {
        let mut shell = Shell::new(Cursor::new(input.to_string()), Vec::new(), config);
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_shell("x\n", Config::default());
        assert!(out.contains("Choose an option: "));
        assert_eq!(out.matches("Choose an option: ").count(), 1);
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_shell("", Config::default());
        assert_eq!(out.matches("Choose an option: ").count(), 1);
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let out = run_shell("9\nx\n", Config::default());
        assert!(out.contains("Invalid option, please try again."));
        assert_eq!(out.matches("Choose an option: ").count(), 2);
    }

    #[test]
    fn test_network_mask() {
        let out = run_shell("1\n255.255.255.0\n\nx\n", Config::default());
        assert!(out.contains("11111111.11111111.11111111.00000000"));
        assert!(out.contains("/ 24"));
        assert!(out.contains("256"));
        assert!(out.contains("254"));
    }

    #[test]
    fn test_network_mask_invalid() {
        let out = run_shell("1\n255.255.85.0\n\nx\n", Config::default());
        assert!(out.contains("Invalid network mask format."));
    }

    #[test]
    fn test_network_mask_strict() {
        let lenient = run_shell("1\n255.0.255.0\n\nx\n", Config::default());
        assert!(lenient.contains("/ 16"));

        let config = Config {
            strict_mask: true,
            ..Config::default()
        };
        let strict = run_shell("1\n255.0.255.0\n\nx\n", config);
        assert!(strict.contains("Invalid network mask format."));
    }

    #[test]
    fn test_verify_ip() {
        let out = run_shell("2\n192.168.0.10\n\n2\n999.1.1.1\n\nx\n", Config::default());
        assert!(out.contains("Private IP, class C"));
        assert!(out.contains("The IP is not valid"));
    }

    #[test]
    fn test_conversions() {
        let input = "3\n10.0.0.1\n\n4\n11000000.10101000.00000001.00000001\n\nx\n";
        let out = run_shell(input, Config::default());
        assert!(out.contains("00001010.00000000.00000000.00000001"));
        assert!(out.contains("192.168.1.1"));
    }

    #[test]
    fn test_prefix_to_mask_default_and_invalid() {
        let config = Config {
            default_prefix: 20,
            ..Config::default()
        };
        let out = run_shell("5\n\n\n5\n40\n\n5\nabc\n\nx\n", config);
        assert!(out.contains("Enter the prefix length (20): "));
        assert!(out.contains("255.255.240.0"));
        assert!(out.contains("Invalid prefix: 40"));
        assert!(out.contains("Invalid prefix: 'abc'"));
    }

    #[test]
    fn test_subnet_table() {
        let out = run_shell("6\n192.168.1.0\n4\n24\n\nx\n", Config::default());
        assert!(out.contains("255.255.255.192"));
        let row = "║ 192.168.1.64   ║ 192.168.1.65   ║ 192.168.1.126  ║ 192.168.1.127  ║";
        assert!(out.contains(row));
    }

    #[test]
    fn test_subnet_rejects_zero_count() {
        let out = run_shell("6\n192.168.1.0\n0\n24\n\nx\n", Config::default());
        assert!(out.contains("Invalid subnet count: 0"));
    }

    #[test]
    fn test_subnet_csv_output() {
        let config = Config {
            output: crate::output::OutputFormat::Csv,
            ..Config::default()
        };
        let out = run_shell("6\n10.0.0.0\n2\n\n\nx\n", config);
        assert!(out.contains("subnet,first,last,broadcast"));
        assert!(out.contains("10.0.0.128,10.0.0.129,10.0.0.254,10.0.0.255"));
    }

    #[test]
    fn test_input_ends_mid_question() {
        let out = run_shell("6\n10.0.0.0\n", Config::default());
        assert!(out.contains("Enter the number of subnets: "));
    }
}
