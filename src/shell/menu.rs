//! Menu options of the interactive shell.

use colored::Colorize;
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    NetworkMask,
    VerifyIp,
    DecimalToBinary,
    BinaryToDecimal,
    PrefixToMask,
    Subnet,
    Exit,
}

impl MenuOption {
    /// Menu order.
    pub const ALL: [MenuOption; 7] = [
        MenuOption::NetworkMask,
        MenuOption::VerifyIp,
        MenuOption::DecimalToBinary,
        MenuOption::BinaryToDecimal,
        MenuOption::PrefixToMask,
        MenuOption::Subnet,
        MenuOption::Exit,
    ];

    /// Key typed to choose the option.
    pub fn key(&self) -> &'static str {
        match self {
            MenuOption::NetworkMask => "1",
            MenuOption::VerifyIp => "2",
            MenuOption::DecimalToBinary => "3",
            MenuOption::BinaryToDecimal => "4",
            MenuOption::PrefixToMask => "5",
            MenuOption::Subnet => "6",
            MenuOption::Exit => "x",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::NetworkMask => "Network Mask",
            MenuOption::VerifyIp => "Verify IP",
            MenuOption::DecimalToBinary => "Decimal to Binary",
            MenuOption::BinaryToDecimal => "Binary to Decimal",
            MenuOption::PrefixToMask => "Prefix to Mask",
            MenuOption::Subnet => "Subnet",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        MenuOption::ALL
            .iter()
            .copied()
            .find(|option| option.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| format!("Invalid option '{key}'"))
    }
}

const MENU_WIDTH: usize = 27;

/// The boxed main menu.
pub fn render_menu() -> String {
    let border = "═".repeat(MENU_WIDTH);
    let mut lines = vec![
        format!("╔{border}╗").yellow().to_string(),
        format!(
            "{}{}{}",
            "║".yellow(),
            format!("{:^width$}", "IPv4 Subnet Calculator", width = MENU_WIDTH).bold(),
            "║".yellow()
        ),
        format!("╠{border}╣").yellow().to_string(),
    ];
    for option in MenuOption::ALL {
        let entry = format!("{}. {}", option.key(), option.label());
        let pad = MENU_WIDTH.saturating_sub(entry.chars().count() + 1);
        lines.push(format!(
            "{} {} {}{}{}",
            "║".yellow(),
            format!("{}.", option.key()).cyan(),
            option.label(),
            " ".repeat(pad),
            "║".yellow()
        ));
    }
    lines.push(format!("╚{border}╝").yellow().to_string());
    lines.join("\n")
}
