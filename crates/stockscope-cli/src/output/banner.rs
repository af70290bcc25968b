//! Boot cosmetics and the home screen shown before a command runs.

use std::io::{self, Write};

use super::style::{Style, CYAN, GREEN, YELLOW};

const ART: &str = r"
███████╗████████╗ ██████╗  ██████╗██╗  ██╗███████╗ ██████╗ ██████╗ ██████╗ ███████╗
██╔════╝╚══██╔══╝██╔═══██╗██╔════╝██║ ██╔╝██╔════╝██╔════╝██╔═══██╗██╔══██╗██╔════╝
███████╗   ██║   ██║   ██║██║     █████╔╝ ███████╗██║     ██║   ██║██████╔╝█████╗
╚════██║   ██║   ██║   ██║██║     ██╔═██╗ ╚════██║██║     ██║   ██║██╔═══╝ ██╔══╝
███████║   ██║   ╚██████╔╝╚██████╗██║  ██╗███████║╚██████╗╚██████╔╝██║     ███████╗
╚══════╝   ╚═╝    ╚═════╝  ╚═════╝╚═╝  ╚═╝╚══════╝ ╚═════╝ ╚═════╝ ╚═╝     ╚══════╝
";

const BOOT_STEPS: &[&str] = &[
    "Initializing data streams...",
    "Connecting to market data feeds...",
];

pub fn render_home<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style.paint(GREEN, format!("Booting Stockscope v{}...", env!("CARGO_PKG_VERSION")))
    )?;
    for step in BOOT_STEPS {
        writeln!(out, "{step}")?;
    }
    writeln!(out, "{}", style.paint(GREEN, "Connection successful."))?;

    for line in ART.lines() {
        writeln!(out, "{}", style.paint(GREEN, line))?;
    }
    writeln!(
        out,
        "{}",
        style.paint(CYAN, format!("{:^84}", "market data, simulated deep links"))
    )?;
    writeln!(out)?;
    writeln!(out, "{}", style.paint(YELLOW, "Welcome to Stockscope!"))
}
