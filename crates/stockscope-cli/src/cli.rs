//! CLI argument definitions for stockscope.
//!
//! The top-level token is a slash command matched by [`crate::router`];
//! each command's own arguments are parsed with the clap structs below.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `/view <stock> [-n] [-c]` | Company header, officers and simulated headlines, market data and 50-day MA |
//! | `/boot` | Simulated connection to a stock exchange |
//! | `/gov [--past\|--future]` | Simulated Federal Reserve news |
//! | `/help`, `/?` | Usage |
//!
//! # Global Options
//!
//! Placed before the command.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--offline` | `false` | Use the built-in demo catalogue instead of Yahoo |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//! | `--no-banner` | `false` | Skip the home screen |
//! | `--format` | `text` | `text` or `json` |
//! | `--no-color` | `false` | Plain text output |
//! | `-v` | warn | Log verbosity on stderr, repeatable |
//!
//! # Examples
//!
//! ```bash
//! stockscope /view AAPL -n -c
//! stockscope --offline /view MSFT --chart
//! stockscope /gov --future
//! ```

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser, ValueEnum};

/// Global options that consume the following token as their value.
const VALUE_OPTIONS: &[&str] = &["--timeout-ms", "--format"];

/// Splits argv (program name removed) into global options and the command.
///
/// The command starts at the first token that is neither an option nor an
/// option's value; slash tokens always start it.
pub fn split_global_args(mut args: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut expects_value = false;
    let split = args
        .iter()
        .position(|arg| {
            if expects_value && !arg.starts_with('/') {
                expects_value = false;
                return false;
            }
            if arg.starts_with('/') || !arg.starts_with('-') {
                return true;
            }
            expects_value = VALUE_OPTIONS.contains(&arg.as_str());
            false
        })
        .unwrap_or(args.len());

    let command = args.split_off(split);
    (args, command)
}

/// Parses `args`, dropping every argument clap does not recognise.
///
/// Returns the parsed value together with the dropped arguments in the
/// order they were rejected. Any other parse error is returned as is.
pub fn parse_known<P: Parser>(args: &[String]) -> Result<(P, Vec<String>), clap::Error> {
    let mut remaining = args.to_vec();
    let mut rejected = Vec::new();
    loop {
        let error = match P::try_parse_from(&remaining) {
            Ok(parsed) => return Ok((parsed, rejected)),
            Err(error) => error,
        };
        let Some(index) = unknown_argument(&error)
            .and_then(|arg| remaining.iter().position(|candidate| names_argument(candidate, arg)))
        else {
            return Err(error);
        };
        rejected.push(remaining.remove(index));
    }
}

/// clap reports `--name=value` by its option name only.
fn names_argument(candidate: &str, arg: &str) -> bool {
    candidate == arg
        || candidate
            .strip_prefix(arg)
            .is_some_and(|rest| arg.starts_with("--") && rest.starts_with('='))
}

fn unknown_argument(error: &clap::Error) -> Option<&str> {
    if error.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match error.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.as_str()),
        _ => None,
    }
}

/// Options accepted ahead of the slash command.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stockscope",
    version,
    no_binary_name = true,
    about = "Stock lookups with simulated deep-link news",
    after_help = "Commands: /view <stock> [-n] [-c], /boot, /gov [--past|--future], /help"
)]
pub struct GlobalArgs {
    /// Serve lookups from the built-in demo catalogue instead of Yahoo Finance.
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Market data request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Skip the home screen.
    #[arg(long, default_value_t = false)]
    pub no_banner: bool,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable ANSI colors.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Raise log verbosity on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled terminal text.
    Text,
    /// Single JSON object per command.
    Json,
}

/// Arguments for `/view`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "/view",
    no_binary_name = true,
    about = "View stock information, news, and chart analysis."
)]
pub struct ViewArgs {
    /// The stock ticker symbol (e.g., GOOGL).
    pub stock_name: String,

    /// Display news and corporate officer information.
    #[arg(short, long, default_value_t = false)]
    pub news: bool,

    /// Display technical analysis and market data.
    #[arg(short, long, default_value_t = false)]
    pub chart: bool,
}

/// Arguments for `/gov`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "/gov",
    no_binary_name = true,
    about = "Monitor government financial news (simulated)."
)]
pub struct GovArgs {
    /// Generate analysis of past Fed actions (e.g., rate cuts). Wins over --future.
    #[arg(long, default_value_t = false)]
    pub past: bool,

    /// Generate simulated future Fed calendar and speaker dates.
    #[arg(long, default_value_t = false)]
    pub future: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_accepts_short_and_long_flags() {
        let args = ViewArgs::try_parse_from(["aapl", "-n", "--chart"]).expect("parses");
        assert_eq!(args.stock_name, "aapl");
        assert!(args.news);
        assert!(args.chart);
    }

    #[test]
    fn view_requires_a_ticker() {
        let error = ViewArgs::try_parse_from(["-c"]).expect_err("must fail");
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn gov_flags_can_be_combined() {
        let args = GovArgs::try_parse_from(["--past", "--future"]).expect("parses");
        assert!(args.past);
        assert!(args.future);
    }

    #[test]
    fn global_defaults() {
        let args = GlobalArgs::try_parse_from(Vec::<String>::new()).expect("parses");
        assert!(!args.offline);
        assert_eq!(args.timeout_ms, 10_000);
        assert_eq!(args.verbose, 0);
        assert_eq!(args.format, OutputFormat::Text);
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn global_options_stop_at_the_command() {
        let (global, command) =
            split_global_args(strings(&["--timeout-ms", "500", "-v", "/view", "AAPL", "-c"]));
        assert_eq!(global, strings(&["--timeout-ms", "500", "-v"]));
        assert_eq!(command, strings(&["/view", "AAPL", "-c"]));

        let (global, command) = split_global_args(strings(&["--offline", "foo"]));
        assert_eq!(global, strings(&["--offline"]));
        assert_eq!(command, strings(&["foo"]));

        let (global, command) = split_global_args(strings(&["--no-banner"]));
        assert_eq!(global, strings(&["--no-banner"]));
        assert!(command.is_empty());
    }

    #[test]
    fn unknown_arguments_are_dropped() {
        let (args, rejected) = parse_known::<ViewArgs>(&strings(&[
            "AAPL", "extra", "--bogus", "--depth=3", "-c",
        ]))
        .expect("parses");
        assert_eq!(args.stock_name, "AAPL");
        assert!(args.chart);
        assert_eq!(rejected, strings(&["extra", "--bogus", "--depth=3"]));
    }

    #[test]
    fn missing_ticker_survives_known_args_parsing() {
        let error = parse_known::<ViewArgs>(&strings(&["--bogus"])).expect_err("no ticker");
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_global_options_are_reported_back() {
        let (args, rejected) =
            parse_known::<GlobalArgs>(&strings(&["--no-banner", "--bogus"])).expect("parses");
        assert!(args.no_banner);
        assert_eq!(rejected, strings(&["--bogus"]));

        let error = parse_known::<GlobalArgs>(&strings(&["--format", "xml"])).expect_err("bad value");
        assert_eq!(error.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn verbose_is_repeatable() {
        let args = GlobalArgs::try_parse_from(["-vv", "--offline"]).expect("parses");
        assert_eq!(args.verbose, 2);
        assert!(args.offline);
    }
}
