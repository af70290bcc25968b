//! Slash-command dispatch.
//!
//! The first argument selects the handler by exact, case-sensitive match:
//!
//! | Token | Handler |
//! |-------|---------|
//! | `/view` | [`commands::view`] |
//! | `/boot` | [`commands::boot`] |
//! | `/gov` | [`commands::gov`] |
//! | `/help`, `/?`, nothing | usage |
//! | anything else | unknown command plus usage |
//!
//! [`dispatch`] always yields a [`Report`]; handler failures are folded into
//! one instead of being propagated.

use clap::error::ErrorKind;
use rand::Rng;
use serde::Serialize;
use stockscope_core::content::GovEventDoc;
use stockscope_core::MarketData;
use tracing::{debug, warn};

use crate::cli::{parse_known, GovArgs, ViewArgs};
use crate::commands::{self, BootOutcome, TickerQuery, ViewOutcome, ViewReport};
use crate::error::CommandError;

/// Command name plus its remaining arguments, built once per process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandInvocation {
    pub name: Option<String>,
    pub raw_args: Vec<String>,
}

impl CommandInvocation {
    /// `args` excludes the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        Self {
            name: args.next(),
            raw_args: args.collect(),
        }
    }
}

/// Parsed command, ready for its handler.
#[derive(Debug, Clone)]
pub enum Route {
    View(ViewArgs),
    Boot,
    Gov(GovArgs),
    Help,
    Unknown(String),
}

impl Route {
    /// Arguments a command does not know are ignored, as in the legacy tool.
    pub fn parse(invocation: &CommandInvocation) -> Result<Self, clap::Error> {
        let Some(name) = invocation.name.as_deref() else {
            return Ok(Self::Help);
        };

        let route = match name {
            "/view" => Self::View(known_args(name, &invocation.raw_args)?),
            "/boot" => Self::Boot,
            "/gov" => Self::Gov(known_args(name, &invocation.raw_args)?),
            "/help" | "/?" => Self::Help,
            other => Self::Unknown(other.to_owned()),
        };
        Ok(route)
    }
}

fn known_args<P: clap::Parser>(command: &str, raw_args: &[String]) -> Result<P, clap::Error> {
    let (parsed, ignored) = parse_known(raw_args)?;
    if !ignored.is_empty() {
        debug!(command, ?ignored, "ignoring unrecognised arguments");
    }
    Ok(parsed)
}

/// Everything a command can produce, ready for the presenter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", content = "data", rename_all = "snake_case")]
pub enum Report {
    Help,
    View(ViewReport),
    Boot(BootOutcome),
    Gov(GovEventDoc),
    NotFound { symbol: String },
    Malformed { usage: String },
    CommandHelp { text: String },
    UnknownCommand { command: String },
    Failed { code: String, message: String },
}

impl Report {
    fn from_parse_error(error: clap::Error) -> Self {
        match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Self::CommandHelp {
                text: error.render().to_string(),
            },
            _ => Self::from(CommandError::from(error)),
        }
    }
}

impl From<CommandError> for Report {
    fn from(error: CommandError) -> Self {
        match error {
            CommandError::Malformed { usage } => Self::Malformed { usage },
            other => {
                warn!(code = other.code(), "command failed: {other}");
                Self::Failed {
                    code: other.code().to_owned(),
                    message: other.to_string(),
                }
            }
        }
    }
}

/// Resolves and runs the handler for `invocation`.
pub async fn dispatch<R: Rng + ?Sized>(
    invocation: CommandInvocation,
    source: &dyn MarketData,
    rng: &mut R,
) -> Report {
    let route = match Route::parse(&invocation) {
        Ok(route) => route,
        Err(error) => return Report::from_parse_error(error),
    };
    debug!(?route, "dispatching");

    match route {
        Route::View(args) => view(&args, source, rng).await,
        Route::Boot => Report::Boot(commands::boot::run(rng)),
        Route::Gov(args) => Report::Gov(commands::gov::run(&args, rng)),
        Route::Help => Report::Help,
        Route::Unknown(command) => Report::UnknownCommand { command },
    }
}

async fn view<R: Rng + ?Sized>(args: &ViewArgs, source: &dyn MarketData, rng: &mut R) -> Report {
    let query = match TickerQuery::from_args(args) {
        Ok(query) => query,
        Err(error) => {
            debug!(input = %args.stock_name, "rejected ticker: {error}");
            return Report::NotFound {
                symbol: args.stock_name.clone(),
            };
        }
    };

    match commands::view::run(&query, source, rng).await {
        Ok(ViewOutcome::Found(report)) => Report::View(report),
        Ok(ViewOutcome::NotFound { .. }) => Report::NotFound {
            symbol: args.stock_name.clone(),
        },
        Err(error) => Report::from(error),
    }
}
