use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use stockscope_cli::cli::{parse_known, split_global_args, GlobalArgs, OutputFormat};
use stockscope_cli::error::CliError;
use stockscope_cli::output::{self, banner, style::Style};
use stockscope_cli::{dispatch, logging, CommandInvocation, Report};
use stockscope_core::{ClientConfig, MarketData, StaticMarketData, YahooAdapter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let (global, command) = split_global_args(std::env::args().skip(1).collect());

    let (global, rejected) = match parse_known::<GlobalArgs>(&global) {
        Ok(parsed) => parsed,
        Err(error) => {
            write!(io::stdout().lock(), "{}", error.render())?;
            return Ok(());
        }
    };
    logging::init(global.verbose)?;

    let source: Arc<dyn MarketData> = if global.offline {
        Arc::new(StaticMarketData::demo())
    } else {
        Arc::new(YahooAdapter::new(
            ClientConfig::default().with_timeout_ms(global.timeout_ms),
        ))
    };
    let style = if global.no_color {
        Style::plain()
    } else {
        Style::colored()
    };

    if !global.no_banner && global.format == OutputFormat::Text {
        banner::render_home(&mut io::stdout().lock(), style)?;
    }

    // A leading dash token that is not a global option is an unknown command.
    let report = match rejected.into_iter().next() {
        Some(command) => Report::UnknownCommand { command },
        None => {
            let invocation = CommandInvocation::from_args(command);
            dispatch(invocation, source.as_ref(), &mut rand::thread_rng()).await
        }
    };

    let mut out = io::stdout().lock();
    output::render(&mut out, &report, global.format, style)?;
    out.flush()?;
    Ok(())
}
