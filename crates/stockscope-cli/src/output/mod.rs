//! Presenter: turns a [`Report`] into terminal text or JSON.

pub mod banner;
pub mod style;

use std::io::Write;

use stockscope_core::content::{GeneratedHeadline, GovEventDoc, GovEventKind};
use stockscope_core::{IndicatorResult, Officer, Signal};

use self::style::{Style, CYAN, GREEN, GREY, LIGHT_GREEN, RED, WHITE, YELLOW};
use crate::cli::OutputFormat;
use crate::commands::{BootOutcome, ChartAnalysis, ChartSection, NewsSection, ViewReport};
use crate::error::CliError;
use crate::router::Report;

const NOT_AVAILABLE: &str = "N/A";

pub const USAGE: &str = "\
Usage: stockscope [global options] <command> [options]

Commands:
  /view <stock> [-n] [-c]...   View detailed stock information (market data from Yahoo Finance)
  /boot                        Simulate a connection to a stock exchange
  /gov [--past|--future]       Check for government financial news (Uses Generative Deep Links)
  /help                        Show this help message";

pub fn render<W: Write>(
    out: &mut W,
    report: &Report,
    format: OutputFormat,
    style: Style,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(report)?;
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Text => render_text(out, report, style)?,
    }
    Ok(())
}

fn render_text<W: Write>(out: &mut W, report: &Report, style: Style) -> Result<(), CliError> {
    match report {
        Report::Help => render_usage(out)?,
        Report::View(view) => render_view(out, view, style)?,
        Report::Boot(outcome) => render_boot(out, outcome, style)?,
        Report::Gov(doc) => render_gov(out, doc, style)?,
        Report::NotFound { symbol } => writeln!(
            out,
            "{}",
            style.paint(RED, format!("Could not find information for ticker: {symbol}"))
        )?,
        Report::Malformed { usage } | Report::CommandHelp { text: usage } => {
            write!(out, "{usage}")?;
            if !usage.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Report::UnknownCommand { command } => {
            writeln!(out, "{}", style.paint(RED, format!("Unknown command: {command}")))?;
            render_usage(out)?;
        }
        Report::Failed { message, .. } => writeln!(
            out,
            "{}",
            style.paint(RED, format!("An error occurred: {message}"))
        )?,
    }
    Ok(())
}

fn render_usage<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "{USAGE}")?;
    Ok(())
}

fn render_view<W: Write>(out: &mut W, view: &ViewReport, style: Style) -> Result<(), CliError> {
    let profile = &view.profile;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style.paint(
            CYAN,
            format!(
                "{} ({})",
                profile.long_name.as_deref().unwrap_or(NOT_AVAILABLE),
                profile.symbol
            )
        )
    )?;
    writeln!(
        out,
        "Sector: {}, Industry: {}",
        profile.sector.as_deref().unwrap_or(NOT_AVAILABLE),
        profile.industry.as_deref().unwrap_or(NOT_AVAILABLE)
    )?;

    if let Some(news) = &view.news {
        render_news(out, news, style)?;
    }
    if let Some(chart) = &view.chart {
        render_chart(out, chart, style)?;
    }
    Ok(())
}

fn render_news<W: Write>(out: &mut W, news: &NewsSection, style: Style) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "{}", style.paint(YELLOW, "--- Corporate Officers ---"))?;
    if news.officers.is_empty() {
        writeln!(
            out,
            "{}",
            style.paint(YELLOW, "No corporate officer information available.")
        )?;
    }
    for officer in &news.officers {
        writeln!(out, "{}", style.paint(GREEN, officer_line(officer)))?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style.paint(
            YELLOW,
            "--- Daily Top 5 Headlines (Simulated Deep Link Analysis) ---"
        )
    )?;
    for headline in &news.headlines {
        render_headline(out, headline, style)?;
    }
    Ok(())
}

fn render_headline<W: Write>(
    out: &mut W,
    headline: &GeneratedHeadline,
    style: Style,
) -> Result<(), CliError> {
    writeln!(
        out,
        "{}",
        style.paint(WHITE, format!("- Headline Deep Link: ({})", headline.text))
    )?;
    writeln!(
        out,
        "  {}{}",
        style.paint(GREY, "Source: stock0lyzer deep linking | Link: "),
        style.paint(CYAN, &headline.deep_link)
    )?;
    Ok(())
}

fn officer_line(officer: &Officer) -> String {
    let compensation = officer
        .total_pay
        .map(|pay| format!("${}", group_thousands(pay)))
        .unwrap_or_else(|| String::from(NOT_AVAILABLE));
    format!(
        "{}: {} (Total Compensation: {compensation})",
        officer.title.as_deref().unwrap_or(NOT_AVAILABLE),
        officer.name
    )
}

fn render_chart<W: Write>(out: &mut W, chart: &ChartSection, style: Style) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "{}", style.paint(YELLOW, "--- Market Data ---"))?;
    writeln!(
        out,
        "{}",
        style.paint(RED, format!("Previous Close: {}", price(chart.previous_close)))
    )?;
    writeln!(
        out,
        "{}{}",
        style.paint(YELLOW, format!("Bid/Ask: {} / ", price(chart.bid))),
        style.paint(LIGHT_GREEN, price(chart.ask))
    )?;
    let dividend = chart
        .dividend_yield
        .map(|value| format!("{:.2}%", value * 100.0))
        .unwrap_or_else(|| String::from(NOT_AVAILABLE));
    writeln!(
        out,
        "{}",
        style.paint(CYAN, format!("Dividend Yields: {dividend}"))
    )?;

    match &chart.analysis {
        ChartAnalysis::Indicator(result) => render_indicator(out, result, style)?,
        ChartAnalysis::Unavailable => {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                style.paint(
                    YELLOW,
                    "Historical data for chart analysis is unavailable from the market data provider."
                )
            )?;
        }
        ChartAnalysis::Failed { message } => writeln!(
            out,
            "{}",
            style.paint(
                RED,
                format!("An error occurred during chart analysis: {message}")
            )
        )?,
    }
    Ok(())
}

fn render_indicator<W: Write>(
    out: &mut W,
    result: &IndicatorResult,
    style: Style,
) -> Result<(), CliError> {
    let window = result.window_size;
    writeln!(out)?;
    writeln!(out, "{}", style.paint(YELLOW, "--- Technical Indicators ---"))?;

    match (result.signal, result.moving_average) {
        (Signal::Above, Some(average)) => {
            writeln!(out, "{window}-Day Moving Average (MA): {average:.2}")?;
            writeln!(
                out,
                "{}",
                style.paint(
                    GREEN,
                    format!(
                        "Price is currently priced ABOVE {window}-day MA (Potential bullish signal)."
                    )
                )
            )?;
        }
        (Signal::Below, Some(average)) => {
            writeln!(out, "{window}-Day Moving Average (MA): {average:.2}")?;
            writeln!(
                out,
                "{}",
                style.paint(
                    YELLOW,
                    format!(
                        "Price is currently priced BELOW {window}-day MA (Potential bearish signal)."
                    )
                )
            )?;
        }
        _ => {
            writeln!(out, "{window}-Day Moving Average (MA): {NOT_AVAILABLE}")?;
            writeln!(
                out,
                "{}",
                style.paint(
                    YELLOW,
                    format!("Not enough price history for a {window}-day MA signal.")
                )
            )?;
        }
    }
    Ok(())
}

fn render_boot<W: Write>(out: &mut W, outcome: &BootOutcome, style: Style) -> Result<(), CliError> {
    writeln!(out, "Attempting to boot into stock exchange server...")?;
    match outcome {
        BootOutcome::Connected { session } => {
            writeln!(
                out,
                "{}",
                style.paint(GREEN, "Connection successful. Live session established.")
            )?;
            writeln!(out, "Deep Link: {session}")?;
        }
        BootOutcome::Forbidden => {
            writeln!(out, "{}", style.paint(RED, "ERR: 403 forbidden (or moved)"))?;
        }
    }
    Ok(())
}

fn render_gov<W: Write>(out: &mut W, doc: &GovEventDoc, style: Style) -> Result<(), CliError> {
    let heading = match doc.kind {
        GovEventKind::TodaySpeaker => "--- Simulated Today's Fed Speaker (State Street Deep Link) ---",
        GovEventKind::PastAnalysis => "--- Generated Historical Fed Policy (State Street Deep Link) ---",
        GovEventKind::FutureCalendar => {
            "--- Generated Future FOMC Calendar (State Street Deep Link) ---"
        }
    };
    writeln!(out, "{}", style.paint(GREEN, heading))?;

    let link = style.paint(CYAN, &doc.deep_link);
    match doc.kind {
        GovEventKind::TodaySpeaker => {
            writeln!(out, "Today's Simulated Fed Event ({}: {link}):", doc.kind.link_label())?;
            writeln!(out, "{}", doc.body)?;
        }
        GovEventKind::PastAnalysis | GovEventKind::FutureCalendar => {
            writeln!(out, "{}", doc.body)?;
            writeln!(out, "{}: {link}", doc.kind.link_label())?;
        }
    }
    Ok(())
}

/// Provider value as received: whole prices keep their `.0`.
fn price(value: Option<f64>) -> String {
    value.map_or_else(|| String::from(NOT_AVAILABLE), |value| format!("{value:?}"))
}

/// `1234567` becomes `1,234,567`.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stockscope_core::content::{generate_past_fed_analysis, generate_today_speaker};
    use stockscope_core::{CompanyProfile, Symbol};

    use super::*;

    fn text(report: &Report) -> String {
        let mut buffer = Vec::new();
        render(&mut buffer, report, OutputFormat::Text, Style::plain()).expect("renders");
        String::from_utf8(buffer).expect("utf8")
    }

    fn apple() -> CompanyProfile {
        CompanyProfile {
            long_name: Some(String::from("Apple Inc.")),
            sector: Some(String::from("Technology")),
            previous_close: Some(189.84),
            bid: Some(189.5),
            ask: None,
            dividend_yield: Some(0.0052),
            ..CompanyProfile::bare(Symbol::parse("AAPL").expect("symbol"))
        }
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(16_425_933), "16,425,933");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn whole_prices_keep_one_decimal() {
        assert_eq!(price(Some(100.0)), "100.0");
        assert_eq!(price(Some(189.84)), "189.84");
        assert_eq!(price(None), "N/A");
    }

    #[test]
    fn officers_without_pay_show_na() {
        let line = officer_line(&Officer::new("Jane Roe", None, None));
        assert_eq!(line, "N/A: Jane Roe (Total Compensation: N/A)");

        let line = officer_line(&Officer::new(
            "Tim Cook",
            Some(String::from("CEO")),
            Some(16_425_933),
        ));
        assert_eq!(line, "CEO: Tim Cook (Total Compensation: $16,425,933)");
    }

    #[test]
    fn chart_section_lists_market_fields_and_signal() {
        let report = Report::View(ViewReport {
            profile: apple(),
            news: None,
            chart: Some(ChartSection {
                previous_close: Some(189.84),
                bid: Some(189.5),
                ask: None,
                dividend_yield: Some(0.0052),
                analysis: ChartAnalysis::Indicator(IndicatorResult {
                    window_size: 50,
                    moving_average: Some(100.1),
                    last_close: Some(105.0),
                    signal: Signal::Above,
                }),
            }),
        });

        let output = text(&report);

        assert!(output.contains("Apple Inc. (AAPL)"));
        assert!(output.contains("Sector: Technology, Industry: N/A"));
        assert!(output.contains("Previous Close: 189.84"));
        assert!(output.contains("Bid/Ask: 189.5 / N/A"));
        assert!(output.contains("Dividend Yields: 0.52%"));
        assert!(output.contains("50-Day Moving Average (MA): 100.10"));
        assert!(output.contains("ABOVE 50-day MA"));
    }

    #[test]
    fn empty_officer_list_warns() {
        let report = Report::View(ViewReport {
            profile: apple(),
            news: Some(NewsSection {
                officers: Vec::new(),
                ceo: None,
                headlines: Vec::new(),
            }),
            chart: None,
        });

        assert!(text(&report).contains("No corporate officer information available."));
    }

    #[test]
    fn unknown_command_is_followed_by_usage() {
        let output = text(&Report::UnknownCommand {
            command: String::from("/foo"),
        });
        assert!(output.starts_with("Unknown command: /foo\n"));
        assert!(output.contains("Usage: stockscope"));
    }

    #[test]
    fn gov_documents_carry_their_link() {
        let mut rng = StdRng::seed_from_u64(4);

        let speaker = generate_today_speaker(&mut rng);
        let output = text(&Report::Gov(speaker.clone()));
        assert!(output.contains(&speaker.deep_link.to_string()));
        assert!(output.contains("Today's Fed Speaker"));

        let past = generate_past_fed_analysis(&mut rng);
        let output = text(&Report::Gov(past.clone()));
        assert!(output.ends_with(&format!(
            "Deep Link to Full Historical Analysis (Blockchain Engine): {}\n",
            past.deep_link
        )));
    }

    #[test]
    fn json_output_is_tagged_by_report_kind() {
        let mut buffer = Vec::new();
        render(
            &mut buffer,
            &Report::NotFound {
                symbol: String::from("UNKNOWNXYZ"),
            },
            OutputFormat::Json,
            Style::plain(),
        )
        .expect("renders");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("json");
        assert_eq!(value["report"], "not_found");
        assert_eq!(value["data"]["symbol"], "UNKNOWNXYZ");
    }
}
