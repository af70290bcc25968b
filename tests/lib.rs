// Shared fixtures for the behavior tests
pub use rand::rngs::StdRng;
pub use rand::SeedableRng;
pub use stockscope_cli::cli::OutputFormat;
pub use stockscope_cli::output::style::Style;
pub use stockscope_cli::{dispatch, CommandInvocation, Report};
pub use stockscope_core::{CompanyProfile, Officer, StaticMarketData, Symbol};

pub fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("test symbol is valid")
}

pub fn apple_profile() -> CompanyProfile {
    CompanyProfile {
        long_name: Some(String::from("Apple Inc.")),
        sector: Some(String::from("Technology")),
        industry: Some(String::from("Consumer Electronics")),
        previous_close: Some(104.5),
        bid: Some(104.9),
        ask: Some(105.1),
        dividend_yield: Some(0.0044),
        officers: vec![
            Officer::new(
                "Mr. Timothy D. Cook",
                Some(String::from("CEO & Director")),
                Some(16_520_856),
            ),
            Officer::new("Ms. Katherine L. Adams", Some(String::from("General Counsel")), None),
        ],
        ..CompanyProfile::bare(symbol("AAPL"))
    }
}

/// 49 closes at 100 followed by one at 105.
pub fn rising_closes() -> Vec<f64> {
    let mut closes = vec![100.0; 49];
    closes.push(105.0);
    closes
}

pub async fn run(args: &[&str], source: &StaticMarketData, seed: u64) -> Report {
    let mut rng = StdRng::seed_from_u64(seed);
    dispatch(
        CommandInvocation::from_args(args.iter().copied()),
        source,
        &mut rng,
    )
    .await
}

pub fn render_plain(report: &Report) -> String {
    let mut buffer = Vec::new();
    stockscope_cli::output::render(&mut buffer, report, OutputFormat::Text, Style::plain())
        .expect("report renders");
    String::from_utf8(buffer).expect("output is utf8")
}
