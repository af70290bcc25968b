use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::names;
use super::token::{DeepLink, DEEP_LINK_TOKEN_BYTES, HEADLINE_LINK_BASE};

/// Headlines produced per "daily top headlines" request.
pub const DAILY_HEADLINE_COUNT: usize = 5;

pub const ACTIONS: &[&str] = &[
    "rises",
    "soars",
    "plunges",
    "sinks",
    "maintains dominance",
    "expands market share",
    "sheds weight",
    "eyes new acquisition",
    "reports record earnings",
    "beats expectations",
    "misses targets",
];

pub const THEMES: &[&str] = &[
    "AI Integration",
    "Cloud Services",
    "Consumer Spending Report",
    "Regulatory Scrutiny",
    "Dividend Increase",
    "Stock Split Rumors",
    "Global Supply Chain",
    "Next-Gen Product Launch",
    "Digital Transformation",
];

pub const SOURCES: &[&str] = &[
    "Reuters",
    "Bloomberg",
    "The Wall Street Journal",
    "Financial Times",
    "CNBC",
    "Zack's Research",
];

/// Simulated, non-factual market headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedHeadline {
    pub text: String,
    pub source_name: String,
    /// Executive chosen for this headline; only one template quotes it.
    pub executive: String,
    pub deep_link: DeepLink,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}

/// Assembles one headline for `ticker`.
///
/// A known executive is quoted half of the time; otherwise, or when none is
/// known, a synthetic name stands in.
pub fn generate_headline<R: Rng + ?Sized>(
    rng: &mut R,
    ticker: &str,
    known_executive: Option<&str>,
) -> GeneratedHeadline {
    let source_name = pick(rng, SOURCES);

    let executive = match known_executive {
        Some(name) if rng.gen_bool(0.5) => name.to_owned(),
        _ => names::full_name(rng),
    };

    let text = if rng.gen_bool(0.5) {
        format!(
            "({executive} / {source_name}) - {ticker} {} amid {}.",
            pick(rng, ACTIONS),
            pick(rng, THEMES)
        )
    } else {
        format!(
            "({source_name}) - {} drives {ticker} to {}.",
            pick(rng, THEMES),
            pick(rng, ACTIONS)
        )
    };

    GeneratedHeadline {
        text,
        source_name: source_name.to_owned(),
        executive,
        deep_link: DeepLink::generate(rng, HEADLINE_LINK_BASE, DEEP_LINK_TOKEN_BYTES),
    }
}

/// Exactly [`DAILY_HEADLINE_COUNT`] independent headlines; duplicates allowed.
pub fn generate_daily_headlines<R: Rng + ?Sized>(
    rng: &mut R,
    ticker: &str,
    known_executive: Option<&str>,
) -> Vec<GeneratedHeadline> {
    (0..DAILY_HEADLINE_COUNT)
        .map(|_| generate_headline(rng, ticker, known_executive))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::content::token::is_url_safe;

    const CEO: &str = "Mr. Timothy D. Cook";

    #[test]
    fn vocabulary_sizes_are_stable() {
        assert_eq!(ACTIONS.len(), 11);
        assert_eq!(THEMES.len(), 9);
        assert_eq!(SOURCES.len(), 6);
    }

    #[test]
    fn every_headline_follows_one_of_two_templates() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let headline = generate_headline(&mut rng, "AAPL", Some(CEO));
            assert!(SOURCES.contains(&headline.source_name.as_str()));

            let quoted = format!("({} / {}) - AAPL ", headline.executive, headline.source_name);
            let plain = format!("({}) - ", headline.source_name);
            if headline.text.starts_with(&quoted) {
                assert!(headline.text.contains(" amid "));
            } else {
                assert!(headline.text.starts_with(&plain), "{}", headline.text);
                assert!(headline.text.contains(" drives AAPL to "));
            }
            assert!(headline.text.ends_with('.'));
        }
    }

    #[test]
    fn both_templates_occur() {
        let mut rng = StdRng::seed_from_u64(5);
        let texts: Vec<String> = (0..200)
            .map(|_| generate_headline(&mut rng, "MSFT", None).text)
            .collect();
        assert!(texts.iter().any(|text| text.contains(" amid ")));
        assert!(texts.iter().any(|text| text.contains(" drives MSFT to ")));
    }

    #[test]
    fn known_executive_is_used_about_half_the_time() {
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 1_000;
        let used = (0..trials)
            .filter(|_| generate_headline(&mut rng, "AAPL", Some(CEO)).executive == CEO)
            .count();
        let share = used as f64 / trials as f64;
        assert!((0.42..=0.58).contains(&share), "share was {share}");
    }

    #[test]
    fn absent_executive_is_always_synthesized() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let headline = generate_headline(&mut rng, "AAPL", None);
            assert!(!headline.executive.is_empty());
            assert_ne!(headline.executive, CEO);
        }
    }

    #[test]
    fn daily_batch_has_five_distinct_links() {
        let mut rng = StdRng::seed_from_u64(77);
        let headlines = generate_daily_headlines(&mut rng, "AAPL", Some(CEO));
        assert_eq!(headlines.len(), DAILY_HEADLINE_COUNT);

        let tokens: HashSet<&str> = headlines
            .iter()
            .map(|headline| headline.deep_link.token())
            .collect();
        assert_eq!(tokens.len(), DAILY_HEADLINE_COUNT);
        for headline in &headlines {
            assert_eq!(headline.deep_link.base(), HEADLINE_LINK_BASE);
            assert!(is_url_safe(headline.deep_link.token()));
            assert!(headline.deep_link.to_url().is_ok());
        }
    }
}
