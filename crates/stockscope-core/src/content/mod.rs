//! # Simulated Content
//!
//! Stateless samplers that assemble plausible but explicitly non-factual
//! market headlines and Federal Reserve event text.
//!
//! Every generator takes the random source as its first argument, so callers
//! decide between `rand::thread_rng()` and a seeded `StdRng`:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use stockscope_core::content::{generate_headline, generate_past_fed_analysis};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let headline = generate_headline(&mut rng, "AAPL", Some("Tim Cook"));
//! assert!(headline.text.contains("AAPL"));
//!
//! let a = generate_past_fed_analysis(&mut rng);
//! let b = generate_past_fed_analysis(&mut rng);
//! assert_eq!(a.body, b.body);
//! ```
//!
//! | Generator | Content | Stable across calls |
//! |-----------|---------|---------------------|
//! | [`generate_headline`] | Ticker headline | no |
//! | [`generate_today_speaker`] | Fed speaker today | no |
//! | [`generate_past_fed_analysis`] | Rate-cut history | body only |
//! | [`generate_future_fed_calendar`] | FOMC schedule | body only |

mod fed;
mod headline;
pub mod names;
pub mod token;

pub use fed::{
    generate_future_fed_calendar, generate_past_fed_analysis, generate_today_speaker,
    GovEventDoc, GovEventKind, SIMULATION_DISCLAIMER, SPEAKER_TOPICS,
};
pub use headline::{
    generate_daily_headlines, generate_headline, GeneratedHeadline, ACTIONS,
    DAILY_HEADLINE_COUNT, SOURCES, THEMES,
};
pub use token::{token_urlsafe, DeepLink};
