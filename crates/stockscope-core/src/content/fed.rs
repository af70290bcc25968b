use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::names;
use super::token::{
    DeepLink, DEEP_LINK_TOKEN_BYTES, FED_EVENT_LINK_BASE, FUTURE_CALENDAR_LINK_BASE,
    PAST_POLICY_LINK_BASE,
};

pub const SPEAKER_TOPICS: &[&str] = &[
    "discussing the impact of current inflation rates",
    "holding a Q&A on employment data",
    "speaking on assessing financial system resilience",
    "giving remarks on long-term monetary policy",
];

const SPEAKER_MINUTES: &[&str] = &["00", "15", "30", "45"];

pub const SIMULATION_DISCLAIMER: &str =
    "Note: This information is simulated to represent a successful feed retrieval.";

const PAST_ANALYSIS_BODY: &str = "\
In previous years, what actions did the Fed take for rate cuts? (and jobs, employment, market numbers, etc.)

Historically, the Federal Reserve has used rate cuts for three main reasons: to normalize rates after a period of increases, to counter a recession, or to respond to a financial crisis. Each situation has produced different impacts on employment and market numbers.

Rate cuts during crises:
2008 Financial Crisis: The Fed slashed rates from 5.25% in September 2007 to near zero by December 2008. It also implemented quantitative easing (QE), buying mortgage-backed securities and other assets to inject liquidity.
Impact on jobs: Unemployment soared, peaking at 10% in October 2009. The economy experienced a severe recession.
Impact on markets: Initially, markets plummeted due to the severity of the crisis. Once confidence returned and liquidity improved, the stock market began a strong recovery, with the S&P 500 more than doubling from 2009 to 2015.";

const FUTURE_CALENDAR_BODY: &str = "\
In future years, what is the Feds calendar for speakers?

The Federal Reserve typically announces its official speaker and event calendars for future years well in advance, though specific details may be added or adjusted closer to the date. The Federal Reserve Board website is the authoritative source for the most up-to-date information.

Federal Open Market Committee (FOMC) Meeting Schedules
The FOMC meeting dates, which involve statements and press conferences by the Fed Chair, are a major part of the public schedule and are published for several years in advance.

2026 FOMC Meeting Schedule
January 27–28
March 17–18*
April 28–29
June 16–17*";

/// Which government-news view produced a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovEventKind {
    TodaySpeaker,
    PastAnalysis,
    FutureCalendar,
}

impl GovEventKind {
    pub const fn link_label(self) -> &'static str {
        match self {
            Self::TodaySpeaker => "Deep Link",
            Self::PastAnalysis => "Deep Link to Full Historical Analysis (Blockchain Engine)",
            Self::FutureCalendar => "Deep Link to Full Calendar (Blockchain Engine)",
        }
    }
}

/// Simulated Federal Reserve document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovEventDoc {
    pub kind: GovEventKind,
    pub body: String,
    pub deep_link: DeepLink,
}

/// Clock time `HH:MM p.m. EST` with HH in 9..=17 and quarter-hour minutes.
fn speaker_time<R: Rng + ?Sized>(rng: &mut R) -> String {
    let hour: u8 = rng.gen_range(9..=17);
    let minute = SPEAKER_MINUTES.choose(rng).copied().unwrap_or("00");
    format!("{hour:02}:{minute} p.m. EST")
}

/// A governor speaking somewhere today. Every field is randomized.
pub fn generate_today_speaker<R: Rng + ?Sized>(rng: &mut R) -> GovEventDoc {
    let governor = names::full_name(rng);
    let topic = SPEAKER_TOPICS.choose(rng).copied().unwrap_or_default();
    let time = speaker_time(rng);
    let location = names::city(rng);

    GovEventDoc {
        kind: GovEventKind::TodaySpeaker,
        body: format!(
            "{time}: Governor {governor} is {topic} in {location}.\n{SIMULATION_DISCLAIMER}"
        ),
        deep_link: DeepLink::generate(rng, FED_EVENT_LINK_BASE, DEEP_LINK_TOKEN_BYTES),
    }
}

/// Fixed rate-cut history; only the deep link varies between calls.
pub fn generate_past_fed_analysis<R: Rng + ?Sized>(rng: &mut R) -> GovEventDoc {
    GovEventDoc {
        kind: GovEventKind::PastAnalysis,
        body: String::from(PAST_ANALYSIS_BODY),
        deep_link: DeepLink::generate(rng, PAST_POLICY_LINK_BASE, DEEP_LINK_TOKEN_BYTES),
    }
}

/// Fixed FOMC meeting schedule; only the deep link varies between calls.
pub fn generate_future_fed_calendar<R: Rng + ?Sized>(rng: &mut R) -> GovEventDoc {
    GovEventDoc {
        kind: GovEventKind::FutureCalendar,
        body: String::from(FUTURE_CALENDAR_BODY),
        deep_link: DeepLink::generate(rng, FUTURE_CALENDAR_LINK_BASE, DEEP_LINK_TOKEN_BYTES),
    }
}
