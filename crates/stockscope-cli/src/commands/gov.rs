use rand::Rng;
use stockscope_core::content::{
    generate_future_fed_calendar, generate_past_fed_analysis, generate_today_speaker, GovEventDoc,
};

use crate::cli::GovArgs;

/// `--past` and `--future` pick the static documents; otherwise today's speaker.
pub fn run<R: Rng + ?Sized>(args: &GovArgs, rng: &mut R) -> GovEventDoc {
    if args.past {
        generate_past_fed_analysis(rng)
    } else if args.future {
        generate_future_fed_calendar(rng)
    } else {
        generate_today_speaker(rng)
    }
}
