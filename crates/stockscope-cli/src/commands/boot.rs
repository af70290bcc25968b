use rand::Rng;
use serde::Serialize;
use stockscope_core::content::token::{SESSION_LINK_BASE, SESSION_TOKEN_BYTES};
use stockscope_core::content::DeepLink;

/// Result of the simulated exchange handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BootOutcome {
    Connected { session: DeepLink },
    Forbidden,
}

/// Coin flip between a live session link and a 403.
pub fn run<R: Rng + ?Sized>(rng: &mut R) -> BootOutcome {
    if rng.gen_bool(0.5) {
        BootOutcome::Connected {
            session: DeepLink::generate(rng, SESSION_LINK_BASE, SESSION_TOKEN_BYTES),
        }
    } else {
        BootOutcome::Forbidden
    }
}
