use std::fmt::{Display, Formatter};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;
use serde::{Deserialize, Serialize};
use url::Url;

/// Entropy behind every content deep link.
pub const DEEP_LINK_TOKEN_BYTES: usize = 16;
/// Entropy behind simulated trading-session links.
pub const SESSION_TOKEN_BYTES: usize = 32;

pub const HEADLINE_LINK_BASE: &str = "https://stock0lyzer.io/deep/";
pub const FED_EVENT_LINK_BASE: &str = "https://statestreet.stock0lyzer.io/fed/";
pub const PAST_POLICY_LINK_BASE: &str = "https://statestreet.stock0lyzer.io/past-policy/";
pub const FUTURE_CALENDAR_LINK_BASE: &str = "https://statestreet.stock0lyzer.io/future-calendar/";
pub const SESSION_LINK_BASE: &str = "https://trade.stock0lyzer.io/session?token=";

/// Random URL-safe text: `nbytes` random bytes, base64url without padding.
///
/// 16 bytes encode to 22 characters, 32 bytes to 43.
pub fn token_urlsafe<R: Rng + ?Sized>(rng: &mut R, nbytes: usize) -> String {
    let mut bytes = vec![0_u8; nbytes];
    rng.fill(bytes.as_mut_slice());
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decorative link built from a fixed base and a fresh random token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeepLink {
    base: String,
    token: String,
}

impl DeepLink {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, base: &str, nbytes: usize) -> Self {
        Self {
            base: base.to_owned(),
            token: token_urlsafe(rng, nbytes),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }
}

impl Display for DeepLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, self.token)
    }
}

/// True when every character belongs to the base64url alphabet.
pub fn is_url_safe(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn token_length_reflects_entropy() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(token_urlsafe(&mut rng, DEEP_LINK_TOKEN_BYTES).len(), 22);
        assert_eq!(token_urlsafe(&mut rng, SESSION_TOKEN_BYTES).len(), 43);
    }

    #[test]
    fn tokens_are_url_safe_and_unique() {
        let mut rng = rand::thread_rng();
        let tokens: HashSet<String> = (0..5_000)
            .map(|_| token_urlsafe(&mut rng, DEEP_LINK_TOKEN_BYTES))
            .collect();

        assert_eq!(tokens.len(), 5_000);
        assert!(tokens.iter().all(|token| is_url_safe(token)));
    }

    #[test]
    fn decodes_back_to_requested_byte_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let token = token_urlsafe(&mut rng, DEEP_LINK_TOKEN_BYTES);
        let decoded = URL_SAFE_NO_PAD.decode(token).expect("valid base64url");
        assert_eq!(decoded.len(), DEEP_LINK_TOKEN_BYTES);
    }

    #[test]
    fn deep_link_parses_as_url_under_its_base() {
        let mut rng = StdRng::seed_from_u64(3);
        let link = DeepLink::generate(&mut rng, SESSION_LINK_BASE, SESSION_TOKEN_BYTES);
        let url = link.to_url().expect("valid url");

        assert_eq!(url.host_str(), Some("trade.stock0lyzer.io"));
        let token = url
            .query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned());
        assert_eq!(token.as_deref(), Some(link.token()));
    }
}
