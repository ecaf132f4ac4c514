//! Response selection.
//!
//! Draws one reply uniformly at random from an intent's response list.  The
//! random source is injected so tests can pin the draw.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::catalog::Catalog;

/// Reply used when a tag is unknown or has no responses.
pub const DEFAULT_MISSING_RESPONSE: &str = "Sorry, I couldn't find a suitable response.";

/// Picks replies for accepted tags.
#[derive(Debug)]
pub struct Responder<R> {
    catalog: Arc<Catalog>,
    rng: R,
    missing_response: String,
}

impl<R: rand::Rng> Responder<R> {
    /// Create a responder drawing from `rng`.
    pub fn new(catalog: Arc<Catalog>, rng: R) -> Self {
        Self {
            catalog,
            rng,
            missing_response: DEFAULT_MISSING_RESPONSE.to_string(),
        }
    }

    /// Override the reply used for unknown tags and empty response lists.
    pub fn with_missing_response(mut self, text: impl Into<String>) -> Self {
        self.missing_response = text.into();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Draw a reply for `tag`.
    ///
    /// Never fails: an unknown tag or an intent without responses yields the
    /// missing-response text.
    pub fn respond(&mut self, tag: &str) -> String {
        let Some(intent) = self.catalog.get(tag) else {
            warn!(tag, "reply requested for unknown tag");
            return self.missing_response.clone();
        };

        match intent.responses.choose(&mut self.rng) {
            Some(reply) => reply.clone(),
            None => {
                warn!(tag, "intent has no responses");
                self.missing_response.clone()
            }
        }
    }
}

impl Responder<StdRng> {
    /// Create a responder seeded from operating-system entropy.
    pub fn from_entropy(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Intent;
    use rand::rngs::mock::StepRng;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                Intent::new("greeting", ["hello"], ["Hi!", "Hello!", "Hey there!"]),
                Intent::new("silent", ["shh"], Vec::<String>::new()),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn zero_rng_picks_first_response() {
        let mut responder = Responder::new(catalog(), StepRng::new(0, 0));
        for _ in 0..3 {
            assert_eq!(responder.respond("greeting"), "Hi!");
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = Responder::new(catalog(), StdRng::seed_from_u64(7));
        let mut b = Responder::new(catalog(), StdRng::seed_from_u64(7));
        let first: Vec<String> = (0..10).map(|_| a.respond("greeting")).collect();
        let second: Vec<String> = (0..10).map(|_| b.respond("greeting")).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn replies_come_from_the_intent() {
        let mut responder = Responder::from_entropy(catalog());
        let allowed = responder.catalog().get("greeting").unwrap().responses.clone();
        for _ in 0..20 {
            let reply = responder.respond("greeting");
            assert!(allowed.contains(&reply), "unexpected reply {reply}");
        }
    }

    #[test]
    fn unknown_tag_yields_missing_response() {
        let mut responder = Responder::new(catalog(), StepRng::new(0, 0));
        assert_eq!(responder.respond("weather"), DEFAULT_MISSING_RESPONSE);
    }

    #[test]
    fn empty_response_list_yields_missing_response() {
        let mut responder =
            Responder::new(catalog(), StepRng::new(0, 0)).with_missing_response("No answer.");
        assert_eq!(responder.respond("silent"), "No answer.");
    }
}
