use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::parse::parse_lists;

/// Render a template using the thread-local random generator.
pub fn generate(source: &str) -> String {
    generate_with(source, &mut rand::rng())
}

/// Render a template, drawing options from `rng`.
///
/// Each list is drawn from exactly once, so every occurrence of the same
/// `[name]` in the body receives the same value. An empty list substitutes
/// the empty string. Placeholders naming no list are left as written.
pub fn generate_with<R: Rng + ?Sized>(source: &str, rng: &mut R) -> String {
    let parsed = parse_lists(source);
    let mut output = parsed.body;

    for list in &parsed.lists {
        let choice = list.options.choose(rng).map(String::as_str).unwrap_or_default();
        let placeholder = format!("[{}]", list.name);
        output = output.replace(&placeholder, choice);
    }

    output
}

/// Where option draws come from for a running server.
#[derive(Debug)]
pub enum RandomSource {
    /// Fresh entropy per call.
    Thread,
    /// Reproducible sequence from a fixed seed.
    Seeded(StdRng),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(StdRng::seed_from_u64(seed)),
            None => Self::Thread,
        }
    }

    pub fn generate(&mut self, source: &str) -> String {
        match self {
            Self::Thread => generate(source),
            Self::Seeded(rng) => generate_with(source, rng),
        }
    }
}
