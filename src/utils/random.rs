//! Random alias generation.

use rand::Rng;

/// Alphabet for generated aliases: upper, lower, digits, underscore.
const ALIAS_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

/// Generates fixed-length random aliases.
///
/// Constructed explicitly at startup and shared through
/// [`crate::state::AppState`] rather than living behind a process-wide
/// global. Each call draws from the OS-seeded thread-local generator.
///
/// Collisions with existing aliases are not retried here or by callers; a
/// colliding generated alias simply fails the save.
#[derive(Debug, Clone)]
pub struct AliasGenerator {
    length: usize,
}

impl AliasGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Produces a new random alias of the configured length.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALIAS_CHARS[rng.random_range(0..ALIAS_CHARS.len())] as char)
            .collect()
    }
}
