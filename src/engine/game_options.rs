//! Session configuration consumed at construction.
//!
//! Options arrive as a string key/value mapping. Two keys matter here:
//! `opponent` decides whether the second player is human or automated, and
//! `difficulty` is an opaque string handed to the policy factory.

use std::collections::BTreeMap;

use crate::roster::player::PlayerKind;

const DEFAULT_OPPONENT: &str = "cpu";
const DEFAULT_DIFFICULTY: &str = "1";

#[derive(Debug, Clone)]
pub struct GameOptions {
    opponent: String,
    difficulty: String,
}

impl GameOptions {
    /// Build from a raw option mapping, falling back to defaults for
    /// missing keys.
    pub fn from_pairs(pairs: &BTreeMap<String, String>) -> Self {
        GameOptions {
            opponent: pairs
                .get("opponent")
                .cloned()
                .unwrap_or_else(|| DEFAULT_OPPONENT.to_owned()),
            difficulty: pairs
                .get("difficulty")
                .cloned()
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_owned()),
        }
    }

    /// Convenience constructor for programmatic setup.
    pub fn new(opponent: &str, difficulty: &str) -> Self {
        GameOptions {
            opponent: opponent.to_owned(),
            difficulty: difficulty.to_owned(),
        }
    }

    /// Kind of the constructed second player. Anything other than the
    /// literal `human` means an automated opponent.
    pub fn opponent_kind(&self) -> PlayerKind {
        if self.opponent == "human" {
            PlayerKind::Human
        } else {
            PlayerKind::Automated
        }
    }

    #[inline]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[inline]
    pub fn opponent(&self) -> &str {
        &self.opponent
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions::new(DEFAULT_OPPONENT, DEFAULT_DIFFICULTY)
    }
}
