//! Committed-move transcript for session history interchange.
//!
//! Records one entry per committed move and renders a bracket-tagged header
//! block followed by the move lines, suitable for logs and post-game review.

use std::collections::BTreeMap;

use chrono::Local;

use crate::board::cell::PlayerId;
use crate::engine::move_resolver::CommittedMove;
use crate::utils::algebraic::coord_to_algebraic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedMove {
    pub ply: usize,
    pub player: PlayerId,
    /// Long-algebraic `{from}{to}` coordinates, e.g. `e1g1`.
    pub notation: String,
    pub capture: bool,
    pub castle: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GameLog {
    opponent: String,
    difficulty: String,
    entries: Vec<LoggedMove>,
}

impl GameLog {
    pub fn new(opponent: &str, difficulty: &str) -> Self {
        GameLog {
            opponent: opponent.to_owned(),
            difficulty: difficulty.to_owned(),
            entries: Vec::new(),
        }
    }

    /// Append one committed move. Coordinates that fail to convert are
    /// recorded with a placeholder rather than dropping the ply.
    pub fn record(&mut self, committed: &CommittedMove) {
        let from = coord_to_algebraic(committed.from).unwrap_or_else(|_| "??".to_owned());
        let to = coord_to_algebraic(committed.to).unwrap_or_else(|_| "??".to_owned());
        self.entries.push(LoggedMove {
            ply: self.entries.len() + 1,
            player: committed.player,
            notation: format!("{from}{to}"),
            capture: committed.capture.is_some(),
            castle: committed.castle.is_some(),
        });
    }

    #[inline]
    pub fn entries(&self) -> &[LoggedMove] {
        &self.entries
    }

    /// Render the header block and one line per ply.
    pub fn transcript(&self) -> String {
        let mut headers = BTreeMap::<String, String>::new();
        headers.insert("Event".to_owned(), "Parlor Chess Session".to_owned());
        headers.insert("Site".to_owned(), "Local".to_owned());
        headers.insert(
            "Date".to_owned(),
            Local::now().format("%Y.%m.%d").to_string(),
        );
        headers.insert("Opponent".to_owned(), self.opponent.clone());
        headers.insert("Difficulty".to_owned(), self.difficulty.clone());
        headers.insert("Result".to_owned(), "*".to_owned());

        let mut out = String::new();
        for (key, value) in &headers {
            out.push_str(&format!("[{key} \"{value}\"]\n"));
        }
        out.push('\n');

        for entry in &self.entries {
            let mut line = format!("{}. p{} {}", entry.ply, entry.player, entry.notation);
            if entry.capture {
                line.push_str(" x");
            }
            if entry.castle {
                line.push_str(" (castle)");
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
