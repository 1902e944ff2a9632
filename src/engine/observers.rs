//! Render notifications for passive subscribers.
//!
//! The session publishes a read-only snapshot of the freshly regenerated,
//! annotated board after every render. Observers receive state; they cannot
//! reach back into the engine's mutation surface through the payload.

use crate::board::board_grid::BOARD_SIZE;
use crate::board::cell::{Cell, PlayerId};
use crate::board::cell_codec::encode_cell;

/// Read-only view of one rendered board state.
#[derive(Debug, Clone, Copy)]
pub struct BoardSnapshot<'a> {
    pub cells: &'a [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub active_player: PlayerId,
}

impl BoardSnapshot<'_> {
    /// The board as compact cell tokens, for observers that serialize or
    /// diff state instead of reading the tagged cells.
    pub fn encoded_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(encode_cell).collect())
            .collect()
    }
}

/// A passive recipient of board updates.
pub trait BoardObserver {
    fn board_updated(&mut self, snapshot: &BoardSnapshot<'_>);
}
