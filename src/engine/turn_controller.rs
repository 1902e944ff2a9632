use crate::board::cell::PlayerId;
use crate::engine::selection::SelectionTracker;

/// Rotates the active player index after each committed move and resets the
/// transient selection state so the fresh turn starts clean.
#[derive(Debug, Clone, Copy)]
pub struct TurnController {
    active: PlayerId,
    player_count: usize,
}

impl TurnController {
    pub fn new(player_count: usize) -> Self {
        TurnController {
            active: 0,
            player_count,
        }
    }

    #[inline]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// Rotate to the next player and wipe residual selection state.
    pub fn advance(&mut self, tracker: &mut SelectionTracker) -> PlayerId {
        self.active = (self.active + 1) % self.player_count;
        tracker.reset();
        self.active
    }
}
