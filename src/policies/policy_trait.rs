//! Decision-policy abstraction for automated players.
//!
//! Defines the common move-choice interface so different strategies can be
//! selected at runtime behind a single trait, keyed by the session's
//! difficulty setting.

use crate::board::cell::{PieceId, PlayerId};
use crate::board::grid_location::GridCoord;
use crate::movegen::move_provider::{MoveGenResult, MoveProvider};
use crate::policies::policy_greedy::GreedyPolicy;
use crate::policies::policy_random::RandomPolicy;
use crate::roster::player::Player;

/// A policy's chosen move: which piece to pick up and where to put it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub piece_id: PieceId,
    pub from: GridCoord,
    pub to: GridCoord,
}

pub trait TurnPolicy {
    fn name(&self) -> &str;

    /// Pick a move for the active player, or `None` when no piece has any
    /// destination left.
    fn choose_move(
        &mut self,
        players: &[Player],
        active_player: PlayerId,
        provider: &dyn MoveProvider,
    ) -> MoveGenResult<Option<ChosenMove>>;
}

/// Map the opaque difficulty string onto a policy implementation.
///
/// Difficulty `2` and above selects the capture-preferring greedy policy;
/// everything else (including unparseable strings) falls back to uniform
/// random.
pub fn build_policy(difficulty: &str) -> Box<dyn TurnPolicy> {
    match difficulty.trim().parse::<u8>() {
        Ok(level) if level >= 2 => Box::new(GreedyPolicy::new()),
        _ => Box::new(RandomPolicy::new()),
    }
}

/// Every (piece, destination) pair the active player could play, in id
/// order. Shared by the concrete policies.
pub(crate) fn enumerate_choices(
    players: &[Player],
    active_player: PlayerId,
    provider: &dyn MoveProvider,
) -> MoveGenResult<Vec<ChosenMove>> {
    let Some(player) = players.get(active_player) else {
        return Ok(Vec::new());
    };

    let mut choices = Vec::new();
    for piece in player.alive_pieces() {
        for to in provider.moves_for(players, active_player, piece.id())? {
            choices.push(ChosenMove {
                piece_id: piece.id(),
                from: piece.position(),
                to,
            });
        }
    }
    Ok(choices)
}
