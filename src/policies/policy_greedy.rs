//! Difficulty-2 capture-preferring policy.
//!
//! Takes the highest-value capture on offer; with no capture available it
//! plays a uniformly random quiet move.

use rand::prelude::IndexedRandom;

use crate::board::cell::{PieceKind, PlayerId};
use crate::movegen::move_provider::{MoveGenResult, MoveProvider};
use crate::policies::policy_trait::{enumerate_choices, ChosenMove, TurnPolicy};
use crate::roster::player::Player;

fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Value of the enemy piece standing on a destination, if any.
fn capture_value(players: &[Player], active_player: PlayerId, choice: &ChosenMove) -> i32 {
    players
        .iter()
        .filter(|player| player.id() != active_player)
        .flat_map(|player| player.alive_pieces())
        .find(|piece| piece.position() == choice.to)
        .map(|piece| piece_value(piece.kind()))
        .unwrap_or(0)
}

pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        GreedyPolicy
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        GreedyPolicy::new()
    }
}

impl TurnPolicy for GreedyPolicy {
    fn name(&self) -> &str {
        "greedy-capture"
    }

    fn choose_move(
        &mut self,
        players: &[Player],
        active_player: PlayerId,
        provider: &dyn MoveProvider,
    ) -> MoveGenResult<Option<ChosenMove>> {
        let choices = enumerate_choices(players, active_player, provider)?;
        if choices.is_empty() {
            return Ok(None);
        }

        let best_capture = choices
            .iter()
            .map(|choice| (capture_value(players, active_player, choice), choice))
            .filter(|(value, _)| *value > 0)
            .max_by_key(|(value, _)| *value)
            .map(|(_, choice)| *choice);
        if best_capture.is_some() {
            return Ok(best_capture);
        }

        let mut rng = rand::rng();
        Ok(choices.as_slice().choose(&mut rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyPolicy;
    use crate::board::cell::PieceKind;
    use crate::movegen::piece_moves::StandardMoveProvider;
    use crate::policies::policy_trait::TurnPolicy;
    use crate::roster::piece::Piece;
    use crate::roster::player::{Player, PlayerKind};

    #[test]
    fn the_highest_value_capture_wins() {
        // Player 1's rook can take either a pawn or the queen.
        let mut bottom = Player::new(0, PlayerKind::Human);
        bottom.add_piece(Piece::new(0, PieceKind::Pawn, 0, (4, 0)));
        bottom.add_piece(Piece::new(0, PieceKind::Queen, 11, (4, 7)));
        let mut top = Player::new(1, PlayerKind::Automated);
        top.add_piece(Piece::new(1, PieceKind::Rook, 8, (4, 3)));
        let players = vec![bottom, top];

        let mut policy = GreedyPolicy::new();
        let chosen = policy
            .choose_move(&players, 1, &StandardMoveProvider)
            .expect("choice should succeed")
            .expect("a capture is available");
        assert_eq!(chosen.to, (4, 7));
    }

    #[test]
    fn quiet_positions_fall_back_to_some_legal_move() {
        let mut top = Player::new(1, PlayerKind::Automated);
        top.add_piece(Piece::new(1, PieceKind::Knight, 9, (0, 1)));
        let players = vec![Player::new(0, PlayerKind::Human), top];

        let mut policy = GreedyPolicy::new();
        let chosen = policy
            .choose_move(&players, 1, &StandardMoveProvider)
            .expect("choice should succeed")
            .expect("the knight has moves");
        assert_eq!(chosen.piece_id, 9);
    }
}
