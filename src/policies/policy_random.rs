//! Difficulty-1 random-move policy.
//!
//! Selects uniformly from the active player's available (piece, destination)
//! pairs. Primarily used for low-strength opponents and integration testing.

use rand::prelude::IndexedRandom;

use crate::board::cell::PlayerId;
use crate::movegen::move_provider::{MoveGenResult, MoveProvider};
use crate::policies::policy_trait::{enumerate_choices, ChosenMove, TurnPolicy};
use crate::roster::player::Player;

pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        RandomPolicy::new()
    }
}

impl TurnPolicy for RandomPolicy {
    fn name(&self) -> &str {
        "uniform-random"
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

        let mut rng = rand::rng();
        Ok(choices.as_slice().choose(&mut rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPolicy;
    use crate::movegen::piece_moves::StandardMoveProvider;
    use crate::policies::policy_trait::{enumerate_choices, TurnPolicy};
    use crate::roster::player::{Player, PlayerKind};
    use crate::roster::starting_layout::standard_player;

    #[test]
    fn the_chosen_move_is_always_one_of_the_enumerated_choices() {
        let players = vec![
            standard_player(0, PlayerKind::Human),
            standard_player(1, PlayerKind::Automated),
        ];
        let provider = StandardMoveProvider;
        let legal = enumerate_choices(&players, 1, &provider).expect("enumeration should succeed");

        let mut policy = RandomPolicy::new();
        for _ in 0..8 {
            let chosen = policy
                .choose_move(&players, 1, &provider)
                .expect("choice should succeed")
                .expect("the starting position has moves");
            assert!(legal.contains(&chosen));
        }
    }

    #[test]
    fn an_empty_roster_yields_no_move() {
        let players = vec![
            Player::new(0, PlayerKind::Human),
            Player::new(1, PlayerKind::Automated),
        ];
        let mut policy = RandomPolicy::new();
        let chosen = policy
            .choose_move(&players, 1, &StandardMoveProvider)
            .expect("choice should succeed");
        assert!(chosen.is_none());
    }
}
