//! Session orchestration: the public select/confirm surface.
//!
//! `ChessSession` composes the grid, selection tracker, move resolver, and
//! turn controller, owns the observer list, and hands turns to automated
//! players. All operations run synchronously to completion; a confirm that
//! begins is carried through every chained automated turn before returning.

use std::collections::BTreeMap;

use crate::board::board_grid::BoardGrid;
use crate::board::cell::PlayerId;
use crate::board::grid_location::GridCoord;
use crate::engine::engine_errors::EngineError;
use crate::engine::game_options::GameOptions;
use crate::engine::move_resolver::{confirm_pending, MoveOutcome};
use crate::engine::observers::{BoardObserver, BoardSnapshot};
use crate::engine::selection::SelectionTracker;
use crate::engine::turn_controller::TurnController;
use crate::movegen::move_provider::MoveProvider;
use crate::movegen::piece_moves::StandardMoveProvider;
use crate::policies::policy_trait::{build_policy, TurnPolicy};
use crate::roster::player::{Player, PlayerKind};
use crate::roster::starting_layout::standard_player;
use crate::utils::game_log::GameLog;

pub struct ChessSession {
    options: GameOptions,
    players: Vec<Player>,
    turn: TurnController,
    tracker: SelectionTracker,
    grid: BoardGrid,
    provider: Box<dyn MoveProvider>,
    policies: BTreeMap<PlayerId, Box<dyn TurnPolicy>>,
    observers: Vec<Box<dyn BoardObserver>>,
    log: GameLog,
}

impl ChessSession {
    /// Start a session from the caller-supplied first player (id 0). The
    /// second player is built from the `opponent` option with the standard
    /// roster; an automated opponent gets its policy from `difficulty`.
    pub fn new(options: GameOptions, player_one: Player) -> Self {
        let opponent = standard_player(1, options.opponent_kind());
        Self::with_players(options, vec![player_one, opponent])
    }

    /// Start a session over an explicit player list. Every automated player
    /// receives a policy built from the difficulty option.
    pub fn with_players(options: GameOptions, players: Vec<Player>) -> Self {
        let mut policies: BTreeMap<PlayerId, Box<dyn TurnPolicy>> = BTreeMap::new();
        for player in &players {
            if player.kind() == PlayerKind::Automated {
                policies.insert(player.id(), build_policy(options.difficulty()));
            }
        }

        let turn = TurnController::new(players.len());
        let log = GameLog::new(options.opponent(), options.difficulty());
        let mut session = ChessSession {
            options,
            players,
            turn,
            tracker: SelectionTracker::new(),
            grid: BoardGrid::new(),
            provider: Box::new(StandardMoveProvider),
            policies,
            observers: Vec::new(),
            log,
        };
        session.grid.regenerate(&session.players);
        session
    }

    /// Swap the move-provider collaborator.
    pub fn with_provider(mut self, provider: Box<dyn MoveProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Replace the decision policy for one automated player.
    pub fn set_policy(&mut self, player: PlayerId, policy: Box<dyn TurnPolicy>) {
        self.policies.insert(player, policy);
    }

    pub fn add_observer(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active()
    }

    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    pub fn board(&self) -> &BoardGrid {
        &self.grid
    }

    #[inline]
    pub fn selection(&self) -> &SelectionTracker {
        &self.tracker
    }

    #[inline]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    #[inline]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Resolve one cell click for the active player, then re-render and
    /// notify observers.
    pub fn select(&mut self, at: GridCoord) -> Result<(), EngineError> {
        self.tracker.on_cell_clicked(
            at,
            &self.grid,
            &self.players,
            self.turn.active(),
            self.provider.as_ref(),
        )?;
        self.render_and_notify();
        Ok(())
    }

    /// Commit the pending target for the active human player.
    ///
    /// A confirm with nothing pending, or while an automated player is
    /// active, is a no-op. A committed move rotates the turn and then plays
    /// out every consecutive automated turn before returning.
    pub fn confirm(&mut self) -> Result<MoveOutcome, EngineError> {
        if self.players[self.turn.active()].kind() != PlayerKind::Human {
            return Ok(MoveOutcome::NoOp);
        }
        let outcome = self.commit_active_move()?;
        if outcome.committed().is_some() {
            self.run_automated_turns()?;
        }
        Ok(outcome)
    }

    fn commit_active_move(&mut self) -> Result<MoveOutcome, EngineError> {
        let active = self.turn.active();
        let outcome = confirm_pending(&self.tracker, &self.grid, &mut self.players, active)?;
        if let Some(committed) = outcome.committed() {
            self.log.record(committed);
            self.turn.advance(&mut self.tracker);
            self.render_and_notify();
        }
        Ok(outcome)
    }

    /// Hand-off loop: while the active player is automated, ask its policy
    /// for a move and drive it through the same select/commit sequence a
    /// click would. A policy with no move, or a move that fails click
    /// resolution, ends the loop without committing.
    fn run_automated_turns(&mut self) -> Result<(), EngineError> {
        while self.players[self.turn.active()].kind() == PlayerKind::Automated {
            let active = self.turn.active();
            let Some(mut policy) = self.policies.remove(&active) else {
                break;
            };
            let decision = policy.choose_move(&self.players, active, self.provider.as_ref());
            self.policies.insert(active, policy);

            let Some(chosen) = decision? else {
                break;
            };
            self.select(chosen.from)?;
            self.select(chosen.to)?;
            if self.tracker.pending_target().is_none() {
                break;
            }
            self.commit_active_move()?;
        }
        Ok(())
    }

    fn render_and_notify(&mut self) {
        self.grid.regenerate(&self.players);
        self.grid.mark_special_cells(
            self.tracker.selection(),
            self.tracker.destinations(),
            self.tracker.pending_target(),
        );
        let snapshot = BoardSnapshot {
            cells: self.grid.rows(),
            active_player: self.turn.active(),
        };
        for observer in &mut self.observers {
            observer.board_updated(&snapshot);
        }
    }
}
