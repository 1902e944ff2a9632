//! Click-to-intent resolution: the engine's only input surface.
//!
//! Tracks at most one selected cell, at most one pending target, and the
//! candidate destinations for the selected piece. Every click runs through
//! [`SelectionTracker::on_cell_clicked`] before the next render pass.

use crate::board::board_grid::BoardGrid;
use crate::board::cell::{Annotation, CellContent, PlayerId};
use crate::board::grid_location::{in_bounds, GridCoord};
use crate::movegen::move_provider::{MoveGenResult, MoveProvider};
use crate::roster::player::Player;

#[derive(Debug, Default)]
pub struct SelectionTracker {
    selection: Option<GridCoord>,
    pending_target: Option<GridCoord>,
    destinations: Vec<GridCoord>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        SelectionTracker::default()
    }

    #[inline]
    pub fn selection(&self) -> Option<GridCoord> {
        self.selection
    }

    #[inline]
    pub fn pending_target(&self) -> Option<GridCoord> {
        self.pending_target
    }

    #[inline]
    pub fn destinations(&self) -> &[GridCoord] {
        &self.destinations
    }

    /// Drop all transient state. Runs on every turn rotation so a fresh turn
    /// starts with no residual selection.
    pub fn reset(&mut self) {
        self.selection = None;
        self.pending_target = None;
        self.destinations.clear();
    }

    /// Resolve one cell click against the currently rendered grid.
    ///
    /// A click on a destination-annotated cell confirms intent: only the
    /// pending target changes. Any other click re-opens selection: the active
    /// player's own piece becomes the selection and its destinations are
    /// recomputed through the provider; empty or enemy cells silently clear
    /// the selection instead.
    pub fn on_cell_clicked(
        &mut self,
        at: GridCoord,
        grid: &BoardGrid,
        players: &[Player],
        active_player: PlayerId,
        provider: &dyn MoveProvider,
    ) -> MoveGenResult<()> {
        self.pending_target = None;
        if !in_bounds(at) {
            return Ok(());
        }

        let cell = grid.cell(at);
        match cell.annotation {
            Some(Annotation::MoveTarget) | Some(Annotation::CaptureTarget) => {
                // A target is being confirmed, not a new piece chosen.
                self.pending_target = Some(at);
            }
            _ => {
                self.selection = None;
                self.destinations.clear();
                if let CellContent::Occupied(tag) = cell.content {
                    if tag.owner == active_player {
                        self.selection = Some(at);
                        self.destinations =
                            provider.moves_for(players, active_player, tag.piece_id)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionTracker;
    use crate::board::board_grid::BoardGrid;
    use crate::board::cell::{PieceId, PieceKind, PlayerId};
    use crate::board::grid_location::GridCoord;
    use crate::movegen::move_provider::{MoveGenResult, MoveProvider};
    use crate::roster::piece::Piece;
    use crate::roster::player::{Player, PlayerKind};

    struct FixedProvider(Vec<GridCoord>);

    impl MoveProvider for FixedProvider {
        fn moves_for(
            &self,
            _players: &[Player],
            _player_id: PlayerId,
            _piece_id: PieceId,
        ) -> MoveGenResult<Vec<GridCoord>> {
            Ok(self.0.clone())
        }
    }

    fn small_game() -> (Vec<Player>, BoardGrid) {
        let mut bottom = Player::new(0, PlayerKind::Human);
        bottom.add_piece(Piece::new(0, PieceKind::Rook, 8, (7, 0)));
        let mut top = Player::new(1, PlayerKind::Human);
        top.add_piece(Piece::new(1, PieceKind::Pawn, 0, (5, 0)));
        let players = vec![bottom, top];
        let mut grid = BoardGrid::new();
        grid.regenerate(&players);
        (players, grid)
    }

    #[test]
    fn selecting_an_own_piece_computes_destinations() {
        let (players, grid) = small_game();
        let provider = FixedProvider(vec![(6, 0), (5, 0)]);
        let mut tracker = SelectionTracker::new();

        tracker
            .on_cell_clicked((7, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");

        assert_eq!(tracker.selection(), Some((7, 0)));
        assert_eq!(tracker.destinations(), &[(6, 0), (5, 0)]);
        assert_eq!(tracker.pending_target(), None);
    }

    #[test]
    fn empty_and_enemy_cells_silently_clear_the_selection() {
        let (players, grid) = small_game();
        let provider = FixedProvider(vec![(6, 0)]);
        let mut tracker = SelectionTracker::new();

        tracker
            .on_cell_clicked((7, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");
        tracker
            .on_cell_clicked((3, 3), &grid, &players, 0, &provider)
            .expect("click should resolve");
        assert_eq!(tracker.selection(), None);
        assert!(tracker.destinations().is_empty());

        tracker
            .on_cell_clicked((5, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");
        assert_eq!(tracker.selection(), None);
        assert!(tracker.destinations().is_empty());
    }

    #[test]
    fn clicking_an_annotated_target_sets_only_the_pending_target() {
        let (players, mut grid) = small_game();
        let provider = FixedProvider(vec![(6, 0), (5, 0)]);
        let mut tracker = SelectionTracker::new();

        tracker
            .on_cell_clicked((7, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");
        grid.mark_special_cells(
            tracker.selection(),
            tracker.destinations(),
            tracker.pending_target(),
        );

        tracker
            .on_cell_clicked((5, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");

        assert_eq!(tracker.pending_target(), Some((5, 0)));
        assert_eq!(tracker.selection(), Some((7, 0)));
        assert_eq!(tracker.destinations(), &[(6, 0), (5, 0)]);
    }

    #[test]
    fn a_new_click_always_drops_the_pending_target() {
        let (players, mut grid) = small_game();
        let provider = FixedProvider(vec![(6, 0)]);
        let mut tracker = SelectionTracker::new();

        tracker
            .on_cell_clicked((7, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");
        grid.mark_special_cells(
            tracker.selection(),
            tracker.destinations(),
            tracker.pending_target(),
        );
        tracker
            .on_cell_clicked((6, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");
        assert_eq!(tracker.pending_target(), Some((6, 0)));

        tracker
            .on_cell_clicked((7, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");
        assert_eq!(tracker.pending_target(), None);
        assert_eq!(tracker.selection(), Some((7, 0)));
    }

    #[test]
    fn out_of_bounds_clicks_change_nothing_but_the_pending_target() {
        let (players, grid) = small_game();
        let provider = FixedProvider(vec![(6, 0)]);
        let mut tracker = SelectionTracker::new();

        tracker
            .on_cell_clicked((7, 0), &grid, &players, 0, &provider)
            .expect("click should resolve");
        tracker
            .on_cell_clicked((9, 9), &grid, &players, 0, &provider)
            .expect("click should resolve");
        assert_eq!(tracker.selection(), Some((7, 0)));
    }
}
