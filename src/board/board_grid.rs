//! The 8x8 cell matrix and its regeneration/annotation passes.
//!
//! The grid is always a pure projection of the alive pieces plus current
//! selection state. It is rebuilt from scratch on every render pass, never
//! patched incrementally.

use crate::board::cell::{Annotation, Cell, PlayerId};
use crate::board::grid_location::{in_bounds, GridCoord};
use crate::roster::player::Player;

/// Rows/columns per side.
pub const BOARD_SIZE: usize = 8;

/// Fixed 8x8 matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardGrid {
    pub fn new() -> Self {
        BoardGrid {
            cells: [[Cell::empty(); BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Reset every cell to empty without placing pieces.
    pub fn clear(&mut self) {
        self.cells = [[Cell::empty(); BOARD_SIZE]; BOARD_SIZE];
    }

    /// Rebuild the grid from the alive pieces of every player.
    ///
    /// Placement order does not matter: no two alive pieces share a cell,
    /// an invariant the engine upholds upstream.
    pub fn regenerate(&mut self, players: &[Player]) {
        self.clear();
        for player in players {
            for piece in player.pieces().values() {
                if piece.is_alive() {
                    let (row, col) = piece.position();
                    self.cells[row as usize][col as usize] =
                        Cell::occupied(piece.owner(), piece.kind(), piece.id());
                }
            }
        }
    }

    /// Apply the transient annotation pass for one render.
    ///
    /// Order matters: the selected cell first, destination highlights second,
    /// and the pending target last so its marker wins on the chosen cell.
    /// Destinations on occupied cells read as capture targets, the rest as
    /// plain move targets.
    pub fn mark_special_cells(
        &mut self,
        selection: Option<GridCoord>,
        destinations: &[GridCoord],
        pending_target: Option<GridCoord>,
    ) {
        if let Some(selected) = selection {
            self.set_annotation(selected, Annotation::Selected);
            for destination in destinations {
                if *destination == selected {
                    continue;
                }
                let annotation = if self.cell(*destination).is_occupied() {
                    Annotation::CaptureTarget
                } else {
                    Annotation::MoveTarget
                };
                self.set_annotation(*destination, annotation);
            }
        }
        if let Some(target) = pending_target {
            self.set_annotation(target, Annotation::PendingTarget);
        }
    }

    /// The cell at a coordinate. Out-of-bounds coordinates read as empty.
    #[inline]
    pub fn cell(&self, at: GridCoord) -> Cell {
        if in_bounds(at) {
            self.cells[at.0 as usize][at.1 as usize]
        } else {
            Cell::empty()
        }
    }

    /// Row-major read access for snapshots and rendering.
    #[inline]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Alive pieces standing on the grid, for projection checks.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    fn set_annotation(&mut self, at: GridCoord, annotation: Annotation) {
        if in_bounds(at) {
            self.cells[at.0 as usize][at.1 as usize].annotation = Some(annotation);
        }
    }

    /// Which player's piece occupies a cell, if any.
    #[inline]
    pub fn owner_at(&self, at: GridCoord) -> Option<PlayerId> {
        self.cell(at).piece_tag().map(|tag| tag.owner)
    }
}

impl Default for BoardGrid {
    fn default() -> Self {
        BoardGrid::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BoardGrid;
    use crate::board::cell::{Annotation, PieceKind};
    use crate::roster::piece::Piece;
    use crate::roster::player::{Player, PlayerKind};
    use crate::roster::starting_layout::standard_player;

    fn two_standard_players() -> Vec<Player> {
        vec![
            standard_player(0, PlayerKind::Human),
            standard_player(1, PlayerKind::Human),
        ]
    }

    #[test]
    fn regeneration_is_a_bijection_over_alive_pieces() {
        let players = two_standard_players();
        let mut grid = BoardGrid::new();
        grid.regenerate(&players);

        assert_eq!(grid.occupied_count(), 32);
        for player in &players {
            for piece in player.pieces().values() {
                let tag = grid
                    .cell(piece.position())
                    .piece_tag()
                    .expect("alive piece should project onto its cell");
                assert_eq!(tag.owner, piece.owner());
                assert_eq!(tag.piece_id, piece.id());
            }
        }
    }

    #[test]
    fn dead_pieces_vanish_from_the_next_regeneration() {
        let mut players = two_standard_players();
        players[1]
            .piece_mut(0)
            .expect("pawn 0 should exist")
            .kill();

        let mut grid = BoardGrid::new();
        grid.regenerate(&players);
        assert_eq!(grid.occupied_count(), 31);
        assert!(!grid.cell((1, 0)).is_occupied());
    }

    #[test]
    fn clear_wipes_every_cell() {
        let mut grid = BoardGrid::new();
        grid.regenerate(&two_standard_players());
        grid.clear();
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn pending_target_marker_overrides_destination_marker() {
        let mut player = Player::new(0, PlayerKind::Human);
        player.add_piece(Piece::new(0, PieceKind::Rook, 8, (7, 0)));
        let mut enemy = Player::new(1, PlayerKind::Human);
        enemy.add_piece(Piece::new(1, PieceKind::Pawn, 0, (5, 0)));
        let players = vec![player, enemy];

        let mut grid = BoardGrid::new();
        grid.regenerate(&players);
        grid.mark_special_cells(Some((7, 0)), &[(6, 0), (5, 0)], Some((5, 0)));

        assert_eq!(grid.cell((7, 0)).annotation, Some(Annotation::Selected));
        assert_eq!(grid.cell((6, 0)).annotation, Some(Annotation::MoveTarget));
        assert_eq!(grid.cell((5, 0)).annotation, Some(Annotation::PendingTarget));
    }

    #[test]
    fn destinations_are_not_marked_without_a_selection() {
        let mut grid = BoardGrid::new();
        grid.regenerate(&two_standard_players());
        grid.mark_special_cells(None, &[(4, 4)], None);
        assert_eq!(grid.cell((4, 4)).annotation, None);
    }
}
