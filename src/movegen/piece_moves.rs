//! Pseudo-legal destination generation over the projected occupancy.
//!
//! Filters occupancy and path rules only: pawn pushes and diagonal captures,
//! knight jumps, sliding rays, king steps, and castling candidates gated on
//! the corner rook standing on its start square with an empty path between.
//! Check-threat filtering is deliberately absent; callers that need it sit
//! behind the same trait.

use crate::board::cell::{PieceId, PieceKind, PlayerId};
use crate::board::grid_location::{offset_location, GridCoord};
use crate::movegen::move_provider::{MoveGenResult, MoveGenerationError, MoveProvider};
use crate::roster::player::Player;
use crate::roster::starting_layout::{home_row, pawn_row, KING_START_COL};

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Forward row direction for a player's pawns. Player 0 marches up the
/// board (decreasing rows), player 1 down.
#[inline]
const fn forward_direction(owner: PlayerId) -> i8 {
    if owner == 0 {
        -1
    } else {
        1
    }
}

/// Per-square owner projection used for blocking and capture tests.
type Occupancy = [[Option<PlayerId>; 8]; 8];

fn project_occupancy(players: &[Player]) -> Occupancy {
    let mut occupancy: Occupancy = [[None; 8]; 8];
    for player in players {
        for piece in player.alive_pieces() {
            let (row, col) = piece.position();
            occupancy[row as usize][col as usize] = Some(piece.owner());
        }
    }
    occupancy
}

#[inline]
fn occupant(occupancy: &Occupancy, at: GridCoord) -> Option<PlayerId> {
    occupancy[at.0 as usize][at.1 as usize]
}

pub struct StandardMoveProvider;

impl MoveProvider for StandardMoveProvider {
    fn moves_for(
        &self,
        players: &[Player],
        player_id: PlayerId,
        piece_id: PieceId,
    ) -> MoveGenResult<Vec<GridCoord>> {
        let player = players.get(player_id).ok_or_else(|| {
            MoveGenerationError::InvalidState(format!("no player with id {player_id}"))
        })?;
        let piece = player
            .piece(piece_id)
            .filter(|piece| piece.is_alive())
            .ok_or_else(|| {
                MoveGenerationError::InvalidState(format!(
                    "player {player_id} has no alive piece with id {piece_id}"
                ))
            })?;

        let occupancy = project_occupancy(players);
        let from = piece.position();

        let destinations = match piece.kind() {
            PieceKind::Pawn => pawn_destinations(&occupancy, player_id, from),
            PieceKind::Knight => step_destinations(&occupancy, player_id, from, &KNIGHT_STEPS),
            PieceKind::Bishop => ray_destinations(&occupancy, player_id, from, &BISHOP_RAYS),
            PieceKind::Rook => ray_destinations(&occupancy, player_id, from, &ROOK_RAYS),
            PieceKind::Queen => {
                let mut moves = ray_destinations(&occupancy, player_id, from, &BISHOP_RAYS);
                moves.extend(ray_destinations(&occupancy, player_id, from, &ROOK_RAYS));
                moves
            }
            PieceKind::King => {
                let mut moves = step_destinations(&occupancy, player_id, from, &KING_STEPS);
                moves.extend(castling_destinations(player, &occupancy, from));
                moves
            }
        };

        Ok(destinations)
    }
}

fn pawn_destinations(occupancy: &Occupancy, owner: PlayerId, from: GridCoord) -> Vec<GridCoord> {
    let mut out = Vec::new();
    let dir = forward_direction(owner);

    if let Some(ahead) = offset_location(from, dir, 0) {
        if occupant(occupancy, ahead).is_none() {
            out.push(ahead);
            if from.0 == pawn_row(owner) {
                if let Some(two_ahead) = offset_location(from, 2 * dir, 0) {
                    if occupant(occupancy, two_ahead).is_none() {
                        out.push(two_ahead);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(diagonal) = offset_location(from, dir, d_col) {
            if matches!(occupant(occupancy, diagonal), Some(other) if other != owner) {
                out.push(diagonal);
            }
        }
    }

    out
}

fn step_destinations(
    occupancy: &Occupancy,
    owner: PlayerId,
    from: GridCoord,
    steps: &[(i8, i8)],
) -> Vec<GridCoord> {
    steps
        .iter()
        .filter_map(|(d_row, d_col)| offset_location(from, *d_row, *d_col))
        .filter(|to| occupant(occupancy, *to) != Some(owner))
        .collect()
}

fn ray_destinations(
    occupancy: &Occupancy,
    owner: PlayerId,
    from: GridCoord,
    rays: &[(i8, i8)],
) -> Vec<GridCoord> {
    let mut out = Vec::new();
    for (d_row, d_col) in rays {
        let mut cursor = from;
        while let Some(next) = offset_location(cursor, *d_row, *d_col) {
            match occupant(occupancy, next) {
                None => {
                    out.push(next);
                    cursor = next;
                }
                Some(other) if other != owner => {
                    out.push(next);
                    break;
                }
                Some(_) => break,
            }
        }
    }
    out
}

/// Two-column king displacements toward a corner rook with a clear path.
///
/// The rook must be alive on its corner start square and the king on its own
/// start square; squares between them must be empty. Whether the pair has
/// moved before, or the path is attacked, is not checked here.
fn castling_destinations(player: &Player, occupancy: &Occupancy, from: GridCoord) -> Vec<GridCoord> {
    let owner = player.id();
    let row = home_row(owner);
    if from != (row, KING_START_COL) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (corner_col, king_dest_col, between) in [
        (0i8, 2i8, &[1i8, 2, 3][..]),
        (7, 6, &[5, 6][..]),
    ] {
        let rook_on_corner = player.alive_pieces().any(|piece| {
            piece.kind() == PieceKind::Rook && piece.position() == (row, corner_col)
        });
        if !rook_on_corner {
            continue;
        }
        let path_clear = between
            .iter()
            .all(|col| occupant(occupancy, (row, *col)).is_none());
        if path_clear {
            out.push((row, king_dest_col));
        }
    }
    out
}
