//! Canonical starting-position constants and roster construction.
//!
//! Piece ids are fixed by column so they stay stable across regenerations:
//! pawns take id = column on the pawn rank, back-rank pieces take
//! id = 8 + column. The king is therefore always id 12 and the corner rooks
//! ids 8 and 15. Player 0 plays the bottom rows (6 and 7), player 1 the top
//! rows (0 and 1).

use crate::board::cell::{PieceId, PieceKind, PlayerId};
use crate::roster::piece::Piece;
use crate::roster::player::{Player, PlayerKind};

/// Back-rank kinds in column order.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_START_COL: i8 = 4;

/// Id of the king under the column-based id scheme.
pub const KING_ID: PieceId = 12;

/// Back rank row for a player.
#[inline]
pub const fn home_row(owner: PlayerId) -> i8 {
    if owner == 0 {
        7
    } else {
        0
    }
}

/// Pawn rank row for a player.
#[inline]
pub const fn pawn_row(owner: PlayerId) -> i8 {
    if owner == 0 {
        6
    } else {
        1
    }
}

/// A player with the full standard starting roster.
pub fn standard_player(id: PlayerId, kind: PlayerKind) -> Player {
    let mut player = Player::new(id, kind);
    for col in 0..8i8 {
        player.add_piece(Piece::new(
            id,
            PieceKind::Pawn,
            col as PieceId,
            (pawn_row(id), col),
        ));
        player.add_piece(Piece::new(
            id,
            BACK_RANK[col as usize],
            8 + col as PieceId,
            (home_row(id), col),
        ));
    }
    player
}
