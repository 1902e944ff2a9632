//! Commit of a confirmed pending target.
//!
//! Resolves the mover from the selection cell, kills a captured piece before
//! any relocation so bookkeeping reads the pre-move board, executes the rook
//! side-effect of a castling king move, and finally relocates the mover
//! unconditionally. Piece positions are mutated directly; no board cell is
//! written here. Regeneration is the caller's next render pass.

use crate::board::board_grid::BoardGrid;
use crate::board::cell::{PieceId, PieceKind, PlayerId};
use crate::board::grid_location::GridCoord;
use crate::engine::engine_errors::EngineError;
use crate::engine::selection::SelectionTracker;
use crate::roster::player::Player;

/// Rook side-effect of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookRelocation {
    pub piece_id: PieceId,
    pub from: GridCoord,
    pub to: GridCoord,
}

/// A committed move, as reported to the turn controller and the game log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedMove {
    pub player: PlayerId,
    pub piece_id: PieceId,
    pub from: GridCoord,
    pub to: GridCoord,
    pub capture: Option<(PlayerId, PieceId)>,
    pub castle: Option<RookRelocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Committed(CommittedMove),
    /// Nothing was pending, so nothing was committed.
    NoOp,
}

impl MoveOutcome {
    #[inline]
    pub fn committed(&self) -> Option<&CommittedMove> {
        match self {
            MoveOutcome::Committed(committed) => Some(committed),
            MoveOutcome::NoOp => None,
        }
    }
}

/// A castling king travels exactly two columns.
const CASTLE_KING_DISTANCE: i8 = 2;

/// Commit the tracker's pending target for the active player.
///
/// Returns [`MoveOutcome::NoOp`] when no target is pending. Errors indicate
/// the board and the piece records have desynchronized and are not
/// recoverable.
pub fn confirm_pending(
    tracker: &SelectionTracker,
    grid: &BoardGrid,
    players: &mut [Player],
    active_player: PlayerId,
) -> Result<MoveOutcome, EngineError> {
    let (Some(from), Some(target)) = (tracker.selection(), tracker.pending_target()) else {
        return Ok(MoveOutcome::NoOp);
    };

    let mover_tag = grid
        .cell(from)
        .piece_tag()
        .ok_or(EngineError::DecodedEmptyCell(from))?;

    // Kill the targeted piece first so capture bookkeeping reads the
    // pre-move board.
    let mut capture = None;
    if let Some(victim_tag) = grid.cell(target).piece_tag() {
        let victim = players
            .get_mut(victim_tag.owner)
            .and_then(|player| player.piece_mut(victim_tag.piece_id))
            .ok_or(EngineError::PieceRecordMissing {
                player: victim_tag.owner,
                piece_id: victim_tag.piece_id,
            })?;
        victim.kill();
        capture = Some((victim_tag.owner, victim_tag.piece_id));
    }

    let mover_col = players
        .get(active_player)
        .and_then(|player| player.piece(mover_tag.piece_id))
        .ok_or(EngineError::PieceRecordMissing {
            player: active_player,
            piece_id: mover_tag.piece_id,
        })?
        .position()
        .1;

    // A king travelling two columns is castling: the corner rook on the
    // mover's home row relocates beside the king's destination. The king's
    // own move falls through to the common relocation below.
    let mut castle = None;
    if mover_tag.kind == PieceKind::King && (target.1 - mover_col).abs() == CASTLE_KING_DISTANCE {
        let home_row = from.0;
        let (corner_col, rook_dest_col) = if target.1 < mover_col { (0, 3) } else { (7, 5) };
        let rook_tag = grid
            .cell((home_row, corner_col))
            .piece_tag()
            .ok_or(EngineError::CastlingRookMissing {
                row: home_row,
                corner: corner_col,
            })?;
        let rook = players
            .get_mut(active_player)
            .and_then(|player| player.piece_mut(rook_tag.piece_id))
            .ok_or(EngineError::PieceRecordMissing {
                player: active_player,
                piece_id: rook_tag.piece_id,
            })?;
        let rook_from = rook.position();
        rook.relocate(home_row, rook_dest_col);
        castle = Some(RookRelocation {
            piece_id: rook_tag.piece_id,
            from: rook_from,
            to: (home_row, rook_dest_col),
        });
    }

    let mover = players
        .get_mut(active_player)
        .and_then(|player| player.piece_mut(mover_tag.piece_id))
        .ok_or(EngineError::PieceRecordMissing {
            player: active_player,
            piece_id: mover_tag.piece_id,
        })?;
    mover.relocate(target.0, target.1);

    Ok(MoveOutcome::Committed(CommittedMove {
        player: active_player,
        piece_id: mover_tag.piece_id,
        from,
        to: target,
        capture,
        castle,
    }))
}
