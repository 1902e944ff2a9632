//! Errors surfaced by the state engine.
//!
//! The engine favors silent rejection for ordinary bad input (empty-cell
//! clicks, confirms with nothing pending). The variants here are the other
//! class: board/roster desynchronization that must fail loudly instead of
//! being swallowed.

use std::error::Error;
use std::fmt;

use crate::board::cell::{PieceId, PlayerId};
use crate::board::grid_location::GridCoord;
use crate::movegen::move_provider::MoveGenerationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A cell that must hold a piece decoded as empty; the grid no longer
    /// projects the piece records.
    DecodedEmptyCell(GridCoord),
    /// Castling resolution found no rook on the expected back-rank corner.
    CastlingRookMissing { row: i8, corner: i8 },
    /// A cell references a piece id absent from its owner's roster.
    PieceRecordMissing { player: PlayerId, piece_id: PieceId },
    /// The move-provider collaborator failed internally.
    MoveGeneration(MoveGenerationError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DecodedEmptyCell(at) => {
                write!(
                    f,
                    "cell ({}, {}) was expected to hold a piece but is empty",
                    at.0, at.1
                )
            }
            EngineError::CastlingRookMissing { row, corner } => {
                write!(f, "no rook found at castling corner ({row}, {corner})")
            }
            EngineError::PieceRecordMissing { player, piece_id } => {
                write!(f, "player {player} has no piece record with id {piece_id}")
            }
            EngineError::MoveGeneration(inner) => write!(f, "move generation failed: {inner}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::MoveGeneration(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<MoveGenerationError> for EngineError {
    fn from(inner: MoveGenerationError) -> Self {
        EngineError::MoveGeneration(inner)
    }
}
