use std::error::Error;
use std::fmt;

use crate::board::cell::{PieceId, PlayerId};
use crate::board::grid_location::GridCoord;
use crate::roster::player::Player;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    NotImplemented,
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::NotImplemented => {
                write!(f, "move generation is not implemented yet")
            }
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid roster state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Candidate-destination source for a single piece.
///
/// Implementations return the full destination set for the piece, already
/// filtered to whatever legality level they support; the selection tracker
/// consumes the set as-is.
pub trait MoveProvider {
    fn moves_for(
        &self,
        players: &[Player],
        player_id: PlayerId,
        piece_id: PieceId,
    ) -> MoveGenResult<Vec<GridCoord>>;
}

pub struct NullMoveProvider;

impl MoveProvider for NullMoveProvider {
    fn moves_for(
        &self,
        _players: &[Player],
        _player_id: PlayerId,
        _piece_id: PieceId,
    ) -> MoveGenResult<Vec<GridCoord>> {
        Err(MoveGenerationError::NotImplemented)
    }
}
