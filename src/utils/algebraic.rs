//! Grid-coordinate and algebraic-square conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the engine's
//! `(row, col)` grid addressing, where row 0 is rank 8. Reused by the game
//! log and diagnostics.

use crate::board::grid_location::{in_bounds, GridCoord};

/// Convert algebraic notation (for example: "e4") to a grid coordinate.
#[inline]
pub fn algebraic_to_coord(square: &str) -> Result<GridCoord, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok((row, col))
}

/// Convert a grid coordinate to algebraic notation (for example: "e4").
#[inline]
pub fn coord_to_algebraic(at: GridCoord) -> Result<String, String> {
    if !in_bounds(at) {
        return Err(format!("Coordinate out of bounds: ({}, {})", at.0, at.1));
    }

    let file_char = char::from(b'a' + at.1 as u8);
    let rank_char = char::from(b'8' - at.0 as u8);
    Ok(format!("{file_char}{rank_char}"))
}
