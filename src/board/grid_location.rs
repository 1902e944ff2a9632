/// Row/column pair addressing one square of the 8x8 grid. Row 0 is the top
/// rank (player 1's home row), row 7 the bottom (player 0's home row).
pub type GridCoord = (i8, i8);

/// Number of rows and columns on the board.
pub const GRID_SIZE: i8 = 8;

/// Whether a coordinate lies on the board.
#[inline]
pub const fn in_bounds(at: GridCoord) -> bool {
    at.0 >= 0 && at.0 < GRID_SIZE && at.1 >= 0 && at.1 < GRID_SIZE
}

/// Offsets a grid location by a row and column delta.
///
/// Returns `None` when the result would fall off the board, which doubles as
/// the stop condition for ray walks in move generation.
#[inline]
pub fn offset_location(at: GridCoord, d_row: i8, d_col: i8) -> Option<GridCoord> {
    let next: GridCoord = (at.0 + d_row, at.1 + d_col);
    if in_bounds(next) {
        Some(next)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{in_bounds, offset_location};

    #[test]
    fn offsets_inside_the_grid_resolve() {
        assert_eq!(offset_location((4, 4), -1, 2), Some((3, 6)));
        assert_eq!(offset_location((0, 0), 7, 7), Some((7, 7)));
    }

    #[test]
    fn offsets_off_the_grid_are_rejected() {
        assert_eq!(offset_location((0, 0), -1, 0), None);
        assert_eq!(offset_location((7, 7), 0, 1), None);
        assert!(!in_bounds((8, 0)));
        assert!(!in_bounds((0, -1)));
    }
}
