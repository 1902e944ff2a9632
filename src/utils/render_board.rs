//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of an annotated board snapshot for
//! debugging, tests, and diagnostics in text environments. Annotation
//! markers trail each square so selection and highlight state stays visible.

use crate::board::cell::{CellContent, PieceKind, PlayerId};
use crate::engine::observers::BoardSnapshot;

/// Render the snapshot to a Unicode string for terminal output.
pub fn render_board(snapshot: &BoardSnapshot<'_>) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for (row, cells) in snapshot.cells.iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for cell in cells {
            match cell.content {
                CellContent::Occupied(tag) => out.push(piece_to_unicode(tag.owner, tag.kind)),
                CellContent::Empty => out.push('·'),
            }
            match cell.annotation {
                Some(annotation) => out.push(annotation.marker()),
                None => out.push(' '),
            }
            out.push(' ');
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

fn piece_to_unicode(owner: PlayerId, kind: PieceKind) -> char {
    match (owner, kind) {
        (0, PieceKind::Pawn) => '♙',
        (0, PieceKind::Knight) => '♘',
        (0, PieceKind::Bishop) => '♗',
        (0, PieceKind::Rook) => '♖',
        (0, PieceKind::Queen) => '♕',
        (0, PieceKind::King) => '♔',
        (_, PieceKind::Pawn) => '♟',
        (_, PieceKind::Knight) => '♞',
        (_, PieceKind::Bishop) => '♝',
        (_, PieceKind::Rook) => '♜',
        (_, PieceKind::Queen) => '♛',
        (_, PieceKind::King) => '♚',
    }
}
