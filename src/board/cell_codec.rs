//! Compact string tokens for cell state interchange.
//!
//! An occupied cell encodes as `{owner digit}{kind glyph}{two-digit id}` plus
//! at most one trailing annotation character; an empty cell encodes as `-`.
//! The id is zero-padded so the occupied prefix is always four characters,
//! which keeps decoding positional and annotation stripping lossless.

use crate::board::cell::{Annotation, Cell, CellContent, PieceKind, PieceTag};

/// Token for a cell with no piece on it.
pub const EMPTY_TOKEN: &str = "-";

/// Encode a cell as its compact token.
pub fn encode_cell(cell: &Cell) -> String {
    let mut token = match cell.content {
        CellContent::Empty => EMPTY_TOKEN.to_owned(),
        CellContent::Occupied(tag) => {
            format!("{}{}{:02}", tag.owner, tag.kind.glyph(), tag.piece_id)
        }
    };
    if let Some(annotation) = cell.annotation {
        token.push(annotation.marker());
    }
    token
}

/// Decode a compact token back into a cell.
///
/// Owner, kind, and id come from the first four characters of an occupied
/// token; an optional fifth character is the annotation. Empty tokens are the
/// sentinel, optionally annotated.
pub fn decode_cell(token: &str) -> Result<Cell, String> {
    let chars: Vec<char> = token.chars().collect();

    match chars.as_slice() {
        ['-'] => Ok(Cell::empty()),
        ['-', marker] => {
            let annotation = Annotation::from_marker(*marker)
                .ok_or_else(|| format!("Invalid annotation marker: {marker}"))?;
            Ok(Cell {
                content: CellContent::Empty,
                annotation: Some(annotation),
            })
        }
        [owner, glyph, tens, ones] | [owner, glyph, tens, ones, _] => {
            let owner = owner
                .to_digit(10)
                .ok_or_else(|| format!("Invalid owner digit in token: {token}"))?
                as usize;
            let kind = PieceKind::from_glyph(*glyph)
                .ok_or_else(|| format!("Invalid piece glyph in token: {token}"))?;
            let tens = tens
                .to_digit(10)
                .ok_or_else(|| format!("Invalid id digit in token: {token}"))?;
            let ones = ones
                .to_digit(10)
                .ok_or_else(|| format!("Invalid id digit in token: {token}"))?;
            let annotation = match chars.get(4) {
                Some(marker) => Some(
                    Annotation::from_marker(*marker)
                        .ok_or_else(|| format!("Invalid annotation marker: {marker}"))?,
                ),
                None => None,
            };
            Ok(Cell {
                content: CellContent::Occupied(PieceTag {
                    owner,
                    kind,
                    piece_id: (tens * 10 + ones) as usize,
                }),
                annotation,
            })
        }
        _ => Err(format!("Malformed cell token: {token}")),
    }
}

/// Replace whatever annotation a token carries with the given one.
pub fn apply_annotation(token: &str, annotation: Annotation) -> String {
    let mut out = strip_annotation(token);
    out.push(annotation.marker());
    out
}

/// Drop the annotation character, keeping owner/kind/id intact.
pub fn strip_annotation(token: &str) -> String {
    match token.chars().last().and_then(Annotation::from_marker) {
        Some(_) => {
            let mut chars: Vec<char> = token.chars().collect();
            chars.pop();
            chars.into_iter().collect()
        }
        None => token.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_annotation, decode_cell, encode_cell, strip_annotation, EMPTY_TOKEN};
    use crate::board::cell::{Annotation, Cell, CellContent, PieceKind};

    #[test]
    fn occupied_tokens_zero_pad_single_digit_ids() {
        let cell = Cell::occupied(0, PieceKind::Pawn, 3);
        assert_eq!(encode_cell(&cell), "0♟03");
        let cell = Cell::occupied(1, PieceKind::Rook, 15);
        assert_eq!(encode_cell(&cell), "1♜15");
    }

    #[test]
    fn annotated_tokens_round_trip() {
        let mut cell = Cell::occupied(1, PieceKind::Queen, 11);
        cell.annotation = Some(Annotation::CaptureTarget);
        let token = encode_cell(&cell);
        assert_eq!(token, "1♛11x");
        assert_eq!(decode_cell(&token).expect("token should decode"), cell);
    }

    #[test]
    fn empty_tokens_round_trip_with_and_without_annotation() {
        assert_eq!(encode_cell(&Cell::empty()), EMPTY_TOKEN);
        let highlighted = Cell {
            content: CellContent::Empty,
            annotation: Some(Annotation::MoveTarget),
        };
        assert_eq!(encode_cell(&highlighted), "-.");
        assert_eq!(decode_cell("-.").expect("token should decode"), highlighted);
    }

    #[test]
    fn stripping_preserves_identity_fields() {
        let mut cell = Cell::occupied(0, PieceKind::King, 12);
        cell.annotation = Some(Annotation::Selected);
        let stripped = strip_annotation(&encode_cell(&cell));
        let decoded = decode_cell(&stripped).expect("stripped token should decode");
        assert_eq!(decoded.piece_tag(), cell.piece_tag());
        assert_eq!(decoded.annotation, None);
    }

    #[test]
    fn applying_an_annotation_replaces_the_previous_one() {
        assert_eq!(apply_annotation("0♜08~", Annotation::PendingTarget), "0♜08?");
        assert_eq!(apply_annotation("-", Annotation::MoveTarget), "-.");
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(decode_cell("").is_err());
        assert!(decode_cell("0♟3").is_err());
        assert!(decode_cell("9z00").is_err());
        assert!(decode_cell("0♟03!").is_err());
    }
}
