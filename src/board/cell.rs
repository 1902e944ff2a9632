//! Cell and piece-kind types shared across the board and engine layers.
//!
//! A cell is a tagged variant (empty or occupied) carrying an optional
//! transient annotation. Annotations are recomputed on every render pass from
//! selection state and are never part of persistent piece truth.

/// Player identity, `0` or `1`.
pub type PlayerId = usize;

/// Piece identity, unique within its owning player.
pub type PieceId = usize;

/// Piece kind (owner is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Canonical glyph used by the cell token encoding, owner-agnostic.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => '♟',
            PieceKind::Knight => '♞',
            PieceKind::Bishop => '♝',
            PieceKind::Rook => '♜',
            PieceKind::Queen => '♛',
            PieceKind::King => '♚',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '♟' => Some(PieceKind::Pawn),
            '♞' => Some(PieceKind::Knight),
            '♝' => Some(PieceKind::Bishop),
            '♜' => Some(PieceKind::Rook),
            '♛' => Some(PieceKind::Queen),
            '♚' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Transient per-cell marker applied during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Selected,
    MoveTarget,
    CaptureTarget,
    PendingTarget,
}

impl Annotation {
    /// Trailing character used by the cell token encoding.
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Annotation::Selected => '~',
            Annotation::MoveTarget => '.',
            Annotation::CaptureTarget => 'x',
            Annotation::PendingTarget => '?',
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '~' => Some(Annotation::Selected),
            '.' => Some(Annotation::MoveTarget),
            'x' => Some(Annotation::CaptureTarget),
            '?' => Some(Annotation::PendingTarget),
            _ => None,
        }
    }
}

/// Owner/kind/id triple identifying the piece standing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceTag {
    pub owner: PlayerId,
    pub kind: PieceKind,
    pub piece_id: PieceId,
}

/// What occupies a cell, annotation aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Occupied(PieceTag),
}

/// One square of the board: content plus the optional transient annotation.
///
/// Empty cells carry annotations too; a move-target highlight usually sits on
/// an empty destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub content: CellContent,
    pub annotation: Option<Annotation>,
}

impl Cell {
    #[inline]
    pub const fn empty() -> Self {
        Cell {
            content: CellContent::Empty,
            annotation: None,
        }
    }

    #[inline]
    pub const fn occupied(owner: PlayerId, kind: PieceKind, piece_id: PieceId) -> Self {
        Cell {
            content: CellContent::Occupied(PieceTag {
                owner,
                kind,
                piece_id,
            }),
            annotation: None,
        }
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        matches!(self.content, CellContent::Occupied(_))
    }

    #[inline]
    pub fn piece_tag(&self) -> Option<PieceTag> {
        match self.content {
            CellContent::Occupied(tag) => Some(tag),
            CellContent::Empty => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}
