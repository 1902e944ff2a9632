use std::collections::BTreeMap;

use crate::board::cell::{PieceId, PlayerId};
use crate::roster::piece::Piece;

/// How a player's moves are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves arrive through the click-driven public surface.
    Human,
    /// Moves are chosen by a decision policy during turn hand-off.
    Automated,
}

/// One player: identity, kind, and the roster of owned pieces keyed by id.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    kind: PlayerKind,
    pieces: BTreeMap<PieceId, Piece>,
}

impl Player {
    pub fn new(id: PlayerId, kind: PlayerKind) -> Self {
        Player {
            id,
            kind,
            pieces: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[inline]
    pub fn pieces(&self) -> &BTreeMap<PieceId, Piece> {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    /// Register a piece under its own id. A second piece with the same id
    /// replaces the first; ids are unique within one player by construction.
    pub fn add_piece(&mut self, piece: Piece) {
        self.pieces.insert(piece.id(), piece);
    }

    /// Alive pieces only, in id order.
    pub fn alive_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(|piece| piece.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::{Player, PlayerKind};
    use crate::board::cell::PieceKind;
    use crate::roster::piece::Piece;

    #[test]
    fn roster_lookup_is_keyed_by_piece_id() {
        let mut player = Player::new(0, PlayerKind::Human);
        player.add_piece(Piece::new(0, PieceKind::Pawn, 3, (6, 3)));
        player.add_piece(Piece::new(0, PieceKind::King, 12, (7, 4)));

        assert_eq!(
            player.piece(12).map(|piece| piece.kind()),
            Some(PieceKind::King)
        );
        assert!(player.piece(40).is_none());
    }

    #[test]
    fn alive_pieces_skips_killed_records() {
        let mut player = Player::new(1, PlayerKind::Automated);
        player.add_piece(Piece::new(1, PieceKind::Pawn, 0, (1, 0)));
        player.add_piece(Piece::new(1, PieceKind::Pawn, 1, (1, 1)));
        player.piece_mut(0).expect("pawn 0 should exist").kill();

        let alive: Vec<_> = player.alive_pieces().map(|piece| piece.id()).collect();
        assert_eq!(alive, vec![1]);
    }
}
