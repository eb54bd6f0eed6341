//! Castling geometry.

use crate::position::{Offset, Position};

/// Which side of the board the king castles toward.
///
/// King side is toward the last file, queen side toward file 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the highest file; the rook starts in that corner.
    KingSide,
    /// Toward file 0.
    QueenSide,
}

impl CastleSide {
    /// Both sides.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Return the file direction the king travels in (+1 or -1).
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Return the file of this side's corner rook.
    #[inline]
    pub const fn rook_file(self, board_size: u8) -> i8 {
        match self {
            CastleSide::KingSide => board_size as i8 - 1,
            CastleSide::QueenSide => 0,
        }
    }

    /// Return where the king lands when castling from `king`.
    #[inline]
    pub fn king_destination(self, king: Position) -> Position {
        king + Offset::new(2 * self.direction(), 0)
    }

    /// Return where the rook lands: next to the king, on the side it came from.
    #[inline]
    pub fn rook_destination(self, king_destination: Position) -> Position {
        king_destination + Offset::new(-self.direction(), 0)
    }

    /// Classify a two-file king move.
    pub fn from_king_move(from: Position, to: Position) -> Option<CastleSide> {
        if from.rank() != to.rank() {
            return None;
        }
        match to.file() - from.file() {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}
