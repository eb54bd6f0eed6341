//! Error types for board construction.

use crate::position::Position;

/// Errors from placing pieces or sizing a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board size is outside the supported range.
    #[error("board size {size} is outside {min}..={max}")]
    InvalidSize {
        /// Requested size.
        size: u8,
        /// Smallest supported size.
        min: u8,
        /// Largest supported size.
        max: u8,
    },
    /// A piece was placed outside the board.
    #[error("position {position} is off a {size}x{size} board")]
    OffBoard {
        /// The rejected position.
        position: Position,
        /// Board size.
        size: u8,
    },
    /// A piece was placed on a cell that already holds one.
    #[error("position {position} is already occupied")]
    Occupied {
        /// The contested position.
        position: Position,
    },
}
