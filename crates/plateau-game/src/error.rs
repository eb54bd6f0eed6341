//! Session configuration errors.

use plateau_core::BoardError;

/// Errors raised when a [`SessionConfig`](crate::SessionConfig) cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The window cannot give every cell at least one pixel.
    #[error("window of {window_size}px is too small for {board_size} cells")]
    WindowTooSmall {
        /// Window width in pixels.
        window_size: u32,
        /// Cells along one edge.
        board_size: u8,
    },
    /// The board could not be built.
    #[error("invalid board: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}
