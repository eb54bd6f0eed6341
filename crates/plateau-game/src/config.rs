//! Session configuration.

use std::time::Duration;

use plateau_core::Board;

use crate::error::ConfigError;
use crate::input::ScreenPos;
use crate::presenter::{Animation, Easing, LevelPos};

/// Knobs for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Cells along one edge of the board.
    pub board_size: u8,
    /// Width of the square window, in pixels.
    pub window_size: u32,
    /// How long a sprite takes to glide to its new cell.
    pub move_duration: Duration,
    /// Speed curve of that glide.
    pub easing: Easing,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: Board::DEFAULT_SIZE,
            window_size: 960,
            move_duration: Duration::from_millis(100),
            easing: Easing::Linear,
        }
    }
}

impl SessionConfig {
    /// Check that a board and a window can be built from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::empty(self.board_size)?;
        if self.cell_size() < 1.0 {
            return Err(ConfigError::WindowTooSmall {
                window_size: self.window_size,
                board_size: self.board_size,
            });
        }
        Ok(())
    }

    /// Side of one cell in pixels, rounded to a whole pixel.
    pub fn cell_size(&self) -> f32 {
        (self.window_size as f32 / self.board_size as f32).round()
    }

    /// Animation used whenever a sprite settles on a cell.
    pub fn animation(&self) -> Animation {
        Animation {
            duration: self.move_duration,
            easing: self.easing,
        }
    }

    /// Convert a window coordinate into level space.
    pub fn to_level(&self, at: ScreenPos) -> LevelPos {
        let cell = self.cell_size();
        LevelPos::new(at.x / cell, at.y / cell)
    }
}
