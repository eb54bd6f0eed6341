//! The two sides of the board.

use std::fmt;
use std::ops::Not;

/// A side: White or Black.
///
/// Black is the reference orientation: movement offsets are authored for
/// Black, which starts on rank 0 and advances toward higher ranks. White
/// starts on the last rank and sees every offset vertically mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    /// The team whose offsets are used exactly as authored.
    pub const REFERENCE: Team = Team::Black;

    /// Return the opposing team.
    #[inline]
    pub const fn flip(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Return `true` if this team's offsets are not mirrored.
    #[inline]
    pub const fn is_reference(self) -> bool {
        matches!(self, Team::Black)
    }

    /// Return the rank this team's back row starts on.
    #[inline]
    pub const fn home_rank(self, board_size: u8) -> i8 {
        match self {
            Team::White => board_size as i8 - 1,
            Team::Black => 0,
        }
    }

    /// Return the rank this team promotes on: the opponent's home rank.
    #[inline]
    pub const fn far_rank(self, board_size: u8) -> i8 {
        self.flip().home_rank(board_size)
    }

    /// Lowercase name used for asset lookup ("white", "black").
    pub const fn name(self) -> &'static str {
        match self {
            Team::White => "white",
            Team::Black => "black",
        }
    }
}

impl Not for Team {
    type Output = Team;

    #[inline]
    fn not(self) -> Team {
        self.flip()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
