//! Board coordinates and relative offsets.

use std::fmt;
use std::ops::Add;

/// A cell on the board, as a (file, rank) pair.
///
/// Positions are plain coordinates and may lie off the board; use
/// [`Position::is_on_board`] before treating one as a real cell.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    file: i8,
    rank: i8,
}

impl Position {
    /// Create a position from a file and a rank.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Position {
        Position { file, rank }
    }

    /// Return the file (column).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Return the rank (row).
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Return `true` if the position lies on a board of `size` x `size` cells.
    #[inline]
    pub const fn is_on_board(self, size: u8) -> bool {
        let max = size as i8;
        self.file >= 0 && self.file < max && self.rank >= 0 && self.rank < max
    }

    /// Return the offset that leads from `self` to `to`.
    #[inline]
    pub const fn offset_to(self, to: Position) -> Offset {
        Offset::new(to.file - self.file, to.rank - self.rank)
    }

    /// Parse algebraic notation such as `"e2"` or `"j10"`.
    ///
    /// The file letter `a` is file 0; the rank number `1` is rank 0.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        if !file_char.is_ascii_lowercase() {
            return None;
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let rank_number: u8 = digits.parse().ok()?;
        if rank_number == 0 || rank_number > 26 {
            return None;
        }

        Some(Position::new(
            (file_char as u8 - b'a') as i8,
            rank_number as i8 - 1,
        ))
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    #[inline]
    fn add(self, offset: Offset) -> Position {
        // Saturation only ever lands far off the board, which callers reject.
        Position::new(
            self.file.saturating_add(offset.dx),
            self.rank.saturating_add(offset.dy),
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.file) && self.rank >= 0 {
            write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank as i16 + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.file, self.rank)
    }
}

/// A relative displacement `(dx, dy)` between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    /// File delta.
    pub dx: i8,
    /// Rank delta.
    pub dy: i8,
}

impl Offset {
    /// Create an offset.
    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Offset {
        Offset { dx, dy }
    }

    /// Return the offset with its rank delta negated.
    #[inline]
    pub const fn flip_vertical(self) -> Offset {
        Offset::new(self.dx, -self.dy)
    }

    /// Return the unit step along each axis (each component is -1, 0 or 1).
    #[inline]
    pub const fn signum(self) -> Offset {
        Offset::new(self.dx.signum(), self.dy.signum())
    }

    /// Return `true` for the zero displacement.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Offset, Position};

    #[test]
    fn on_board_bounds() {
        assert!(Position::new(0, 0).is_on_board(8));
        assert!(Position::new(7, 7).is_on_board(8));
        assert!(!Position::new(8, 0).is_on_board(8));
        assert!(!Position::new(0, -1).is_on_board(8));
        assert!(Position::new(9, 9).is_on_board(10));
    }

    #[test]
    fn add_offset() {
        assert_eq!(Position::new(4, 1) + Offset::new(0, 2), Position::new(4, 3));
        assert_eq!(Position::new(0, 0) + Offset::new(-1, 2), Position::new(-1, 2));
        assert!(!(Position::new(120, 0) + Offset::new(100, 0)).is_on_board(26));
    }

    #[test]
    fn offset_between_positions() {
        let from = Position::new(2, 2);
        let to = Position::new(5, -1);
        assert_eq!(from.offset_to(to), Offset::new(3, -3));
        assert_eq!(from.offset_to(to).signum(), Offset::new(1, -1));
        assert!(from.offset_to(from).is_zero());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Position::from_algebraic("a1"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_algebraic("e2"), Some(Position::new(4, 1)));
        assert_eq!(Position::from_algebraic("j10"), Some(Position::new(9, 9)));
        assert_eq!(format!("{}", Position::new(4, 1)), "e2");
        assert_eq!(format!("{}", Position::new(9, 9)), "j10");
        assert_eq!(format!("{}", Position::new(-1, 3)), "(-1, 3)");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Position::from_algebraic("").is_none());
        assert!(Position::from_algebraic("e").is_none());
        assert!(Position::from_algebraic("E2").is_none());
        assert!(Position::from_algebraic("e0").is_none());
        assert!(Position::from_algebraic("e2x").is_none());
        assert!(Position::from_algebraic("2e").is_none());
    }

    #[test]
    fn flip_vertical() {
        assert_eq!(Offset::new(1, 2).flip_vertical(), Offset::new(1, -2));
    }
}
