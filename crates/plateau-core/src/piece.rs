//! Pieces placed on the board.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::team::Team;

/// Stable handle to a piece owned by a [`Board`](crate::board::Board).
///
/// Handles are never reused within one board, so a handle to a captured
/// piece simply stops resolving.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u32);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: usize) -> PieceId {
        PieceId(index as u32)
    }

    /// Return the slot index inside the owning board.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceId({})", self.0)
    }
}

/// A piece and its mutable game state.
///
/// The kind only changes on promotion. The team never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    team: Team,
    position: Position,
    has_moved: bool,
    has_castled: bool,
}

impl Piece {
    /// Create an unmoved piece.
    pub const fn new(kind: PieceKind, team: Team, position: Position) -> Piece {
        Piece {
            kind,
            team,
            position,
            has_moved: false,
            has_castled: false,
        }
    }

    /// Return the current kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Return the team.
    #[inline]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Return the current position.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Return `true` once the piece has been relocated by a move.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Return `true` if this king has castled.
    #[inline]
    pub const fn has_castled(&self) -> bool {
        self.has_castled
    }

    /// Mark the piece as already moved. Useful when setting up positions.
    pub fn with_moved(mut self) -> Piece {
        self.has_moved = true;
        self
    }

    /// Asset name of the sprite for this piece, e.g. `"white-knight.png"`.
    pub fn texture_name(&self) -> String {
        format!("{}-{}.png", self.team.name(), self.kind.name())
    }

    /// Board-diagram letter: uppercase for White, lowercase for Black.
    pub fn letter(&self) -> char {
        match self.team {
            Team::White => self.kind.letter().to_ascii_uppercase(),
            Team::Black => self.kind.letter(),
        }
    }

    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
        self.has_moved = true;
    }

    pub(crate) fn promote(&mut self) {
        self.kind = PieceKind::Queen;
    }

    pub(crate) fn mark_castled(&mut self) {
        self.has_castled = true;
    }
}
