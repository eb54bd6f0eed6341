//! Per-kind movement tables.
//!
//! Every kind carries two offset sets, both authored for the reference
//! orientation ([`Team::REFERENCE`]):
//!
//! - *move-only* offsets may only land on an empty cell;
//! - *move-or-capture* offsets may only land on an opposing piece.
//!
//! For every kind except the pawn the two sets are identical, so together they
//! cover both quiet moves and captures. Pawns advance straight and capture
//! diagonally.

use crate::piece_kind::PieceKind;
use crate::position::Offset;
use crate::team::Team;

const KING_STEPS: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(0, -1),
    Offset::new(1, -1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
    Offset::new(1, 1),
];

const KNIGHT_LEAPS: [Offset; 8] = [
    Offset::new(-1, -2),
    Offset::new(1, -2),
    Offset::new(-1, 2),
    Offset::new(1, 2),
    Offset::new(-2, -1),
    Offset::new(2, -1),
    Offset::new(-2, 1),
    Offset::new(2, 1),
];

/// Convert an authored offset into a board-relative offset for `team`.
#[inline]
pub const fn mirror(offset: Offset, team: Team) -> Offset {
    if team.is_reference() {
        offset
    } else {
        offset.flip_vertical()
    }
}

/// The two offset sets of one piece kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementEntry {
    move_only: Vec<Offset>,
    move_or_capture: Vec<Offset>,
}

impl MovementEntry {
    fn symmetric(offsets: Vec<Offset>) -> MovementEntry {
        MovementEntry {
            move_or_capture: offsets.clone(),
            move_only: offsets,
        }
    }

    /// Offsets usable only onto an empty cell.
    #[inline]
    pub fn move_only(&self) -> &[Offset] {
        &self.move_only
    }

    /// Offsets usable only onto a cell held by the opposing team.
    #[inline]
    pub fn move_or_capture(&self) -> &[Offset] {
        &self.move_or_capture
    }
}

/// Movement entries for every [`PieceKind`], built for one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementTable {
    board_size: u8,
    entries: [MovementEntry; PieceKind::COUNT],
}

impl MovementTable {
    /// Build the tables for a `board_size` x `board_size` board.
    pub fn new(board_size: u8) -> MovementTable {
        let reach = board_size as i8 - 1;

        let mut queen = diagonals(reach);
        queen.extend(lines(reach));

        let pawn = MovementEntry {
            move_only: vec![Offset::new(0, 1)],
            move_or_capture: vec![Offset::new(-1, 1), Offset::new(1, 1)],
        };

        // Order follows `PieceKind::index`.
        let entries = [
            MovementEntry::symmetric(KING_STEPS.to_vec()),
            MovementEntry::symmetric(queen),
            MovementEntry::symmetric(diagonals(reach)),
            MovementEntry::symmetric(KNIGHT_LEAPS.to_vec()),
            MovementEntry::symmetric(lines(reach)),
            pawn,
        ];

        tracing::debug!(board_size, "built movement tables");
        MovementTable { board_size, entries }
    }

    /// Return the board size these tables were built for.
    #[inline]
    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// Return the authored entry for `kind`.
    #[inline]
    pub fn entry(&self, kind: PieceKind) -> &MovementEntry {
        &self.entries[kind.index()]
    }

    /// Move-only offsets for `kind`, already mirrored for `team`.
    pub fn move_only(&self, kind: PieceKind, team: Team) -> impl Iterator<Item = Offset> + '_ {
        self.entry(kind).move_only.iter().map(move |&o| mirror(o, team))
    }

    /// Move-or-capture offsets for `kind`, already mirrored for `team`.
    pub fn move_or_capture(&self, kind: PieceKind, team: Team) -> impl Iterator<Item = Offset> + '_ {
        self.entry(kind).move_or_capture.iter().map(move |&o| mirror(o, team))
    }
}

/// Diagonal offsets at every distance `1..=reach`.
fn diagonals(reach: i8) -> Vec<Offset> {
    (-reach..=reach)
        .filter(|&i| i != 0)
        .flat_map(|i| [Offset::new(i, i), Offset::new(-i, i)])
        .collect()
}

/// Orthogonal offsets at every distance `1..=reach`.
fn lines(reach: i8) -> Vec<Offset> {
    (-reach..=reach)
        .filter(|&i| i != 0)
        .flat_map(|i| [Offset::new(0, i), Offset::new(i, 0)])
        .collect()
}
