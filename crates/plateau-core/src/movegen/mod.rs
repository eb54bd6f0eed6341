//! Destination generation and legality.
//!
//! Generation runs in three stages: table destinations from the
//! [`MovementTable`], appended special candidates (pawn double step,
//! castling), then path filtering. Nothing is cached; every query reads the
//! board as it is now.

mod candidates;
mod path;
mod special;

use crate::board::Board;
use crate::movement::MovementTable;
use crate::piece::PieceId;
use crate::position::Position;

use self::candidates::gen_table_moves;
use self::path::retain_clear_paths;
use self::special::{gen_castling, gen_pawn_double_step};

const CAPACITY: usize = 256;

/// Stack-allocated set of destinations. Capacity 256 covers a queen on the
/// largest supported board.
#[derive(Clone)]
pub struct MoveList {
    cells: [Position; CAPACITY],
    len: u16,
}

impl MoveList {
    /// Create an empty list.
    pub fn new() -> MoveList {
        MoveList {
            cells: [Position::new(0, 0); CAPACITY],
            len: 0,
        }
    }

    /// Add a destination. Duplicates are ignored.
    #[inline]
    pub fn push(&mut self, dest: Position) {
        if self.contains(dest) {
            return;
        }
        debug_assert!((self.len as usize) < CAPACITY);
        self.cells[self.len as usize] = dest;
        self.len += 1;
    }

    /// Return `true` if `dest` is in the list.
    #[inline]
    pub fn contains(&self, dest: Position) -> bool {
        self.as_slice().contains(&dest)
    }

    /// Keep only the destinations for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(Position) -> bool) {
        let mut write = 0;
        for read in 0..self.len as usize {
            let dest = self.cells[read];
            if keep(dest) {
                self.cells[write] = dest;
                write += 1;
            }
        }
        self.len = write as u16;
    }

    /// Return the number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the destinations in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.cells[..self.len as usize]
    }

    /// Return the destinations sorted by rank, then file.
    pub fn sorted(&self) -> Vec<Position> {
        let mut cells = self.as_slice().to_vec();
        cells.sort_by_key(|p| (p.rank(), p.file()));
        cells
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Table destinations for a piece, before special rules and path filtering.
///
/// Returns an empty list for a handle that no longer resolves.
pub fn generate_candidates(board: &Board, table: &MovementTable, id: PieceId) -> MoveList {
    let mut list = MoveList::new();
    if let Some(piece) = board.get(id) {
        gen_table_moves(board, table, piece, &mut list);
    }
    list
}

/// Every destination the piece may legally move to right now.
///
/// Check safety is not considered: a move that leaves the own king
/// capturable is still listed.
pub fn generate_legal_moves(board: &Board, table: &MovementTable, id: PieceId) -> MoveList {
    let mut list = MoveList::new();
    let Some(piece) = board.get(id) else {
        return list;
    };

    gen_table_moves(board, table, piece, &mut list);
    gen_pawn_double_step(board, piece, &mut list);
    gen_castling(board, piece, &mut list);
    retain_clear_paths(board, piece, &mut list);
    list
}

/// Return `true` if `dest` is currently a legal destination for the piece.
pub fn is_legal(board: &Board, table: &MovementTable, id: PieceId, dest: Position) -> bool {
    generate_legal_moves(board, table, id).contains(dest)
}
