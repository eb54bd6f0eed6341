//! The board: piece storage and point lookup.

use std::fmt;

use crate::error::BoardError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::team::Team;

/// Owner of every piece in a game.
///
/// Pieces live in an append-only slot list addressed by [`PieceId`]; a
/// mailbox of cells maps each position to its occupant. At rest no two
/// pieces share a cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Piece slots; `None` once the piece has been removed.
    slots: Vec<Option<Piece>>,
    /// Occupant of each cell, indexed by `rank * size + file`.
    cells: Vec<Option<PieceId>>,
}

impl Board {
    /// Default board size.
    pub const DEFAULT_SIZE: u8 = 8;
    /// Smallest size that fits the standard layout.
    pub const MIN_SIZE: u8 = 8;
    /// Largest size that algebraic notation can name.
    pub const MAX_SIZE: u8 = 26;

    /// Create an empty board of `size` x `size` cells.
    pub fn empty(size: u8) -> Result<Board, BoardError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        let cell_count = size as usize * size as usize;
        Ok(Board {
            size,
            slots: Vec::with_capacity(32),
            cells: vec![None; cell_count],
        })
    }

    /// Create a board holding the standard 32-piece layout.
    ///
    /// Black occupies ranks 0 and 1, White the mirrored last two ranks.
    /// Back row by file: rook, knight, bishop, queen, king, then bishop,
    /// knight, rook counted from the far edge. Extra files on larger boards
    /// stay empty except for pawns.
    pub fn starting_position(size: u8) -> Result<Board, BoardError> {
        let mut board = Board::empty(size)?;
        let last = size as i8 - 1;

        let back_row = [
            (PieceKind::Rook, 0),
            (PieceKind::Rook, last),
            (PieceKind::Knight, 1),
            (PieceKind::Knight, last - 1),
            (PieceKind::Bishop, 2),
            (PieceKind::Bishop, last - 2),
            (PieceKind::Queen, 3),
            (PieceKind::King, 4),
        ];

        for team in [Team::Black, Team::White] {
            let home = team.home_rank(size);
            let pawn_rank = if team.is_reference() { home + 1 } else { home - 1 };

            for file in 0..size as i8 {
                board.add(Piece::new(PieceKind::Pawn, team, Position::new(file, pawn_rank)))?;
            }
            for (kind, file) in back_row {
                board.add(Piece::new(kind, team, Position::new(file, home)))?;
            }
        }

        Ok(board)
    }

    /// Return the number of cells along one edge.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn cell_index(&self, position: Position) -> Option<usize> {
        if position.is_on_board(self.size) {
            Some(position.rank() as usize * self.size as usize + position.file() as usize)
        } else {
            None
        }
    }

    /// Return the handle of the piece on `position`, if any.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<PieceId> {
        self.cell_index(position).and_then(|idx| self.cells[idx])
    }

    /// Return the piece on `position`, if any.
    pub fn piece_on(&self, position: Position) -> Option<&Piece> {
        self.piece_at(position).and_then(|id| self.get(id))
    }

    /// Return the team of the piece on `position`, if any.
    pub fn team_at(&self, position: Position) -> Option<Team> {
        self.piece_on(position).map(Piece::team)
    }

    /// Return `true` if a piece stands on `position`.
    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.piece_at(position).is_some()
    }

    /// Resolve a handle. Returns `None` for removed pieces.
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Place a piece on the board and return its handle.
    pub fn add(&mut self, piece: Piece) -> Result<PieceId, BoardError> {
        let position = piece.position();
        let idx = self.cell_index(position).ok_or(BoardError::OffBoard {
            position,
            size: self.size,
        })?;
        if self.cells[idx].is_some() {
            return Err(BoardError::Occupied { position });
        }

        let id = PieceId::new(self.slots.len());
        self.slots.push(Some(piece));
        self.cells[idx] = Some(id);
        Ok(id)
    }

    /// Take a piece off the board permanently.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.slots.get_mut(id.index())?.take()?;
        if let Some(idx) = self.cell_index(piece.position()) {
            self.cells[idx] = None;
        }
        Some(piece)
    }

    /// Move a piece to an empty cell and mark it as moved.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Position) {
        let Some(from) = self.get(id).map(Piece::position) else {
            return;
        };
        let (Some(from_idx), Some(to_idx)) = (self.cell_index(from), self.cell_index(to)) else {
            return;
        };
        debug_assert!(self.cells[to_idx].is_none(), "relocating onto occupied {to}");

        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(id);
        if let Some(piece) = self.get_mut(id) {
            piece.relocate(to);
        }
    }

    /// Return the number of pieces on the board.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Return `true` if no pieces remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every piece still on the board.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|piece| (PieceId::new(idx), piece)))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("pieces", &self.len())
            .finish()
    }
}

/// Wrapper for printing a board as a grid, rank 0 on top as on screen.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let size = board.size() as i8;
        for rank in 0..size {
            write!(f, "{:>2}  ", rank + 1)?;
            for file in 0..size {
                let c = board
                    .piece_on(Position::new(file, rank))
                    .map_or('.', Piece::letter);
                if file < size - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for file in 0..size {
            let c = (b'a' + file as u8) as char;
            if file < size - 1 {
                write!(f, "{c} ")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
