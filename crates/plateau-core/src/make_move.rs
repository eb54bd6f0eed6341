//! Move execution.

use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle::CastleSide;
use crate::movegen::is_legal;
use crate::movement::MovementTable;
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// One piece changing cells as part of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    /// The piece that moved.
    pub piece: PieceId,
    /// Where it stood.
    pub from: Position,
    /// Where it stands now.
    pub to: Position,
}

/// Result of [`attempt_move`].
///
/// A rejected move has every flag cleared and no relocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move was legal and the board changed.
    pub applied: bool,
    /// An opposing piece was taken off the board.
    pub captured: bool,
    /// A pawn became a queen.
    pub promoted: bool,
    /// The king castled and a rook moved with it.
    pub castled: bool,
    /// Handle of the captured piece, no longer valid on the board.
    pub removed: Option<PieceId>,
    /// Every relocated piece: the mover first, then the rook when castling.
    pub relocations: Vec<Relocation>,
}

impl MoveOutcome {
    /// The outcome of a move that was not applied.
    pub fn rejected() -> MoveOutcome {
        MoveOutcome::default()
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.applied {
            return f.write_str("rejected");
        }
        f.write_str("applied")?;
        if self.captured {
            f.write_str(" capture")?;
        }
        if self.promoted {
            f.write_str(" promotion")?;
        }
        if self.castled {
            f.write_str(" castle")?;
        }
        Ok(())
    }
}

/// Move a piece to `dest` if the move is legal right now.
///
/// Legality is checked before anything changes, so the board is either fully
/// updated (capture, rook transfer, promotion, relocation) or left untouched.
/// Whose turn it is is the caller's business.
pub fn attempt_move(
    board: &mut Board,
    table: &MovementTable,
    id: PieceId,
    dest: Position,
) -> MoveOutcome {
    if !is_legal(board, table, id, dest) {
        trace!(piece = %id, to = %dest, "illegal destination");
        return MoveOutcome::rejected();
    }
    let Some(piece) = board.get(id) else {
        return MoveOutcome::rejected();
    };

    let origin = piece.position();
    let size = board.size();
    let promotes = piece.kind() == PieceKind::Pawn && dest.rank() == piece.team().far_rank(size);
    let castle = if piece.kind() == PieceKind::King && !piece.has_moved() {
        CastleSide::from_king_move(origin, dest)
    } else {
        None
    };
    let victim = board.piece_at(dest);

    let mut outcome = MoveOutcome {
        applied: true,
        captured: victim.is_some(),
        promoted: promotes,
        castled: castle.is_some(),
        removed: None,
        relocations: vec![Relocation {
            piece: id,
            from: origin,
            to: dest,
        }],
    };

    if let Some(victim) = victim {
        board.remove(victim);
        outcome.removed = Some(victim);
    }

    if let Some(side) = castle {
        let rook_from = Position::new(side.rook_file(size), origin.rank());
        let rook_to = side.rook_destination(dest);
        if let Some(rook) = board.piece_at(rook_from) {
            board.relocate(rook, rook_to);
            outcome.relocations.push(Relocation {
                piece: rook,
                from: rook_from,
                to: rook_to,
            });
        }
        if let Some(king) = board.get_mut(id) {
            king.mark_castled();
        }
    }

    if promotes && let Some(pawn) = board.get_mut(id) {
        pawn.promote();
    }

    board.relocate(id, dest);

    debug!(piece = %id, from = %origin, to = %dest, %outcome, "move applied");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::team::Team;

    fn p(file: i8, rank: i8) -> Position {
        Position::new(file, rank)
    }

    #[test]
    fn quiet_move() {
        let mut board = Board::starting_position(8).unwrap();
        let table = MovementTable::new(8);
        let knight = board.piece_at(p(1, 7)).unwrap();

        let outcome = attempt_move(&mut board, &table, knight, p(2, 5));
        assert!(outcome.applied);
        assert!(!outcome.captured && !outcome.promoted && !outcome.castled);
        assert_eq!(
            outcome.relocations,
            vec![Relocation { piece: knight, from: p(1, 7), to: p(2, 5) }]
        );
        assert_eq!(board.piece_at(p(2, 5)), Some(knight));
        assert!(board.get(knight).unwrap().has_moved());
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut board = Board::starting_position(8).unwrap();
        let table = MovementTable::new(8);
        let before = board.clone();
        let rook = board.piece_at(p(0, 0)).unwrap();

        let outcome = attempt_move(&mut board, &table, rook, p(0, 4));
        assert_eq!(outcome, MoveOutcome::rejected());
        assert_eq!(board, before);
    }

    #[test]
    fn capture_removes_victim() {
        let mut board = Board::empty(8).unwrap();
        let table = MovementTable::new(8);
        let bishop = board
            .add(Piece::new(PieceKind::Bishop, Team::White, p(0, 0)))
            .unwrap();
        let victim = board
            .add(Piece::new(PieceKind::Rook, Team::Black, p(3, 3)))
            .unwrap();

        let outcome = attempt_move(&mut board, &table, bishop, p(3, 3));
        assert!(outcome.applied && outcome.captured);
        assert_eq!(outcome.removed, Some(victim));
        assert!(board.get(victim).is_none());
        assert_eq!(board.piece_at(p(3, 3)), Some(bishop));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn promotion_on_far_rank() {
        let mut board = Board::empty(8).unwrap();
        let table = MovementTable::new(8);
        let pawn = board
            .add(Piece::new(PieceKind::Pawn, Team::White, p(5, 1)).with_moved())
            .unwrap();

        let outcome = attempt_move(&mut board, &table, pawn, p(5, 0));
        assert!(outcome.applied && outcome.promoted);
        assert_eq!(board.get(pawn).unwrap().kind(), PieceKind::Queen);
    }

    #[test]
    fn queen_side_castle_moves_rook() {
        let mut board = Board::empty(8).unwrap();
        let table = MovementTable::new(8);
        let king = board
            .add(Piece::new(PieceKind::King, Team::White, p(4, 7)))
            .unwrap();
        let rook = board
            .add(Piece::new(PieceKind::Rook, Team::White, p(0, 7)))
            .unwrap();

        let outcome = attempt_move(&mut board, &table, king, p(2, 7));
        assert!(outcome.applied && outcome.castled);
        assert_eq!(outcome.relocations.len(), 2);
        assert_eq!(board.piece_at(p(3, 7)), Some(rook));
        assert!(board.get(king).unwrap().has_castled());
        assert!(board.get(rook).unwrap().has_moved());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(format!("{}", MoveOutcome::rejected()), "rejected");
        let outcome = MoveOutcome {
            applied: true,
            captured: true,
            promoted: true,
            ..MoveOutcome::default()
        };
        assert_eq!(format!("{outcome}"), "applied capture promotion");
    }
}
