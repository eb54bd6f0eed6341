//! Conditional candidates: the pawn double step and castling.

use crate::board::Board;
use crate::castle::CastleSide;
use crate::movement::mirror;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::{Offset, Position};

use super::MoveList;
use super::path::is_path_clear;

/// Two cells forward for a pawn that has not moved yet.
///
/// Both the skipped cell and the landing cell must be empty: the double step
/// neither jumps nor captures.
pub(super) fn gen_pawn_double_step(board: &Board, piece: &Piece, list: &mut MoveList) {
    if piece.kind() != PieceKind::Pawn || piece.has_moved() {
        return;
    }
    let origin = piece.position();
    let team = piece.team();
    let skipped = origin + mirror(Offset::new(0, 1), team);
    let dest = origin + mirror(Offset::new(0, 2), team);

    if dest.is_on_board(board.size()) && !board.is_occupied(skipped) && !board.is_occupied(dest) {
        list.push(dest);
    }
}

/// Two cells sideways for a king that may still castle.
///
/// Each side needs its own unmoved friendly rook in the corner of the king's
/// rank, and every cell between king and rook empty.
pub(super) fn gen_castling(board: &Board, piece: &Piece, list: &mut MoveList) {
    if piece.kind() != PieceKind::King || piece.has_moved() || piece.has_castled() {
        return;
    }
    let origin = piece.position();

    for side in CastleSide::ALL {
        let rook_pos = Position::new(side.rook_file(board.size()), origin.rank());
        if !can_castle_with(board, piece, rook_pos) {
            continue;
        }
        let dest = side.king_destination(origin);
        if dest.is_on_board(board.size()) {
            list.push(dest);
        }
    }
}

fn can_castle_with(board: &Board, king: &Piece, rook_pos: Position) -> bool {
    let Some(rook) = board.piece_on(rook_pos) else {
        return false;
    };
    rook.kind() == PieceKind::Rook
        && rook.team() == king.team()
        && !rook.has_moved()
        && is_path_clear(board, king.position(), rook_pos)
}
