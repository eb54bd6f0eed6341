//! Path obstruction.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::{Offset, Position};

use super::MoveList;

/// Iterate over the cells strictly between `from` and `to`.
///
/// Only straight and diagonal lines have intermediate cells; any other pair
/// (a knight leap, for instance) yields nothing.
pub(crate) fn between(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let delta = from.offset_to(to);
    let (adx, ady) = (delta.dx.unsigned_abs(), delta.dy.unsigned_abs());
    let aligned = adx == 0 || ady == 0 || adx == ady;
    let steps = if aligned { adx.max(ady) as i8 } else { 0 };
    let step = delta.signum();

    (1..steps).map(move |i| from + Offset::new(step.dx * i, step.dy * i))
}

/// Return `true` if nothing stands strictly between `from` and `to`.
#[inline]
pub(crate) fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    between(from, to).all(|cell| !board.is_occupied(cell))
}

/// Drop candidates whose path is blocked or whose target holds a friendly piece.
///
/// Knights jump, so their candidates are left untouched.
pub(super) fn retain_clear_paths(board: &Board, piece: &Piece, list: &mut MoveList) {
    if piece.kind() == PieceKind::Knight {
        return;
    }
    let origin = piece.position();
    let team = piece.team();
    list.retain(|dest| {
        is_path_clear(board, origin, dest) && board.team_at(dest) != Some(team)
    });
}
