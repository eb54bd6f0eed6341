//! Raw destinations straight from the movement tables.

use crate::board::Board;
use crate::movement::MovementTable;
use crate::piece::Piece;

use super::MoveList;

/// Push every table destination for `piece`, before path filtering.
///
/// Move-only offsets need an empty target; move-or-capture offsets need an
/// opposing piece on the target. Off-board targets are skipped.
pub(super) fn gen_table_moves(
    board: &Board,
    table: &MovementTable,
    piece: &Piece,
    list: &mut MoveList,
) {
    let origin = piece.position();
    let team = piece.team();
    let size = board.size();

    for offset in table.move_only(piece.kind(), team) {
        let dest = origin + offset;
        if dest.is_on_board(size) && !board.is_occupied(dest) {
            list.push(dest);
        }
    }

    for offset in table.move_or_capture(piece.kind(), team) {
        let dest = origin + offset;
        if dest.is_on_board(size) && board.team_at(dest) == Some(team.flip()) {
            list.push(dest);
        }
    }
}
