//! Core board-game types: board storage, movement tables, move generation and
//! move execution.

mod board;
mod castle;
mod error;
mod make_move;
mod movegen;
mod movement;
mod piece;
mod piece_kind;
mod position;
mod team;

pub use board::{Board, PrettyBoard};
pub use castle::CastleSide;
pub use error::BoardError;
pub use make_move::{MoveOutcome, Relocation, attempt_move};
pub use movegen::{MoveList, generate_candidates, generate_legal_moves, is_legal};
pub use movement::{MovementEntry, MovementTable, mirror};
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use position::{Offset, Position};
pub use team::Team;
