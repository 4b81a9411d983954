//! 基本型（マス・駒種・手番・持ち駒・指し手）

mod hand;
mod moves;
mod piece;
mod side;
mod square;

pub use hand::Hand;
pub use moves::Move;
pub use piece::{PIECE_TABLE, Piece, PieceInfo, PieceKind};
pub use side::Side;
pub use square::{BOARD_SIZE, KANJI_RANKS, Square};
