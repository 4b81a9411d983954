//! 駒の動きと合法性
//!
//! - `directions`: 駒種ごとの移動方向表
//! - `reachable`: 利き（自玉の安全は見ない）
//! - `drops`: 駒打ちの制限
//! - `check`: 王手・詰み
//! - `legality`: 合法性検証と合法手の列挙

mod check;
mod directions;
mod drops;
mod legality;
mod reachable;

pub use check::{is_attacked, is_checkmate, is_in_check};
pub use directions::{DIAGONALS, ORTHOGONALS, Step, steps};
pub use drops::{drop_rejection, drop_squares, has_pawn_on_file, is_pawn_drop_mate};
pub use legality::{check_move, check_move_as, is_legal_move, is_stalemate, legal_moves, legal_moves_for};
pub use reachable::{attacks, reachable_squares};
