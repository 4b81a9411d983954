//! 駒打ちの制限（行き所のない段・二歩・打ち歩詰め）

use super::check::is_checkmate;
use crate::error::IllegalMove;
use crate::position::Position;
use crate::types::{Piece, PieceKind, Side, Square};

/// 指定の筋（col）に `side` の成っていない歩があるか
pub fn has_pawn_on_file(position: &Position, side: Side, col: u8) -> bool {
    let pawn = Piece::new(PieceKind::Pawn, side);
    (0..9u8).any(|row| position.piece_at(Square::at(row, col)) == Some(pawn))
}

/// 打った駒が以後動けない段か
fn is_dead_rank(kind: PieceKind, side: Side, to: Square) -> bool {
    let relative = side.relative_row(to.row());
    match kind {
        PieceKind::Pawn | PieceKind::Lance => relative == 8,
        PieceKind::Knight => relative >= 7,
        _ => false,
    }
}

/// 歩を打って相手玉が詰むか
///
/// 歩の利きが相手玉に当たらない場合は詰み判定を省略する。
pub fn is_pawn_drop_mate(position: &Position, side: Side, to: Square) -> bool {
    let opponent = side.opponent();
    let Some(king) = position.king_square(opponent) else {
        return false;
    };
    if to.offset(side.forward(), 0) != Some(king) {
        return false;
    }

    let mut next = position.clone();
    next.set_piece(to, Some(Piece::new(PieceKind::Pawn, side)));
    // 持ち駒の有無は打ち歩詰めの判定に影響しないので、無ければそのまま試す
    let _ = next.remove_from_hand(side, PieceKind::Pawn);
    next.set_side_to_move(opponent);
    is_checkmate(&next, opponent)
}

/// 駒打ちの制限に掛かる理由（持ち駒の有無と自玉の安全は見ない）
pub fn drop_rejection(
    position: &Position,
    kind: PieceKind,
    side: Side,
    to: Square,
) -> Option<IllegalMove> {
    if kind.hand_index().is_none() {
        return Some(IllegalMove::NotDroppable);
    }
    if !position.is_empty_at(to) {
        return Some(IllegalMove::Occupied);
    }
    if is_dead_rank(kind, side, to) {
        return Some(IllegalMove::DeadRank);
    }
    if kind == PieceKind::Pawn {
        if has_pawn_on_file(position, side, to.col()) {
            return Some(IllegalMove::TwoPawns);
        }
        if is_pawn_drop_mate(position, side, to) {
            return Some(IllegalMove::DropPawnMate);
        }
    }
    None
}

/// `side` が `kind` を打てる空きマス
///
/// 段の制限、二歩、打ち歩詰めを除外する。持ち駒にあるかどうかは問わない。
pub fn drop_squares(position: &Position, kind: PieceKind, side: Side) -> Vec<Square> {
    if kind.hand_index().is_none() {
        return Vec::new();
    }
    Square::all().filter(|&sq| drop_rejection(position, kind, side, sq).is_none()).collect()
}
