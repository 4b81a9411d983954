//! 王手・詰みの判定

use super::drops::{has_pawn_on_file, is_pawn_drop_mate};
use super::reachable::{attacks, reachable_squares};
use crate::position::Position;
use crate::position::simulate;
use crate::types::{Move, PieceKind, Side, Square};

/// `target` に `by` の駒が利いているか
pub fn is_attacked(position: &Position, target: Square, by: Side) -> bool {
    position.pieces(by).any(|(from, piece)| attacks(position, from, piece, target))
}

/// `side` の玉に相手の駒が利いているか（玉がなければ false）
pub fn is_in_check(position: &Position, side: Side) -> bool {
    match position.king_square(side) {
        Some(king) => is_attacked(position, king, side.opponent()),
        None => false,
    }
}

/// `mover` が `mv` を指した後も自玉に王手が掛かっているか
///
/// 適用できない手は王手が残るものとして扱う。
pub(crate) fn leaves_in_check(position: &Position, mv: Move, mover: Side) -> bool {
    match simulate(position, mv, mover) {
        Ok(next) => is_in_check(&next, mover),
        Err(_) => true,
    }
}

/// `side` が詰んでいるか
///
/// 王手が掛かっていて、盤上のすべての駒のすべての移動と、
/// 持ち駒のすべての合法な打ち場所を試しても王手が解けない場合に true。
/// 手番は問わない。
pub fn is_checkmate(position: &Position, side: Side) -> bool {
    if !is_in_check(position, side) {
        return false;
    }

    // 成り・不成は王手の解消に影響しないので不成だけを試す
    for (from, _) in position.pieces(side) {
        for to in reachable_squares(position, from) {
            if !leaves_in_check(position, Move::board(from, to, false), side) {
                return false;
            }
        }
    }

    for kind in position.hand(side).kinds() {
        for to in Square::all() {
            if !can_drop_ignoring_pawn_mate(position, kind, side, to) {
                continue;
            }
            let mv = Move::drop(kind, to);
            if leaves_in_check(position, mv, side) {
                continue;
            }
            // 打ち歩詰めの判定は合駒として有効な場合だけ行う
            if kind == PieceKind::Pawn && is_pawn_drop_mate(position, side, to) {
                continue;
            }
            return false;
        }
    }

    true
}

fn can_drop_ignoring_pawn_mate(position: &Position, kind: PieceKind, side: Side, to: Square) -> bool {
    if !position.is_empty_at(to) {
        return false;
    }
    let relative = side.relative_row(to.row());
    match kind {
        PieceKind::Pawn => relative != 8 && !has_pawn_on_file(position, side, to.col()),
        PieceKind::Lance => relative != 8,
        PieceKind::Knight => relative < 7,
        _ => true,
    }
}
