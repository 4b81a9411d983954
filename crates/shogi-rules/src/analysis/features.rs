//! 指し手の特徴量抽出（解説生成用）

use serde::Serialize;

use crate::movegen::is_in_check;
use crate::position::{Position, apply_move};
use crate::types::{Move, PieceKind};

/// 指し手の特徴量（JSON シリアライズ対応）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveFeatures {
    /// 動かした駒の基本駒種（"P","L","N","S","B","R","G","K"）
    pub moved_piece: char,
    /// 動かした駒が既に成り駒だったか
    pub moved_piece_promoted: bool,
    /// 駒取りかどうか
    pub is_capture: bool,
    /// 取った駒の基本駒種
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_piece: Option<char>,
    /// 取った駒が成り駒だったか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_piece_promoted: Option<bool>,
    /// 成りかどうか
    pub is_promote: bool,
    /// 駒打ちかどうか
    pub is_drop: bool,
    /// 王手かどうか
    pub is_check: bool,
}

/// 手番側の指し手の特徴量を抽出する。
///
/// 動かす駒がない、手番側の駒でない、持っていない駒を打つなど、
/// 局面に適用できない指し手は `None` を返す。
pub fn extract_move_features(position: &Position, mv: Move) -> Option<MoveFeatures> {
    let side = position.side_to_move();
    let (moved, captured) = match mv {
        Move::Drop { kind, .. } => {
            if !position.hand(side).contains(kind) || !position.is_empty_at(mv.to()) {
                return None;
            }
            (kind, None)
        }
        Move::Board { from, to, .. } => {
            let piece = position.piece_at(from).filter(|p| p.side == side)?;
            let target = position.piece_at(to);
            if target.is_some_and(|t| t.side == side) {
                return None;
            }
            (piece.kind, target.map(|t| t.kind))
        }
    };
    if mv.is_promote() && !moved.can_promote() {
        return None;
    }

    let next = apply_move(position, mv).ok()?;
    Some(MoveFeatures {
        moved_piece: moved.demote().letter(),
        moved_piece_promoted: moved.is_promoted(),
        is_capture: captured.is_some(),
        captured_piece: captured.map(|k| k.demote().letter()),
        captured_piece_promoted: captured.map(PieceKind::is_promoted),
        is_promote: mv.is_promote(),
        is_drop: mv.is_drop(),
        is_check: is_in_check(&next, side.opponent()),
    })
}
