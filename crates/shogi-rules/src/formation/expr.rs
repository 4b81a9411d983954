//! 駒配置の条件式
//!
//! 座標はすべて先手視点で書き、後手について評価するときは盤を180度回して読む。

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{BOARD_SIZE, Piece, PieceKind, Side, Square};

/// 駒配置の条件（先手視点）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// 指定のマスに自分の駒がある。`None` の軸はその段（筋）全体を探す
    Piece {
        kind: PieceKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        row: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        col: Option<u8>,
    },
    /// すべて満たす
    All(Vec<Condition>),
    /// いずれかを満たす
    Any(Vec<Condition>),
    /// 相手側について評価する
    Opponent(Box<Condition>),
}

impl Condition {
    /// 行・列とも指定した駒条件
    pub fn at(kind: PieceKind, row: u8, col: u8) -> Condition {
        Condition::Piece { kind, row: Some(row), col: Some(col) }
    }

    /// 列を問わない駒条件
    pub fn on_row(kind: PieceKind, row: u8) -> Condition {
        Condition::Piece { kind, row: Some(row), col: None }
    }

    /// 行を問わない駒条件
    pub fn on_col(kind: PieceKind, col: u8) -> Condition {
        Condition::Piece { kind, row: None, col: Some(col) }
    }

    pub fn opponent(inner: Condition) -> Condition {
        Condition::Opponent(Box::new(inner))
    }

    /// `side` の視点で局面が条件を満たすか
    pub fn evaluate(&self, position: &Position, side: Side) -> bool {
        match self {
            Condition::Piece { kind, row, col } => has_piece(position, *kind, *row, *col, side),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(position, side)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(position, side)),
            Condition::Opponent(inner) => inner.evaluate(position, side.opponent()),
        }
    }

    /// 範囲外の座標を含む最初の駒条件
    pub(crate) fn find_out_of_range(&self) -> Option<&Condition> {
        match self {
            Condition::Piece { row, col, .. } => {
                let out = |axis: &Option<u8>| axis.is_some_and(|v| usize::from(v) >= BOARD_SIZE);
                (out(row) || out(col)).then_some(self)
            }
            Condition::All(conditions) | Condition::Any(conditions) => {
                conditions.iter().find_map(Condition::find_out_of_range)
            }
            Condition::Opponent(inner) => inner.find_out_of_range(),
        }
    }
}

fn has_piece(position: &Position, kind: PieceKind, row: Option<u8>, col: Option<u8>, side: Side) -> bool {
    let target = Piece::new(kind, side);
    let axis = |fixed: Option<u8>| -> Option<RangeInclusive<u8>> {
        match fixed {
            None => Some(0..=8),
            Some(v) if usize::from(v) < BOARD_SIZE => {
                let v = if side == Side::White { 8 - v } else { v };
                Some(v..=v)
            }
            Some(_) => None,
        }
    };
    let (Some(rows), Some(cols)) = (axis(row), axis(col)) else {
        return false;
    };
    rows.flat_map(|r| cols.clone().map(move |c| Square::at(r, c)))
        .any(|sq| position.piece_at(sq) == Some(target))
}
