//! 飛び駒の筋（角道・飛車道）を調べる補助関数

use serde::Serialize;

use crate::position::Position;
use crate::types::{Side, Square};

/// 盤を3段ずつに分けた領域（`side` から見て）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// 自陣
    Own,
    /// 中段
    Neutral,
    /// 敵陣
    Opponent,
}

impl Zone {
    pub fn of(row: u8, side: Side) -> Zone {
        match side.relative_row(row) {
            0..=2 => Zone::Own,
            3..=5 => Zone::Neutral,
            _ => Zone::Opponent,
        }
    }
}

fn ray(origin: Square, dir: (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(origin.offset(dir.0, dir.1), move |sq| sq.offset(dir.0, dir.1))
}

/// `origin` から `dir` 方向に進んで、途中の駒に遮られずに `target` へ届くか
///
/// `target` 自体に駒があってもよい。方向上にない場合は false。
pub fn is_path_clear_to(position: &Position, origin: Square, target: Square, dir: (i8, i8)) -> bool {
    for sq in ray(origin, dir) {
        if sq == target {
            return true;
        }
        if !position.is_empty_at(sq) {
            return false;
        }
    }
    false
}

/// `origin` から `dir` 方向に続く空きマスの数
pub fn open_range(position: &Position, origin: Square, dir: (i8, i8)) -> u8 {
    ray(origin, dir).take_while(|&sq| position.is_empty_at(sq)).count() as u8
}

/// `origin` から `dir` 方向に空きマスを辿って届く最も遠い領域
pub fn farthest_zone(position: &Position, origin: Square, dir: (i8, i8), side: Side) -> Zone {
    ray(origin, dir)
        .take_while(|&sq| position.is_empty_at(sq))
        .last()
        .map_or(Zone::of(origin.row(), side), |sq| Zone::of(sq.row(), side))
}
