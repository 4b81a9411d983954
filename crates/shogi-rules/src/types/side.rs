//! 手番（Side）

use serde::{Deserialize, Serialize};

/// 手番（先手/後手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Side {
    /// 先手
    Black = 0,
    /// 後手
    White = 1,
}

impl Side {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 前進方向の行差分（先手は上、後手は下）
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Black => -1,
            Side::White => 1,
        }
    }

    /// 指定の行が敵陣（成れる3段）かどうか
    #[inline]
    pub const fn in_promotion_zone(self, row: u8) -> bool {
        match self {
            Side::Black => row <= 2,
            Side::White => row >= 6,
        }
    }

    /// 自陣から数えた段（0 = 自陣最奥, 8 = 敵陣最奥）
    #[inline]
    pub const fn relative_row(self, row: u8) -> u8 {
        match self {
            Side::Black => 8 - row,
            Side::White => row,
        }
    }

    /// SFEN の手番文字
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self {
            Side::Black => 'b',
            Side::White => 'w',
        }
    }

    /// 日本語表記（先手/後手）
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Black => "先手",
            Side::White => "後手",
        }
    }

    /// 盤面図で使う一文字の手番記号
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Side::Black => '先',
            Side::White => '後',
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}
