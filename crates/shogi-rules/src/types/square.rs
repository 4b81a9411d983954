//! マス（Square）
//!
//! 内部座標は 0 始まりの (row, col) に一本化する。
//! row は段（a/一 = 0）、col は左端の 9 筋を 0 とした列（col = 9 - 筋）。
//! USI 形式 ("7g") と漢数字形式 ("7七") はこの型との変換としてのみ扱う。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 9;

/// 漢数字の段表記（一〜九）
pub const KANJI_RANKS: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 盤上のマス
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// マスの数
    pub const NUM: usize = BOARD_SIZE * BOARD_SIZE;

    /// 範囲チェック付きで生成
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 9 && col < 9 { Some(Square { row, col }) } else { None }
    }

    /// 範囲外はプログラミングエラーとして panic する
    #[inline]
    pub const fn at(row: u8, col: u8) -> Square {
        assert!(row < 9 && col < 9, "square out of range");
        Square { row, col }
    }

    /// 筋（1-9）と段インデックス（0-8）から生成
    #[inline]
    pub const fn from_file_row(file: u8, row: u8) -> Option<Square> {
        if file >= 1 && file <= 9 { Square::new(row, 9 - file) } else { None }
    }

    /// 行優先インデックス（0-80）から生成
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Square::NUM {
            Some(Square { row: (index / BOARD_SIZE) as u8, col: (index % BOARD_SIZE) as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 筋（1-9）
    #[inline]
    pub const fn file(self) -> u8 {
        9 - self.col
    }

    /// 行優先インデックス
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 相対移動。盤外なら None
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..9).contains(&row) && (0..9).contains(&col) {
            Some(Square { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// 盤面を180度回転した位置（後手視点への変換）
    #[inline]
    pub const fn mirror(self) -> Square {
        Square { row: 8 - self.row, col: 8 - self.col }
    }

    /// 全マスを行優先で列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::NUM).filter_map(Square::from_index)
    }

    /// USI形式の文字列（"7g"）
    pub fn to_usi(self) -> String {
        format!("{}{}", self.file(), (b'a' + self.row) as char)
    }

    /// USI形式の文字列からマスに変換
    pub fn from_usi(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'0');
        let row = bytes[1].wrapping_sub(b'a');
        Square::from_file_row(file, row)
    }

    /// 漢数字形式の文字列（"7六"）
    pub fn to_kanji(self) -> String {
        format!("{}{}", self.file(), KANJI_RANKS[self.row as usize])
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), (b'a' + self.row) as char)
    }
}
