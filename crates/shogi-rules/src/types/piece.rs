//! 駒種（PieceKind）と駒（Piece）
//!
//! 駒種ごとの表記・成り対応は `PIECE_TABLE` にまとめ、各メソッドはそこを引くだけにする。

use serde::{Deserialize, Serialize};

use super::Side;

/// 駒種（成駒を含む14種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Rook = 1,
    Bishop = 2,
    Gold = 3,
    Silver = 4,
    Knight = 5,
    Lance = 6,
    Pawn = 7,
    /// 竜（成飛）
    Dragon = 8,
    /// 馬（成角）
    Horse = 9,
    ProSilver = 10,
    ProKnight = 11,
    ProLance = 12,
    ProPawn = 13,
}

/// 駒種ごとの静的プロパティ
#[derive(Debug)]
pub struct PieceInfo {
    /// 棋譜で使う駒名
    pub name: &'static str,
    /// 盤面図で使う一文字表記
    pub glyph: char,
    /// USI/SFEN の駒文字（成駒は元の駒と同じ文字）
    pub letter: char,
    /// 成った後の駒種
    pub promoted: Option<PieceKind>,
    /// 成る前の駒種（成駒でなければ自身）
    pub base: PieceKind,
}

/// 駒種のプロパティ表（`PieceKind as usize` で引く）
pub static PIECE_TABLE: [PieceInfo; PieceKind::NUM] = [
    PieceInfo { name: "王", glyph: '玉', letter: 'K', promoted: None, base: PieceKind::King },
    PieceInfo {
        name: "飛",
        glyph: '飛',
        letter: 'R',
        promoted: Some(PieceKind::Dragon),
        base: PieceKind::Rook,
    },
    PieceInfo {
        name: "角",
        glyph: '角',
        letter: 'B',
        promoted: Some(PieceKind::Horse),
        base: PieceKind::Bishop,
    },
    PieceInfo { name: "金", glyph: '金', letter: 'G', promoted: None, base: PieceKind::Gold },
    PieceInfo {
        name: "銀",
        glyph: '銀',
        letter: 'S',
        promoted: Some(PieceKind::ProSilver),
        base: PieceKind::Silver,
    },
    PieceInfo {
        name: "桂",
        glyph: '桂',
        letter: 'N',
        promoted: Some(PieceKind::ProKnight),
        base: PieceKind::Knight,
    },
    PieceInfo {
        name: "香",
        glyph: '香',
        letter: 'L',
        promoted: Some(PieceKind::ProLance),
        base: PieceKind::Lance,
    },
    PieceInfo {
        name: "歩",
        glyph: '歩',
        letter: 'P',
        promoted: Some(PieceKind::ProPawn),
        base: PieceKind::Pawn,
    },
    PieceInfo { name: "竜", glyph: '龍', letter: 'R', promoted: None, base: PieceKind::Rook },
    PieceInfo { name: "馬", glyph: '馬', letter: 'B', promoted: None, base: PieceKind::Bishop },
    PieceInfo { name: "成銀", glyph: '全', letter: 'S', promoted: None, base: PieceKind::Silver },
    PieceInfo { name: "成桂", glyph: '圭', letter: 'N', promoted: None, base: PieceKind::Knight },
    PieceInfo { name: "成香", glyph: '杏', letter: 'L', promoted: None, base: PieceKind::Lance },
    PieceInfo { name: "と", glyph: 'と', letter: 'P', promoted: None, base: PieceKind::Pawn },
];

impl PieceKind {
    /// 駒種の数
    pub const NUM: usize = 14;

    /// 全駒種
    pub const ALL: [PieceKind; PieceKind::NUM] = [
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
        PieceKind::Dragon,
        PieceKind::Horse,
        PieceKind::ProSilver,
        PieceKind::ProKnight,
        PieceKind::ProLance,
        PieceKind::ProPawn,
    ];

    /// 持ち駒になる駒種（SFEN の持ち駒順: 飛 角 金 銀 桂 香 歩）
    pub const HAND_KINDS: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    #[inline]
    pub fn info(self) -> &'static PieceInfo {
        &PIECE_TABLE[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[inline]
    pub fn glyph(self) -> char {
        self.info().glyph
    }

    #[inline]
    pub fn letter(self) -> char {
        self.info().letter
    }

    /// 成れる駒種か
    #[inline]
    pub fn can_promote(self) -> bool {
        self.info().promoted.is_some()
    }

    /// 成駒か
    #[inline]
    pub fn is_promoted(self) -> bool {
        self.info().base != self
    }

    /// 成った駒種（成れなければ None）
    #[inline]
    pub fn promote(self) -> Option<PieceKind> {
        self.info().promoted
    }

    /// 成る前の駒種（成駒でなければ自身）
    #[inline]
    pub fn demote(self) -> PieceKind {
        self.info().base
    }

    /// 持ち駒配列のインデックス（玉・成駒は None）
    #[inline]
    pub fn hand_index(self) -> Option<usize> {
        PieceKind::HAND_KINDS.iter().position(|&k| k == self)
    }

    /// USI/SFEN の駒文字から基本駒種へ（大文字小文字は問わない）
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'G' => Some(PieceKind::Gold),
            'S' => Some(PieceKind::Silver),
            'N' => Some(PieceKind::Knight),
            'L' => Some(PieceKind::Lance),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// 飛び駒（直線に何マスでも動ける方向を持つ）か
    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(
            self,
            PieceKind::Rook
                | PieceKind::Bishop
                | PieceKind::Lance
                | PieceKind::Dragon
                | PieceKind::Horse
        )
    }
}

/// 盤上の駒（駒種 + 所有者）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece { kind, side }
    }

    /// SFEN 表記（後手は小文字、成駒は '+' 付き）
    pub fn to_sfen(self) -> String {
        let letter = match self.side {
            Side::Black => self.kind.letter(),
            Side::White => self.kind.letter().to_ascii_lowercase(),
        };
        if self.kind.is_promoted() { format!("+{letter}") } else { letter.to_string() }
    }
}
