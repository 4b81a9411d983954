//! 局面（Position）
//!
//! 盤上 81 マス、両者の持ち駒、手番からなる値型。
//! 局面を「変える」操作はすべて新しい局面を返し、共有された局面を書き換えない。

mod apply;

pub(crate) use apply::simulate;
pub use apply::{apply_move, play_move, play_usi};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Hand, Piece, PieceKind, Side, Square};

/// 平手初期局面の SFEN
pub const SFEN_STARTPOS: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Lance,
    PieceKind::Knight,
    PieceKind::Silver,
    PieceKind::Gold,
    PieceKind::King,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
];

/// 局面
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行優先 81 マス
    board: Vec<Option<Piece>>,
    hands: [Hand; Side::NUM],
    side_to_move: Side,
}

impl Default for Position {
    fn default() -> Self {
        Position::empty()
    }
}

impl Position {
    /// 駒のない盤、持ち駒なし、先手番
    pub fn empty() -> Position {
        Position {
            board: vec![None; Square::NUM],
            hands: [Hand::EMPTY; Side::NUM],
            side_to_move: Side::Black,
        }
    }

    /// 平手初期局面
    pub fn startpos() -> Position {
        let mut pos = Position::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            pos.set_piece(Square::at(0, col), Some(Piece::new(kind, Side::White)));
            pos.set_piece(Square::at(2, col), Some(Piece::new(PieceKind::Pawn, Side::White)));
            pos.set_piece(Square::at(6, col), Some(Piece::new(PieceKind::Pawn, Side::Black)));
            pos.set_piece(Square::at(8, col), Some(Piece::new(kind, Side::Black)));
        }
        pos.set_piece(Square::at(1, 1), Some(Piece::new(PieceKind::Rook, Side::White)));
        pos.set_piece(Square::at(1, 7), Some(Piece::new(PieceKind::Bishop, Side::White)));
        pos.set_piece(Square::at(7, 1), Some(Piece::new(PieceKind::Bishop, Side::Black)));
        pos.set_piece(Square::at(7, 7), Some(Piece::new(PieceKind::Rook, Side::Black)));
        pos
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.board[sq.index()].is_none()
    }

    /// マスの内容を書き換える（局面の構築用）
    #[inline]
    pub fn set_piece(&mut self, sq: Square, cell: Option<Piece>) {
        self.board[sq.index()] = cell;
    }

    /// マスの内容を書き換えた新しい局面を返す
    #[must_use]
    pub fn with_piece(mut self, sq: Square, cell: Option<Piece>) -> Position {
        self.set_piece(sq, cell);
        self
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// 手番を変えた新しい局面を返す
    #[must_use]
    pub fn with_side_to_move(mut self, side: Side) -> Position {
        self.side_to_move = side;
        self
    }

    #[inline]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side.index()]
    }

    #[inline]
    pub fn hand_mut(&mut self, side: Side) -> &mut Hand {
        &mut self.hands[side.index()]
    }

    pub fn add_to_hand(&mut self, side: Side, kind: PieceKind) -> Result<()> {
        self.hands[side.index()].add(kind)
    }

    /// 持っていない駒種の削除は `InvariantViolation`
    pub fn remove_from_hand(&mut self, side: Side, kind: PieceKind) -> Result<()> {
        self.hands[side.index()].remove(kind)
    }

    /// 玉の位置（複数あれば行優先で最初のもの）
    pub fn king_square(&self, side: Side) -> Option<Square> {
        let king = Piece::new(PieceKind::King, side);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// 指定手番の駒を行優先で列挙
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.side == side)
    }

    /// 盤上の全駒を行優先で列挙
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// 盤上の駒数
    pub fn piece_count(&self) -> usize {
        self.board.iter().flatten().count()
    }
}
