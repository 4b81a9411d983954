//! 局面の JSON 表現（ツールの出力用）
//!
//! 盤上の駒は空きマスを省いた一覧で持つ。手番・駒種は `Side` / `PieceKind` の
//! serde 表現（snake_case）をそのまま使う。

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Hand, PieceKind, Side, Square};

/// 盤上の駒1枚
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedPiece {
    /// USI 形式のマス（"7g" など）
    pub square: String,
    pub side: Side,
    pub kind: PieceKind,
}

/// 持ち駒1種
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeldPieces {
    pub kind: PieceKind,
    pub count: u8,
}

/// 局面のスナップショット
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionView {
    pub side_to_move: Side,
    /// 行優先（一段目の9筋から）
    pub pieces: Vec<PlacedPiece>,
    pub black_hand: Vec<HeldPieces>,
    pub white_hand: Vec<HeldPieces>,
    pub sfen: String,
}

/// 指し手列を再生した結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplaySummary {
    /// 適用できた指し手（USI）
    pub moves: Vec<String>,
    pub position: PositionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn held(hand: &Hand) -> Vec<HeldPieces> {
    hand.iter().map(|(kind, count)| HeldPieces { kind, count }).collect()
}

impl PositionView {
    pub fn new(pos: &Position) -> Self {
        let pieces = Square::all()
            .filter_map(|sq| {
                pos.piece_at(sq).map(|piece| PlacedPiece {
                    square: sq.to_usi(),
                    side: piece.side,
                    kind: piece.kind,
                })
            })
            .collect();
        PositionView {
            side_to_move: pos.side_to_move(),
            pieces,
            black_hand: held(pos.hand(Side::Black)),
            white_hand: held(pos.hand(Side::White)),
            sfen: super::to_sfen(pos),
        }
    }

    /// `square`（USI 形式）の駒
    pub fn piece_on(&self, square: &str) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|p| p.square == square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_sfen;

    #[test]
    fn test_position_view_lists_only_occupied_squares() {
        let pos = parse_sfen("4k4/9/9/9/9/9/9/9/4K3+R w B2P 1").unwrap();
        let view = PositionView::new(&pos);
        assert_eq!(view.side_to_move, Side::White);
        assert_eq!(view.pieces.len(), 3);
        assert_eq!(view.pieces[0].square, "5a");

        let dragon = view.piece_on("1i").unwrap();
        assert_eq!((dragon.side, dragon.kind), (Side::Black, PieceKind::Dragon));
        assert_eq!(
            view.black_hand,
            vec![
                HeldPieces { kind: PieceKind::Bishop, count: 1 },
                HeldPieces { kind: PieceKind::Pawn, count: 2 },
            ]
        );
        assert!(view.white_hand.is_empty());
    }

    #[test]
    fn test_position_view_serialises_typed_fields() {
        let view = PositionView::new(&Position::startpos());
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["side_to_move"], "black");
        assert_eq!(value["pieces"].as_array().unwrap().len(), 40);
        assert_eq!(value["pieces"][0]["kind"], "lance");
        assert_eq!(value["pieces"][0]["side"], "white");

        let back: PositionView = serde_json::from_value(value).unwrap();
        assert_eq!(back, view);
    }
}
