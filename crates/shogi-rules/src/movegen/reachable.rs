//! 駒の利き（自玉の安全は考慮しない）

use super::directions::steps;
use crate::position::Position;
use crate::types::{Piece, Square};

/// `from` の駒が動けるマス（自玉への王手は無視）
///
/// 飛び方向は最初に駒のあるマスで止まり、そこが相手の駒なら含める。
/// `from` が空なら空の Vec を返す。
pub fn reachable_squares(position: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };
    let mut result = Vec::with_capacity(16);
    for step in steps(piece.kind) {
        let step = step.for_side(piece.side);
        let mut cursor = from;
        while let Some(next) = cursor.offset(step.d_row, step.d_col) {
            match position.piece_at(next) {
                Some(other) => {
                    if other.side != piece.side {
                        result.push(next);
                    }
                    break;
                }
                None => result.push(next),
            }
            if !step.slide {
                break;
            }
            cursor = next;
        }
    }
    result
}

/// `from` にある `piece` が `target` に利いているか
pub fn attacks(position: &Position, from: Square, piece: Piece, target: Square) -> bool {
    steps(piece.kind).iter().any(|step| {
        let step = step.for_side(piece.side);
        let mut cursor = from;
        while let Some(next) = cursor.offset(step.d_row, step.d_col) {
            if next == target {
                return true;
            }
            if !step.slide || position.piece_at(next).is_some() {
                return false;
            }
            cursor = next;
        }
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_sfen;
    use crate::types::{PieceKind, Side};

    fn sq(s: &str) -> Square {
        Square::from_usi(s).unwrap()
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    #[test]
    fn test_pawn_and_knight_in_startpos() {
        let pos = Position::startpos();
        assert_eq!(reachable_squares(&pos, sq("7g")), vec![sq("7f")]);
        assert_eq!(reachable_squares(&pos, sq("7c")), vec![sq("7d")]);
        // 桂は前方の自駒に阻まれない（跳ぶ）が、跳び先が自駒なら動けない
        assert!(reachable_squares(&pos, sq("8i")).is_empty());
        assert!(reachable_squares(&pos, sq("5e")).is_empty());
    }

    #[test]
    fn test_rook_stops_at_first_piece() {
        let pos = parse_sfen("4k4/9/4p4/9/9/9/9/4R4/4K4 b - 1").unwrap();
        let squares = sorted(reachable_squares(&pos, sq("5h")));
        // 上方向は 5g..5c（5c は相手の歩を取る）、下は自玉で止まる、左右は端まで
        assert!(squares.contains(&sq("5c")));
        assert!(!squares.contains(&sq("5b")));
        assert!(!squares.contains(&sq("5i")));
        assert!(squares.contains(&sq("9h")));
        assert!(squares.contains(&sq("1h")));
        assert_eq!(squares.len(), 5 + 8);
    }

    #[test]
    fn test_white_knight_jumps_downward() {
        let pos = parse_sfen("4k4/9/9/9/4n4/9/9/9/4K4 w - 1").unwrap();
        let squares = sorted(reachable_squares(&pos, sq("5e")));
        assert_eq!(squares, sorted(vec![sq("6g"), sq("4g")]));
    }

    #[test]
    fn test_dragon_and_horse_steps() {
        let pos = parse_sfen("9/9/9/9/4+R4/9/9/9/9 b - 1").unwrap();
        assert_eq!(reachable_squares(&pos, sq("5e")).len(), 16 + 4);
        let pos = parse_sfen("9/9/9/9/4+B4/9/9/9/9 b - 1").unwrap();
        assert_eq!(reachable_squares(&pos, sq("5e")).len(), 16 + 4);
    }

    #[test]
    fn test_attacks_respects_blockers() {
        let pos = parse_sfen("4k4/9/4P4/9/9/9/9/4L4/4K4 b - 1").unwrap();
        let lance = Piece::new(PieceKind::Lance, Side::Black);
        assert!(attacks(&pos, sq("5h"), lance, sq("5d")));
        assert!(attacks(&pos, sq("5h"), lance, sq("5c")));
        assert!(!attacks(&pos, sq("5h"), lance, sq("5a")));
        assert!(!attacks(&pos, sq("5h"), lance, sq("5i")));
    }
}
