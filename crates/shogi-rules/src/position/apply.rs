//! 指し手の適用
//!
//! `apply_move` は合法性を再検証しない。構造的に適用できない手は
//! 呼び出し側のバグとして `IllegalApplication` を返し、error ログを残す。

use log::error;

use super::Position;
use crate::error::{Result, ShogiError};
use crate::movegen;
use crate::notation::parse_usi_move;
use crate::types::{Move, Piece, PieceKind, Side};

fn reject(position: &Position, mv: Move, reason: &str) -> ShogiError {
    error!("cannot apply {mv} to {}: {reason}", crate::notation::to_sfen(position));
    ShogiError::IllegalApplication(format!("{mv}: {reason}"))
}

/// 手番側の指し手として適用し、手番を反転した新しい局面を返す
pub fn apply_move(position: &Position, mv: Move) -> Result<Position> {
    place(position, mv, position.side_to_move(), false)
        .map_err(|reason| reject(position, mv, &reason))
}

/// 自玉の安全を調べるための適用。失敗してもログを残さず理由だけを返す
///
/// 不正な入力局面では相手玉を取る手が生成されうる。その場合は玉を盤から除くだけで、
/// 持ち駒には加えない。
pub(crate) fn simulate(
    position: &Position,
    mv: Move,
    mover: Side,
) -> std::result::Result<Position, String> {
    place(position, mv, mover, true)
}

fn place(
    position: &Position,
    mv: Move,
    mover: Side,
    king_capture: bool,
) -> std::result::Result<Position, String> {
    let mut next = position.clone();
    match mv {
        Move::Board { from, to, promote } => {
            let Some(piece) = position.piece_at(from) else {
                return Err("origin square is empty".to_string());
            };
            if piece.side != mover {
                return Err("origin piece belongs to the opponent".to_string());
            }
            let kind = if promote {
                piece.kind.promote().ok_or_else(|| "piece cannot promote".to_string())?
            } else {
                piece.kind
            };
            if let Some(captured) = position.piece_at(to) {
                if captured.side == mover {
                    return Err("destination holds an own piece".to_string());
                }
                if !(king_capture && captured.kind == PieceKind::King) {
                    next.add_to_hand(mover, captured.kind.demote()).map_err(|e| e.to_string())?;
                }
            }
            next.set_piece(from, None);
            next.set_piece(to, Some(Piece::new(kind, mover)));
        }
        Move::Drop { kind, to } => {
            if !position.is_empty_at(to) {
                return Err("drop square is occupied".to_string());
            }
            next.remove_from_hand(mover, kind).map_err(|e| e.to_string())?;
            next.set_piece(to, Some(Piece::new(kind, mover)));
        }
    }
    next.set_side_to_move(mover.opponent());
    Ok(next)
}

/// 合法性を確認してから適用する。反則手は `IllegalMove(理由)`
pub fn play_move(position: &Position, mv: Move) -> Result<Position> {
    movegen::check_move(position, mv)?;
    apply_move(position, mv)
}

/// USI 形式の指し手を解析して `play_move` する
pub fn play_usi(position: &Position, usi: &str) -> Result<Position> {
    let mv = parse_usi_move(usi)?;
    play_move(position, mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMove;
    use crate::notation::parse_sfen;
    use crate::types::Square;

    fn sq(s: &str) -> Square {
        Square::from_usi(s).unwrap()
    }

    #[test]
    fn test_apply_pawn_push() {
        let pos = Position::startpos();
        let next = apply_move(&pos, Move::board(sq("7g"), sq("7f"), false)).unwrap();
        assert_eq!(next.piece_at(sq("7f")), Some(Piece::new(PieceKind::Pawn, Side::Black)));
        assert!(next.is_empty_at(sq("7g")));
        assert_eq!(next.side_to_move(), Side::White);
        // 元の局面は変わらない
        assert!(pos.is_empty_at(sq("7f")));
    }

    #[test]
    fn test_apply_capture_demotes_into_hand() {
        let pos = parse_sfen("4k4/9/9/9/4+r4/9/9/4R4/4K4 b - 1").unwrap();
        let next = apply_move(&pos, Move::board(sq("5h"), sq("5e"), false)).unwrap();
        assert_eq!(next.hand(Side::Black).count(PieceKind::Rook), 1);
        assert_eq!(next.piece_at(sq("5e")), Some(Piece::new(PieceKind::Rook, Side::Black)));
    }

    #[test]
    fn test_apply_promotion_and_drop() {
        let pos = parse_sfen("4k4/9/4P4/9/9/9/9/9/4K4 b G 1").unwrap();
        let next = apply_move(&pos, Move::board(sq("5c"), sq("5b"), true)).unwrap();
        assert_eq!(next.piece_at(sq("5b")), Some(Piece::new(PieceKind::ProPawn, Side::Black)));

        let dropped = apply_move(&pos, Move::drop(PieceKind::Gold, sq("4b"))).unwrap();
        assert_eq!(dropped.piece_at(sq("4b")), Some(Piece::new(PieceKind::Gold, Side::Black)));
        assert!(dropped.hand(Side::Black).is_empty());
    }

    #[test]
    fn test_apply_rejects_structural_violations() {
        let pos = Position::startpos();
        let empty_origin = apply_move(&pos, Move::board(sq("5e"), sq("5d"), false));
        assert!(matches!(empty_origin, Err(ShogiError::IllegalApplication(_))));

        let opponent_piece = apply_move(&pos, Move::board(sq("7c"), sq("7d"), false));
        assert!(matches!(opponent_piece, Err(ShogiError::IllegalApplication(_))));

        let absent_drop = apply_move(&pos, Move::drop(PieceKind::Pawn, sq("5e")));
        assert!(matches!(absent_drop, Err(ShogiError::IllegalApplication(_))));

        let gold_promotion = apply_move(&pos, Move::board(sq("6i"), sq("6h"), true));
        assert!(matches!(gold_promotion, Err(ShogiError::IllegalApplication(_))));
    }

    #[test]
    fn test_simulated_king_capture_leaves_hand_untouched() {
        // 後手玉に王手が掛かったまま先手番の不正な局面
        let pos = parse_sfen("4k4/9/9/9/9/9/9/9/4RK3 b - 1").unwrap();
        let capture = Move::board(sq("5i"), sq("5a"), false);
        assert!(matches!(apply_move(&pos, capture), Err(ShogiError::IllegalApplication(_))));

        let next = simulate(&pos, capture, Side::Black).unwrap();
        assert_eq!(next.king_square(Side::White), None);
        assert!(next.hand(Side::Black).is_empty());
        assert_eq!(next.piece_at(sq("5a")), Some(Piece::new(PieceKind::Rook, Side::Black)));
    }

    #[test]
    fn test_play_usi_reports_illegal_reason() {
        let pos = parse_sfen("4k4/9/9/9/9/9/4P4/9/4K4 b P 1").unwrap();
        let err = play_usi(&pos, "P*5e").unwrap_err();
        assert_eq!(err, ShogiError::IllegalMove(IllegalMove::TwoPawns));
        assert!(play_usi(&pos, "P*4e").is_ok());
    }
}
