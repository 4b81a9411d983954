//! 指し手の合法性検証と合法手の列挙

use log::debug;

use super::check::{is_in_check, leaves_in_check};
use super::drops::{drop_rejection, drop_squares};
use super::reachable::reachable_squares;
use crate::error::IllegalMove;
use crate::position::Position;
use crate::types::{Move, Side, Square};

/// 手番側の指し手として検証する
pub fn check_move(position: &Position, mv: Move) -> Result<(), IllegalMove> {
    check_move_as(position, mv, position.side_to_move())
}

/// `side` の指し手として検証する
///
/// 駒の有無・所有、到達可能性、成りの可否、自玉の安全の順に確認し、
/// 最初に引っ掛かった理由を返す。行き所のない不成は反則にしない。
pub fn check_move_as(position: &Position, mv: Move, side: Side) -> Result<(), IllegalMove> {
    let result = match mv {
        Move::Board { from, to, promote } => check_board_move(position, side, from, to, promote),
        Move::Drop { kind, to } => {
            if kind.hand_index().is_none() {
                Err(IllegalMove::NotDroppable)
            } else if !position.hand(side).contains(kind) {
                Err(IllegalMove::NotInHand)
            } else {
                match drop_rejection(position, kind, side, to) {
                    Some(reason) => Err(reason),
                    None => Ok(()),
                }
            }
        }
    };
    let result = result.and_then(|()| {
        if leaves_in_check(position, mv, side) {
            Err(IllegalMove::LeavesKingInCheck)
        } else {
            Ok(())
        }
    });
    if let Err(reason) = &result {
        debug!("rejected {mv} for {side:?}: {reason}");
    }
    result
}

fn check_board_move(
    position: &Position,
    side: Side,
    from: Square,
    to: Square,
    promote: bool,
) -> Result<(), IllegalMove> {
    let Some(piece) = position.piece_at(from) else {
        return Err(IllegalMove::EmptyOrigin);
    };
    if piece.side != side {
        return Err(IllegalMove::NotOwnPiece);
    }
    if !reachable_squares(position, from).contains(&to) {
        return Err(IllegalMove::Unreachable);
    }
    if promote {
        if !piece.kind.can_promote() {
            return Err(IllegalMove::CannotPromote);
        }
        if !side.in_promotion_zone(from.row()) && !side.in_promotion_zone(to.row()) {
            return Err(IllegalMove::OutsidePromotionZone);
        }
    }
    Ok(())
}

/// 手番側の指し手として合法か
pub fn is_legal_move(position: &Position, mv: Move) -> bool {
    check_move(position, mv).is_ok()
}

/// 手番側の合法手をすべて列挙する
pub fn legal_moves(position: &Position) -> Vec<Move> {
    legal_moves_for(position, position.side_to_move())
}

/// `side` の合法手をすべて列挙する
///
/// 盤上の駒の移動（行優先、成れる場合は不成・成の順）のあとに、
/// 持ち駒の打ちを持ち駒順に並べる。
pub fn legal_moves_for(position: &Position, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, piece) in position.pieces(side) {
        for to in reachable_squares(position, from) {
            let can_promote = piece.kind.can_promote()
                && (side.in_promotion_zone(from.row()) || side.in_promotion_zone(to.row()));
            let candidates: &[bool] = if can_promote { &[false, true] } else { &[false] };
            for &promote in candidates {
                let mv = Move::board(from, to, promote);
                if !leaves_in_check(position, mv, side) {
                    moves.push(mv);
                }
            }
        }
    }

    for kind in position.hand(side).kinds() {
        for to in drop_squares(position, kind, side) {
            let mv = Move::drop(kind, to);
            if !leaves_in_check(position, mv, side) {
                moves.push(mv);
            }
        }
    }

    moves
}

/// `side` に王手が掛かっておらず、合法手もないか
pub fn is_stalemate(position: &Position, side: Side) -> bool {
    !is_in_check(position, side) && legal_moves_for(position, side).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{parse_sfen, parse_usi_move};
    use crate::types::PieceKind;

    fn mv(s: &str) -> Move {
        parse_usi_move(s).unwrap()
    }

    #[test]
    fn test_startpos_has_thirty_moves() {
        let pos = Position::startpos();
        let moves = legal_moves(&pos);
        assert_eq!(moves.len(), 30);
        assert!(moves.contains(&mv("7g7f")));
        assert!(moves.contains(&mv("2h1h")));
        assert!(!moves.iter().any(|m| m.is_drop()));
    }

    #[test]
    fn test_reasons_in_order() {
        let pos = Position::startpos();
        assert_eq!(check_move(&pos, mv("5e5d")), Err(IllegalMove::EmptyOrigin));
        assert_eq!(check_move(&pos, mv("7c7d")), Err(IllegalMove::NotOwnPiece));
        assert_eq!(check_move(&pos, mv("7g7e")), Err(IllegalMove::Unreachable));
        assert_eq!(check_move(&pos, mv("7g7f+")), Err(IllegalMove::OutsidePromotionZone));
        assert_eq!(check_move(&pos, mv("P*5e")), Err(IllegalMove::NotInHand));
        assert_eq!(
            check_move(&pos, Move::drop(PieceKind::King, Square::at(4, 4))),
            Err(IllegalMove::NotDroppable)
        );
        assert!(check_move(&pos, mv("7g7f")).is_ok());
    }

    #[test]
    fn test_gold_cannot_promote() {
        let pos = parse_sfen("4k4/9/4G4/9/9/9/9/9/4K4 b - 1").unwrap();
        assert_eq!(check_move(&pos, mv("5c5b+")), Err(IllegalMove::CannotPromote));
    }

    #[test]
    fn test_promotion_when_leaving_zone() {
        let pos = parse_sfen("4k4/9/4S4/9/9/9/9/9/4K4 b - 1").unwrap();
        assert!(is_legal_move(&pos, mv("5c4d+")));
        assert!(is_legal_move(&pos, mv("5c4d")));
    }

    #[test]
    fn test_dead_end_non_promotion_is_accepted() {
        let pos = parse_sfen("4k4/P8/9/9/9/9/9/9/4K4 b - 1").unwrap();
        assert!(is_legal_move(&pos, mv("9b9a")));
        assert!(is_legal_move(&pos, mv("9b9a+")));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // 5八の金は5筋の飛車にピンされている
        let pos = parse_sfen("4r4/9/9/9/9/9/9/4G4/4K4 b - 1").unwrap();
        assert_eq!(check_move(&pos, mv("5h4h")), Err(IllegalMove::LeavesKingInCheck));
        assert!(is_legal_move(&pos, mv("5h5g")));
        assert!(legal_moves(&pos).iter().all(|m| *m != mv("5h4h")));
    }

    #[test]
    fn test_check_must_be_answered() {
        let pos = parse_sfen("4k4/9/9/9/9/9/9/9/4K3r b G 1").unwrap();
        // 1九の飛車が横から王手
        let moves = legal_moves(&pos);
        assert!(!moves.is_empty());
        for m in &moves {
            let next = crate::position::apply_move(&pos, *m).unwrap();
            assert!(!crate::movegen::is_in_check(&next, Side::Black), "{m}");
        }
        assert!(moves.contains(&mv("G*4i")));
        assert!(!moves.contains(&mv("G*5e")));
    }

    #[test]
    fn test_moves_for_either_side() {
        let pos = Position::startpos();
        let white = legal_moves_for(&pos, Side::White);
        assert_eq!(white.len(), 30);
        assert!(white.contains(&mv("3c3d")));
    }

    #[test]
    fn test_stalemate() {
        // 1一の後手玉は2三の金と3三の桂に逃げ道を塞がれ、王手は掛かっていない
        let pos = parse_sfen("8k/9/6NG1/9/9/9/9/9/K8 w - 1").unwrap();
        assert!(is_stalemate(&pos, Side::White));
        assert!(!crate::movegen::is_checkmate(&pos, Side::White));
        assert!(!is_stalemate(&Position::startpos(), Side::Black));
    }
}
