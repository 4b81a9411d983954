//! 1手の前後で新たに成立した囲い・戦法のタグ

use super::book::FormationBook;
use super::rules::Scope;
use crate::analysis::MoveTag;
use crate::position::Position;
use crate::types::Side;

/// `turn` 手目の `before` → `after` で新たに成立した定義をタグにする
///
/// 手番側（`before` の手番）の手で自分の定義が成立したら `<名>`、相手の手で相手の定義が
/// 成立したら `相手が<名>`。両者で判定する定義は成立した時点で `<名>`。
/// 判定範囲の最初の手数では、直前の局面を未成立として扱う。
pub fn tag_formations(
    before: &Position,
    after: &Position,
    perspective: Side,
    turn: u32,
    book: &FormationBook,
) -> Vec<MoveTag> {
    let self_move = before.side_to_move() == perspective;
    let mut tags = Vec::new();

    for rule in book {
        if !rule.turn_range.contains(turn) {
            continue;
        }
        let first_turn = rule.turn_range.starts_at(turn);
        let appeared =
            |side: Side| (first_turn || !rule.holds(before, side)) && rule.holds(after, side);

        match rule.scope {
            Scope::PerSide => {
                if self_move && appeared(perspective) {
                    tags.push(MoveTag::Formation(rule.name.clone()));
                }
                if !self_move && appeared(perspective.opponent()) {
                    tags.push(MoveTag::OpponentFormation(rule.name.clone()));
                }
            }
            Scope::EitherSide => {
                if appeared(perspective) {
                    tags.push(MoveTag::Formation(rule.name.clone()));
                }
            }
        }
    }
    tags
}
