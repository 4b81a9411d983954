//! 囲い・戦法の定義

use serde::{Deserialize, Serialize};

use super::expr::Condition;
use crate::position::Position;
use crate::types::Side;

/// 定義の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 囲い
    Castle,
    /// 戦法
    Opening,
}

/// 成立の判定単位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// 手番ごとに判定する
    #[default]
    PerSide,
    /// どちらかの手番で成立すれば局面全体として成立する（向かい飛車など）
    EitherSide,
}

/// 判定が有効な手数の範囲（両端を含む、`None` は制限なし）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
}

impl TurnRange {
    pub const ANY: TurnRange = TurnRange { from: None, to: None };

    pub const fn starting_at(from: u32) -> TurnRange {
        TurnRange { from: Some(from), to: None }
    }

    pub fn contains(&self, turn: u32) -> bool {
        self.from.is_none_or(|from| turn >= from) && self.to.is_none_or(|to| turn <= to)
    }

    /// 範囲の最初の手数か
    pub fn starts_at(&self, turn: u32) -> bool {
        self.from == Some(turn)
    }
}

/// 囲い・戦法の定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationRule {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub turn_range: TurnRange,
    pub expression: Condition,
}

impl FormationRule {
    pub fn new(name: impl Into<String>, category: Category, expression: Condition) -> FormationRule {
        FormationRule {
            name: name.into(),
            category,
            scope: Scope::PerSide,
            turn_range: TurnRange::ANY,
            expression,
        }
    }

    #[must_use]
    pub fn with_turn_range(mut self, turn_range: TurnRange) -> FormationRule {
        self.turn_range = turn_range;
        self
    }

    #[must_use]
    pub fn either_side(mut self) -> FormationRule {
        self.scope = Scope::EitherSide;
        self
    }

    /// 手数を見ずに条件式だけを評価する
    ///
    /// `EitherSide` の定義は `side` を無視し、先手・後手どちらかで成立すれば true。
    pub fn holds(&self, position: &Position, side: Side) -> bool {
        match self.scope {
            Scope::PerSide => self.expression.evaluate(position, side),
            Scope::EitherSide => {
                Side::ALL.iter().any(|&s| self.expression.evaluate(position, s))
            }
        }
    }
}

/// `turn` 手目の局面で `side` について定義が成立しているか
pub fn matches(position: &Position, rule: &FormationRule, side: Side, turn: u32) -> bool {
    rule.turn_range.contains(turn) && rule.holds(position, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_turn_range_bounds() {
        let range = TurnRange { from: Some(5), to: Some(10) };
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(10));
        assert!(!range.contains(11));
        assert!(TurnRange::ANY.contains(0));
        assert!(TurnRange::starting_at(10).contains(500));
        assert!(range.starts_at(5));
    }

    #[test]
    fn test_matches_respects_turn_range() {
        let rule = FormationRule::new("居飛車", Category::Opening, Condition::at(PieceKind::Rook, 7, 7))
            .with_turn_range(TurnRange::starting_at(3));
        let pos = Position::startpos();
        assert!(!matches(&pos, &rule, Side::Black, 2));
        assert!(matches(&pos, &rule, Side::Black, 3));
        assert!(matches(&pos, &rule, Side::White, 3));
    }

    #[test]
    fn test_either_side_scope() {
        // 先手だけが 8八 に飛車を振った局面
        let pos = crate::notation::parse_sfen(
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1R5B1/LNSGKGSNL b - 1",
        )
        .unwrap();
        let expression = Condition::All(vec![
            Condition::at(PieceKind::Rook, 7, 1),
            Condition::opponent(Condition::at(PieceKind::Rook, 7, 7)),
        ]);
        let per_side = FormationRule::new("向かい飛車", Category::Opening, expression.clone());
        assert!(per_side.holds(&pos, Side::Black));
        assert!(!per_side.holds(&pos, Side::White));

        let either = FormationRule::new("向かい飛車", Category::Opening, expression).either_side();
        assert!(either.holds(&pos, Side::White));
    }
}
