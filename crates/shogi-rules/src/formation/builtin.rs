//! 組み込みの囲い・戦法（先手視点の座標）

use super::expr::Condition;
use super::rules::{Category, FormationRule, TurnRange};
use crate::types::PieceKind::{self, Bishop, Gold, King, Knight, Lance, Pawn, Rook, Silver};

/// 棒銀系の判定を始める手数
const BOGIN_FROM: u32 = 10;

/// 向かい飛車の判定を始める手数
const MUKAIBISHA_FROM: u32 = 5;

fn at(kind: PieceKind, row: u8, col: u8) -> Condition {
    Condition::at(kind, row, col)
}

fn all(conditions: impl Into<Vec<Condition>>) -> Condition {
    Condition::All(conditions.into())
}

fn any(conditions: impl Into<Vec<Condition>>) -> Condition {
    Condition::Any(conditions.into())
}

fn castle(name: &str, conditions: impl Into<Vec<Condition>>) -> FormationRule {
    FormationRule::new(name, Category::Castle, all(conditions))
}

fn opening(name: &str, conditions: impl Into<Vec<Condition>>) -> FormationRule {
    FormationRule::new(name, Category::Opening, all(conditions))
}

fn bogin_silver() -> Condition {
    any([at(Silver, 5, 7), at(Silver, 4, 7)])
}

fn ishida_ryu() -> [Condition; 3] {
    [at(Rook, 5, 2), at(Pawn, 4, 2), at(Knight, 6, 2)]
}

/// 囲い 25 種
pub(crate) fn castles() -> Vec<FormationRule> {
    vec![
        castle("金矢倉", [at(King, 7, 1), at(Gold, 7, 2), at(Gold, 6, 3), at(Silver, 6, 2)]),
        castle("銀矢倉", [at(King, 7, 1), at(Gold, 7, 2), at(Gold, 6, 3), at(Silver, 7, 3)]),
        castle("片矢倉", [at(King, 7, 2), at(Gold, 6, 3), at(Gold, 7, 3), at(Silver, 6, 2)]),
        castle("蟹囲い", [at(King, 8, 3), at(Gold, 7, 4), at(Gold, 7, 2), at(Silver, 7, 3)]),
        castle(
            "雁木囲い",
            [
                any([at(King, 8, 3), at(King, 8, 2)]),
                at(Gold, 7, 4),
                at(Gold, 7, 2),
                at(Silver, 6, 5),
                at(Silver, 6, 3),
            ],
        ),
        castle("美濃囲い", [at(King, 7, 7), at(Gold, 7, 6), at(Gold, 7, 4)]),
        castle("片美濃囲い", [at(King, 7, 7), at(Gold, 7, 6), at(Silver, 8, 5)]),
        castle("高美濃囲い", [at(King, 7, 7), at(Gold, 7, 6), at(Gold, 6, 5), at(Silver, 8, 5)]),
        castle("銀冠", [at(King, 7, 7), at(Gold, 7, 6), at(Gold, 6, 5), at(Silver, 6, 7)]),
        castle("ダイヤモンド美濃", [at(King, 7, 7), at(Gold, 7, 6), at(Gold, 6, 5), at(Silver, 6, 6)]),
        castle("木村美濃", [at(King, 7, 7), at(Gold, 7, 6), at(Gold, 6, 4), at(Silver, 5, 5)]),
        castle(
            "左美濃",
            [
                at(Rook, 7, 7),
                at(King, 7, 1),
                at(Gold, 7, 4),
                at(Gold, 8, 3),
                at(Silver, 8, 2),
                at(Bishop, 6, 2),
            ],
        ),
        castle(
            "天守閣美濃",
            [at(Rook, 7, 7), at(King, 6, 1), at(Gold, 7, 4), at(Gold, 7, 3), at(Silver, 7, 2)],
        ),
        castle(
            "舟囲い",
            [
                at(Rook, 7, 7),
                at(King, 7, 2),
                at(Gold, 7, 4),
                at(Gold, 8, 3),
                at(Silver, 8, 2),
                at(Bishop, 7, 1),
            ],
        ),
        castle(
            "elmo囲い",
            [
                at(Rook, 7, 7),
                at(King, 7, 2),
                at(Gold, 8, 2),
                at(Gold, 7, 4),
                any([at(Silver, 7, 3), at(Silver, 6, 4)]),
            ],
        ),
        castle(
            "居飛車穴熊",
            [
                at(Rook, 7, 7),
                at(King, 8, 0),
                at(Gold, 7, 2),
                at(Gold, 8, 2),
                at(Silver, 7, 1),
                at(Lance, 7, 0),
            ],
        ),
        castle(
            "松尾流穴熊",
            [
                at(Rook, 7, 7),
                at(King, 8, 0),
                at(Gold, 8, 2),
                at(Gold, 7, 1),
                at(Silver, 7, 2),
                at(Lance, 7, 0),
            ],
        ),
        castle(
            "銀冠穴熊",
            [
                at(Rook, 7, 7),
                at(King, 8, 0),
                at(Gold, 8, 2),
                at(Gold, 7, 3),
                at(Silver, 7, 1),
                at(Silver, 6, 2),
                at(Lance, 7, 0),
            ],
        ),
        castle(
            "振り飛車穴熊",
            [at(King, 8, 8), at(Gold, 7, 7), at(Gold, 8, 6), at(Silver, 8, 7), at(Lance, 7, 8)],
        ),
        castle("金無双", [at(King, 7, 6), at(Gold, 7, 5), at(Gold, 7, 4), at(Silver, 7, 7)]),
        castle(
            "ミレニアム",
            [at(Rook, 7, 7), at(King, 7, 3), at(Gold, 7, 2), at(Gold, 8, 2), at(Silver, 7, 1)],
        ),
        castle(
            "中住まい",
            [any([at(King, 8, 4), at(King, 7, 4)]), any([at(Gold, 8, 5), at(Gold, 7, 5)])],
        ),
        castle("中原囲い", [at(King, 7, 5), at(Gold, 7, 4), at(Gold, 7, 6)]),
        castle("ボナンザ囲い", [at(King, 8, 2), at(Gold, 7, 3), at(Gold, 7, 2)]),
        castle("右玉", [at(King, 7, 7), at(Gold, 7, 6), at(Silver, 7, 5)]),
    ]
}

/// 戦法 16 種
pub(crate) fn openings() -> Vec<FormationRule> {
    let bogin_range = TurnRange::starting_at(BOGIN_FROM);
    vec![
        opening("居飛車", [at(Rook, 7, 7)]),
        opening("向かい飛車", [at(Rook, 7, 1), Condition::opponent(at(Rook, 7, 7))])
            .either_side()
            .with_turn_range(TurnRange::starting_at(MUKAIBISHA_FROM)),
        opening("三間飛車", [at(Rook, 7, 2)]),
        opening("四間飛車", [at(Rook, 7, 3), at(Bishop, 6, 2), at(Silver, 7, 2)]),
        opening("中飛車", [at(Rook, 7, 4)]),
        opening("右四間飛車", [at(Rook, 7, 5), at(Silver, 5, 4)]),
        opening("ゴキゲン中飛車", [at(Rook, 7, 4), at(Pawn, 4, 4), at(Bishop, 6, 2)]),
        opening("棒銀", [at(Rook, 7, 7), bogin_silver()]).with_turn_range(bogin_range),
        opening(
            "棒銀(相居飛車)",
            [at(Rook, 7, 7), bogin_silver(), any([at(Pawn, 4, 7), at(Pawn, 3, 7)])],
        )
        .with_turn_range(bogin_range),
        opening("棒銀(対振り飛車)", [at(Rook, 7, 7), bogin_silver()]).with_turn_range(bogin_range),
        opening("早繰り銀", [any([at(Silver, 5, 6), at(Silver, 5, 5)])]),
        opening("腰掛け銀", [at(Silver, 5, 4)]),
        opening("早石田", [at(Rook, 5, 2)]),
        opening("石田流", ishida_ryu()),
        opening("石田流本組み", {
            let mut conditions = ishida_ryu().to_vec();
            conditions.push(at(Bishop, 6, 0));
            conditions
        }),
        opening(
            "中飛車左穴熊",
            [
                at(Rook, 7, 4),
                at(King, 8, 0),
                at(Gold, 7, 2),
                at(Gold, 8, 2),
                at(Silver, 7, 1),
                at(Lance, 7, 0),
            ],
        ),
    ]
}
