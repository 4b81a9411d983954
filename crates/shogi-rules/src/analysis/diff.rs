//! 2局面の差分と、差分から推定される指し手

use log::debug;
use smallvec::SmallVec;

use crate::position::Position;
use crate::types::{Move, Piece, PieceKind, Side, Square};

/// 変化したマス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub square: Square,
    pub before: Option<Piece>,
    pub after: Option<Piece>,
}

/// 片方の手番の持ち駒の増減（多重集合、持ち駒順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandDelta {
    pub added: Vec<PieceKind>,
    pub removed: Vec<PieceKind>,
}

impl HandDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// 局面の差分
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionDiff {
    /// 変化したマス（行優先）。通常の1手なら2マス以下
    pub cells: SmallVec<[CellChange; 4]>,
    hands: [HandDelta; Side::NUM],
    pub turn_changed: bool,
}

/// 差分から推定した指し手
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpliedMove {
    pub mv: Move,
    /// 動かした駒（成る前）
    pub piece: Piece,
    /// 取った駒（盤上にあったときの駒種）
    pub captured: Option<Piece>,
}

/// 2局面の差分を取る
pub fn diff(before: &Position, after: &Position) -> PositionDiff {
    let cells = Square::all()
        .filter_map(|square| {
            let (b, a) = (before.piece_at(square), after.piece_at(square));
            (b != a).then_some(CellChange { square, before: b, after: a })
        })
        .collect();

    let hands = Side::ALL.map(|side| {
        let mut delta = HandDelta::default();
        for kind in PieceKind::HAND_KINDS {
            let b = before.hand(side).count(kind);
            let a = after.hand(side).count(kind);
            if a > b {
                delta.added.extend(std::iter::repeat_n(kind, usize::from(a - b)));
            } else if b > a {
                delta.removed.extend(std::iter::repeat_n(kind, usize::from(b - a)));
            }
        }
        delta
    });

    PositionDiff {
        cells,
        hands,
        turn_changed: before.side_to_move() != after.side_to_move(),
    }
}

impl PositionDiff {
    /// `side` の持ち駒の増減
    pub fn hand_delta(&self, side: Side) -> &HandDelta {
        &self.hands[side.index()]
    }

    /// 盤上・持ち駒ともに変化がないか
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.hands.iter().all(HandDelta::is_empty)
    }

    /// `mover` の1手として説明できるなら、その指し手を返す
    ///
    /// 1マスが空から `mover` の駒になり、その駒種が持ち駒から1枚減っていれば駒打ち。
    /// 2マスが変化し、片方が `mover` の駒が去ったマス、もう片方が `mover` の駒が入ったマスなら
    /// 盤上の移動。駒種が変わっていれば成り、取った駒は成る前の駒種で持ち駒に増えている必要がある。
    pub fn implied_move(&self, mover: Side) -> Option<ImpliedMove> {
        let implied = match self.cells.as_slice() {
            [change] => self.implied_drop(*change, mover),
            [first, second] => self
                .implied_board_move(*first, *second, mover)
                .or_else(|| self.implied_board_move(*second, *first, mover)),
            _ => None,
        };
        if implied.is_none() {
            debug!("diff with {} changed cells is not a single move by {mover:?}", self.cells.len());
        }
        implied
    }

    fn implied_drop(&self, change: CellChange, mover: Side) -> Option<ImpliedMove> {
        let (None, Some(piece)) = (change.before, change.after) else {
            return None;
        };
        let delta = self.hand_delta(mover);
        if piece.side != mover || delta.removed != [piece.kind] || !delta.added.is_empty() {
            return None;
        }
        Some(ImpliedMove { mv: Move::drop(piece.kind, change.square), piece, captured: None })
    }

    fn implied_board_move(
        &self,
        vacated: CellChange,
        occupied: CellChange,
        mover: Side,
    ) -> Option<ImpliedMove> {
        let (Some(moved), None) = (vacated.before, vacated.after) else {
            return None;
        };
        let arrived = occupied.after?;
        if moved.side != mover || arrived.side != mover {
            return None;
        }
        let promote = if arrived.kind == moved.kind {
            false
        } else if moved.kind.promote() == Some(arrived.kind) {
            true
        } else {
            return None;
        };

        let delta = self.hand_delta(mover);
        match occupied.before {
            Some(captured) => {
                if captured.side == mover || delta.added != [captured.kind.demote()] {
                    return None;
                }
            }
            None => {
                if !delta.added.is_empty() {
                    return None;
                }
            }
        }
        if !delta.removed.is_empty() {
            return None;
        }

        Some(ImpliedMove {
            mv: Move::board(vacated.square, occupied.square, promote),
            piece: moved,
            captured: occupied.before,
        })
    }
}

/// `before` の手番側の1手として差分を解釈する
pub fn implied_move_between(before: &Position, after: &Position) -> Option<ImpliedMove> {
    diff(before, after).implied_move(before.side_to_move())
}
