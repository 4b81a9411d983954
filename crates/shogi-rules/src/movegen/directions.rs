//! 駒種ごとの移動方向表
//!
//! 先手視点（前進 = 行 -1）で定義し、後手は行方向を反転して使う。

use crate::types::{PieceKind, Side};

/// 1方向の移動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub d_row: i8,
    pub d_col: i8,
    /// 盤端か駒に当たるまで進める方向か
    pub slide: bool,
}

impl Step {
    const fn one(d_row: i8, d_col: i8) -> Step {
        Step { d_row, d_col, slide: false }
    }

    const fn ray(d_row: i8, d_col: i8) -> Step {
        Step { d_row, d_col, slide: true }
    }

    /// 手番に合わせた方向
    #[inline]
    pub const fn for_side(self, side: Side) -> Step {
        match side {
            Side::Black => self,
            Side::White => Step { d_row: -self.d_row, d_col: self.d_col, slide: self.slide },
        }
    }
}

/// 斜め4方向
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 縦横4方向
pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const KING: [Step; 8] = [
    Step::one(-1, -1),
    Step::one(-1, 0),
    Step::one(-1, 1),
    Step::one(0, -1),
    Step::one(0, 1),
    Step::one(1, -1),
    Step::one(1, 0),
    Step::one(1, 1),
];

const GOLD: [Step; 6] = [
    Step::one(-1, -1),
    Step::one(-1, 0),
    Step::one(-1, 1),
    Step::one(0, -1),
    Step::one(0, 1),
    Step::one(1, 0),
];

const SILVER: [Step; 5] =
    [Step::one(-1, -1), Step::one(-1, 0), Step::one(-1, 1), Step::one(1, -1), Step::one(1, 1)];

const KNIGHT: [Step; 2] = [Step::one(-2, -1), Step::one(-2, 1)];

const LANCE: [Step; 1] = [Step::ray(-1, 0)];

const PAWN: [Step; 1] = [Step::one(-1, 0)];

const ROOK: [Step; 4] = [Step::ray(-1, 0), Step::ray(1, 0), Step::ray(0, -1), Step::ray(0, 1)];

const BISHOP: [Step; 4] =
    [Step::ray(-1, -1), Step::ray(-1, 1), Step::ray(1, -1), Step::ray(1, 1)];

const DRAGON: [Step; 8] = [
    Step::ray(-1, 0),
    Step::ray(1, 0),
    Step::ray(0, -1),
    Step::ray(0, 1),
    Step::one(-1, -1),
    Step::one(-1, 1),
    Step::one(1, -1),
    Step::one(1, 1),
];

const HORSE: [Step; 8] = [
    Step::ray(-1, -1),
    Step::ray(-1, 1),
    Step::ray(1, -1),
    Step::ray(1, 1),
    Step::one(-1, 0),
    Step::one(1, 0),
    Step::one(0, -1),
    Step::one(0, 1),
];

/// 駒種の移動方向（先手視点）
pub fn steps(kind: PieceKind) -> &'static [Step] {
    match kind {
        PieceKind::King => &KING,
        PieceKind::Rook => &ROOK,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Gold
        | PieceKind::ProSilver
        | PieceKind::ProKnight
        | PieceKind::ProLance
        | PieceKind::ProPawn => &GOLD,
        PieceKind::Silver => &SILVER,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Lance => &LANCE,
        PieceKind::Pawn => &PAWN,
        PieceKind::Dragon => &DRAGON,
        PieceKind::Horse => &HORSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliders_have_rays() {
        for kind in PieceKind::ALL {
            let has_ray = steps(kind).iter().any(|s| s.slide);
            assert_eq!(has_ray, kind.is_slider(), "{kind:?}");
        }
    }

    #[test]
    fn test_white_steps_are_flipped() {
        let pawn = steps(PieceKind::Pawn)[0];
        assert_eq!(pawn.for_side(Side::Black).d_row, -1);
        assert_eq!(pawn.for_side(Side::White).d_row, 1);
    }
}
