//! 指し手（Move）

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PieceKind, Square};

/// 指し手。特定の局面に対してのみ意味を持つ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    /// 盤上の駒の移動
    Board { from: Square, to: Square, promote: bool },
    /// 持ち駒を打つ
    Drop { kind: PieceKind, to: Square },
}

impl Move {
    #[inline]
    pub const fn board(from: Square, to: Square, promote: bool) -> Move {
        Move::Board { from, to, promote }
    }

    #[inline]
    pub const fn drop(kind: PieceKind, to: Square) -> Move {
        Move::Drop { kind, to }
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// 移動元（駒打ちは None）
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Board { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    #[inline]
    pub const fn is_promote(self) -> bool {
        matches!(self, Move::Board { promote: true, .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Board { from, to, promote } => {
                write!(f, "{from}{to}")?;
                if promote {
                    write!(f, "+")?;
                }
                Ok(())
            }
            Move::Drop { kind, to } => write!(f, "{}*{to}", kind.demote().letter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accessors() {
        let from = Square::from_usi("7g").unwrap();
        let to = Square::from_usi("7f").unwrap();
        let mv = Move::board(from, to, false);
        assert_eq!(mv.from(), Some(from));
        assert_eq!(mv.to(), to);
        assert!(!mv.is_drop());

        let drop = Move::drop(PieceKind::Pawn, to);
        assert_eq!(drop.from(), None);
        assert!(drop.is_drop());
        assert!(!drop.is_promote());
    }

    #[test]
    fn test_move_display_is_usi() {
        let mv = Move::board(Square::from_usi("8h").unwrap(), Square::from_usi("2b").unwrap(), true);
        assert_eq!(mv.to_string(), "8h2b+");
        assert_eq!(Move::drop(PieceKind::Gold, Square::from_usi("5e").unwrap()).to_string(), "G*5e");
    }
}
