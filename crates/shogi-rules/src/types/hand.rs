//! 持ち駒（Hand）

use serde::{Deserialize, Serialize};

use super::PieceKind;
use crate::error::{Result, ShogiError};

/// 片方の手番の持ち駒（基本駒種の多重集合）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    /// `PieceKind::HAND_KINDS` 順の枚数
    counts: [u8; 7],
}

impl Hand {
    /// 空の持ち駒
    pub const EMPTY: Hand = Hand { counts: [0; 7] };

    /// 指定駒種の枚数（持ち駒にならない駒種は常に 0）
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u8 {
        kind.hand_index().map_or(0, |i| self.counts[i])
    }

    #[inline]
    pub fn contains(&self, kind: PieceKind) -> bool {
        self.count(kind) > 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// 総枚数
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&n| u32::from(n)).sum()
    }

    /// 1枚追加する。玉・成駒は持ち駒にならない
    pub fn add(&mut self, kind: PieceKind) -> Result<()> {
        let index = kind.hand_index().ok_or_else(|| {
            ShogiError::InvariantViolation(format!("{kind:?} cannot be held in hand"))
        })?;
        self.counts[index] = self.counts[index].checked_add(1).ok_or_else(|| {
            ShogiError::InvariantViolation(format!("hand count overflow for {kind:?}"))
        })?;
        Ok(())
    }

    /// 指定枚数を設定する（SFEN の読み込み用）
    pub fn set_count(&mut self, kind: PieceKind, count: u8) -> Result<()> {
        let index = kind.hand_index().ok_or_else(|| {
            ShogiError::InvariantViolation(format!("{kind:?} cannot be held in hand"))
        })?;
        self.counts[index] = count;
        Ok(())
    }

    /// 1枚取り除く。持っていない駒種なら不変条件違反
    pub fn remove(&mut self, kind: PieceKind) -> Result<()> {
        match kind.hand_index() {
            Some(index) if self.counts[index] > 0 => {
                self.counts[index] -= 1;
                Ok(())
            }
            _ => Err(ShogiError::InvariantViolation(format!("{kind:?} is not in hand"))),
        }
    }

    /// (駒種, 枚数) を飛 角 金 銀 桂 香 歩 の順に列挙（0枚は除く）
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::HAND_KINDS
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, n)| **n > 0)
            .map(|(&kind, &n)| (kind, n))
    }

    /// 持っている駒種のみを列挙
    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.iter().map(|(kind, _)| kind)
    }
}
