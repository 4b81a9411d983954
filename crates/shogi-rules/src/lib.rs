//! # shogi-rules
//!
//! 将棋のルールエンジンと指し手解析のライブラリ。
//! 探索や評価は行わず、外部エンジン・解説生成器へ渡す材料を作る。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Side, Square, PieceKind, Piece, Hand, Move）
//! - `position`: 局面と指し手の適用
//! - `notation`: SFEN / USI / 日本語棋譜 / 盤面図 / JSON
//! - `movegen`: 利き・合法手・王手・詰み判定
//! - `analysis`: 局面差分と指し手タグ
//! - `formation`: 囲い・戦法の定義と検出
//! - `evaluation`: 外部評価エンジンとの受け渡し
//!

pub mod error;
pub mod types;

pub mod notation;
pub mod position;

pub mod movegen;

pub mod analysis;
pub mod formation;

pub mod evaluation;

pub use error::{IllegalMove, Result, ShogiError};
pub use position::{Position, SFEN_STARTPOS};
pub use types::{Hand, Move, Piece, PieceKind, Side, Square};
