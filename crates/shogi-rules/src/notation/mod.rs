//! 記法の変換
//!
//! - `sfen`: 局面 ⇄ SFEN 形式の文字列
//! - `usi`: 指し手 ⇄ USI 形式の文字列
//! - `kifu`: 指し手 ⇄ 日本語の棋譜表記
//! - `diagram`: 局面 → 盤面図
//! - `json`: 局面 → JSON 表現

pub mod diagram;
pub mod json;
pub mod kifu;
pub mod sfen;
pub mod usi;

pub use diagram::render_diagram;
pub use kifu::{format_kifu_move, parse_kifu_move};
pub use sfen::{parse_sfen, to_sfen};
pub use usi::{move_to_usi, parse_usi_move};
