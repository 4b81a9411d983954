//! 囲い・戦法の判定
//!
//! 定義はすべてデータ（`FormationRule`）で、判定は条件式を評価する汎用の処理だけで行う。

mod builtin;
pub mod book;
pub mod expr;
pub mod rules;
pub mod transitions;

pub use book::FormationBook;
pub use expr::Condition;
pub use rules::{Category, FormationRule, Scope, TurnRange, matches};
pub use transitions::tag_formations;
