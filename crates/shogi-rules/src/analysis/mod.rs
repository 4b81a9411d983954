//! 局面の差分と指し手の分析
//!
//! - `diff`: 2局面の差分と、差分から推定される指し手
//! - `lines`: 角道・飛車道の補助関数
//! - `tags`: 指し手の戦術タグ
//! - `features`: 解説生成用の指し手の特徴量

pub mod diff;
pub mod features;
pub mod lines;
pub mod tags;

pub use diff::{CellChange, HandDelta, ImpliedMove, PositionDiff, diff, implied_move_between};
pub use features::{MoveFeatures, extract_move_features};
pub use lines::{Zone, farthest_zone, is_path_clear_to, open_range};
pub use tags::{MoveTag, tag_move};
