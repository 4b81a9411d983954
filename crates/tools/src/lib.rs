//! shogi-rules のコマンドラインツール群
//!
//! - `sfen_inspect`: 局面の盤面図・王手/詰み・合法手一覧
//! - `kifu_replay`: 指し手列を再生し、各手の表記とタグを出力
//! - `formation_scan`: 指し手列を再生し、囲い・戦法の成立を出力

pub mod common;
pub mod replay;

/// ツール共通のログ初期化（`RUST_LOG` で上書き可能）
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
}
