//! 囲い・戦法の検出ツール
//!
//! 指し手列を再生し、各手で新たに成立した囲い・戦法を先手・後手の視点で表示する。
//! `--book` で TOML の定義を追加できる（`--no-builtin` で組み込み定義を使わない）。

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use serde::Serialize;

use shogi_rules::Side;
use shogi_rules::formation::{FormationBook, tag_formations};
use tools::common::io::{read_moves, read_text, write_json};
use tools::replay::{MoveFormat, replay, start_position};

#[derive(Parser, Debug)]
#[command(name = "formation_scan")]
#[command(about = "指し手列から囲い・戦法の成立を検出する")]
struct Cli {
    /// 開始局面の SFEN（省略時は平手）
    #[arg(long)]
    sfen: Option<String>,

    /// 指し手ファイル（"-" で標準入力、.gz 可）
    #[arg(long, conflicts_with = "moves")]
    file: Option<PathBuf>,

    /// 指し手（空白区切り）
    moves: Vec<String>,

    #[arg(long, value_enum, default_value_t = MoveFormat::Auto)]
    format: MoveFormat,

    /// 追加する定義ファイル（TOML、複数指定可）
    #[arg(long)]
    book: Vec<PathBuf>,

    /// 組み込みの定義を使わない
    #[arg(long, default_value_t = false)]
    no_builtin: bool,

    /// 結果 JSON の出力先（"-" で標準出力）
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct PlyFormations {
    ply: u32,
    usi: String,
    /// 先手視点のタグ
    black: Vec<String>,
    /// 後手視点のタグ
    white: Vec<String>,
}

#[derive(Serialize)]
struct ScanResult {
    plies: Vec<PlyFormations>,
    /// 最終局面で成立している定義
    final_black: Vec<String>,
    final_white: Vec<String>,
}

fn load_book(cli: &Cli) -> Result<FormationBook> {
    let mut book = if cli.no_builtin { FormationBook::new() } else { FormationBook::builtin() };
    for path in &cli.book {
        let text = read_text(path)?;
        let extra = FormationBook::from_toml_str(&text)
            .with_context(|| format!("invalid formation book {}", path.display()))?;
        info!("loaded {} rules from {}", extra.len(), path.display());
        book.extend(extra);
    }
    if book.is_empty() {
        bail!("formation book is empty");
    }
    Ok(book)
}

fn main() -> Result<()> {
    tools::init_logger();
    let cli = Cli::parse();

    let book = load_book(&cli)?;
    let moves = match &cli.file {
        Some(path) => read_moves(path)?,
        None => cli.moves.clone(),
    };
    let start = start_position(cli.sfen.as_deref())?;
    let result = replay(&start, &moves, cli.format);

    let mut plies = Vec::new();
    for step in &result.steps {
        let names = |side: Side| -> Vec<String> {
            tag_formations(&step.before, &step.after, side, step.ply, &book)
                .iter()
                .map(ToString::to_string)
                .collect()
        };
        let (black, white) = (names(Side::Black), names(Side::White));
        if !black.is_empty() || !white.is_empty() {
            println!("{:>4} {:<12} 先手: {}  後手: {}", step.ply, step.kifu, black.join("、"), white.join("、"));
        }
        plies.push(PlyFormations { ply: step.ply, usi: step.usi.clone(), black, white });
    }

    let last = result.final_position();
    let last_ply = result.steps.len() as u32;
    let detected = |side: Side| -> Vec<String> {
        book.detect(last, side, last_ply).iter().map(|rule| rule.name.clone()).collect()
    };
    let summary = ScanResult { plies, final_black: detected(Side::Black), final_white: detected(Side::White) };
    println!("最終局面 先手: {}", summary.final_black.join("、"));
    println!("最終局面 後手: {}", summary.final_white.join("、"));

    if let Some(path) = &cli.json {
        write_json(path, &summary)?;
    }
    if let Some(error) = &result.error {
        bail!("replay stopped: {error}");
    }
    Ok(())
}
