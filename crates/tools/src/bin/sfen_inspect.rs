//! 局面検査ツール
//!
//! SFEN を読み込み、盤面図・王手/詰みの状態・合法手一覧を表示する。
//! `--json` で盤面の JSON 表現を出力する。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use shogi_rules::movegen::{is_checkmate, is_in_check, legal_moves};
use shogi_rules::notation::json::PositionView;
use shogi_rules::notation::{format_kifu_move, render_diagram};
use tools::common::io::{read_text, write_json};
use tools::replay::start_position;

#[derive(Parser, Debug)]
#[command(name = "sfen_inspect")]
#[command(about = "SFEN 局面の盤面図と合法手を表示する")]
struct Cli {
    /// SFEN 文字列（"startpos" 可）
    #[arg(long, conflicts_with = "file")]
    sfen: Option<String>,

    /// SFEN を1行ずつ書いたファイル（"-" で標準入力、.gz 可）
    #[arg(long)]
    file: Option<PathBuf>,

    /// 合法手一覧を表示しない
    #[arg(long, default_value_t = false)]
    no_moves: bool,

    /// JSON の出力先（"-" で標準出力）
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct Inspection {
    position: PositionView,
    in_check: bool,
    checkmate: bool,
    legal_moves: Vec<String>,
}

fn inspect(sfen: &str, cli: &Cli) -> Result<Inspection> {
    let pos = start_position(Some(sfen)).with_context(|| format!("invalid SFEN: {sfen}"))?;
    let side = pos.side_to_move();
    let moves = legal_moves(&pos);
    let in_check = is_in_check(&pos, side);
    let checkmate = in_check && is_checkmate(&pos, side);

    println!("{}", render_diagram(&pos));
    println!();
    if checkmate {
        println!("詰み");
    } else if in_check {
        println!("王手");
    } else if moves.is_empty() {
        println!("合法手なし");
    }
    println!("合法手: {}", moves.len());
    if !cli.no_moves {
        for mv in &moves {
            println!("  {:<6} {}", mv.to_string(), format_kifu_move(&pos, *mv, None));
        }
    }

    Ok(Inspection {
        position: PositionView::new(&pos),
        in_check,
        checkmate,
        legal_moves: moves.iter().map(ToString::to_string).collect(),
    })
}

fn main() -> Result<()> {
    tools::init_logger();
    let cli = Cli::parse();

    let sfens: Vec<String> = match &cli.file {
        Some(path) => read_text(path)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        None => vec![cli.sfen.clone().unwrap_or_else(|| "startpos".to_string())],
    };
    info!("inspecting {} position(s)", sfens.len());

    let mut results = Vec::with_capacity(sfens.len());
    for (i, sfen) in sfens.iter().enumerate() {
        if i > 0 {
            println!("\n----\n");
        }
        results.push(inspect(sfen, &cli)?);
    }

    if let Some(path) = &cli.json {
        if let [single] = results.as_slice() {
            write_json(path, single)?;
        } else {
            write_json(path, &results)?;
        }
    }
    Ok(())
}
