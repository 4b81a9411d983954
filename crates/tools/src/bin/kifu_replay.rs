//! 棋譜再生ツール
//!
//! 開始局面から USI または日本語表記の指し手列を再生し、各手の両表記と
//! 指し手タグを表示する。反則手・解析できない手があればそこで止める。

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::info;

use shogi_rules::Side;
use shogi_rules::analysis::tag_move;
use shogi_rules::movegen::is_checkmate;
use shogi_rules::notation::render_diagram;
use tools::common::io::{read_moves, write_json};
use tools::replay::{MoveFormat, replay, start_position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Perspective {
    /// 指した側
    Mover,
    Black,
    White,
}

#[derive(Parser, Debug)]
#[command(name = "kifu_replay")]
#[command(about = "指し手列を再生して各手のタグを表示する")]
struct Cli {
    /// 開始局面の SFEN（省略時は平手）
    #[arg(long)]
    sfen: Option<String>,

    /// 指し手ファイル（"-" で標準入力、.gz 可）
    #[arg(long, conflicts_with = "moves")]
    file: Option<PathBuf>,

    /// 指し手（空白区切り）
    moves: Vec<String>,

    /// 指し手の表記
    #[arg(long, value_enum, default_value_t = MoveFormat::Auto)]
    format: MoveFormat,

    /// タグの視点
    #[arg(long, value_enum, default_value_t = Perspective::Mover)]
    perspective: Perspective,

    /// 最終局面の盤面図を表示する
    #[arg(long, default_value_t = false)]
    diagram: bool,

    /// 再生結果 JSON の出力先（"-" で標準出力）
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tools::init_logger();
    let cli = Cli::parse();

    let moves = match &cli.file {
        Some(path) => read_moves(path)?,
        None => cli.moves.clone(),
    };
    if moves.is_empty() {
        bail!("no moves given (pass moves as arguments or use --file)");
    }
    let start = start_position(cli.sfen.as_deref())?;
    info!("replaying {} moves", moves.len());

    let result = replay(&start, &moves, cli.format);
    for step in &result.steps {
        let perspective = match cli.perspective {
            Perspective::Mover => step.before.side_to_move(),
            Perspective::Black => Side::Black,
            Perspective::White => Side::White,
        };
        let tags = tag_move(&step.before, &step.after, step.mv, perspective);
        let tags: Vec<String> = tags.iter().map(ToString::to_string).collect();
        let marker = if step.before.side_to_move() == Side::Black { '▲' } else { '△' };
        println!("{:>4} {marker}{:<12} {:<6} {}", step.ply, step.kifu, step.usi, tags.join(" / "));
    }

    let last = result.final_position();
    if is_checkmate(last, last.side_to_move()) {
        println!("まで{}手で詰み", result.steps.len());
    }
    if cli.diagram {
        println!();
        println!("{}", render_diagram(last));
    }
    if let Some(path) = &cli.json {
        write_json(path, &result.to_json())?;
    }
    if let Some(error) = &result.error {
        bail!("replay stopped: {error}");
    }
    Ok(())
}
