//! 指し手列の再生（kifu_replay / formation_scan 共通）

use clap::ValueEnum;
use log::warn;
use shogi_rules::notation::json::{PositionView, ReplaySummary};
use shogi_rules::notation::{format_kifu_move, parse_kifu_move, parse_sfen, parse_usi_move};
use shogi_rules::position::play_move;
use shogi_rules::{Move, Position, Square};

/// 入力の指し手表記
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MoveFormat {
    /// USI として読めればUSI、読めなければ日本語表記
    #[default]
    Auto,
    Usi,
    Kifu,
}

/// "startpos" または SFEN から開始局面を作る
pub fn start_position(sfen: Option<&str>) -> shogi_rules::Result<Position> {
    match sfen.map(str::trim) {
        None | Some("startpos") => Ok(Position::startpos()),
        Some(text) => parse_sfen(text.strip_prefix("sfen ").unwrap_or(text)),
    }
}

pub fn parse_move(
    text: &str,
    position: &Position,
    previous: Option<Square>,
    format: MoveFormat,
) -> shogi_rules::Result<Move> {
    match format {
        MoveFormat::Usi => parse_usi_move(text),
        MoveFormat::Kifu => parse_kifu_move(text, position, previous),
        MoveFormat::Auto => {
            parse_usi_move(text).or_else(|_| parse_kifu_move(text, position, previous))
        }
    }
}

/// 1手分の再生結果
#[derive(Debug, Clone)]
pub struct ReplayStep {
    /// 1始まりの手数
    pub ply: u32,
    pub mv: Move,
    pub usi: String,
    pub kifu: String,
    pub before: Position,
    pub after: Position,
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub start: Position,
    pub steps: Vec<ReplayStep>,
    /// 再生を止めた理由
    pub error: Option<String>,
}

impl Replay {
    pub fn final_position(&self) -> &Position {
        self.steps.last().map_or(&self.start, |step| &step.after)
    }

    pub fn to_json(&self) -> ReplaySummary {
        ReplaySummary {
            moves: self.steps.iter().map(|s| s.usi.clone()).collect(),
            position: PositionView::new(self.final_position()),
            error: self.error.clone(),
        }
    }
}

/// `start` から順に指し、最初の失敗で止める
pub fn replay(start: &Position, moves: &[String], format: MoveFormat) -> Replay {
    let mut steps: Vec<ReplayStep> = Vec::with_capacity(moves.len());
    let mut error = None;

    for (index, text) in moves.iter().enumerate() {
        let before = steps.last().map_or(start, |s| &s.after).clone();
        let previous = steps.last().map(|s| s.mv.to());
        let ply = index as u32 + 1;

        let result = parse_move(text, &before, previous, format).and_then(|mv| {
            let kifu = format_kifu_move(&before, mv, previous);
            play_move(&before, mv).map(|after| (mv, kifu, after))
        });
        match result {
            Ok((mv, kifu, after)) => {
                steps.push(ReplayStep { ply, mv, usi: mv.to_string(), kifu, before, after })
            }
            Err(e) => {
                warn!("stopped at ply {ply} ({text}): {e}");
                error = Some(format!("ply {ply} ({text}): {e}"));
                break;
            }
        }
    }

    Replay { start: start.clone(), steps, error }
}
