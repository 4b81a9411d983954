//! 外部の評価エンジン・解説生成とのインターフェース
//!
//! ライブラリ自身はエンジンも言語モデルも呼ばない。ここにあるのは受け渡しの型と、
//! 評価値を言葉にするための補助関数だけ。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::MoveTag;
use crate::notation::{format_kifu_move, parse_usi_move};
use crate::position::{Position, play_move};
use crate::types::Square;

fn default_time_ms() -> u64 {
    1000
}

fn default_multipv() -> u32 {
    1
}

/// 局面解析の依頼
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// 局面（省略時は平手初期局面）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfen: Option<String>,
    /// `sfen` からの指し手（USI 形式）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<String>,
    /// 思考時間（ミリ秒）
    #[serde(default = "default_time_ms")]
    pub time_ms: u64,
    /// 探索深さ（指定時は `time_ms` より優先）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// 候補手の数
    #[serde(default = "default_multipv")]
    pub multipv: u32,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        AnalysisRequest {
            sfen: None,
            moves: Vec::new(),
            time_ms: default_time_ms(),
            depth: None,
            multipv: default_multipv(),
        }
    }
}

impl AnalysisRequest {
    pub fn for_sfen(sfen: impl Into<String>) -> AnalysisRequest {
        AnalysisRequest { sfen: Some(sfen.into()), ..AnalysisRequest::default() }
    }
}

/// 候補手1つ分の解析結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    /// 候補手（USI 形式）
    #[serde(rename = "move")]
    pub usi: String,
    /// 評価値（センチポーン、先手視点）
    #[serde(default)]
    pub score_cp: Option<i32>,
    /// 詰みまでの手数
    #[serde(default)]
    pub score_mate: Option<i32>,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub nodes: u64,
    /// 読み筋（USI 形式）
    #[serde(default)]
    pub pv: Vec<String>,
}

impl MoveInfo {
    /// 読み筋を `position` から順に指して日本語の棋譜表記にする
    ///
    /// 解析できない手や反則手が現れたら、そこまでの分を返す。
    pub fn to_kifu(&self, position: &Position) -> Vec<String> {
        let mut current = position.clone();
        let mut previous: Option<Square> = None;
        let mut kifu = Vec::with_capacity(self.pv.len());
        for usi in &self.pv {
            let Ok(mv) = parse_usi_move(usi) else {
                log::warn!("stopping principal variation at malformed move {usi}");
                break;
            };
            let text = format_kifu_move(&current, mv, previous);
            match play_move(&current, mv) {
                Ok(next) => current = next,
                Err(e) => {
                    log::warn!("stopping principal variation at {usi}: {e}");
                    break;
                }
            }
            kifu.push(text);
            previous = Some(mv.to());
        }
        kifu
    }
}

/// 局面解析の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub bestmove: String,
    #[serde(default)]
    pub variations: Vec<MoveInfo>,
    #[serde(default)]
    pub time_ms: u64,
    #[serde(default)]
    pub engine_name: String,
}

impl AnalysisResponse {
    /// 候補手の順位（1始まり）
    pub fn rank_of(&self, usi: &str) -> Option<usize> {
        self.variations.iter().position(|v| v.usi == usi).map(|i| i + 1)
    }
}

/// 局面を評価する外部エンジン
pub trait PositionEvaluator {
    type Error;

    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, Self::Error>;
}

/// タグと読み筋から解説文を作る外部の生成器
pub trait CommentaryGenerator {
    type Error;

    fn generate(&self, tags: &[MoveTag], principal_variation: &[String]) -> Result<String, Self::Error>;
}

/// 評価値（先手視点）を形勢の言葉にする
pub fn describe_evaluation(cp: i32) -> String {
    let side = if cp >= 0 { "先手" } else { "後手" };
    let label = match cp.unsigned_abs() {
        0..100 => return "互角".to_string(),
        100..300 => "やや有利",
        300..500 => "有利",
        500..800 => "優勢",
        800..1500 => "勝勢",
        _ => "必勝",
    };
    format!("{side}{label}")
}

/// 指した手の質
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum MoveQuality {
    Best,
    Good,
    SecondBest,
    Ordinary,
    Dubious,
    Bad,
    Blunder,
}

impl MoveQuality {
    pub fn label(self) -> &'static str {
        match self {
            MoveQuality::Best => "最善手",
            MoveQuality::Good => "好手",
            MoveQuality::SecondBest => "次善手",
            MoveQuality::Ordinary => "普通",
            MoveQuality::Dubious => "疑問手",
            MoveQuality::Bad => "悪手",
            MoveQuality::Blunder => "大悪手",
        }
    }
}

impl fmt::Display for MoveQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<MoveQuality> for String {
    fn from(quality: MoveQuality) -> String {
        quality.label().to_string()
    }
}

/// 候補手の順位と最善手からの評価値の損失で手の質を決める
pub fn classify_move_quality(rank: Option<usize>, loss: i32) -> MoveQuality {
    if rank == Some(1) {
        return MoveQuality::Best;
    }
    match loss {
        i32::MIN..=100 => MoveQuality::Good,
        101..=200 => MoveQuality::SecondBest,
        201..=300 => MoveQuality::Ordinary,
        301..=500 => MoveQuality::Dubious,
        501..=1000 => MoveQuality::Bad,
        _ => MoveQuality::Blunder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_sfen;

    #[test]
    fn test_describe_evaluation_thresholds() {
        assert_eq!(describe_evaluation(0), "互角");
        assert_eq!(describe_evaluation(-99), "互角");
        assert_eq!(describe_evaluation(100), "先手やや有利");
        assert_eq!(describe_evaluation(-300), "後手有利");
        assert_eq!(describe_evaluation(799), "先手優勢");
        assert_eq!(describe_evaluation(800), "先手勝勢");
        assert_eq!(describe_evaluation(-1500), "後手必勝");
        assert_eq!(describe_evaluation(i32::MIN), "後手必勝");
    }

    #[test]
    fn test_classify_move_quality() {
        assert_eq!(classify_move_quality(Some(1), 900), MoveQuality::Best);
        assert_eq!(classify_move_quality(Some(2), 100), MoveQuality::Good);
        assert_eq!(classify_move_quality(None, 101), MoveQuality::SecondBest);
        assert_eq!(classify_move_quality(None, 300), MoveQuality::Ordinary);
        assert_eq!(classify_move_quality(None, 500), MoveQuality::Dubious);
        assert_eq!(classify_move_quality(None, 1000), MoveQuality::Bad);
        assert_eq!(classify_move_quality(None, 1001).to_string(), "大悪手");
    }

    #[test]
    fn test_request_defaults() {
        let request: AnalysisRequest = serde_json::from_str(r#"{"sfen":"startpos"}"#).unwrap();
        assert_eq!(request.time_ms, 1000);
        assert_eq!(request.multipv, 1);
        assert!(request.moves.is_empty());
        assert_eq!(AnalysisRequest::for_sfen("startpos"), request);
    }

    #[test]
    fn test_response_parsing_and_rank() {
        let json = r#"{
            "bestmove": "7g7f",
            "variations": [
                {"move": "7g7f", "score_cp": 50, "score_mate": null, "depth": 10, "nodes": 1000, "pv": ["7g7f", "3c3d"]},
                {"move": "2g2f", "score_cp": 40, "depth": 10, "nodes": 900, "pv": ["2g2f"]}
            ],
            "time_ms": 1000,
            "engine_name": "test"
        }"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.variations.len(), 2);
        assert_eq!(response.rank_of("2g2f"), Some(2));
        assert_eq!(response.rank_of("5g5f"), None);
        let value = serde_json::to_value(&response.variations[0]).unwrap();
        assert_eq!(value["move"], "7g7f");
    }

    #[test]
    fn test_pv_to_kifu() {
        let info = MoveInfo {
            usi: "7g7f".into(),
            score_cp: Some(30),
            score_mate: None,
            depth: 8,
            nodes: 0,
            pv: vec!["7g7f".into(), "3c3d".into(), "8h2b+".into(), "3a2b".into()],
        };
        let kifu = info.to_kifu(&Position::startpos());
        assert_eq!(kifu, vec!["7六歩(7七)", "3四歩(3三)", "2二角成(8八)", "同銀(3一)"]);
    }

    #[test]
    fn test_pv_stops_at_illegal_move() {
        let pos = parse_sfen("4k4/9/9/9/9/9/9/9/4K4 b - 1").unwrap();
        let info = MoveInfo {
            usi: "5i5h".into(),
            score_cp: None,
            score_mate: None,
            depth: 0,
            nodes: 0,
            pv: vec!["5i5h".into(), "5a5b".into(), "P*5e".into(), "5h5g".into()],
        };
        assert_eq!(info.to_kifu(&pos).len(), 2);
        let broken = MoveInfo { pv: vec!["5i5h".into(), "zz".into()], ..info };
        assert_eq!(broken.to_kifu(&pos).len(), 1);
    }
}
