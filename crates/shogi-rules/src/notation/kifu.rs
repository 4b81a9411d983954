//! 日本語の棋譜表記（"7六歩", "5五金打", "2四角成(8八)", "同歩"）
//!
//! 入力は空白を除去し、全角数字・全角括弧を半角に正規化してから解析する。
//! 段は漢数字でも算用数字でもよい（"76歩" は "7六歩" と同じ）。

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::error::{Result, ShogiError};
use crate::movegen::{drop_squares, reachable_squares};
use crate::position::Position;
use crate::types::{KANJI_RANKS, Move, PieceKind, Square};

static DROP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9])([一二三四五六七八九1-9])(.+?)打$").expect("valid drop pattern")
});

static WITH_ORIGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9])([一二三四五六七八九1-9])(.+?)(成|不成)?\(([1-9])([一二三四五六七八九1-9])\)$")
        .expect("valid origin pattern")
});

static DESTINATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9])([一二三四五六七八九1-9])(.+?)(成|不成)?$").expect("valid move pattern")
});

/// 棋譜上の駒名。`exact` でない名前は成駒にも一致する
#[derive(Debug, Clone, Copy)]
struct PieceName {
    kind: PieceKind,
    exact: bool,
}

impl PieceName {
    fn matches(self, kind: PieceKind) -> bool {
        if self.exact { kind == self.kind } else { kind.demote() == self.kind }
    }
}

fn lookup_piece_name(name: &str) -> Option<PieceName> {
    let (kind, exact) = match name {
        "王" | "玉" => (PieceKind::King, false),
        "飛" => (PieceKind::Rook, false),
        "角" => (PieceKind::Bishop, false),
        "金" => (PieceKind::Gold, false),
        "銀" => (PieceKind::Silver, false),
        "桂" => (PieceKind::Knight, false),
        "香" => (PieceKind::Lance, false),
        "歩" => (PieceKind::Pawn, false),
        "竜" | "龍" => (PieceKind::Dragon, true),
        "馬" => (PieceKind::Horse, true),
        "成銀" | "全" => (PieceKind::ProSilver, true),
        "成桂" | "圭" => (PieceKind::ProKnight, true),
        "成香" | "杏" => (PieceKind::ProLance, true),
        "と" => (PieceKind::ProPawn, true),
        _ => return None,
    };
    Some(PieceName { kind, exact })
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '１'..='９' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            '（' => '(',
            '）' => ')',
            _ => c,
        })
        .collect()
}

fn parse_square(file: &str, rank: &str) -> Option<Square> {
    let file = file.parse::<u8>().ok()?;
    let rank = rank.chars().next()?;
    let row = match KANJI_RANKS.iter().position(|&k| k == rank) {
        Some(row) => row as u8,
        None => (rank.to_digit(10)? as u8).checked_sub(1)?,
    };
    Square::from_file_row(file, row)
}

fn malformed(text: &str, reason: &str) -> ShogiError {
    ShogiError::MalformedMove(format!("{reason}: {text}"))
}

/// 日本語の指し手を解析する
///
/// `previous` は直前の指し手の移動先で、"同" を使う場合に必要。
/// 移動先と駒名だけの指し手は、持ち駒を打てるなら駒打ちを優先し、
/// 打てなければ行優先で最初に見つかった到達可能な駒を採用する。
pub fn parse_kifu_move(text: &str, position: &Position, previous: Option<Square>) -> Result<Move> {
    let mut normalized = normalize(text);
    if normalized.is_empty() {
        return Err(malformed(text, "empty move"));
    }
    if let Some(rest) = normalized.strip_prefix('同') {
        let Some(prev) = previous else {
            return Err(malformed(text, "'同' requires the previous move"));
        };
        let replaced = format!("{}{rest}", prev.to_kanji());
        normalized = replaced;
    }

    if let Some(caps) = DROP_RE.captures(&normalized) {
        let to = parse_square(&caps[1], &caps[2]).ok_or_else(|| malformed(text, "bad square"))?;
        let name = lookup_piece_name(&caps[3]).ok_or_else(|| malformed(text, "unknown piece"))?;
        if name.exact || name.kind == PieceKind::King {
            return Err(malformed(text, "only unpromoted pieces can be dropped"));
        }
        return Ok(Move::drop(name.kind, to));
    }

    if let Some(caps) = WITH_ORIGIN_RE.captures(&normalized) {
        let to = parse_square(&caps[1], &caps[2]).ok_or_else(|| malformed(text, "bad square"))?;
        let name = lookup_piece_name(&caps[3]).ok_or_else(|| malformed(text, "unknown piece"))?;
        let from =
            parse_square(&caps[5], &caps[6]).ok_or_else(|| malformed(text, "bad origin square"))?;
        if let Some(piece) = position.piece_at(from) {
            if !name.matches(piece.kind) {
                return Err(malformed(text, "piece name does not match the origin square"));
            }
        }
        let promote = caps.get(4).is_some_and(|m| m.as_str() == "成");
        return Ok(Move::board(from, to, promote));
    }

    if let Some(caps) = DESTINATION_RE.captures(&normalized) {
        let to = parse_square(&caps[1], &caps[2]).ok_or_else(|| malformed(text, "bad square"))?;
        let name = lookup_piece_name(&caps[3]).ok_or_else(|| malformed(text, "unknown piece"))?;
        let promote = caps.get(4).is_some_and(|m| m.as_str() == "成");
        return resolve_destination(text, position, name, to, promote);
    }

    Err(malformed(text, "unrecognized notation"))
}

fn resolve_destination(
    text: &str,
    position: &Position,
    name: PieceName,
    to: Square,
    promote: bool,
) -> Result<Move> {
    let side = position.side_to_move();

    if !promote
        && !name.exact
        && position.hand(side).contains(name.kind)
        && drop_squares(position, name.kind, side).contains(&to)
    {
        return Ok(Move::drop(name.kind, to));
    }

    let mut candidates = position
        .pieces(side)
        .filter(|(_, piece)| name.matches(piece.kind))
        .filter(|&(sq, _)| reachable_squares(position, sq).contains(&to))
        .map(|(sq, _)| sq);

    let Some(from) = candidates.next() else {
        warn!("no piece resolves kifu move {text}");
        return Err(malformed(text, "no piece can reach the destination"));
    };
    if candidates.next().is_some() {
        debug!("ambiguous kifu move {text}, taking {}", from.to_kanji());
    }
    Ok(Move::board(from, to, promote))
}

/// 指し手を日本語表記に変換する
///
/// 盤上の移動は `<移動先><駒名>[成|不成](<移動元>)`、駒打ちは `<移動先><駒名>打`。
/// 移動先が `previous` と同じなら移動先を "同" にする。
pub fn format_kifu_move(position: &Position, mv: Move, previous: Option<Square>) -> String {
    match mv {
        Move::Drop { kind, to } => format!("{}{}打", to.to_kanji(), kind.name()),
        Move::Board { from, to, promote } => {
            let destination = if previous == Some(to) { "同".to_string() } else { to.to_kanji() };
            let piece = position.piece_at(from);
            let name = piece.map_or("", |p| p.kind.name());
            let suffix = match piece {
                _ if promote => "成",
                Some(p)
                    if p.kind.can_promote()
                        && (p.side.in_promotion_zone(from.row())
                            || p.side.in_promotion_zone(to.row())) =>
                {
                    "不成"
                }
                _ => "",
            };
            format!("{destination}{name}{suffix}({})", from.to_kanji())
        }
    }
}
