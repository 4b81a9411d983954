//! 指し手の戦術的な特徴をタグにする
//!
//! 駒取り、角道・飛車道の変化、王手・詰みを、指定した視点（perspective）から見た
//! 日本語のタグとして返す。入力が想定外の形でも失敗せず、該当するタグを出さないだけになる。

use std::fmt;

use serde::{Serialize, Serializer};

use super::lines::{farthest_zone, is_path_clear_to, open_range};
use crate::movegen::{DIAGONALS, ORTHOGONALS, is_checkmate, is_in_check};
use crate::position::Position;
use crate::types::{Move, PieceKind, Side, Square};

/// 指し手のタグ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveTag {
    /// 相手の駒を取る
    Capture(PieceKind),
    /// 自分の駒を取られる
    Captured(PieceKind),

    BishopLineOpened,
    BishopLinePassed,
    BishopLineBlocked,
    OpponentBishopLineBlocked,
    OpponentBishopLineClosed,
    OpponentBishopLineOpened,

    /// 飛車の前が1マス空く
    RookAdvanced,
    /// 相手の飛車の前が1マス空く
    OpponentRookAdvanced,
    RookLineOpened,
    RookLinePassed,
    RookLineBlocked,
    OpponentRookLineBlocked,
    OpponentRookLineOpened,

    CheckEvaded,
    CheckmateDelivered,
    CheckmateSuffered,
    CheckGiven,
    CheckReceived,

    /// 自分の囲い・戦法が成立した
    Formation(String),
    /// 相手の囲い・戦法が成立した
    OpponentFormation(String),
}

impl fmt::Display for MoveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveTag::Capture(kind) => return write!(f, "{}を取る", kind.name()),
            MoveTag::Captured(kind) => return write!(f, "{}を取られる", kind.name()),
            MoveTag::Formation(name) => return f.write_str(name),
            MoveTag::OpponentFormation(name) => return write!(f, "相手が{name}"),
            MoveTag::BishopLineOpened => "角道を空ける",
            MoveTag::BishopLinePassed => "角道が通る",
            MoveTag::BishopLineBlocked => "角道を塞がれる",
            MoveTag::OpponentBishopLineBlocked => "相手の角道を塞ぐ",
            MoveTag::OpponentBishopLineClosed => "相手の角道が塞がる",
            MoveTag::OpponentBishopLineOpened => "相手が角道を空けてくる",
            MoveTag::RookAdvanced => "飛車先を伸ばす",
            MoveTag::OpponentRookAdvanced => "飛車先を攻める",
            MoveTag::RookLineOpened => "飛車道を空ける",
            MoveTag::RookLinePassed => "飛車道が通る",
            MoveTag::RookLineBlocked => "飛車道を塞がれる",
            MoveTag::OpponentRookLineBlocked => "相手の飛車道を塞ぐ",
            MoveTag::OpponentRookLineOpened => "相手が飛車道を通してくる",
            MoveTag::CheckEvaded => "王手回避",
            MoveTag::CheckmateDelivered => "相手を詰ませる",
            MoveTag::CheckmateSuffered => "詰まされる",
            MoveTag::CheckGiven => "王手をかける",
            MoveTag::CheckReceived => "王手をかけられる",
        };
        f.write_str(text)
    }
}

impl Serialize for MoveTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 1手を挟んだ2局面に対するタグ
struct TagContext<'a> {
    before: &'a Position,
    after: &'a Position,
    mv: Move,
    perspective: Side,
    /// perspective 側が指した手か
    self_move: bool,
}

/// `before` から `mv` を指して `after` になった手を `perspective` の視点でタグ付けする
///
/// 指した側は `before` の手番とみなす。
pub fn tag_move(before: &Position, after: &Position, mv: Move, perspective: Side) -> Vec<MoveTag> {
    let ctx = TagContext {
        before,
        after,
        mv,
        perspective,
        self_move: before.side_to_move() == perspective,
    };

    let mut tags = Vec::new();
    if let Some(tag) = ctx.capture_tag() {
        tags.push(tag);
    }
    ctx.bishop_line_tags(&mut tags);
    ctx.rook_line_tags(&mut tags);
    ctx.check_tags(&mut tags);
    tags
}

impl TagContext<'_> {
    fn capture_tag(&self) -> Option<MoveTag> {
        self.mv.from()?;
        let captured = self.before.piece_at(self.mv.to())?;
        if captured.side == self.before.side_to_move() {
            return None;
        }
        Some(if self.self_move {
            MoveTag::Capture(captured.kind)
        } else {
            MoveTag::Captured(captured.kind)
        })
    }

    /// `side` の飛び駒（`kinds`）のうち、動かした駒以外の位置
    fn sliders(&self, side: Side, kinds: [PieceKind; 2]) -> Vec<Square> {
        self.before
            .pieces(side)
            .filter(|(sq, piece)| kinds.contains(&piece.kind) && Some(*sq) != self.mv.from())
            .map(|(sq, _)| sq)
            .collect()
    }

    /// 指し手の移動元が筋上にあったか、移動先が筋上にあるか
    fn line_contact(&self, origin: Square, dir: (i8, i8)) -> (bool, bool) {
        let was_on_line = self
            .mv
            .from()
            .is_some_and(|from| is_path_clear_to(self.before, origin, from, dir));
        let is_on_line = is_path_clear_to(self.after, origin, self.mv.to(), dir);
        (was_on_line, is_on_line)
    }

    fn bishop_line_tags(&self, tags: &mut Vec<MoveTag>) {
        const BISHOPS: [PieceKind; 2] = [PieceKind::Bishop, PieceKind::Horse];

        for origin in self.sliders(self.perspective, BISHOPS) {
            for dir in DIAGONALS {
                let (was, is) = self.line_contact(origin, dir);
                if was == is {
                    continue;
                }
                let zone_before = farthest_zone(self.before, origin, dir, self.perspective);
                let zone_after = farthest_zone(self.after, origin, dir, self.perspective);
                if zone_before == zone_after {
                    continue;
                }
                match (is, self.self_move) {
                    (true, true) => {}
                    (true, false) => tags.push(MoveTag::BishopLineBlocked),
                    (false, true) => tags.push(MoveTag::BishopLineOpened),
                    (false, false) => tags.push(MoveTag::BishopLinePassed),
                }
            }
        }

        for origin in self.sliders(self.perspective.opponent(), BISHOPS) {
            for dir in DIAGONALS {
                let (was, is) = self.line_contact(origin, dir);
                if was == is {
                    continue;
                }
                match (is, self.self_move) {
                    (true, true) => tags.push(MoveTag::OpponentBishopLineBlocked),
                    (true, false) => tags.push(MoveTag::OpponentBishopLineClosed),
                    (false, true) => {}
                    (false, false) => tags.push(MoveTag::OpponentBishopLineOpened),
                }
            }
        }
    }

    fn rook_line_tags(&self, tags: &mut Vec<MoveTag>) {
        const ROOKS: [PieceKind; 2] = [PieceKind::Rook, PieceKind::Dragon];

        for own in [true, false] {
            let side = if own { self.perspective } else { self.perspective.opponent() };
            for origin in self.sliders(side, ROOKS) {
                for dir in ORTHOGONALS {
                    let (was, is) = self.line_contact(origin, dir);
                    if !was && !is {
                        continue;
                    }
                    let range_before = i16::from(open_range(self.before, origin, dir));
                    let range_after = i16::from(open_range(self.after, origin, dir));
                    let change = range_after - range_before;

                    if was && is && change == 1 {
                        tags.push(if own { MoveTag::RookAdvanced } else { MoveTag::OpponentRookAdvanced });
                        continue;
                    }
                    if change.abs() < 3 {
                        continue;
                    }
                    let tag = match (own, is, self.self_move) {
                        (true, true, false) => Some(MoveTag::RookLineBlocked),
                        (true, false, true) => Some(MoveTag::RookLineOpened),
                        (true, false, false) => Some(MoveTag::RookLinePassed),
                        (false, true, true) => Some(MoveTag::OpponentRookLineBlocked),
                        (false, false, false) => Some(MoveTag::OpponentRookLineOpened),
                        _ => None,
                    };
                    tags.extend(tag);
                }
            }
        }
    }

    fn check_tags(&self, tags: &mut Vec<MoveTag>) {
        if is_in_check(self.before, self.perspective) && !is_in_check(self.after, self.perspective) {
            tags.push(MoveTag::CheckEvaded);
        }

        let defender = self.before.side_to_move().opponent();
        if is_checkmate(self.after, defender) {
            tags.push(if self.self_move {
                MoveTag::CheckmateDelivered
            } else {
                MoveTag::CheckmateSuffered
            });
            return;
        }
        if is_in_check(self.after, defender) {
            tags.push(if self.self_move { MoveTag::CheckGiven } else { MoveTag::CheckReceived });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{parse_sfen, parse_usi_move};
    use crate::position::apply_move;

    fn tags_for(before: &Position, usi: &str, perspective: Side) -> Vec<MoveTag> {
        let mv = parse_usi_move(usi).unwrap();
        let after = apply_move(before, mv).unwrap();
        tag_move(before, &after, mv, perspective)
    }

    fn after_opening() -> Position {
        // 7六歩・3四歩
        parse_sfen("lnsgkgsnl/1r5b1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/1B5R1/LNSGKGSNL b - 1").unwrap()
    }

    #[test]
    fn test_opening_the_bishop_diagonal() {
        let pos = Position::startpos();
        assert_eq!(tags_for(&pos, "7g7f", Side::Black), vec![MoveTag::BishopLineOpened]);
        assert_eq!(tags_for(&pos, "7g7f", Side::White), vec![MoveTag::OpponentBishopLineOpened]);
    }

    #[test]
    fn test_rook_pawn_push() {
        let pos = Position::startpos();
        assert_eq!(tags_for(&pos, "2g2f", Side::Black), vec![MoveTag::RookAdvanced]);
    }

    #[test]
    fn test_bishop_exchange_capture() {
        let pos = after_opening();
        let black = tags_for(&pos, "8h2b+", Side::Black);
        assert_eq!(black.first(), Some(&MoveTag::Capture(PieceKind::Bishop)));
        let white = tags_for(&pos, "8h2b+", Side::White);
        assert_eq!(white.first(), Some(&MoveTag::Captured(PieceKind::Bishop)));
        assert_eq!(white[0].to_string(), "角を取られる");
    }

    #[test]
    fn test_blocking_the_opponent_bishop() {
        let pos = after_opening();
        let tags = tags_for(&pos, "6g6f", Side::Black);
        assert!(tags.contains(&MoveTag::OpponentBishopLineBlocked), "{tags:?}");
        // 自分の角道を自分で止めた場合はタグにしない
        assert!(!tags.contains(&MoveTag::BishopLineBlocked));
    }

    #[test]
    fn test_check_and_evasion() {
        let pos = parse_sfen("4k4/9/9/9/9/9/9/R8/3K5 b - 1").unwrap();
        assert_eq!(tags_for(&pos, "9h5h", Side::Black), vec![MoveTag::CheckGiven]);
        assert_eq!(tags_for(&pos, "9h5h", Side::White), vec![MoveTag::CheckReceived]);

        let checked = apply_move(&pos, parse_usi_move("9h5h").unwrap()).unwrap();
        assert_eq!(tags_for(&checked, "5a4a", Side::White), vec![MoveTag::CheckEvaded]);
    }

    #[test]
    fn test_checkmate_replaces_check_tag() {
        let pos = parse_sfen("8k/9/7GG/9/9/9/9/9/K8 b - 1").unwrap();
        assert_eq!(tags_for(&pos, "1c1b", Side::Black), vec![MoveTag::CheckmateDelivered]);
        assert_eq!(tags_for(&pos, "1c1b", Side::White), vec![MoveTag::CheckmateSuffered]);
    }

    #[test]
    fn test_tag_text_and_serialization() {
        assert_eq!(MoveTag::Capture(PieceKind::Dragon).to_string(), "竜を取る");
        assert_eq!(MoveTag::OpponentFormation("美濃囲い".into()).to_string(), "相手が美濃囲い");
        let json = serde_json::to_string(&vec![MoveTag::CheckGiven, MoveTag::RookAdvanced]).unwrap();
        assert_eq!(json, r#"["王手をかける","飛車先を伸ばす"]"#);
    }
}
