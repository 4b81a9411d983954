//! USI 形式の指し手文字列

use crate::error::{Result, ShogiError};
use crate::types::{Move, PieceKind, Square};

fn malformed(s: &str, reason: &str) -> ShogiError {
    ShogiError::MalformedMove(format!("{reason}: {s}"))
}

fn parse_square(s: &str, text: &[u8]) -> Result<Square> {
    let file = text[0];
    let rank = text[1];
    if !(b'1'..=b'9').contains(&file) {
        return Err(malformed(s, "file must be 1-9"));
    }
    if !(b'a'..=b'i').contains(&rank) {
        return Err(malformed(s, "rank must be a-i"));
    }
    Ok(Square::at(rank - b'a', 9 - (file - b'0')))
}

/// USI 形式（"7g7f", "8h2b+", "P*5e"）の指し手を解析する
pub fn parse_usi_move(s: &str) -> Result<Move> {
    let bytes = s.as_bytes();
    match bytes.len() {
        4 if bytes[1] == b'*' => {
            let kind = PieceKind::from_letter(bytes[0] as char)
                .filter(|&k| k != PieceKind::King && bytes[0].is_ascii_uppercase())
                .ok_or_else(|| malformed(s, "invalid drop piece"))?;
            let to = parse_square(s, &bytes[2..4])?;
            Ok(Move::drop(kind, to))
        }
        4 | 5 => {
            let promote = match bytes.get(4) {
                None => false,
                Some(b'+') => true,
                Some(_) => return Err(malformed(s, "unexpected trailing character")),
            };
            let from = parse_square(s, &bytes[0..2])?;
            let to = parse_square(s, &bytes[2..4])?;
            Ok(Move::board(from, to, promote))
        }
        _ => Err(malformed(s, "invalid length")),
    }
}

/// 指し手を USI 形式に変換する
pub fn move_to_usi(mv: Move) -> String {
    mv.to_string()
}
