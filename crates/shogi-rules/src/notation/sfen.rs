//! SFEN 形式の局面文字列
//!
//! `<盤面> <手番> <持ち駒> [手数]`。手数は読み飛ばし、出力時は常に `1` を書く。

use std::fmt::Write as _;

use crate::error::{Result, ShogiError};
use crate::position::Position;
use crate::types::{Piece, PieceKind, Side, Square};

fn malformed(msg: impl Into<String>) -> ShogiError {
    ShogiError::MalformedNotation(msg.into())
}

/// SFEN 文字列を局面に変換する（先頭の `sfen ` は省略可）
pub fn parse_sfen(sfen: &str) -> Result<Position> {
    let mut fields: Vec<&str> = sfen.split_whitespace().collect();
    if fields.first() == Some(&"sfen") {
        fields.remove(0);
    }
    if !(3..=4).contains(&fields.len()) {
        return Err(malformed(format!("expected 3 or 4 fields, got {}: {sfen}", fields.len())));
    }

    let mut pos = Position::empty();
    parse_board(fields[0], &mut pos)?;

    let side = match fields[1] {
        "b" => Side::Black,
        "w" => Side::White,
        other => return Err(malformed(format!("invalid side to move: {other}"))),
    };
    pos.set_side_to_move(side);

    parse_hands(fields[2], &mut pos)?;
    Ok(pos)
}

fn parse_board(board: &str, pos: &mut Position) -> Result<()> {
    let rows: Vec<&str> = board.split('/').collect();
    if rows.len() != 9 {
        return Err(malformed(format!("expected 9 rows, got {}", rows.len())));
    }

    for (row, text) in rows.iter().enumerate() {
        let mut col = 0usize;
        let mut promoted = false;
        for c in text.chars() {
            if col >= 9 {
                return Err(malformed(format!("row {} has more than 9 columns", row + 1)));
            }
            match c {
                '1'..='9' => {
                    if promoted {
                        return Err(malformed(format!("'+' followed by a digit in row {}", row + 1)));
                    }
                    col += c as usize - '0' as usize;
                }
                '+' => {
                    if promoted {
                        return Err(malformed(format!("repeated '+' in row {}", row + 1)));
                    }
                    promoted = true;
                }
                _ => {
                    let base = PieceKind::from_letter(c)
                        .ok_or_else(|| malformed(format!("unknown piece letter: {c}")))?;
                    let kind = if promoted {
                        base.promote()
                            .ok_or_else(|| malformed(format!("piece cannot be promoted: +{c}")))?
                    } else {
                        base
                    };
                    let side = if c.is_ascii_uppercase() { Side::Black } else { Side::White };
                    pos.set_piece(Square::at(row as u8, col as u8), Some(Piece::new(kind, side)));
                    promoted = false;
                    col += 1;
                }
            }
        }
        if promoted {
            return Err(malformed(format!("truncated promotion marker in row {}", row + 1)));
        }
        if col != 9 {
            return Err(malformed(format!("row {} has {col} columns", row + 1)));
        }
    }
    Ok(())
}

fn parse_hands(hands: &str, pos: &mut Position) -> Result<()> {
    if hands == "-" {
        return Ok(());
    }

    let mut count: Option<u32> = None;
    for c in hands.chars() {
        if let Some(digit) = c.to_digit(10) {
            let next = count.unwrap_or(0) * 10 + digit;
            if next > u32::from(u8::MAX) {
                return Err(malformed(format!("hand count too large: {hands}")));
            }
            count = Some(next);
            continue;
        }

        let kind = PieceKind::from_letter(c)
            .filter(|&k| k != PieceKind::King)
            .ok_or_else(|| malformed(format!("invalid hand piece: {c}")))?;
        let n = count.take().unwrap_or(1);
        if n == 0 {
            return Err(malformed(format!("zero hand count: {hands}")));
        }
        let side = if c.is_ascii_uppercase() { Side::Black } else { Side::White };
        let total = u32::from(pos.hand(side).count(kind)) + n;
        let total =
            u8::try_from(total).map_err(|_| malformed(format!("hand count too large: {hands}")))?;
        pos.hand_mut(side).set_count(kind, total)?;
    }

    if count.is_some() {
        return Err(malformed(format!("hand count without a piece: {hands}")));
    }
    Ok(())
}

/// 局面を SFEN 文字列に変換する
pub fn to_sfen(pos: &Position) -> String {
    let mut out = String::with_capacity(96);

    for row in 0..9u8 {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for col in 0..9u8 {
            match pos.piece_at(Square::at(row, col)) {
                Some(piece) => {
                    if empty > 0 {
                        let _ = write!(out, "{empty}");
                        empty = 0;
                    }
                    out.push_str(&piece.to_sfen());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            let _ = write!(out, "{empty}");
        }
    }

    out.push(' ');
    out.push(pos.side_to_move().to_sfen_char());
    out.push(' ');
    out.push_str(&hands_to_sfen(pos));
    out.push_str(" 1");
    out
}

/// 持ち駒部分（先手大文字 → 後手小文字、飛 角 金 銀 桂 香 歩 順）
pub fn hands_to_sfen(pos: &Position) -> String {
    let mut out = String::new();
    for side in Side::ALL {
        for (kind, n) in pos.hand(side).iter() {
            if n > 1 {
                let _ = write!(out, "{n}");
            }
            let letter = kind.letter();
            out.push(if side == Side::Black { letter } else { letter.to_ascii_lowercase() });
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}
