//! 盤面図（テキスト表示用、逆変換なし）

use crate::position::Position;
use crate::types::{Hand, KANJI_RANKS, Side, Square};

const HEADER: &str = "   9    8    7    6    5    4    3    2    1";
const BORDER: &str = "+-----------------------------------------------+";
const EMPTY_CELL: &str = "  ・";

fn hand_summary(hand: &Hand) -> String {
    if hand.is_empty() {
        return "なし".to_string();
    }
    hand.iter()
        .map(|(kind, n)| {
            if n == 1 { kind.glyph().to_string() } else { format!("{}{n}", kind.glyph()) }
        })
        .collect::<Vec<_>>()
        .join("、")
}

/// 固定幅の盤面図と手番・持ち駒の行を描画する
pub fn render_diagram(pos: &Position) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(16);
    lines.push(HEADER.to_string());
    lines.push(BORDER.to_string());

    for row in 0..9u8 {
        let cells: Vec<String> = (0..9u8)
            .map(|col| match pos.piece_at(Square::at(row, col)) {
                Some(piece) => format!("{}{}", piece.side.marker(), piece.kind.glyph()),
                None => EMPTY_CELL.to_string(),
            })
            .collect();
        lines.push(format!("|{}| {}", cells.join(" "), KANJI_RANKS[row as usize]));
    }

    lines.push(BORDER.to_string());
    lines.push(String::new());
    lines.push(format!("手番: {}", pos.side_to_move().name()));
    lines.push(format!(
        "持ち駒: 先手={} / 後手={}",
        hand_summary(pos.hand(Side::Black)),
        hand_summary(pos.hand(Side::White))
    ));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_sfen;

    #[test]
    fn test_render_startpos() {
        let diagram = render_diagram(&Position::startpos());
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], BORDER);
        assert_eq!(lines[2], "|後香 後桂 後銀 後金 後玉 後金 後銀 後桂 後香| 一");
        assert_eq!(lines[3], "|  ・ 後飛   ・   ・   ・   ・   ・ 後角   ・| 二");
        assert_eq!(lines[10], "|先香 先桂 先銀 先金 先玉 先金 先銀 先桂 先香| 九");
        assert_eq!(lines[11], BORDER);
        assert_eq!(lines[13], "手番: 先手");
        assert_eq!(lines[14], "持ち駒: 先手=なし / 後手=なし");
    }

    #[test]
    fn test_render_hands_and_promoted() {
        let pos = parse_sfen("4k4/9/9/9/9/9/9/9/4K3+R w B2Pg 1").unwrap();
        let diagram = render_diagram(&pos);
        assert!(diagram.contains("先龍| 九"));
        assert!(diagram.contains("手番: 後手"));
        assert!(diagram.contains("持ち駒: 先手=角、歩2 / 後手=金"));
    }
}
