//! 公開 API を通した対局の流れ

use shogi_rules::analysis::{MoveTag, implied_move_between, tag_move};
use shogi_rules::evaluation::MoveInfo;
use shogi_rules::formation::{FormationBook, tag_formations};
use shogi_rules::movegen::{is_checkmate, is_in_check, legal_moves};
use shogi_rules::notation::{format_kifu_move, parse_kifu_move, parse_sfen, parse_usi_move, to_sfen};
use shogi_rules::position::{play_move, play_usi};
use shogi_rules::{IllegalMove, PieceKind, Position, SFEN_STARTPOS, ShogiError, Side, Square};

#[test]
fn test_startpos_round_trip() {
    let pos = parse_sfen(SFEN_STARTPOS).unwrap();
    assert_eq!(pos, Position::startpos());
    assert_eq!(to_sfen(&pos), SFEN_STARTPOS);
    assert_eq!(legal_moves(&pos).len(), 30);
}

#[test]
fn test_first_move() {
    let pos = Position::startpos();
    let next = play_usi(&pos, "7g7f").unwrap();
    assert_eq!(
        to_sfen(&next),
        "lnsgkgsnl/1r5b1/ppppppppp/9/9/2P6/PP1PPPPPP/1B5R1/LNSGKGSNL w - 1"
    );
    // 元の局面は変わらない
    assert_eq!(pos, Position::startpos());

    let implied = implied_move_between(&pos, &next).unwrap();
    assert_eq!(implied.mv, parse_usi_move("7g7f").unwrap());
    assert_eq!(implied.captured, None);
}

#[test]
fn test_second_pawn_drop_on_file_is_rejected() {
    let pos = parse_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2P 1").unwrap();
    let after = play_usi(&pos, "P*5e").unwrap();
    let after = play_usi(&after, "5a4a").unwrap();
    assert_eq!(
        play_usi(&after, "P*5d").unwrap_err(),
        ShogiError::IllegalMove(IllegalMove::TwoPawns)
    );
    assert!(play_usi(&after, "P*4d").is_ok());
}

#[test]
fn test_occupied_drop_is_rejected() {
    let pos = parse_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2P 1").unwrap();
    let after = play_usi(&pos, "P*5e").unwrap();
    let after = play_usi(&after, "5a4a").unwrap();
    assert_eq!(
        play_usi(&after, "P*5e").unwrap_err(),
        ShogiError::IllegalMove(IllegalMove::Occupied)
    );
}

#[test]
fn test_malformed_usi_is_not_an_illegal_move() {
    let pos = Position::startpos();
    assert!(matches!(play_usi(&pos, "7g7"), Err(ShogiError::MalformedMove(_))));
    assert!(matches!(play_usi(&pos, "K*5e"), Err(ShogiError::MalformedMove(_))));
    assert!(matches!(
        play_usi(&pos, "7f7e"),
        Err(ShogiError::IllegalMove(IllegalMove::EmptyOrigin))
    ));
}

#[test]
fn test_corner_mate() {
    let pos = parse_sfen("8k/8G/7G1/9/9/9/9/9/K6R1 w - 1").unwrap();
    assert!(is_in_check(&pos, Side::White));
    assert!(is_checkmate(&pos, Side::White));
    assert!(legal_moves(&pos).is_empty());
}

#[test]
fn test_bishop_exchange_opening() {
    let moves = ["7g7f", "3c3d", "8h2b+", "3a2b"];
    let mut pos = Position::startpos();
    let mut kifu = Vec::new();
    let mut previous: Option<Square> = None;
    for usi in moves {
        let mv = parse_usi_move(usi).unwrap();
        let text = format_kifu_move(&pos, mv, previous);
        assert_eq!(parse_kifu_move(&text, &pos, previous).unwrap(), mv, "{text}");
        kifu.push(text);
        pos = play_move(&pos, mv).unwrap();
        previous = Some(mv.to());
    }
    assert_eq!(kifu, ["7六歩(7七)", "3四歩(3三)", "2二角成(8八)", "同銀(3一)"]);
    assert_eq!(pos.hand(Side::Black).count(PieceKind::Bishop), 1);
    assert_eq!(pos.hand(Side::White).count(PieceKind::Bishop), 1);

    let info = MoveInfo {
        usi: moves[0].into(),
        score_cp: Some(40),
        score_mate: None,
        depth: 12,
        nodes: 0,
        pv: moves.iter().map(|m| m.to_string()).collect(),
    };
    assert_eq!(info.to_kifu(&Position::startpos()), kifu);
}

#[test]
fn test_tags_along_a_game() {
    let book = FormationBook::builtin();
    let mut pos = Position::startpos();
    let mut all_tags = Vec::new();
    for (ply, usi) in ["7g7f", "3c3d", "8h2b+", "3a2b"].into_iter().enumerate() {
        let mv = parse_usi_move(usi).unwrap();
        let next = play_move(&pos, mv).unwrap();
        let mut tags = tag_move(&pos, &next, mv, Side::Black);
        tags.extend(tag_formations(&pos, &next, Side::Black, ply as u32 + 1, &book));
        all_tags.push(tags);
        pos = next;
    }
    assert!(all_tags[0].contains(&MoveTag::BishopLineOpened));
    assert!(all_tags[1].contains(&MoveTag::OpponentBishopLineOpened));
    assert!(all_tags[2].contains(&MoveTag::Capture(PieceKind::Bishop)));
    assert!(all_tags[3].contains(&MoveTag::Captured(PieceKind::Horse)));

    let texts: Vec<String> = all_tags[2].iter().map(ToString::to_string).collect();
    assert!(texts.contains(&"角を取る".to_string()), "{texts:?}");
}
