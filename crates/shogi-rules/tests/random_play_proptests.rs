//! ランダムな対局での不変条件

use proptest::prelude::*;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

use shogi_rules::analysis::{diff, implied_move_between};
use shogi_rules::movegen::{check_move, is_checkmate, is_in_check, legal_moves};
use shogi_rules::notation::{format_kifu_move, parse_kifu_move, parse_sfen, parse_usi_move, to_sfen};
use shogi_rules::position::{apply_move, play_move};
use shogi_rules::{Position, Side};

/// 盤上と持ち駒を合わせた駒数（平手は 40）
fn total_pieces(pos: &Position) -> u32 {
    pos.piece_count() as u32 + Side::ALL.iter().map(|&s| pos.hand(s).total()).sum::<u32>()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 16, .. ProptestConfig::default() })]

    #[test]
    fn prop_random_game_invariants(seed in any::<u64>(), plies in 1usize..80) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut pos = Position::startpos();

        for _ in 0..plies {
            prop_assert_eq!(parse_sfen(&to_sfen(&pos)).unwrap(), pos.clone());
            prop_assert_eq!(total_pieces(&pos), 40);

            let moves = legal_moves(&pos);
            let side = pos.side_to_move();
            if moves.is_empty() {
                // 合法手がなく王手されていれば詰み
                prop_assert_eq!(is_checkmate(&pos, side), is_in_check(&pos, side));
                break;
            }
            prop_assert!(!is_checkmate(&pos, side));

            let mv = moves[rng.random_range(0..moves.len())];
            prop_assert!(check_move(&pos, mv).is_ok());
            prop_assert_eq!(parse_usi_move(&mv.to_string()).unwrap(), mv);

            let kifu = format_kifu_move(&pos, mv, None);
            prop_assert_eq!(parse_kifu_move(&kifu, &pos, None).unwrap(), mv);

            let next = play_move(&pos, mv).unwrap();
            prop_assert_eq!(next.clone(), apply_move(&pos, mv).unwrap());
            prop_assert!(!is_in_check(&next, side));
            prop_assert!(diff(&pos, &next).turn_changed);

            let implied = implied_move_between(&pos, &next).unwrap();
            prop_assert_eq!(implied.mv.to(), mv.to());
            pos = next;
        }
    }

    #[test]
    fn prop_board_moves_without_legality_never_panic(seed in any::<u64>()) {
        // 反則手を含めて check_move が理由を返すだけで落ちないこと
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut pos = Position::startpos();
        for _ in 0..20 {
            let moves = legal_moves(&pos);
            if moves.is_empty() {
                break;
            }
            let from = shogi_rules::Square::at(rng.random_range(0..9), rng.random_range(0..9));
            let to = shogi_rules::Square::at(rng.random_range(0..9), rng.random_range(0..9));
            let probe = shogi_rules::Move::board(from, to, rng.random_bool(0.5));
            prop_assert_eq!(check_move(&pos, probe).is_ok(), moves.contains(&probe));
            pos = play_move(&pos, moves[rng.random_range(0..moves.len())]).unwrap();
        }
    }
}
