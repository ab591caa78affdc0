//! 回合與能量測試

mod test_helpers;

use board::board::Board;
use board::domain::constants::STARTING_ENERGY;
use board::domain::core_types::{ColorName, PlayerId, Position};
use board::error::ActionError;
use test_helpers::{ScenarioBuilder, id_at, setup};

#[test]
fn test_end_turn_alternates() {
    let mut board = Board::standard();
    assert_eq!(board.current_player_id(), PlayerId::One);
    assert_eq!(board.end_turn(), PlayerId::Two);
    assert_eq!(board.current_player_id(), PlayerId::Two);
    assert_eq!(board.end_turn(), PlayerId::One);
    assert_eq!(board.current_player_id(), PlayerId::One);
}

#[test]
fn test_end_turn_resets_new_player_energy() {
    let (mut board, _) = setup(
        r#"
K . .
. . .
. . k
"#,
    );
    let king = id_at(&board, 0, 0);
    let enemy_king = id_at(&board, 2, 2);

    board.move_piece(king, Position::new(0, 1)).unwrap();
    assert_eq!(board.player(PlayerId::One).energy, 0);

    board.end_turn();
    assert_eq!(board.player(PlayerId::Two).energy, STARTING_ENERGY);
    // 前一位玩家的能量在自己回合開始前不會重設
    assert_eq!(board.player(PlayerId::One).energy, 0);

    board.move_piece(enemy_king, Position::new(2, 1)).unwrap();
    board.end_turn();
    assert_eq!(board.player(PlayerId::One).energy, STARTING_ENERGY);
    assert_eq!(board.player(PlayerId::Two).energy, 0);
}

#[test]
fn test_end_turn_resets_any_saved_energy() {
    // (玩家 1 能量, 玩家 2 能量)
    let test_data = [(0, 0), (-2, -5), (5, 3), (1, 0)];

    for (idx, (energy1, energy2)) in test_data.into_iter().enumerate() {
        let state = ScenarioBuilder::from_ascii(
            r#"
K .
. k
"#,
        )
        .player(PlayerId::One, energy1, 3, ColorName::White)
        .player(PlayerId::Two, energy2, 3, ColorName::Red)
        .to_state()
        .unwrap();
        let mut board = Board::from_state(&state).unwrap();
        assert_eq!(board.player(PlayerId::One).energy, energy1, "Case {}", idx);

        assert_eq!(board.end_turn(), PlayerId::Two, "Case {}", idx);
        assert_eq!(board.player(PlayerId::Two).energy, STARTING_ENERGY, "Case {}", idx);
        assert_eq!(board.end_turn(), PlayerId::One, "Case {}", idx);
        assert_eq!(board.player(PlayerId::One).energy, STARTING_ENERGY, "Case {}", idx);
    }
}

#[test]
fn test_end_turn_without_acting() {
    let (mut board, _) = setup(
        r#"
K .
. k
"#,
    );
    board.end_turn();
    board.end_turn();
    assert_eq!(board.player(PlayerId::One).energy, STARTING_ENERGY);
    assert_eq!(board.player(PlayerId::Two).energy, STARTING_ENERGY);
}

#[test]
fn test_one_action_per_turn() {
    let (mut board, _) = setup(
        r#"
R . . .
. . . .
. . . .
. . . r
"#,
    );
    let rook = id_at(&board, 0, 0);
    let enemy_rook = id_at(&board, 3, 3);

    for turn in 0..4 {
        let (mover, row) = match board.current_player_id() {
            PlayerId::One => (rook, 0),
            PlayerId::Two => (enemy_rook, 3),
        };
        let col = if turn % 4 < 2 { 1 } else { 2 };
        assert_eq!(board.move_piece(mover, Position::new(row, col)), Ok(()));
        assert!(matches!(
            board.move_piece(mover, Position::new(row, 3 - col)),
            Err(ActionError::NoEnergy { .. })
        ));
        board.end_turn();
    }
    assert_eq!(board.piece(rook).unwrap().pos, Position::new(0, 2));
    assert_eq!(board.piece(enemy_rook).unwrap().pos, Position::new(3, 2));
}

#[test]
fn test_highlights_ignore_turn_and_energy() {
    let (mut board, _) = setup(
        r#"
. . .
. k .
. . K
"#,
    );
    let king = id_at(&board, 2, 2);
    let enemy_king = id_at(&board, 1, 1);
    let before = board.highlights(enemy_king);
    assert!(!before.is_empty());

    board.move_piece(king, Position::new(2, 1)).unwrap();
    assert_eq!(board.player(PlayerId::One).energy, 0);
    assert!(!board.highlights(king).is_empty());
    assert_eq!(board.highlights(enemy_king).len(), before.len());
}
