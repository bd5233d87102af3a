//! Tests for the game engine's move validation and detection.

use strictly_tictactoe::{
    Cell, GameEngine, GameError, GameStatus, PlayerId, Rules, WinRule, apply_move, create_game,
    is_complete, winner,
};

fn players() -> (PlayerId, PlayerId) {
    (PlayerId::generate(), PlayerId::generate())
}

/// Games at several stages of play, all still in progress.
fn in_progress_games() -> Vec<GameEngine> {
    let (p1, p2) = players();
    [&[][..], &[5], &[1, 5], &[1, 5, 9, 2]]
        .iter()
        .map(|moves| GameEngine::replay(p1, p2, Rules::default(), moves).unwrap())
        .collect()
}

#[test]
fn test_create_game() {
    let (p1, p2) = players();
    let game = create_game(p1, p2).unwrap();
    assert_eq!(game.player1(), p1);
    assert_eq!(game.player2(), p2);
    assert_eq!(game.next_player(), p1);
    assert!(!is_complete(&game));
    assert_eq!(winner(&game), None);
}

#[test]
fn test_wrong_player_always_rejected() {
    for game in in_progress_games() {
        let waiting = game.opponent_of(game.next_player());
        for position in 0..=10 {
            let mut attempt = game.clone();
            let result = apply_move(&mut attempt, waiting, position);
            assert!(
                matches!(result, Err(GameError::NotYourTurn { mover, .. }) if mover == waiting)
            );
            assert_eq!(attempt, game);
        }
    }
}

#[test]
fn test_stranger_rejected_as_not_your_turn() {
    let mut game = create_game(PlayerId::generate(), PlayerId::generate()).unwrap();
    let before = game.clone();
    let stranger = PlayerId::generate();
    assert!(matches!(
        game.apply_move(stranger, 5),
        Err(GameError::NotYourTurn { .. })
    ));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_positions_rejected() {
    for game in in_progress_games() {
        for position in [0, 10, 11, 100, u8::MAX] {
            let mut attempt = game.clone();
            let mover = attempt.next_player();
            assert_eq!(
                attempt.apply_move(mover, position),
                Err(GameError::InvalidPosition(position))
            );
            assert_eq!(attempt, game);
        }
    }
}

#[test]
fn test_occupied_cell_rejected() {
    let (p1, p2) = players();
    let mut game = create_game(p1, p2).unwrap();
    game.apply_move(p1, 5).unwrap();
    let before = game.clone();

    assert_eq!(
        game.apply_move(p2, 5),
        Err(GameError::CellOccupied(Cell::new(1, 1).unwrap()))
    );
    assert_eq!(game, before);
    assert_eq!(game.board().get(1, 1), Some(p1));
    assert_eq!(game.next_player(), p2);
}

#[test]
fn test_finished_game_rejects_every_move() {
    let (p1, p2) = players();
    let mut game = GameEngine::replay(p1, p2, Rules::default(), &[1, 4, 2, 5, 3]).unwrap();
    assert_eq!(game.winner(), Some(p1));
    let before = game.clone();

    for position in 0..=10 {
        assert_eq!(
            game.apply_move(game.next_player(), position),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_turn_checked_before_game_over() {
    let (p1, p2) = players();
    let mut game = GameEngine::replay(p1, p2, Rules::default(), &[1, 4, 2, 5, 3]).unwrap();
    // The winner moved last, so the turn already belongs to p2.
    assert!(matches!(
        game.apply_move(p1, 9),
        Err(GameError::NotYourTurn { .. })
    ));
}

#[test]
fn test_turns_alternate() {
    let (p1, p2) = players();
    let mut game = create_game(p1, p2).unwrap();
    for position in [1, 2, 4, 5, 8, 7] {
        let mover = game.next_player();
        game.apply_move(mover, position).unwrap();
        let expected = if mover == p1 { p2 } else { p1 };
        assert_eq!(game.next_player(), expected);
    }
}

#[test]
fn test_no_line_scenario() {
    let (p1, p2) = players();
    let mut game = create_game(p1, p2).unwrap();
    game.apply_move(p1, 1).unwrap();
    game.apply_move(p2, 2).unwrap();
    game.apply_move(p1, 5).unwrap();
    game.apply_move(p2, 3).unwrap();

    let board = game.board();
    assert_eq!(board.get(0, 0), Some(p1));
    assert_eq!(board.get(0, 1), Some(p2));
    assert_eq!(board.get(0, 2), Some(p2));
    assert_eq!(board.get(1, 1), Some(p1));
    assert_eq!(board.marked(), 4);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_top_row_wins() {
    let (p1, p2) = players();
    let mut game = create_game(p1, p2).unwrap();
    game.apply_move(p1, 1).unwrap();
    game.apply_move(p2, 4).unwrap();
    game.apply_move(p1, 2).unwrap();
    game.apply_move(p2, 9).unwrap();
    game.apply_move(p1, 3).unwrap();

    assert!(is_complete(&game));
    assert_eq!(winner(&game), Some(p1));
    assert_eq!(game.status(), GameStatus::Complete(Some(p1)));
}

#[test]
fn test_top_row_wins_when_completed_in_the_middle() {
    let (p1, p2) = players();
    let game = GameEngine::replay(p1, p2, Rules::default(), &[1, 4, 3, 9, 2]).unwrap();
    assert_eq!(game.winner(), Some(p1));
}

#[test]
fn test_second_player_can_win() {
    let (p1, p2) = players();
    let game = GameEngine::replay(p1, p2, Rules::default(), &[1, 2, 4, 5, 9, 8]).unwrap();
    assert_eq!(game.winner(), Some(p2));
}

#[test]
fn test_broken_diagonal_depends_on_rule() {
    let (p1, p2) = players();
    // p1 takes 2, 6, 7: not a straight line, but a wrapped diagonal.
    let moves = [2, 1, 6, 3, 7];

    let wrapped = GameEngine::replay(p1, p2, Rules::default(), &moves).unwrap();
    assert_eq!(wrapped.winner(), Some(p1));

    let rules = Rules {
        win_rule: WinRule::Lines,
        ..Rules::default()
    };
    let straight = GameEngine::replay(p1, p2, rules, &moves).unwrap();
    assert_eq!(straight.status(), GameStatus::InProgress);
}

#[test]
fn test_status_queries_are_stable() {
    let (p1, p2) = players();
    let game = GameEngine::replay(p1, p2, Rules::default(), &[1, 4, 2, 5, 3]).unwrap();
    let first = (is_complete(&game), winner(&game));
    for _ in 0..5 {
        assert_eq!((is_complete(&game), winner(&game)), first);
    }
}

#[test]
fn test_replay_stops_at_first_error() {
    let (p1, p2) = players();
    assert_eq!(
        GameEngine::replay(p1, p2, Rules::default(), &[5, 5]).map(|_| ()),
        Err(GameError::CellOccupied(Cell::new(1, 1).unwrap()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(GameError::GameAlreadyOver.to_string(), "Game is already over");
    assert_eq!(
        GameError::InvalidPosition(0).to_string(),
        "Position 0 is out of range (must be 1-9)"
    );
    assert!(
        GameError::CellOccupied(Cell::new(0, 2).unwrap())
            .to_string()
            .contains("occupied")
    );
}
