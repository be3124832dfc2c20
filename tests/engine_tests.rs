//! Rules engine integration tests: legality, stacking, turn order, wins.

use stack_escape::core::{BoardState, Color, Move, MoveResult, Shape};
use stack_escape::rules::{Game, GameBuilder, TurnObligation, WinReason, MAX_CASCADE_STEPS};

fn mv(player: Color, shape: Shape, x: i8, y: i8) -> Move {
    Move::new(player, shape, x, y)
}

fn targets(game: &Game, shape: Shape) -> Vec<(i8, i8)> {
    game.legal_moves()
        .into_iter()
        .filter(|m| m.shape == shape)
        .map(|m| m.target())
        .collect()
}

/// Black's five pieces stacked on (2, 3) with the plus on top.
fn black_tower() -> GameBuilder {
    GameBuilder::new()
        .place(Color::Black, Shape::Circle, 2, 3)
        .place(Color::Black, Shape::Wave, 2, 3)
        .place(Color::Black, Shape::Square, 2, 3)
        .place(Color::Black, Shape::Star, 2, 3)
        .place(Color::Black, Shape::Plus, 2, 3)
}

// =============================================================================
// Starting Position
// =============================================================================

#[test]
fn test_starting_layout() {
    let board = BoardState::starting();

    for (i, shape) in Shape::ALL.into_iter().enumerate() {
        let white = board.piece(Color::White, shape);
        let black = board.piece(Color::Black, shape);
        assert_eq!(white.position(), (i as i8, 0));
        assert_eq!(black.position(), (4 - i as i8, 6));
        assert_eq!(white.height, 1);
        assert_eq!(black.height, 1);
    }
}

#[test]
fn test_starting_circle_moves() {
    let game = Game::new();

    assert_eq!(targets(&game, Shape::Circle), vec![(1, 0), (0, 1)]);
}

#[test]
fn test_opening_move_count() {
    let game = Game::new();
    let legal = game.legal_moves();

    assert_eq!(legal.len(), 13);
    assert!(legal.iter().all(|m| m.player == Color::White));
}

// =============================================================================
// Stacking and Coverage
// =============================================================================

#[test]
fn test_stacking_height() {
    let mut game = Game::new();

    let response = game.submit(mv(Color::White, Shape::Plus, 0, 0));

    assert_eq!(response.result, MoveResult::MoveSuccess);
    assert_eq!(game.board().piece(Color::White, Shape::Plus).height, 2);
    assert_eq!(game.board().piece(Color::White, Shape::Circle).height, 1);
    assert_eq!(game.board().count_at(0, 0), 2);
    assert_eq!(
        game.board().top_piece(0, 0).map(|p| p.shape),
        Some(Shape::Plus)
    );
}

#[test]
fn test_coverage_blocks_then_releases() {
    let mut game = Game::new();

    // White plus covers the white circle.
    game.submit(mv(Color::White, Shape::Plus, 0, 0));
    game.submit(mv(Color::Black, Shape::Plus, 3, 5));
    game.submit(mv(Color::Black, Shape::Wave, 2, 5));
    game.submit(mv(Color::White, Shape::Wave, 2, 1));
    assert_eq!(game.obligation(), TurnObligation::free(Color::White));
    assert!(targets(&game, Shape::Circle).is_empty());

    // Moving the plus off the circle frees it.
    game.submit(mv(Color::White, Shape::Plus, 0, 1));
    game.submit(mv(Color::Black, Shape::Plus, 3, 4));
    game.submit(mv(Color::Black, Shape::Star, 0, 5));
    game.submit(mv(Color::White, Shape::Star, 4, 1));
    assert_eq!(game.obligation(), TurnObligation::free(Color::White));

    assert_eq!(targets(&game, Shape::Circle), vec![(1, 0), (0, 1)]);
}

#[test]
fn test_left_behind_height_unchanged() {
    let mut game = Game::new();

    game.submit(mv(Color::White, Shape::Plus, 0, 0));
    game.submit(mv(Color::Black, Shape::Plus, 3, 5));
    game.submit(mv(Color::Black, Shape::Wave, 2, 5));
    game.submit(mv(Color::White, Shape::Wave, 2, 1));
    let response = game.submit(mv(Color::White, Shape::Plus, 0, 1));

    assert_eq!(response.result, MoveResult::MoveSuccess);
    assert_eq!(game.board().piece(Color::White, Shape::Circle).height, 1);
    assert_eq!(game.board().piece(Color::White, Shape::Plus).height, 1);
}

// =============================================================================
// Turn Order
// =============================================================================

#[test]
fn test_forced_response_coupling() {
    let mut game = Game::new();

    game.submit(mv(Color::White, Shape::Square, 3, 1));
    assert_eq!(game.obligation(), TurnObligation::forced(Color::Black, Shape::Square));
    assert!(game.legal_moves().iter().all(|m| m.shape == Shape::Square));

    game.submit(mv(Color::Black, Shape::Square, 1, 5));
    assert_eq!(game.obligation(), TurnObligation::free(Color::Black));

    let view = game.current_obligation();
    assert_eq!(view.player, Color::Black);
    assert!(!view.responding);
    assert_eq!(view.shape, Some(Shape::Square));
}

#[test]
fn test_guard_blocks_repeat_free_move() {
    let mut game = Game::new();

    game.submit(mv(Color::White, Shape::Wave, 2, 1));
    game.submit(mv(Color::Black, Shape::Wave, 2, 5));

    assert!(targets(&game, Shape::Wave).is_empty());
    let response = game.submit(mv(Color::Black, Shape::Wave, 2, 4));
    assert_eq!(response.result, MoveResult::MoveFailure);
}

#[test]
fn test_guard_only_binds_own_piece() {
    let mut game = Game::new();

    game.submit(mv(Color::White, Shape::Wave, 2, 1));
    game.submit(mv(Color::Black, Shape::Wave, 2, 5));
    game.submit(mv(Color::Black, Shape::Star, 0, 5));
    game.submit(mv(Color::White, Shape::Star, 4, 1));

    // White's last move was the star; its wave is free again.
    assert_eq!(game.obligation(), TurnObligation::free(Color::White));
    assert!(targets(&game, Shape::Star).is_empty());
    assert!(!targets(&game, Shape::Wave).is_empty());
}

#[test]
fn test_forced_response_ignores_guard() {
    let game = GameBuilder::new()
        .obligation(TurnObligation::forced(Color::White, Shape::Plus))
        .last_moved(Color::White, Shape::Plus)
        .build()
        .unwrap();

    assert_eq!(targets(&game, Shape::Plus), vec![(0, 0), (2, 0), (1, 1)]);
    assert_eq!(game.legal_moves().len(), 3);
}

// =============================================================================
// Wins
// =============================================================================

#[test]
fn test_white_escape() {
    let mut game = GameBuilder::new()
        .place(Color::White, Shape::Wave, 2, 6)
        .build()
        .unwrap();

    let response = game.submit(mv(Color::White, Shape::Wave, 2, 7));

    assert_eq!(response.result, MoveResult::WinWhite);
    assert_eq!(response.message, "team white has won by moving a piece off the board!");
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.win_reason(), Some(WinReason::Escape));
    assert_eq!(game.board().piece(Color::White, Shape::Wave).position(), (2, 7));
}

#[test]
fn test_escape_preempts_stuck_response() {
    // The white wave covers the black wave, so a response would be stuck.
    let mut game = GameBuilder::new()
        .place(Color::White, Shape::Wave, 2, 6)
        .build()
        .unwrap();
    assert!(game
        .board()
        .is_covered(game.board().piece(Color::Black, Shape::Wave)));

    let response = game.submit(mv(Color::White, Shape::Wave, 2, 7));

    assert_eq!(response.result, MoveResult::WinWhite);
    assert_eq!(game.cascade_steps(), 0);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_black_escape() {
    let mut game = GameBuilder::new()
        .place(Color::Black, Shape::Circle, 0, 0)
        .obligation(TurnObligation::free(Color::Black))
        .build()
        .unwrap();

    let response = game.submit(mv(Color::Black, Shape::Circle, 0, -1));

    assert_eq!(response.result, MoveResult::WinBlack);
    assert_eq!(response.message, "team black has won by moving a piece off the board!");
    assert_eq!(game.winner(), Some(Color::Black));
}

#[test]
fn test_blockade_win() {
    let mut game = black_tower()
        .place(Color::White, Shape::Star, 2, 4)
        .build()
        .unwrap();
    assert!(!game.is_over());

    let response = game.submit(mv(Color::White, Shape::Star, 2, 3));

    assert_eq!(response.result, MoveResult::WinWhite);
    assert_eq!(
        response.message,
        "Team white has won by blocking the other team from moving!"
    );
    assert_eq!(game.win_reason(), Some(WinReason::Blockade));
    assert_eq!(game.board().piece(Color::White, Shape::Star).height, 6);
}

#[test]
fn test_blockaded_build_is_decided() {
    let game = black_tower()
        .place(Color::White, Shape::Star, 2, 3)
        .build()
        .unwrap();

    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.win_reason(), Some(WinReason::Blockade));
    assert!(game.legal_moves().is_empty());
}

// =============================================================================
// Terminal Idempotence
// =============================================================================

#[test]
fn test_terminal_idempotence() {
    let mut game = GameBuilder::new()
        .place(Color::White, Shape::Wave, 2, 6)
        .build()
        .unwrap();
    game.submit(mv(Color::White, Shape::Wave, 2, 7));

    let before = bincode::serialize(&game.board_snapshot()).unwrap();
    let attempts = [
        mv(Color::Black, Shape::Circle, 4, 5),
        mv(Color::White, Shape::Circle, 0, 1),
        mv(Color::White, Shape::Wave, 2, 8),
    ];

    for attempt in attempts {
        let response = game.submit(attempt);
        assert_eq!(response.result, MoveResult::AlreadyOver);
        assert_eq!(response.message, "Game has already finished! Team white won");
        assert_eq!(bincode::serialize(&game.board_snapshot()).unwrap(), before);
    }
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.move_log().len(), 4);
}

// =============================================================================
// Invalid Moves
// =============================================================================

#[test]
fn test_invalid_moves_are_noops() {
    let mut game = Game::new();
    game.submit(mv(Color::White, Shape::Plus, 0, 0));
    game.submit(mv(Color::Black, Shape::Plus, 3, 5));
    game.submit(mv(Color::Black, Shape::Wave, 2, 5));
    game.submit(mv(Color::White, Shape::Wave, 2, 1));
    assert_eq!(game.obligation(), TurnObligation::free(Color::White));

    let board = game.board_snapshot();
    let obligation = game.obligation();
    let last_moved = game.last_moved();

    let attempts = [
        // Not white's piece.
        mv(Color::Black, Shape::Star, 0, 5),
        // Covered.
        mv(Color::White, Shape::Circle, 1, 0),
        // Guarded.
        mv(Color::White, Shape::Wave, 2, 2),
        // Not a single step.
        mv(Color::White, Shape::Square, 3, 2),
        // Off the side.
        mv(Color::White, Shape::Star, 5, 0),
        // Backwards past the home row.
        mv(Color::White, Shape::Square, 3, -1),
    ];

    for attempt in attempts {
        let response = game.submit(attempt);
        assert_eq!(response.result, MoveResult::MoveFailure, "{attempt}");
        assert_eq!(response.message, "not a valid move!");
        assert_eq!(game.board_snapshot(), board);
        assert_eq!(game.obligation(), obligation);
        assert_eq!(game.last_moved(), last_moved);
    }
    assert_eq!(game.winner(), None);
}

// =============================================================================
// Skip Cascade
// =============================================================================

#[test]
fn test_stuck_response_cascades_to_free_move() {
    // The black plus sits on the black circle.
    let mut game = GameBuilder::new()
        .place(Color::Black, Shape::Plus, 4, 6)
        .build()
        .unwrap();

    let response = game.submit(mv(Color::White, Shape::Circle, 0, 1));

    assert_eq!(response.result, MoveResult::MoveSuccess);
    assert_eq!(game.obligation(), TurnObligation::free(Color::Black));
    assert_eq!(game.cascade_steps(), 1);
    assert!(!game.legal_moves().is_empty());
}

#[test]
fn test_stuck_free_move_passes_to_opponent() {
    let game = black_tower()
        .obligation(TurnObligation::free(Color::Black))
        .last_moved(Color::Black, Shape::Plus)
        .build()
        .unwrap();

    assert!(!game.is_over());
    assert_eq!(game.obligation(), TurnObligation::free(Color::White));
    assert!(game.cascade_steps() <= MAX_CASCADE_STEPS);
    assert!(!game.legal_moves().is_empty());
}

#[test]
fn test_stuck_obligation_settled_on_build() {
    let game = GameBuilder::new()
        .place(Color::Black, Shape::Plus, 4, 6)
        .obligation(TurnObligation::forced(Color::Black, Shape::Circle))
        .build()
        .unwrap();

    assert_eq!(game.obligation(), TurnObligation::free(Color::Black));
    assert!(game.legal_moves().iter().all(|m| m.player == Color::Black));
}

// =============================================================================
// Move Log
// =============================================================================

#[test]
fn test_log_records_every_submission() {
    let mut game = Game::new();

    game.submit(mv(Color::White, Shape::Circle, 0, 1));
    game.submit(mv(Color::White, Shape::Circle, 0, 2));
    game.submit(mv(Color::Black, Shape::Circle, 4, 5));

    let log = game.move_log();
    let sequences: Vec<u32> = log.iter().map(|r| r.sequence).collect();
    let results: Vec<MoveResult> = log.iter().map(|r| r.response.result).collect();

    assert_eq!(sequences, vec![0, 1, 2]);
    assert_eq!(
        results,
        vec![MoveResult::MoveSuccess, MoveResult::MoveFailure, MoveResult::MoveSuccess]
    );
    assert_eq!(log.applied().count(), 2);
}
