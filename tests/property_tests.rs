//! Property tests over random playouts.

use proptest::prelude::*;

use stack_escape::core::{on_board, Color, Move, MoveResult, Shape};
use stack_escape::rules::{blockaded_color, Game, WinReason, MAX_CASCADE_STEPS};

/// One step of a playout: a legal move by index, or an arbitrary move.
#[derive(Clone, Debug)]
enum Step {
    Legal(usize),
    Arbitrary(Move),
}

fn arb_move() -> impl Strategy<Value = Move> {
    (
        prop::sample::select(Color::ALL.to_vec()),
        prop::sample::select(Shape::ALL.to_vec()),
        -2i8..7,
        -2i8..9,
    )
        .prop_map(|(player, shape, x, y)| Move::new(player, shape, x, y))
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => any::<usize>().prop_map(Step::Legal),
        1 => arb_move().prop_map(Step::Arbitrary),
    ]
}

fn pick(game: &Game, step: &Step) -> Move {
    match step {
        Step::Legal(i) => {
            let legal = game.legal_moves();
            if legal.is_empty() {
                // Decided games have no legal moves; submit anything.
                Move::new(Color::White, Shape::Circle, 0, 1)
            } else {
                legal[i % legal.len()]
            }
        }
        Step::Arbitrary(mv) => *mv,
    }
}

/// Play the most forward move available until the game ends.
fn race_to_finish(game: &mut Game) {
    for _ in 0..2000 {
        let best = game
            .legal_moves()
            .into_iter()
            .max_by_key(|mv| match mv.player {
                Color::White => mv.y,
                Color::Black => -mv.y,
            });
        match best {
            Some(mv) => {
                game.submit(mv);
            }
            None => return,
        }
    }
}

fn check_board(game: &Game) -> Result<(), TestCaseError> {
    let board = game.board();
    prop_assert_eq!(board.iter().count(), 10);
    for piece in board.iter() {
        prop_assert!(piece.height >= 1, "{} has height 0", piece);
        prop_assert!(
            on_board(piece.x, piece.y) || game.is_over(),
            "{} off the board in a live game",
            piece
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_playout_invariants(steps in prop::collection::vec(arb_step(), 1..300)) {
        let mut game = Game::new();

        for step in &steps {
            let mv = pick(&game, step);
            let was_over = game.is_over();
            let legal = game.legal_moves();
            let board_before = game.board_snapshot();
            let obligation_before = game.obligation();

            let response = game.submit(mv);

            if was_over {
                prop_assert_eq!(response.result, MoveResult::AlreadyOver);
                prop_assert_eq!(game.board_snapshot(), board_before);
                continue;
            }

            if legal.contains(&mv) {
                prop_assert_ne!(response.result, MoveResult::MoveFailure);
                prop_assert_eq!(game.board().piece(mv.player, mv.shape).position(), mv.target());
            } else {
                prop_assert_eq!(response.result, MoveResult::MoveFailure);
                prop_assert_eq!(game.board_snapshot(), board_before);
                prop_assert_eq!(game.obligation(), obligation_before);
            }

            check_board(&game)?;
            prop_assert!(game.cascade_steps() <= MAX_CASCADE_STEPS);

            if game.is_over() {
                prop_assert_eq!(response.result.winner(), game.winner());
            } else {
                prop_assert!(!response.result.is_terminal());
                prop_assert!(!game.legal_moves().is_empty());
                prop_assert_eq!(blockaded_color(game.board()), None);
            }
        }
    }

    #[test]
    fn prop_one_terminal_reason_per_move(steps in prop::collection::vec(any::<usize>(), 1..400)) {
        let mut game = Game::new();

        for i in steps {
            let legal = game.legal_moves();
            if legal.is_empty() {
                break;
            }
            let mv = legal[i % legal.len()];
            let escaped = !on_board(mv.x, mv.y);

            let response = game.submit(mv);

            match game.win_reason() {
                Some(WinReason::Escape) => {
                    prop_assert!(escaped);
                    prop_assert_eq!(response.result.winner(), Some(mv.player));
                }
                Some(WinReason::Blockade) => {
                    prop_assert!(!escaped);
                    prop_assert!(blockaded_color(game.board()).is_some());
                }
                None => prop_assert!(!escaped),
            }
        }
    }

    #[test]
    fn prop_finished_game_is_frozen(
        steps in prop::collection::vec(any::<usize>(), 1..100),
        after in prop::collection::vec(arb_move(), 1..10),
    ) {
        let mut game = Game::new();
        for i in steps {
            let legal = game.legal_moves();
            if legal.is_empty() {
                break;
            }
            game.submit(legal[i % legal.len()]);
        }
        race_to_finish(&mut game);
        if !game.is_over() {
            return Ok(());
        }

        let frozen = bincode::serialize(&game.board_snapshot()).unwrap();
        let winner = game.winner();

        for mv in after {
            prop_assert_eq!(game.submit(mv).result, MoveResult::AlreadyOver);
            prop_assert_eq!(bincode::serialize(&game.board_snapshot()).unwrap(), frozen.clone());
            prop_assert_eq!(game.winner(), winner);
        }
    }
}
