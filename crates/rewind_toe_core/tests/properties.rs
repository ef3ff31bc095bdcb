//! Property-based tests for the game engine.

use proptest::prelude::*;
use rewind_toe_core::invariants::{GameInvariants, InvariantSet};
use rewind_toe_core::{
    Board, GameState, MoveOutcome, Player, Position, Square, WINNING_LINES, detect_winner,
};

prop_compose! {
    fn arbitrary_square()(variant in 0..3u8) -> Square {
        match variant {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(squares in prop::array::uniform9(arbitrary_square())) -> Board {
        let mut board = Board::new();
        for (pos, square) in Position::ALL.into_iter().zip(squares) {
            board.set(pos, square);
        }
        board
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Click(usize),
    Jump(usize),
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0..9usize).prop_map(Action::Click),
        1 => (0..10usize).prop_map(Action::Jump),
    ]
}

/// Reference win check written independently of the engine's table walk.
fn has_line(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)))
}

proptest! {
    #[test]
    fn next_player_follows_parity(step in 0..10_000usize) {
        prop_assert_eq!(Player::for_step(step) == Player::X, step % 2 == 0);
    }

    #[test]
    fn winner_matches_reference(board in arbitrary_board()) {
        match detect_winner(&board) {
            Some(player) => prop_assert!(has_line(&board, player)),
            None => {
                prop_assert!(!has_line(&board, Player::X));
                prop_assert!(!has_line(&board, Player::O));
            }
        }
    }

    #[test]
    fn random_sessions_keep_invariants(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut game = GameState::new();

        for action in actions {
            match action {
                Action::Click(index) => {
                    let pos = Position::from_index(index).expect("index below 9");
                    let before = game.clone();
                    match game.apply_move(pos) {
                        MoveOutcome::Placed { player, step, .. } => {
                            prop_assert_eq!(step, before.current_step() + 1);
                            prop_assert_eq!(player, before.next_player());
                            prop_assert_eq!(game.history().len(), game.current_step() + 1);
                            let prev = &game.history()[game.current_step() - 1];
                            prop_assert_eq!(prev.diff(game.current_board()), vec![pos]);
                            prop_assert_eq!(
                                &game.history().boards()[..step],
                                &before.history().boards()[..step]
                            );

                            // Resubmitting the same click is a no-op.
                            let after = game.clone();
                            prop_assert!(!game.apply_move(pos).is_placed());
                            prop_assert_eq!(&game, &after);
                        }
                        MoveOutcome::Ignored(_) => prop_assert_eq!(&game, &before),
                    }
                }
                Action::Jump(step) => {
                    if step < game.history().len() {
                        let history = game.history().clone();
                        game.jump_to(step);
                        prop_assert_eq!(game.history(), &history);
                        prop_assert_eq!(game.next_player(), Player::for_step(step));
                    }
                }
            }
            prop_assert!(GameInvariants::check_all(&game).is_ok());
        }
    }
}
