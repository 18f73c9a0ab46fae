//! Test suite for the move-selection engine
//! Validates known positions, determinism, and the never-loses property

use std::collections::HashSet;

use oxo::{Board, Engine, Game, Outcome, Player};

mod known_positions {
    use super::*;

    #[test]
    fn empty_board_opening_is_the_first_drawn_candidate() {
        // Every opening move draws under optimal play, so all nine
        // candidates score the neutral value and the tie-break picks the
        // first index: the top-left corner.
        let board = Board::new();
        let engine = Engine::new(Player::X);

        let report = engine.choose_move(&board).unwrap();
        assert_eq!(report.position, 0);
        assert_eq!(report.candidates.len(), 9);
        for candidate in &report.candidates {
            assert_eq!(
                candidate.score, 0,
                "opening at {} should be a draw under optimal play",
                candidate.position
            );
        }
    }

    #[test]
    fn completes_the_winning_row() {
        // XX.
        // OO.
        // ...
        let board = Board::from_string("XX. OO. ...").unwrap();
        let engine = Engine::new(Player::X);

        assert_eq!(engine.choose_move(&board).unwrap().position, 2);
    }

    #[test]
    fn takes_its_own_win_over_blocking() {
        // OO.
        // XX.
        // ...
        // X can block at 2 or win at 5; winning now must outrank blocking.
        let board = Board::from_string("OO. XX. ...").unwrap();
        let engine = Engine::new(Player::X);

        assert_eq!(engine.choose_move(&board).unwrap().position, 5);
    }

    #[test]
    fn blocks_the_opponent_when_it_cannot_win() {
        // OO.
        // .X.
        // ...
        let board = Board::from_string("OO. .X. ...").unwrap();
        let engine = Engine::new(Player::X);

        assert_eq!(engine.choose_move(&board).unwrap().position, 2);
    }

    #[test]
    fn marker_assignment_is_respected() {
        // Same shape as the winning-row scenario, with the sides swapped
        let board = Board::from_string("OO. XX. ...").unwrap();
        let engine = Engine::new(Player::O);

        assert_eq!(engine.choose_move(&board).unwrap().position, 2);
    }
}

mod reproducibility {
    use super::*;

    #[test]
    fn choose_move_is_deterministic() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let engine = Engine::new(Player::X);

        let first = engine.choose_move(&board).unwrap();
        for _ in 0..5 {
            let next = engine.choose_move(&board).unwrap();
            assert_eq!(next.position, first.position);
            assert_eq!(next.candidates, first.candidates);
            assert_eq!(next.iterations, first.iterations);
        }
    }

    #[test]
    fn the_live_board_survives_a_search_untouched() {
        let board = Board::from_string("XO. .X. O..").unwrap();
        let snapshot = board;
        let engine = Engine::new(Player::X);

        engine.choose_move(&board).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn diagnostics_are_per_invocation() {
        let board = Board::from_string("XOX .X. O..").unwrap();
        let engine = Engine::new(Player::O);

        let first = engine.choose_move(&board).unwrap();
        let second = engine.choose_move(&board).unwrap();
        assert_eq!(first.iterations, second.iterations);
    }
}

mod never_loses {
    use super::*;

    /// Walk the complete reply tree: the engine plays its chosen move on its
    /// turns, the opponent tries every legal move on theirs. The engine must
    /// never end up on the losing side of any leaf. Identical positions
    /// reached through different move orders are only verified once.
    fn verify_never_loses(engine: &Engine, game: &Game, visited: &mut HashSet<Board>) {
        match game.outcome() {
            Outcome::Win(winner) => {
                assert_ne!(
                    winner,
                    engine.human(),
                    "engine lost after {:?}",
                    game.moves()
                );
                return;
            }
            Outcome::Tie => return,
            Outcome::InProgress => {}
        }

        if !visited.insert(*game.board()) {
            return;
        }

        if game.to_move() == engine.computer() {
            let report = engine.choose_move(game.board()).unwrap();
            let mut next = game.clone();
            next.play(report.position).unwrap();
            verify_never_loses(engine, &next, visited);
        } else {
            for position in game.board().empty_positions() {
                let mut next = game.clone();
                next.play(position).unwrap();
                verify_never_loses(engine, &next, visited);
            }
        }
    }

    #[test]
    fn engine_never_loses_when_it_opens() {
        let engine = Engine::new(Player::X);
        let mut visited = HashSet::new();
        verify_never_loses(&engine, &Game::new(), &mut visited);
    }

    #[test]
    fn engine_never_loses_when_the_opponent_opens() {
        let engine = Engine::new(Player::O);
        let mut visited = HashSet::new();
        verify_never_loses(&engine, &Game::new(), &mut visited);
    }

    #[test]
    fn engine_vs_engine_always_ties() {
        let x = Engine::new(Player::X);
        let o = Engine::new(Player::O);
        let mut game = Game::new();

        let outcome = loop {
            let engine = if game.to_move() == Player::X { &x } else { &o };
            let report = engine.choose_move(game.board()).unwrap();
            let outcome = game.play(report.position).unwrap();
            if outcome.is_terminal() {
                break outcome;
            }
        };

        assert_eq!(outcome, Outcome::Tie);
    }
}
