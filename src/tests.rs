#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::convert::Infallible;
    use std::num::NonZero;
    use std::time::Duration;

    use crate::board::Board;
    use crate::builder::{BoardBuilder, BuilderInvalidReason};
    use crate::cell::{Inferred, Tile};
    use crate::change::ChangeMap;
    use crate::config::{Config, Difficulty, GameConfig, SolverConfig};
    use crate::controller::{Action, Actuator, IterationController, Snapshot, SnapshotProvider, State, Summary};
    use crate::error::{ConfigError, RoundError, ShapeError, TileParseError};
    use crate::geometry::{identity_grid, ScreenGeometry, ScreenPoint};
    use crate::location::Location;
    use crate::minefield::{Minefield, SharedMinefield};
    use crate::probability::{local_probabilities, lowest_score, recommend};
    use crate::rules::propagate;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn changes(s: &str) -> ChangeMap {
        let before = board(s);
        ChangeMap::between(&before, &propagate(&before)).unwrap()
    }

    /// Hands out boards in order, repeating the last one forever.
    struct Scripted {
        boards: VecDeque<Board>,
    }

    impl Scripted {
        fn new(boards: &[&str]) -> Self {
            Self { boards: boards.iter().map(|s| board(s)).collect() }
        }
    }

    impl SnapshotProvider for Scripted {
        type Target = Location;
        type Error = Infallible;

        fn capture(&mut self, _config: &GameConfig) -> Result<Snapshot<Location>, Self::Error> {
            let board = if self.boards.len() > 1 {
                self.boards.pop_front().unwrap()
            } else {
                self.boards.front().unwrap().clone()
            };
            let targets = identity_grid(board.dims);
            Ok(Snapshot { board, targets })
        }
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Action, Vec<Location>)>,
        settles: Vec<Duration>,
    }

    impl Actuator<Location> for Recorder {
        type Error = Infallible;

        fn apply(&mut self, targets: &[Location], action: Action) -> Result<(), Self::Error> {
            self.calls.push((action, targets.to_vec()));
            Ok(())
        }

        fn settle(&mut self, delay: Duration) {
            self.settles.push(delay);
        }
    }

    /// Fails every batch it is handed.
    struct Jammed;

    impl Actuator<Location> for Jammed {
        type Error = std::fmt::Error;

        fn apply(&mut self, _targets: &[Location], _action: Action) -> Result<(), Self::Error> {
            Err(std::fmt::Error)
        }
    }

    fn scripted(boards: &[&str], mines: usize) -> IterationController<Scripted, Recorder> {
        let first = board(boards[0]);
        IterationController::new(
            Scripted::new(boards),
            Recorder::default(),
            GameConfig { rows: first.rows(), cols: first.cols(), mines },
            SolverConfig::default(),
        )
    }

    // --- boards ---

    #[test]
    fn parse_and_print() {
        let parsed = board("1 - F\nM ? 8");
        assert_eq!(parsed.dims(), (2, 3));
        assert_eq!(parsed[Location(0, 0)], Tile::Revealed(1));
        assert_eq!(parsed[Location(0, 1)], Tile::Unknown);
        assert_eq!(parsed[Location(1, 0)], Tile::Mine);
        assert_eq!(parsed[Location(1, 1)], Tile::Unrecognized);
        assert_eq!(format!("{}", parsed), "1 - F
M ? 8
");
    }

    #[test]
    fn compact_rows_read_one_cell_per_character() {
        assert_eq!(board("1-F\n---"), board("1 - F\n- - -"));
    }

    #[test]
    fn unrecognized_tokens_never_fail() {
        let parsed = board("1 rgb(12,34,56) 9 -");
        assert_eq!(parsed[Location(0, 1)], Tile::Unrecognized);
        assert_eq!(parsed[Location(0, 2)], Tile::Unrecognized);
    }

    #[test]
    fn safe_marker_is_not_a_tile() {
        assert_eq!("1 -\n- S".parse::<Board>(), Err(TileParseError::TransientMarker(Location(1, 1))));
    }

    #[test]
    fn malformed_boards_fail_fast() {
        assert_eq!(Board::<Tile>::from_rows(vec![]), Err(ShapeError::Empty));
        assert_eq!(Board::<Tile>::from_rows(vec![vec![]]), Err(ShapeError::Empty));
        assert_eq!(
            Board::from_rows(vec![vec![Tile::Unknown, Tile::Unknown], vec![Tile::Unknown]]),
            Err(ShapeError::Ragged { row: 1, expected: 2, found: 1 }),
        );
        assert_eq!("".parse::<Board>(), Err(TileParseError::Shape(ShapeError::Empty)));
        assert_eq!("- -\n-".parse::<Board>(), Err(TileParseError::Shape(ShapeError::Ragged { row: 1, expected: 2, found: 1 })));
    }

    #[test]
    fn neighbourhoods_clip_at_edges() {
        let grid = board("---\n---\n---");
        assert_eq!(grid.neighbors(Location(0, 0)).len(), 3);
        assert_eq!(grid.neighbors(Location(0, 1)).len(), 5);
        assert_eq!(grid.neighbors(Location(1, 1)).len(), 8);
        assert_eq!(grid.neighbors(Location(2, 2)), vec![Location(1, 1), Location(1, 2), Location(2, 1)]);
    }

    #[test]
    fn neighbourhood_counts() {
        let grid = board("1 F ?\n- 2 -\nM 0 -");
        let around = grid.neighborhood(Location(1, 1));
        assert_eq!(around.unknown, vec![Location(1, 2), Location(2, 2), Location(1, 0)]);
        assert_eq!(around.flagged, 1);
        assert_eq!(around.revealed, 2);
        assert_eq!(around.open, 5);
    }

    #[test]
    fn builder_matches_parsed_board() {
        let built = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(2).unwrap()))
            .reveal(Location(0, 0), 1)
            .flag(Location(0, 1))
            .mine(Location(2, 1))
            .build()
            .unwrap();

        assert_eq!(built, board("1 F\n- -\n- M"));
        assert_eq!(BoardBuilder::from_board(&built).build().unwrap(), built);
    }

    #[test]
    fn builder_invalid_states() {
        let mut builder = BoardBuilder::default();
        builder.flag(Location(9, 0));
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::TileOutOfBounds]));
        // further placements are ignored once invalid
        builder.reveal(Location(0, 0), 1);
        assert_eq!(builder.build(), Err(&vec![BuilderInvalidReason::TileOutOfBounds]));

        let mut builder = BoardBuilder::default();
        builder.reveal(Location(0, 0), 9);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::InvalidCount(9)]));
    }

    // --- rule engine and change maps ---

    #[test]
    fn saturated_tile_flags_its_last_unknown() {
        let deduced = changes("1 -\n1 1");
        assert_eq!(deduced.flags(), vec![Location(0, 1)]);
        assert!(deduced.safes().is_empty());
    }

    #[test]
    fn under_saturated_tile_changes_nothing() {
        let before = board("1 -\n- -");
        let after = propagate(&before);

        for location in [Location(0, 1), Location(1, 0), Location(1, 1)] {
            assert_eq!(after[location], Inferred::Tile(Tile::Unknown));
        }
        assert!(ChangeMap::between(&before, &after).unwrap().is_empty());
    }

    #[test]
    fn flagged_out_tile_clears_the_rest() {
        let deduced = changes("2 F\nF -");
        assert!(deduced.flags().is_empty());
        assert_eq!(deduced.safes(), vec![Location(1, 1)]);
    }

    #[test]
    fn zero_clears_every_neighbour() {
        assert_eq!(changes("- 0 -").safes(), vec![Location(0, 0), Location(0, 2)]);
    }

    #[test]
    fn safe_rule_reads_flags_from_the_flag_rule() {
        let deduced = changes("1 - 1 -");
        assert_eq!(deduced.flags(), vec![Location(0, 1)]);
        assert_eq!(deduced.safes(), vec![Location(0, 3)]);
        assert_eq!(format!("{}", deduced), "- F - S\n");
    }

    #[test]
    fn only_numbers_are_sources() {
        assert!(changes("? -\nM F").is_empty());
        // unrecognized neighbours still take a slot without counting as hidden
        assert_eq!(changes("1 ?\n- ?").flags(), vec![Location(1, 0)]);
    }

    #[test]
    fn propagate_leaves_input_alone() {
        let before = board("1 - 1 -");
        let copy = before.clone();
        let _ = propagate(&before);
        assert_eq!(before, copy);
    }

    #[test]
    fn fixed_point_yields_no_changes() {
        assert!(changes("1 F\n1 1").is_empty());
        assert!(changes("0 0\n0 0").is_empty());
    }

    #[test]
    fn applied_flags_are_never_deduced_again() {
        let first = board("- - -\n2 3 2\n0 0 0");
        let round = ChangeMap::between(&first, &propagate(&first)).unwrap();
        assert!(!round.flags().is_empty());

        let second = BoardBuilder::from_board(&first).flag_all(round.flags()).build().unwrap();
        let next = ChangeMap::between(&second, &propagate(&second)).unwrap();
        assert!(next.flags().is_empty());
        for flag in round.flags() {
            assert_eq!(next.get(flag), None);
            assert_eq!(second[flag], Tile::Flag);
        }
    }

    #[test]
    fn diff_requires_matching_shapes() {
        let before = board("- -\n- -");
        let after = propagate(&board("- -"));
        assert_eq!(
            ChangeMap::between(&before, &after),
            Err(ShapeError::Mismatch { expected: (2, 2), found: (1, 2) }),
        );
    }

    // --- probability ---

    #[test]
    fn all_unknown_board_opens_at_origin() {
        let grid = board("---\n---\n---");
        assert!(local_probabilities(&grid).is_empty());

        let recommendation = recommend(&grid);
        assert_eq!(recommendation.candidate, Some(Location(0, 0)));
        assert!(recommendation.scores.is_empty());
    }

    #[test]
    fn contributions_average_per_cell() {
        let probabilities = local_probabilities(&board("1 - 1 -"));
        assert_eq!(probabilities.len(), 2);
        assert!((probabilities[&Location(0, 1)] - 0.75).abs() < 1e-12);
        assert!((probabilities[&Location(0, 3)] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn only_frontier_cells_get_probabilities() {
        let probabilities = local_probabilities(&board("1 - -"));
        assert_eq!(probabilities.keys().copied().collect::<Vec<_>>(), vec![Location(0, 1)]);
    }

    #[test]
    fn probabilities_are_clamped() {
        // inconsistent on purpose: three mines cannot hide under one cell
        assert_eq!(local_probabilities(&board("3 -"))[&Location(0, 1)], 1.0);
    }

    #[test]
    fn over_flagged_tiles_contribute_nothing() {
        let grid = board("1 F\nF -");
        assert!(local_probabilities(&grid).is_empty());
        assert_eq!(recommend(&grid).candidate, Some(Location(1, 1)));
    }

    #[test]
    fn lowest_score_wins() {
        let recommendation = recommend(&board("1 - -\n- - -"));
        assert_eq!(recommendation.candidate, Some(Location(1, 0)));
        assert_eq!(recommendation.scores.len(), 3);
        assert!((recommendation.scores[&Location(1, 0)] - (1.0 / 3.0 + 0.1)).abs() < 1e-12);
        assert!((recommendation.scores[&Location(0, 1)] - (1.0 / 3.0 + 0.2)).abs() < 1e-12);
    }

    #[test]
    fn cells_with_more_opened_neighbours_are_preferred() {
        // (0, 3) scores lower, but (0, 1) is the only candidate with two opened neighbours
        let recommendation = recommend(&board("1 - 1 -"));
        assert!(recommendation.scores[&Location(0, 3)] < recommendation.scores[&Location(0, 1)]);
        assert_eq!(recommendation.candidate, Some(Location(0, 1)));
    }

    #[test]
    fn strip_tie_goes_to_fewer_revealed_neighbours() {
        let strip = board("1 - 2 -");
        let recommendation = recommend(&strip);
        assert_eq!(recommendation.scores[&Location(0, 1)], recommendation.scores[&Location(0, 3)]);

        let frontier = recommendation.scores.keys().copied().collect::<Vec<_>>();
        assert_eq!(lowest_score(&strip, &recommendation.scores, frontier), Some(Location(0, 3)));
    }

    #[test]
    fn tie_break_applies_after_filtering() {
        let grid = board("1 - 1 ? - ?\n? ? ? ? 1 ?");
        let recommendation = recommend(&grid);
        assert_eq!(recommendation.scores[&Location(0, 1)], recommendation.scores[&Location(0, 4)]);
        assert_eq!(recommendation.candidate, Some(Location(0, 4)));
    }

    #[test]
    fn full_board_has_no_candidate() {
        assert_eq!(recommend(&board("1 F\n1 1")).candidate, None);
    }

    // --- controller ---

    #[test_log::test]
    fn deductions_are_actuated_flags_first() {
        let mut controller = scripted(&["1 - 1 -"], 10);
        let report = controller.step().unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.flagged, vec![Location(0, 1)]);
        assert_eq!(report.revealed, vec![Location(0, 3)]);
        assert!(report.recommendation.is_none());
        assert_eq!(report.state, State::Running);
        assert_eq!(controller.actuator().calls, vec![
            (Action::Flag, vec![Location(0, 1)]),
            (Action::Reveal, vec![Location(0, 3)]),
        ]);
        assert_eq!(controller.actuator().settles, vec![SolverConfig::default().settle_delay()]);
    }

    #[test_log::test]
    fn stall_falls_back_to_a_guess() {
        let mut controller = scripted(&["- -\n- -"], 1);
        let report = controller.step().unwrap();

        assert_eq!(report.revealed, vec![Location(0, 0)]);
        assert!(report.recommendation.is_some());
        assert_eq!(controller.actuator().calls, vec![(Action::Reveal, vec![Location(0, 0)])]);
        assert_eq!(controller.summary().guesses, 1);
    }

    #[test_log::test]
    fn mine_on_board_loses_without_acting() {
        let mut controller = scripted(&["1 M\n- -"], 1);
        let report = controller.step().unwrap();

        assert_eq!(report.state, State::Lost);
        assert!(controller.actuator().calls.is_empty());
        assert!(controller.actuator().settles.is_empty());
        assert!(matches!(controller.step(), Err(RoundError::Terminal(State::Lost))));
    }

    #[test_log::test]
    fn nothing_to_do_is_solved() {
        let mut controller = scripted(&["1 F\n1 1"], 5);
        let summary = controller.run().unwrap();

        assert_eq!(summary.state, State::Solved);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.flags_found, 1);
        assert!(controller.actuator().calls.is_empty());
    }

    #[test_log::test]
    fn mine_count_must_hold_two_rounds() {
        // the second capture is stale: the reveal of (0, 2) never shows up
        let mut controller = scripted(&["1 F -\n1 1 1"], 1);

        let first = controller.step().unwrap();
        assert_eq!(first.revealed, vec![Location(0, 2)]);
        assert_eq!(first.state, State::Running);

        let second = controller.step().unwrap();
        assert_eq!(second.state, State::StalledConfirmed);
        assert_eq!(controller.flags_found().iter().copied().collect::<Vec<_>>(), vec![Location(0, 1)]);
        assert!(controller.state().is_terminal());
    }

    #[test_log::test]
    fn board_shape_is_fixed_for_a_session() {
        let mut controller = scripted(&["- -", "- - -"], 1);
        controller.step().unwrap();

        assert!(matches!(
            controller.step(),
            Err(RoundError::Shape(ShapeError::Mismatch { expected: (1, 2), found: (1, 3) })),
        ));
    }

    #[test_log::test]
    fn failed_actuation_leaves_the_session_untouched() {
        let game = GameConfig { rows: 2, cols: 2, mines: 1 };
        let untouched = Summary { state: State::Running, rounds: 0, guesses: 0, flags_found: 0 };

        let mut deducing = IterationController::new(Scripted::new(&["1 -\n1 1"]), Jammed, game, SolverConfig::default());
        assert!(matches!(deducing.step(), Err(RoundError::Actuate(_))));
        assert!(deducing.flags_found().is_empty());
        assert_eq!(deducing.summary(), untouched);

        let mut guessing = IterationController::new(Scripted::new(&["- -\n- -"]), Jammed, game, SolverConfig::default());
        assert!(matches!(guessing.step(), Err(RoundError::Actuate(_))));
        assert_eq!(guessing.summary(), untouched);
        // a failed round is retried from scratch
        assert!(matches!(guessing.step(), Err(RoundError::Actuate(_))));
        assert_eq!(guessing.summary(), untouched);
    }

    #[test_log::test]
    fn ledger_keeps_flags_a_capture_drops() {
        let mut controller = scripted(&["- F\n- -", "- -\n- -"], 5);
        controller.step().unwrap();
        controller.step().unwrap();

        assert_eq!(controller.flags_found().iter().copied().collect::<Vec<_>>(), vec![Location(0, 1)]);
        assert_eq!(controller.summary().flags_found, 1);
    }

    #[test_log::test]
    fn capture_failures_propagate() {
        let field = SharedMinefield::new(Minefield::with_mines((3, 3), Vec::<Location>::new()).unwrap());
        let mut controller = IterationController::new(
            field.clone(),
            field,
            GameConfig { rows: 4, cols: 4, mines: 0 },
            SolverConfig::default(),
        );

        assert!(matches!(controller.step(), Err(RoundError::Capture(_))));
    }

    // --- minefield ---

    #[test]
    fn reveal_floods_zeros() {
        let mut field = Minefield::with_mines((3, 3), [Location(2, 2)]).unwrap();
        field.reveal(Location(0, 0)).unwrap();
        assert_eq!(field.view(), board("0 0 0\n0 1 1\n0 1 -"));
        assert!(!field.is_won());

        field.flag(Location(2, 2)).unwrap();
        assert_eq!(field.view()[Location(2, 2)], Tile::Flag);
        assert!(field.is_won());
    }

    #[test]
    fn revealing_a_mine_loses() {
        let mut field = Minefield::with_mines((2, 2), [Location(1, 1)]).unwrap();
        field.reveal(Location(1, 1)).unwrap();
        assert!(field.is_lost());
        assert!(field.view().contains_mine());
        assert!(field.reveal(Location(2, 0)).is_err());
    }

    #[test]
    fn random_games_open_safely() {
        for seed in 0..10 {
            let mut field = Minefield::new(Difficulty::Beginner.config(), seed).unwrap();
            field.reveal(Location(4, 4)).unwrap();

            assert!(!field.is_lost());
            assert_eq!(field.view()[Location(4, 4)], Tile::Revealed(0));
            let placed = field.view().locations().filter(|location| field.is_mine(*location)).count();
            assert_eq!(placed, 10);
        }
    }

    #[test_log::test]
    fn small_game_end_to_end() {
        let field = SharedMinefield::new(Minefield::with_mines((3, 3), [Location(2, 2)]).unwrap());
        let mut controller = IterationController::new(
            field.clone(),
            field.clone(),
            GameConfig { rows: 3, cols: 3, mines: 1 },
            SolverConfig::default(),
        );

        let summary = controller.run().unwrap();
        assert_eq!(summary.state, State::Solved);
        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.guesses, 1);
        assert_eq!(summary.flags_found, 1);
        assert!(field.borrow().is_won());
    }

    #[test_log::test]
    fn random_games_end_consistently() {
        for seed in 0..25 {
            let game = Difficulty::Beginner.config();
            let field = SharedMinefield::new(Minefield::new(game, seed).unwrap());
            let mut controller = IterationController::new(field.clone(), field.clone(), game, SolverConfig::default());

            let summary = controller.run().unwrap();
            let field = field.borrow();
            let view = field.view();

            // deductions are sound, so every flag sits on a mine
            assert!(view.flags().all(|flag| field.is_mine(flag)), "seed {}", seed);
            match summary.state {
                State::Lost => assert!(field.is_lost()),
                State::Solved => assert!(field.is_won(), "seed {}", seed),
                State::StalledConfirmed => assert_eq!(summary.flags_found, game.mines),
                State::Running => unreachable!(),
            }
        }
    }

    #[test]
    fn rounds_never_retract_progress() {
        let game = Difficulty::Intermediate.config();
        let field = SharedMinefield::new(Minefield::new(game, 3).unwrap());
        let mut controller = IterationController::new(field.clone(), field.clone(), game, SolverConfig::default());

        let mut previous = field.borrow().view();
        let mut flagged = Vec::new();
        while controller.state().is_running() {
            let report = controller.step().unwrap();
            flagged.extend(report.flagged);

            let current = field.borrow().view();
            for (location, tile) in previous.iter() {
                match tile {
                    Tile::Flag | Tile::Revealed(_) => assert_eq!(current[location], *tile),
                    _ => {}
                }
            }
            for flag in &flagged {
                assert_eq!(current[*flag], Tile::Flag);
            }
            for probability in local_probabilities(&current).values() {
                assert!((0.0..=1.0).contains(probability));
            }
            previous = current;
        }
    }

    // --- configuration ---

    #[test]
    fn presets_load_from_toml() {
        let config = Config::from_toml_str("[game]\ndifficulty = \"expert\"\n").unwrap();
        assert_eq!(config.game, GameConfig { rows: 16, cols: 30, mines: 99 });
        assert_eq!(config.solver, SolverConfig::default());
        assert_eq!(config.screen, ScreenGeometry::default());
    }

    #[test]
    fn custom_games_load_from_toml() {
        let config = Config::from_toml_str("[game]\nrows = 4\ncols = 5\nmines = 3\n\n[solver]\nsettle_delay_ms = 0\n").unwrap();
        assert_eq!(config.game, GameConfig { rows: 4, cols: 5, mines: 3 });
        assert_eq!(config.solver.settle_delay(), Duration::ZERO);
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn unplayable_games_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("[game]\nrows = 2\ncols = 2\nmines = 5\n"),
            Err(ConfigError::TooManyMines { mines: 5, cells: 4 }),
        ));
        assert!(matches!(
            GameConfig { rows: 0, cols: 3, mines: 0 }.validate(),
            Err(ConfigError::Shape(ShapeError::Empty)),
        ));
    }

    #[test]
    fn opening_move_needs_a_free_cell() {
        let full = GameConfig { rows: 2, cols: 2, mines: 4 };
        assert!(matches!(full.validate(), Err(ConfigError::TooManyMines { mines: 4, cells: 4 })));
        assert!(Minefield::new(full, 0).is_err());

        let mut field = Minefield::new(GameConfig { rows: 2, cols: 2, mines: 3 }, 0).unwrap();
        field.reveal(Location(0, 0)).unwrap();
        let placed = field.view().locations().filter(|location| field.is_mine(*location)).count();
        assert_eq!(placed, field.mine_count());
        assert!(field.is_won());
    }

    #[test]
    fn oversized_games_are_rejected() {
        assert!(matches!(
            GameConfig { rows: usize::MAX, cols: 2, mines: 1 }.validate(),
            Err(ConfigError::TooLarge { rows: usize::MAX, cols: 2 }),
        ));
        assert!(matches!(
            Config::from_toml_str("[game]\nrows = 4294967296\ncols = 4294967296\nmines = 1\n"),
            Err(ConfigError::TooLarge { .. }),
        ));
    }

    #[test]
    fn difficulty_names() {
        assert_eq!("Expert".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert_eq!(Difficulty::Beginner.to_string(), "beginner");
        assert_eq!(GameConfig::from(Difficulty::Beginner).cells(), Some(81));
    }

    // --- geometry ---

    #[test]
    fn screen_targets() {
        let screen = ScreenGeometry::default();
        assert_eq!(screen.sample_point(Location(0, 0)), ScreenPoint { x: 280, y: 182 });
        assert_eq!(screen.corner_point(Location(0, 0)), ScreenPoint { x: 264, y: 162 });
        assert_eq!(screen.opening_target((16, 16)), ScreenPoint { x: 532, y: 430 });
        assert_eq!(screen.extent((16, 30)), (960, 512));

        let grid = screen.coordinate_grid((2, 3)).unwrap();
        assert_eq!(grid.dims(), (2, 3));
        assert_eq!(grid[Location(1, 2)], ScreenPoint { x: 344, y: 214 });
        assert_eq!(screen.coordinate_grid((0, 3)), Err(ShapeError::Empty));
    }
}
