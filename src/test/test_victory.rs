mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_no_goals_is_vacuously_solved() {
        let game = GameTestState::new(r#"
#@ $#
"#);
        assert!(game.grid.is_solved());
    }

    #[test]
    fn when_goal_uncovered_is_not_solved() {
        let game = GameTestState::new(r#"
#@$.#
"#);
        assert!(!game.grid.is_solved());
    }

    #[test]
    fn when_all_goals_boxed_is_solved() {
        let mut game = GameTestState::new(r#"
#@$.#
"#);
        game.assert_move(Right);
        assert!(game.grid.is_solved());
    }

    #[test]
    fn player_on_goal_does_not_count_as_covered() {
        // One goal under the box (covered), one under the player (not)
        let game = GameTestState::new(r#"
#+*#
"#);
        assert!(!game.grid.is_solved());
    }

    #[test]
    fn non_goal_boxes_are_irrelevant_to_victory() {
        let mut game = GameTestState::new(r#"
#@$. $#
"#);
        game.assert_move(Right);
        assert!(game.grid.is_solved());
    }

    #[test]
    fn single_row_scenario_two_pushes_solve() {
        let level = Level { rows: vec![vec![3, 0, 2, 4]] };
        let mut grid = GridState::load(&level).unwrap();

        assert_eq!(
            attempt_move(&mut grid, Right),
            MoveUpdate::Moved(MoveKind::PlayerMove)
        );
        assert_eq!(grid.to_rows(), vec![vec![0, 3, 2, 4]]);
        assert!(!grid.is_solved());

        assert_eq!(
            attempt_move(&mut grid, Right),
            MoveUpdate::Moved(MoveKind::PlayerAndBoxMove)
        );
        assert_eq!(grid.to_rows(), vec![vec![0, 0, 3, 6]]);
        assert!(grid.is_solved());

        // Pushing the box off the right edge is rejected, grid unchanged
        assert_eq!(attempt_move(&mut grid, Right), MoveUpdate::Blocked);
        assert_eq!(grid.to_rows(), vec![vec![0, 0, 3, 6]]);
    }
}
