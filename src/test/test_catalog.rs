mod test {
    use crate::core::*;

    #[test]
    fn codes_round_trip_through_decode_and_encode() {
        for code in 0u8..=6 {
            assert_eq!(encode_cell(decode_cell(code)), code);
        }
    }

    #[test]
    fn unknown_codes_decode_to_bare_floor() {
        let cell = decode_cell(9);
        assert_eq!(cell.occupant, Occupant::Empty);
        assert!(!cell.goal);
    }

    #[test]
    fn catalog_parses_from_json_matrices() {
        let catalog = LevelCatalog::from_json("[[[3, 0, 2, 4]], [[1, 3, 1]]]").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().rows, vec![vec![3, 0, 2, 4]]);
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            LevelCatalog::from_json("[]"),
            Err(LevelError::EmptyCatalog)
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            LevelCatalog::from_json("not json"),
            Err(LevelError::Malformed(_))
        ));
    }

    #[test]
    fn builtin_levels_all_load() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert!(catalog.len() > 0);
        for index in 0..catalog.len() {
            let grid = GridState::load(catalog.get(index).unwrap()).unwrap();
            assert!(grid.player_position().is_some());
            assert!(!grid.is_solved(), "level {} must not start solved", index);
        }
    }

    #[test]
    fn load_pads_ragged_rows_with_floor() {
        let level = Level { rows: vec![vec![3, 0], vec![1]] };
        let grid = GridState::load(&level).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.occupant_at(Vec2 { i: 1, j: 1 }), Some(Occupant::Empty));
    }

    #[test]
    fn out_of_bounds_reads_hit_the_sentinel() {
        let grid = GridState::load(&Level { rows: vec![vec![3]] }).unwrap();
        assert_eq!(grid.occupant_at(Vec2 { i: -1, j: 0 }), None);
        assert_eq!(grid.occupant_at(Vec2 { i: 0, j: 1 }), None);
        assert!(!grid.is_goal_at(Vec2 { i: 5, j: 5 }));
    }
}
