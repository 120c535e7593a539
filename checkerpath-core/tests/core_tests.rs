use checkerpath_core::{
    find_best_paths, path_count, Coords, Error, Grid, GridConfig, Path, Sampling, ValueRange,
};

fn check_monotone(grid: &Grid, path: &Path) {
    assert_eq!(path.len(), grid.width() + grid.height() - 1);
    assert_eq!(path.cells.first().unwrap().coords, grid.lower_left());
    assert_eq!(path.cells.last().unwrap().coords, grid.upper_right());
    for pair in path.cells.windows(2) {
        let (a, b) = (pair[0].coords, pair[1].coords);
        let right = b.x == a.x + 1 && b.y == a.y;
        let up = b.x == a.x && b.y + 1 == a.y;
        assert!(right ^ up, "bad step {:?} -> {:?}", a, b);
    }
    let sum: u64 = path.cells.iter().map(|c| u64::from(c.value)).sum();
    assert_eq!(path.value, sum);
}

#[test]
fn two_by_two_paths_in_discovery_order() {
    let grid = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
    assert_eq!(grid.lower_left(), Coords::new(0, 1));
    assert_eq!(grid.lookup(0, 1).unwrap().value, 3);

    let result = find_best_paths(&grid).unwrap();
    let sums: Vec<Vec<u32>> = result.all_paths.iter().map(|p| p.values()).collect();
    assert_eq!(sums, vec![vec![3, 4, 2], vec![3, 1, 2]]);
    assert_eq!(result.all_paths[0].value, 9);
    assert_eq!(result.all_paths[1].value, 6);
    assert_eq!(result.best_value, 9);
    assert_eq!(result.best_paths.len(), 1);
    assert_eq!(result.best_paths[0], result.all_paths[0]);
}

#[test]
fn ties_keep_every_best_path_right_branch_first() {
    let grid = Grid::from_rows(&[[1, 2], [3, 1]]).unwrap();
    let result = find_best_paths(&grid).unwrap();
    assert_eq!(result.best_value, 6);
    assert_eq!(result.best_paths.len(), 2);
    assert_eq!(result.best_paths[0].coords(), vec![Coords::new(0, 1), Coords::new(1, 1), Coords::new(1, 0)]);
    assert_eq!(result.best_paths[1].coords(), vec![Coords::new(0, 1), Coords::new(0, 0), Coords::new(1, 0)]);
}

#[test]
fn later_record_replaces_earlier_best() {
    // right-first path is 1+1+1, the up-first one 1+9+1
    let grid = Grid::from_rows(&[[9, 1], [1, 1]]).unwrap();
    let result = find_best_paths(&grid).unwrap();
    assert_eq!(result.best_value, 11);
    assert_eq!(result.best_paths.len(), 1);
    assert_eq!(result.best_paths[0].values(), vec![1, 9, 1]);
}

#[test]
fn single_cell_grid() {
    let grid = Grid::from_rows(&[[7]]).unwrap();
    let result = find_best_paths(&grid).unwrap();
    assert_eq!(result.path_count(), 1);
    assert_eq!(result.best_value, 7);
    assert_eq!(result.best_paths.len(), 1);
    assert_eq!(result.best_paths[0].values(), vec![7]);
}

#[test]
fn single_row_and_column_are_forced() {
    let row = find_best_paths(&Grid::from_rows(&[[1, 2, 3, 4]]).unwrap()).unwrap();
    assert_eq!(row.path_count(), 1);
    assert_eq!(row.best_paths[0].values(), vec![1, 2, 3, 4]);

    let col = find_best_paths(&Grid::from_rows(&[[1], [2], [3]]).unwrap()).unwrap();
    assert_eq!(col.path_count(), 1);
    assert_eq!(col.best_paths[0].values(), vec![3, 2, 1]);
}

#[test]
fn path_count_matches_binomial() {
    for width in 1..=6 {
        for height in 1..=6 {
            let grid = Grid::generate(width, height, ValueRange::SMALL, Some((width * 10 + height) as u64)).unwrap();
            let result = find_best_paths(&grid).unwrap();
            let expected = path_count(width, height).unwrap();
            assert_eq!(result.path_count() as u128, expected, "{}x{}", width, height);
            for p in &result.all_paths { check_monotone(&grid, p); }
        }
    }
    assert_eq!(path_count(3, 3), Some(6));
    assert_eq!(path_count(5, 4), Some(35));
    assert_eq!(path_count(0, 4), Some(0));
    assert_eq!(path_count(40, 40), Some(27_217_014_869_199_032_015_600));
    assert_eq!(path_count(200, 200), None);
}

#[test]
fn best_paths_are_exactly_the_maximum() {
    let grid = Grid::generate(5, 4, ValueRange::new(1, 3), Some(42)).unwrap();
    let result = find_best_paths(&grid).unwrap();
    let max = result.all_paths.iter().map(|p| p.value).max().unwrap();
    assert_eq!(result.best_value, max);
    let expected: Vec<&Path> = result.all_paths.iter().filter(|p| p.value == max).collect();
    assert_eq!(result.best_paths.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn search_is_idempotent() {
    let grid = Grid::generate(4, 5, ValueRange::LARGE, Some(7)).unwrap();
    let first = find_best_paths(&grid).unwrap();
    let second = find_best_paths(&grid).unwrap();
    assert_eq!(first, second);
}

#[test]
fn seeded_generation_is_deterministic() {
    let a = Grid::generate(6, 3, ValueRange::SMALL, Some(99)).unwrap();
    let b = Grid::generate(6, 3, ValueRange::SMALL, Some(99)).unwrap();
    assert_eq!(a, b);
    let ids: Vec<usize> = a.cells().map(|c| c.id).collect();
    assert_eq!(ids, (0..18).collect::<Vec<_>>());
    let ninth = a.cells().nth(8).unwrap();
    assert_eq!(ninth.coords, Coords::new(2, 1));
}

#[test]
fn values_stay_within_sampling_bounds() {
    let offset = ValueRange::new(5, 3);
    assert!(offset.validate().is_err());

    let offset = ValueRange::new(3, 5);
    assert_eq!(offset.bounds(), (3, 7));
    let grid = Grid::generate(20, 20, offset, Some(1)).unwrap();
    assert!(grid.cells().all(|c| (3..=7).contains(&c.value)));

    let inclusive = offset.with_sampling(Sampling::Inclusive);
    assert_eq!(inclusive.bounds(), (3, 5));
    let grid = Grid::generate(20, 20, inclusive, Some(1)).unwrap();
    assert!(grid.cells().all(|c| (3..=5).contains(&c.value)));
}

#[test]
fn invalid_input_is_rejected() {
    assert_eq!(Grid::new(0, 3, ValueRange::SMALL).unwrap_err(), Error::InvalidDimension { width: 0, height: 3 });
    assert!(matches!(Grid::new(3, 0, ValueRange::SMALL), Err(Error::InvalidDimension { .. })));
    assert!(matches!(Grid::new(2, 2, ValueRange::new(0, 0)), Err(Error::InvalidRange { .. })));
    assert!(Grid::new(2, 2, ValueRange::new(0, 0).with_sampling(Sampling::Inclusive)).is_ok());
    assert!(matches!(Grid::from_rows::<[u32; 0]>(&[]), Err(Error::InvalidDimension { .. })));
    let ragged: Vec<Vec<u32>> = vec![vec![1, 2], vec![3]];
    assert_eq!(Grid::from_rows(&ragged).unwrap_err(), Error::RaggedRows { row: 1, expected: 2, found: 1 });
}

#[test]
fn lookup_out_of_bounds() {
    let grid = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
    assert_eq!(grid.lookup(1, 0).unwrap().value, 2);
    assert_eq!(grid.lookup(2, 0).unwrap_err(), Error::OutOfBounds { x: 2, y: 0, width: 2, height: 2 });
    assert!(grid.lookup(0, 2).is_err());
    assert_eq!(grid.to_string(), "1 2\n3 4\n");
}

#[test]
fn config_from_json_builds_grid() {
    let cfg: GridConfig = serde_json::from_str(r#"{ "width": 3, "height": 2, "seed": 5 }"#).unwrap();
    assert_eq!(cfg.range, ValueRange::SMALL);
    let grid = cfg.build().unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 2));
    assert_eq!(grid, cfg.build().unwrap());

    let cfg: GridConfig = serde_json::from_str(
        r#"{ "width": 2, "height": 2, "range": { "min": 1, "max": 99, "sampling": "inclusive" } }"#,
    ).unwrap();
    assert_eq!(cfg.range.sampling, Sampling::Inclusive);
    assert!(GridConfig::new(0, 1).build().is_err());
}

#[test]
fn deserialized_grid_keeps_layout_invariant() {
    let grid = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    let back: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
    assert_eq!(find_best_paths(&back).unwrap().best_value, 9);

    let missing = serde_json::from_str::<Grid>(r#"{"width":2,"height":2,"cells":[]}"#).unwrap_err();
    assert!(missing.to_string().contains("grid needs 4 cells, got 0"), "{}", missing);
    let empty = serde_json::from_str::<Grid>(r#"{"width":0,"height":0,"cells":[]}"#).unwrap_err();
    assert!(empty.to_string().contains("invalid grid size 0x0"), "{}", empty);
    let swapped = r#"{"width":2,"height":1,"cells":[
        {"id":0,"coords":{"x":1,"y":0},"value":1},
        {"id":1,"coords":{"x":0,"y":0},"value":2}]}"#;
    let err = serde_json::from_str::<Grid>(swapped).unwrap_err();
    assert!(err.to_string().contains("cell 0 sits at (1, 0), expected (0, 0)"), "{}", err);
}

#[test]
fn value_width_tracks_widest_value() {
    let grid = Grid::from_rows(&[[1, 120], [3, 45]]).unwrap();
    assert_eq!(grid.value_width(), 3);
    assert_eq!(grid.to_string(), "  1 120\n  3  45\n");
    assert_eq!(Grid::from_rows(&[[7]]).unwrap().value_width(), 1);
}
