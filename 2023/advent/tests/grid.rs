use advent::{grid::Error, Direction, Grid, Offsets, Position};

fn char_grid(rows: &[&str]) -> Grid<char> {
    Grid::parse(rows, Some).unwrap()
}

#[test]
fn parse_keeps_rows_in_order() {
    let grid = char_grid(&["ab", "cd", "ef"]);

    assert_eq!(grid.row_n(), 3);
    assert_eq!(grid.col_n(), 2);
    assert_eq!(grid[Position::new(2, 1)], 'f');
    assert_eq!(grid.row(1), Some(&['c', 'd'][..]));
    assert_eq!(grid.column(0).copied().collect::<String>(), "ace");
    assert!(grid.row(3).is_none());
    assert_eq!(grid.column(2).count(), 0);
}

#[test]
fn parse_rejects_bad_input() {
    let empty: [&str; 0] = [];
    assert!(matches!(Grid::parse(&empty, Some), Err(Error::EmptyGrid)));
    assert!(matches!(
        Grid::parse(&["...", ".."], Some),
        Err(Error::InconsistentRow(3, 2))
    ));
    let invalid = Grid::parse(&["..", ".x"], |c| (c == '.').then_some(()));
    assert!(matches!(
        invalid,
        Err(Error::InvalidCharForGrid('x', Position { r: 1, c: 1 }))
    ));
}

#[test]
fn find_and_step_stay_on_grid() {
    let grid = char_grid(&["...", ".S.", "..."]);
    let start = grid.find(|c| *c == 'S').unwrap();

    assert_eq!(start, Position::new(1, 1));
    assert_eq!(grid.step(&start, Direction::North), Some(Position::new(0, 1)));
    assert_eq!(grid.step(&Position::new(0, 1), Direction::North), None);
    assert_eq!(grid.step(&Position::new(0, 2), Direction::East), None);
    assert_eq!(grid.neighbors(start, Offsets::All).count(), 8);
}

#[test]
fn swap_and_map_cells() {
    let mut grid = char_grid(&["ab", "cd"]);
    grid.swap(&Position::new(0, 0), &Position::new(1, 1));
    let upper = grid.map(|c| c.to_ascii_uppercase());

    assert_eq!(grid.row(0), Some(&['d', 'b'][..]));
    assert_eq!(upper[Position::new(1, 1)], 'A');
    assert_eq!(
        grid.positions().collect::<Vec<_>>(),
        vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1)
        ]
    );
}

#[test]
fn directions_turn_around() {
    for dir in Direction::all() {
        assert_eq!(dir.turn_clockwise().turn_counterclockwise(), *dir);
        assert_eq!(dir.reverse().reverse(), *dir);
        assert_eq!(dir.turn_clockwise().turn_clockwise(), dir.reverse());
    }
    assert_eq!(Position::new(0, 3).neighbor(Direction::North), None);
    assert_eq!(Position::new(2, 3).manhattan(&Position::new(5, 1)), 5);
}

#[test]
fn edit_cells_in_place() {
    let mut grid = Grid::new(2, 3, 0u32);
    if let Some(cell) = grid.get_mut(&Position::new(1, 2)) {
        *cell = 7;
    }
    grid[Position::new(0, 0)] += 1;

    assert_eq!(grid.get(&Position::new(1, 2)), Some(&7));
    assert_eq!(grid.get(&Position::new(2, 0)), None);
    assert!(grid.get_mut(&Position::new(0, 3)).is_none());
    assert_eq!(grid.iter().map(|(_, v)| *v).sum::<u32>(), 8);
}
