use std::collections::{HashMap, HashSet};

use advent::{distances, neighbors, Grid, Offsets, Position, TargetSearch};
use proptest::prelude::*;

fn open_grid(rows: &[String]) -> Grid<bool> {
    Grid::parse(rows, |c| Some(c == '.')).unwrap()
}

/// Relaxes distances until nothing changes. Cells in `terminal` are reached but
/// never expanded, matching a search that stops at its targets.
fn brute_distances(
    grid: &Grid<bool>,
    source: Position,
    terminal: &HashSet<Position>,
) -> HashMap<Position, usize> {
    let mut dists = HashMap::from([(source, 0)]);
    loop {
        let mut changed = false;
        for pos in grid.positions() {
            let Some(&dist) = dists.get(&pos) else {
                continue;
            };
            if pos != source && terminal.contains(&pos) {
                continue;
            }
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let Some(next_pos) = pos.offset(dr, dc) else {
                    continue;
                };
                if grid.get(&next_pos) == Some(&true)
                    && dists.get(&next_pos).map_or(true, |d| dist + 1 < *d)
                {
                    dists.insert(next_pos, dist + 1);
                    changed = true;
                }
            }
        }
        if !changed {
            return dists;
        }
    }
}

fn grid_and_picks() -> impl Strategy<Value = (Vec<String>, Position, Vec<Position>)> {
    (1usize..7, 1usize..7).prop_flat_map(|(row_n, col_n)| {
        (
            prop::collection::vec(
                prop::collection::vec(prop::bool::weighted(0.7), col_n),
                row_n,
            ),
            0..row_n,
            0..col_n,
            prop::collection::vec((0..row_n, 0..col_n), 0..8),
        )
            .prop_map(|(cells, r, c, picks)| {
                let rows = cells
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|open| if *open { '.' } else { '#' })
                            .collect::<String>()
                    })
                    .collect::<Vec<_>>();
                let targets = picks
                    .into_iter()
                    .map(|(r, c)| Position::new(r, c))
                    .collect::<Vec<_>>();
                (rows, Position::new(r, c), targets)
            })
    })
}

#[test]
fn detours_around_wall() {
    let grid = Grid::parse(&["...", "..#", "..."], Some).unwrap();
    let targets = HashSet::from([Position::new(2, 2), Position::new(1, 2)]);
    let found = TargetSearch::new(&grid, Position::new(0, 0), &targets)
        .passable(|_, cell| *cell != '#')
        .collect::<Vec<_>>();

    assert_eq!(found, vec![(Position::new(2, 2), 4)]);
}

#[test]
fn single_cell_without_targets_finds_nothing() {
    let grid = Grid::parse(&["."], Some).unwrap();
    let targets = HashSet::new();

    assert_eq!(
        TargetSearch::new(&grid, Position::new(0, 0), &targets).next(),
        None
    );
}

#[test]
fn center_reaches_orthogonal_neighbors_in_offset_order() {
    let grid = Grid::new(5, 5, ());
    let center = Position::new(2, 2);
    let targets = grid
        .neighbors(center, Offsets::Cardinal)
        .collect::<HashSet<_>>();
    let found = TargetSearch::new(&grid, center, &targets).collect::<Vec<_>>();

    assert_eq!(
        found,
        vec![
            (Position::new(1, 2), 1),
            (Position::new(2, 1), 1),
            (Position::new(2, 3), 1),
            (Position::new(3, 2), 1),
        ]
    );
}

#[test]
fn targets_block_or_expand() {
    let grid = Grid::parse(&[".....", "####.", "....."], Some).unwrap();
    let targets = HashSet::from([Position::new(0, 4), Position::new(2, 0)]);
    let source = Position::new(0, 0);

    let terminal = TargetSearch::new(&grid, source, &targets)
        .passable(|_, cell| *cell == '.')
        .collect::<Vec<_>>();
    assert_eq!(terminal, vec![(Position::new(0, 4), 4)]);

    let expanded = TargetSearch::new(&grid, source, &targets)
        .passable(|_, cell| *cell == '.')
        .expand_targets(true)
        .collect::<Vec<_>>();
    assert_eq!(
        expanded,
        vec![(Position::new(0, 4), 4), (Position::new(2, 0), 10)]
    );
}

#[test]
fn diagonal_offsets_shorten_paths() {
    let grid = Grid::new(4, 4, ());
    let targets = HashSet::from([Position::new(3, 3)]);
    let source = Position::new(0, 0);

    let cardinal = TargetSearch::new(&grid, source, &targets).next();
    let all = TargetSearch::new(&grid, source, &targets)
        .offsets(Offsets::All)
        .next();

    assert_eq!(cardinal, Some((Position::new(3, 3), 6)));
    assert_eq!(all, Some((Position::new(3, 3), 3)));
}

#[test]
fn distance_map_marks_walled_cells_unreachable() {
    let grid = Grid::parse(&[".#.", ".#.", "..."], Some).unwrap();
    let dists = distances(&grid, Position::new(0, 0), Offsets::Cardinal, |_, c| {
        *c == '.'
    });

    assert_eq!(dists[Position::new(0, 0)], Some(0));
    assert_eq!(dists[Position::new(0, 2)], Some(6));
    assert_eq!(dists[Position::new(1, 1)], None);
}

#[test]
fn corner_neighbors_follow_offset_order() {
    let corner = neighbors(Position::new(0, 0), 3, 3, Offsets::All).collect::<Vec<_>>();

    assert_eq!(
        corner,
        vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
    );
}

proptest! {
    #[test]
    fn neighbors_stay_in_bounds(
        row_n in 1usize..10,
        col_n in 1usize..10,
        r in 0usize..10,
        c in 0usize..10,
        all in any::<bool>(),
    ) {
        let pos = Position::new(r % row_n, c % col_n);
        let offsets = if all { Offsets::All } else { Offsets::Cardinal };
        for next_pos in neighbors(pos, row_n, col_n, offsets) {
            prop_assert!(next_pos.r < row_n && next_pos.c < col_n);
            let delta = (
                next_pos.r as isize - pos.r as isize,
                next_pos.c as isize - pos.c as isize,
            );
            prop_assert!(offsets.deltas().contains(&delta));
        }
    }

    #[test]
    fn search_matches_brute_force((rows, source, picks) in grid_and_picks()) {
        let grid = open_grid(&rows);
        let targets = picks.into_iter().collect::<HashSet<_>>();
        let passable = |_: Position, open: &bool| *open;

        let expanded = TargetSearch::new(&grid, source, &targets)
            .passable(passable)
            .expand_targets(true)
            .collect::<Vec<_>>();
        let oracle = brute_distances(&grid, source, &HashSet::new());
        let expected = targets
            .iter()
            .filter(|pos| **pos != source)
            .filter_map(|pos| oracle.get(pos).map(|dist| (*pos, *dist)))
            .collect::<HashMap<_, _>>();
        prop_assert_eq!(expanded.iter().copied().collect::<HashMap<_, _>>(), expected);
        let distinct = expanded.iter().map(|(pos, _)| *pos).collect::<HashSet<_>>();
        prop_assert_eq!(expanded.len(), distinct.len());

        let terminal = TargetSearch::new(&grid, source, &targets)
            .passable(passable)
            .collect::<Vec<_>>();
        let oracle = brute_distances(&grid, source, &targets);
        let expected = targets
            .iter()
            .filter(|pos| **pos != source)
            .filter_map(|pos| oracle.get(pos).map(|dist| (*pos, *dist)))
            .collect::<HashMap<_, _>>();
        prop_assert_eq!(terminal.iter().copied().collect::<HashMap<_, _>>(), expected);
    }

    #[test]
    fn search_is_repeatable_and_ordered((rows, source, picks) in grid_and_picks()) {
        let grid = open_grid(&rows);
        let targets = picks.into_iter().collect::<HashSet<_>>();
        let run = || {
            TargetSearch::new(&grid, source, &targets)
                .passable(|_, open| *open)
                .collect::<Vec<_>>()
        };

        let first = run();
        prop_assert_eq!(&first, &run());
        prop_assert!(first.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        prop_assert!(first.iter().all(|(pos, _)| *pos != source && targets.contains(pos)));
    }
}
