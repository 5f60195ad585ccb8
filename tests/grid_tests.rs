use broadside::{orthogonal_neighbors, surrounding, Grid, GridError};

#[test]
fn test_new_and_fill() {
    let mut grid = Grid::new(8, false);
    assert_eq!(grid.size(), 8);
    assert_eq!(grid.count(|&v| v), 0);
    grid.fill(true);
    assert_eq!(grid.count(|&v| v), 64);
    assert!(grid.in_bounds(7, 7));
    assert!(!grid.in_bounds(8, 0));
}

#[test]
fn test_get_set_bounds() {
    let mut grid = Grid::new(4, 0u32);
    grid.set(1, 1, 7).unwrap();
    assert_eq!(grid.get(1, 1).unwrap(), 7);

    *grid.get_mut(2, 3).unwrap() += 2;
    assert_eq!(grid.get(2, 3).unwrap(), 2);

    assert_eq!(
        grid.get(4, 0).unwrap_err(),
        GridError::IndexOutOfBounds { row: 4, col: 0 }
    );
    assert!(grid.set(0, 4, 1).is_err());
    assert_eq!(grid.count(|&v| v > 0), 2);
}

#[test]
fn test_iter_is_row_major() {
    let mut grid = Grid::new(2, 'a');
    grid.set(0, 1, 'b').unwrap();
    grid.set(1, 0, 'c').unwrap();
    let cells: Vec<_> = grid.iter().collect();
    assert_eq!(
        cells,
        vec![((0, 0), 'a'), ((0, 1), 'b'), ((1, 0), 'c'), ((1, 1), 'a')]
    );
}

#[test]
fn test_neighbourhoods_clip_to_board() {
    let corner: Vec<_> = orthogonal_neighbors(10, (0, 0)).collect();
    assert_eq!(corner, vec![(0, 1), (1, 0)]);

    let middle: Vec<_> = orthogonal_neighbors(10, (5, 5)).collect();
    assert_eq!(middle, vec![(4, 5), (5, 6), (6, 5), (5, 4)]);

    assert_eq!(surrounding(10, (0, 0)).count(), 4);
    assert_eq!(surrounding(10, (5, 5)).count(), 9);
    assert_eq!(surrounding(10, (9, 4)).count(), 6);
}
