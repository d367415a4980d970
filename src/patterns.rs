use crate::grid::{Grid, Owner};

// step vectors for the four window families: horizontal, vertical,
// down-right diagonal and down-left diagonal
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Counts windows of exactly `length` consecutive cells holding `owner`
/// across all four directions. Overlapping windows count separately:
/// a run of L cells contains `L - length + 1` windows.
pub fn count_runs(grid: &Grid, owner: Owner, length: usize) -> usize {
    match length {
        0 => 0,
        1 => count_cells(grid, owner),
        _ => DIRECTIONS
            .iter()
            .map(|&step| count_windows(grid, owner, length, step))
            .sum(),
    }
}

// single cells are counted once, not once per direction
fn count_cells(grid: &Grid, owner: Owner) -> usize {
    let mut count = 0;
    for column in 0..grid.columns() {
        for row in 0..grid.rows() {
            if grid.at(column, row) == owner {
                count += 1;
            }
        }
    }
    count
}

fn count_windows(grid: &Grid, owner: Owner, length: usize, (dx, dy): (isize, isize)) -> usize {
    let mut count = 0;
    for column in 0..grid.columns() as isize {
        for row in 0..grid.rows() as isize {
            // walk each line once, starting from the cell with no predecessor
            if grid.in_bounds(column - dx, row - dy) {
                continue;
            }
            let mut run = 0;
            let (mut x, mut y) = (column, row);
            while grid.in_bounds(x, y) {
                if grid.at(x as usize, y as usize) == owner {
                    run += 1;
                    if run >= length {
                        count += 1;
                    }
                } else {
                    run = 0;
                }
                x += dx;
                y += dy;
            }
        }
    }
    count
}

// early-exit run scan shared with win detection
pub(crate) fn has_run(grid: &Grid, owner: Owner, length: usize, (dx, dy): (isize, isize)) -> bool {
    for column in 0..grid.columns() as isize {
        for row in 0..grid.rows() as isize {
            if grid.in_bounds(column - dx, row - dy) {
                continue;
            }
            let mut run = 0;
            let (mut x, mut y) = (column, row);
            while grid.in_bounds(x, y) {
                if grid.at(x as usize, y as usize) == owner {
                    run += 1;
                    if run >= length {
                        return true;
                    }
                } else {
                    run = 0;
                }
                x += dx;
                y += dy;
            }
        }
    }
    false
}
