use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::Generation;
use crate::cell::Status;
use crate::grid::Grid;
use crate::rules::B3S23;
use crate::rules::RuleSet;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedError {
    #[error(
        "cannot place {requested} cells: a {block_rows}x{block_cols} block at ({row}, {col}) does not fit a {rows}x{cols} grid"
    )]
    NoRoom {
        requested: usize,
        block_rows: usize,
        block_cols: usize,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Order in which [`World::check_neighbors_in`] visits the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    #[default]
    RowMajor,
    ReverseRowMajor,
}

pub struct World {
    /// The board
    grid: Grid,

    /// Life rules
    rules: RuleSet,

    /// Number of completed evaluation passes
    generation: Generation,

    /// Number of alive cells, kept up to date as transitions are scheduled
    population: usize,
}

impl World {
    /// Create a world where every cell is dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_grid(Grid::new(rows, cols))
    }

    /// Wrap an existing board. The population is counted from the grid.
    pub fn from_grid(mut grid: Grid) -> Self {
        grid.clear_next();
        let population = grid.alive_count();

        Self {
            grid,
            rules: B3S23,
            generation: 0,
            population,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn is_extinct(&self) -> bool {
        self.population == 0
    }

    /// Bring `n` cells to life as a near-square block whose top left corner sits at the center
    /// of the grid.
    ///
    /// The block is `ceil(sqrt(n))` columns wide and `n / width` rows tall, so when `n` isn't a
    /// multiple of the width the trailing cells are dropped. Cells are filled row by row.
    pub fn seed(&mut self, n: usize) -> Result<(), SeedError> {
        let (block_rows, block_cols) = Self::layout(n);
        let (row, col) = (self.grid.rows() / 2, self.grid.cols() / 2);

        if row + block_rows > self.grid.rows() || col + block_cols > self.grid.cols() {
            return Err(SeedError::NoRoom {
                requested: n,
                block_rows,
                block_cols,
                row,
                col,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            });
        }

        debug!(n, block_rows, block_cols, row, col, "seeding");

        for i in 0..block_rows {
            for j in 0..block_cols {
                let (r, c) = (row + i, col + j);

                // already checked against the grid size above
                if let Ok(Status::Dead) = self.grid.status(r, c) {
                    let _ = self.grid.set_current(r, c, Status::Alive);
                    self.population += 1;
                }
            }
        }

        Ok(())
    }

    /// `(rows, cols)` of the block used to seed `n` cells
    fn layout(n: usize) -> (usize, usize) {
        if n == 0 {
            return (0, 0);
        }

        let mut cols = n.isqrt();
        if cols * cols < n {
            cols += 1;
        }

        (n / cols, cols)
    }

    /// Compute the next status of every cell, in row-major order.
    pub fn check_neighbors(&mut self) {
        self.check_neighbors_in(ScanOrder::RowMajor)
    }

    /// Compute the next status of every cell, visiting them in `order`.
    ///
    /// Neighbors are always counted on the current statuses, which this pass never touches, so
    /// the scheduled transitions don't depend on `order`. The scan stops as soon as the
    /// population reaches zero. The generation counter is bumped either way.
    pub fn check_neighbors_in(&mut self, order: ScanOrder) {
        self.grid.clear_next();

        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let n = rows * cols;

        for k in 0..n {
            if self.population == 0 {
                break;
            }

            let k = match order {
                ScanOrder::RowMajor => k,
                ScanOrder::ReverseRowMajor => n - 1 - k,
            };
            let (row, col) = (k / cols, k % cols);

            let neighbors = self.grid.live_neighbors(row, col);
            let current = self.grid.cells()[k].current;

            let Some(next) = self.rules.transition(current, neighbors) else {
                continue;
            };

            let _ = self.grid.set_next(row, col, next);

            match next {
                Status::Alive => self.population += 1,
                Status::Dead => self.population -= 1,
            }
        }

        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population,
            "evaluated"
        );
    }

    /// Commit every scheduled transition. Must run after [`World::check_neighbors`].
    pub fn update_status(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());

        for row in 0..rows {
            for col in 0..cols {
                let _ = self.grid.commit(row, col);
            }
        }
    }

    /// Advance the world by one generation
    pub fn step(&mut self) {
        self.check_neighbors();
        self.update_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> World {
        let mut grid = Grid::new(rows, cols);
        for &(r, c) in alive {
            grid.set_current(r, c, Status::Alive).unwrap();
        }

        World::from_grid(grid)
    }

    fn alive(world: &World) -> Vec<(usize, usize)> {
        world
            .grid()
            .cells()
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| (c.row(), c.col()))
            .collect()
    }

    #[test]
    fn layout_is_near_square() {
        assert_eq!(World::layout(0), (0, 0));
        assert_eq!(World::layout(1), (1, 1));
        assert_eq!(World::layout(4), (2, 2));
        assert_eq!(World::layout(5), (1, 3));
        assert_eq!(World::layout(12), (3, 4));
        assert_eq!(World::layout(16), (4, 4));
    }

    #[test]
    fn seed_twelve_at_center() {
        let mut world = World::new(20, 20);
        world.seed(12).unwrap();

        assert_eq!(world.population(), 12);
        assert_eq!(world.grid().alive_count(), 12);

        let expected: Vec<_> = (10..13)
            .flat_map(|r| (10..14).map(move |c| (r, c)))
            .collect();
        assert_eq!(alive(&world), expected);
    }

    #[test]
    fn seed_counts_placed_cells_only() {
        let mut world = World::new(20, 20);
        world.seed(5).unwrap();

        assert_eq!(world.population(), 3);
        assert_eq!(alive(&world), vec![(10, 10), (10, 11), (10, 12)]);
    }

    #[test]
    fn seed_zero_places_nothing() {
        let mut world = World::new(20, 20);
        world.seed(0).unwrap();

        assert!(world.is_extinct());
        assert_eq!(world.grid().alive_count(), 0);
    }

    #[test]
    fn seed_that_does_not_fit() {
        let mut world = World::new(4, 4);
        let err = world.seed(12).unwrap_err();

        assert_eq!(
            err,
            SeedError::NoRoom {
                requested: 12,
                block_rows: 3,
                block_cols: 4,
                row: 2,
                col: 2,
                rows: 4,
                cols: 4,
            }
        );
        assert!(world.is_extinct());
    }

    #[test]
    fn block_is_still() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut world = world_with(4, 4, &block);

        world.step();

        assert_eq!(alive(&world), block.to_vec());
        assert_eq!(world.population(), 4);
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = vec![(2, 1), (2, 2), (2, 3)];
        let vertical = vec![(1, 2), (2, 2), (3, 2)];
        let mut world = world_with(5, 5, &horizontal);

        world.step();
        assert_eq!(alive(&world), vertical);
        assert_eq!(world.population(), 3);

        world.step();
        assert_eq!(alive(&world), horizontal);
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn blinker_on_the_edge() {
        // the half that would fall outside the grid is simply lost
        let mut world = world_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);

        world.step();

        assert_eq!(alive(&world), vec![(0, 1), (1, 1)]);
        assert_eq!(world.population(), 2);
    }

    #[test]
    fn lone_cell_dies() {
        let mut world = world_with(3, 3, &[(1, 1)]);

        world.step();

        assert!(world.is_extinct());
        assert_eq!(world.grid().alive_count(), 0);
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn extinct_scan_still_counts_a_generation() {
        let mut world = World::new(3, 3);

        world.check_neighbors();
        world.update_status();
        world.check_neighbors();

        assert_eq!(world.generation(), 2);
        assert!(world.grid().cells().iter().all(|c| c.next.is_none()));
    }

    #[test]
    fn only_this_generation_is_scheduled() {
        let mut world = world_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        world.step();
        world.check_neighbors();

        // two ends die, two are born, nothing left over from the previous generation
        let scheduled: Vec<_> = world
            .grid()
            .cells()
            .iter()
            .filter_map(|c| c.next.map(|next| (c.row(), c.col(), next)))
            .collect();

        assert_eq!(
            scheduled,
            vec![
                (1, 2, Status::Dead),
                (2, 1, Status::Alive),
                (2, 3, Status::Alive),
                (3, 2, Status::Dead),
            ]
        );
    }

    #[test]
    fn scan_order_does_not_matter() {
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let mut forward = world_with(6, 6, &glider);
        let mut backward = world_with(6, 6, &glider);

        for _ in 0..4 {
            forward.check_neighbors_in(ScanOrder::RowMajor);
            backward.check_neighbors_in(ScanOrder::ReverseRowMajor);
            forward.update_status();
            backward.update_status();

            assert_eq!(forward.grid(), backward.grid());
            assert_eq!(forward.population(), backward.population());
        }

        // the glider moved one cell down and to the right
        let moved: Vec<_> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(alive(&forward), moved);
    }
}
