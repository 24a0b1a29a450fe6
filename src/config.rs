use std::time::Duration;

pub const ROWS: usize = 20;
pub const COLS: usize = 20;

/// Number of cells brought to life before the first generation
pub const CELLS: usize = 12;

/// Pause between two generations
pub const DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub population: usize,
    pub delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            population: CELLS,
            delay: DELAY,
        }
    }
}
