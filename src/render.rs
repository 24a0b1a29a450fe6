use std::fmt::Write;

use crate::world::World;

/// Text rendering of a [`World`]:
///
/// ```notrust
/// Generation: 0
/// Population: 3
///
///  * * *
///  A A A
///  * * *
/// ```
///
/// Every cell is preceded by a space, and every line, including the last, ends with a newline.
#[derive(Default)]
pub struct Frame {
    /// The frame buffer, reused from one generation to the next
    fb: String,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, world: &World) -> &str {
        let grid = world.grid();

        self.fb.clear();

        // writing into a String can't fail
        let _ = writeln!(self.fb, "Generation: {}", world.generation());
        let _ = writeln!(self.fb, "Population: {}", world.population());
        self.fb.push('\n');

        for row in 0..grid.rows() {
            for cell in grid.row(row) {
                self.fb.push(' ');
                self.fb.push(cell.current.as_char());
            }
            self.fb.push('\n');
        }

        &self.fb
    }
}
