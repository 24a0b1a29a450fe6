/// Status of a cell. The discriminant is the byte used when drawing the board.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    Alive = b'A',
    Dead = b'*',
}

impl Status {
    pub const fn is_alive(self) -> bool {
        matches!(self, Status::Alive)
    }

    /// The character this status is drawn as
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cell {
    row: usize,
    col: usize,

    /// What the cell currently is
    pub current: Status,

    /// The transition scheduled for this generation, if any.
    ///
    /// `None` means the cell keeps its `current` status when the generation is committed.
    pub next: Option<Status>,
}

impl Cell {
    /// A dead cell at the given position with no scheduled transition
    pub const fn dead(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            current: Status::Dead,
            next: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_alive(&self) -> bool {
        self.current.is_alive()
    }

    /// Move the scheduled transition into `current`. Returns whether the status changed.
    pub fn commit(&mut self) -> bool {
        match self.next.take() {
            Some(next) if next != self.current => {
                self.current = next;
                true
            }
            _ => false,
        }
    }
}
