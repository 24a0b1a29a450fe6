use crate::cell::Status;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Bit `i` of `b` (resp. `s`) being on means a dead (resp. alive) cell with `i` alive
    /// neighbors is alive in the next generation. Bits past the 8th are ignored.
    const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// The transition a cell with status `status` and `neighbors` alive neighbors should make,
    /// or `None` when it keeps its status.
    pub fn transition(&self, status: Status, neighbors: u8) -> Option<Status> {
        // more than 8 neighbors can't happen, and is never a birth or a survival
        let bit = 1u16.checked_shl(neighbors as u32).unwrap_or(0);

        match status {
            Status::Alive if self.survivals() & bit == 0 => Some(Status::Dead),
            Status::Dead if self.births() & bit != 0 => Some(Status::Alive),
            _ => None,
        }
    }
}
