use super::{Word, REGISTER_COUNT};

/// ## Register bank
///
/// Eight words, all zero at start. Indices wrap modulo eight instead
/// of faulting.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registers {
    cells: [Word; REGISTER_COUNT],
}

impl Registers {
    pub fn new() -> Registers {
        Registers::default()
    }
    pub fn get(&self, idx: usize) -> Word {
        self.cells[idx % REGISTER_COUNT]
    }
    pub fn set(&mut self, idx: usize, val: Word) {
        self.cells[idx % REGISTER_COUNT] = val;
    }
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.cells.iter()
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (idx, val) in self.cells.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "R{}={}", idx, val)?;
        }
        Ok(())
    }
}
