use super::{Registers, Word, REGISTER_COUNT, WORD_MODULUS};
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand address mode
///
/// A raw operand word below 32768 is a literal; 32768..32775 names one
/// of the eight registers. Anything above is not a valid operand.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Literal(Word),
    Register(usize),
}

impl Operand {
    pub fn decode(raw: Word) -> Result<Operand> {
        if raw < WORD_MODULUS {
            Ok(Operand::Literal(raw))
        } else if ((raw - WORD_MODULUS) as usize) < REGISTER_COUNT {
            Ok(Operand::Register((raw - WORD_MODULUS) as usize))
        } else {
            Err(error!(InvalidOperand; &format!("RAW WORD {}", raw)))
        }
    }

    /// Resolve a raw operand to the value it denotes.
    pub fn value(raw: Word, registers: &Registers) -> Result<Word> {
        Ok(match Operand::decode(raw)? {
            Operand::Literal(val) => val,
            Operand::Register(idx) => registers.get(idx),
        })
    }

    /// Register index for a write target. The raw word is never
    /// dereferenced; indices wrap modulo the register count.
    pub fn target(raw: Word) -> usize {
        raw as usize % REGISTER_COUNT
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operand::Literal(val) => write!(f, "{}", val),
            Operand::Register(idx) => write!(f, "R{}", idx),
        }
    }
}
