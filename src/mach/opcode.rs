use super::Word;
use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// Every instruction is one opcode word followed by zero to three
/// operand words. Operands are either literals (0..32767) or register
/// references (32768..32775).
///
/// For example: `OUT 'h'` is encoded as `[19, 104]`.

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Opcode {
    // *** Machine control
    /// Stop execution.
    Halt = 0,
    /// Does nothing.
    Noop = 21,

    // *** Register and stack
    Set = 1,
    Push = 2,
    /// Faults with `StackUnderflow` on an empty stack.
    Pop = 3,

    // *** Comparison
    Eq = 4,
    Gt = 5,

    // *** Branch control
    Jmp = 6,
    /// Jump to the second operand if the first is non-zero.
    Jt = 7,
    /// Jump to the second operand if the first is zero.
    Jf = 8,
    /// Push the return address then jump.
    Call = 17,
    /// Pop the return address and jump to it.
    Ret = 18,

    // *** Arithmetic modulo 32768
    Add = 9,
    Mult = 10,
    Mod = 11,
    And = 12,
    Or = 13,
    Not = 14,

    // *** Memory
    Rmem = 15,
    Wmem = 16,

    // *** Character I/O
    Out = 19,
    In = 20,
}

impl Opcode {
    /// Number of operand words following the opcode.
    pub fn arity(self) -> usize {
        use Opcode::*;
        match self {
            Halt | Ret | Noop => 0,
            Push | Pop | Jmp | Call | Out | In => 1,
            Set | Jt | Jf | Not | Rmem | Wmem => 2,
            Eq | Gt | Add | Mult | Mod | And | Or => 3,
        }
    }

    pub fn code(self) -> Word {
        self as Word
    }

    pub fn is_opcode(word: Word) -> bool {
        word <= Opcode::Noop.code()
    }
}

impl TryFrom<Word> for Opcode {
    type Error = Word;

    fn try_from(word: Word) -> Result<Opcode, Word> {
        use Opcode::*;
        Ok(match word {
            0 => Halt,
            1 => Set,
            2 => Push,
            3 => Pop,
            4 => Eq,
            5 => Gt,
            6 => Jmp,
            7 => Jt,
            8 => Jf,
            9 => Add,
            10 => Mult,
            11 => Mod,
            12 => And,
            13 => Or,
            14 => Not,
            15 => Rmem,
            16 => Wmem,
            17 => Call,
            18 => Ret,
            19 => Out,
            20 => In,
            21 => Noop,
            _ => return Err(word),
        })
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Halt => write!(f, "HALT"),
            Set => write!(f, "SET"),
            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),
            Eq => write!(f, "EQ"),
            Gt => write!(f, "GT"),
            Jmp => write!(f, "JMP"),
            Jt => write!(f, "JT"),
            Jf => write!(f, "JF"),
            Add => write!(f, "ADD"),
            Mult => write!(f, "MULT"),
            Mod => write!(f, "MOD"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Not => write!(f, "NOT"),
            Rmem => write!(f, "RMEM"),
            Wmem => write!(f, "WMEM"),
            Call => write!(f, "CALL"),
            Ret => write!(f, "RET"),
            Out => write!(f, "OUT"),
            In => write!(f, "IN"),
            Noop => write!(f, "NOOP"),
        }
    }
}
