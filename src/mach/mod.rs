/*!
## Rust Machine Module

This Rust module is the virtual machine: a 15-bit word addressed memory,
eight registers, an unbounded stack and a line buffered input queue,
driven by a fetch-decode-execute loop over 22 opcodes.

*/

/// A 15-bit value stored in a 16-bit cell. Memory may also hold raw
/// operand words up to 32775.
pub type Word = u16;
pub type Address = usize;

pub const MEMORY_SIZE: usize = 32768;
pub const WORD_MODULUS: Word = 32768;
pub const REGISTER_COUNT: usize = 8;

#[macro_use]
mod error;
mod image;
mod input;
mod memory;
mod opcode;
mod operand;
mod registers;
mod runtime;
mod stack;

pub use error::Error;
pub use error::ErrorCode;
pub use image::{load_image, save_image};
pub use input::{BufReadSource, InputQueue, LineSource, NoInput, ScriptSource};
pub use memory::Memory;
pub use opcode::Opcode;
pub use operand::Operand;
pub use registers::Registers;
pub use runtime::{Advance, Event, Runtime};
pub use stack::Stack;

#[cfg(test)]
mod tests;
