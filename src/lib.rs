//! # Synacor virtual machine
//!
//! A fetch-decode-execute machine for the 22-instruction Synacor
//! bytecode: 32768 words of memory, eight registers, an unbounded
//! stack and line buffered character input.
//!
//! ```
//! use synacor::mach::{Event, Runtime};
//!
//! // OUT 'h'  OUT 'i'  HALT
//! let mut runtime = Runtime::new(vec![19, 104, 19, 105, 0]);
//! let mut output = String::new();
//! loop {
//!     match runtime.execute(1000) {
//!         Event::Print(ch) => output.push(ch),
//!         Event::Halted => break,
//!         event => panic!("{:?}", event),
//!     }
//! }
//! assert_eq!(output, "hi");
//! ```

pub mod log;
pub mod mach;
