//! # Synacor
//!
//! Runs a program image on the 15-bit virtual machine.
//!

mod term;

fn main() {
    term::main()
}
