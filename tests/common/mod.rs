#![allow(dead_code)]
use synacor::mach::{Error, Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Collect output until the runtime halts, faults, wants input that
/// is not there, or keeps running past `cycles` twice in a row.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Halted | Event::Input => break,
            Event::Fault(error) => {
                s.push_str(&format!("?{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ch) => s.push(*ch),
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Run to completion against a fixed list of input lines.
pub fn exec_with_input(image: Vec<u16>, lines: &[&str]) -> (String, Result<(), Error>) {
    let mut runtime = Runtime::new(image);
    let text = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
    let mut source = synacor::mach::BufReadSource::new(text.as_bytes());
    let mut sink = Vec::new();
    let result = runtime.run(&mut source, &mut sink);
    (String::from_utf8(sink).unwrap(), result)
}

pub fn fault(runtime: &mut Runtime) -> Error {
    loop {
        match runtime.execute(5000) {
            Event::Fault(error) => return error,
            Event::Halted => panic!("halted without fault"),
            Event::Input => panic!("waiting for input"),
            _ => {}
        }
    }
}

pub const R0: u16 = 32768;
pub const R1: u16 = 32769;
pub const R2: u16 = 32770;
pub const R7: u16 = 32775;

pub mod op {
    pub const HALT: u16 = 0;
    pub const SET: u16 = 1;
    pub const PUSH: u16 = 2;
    pub const POP: u16 = 3;
    pub const EQ: u16 = 4;
    pub const GT: u16 = 5;
    pub const JMP: u16 = 6;
    pub const JT: u16 = 7;
    pub const JF: u16 = 8;
    pub const ADD: u16 = 9;
    pub const MULT: u16 = 10;
    pub const MOD: u16 = 11;
    pub const AND: u16 = 12;
    pub const OR: u16 = 13;
    pub const NOT: u16 = 14;
    pub const RMEM: u16 = 15;
    pub const WMEM: u16 = 16;
    pub const CALL: u16 = 17;
    pub const RET: u16 = 18;
    pub const OUT: u16 = 19;
    pub const IN: u16 = 20;
    pub const NOOP: u16 = 21;
}
