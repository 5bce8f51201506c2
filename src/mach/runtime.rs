use super::{
    Address, Error, InputQueue, LineSource, Memory, Opcode, Operand, Registers, Stack, Word,
    MEMORY_SIZE, WORD_MODULUS,
};
use crate::{debug, info, trace, warn};
use std::convert::TryFrom;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// Instructions executed by `run` between checks of the host.
const RUN_SLICE: usize = 5000;

/// ## Virtual machine runtime
///
/// Owns memory, registers, stack and input queue for the length of one
/// run. The host calls `execute` repeatedly and reacts to each `Event`.

pub struct Runtime {
    memory: Memory,
    registers: Registers,
    stack: Stack<Word>,
    input: InputQueue,
    input_closed: bool,
    advance: Advance,
    pc: Address,
    cycles: u64,
    state: State,
}

/// How the program counter moves past an instruction that does not
/// transfer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Continue at the first word after the operands that is itself a
    /// valid opcode. Halts if there is none.
    Scan,
    /// Continue directly after the operands.
    Flat,
}

impl Default for Advance {
    fn default() -> Advance {
        Advance::Scan
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Cycle budget used up; call `execute` again.
    Running,
    /// Emit this character before executing further.
    Print(char),
    /// `IN` needs a line. Answer with `enter` or `end_of_input`.
    Input,
    Halted,
    Fault(Error),
}

#[derive(Debug)]
enum State {
    Running,
    Halted,
    Faulted(Error),
}

enum Flow {
    Next,
    Jump(Word),
    Print(char),
    Wait,
    Halt,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(vec![])
    }
}

impl Runtime {
    pub fn new(image: Vec<Word>) -> Runtime {
        Runtime::with_advance(image, Advance::default())
    }

    /// An image longer than memory is not run: the runtime starts out
    /// faulted with `MalformedImage`.
    pub fn with_advance(image: Vec<Word>, advance: Advance) -> Runtime {
        debug!("loaded image of {} words, {:?} advance", image.len(), advance);
        let state = if image.len() > MEMORY_SIZE {
            let message = format!("{} WORDS EXCEEDS MEMORY", image.len());
            let error = error!(MalformedImage, 0; &message);
            warn!("{}", error);
            State::Faulted(error)
        } else {
            State::Running
        };
        Runtime {
            memory: Memory::new(image),
            registers: Registers::new(),
            stack: Stack::new("POP OR RET ON EMPTY STACK"),
            input: InputQueue::new(),
            input_closed: false,
            advance,
            pc: 0,
            cycles: 0,
            state,
        }
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn register(&self, idx: usize) -> Word {
        self.registers.get(idx)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, State::Running)
    }

    /// Queue one line of input followed by `'\n'`.
    pub fn enter(&mut self, line: &str) {
        self.input.enter(line);
        debug!("queued input line, {} chars pending", self.input.len());
    }

    /// The input source is exhausted. A pending or later `IN` faults.
    pub fn end_of_input(&mut self) {
        debug!("input closed");
        self.input_closed = true;
    }

    /// Execute up to `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match &self.state {
            State::Halted => return Event::Halted,
            State::Faulted(error) => return Event::Fault(error.clone()),
            State::Running => {}
        }
        for _ in 0..cycles {
            let pc = self.pc;
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => return Event::Fault(self.fault(error.at(pc))),
            }
        }
        Event::Running
    }

    /// Run to completion, pulling input from `source` and writing
    /// output to `sink`. `Ok` means a normal halt.
    pub fn run<S, W>(&mut self, source: &mut S, sink: &mut W) -> Result<()>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            match self.execute(RUN_SLICE) {
                Event::Running => {}
                Event::Print(ch) => {
                    write!(sink, "{}", ch)
                        .and_then(|_| sink.flush())
                        .map_err(|error| self.fault(error.into()))?;
                }
                Event::Input => match source
                    .read_line()
                    .map_err(|error| self.fault(error.into()))?
                {
                    Some(line) => self.enter(&line),
                    None => self.end_of_input(),
                },
                Event::Halted => return Ok(()),
                Event::Fault(error) => return Err(error),
            }
        }
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let pc = self.pc;
        let opcode = Opcode::try_from(self.memory.read(pc)?)
            .map_err(|word| error!(InvalidOpcode; &format!("WORD {}", word)))?;
        let arity = opcode.arity();
        let mut args: [Word; 3] = [0; 3];
        for (i, arg) in args.iter_mut().enumerate().take(arity) {
            *arg = self.memory.read(pc + 1 + i)?;
        }
        trace!("{:05} {} {:?}", pc, opcode, &args[..arity]);

        let flow = self.dispatch(opcode, pc, &args)?;
        if let Flow::Wait = flow {
            return Ok(Some(Event::Input));
        }
        self.cycles += 1;
        let print = match flow {
            Flow::Wait | Flow::Next => None,
            Flow::Print(ch) => Some(Event::Print(ch)),
            Flow::Halt => return Ok(Some(self.halt())),
            Flow::Jump(addr) => {
                self.pc = addr as Address;
                return Ok(None);
            }
        };
        match self.next_address(pc, opcode) {
            Some(next) => {
                self.pc = next;
                Ok(print)
            }
            None => {
                // The last character still has to reach the host.
                let halted = self.halt();
                Ok(Some(print.unwrap_or(halted)))
            }
        }
    }

    /// Make `error` the terminal state and hand it back.
    fn fault(&mut self, error: Error) -> Error {
        let error = error.at(self.pc);
        debug!("fault after {} cycles: {}", self.cycles, self.registers);
        self.state = State::Faulted(error.clone());
        error
    }

    fn halt(&mut self) -> Event {
        info!("halted at {} after {} cycles", self.pc, self.cycles);
        self.state = State::Halted;
        Event::Halted
    }

    fn next_address(&self, pc: Address, opcode: Opcode) -> Option<Address> {
        let from = pc + 1 + opcode.arity();
        match self.advance {
            Advance::Flat => Some(from).filter(|addr| *addr < MEMORY_SIZE),
            Advance::Scan => self
                .memory
                .words()
                .get(from..)?
                .iter()
                .position(|word| Opcode::is_opcode(*word))
                .map(|offset| from + offset),
        }
    }

    fn val(&self, raw: Word) -> Result<Word> {
        Operand::value(raw, &self.registers)
    }

    fn set(&mut self, raw: Word, val: i64) {
        self.registers.set(Operand::target(raw), normalize(val));
    }

    fn dispatch(&mut self, opcode: Opcode, pc: Address, args: &[Word; 3]) -> Result<Flow> {
        use Opcode::*;
        let [a, b, c] = *args;
        match opcode {
            Halt => return Ok(Flow::Halt),
            Noop => {}
            Set => {
                let val = self.val(b)?;
                self.set(a, val.into());
            }
            Push => {
                let val = self.val(a)?;
                self.stack.push(val);
            }
            Pop => {
                let val = self.stack.pop()?;
                self.set(a, val.into());
            }
            Eq => {
                let eq = self.val(b)? == self.val(c)?;
                self.set(a, eq as i64);
            }
            Gt => {
                let gt = self.val(b)? > self.val(c)?;
                self.set(a, gt as i64);
            }
            Jmp => return Ok(Flow::Jump(self.val(a)?)),
            Jt => {
                if self.val(a)? != 0 {
                    return Ok(Flow::Jump(self.val(b)?));
                }
            }
            Jf => {
                if self.val(a)? == 0 {
                    return Ok(Flow::Jump(self.val(b)?));
                }
            }
            Add => {
                let sum = i64::from(self.val(b)?) + i64::from(self.val(c)?);
                self.set(a, sum);
            }
            Mult => {
                let product = i64::from(self.val(b)?) * i64::from(self.val(c)?);
                self.set(a, product);
            }
            Mod => {
                let (lhs, rhs) = (self.val(b)?, self.val(c)?);
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                self.set(a, (lhs % rhs).into());
            }
            And => {
                let val = self.val(b)? & self.val(c)?;
                self.set(a, val.into());
            }
            Or => {
                let val = self.val(b)? | self.val(c)?;
                self.set(a, val.into());
            }
            Not => {
                let val = self.val(b)?;
                self.set(a, !i64::from(val));
            }
            Rmem => {
                let addr = self.val(b)?;
                let val = self.memory.read(addr as Address)?;
                self.set(a, val.into());
            }
            Wmem => {
                let (addr, val) = (self.val(a)?, self.val(b)?);
                self.memory.write(addr as Address, val)?;
            }
            Call => {
                let target = self.val(a)?;
                let ret = self
                    .next_address(pc, opcode)
                    .unwrap_or(pc + 1 + opcode.arity());
                self.stack.push(ret as Word);
                return Ok(Flow::Jump(target));
            }
            Ret => return Ok(Flow::Jump(self.stack.pop()?)),
            Out => {
                let val = self.val(a)?;
                let ch = std::char::from_u32(val.into())
                    .unwrap_or(std::char::REPLACEMENT_CHARACTER);
                return Ok(Flow::Print(ch));
            }
            In => {
                let target = Operand::decode(a)?;
                let ch = match self.input.next_char() {
                    Some(ch) => ch,
                    None if self.input_closed => {
                        return Err(error!(InputExhausted; "END OF INPUT STREAM"))
                    }
                    None => return Ok(Flow::Wait),
                };
                let val = normalize(i64::from(u32::from(ch)));
                match target {
                    Operand::Register(idx) => self.registers.set(idx, val),
                    Operand::Literal(addr) => self.memory.write(addr as Address, val)?,
                }
            }
        }
        Ok(Flow::Next)
    }
}

/// Reduce any intermediate result into 0..32767.
pub(crate) fn normalize(val: i64) -> Word {
    val.rem_euclid(i64::from(WORD_MODULUS)) as Word
}
