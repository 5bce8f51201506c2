extern crate linefeed;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{Error, ErrorKind};
use synacor::mach::LineSource;

/// Line editing terminal input with history.
pub struct Console {
    interface: Interface<DefaultTerminal>,
}

impl Console {
    pub fn new() -> std::io::Result<Console> {
        let interface = Interface::new("synacor")?;
        interface.set_prompt("")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console { interface })
    }
}

impl LineSource for Console {
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        match self.interface.read_line()? {
            ReadResult::Input(line) => {
                self.interface.add_history_unique(line.clone());
                Ok(Some(line))
            }
            ReadResult::Signal(Signal::Interrupt) => {
                Err(Error::new(ErrorKind::Interrupted, "interrupted"))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}
