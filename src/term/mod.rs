extern crate ansi_term;
extern crate ctrlc;
mod linefeed;

use self::linefeed::Console;
use ansi_term::Style;
use clap::{ArgAction, Parser};
use std::io::{BufReader, ErrorKind, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use synacor::log::{self, Level};
use synacor::mach::{
    load_image, Address, Advance, BufReadSource, Error, Event, LineSource, Runtime, ScriptSource,
};
use synacor::{debug, fatal, info, warn};

#[derive(Parser, Debug)]
#[command(name = "synacor")]
#[command(about = "Runs a 15-bit Synacor bytecode program image", long_about = None)]
struct Args {
    /// Program image of little-endian 16-bit words
    image: PathBuf,

    /// Replay lines from this file as input before reading the terminal
    #[arg(long)]
    script: Option<PathBuf>,

    /// Continue directly after operands instead of scanning for the next opcode
    #[arg(long, action = ArgAction::SetTrue)]
    flat_advance: bool,

    /// Instructions executed between interrupt checks
    #[arg(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    cycles: u64,

    /// More logging: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Omit timestamps from log lines
    #[arg(long, action = ArgAction::SetTrue)]
    no_timestamps: bool,
}

enum Outcome {
    Halted,
    Faulted(Error),
    Interrupted(Address),
}

pub fn main() {
    let args = Args::parse();
    log::set_level(Level::from_verbosity(args.verbose));
    log::SHOW_TIMESTAMP.store(!args.no_timestamps, Ordering::Relaxed);

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C handler not installed: {}", error);
    }

    let status = match main_loop(&args, interrupted) {
        Ok(Outcome::Halted) => 0,
        Ok(Outcome::Interrupted(pc)) => {
            warn!("interrupted at {}", pc);
            130
        }
        Ok(Outcome::Faulted(error)) => {
            eprintln!("\n{}", Style::new().bold().paint(error.to_string()));
            fatal!("run aborted: {}", error);
            1
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    };
    std::process::exit(status);
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> Result<Outcome, Error> {
    let image = load_image(&std::fs::read(&args.image)?)?;
    info!("{}: {} words", args.image.display(), image.len());
    let advance = if args.flat_advance {
        Advance::Flat
    } else {
        Advance::Scan
    };
    let script: Vec<String> = match &args.script {
        Some(path) => std::fs::read_to_string(path)?
            .lines()
            .map(String::from)
            .collect(),
        None => vec![],
    };
    let mut source: ScriptSource<Box<dyn LineSource>> = ScriptSource::new(script, console());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut runtime = Runtime::with_advance(image, advance);

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            return Ok(Outcome::Interrupted(runtime.pc()));
        }
        match runtime.execute(args.cycles as usize) {
            Event::Running => {}
            Event::Print(ch) => {
                write!(out, "{}", ch)?;
                out.flush()?;
            }
            Event::Input => {
                let scripted = source.remaining() > 0;
                match source.read_line() {
                    Ok(Some(line)) => {
                        if scripted {
                            writeln!(out, "{}", line)?;
                        }
                        runtime.enter(&line);
                    }
                    Ok(None) => runtime.end_of_input(),
                    Err(error) if error.kind() == ErrorKind::Interrupted => {
                        return Ok(Outcome::Interrupted(runtime.pc()));
                    }
                    Err(error) => return Err(error.into()),
                }
            }
            Event::Halted => return Ok(Outcome::Halted),
            Event::Fault(error) => return Ok(Outcome::Faulted(error)),
        }
    }
}

fn console() -> Box<dyn LineSource> {
    match Console::new() {
        Ok(console) => Box::new(console),
        Err(error) => {
            debug!("no line editor ({}), reading stdin directly", error);
            Box::new(BufReadSource::new(BufReader::new(std::io::stdin())))
        }
    }
}
