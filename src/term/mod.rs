extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{parse, Error};
use crate::mach::{Address, Cpu, Event, Memory};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const CANT_OPEN: i32 = -1;
const LOAD_FAILED: i32 = -2;

#[derive(Parser, Debug)]
#[command(name = "sevcsikc")]
#[command(about = "Run a sevcsik program from a file, or from stdin when no file is given")]
pub struct Options {
    /// Source file
    file: Option<PathBuf>,

    /// Number of memory slots
    #[arg(long, default_value_t = 1024)]
    memory: usize,

    /// Number of registers
    #[arg(long, default_value_t = 32)]
    registers: usize,

    /// Instructions executed between interrupt checks
    #[arg(long, default_value_t = 5000)]
    cycles: usize,

    /// Don't print each instruction as it executes
    #[arg(short, long)]
    quiet: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() {
    let options = Options::parse();
    init_logging(options.verbose);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("can't install Ctrl-C handler: {}", error);
    }
    let code = match main_loop(&options, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    };
    std::process::exit(code);
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,sevcsik=debug",
        _ => "warn,sevcsik=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main_loop(options: &Options, interrupted: Arc<AtomicBool>) -> io::Result<i32> {
    let source = match read_source(options) {
        Ok(source) => source,
        Err(error) => {
            let name = match &options.file {
                Some(path) => path.display().to_string(),
                None => "stdin".to_string(),
            };
            eprintln!("Can't open file {}", name);
            debug!("{}", error);
            return Ok(CANT_OPEN);
        }
    };

    let mut memory = Memory::new(options.memory);
    let entry = match load(&source, &mut memory) {
        Ok(entry) => entry,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(LOAD_FAILED);
        }
    };

    let mut cpu = Cpu::new(memory, options.registers);
    cpu.set_trace(!options.quiet);
    cpu.run(entry);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            cpu.interrupt();
            interrupted.store(false, Ordering::SeqCst);
            writeln!(
                out,
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("CPU: interrupted at {}", cpu.memory().position()))
            )?;
        }
        match cpu.execute(options.cycles) {
            Event::Trace(addr, inst) => writeln!(out, "{}: \t{}", addr, inst)?,
            Event::Print(s) => writeln!(out, "{}", s)?,
            Event::Error(error) => {
                out.flush()?;
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
            }
            Event::Finished => writeln!(out, "CPU: no more instructions, terminating")?,
            Event::Running => out.flush()?,
            Event::Stopped => break,
        }
    }
    writeln!(out, "Good bye, and thanks for all the fish")?;
    out.flush()?;
    Ok(0)
}

fn load(source: &str, memory: &mut Memory) -> Result<Address, Error> {
    let program = parse(source)?;
    program.load(memory)
}

fn read_source(options: &Options) -> io::Result<String> {
    if let Some(path) = &options.file {
        return fs::read_to_string(path);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return read_interactive();
    }
    let mut source = String::new();
    stdin.lock().read_to_string(&mut source)?;
    Ok(source)
}

/// Reads a program typed at the terminal, up to `end` or EOF.
fn read_interactive() -> io::Result<String> {
    let interface = Interface::new("sevcsikc")?;
    interface.set_prompt("> ")?;
    let mut source = String::new();
    loop {
        match interface.read_line()? {
            ReadResult::Input(line) => {
                let done = line.split_whitespace().next() == Some("end");
                if !line.trim().is_empty() {
                    interface.add_history_unique(line.clone());
                }
                source.push_str(&line);
                source.push('\n');
                if done {
                    break;
                }
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(source)
}
