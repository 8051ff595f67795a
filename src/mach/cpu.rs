use super::{Accumulator, Address, Instruction, Memory, Register};
use crate::lang::{Error, ErrorKind};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// ## Events reported by the CPU
///
/// The host loops on `Cpu::execute` and renders each event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// An instruction was fetched from Address and is about to execute.
    Trace(Address, Instruction),
    /// One line of program output.
    Print(String),
    /// The run was aborted.
    Error(Error),
    /// The program ran out of instructions.
    Finished,
    /// Cycle budget used up, call `execute` again.
    Running,
    /// Nothing is running.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// ## Fetch-execute engine
///
/// Owns the memory and the register file. Every branch decision belongs to
/// the instructions themselves; the loop only fetches, reports and executes
/// until the memory yields nothing or an instruction fails.

pub struct Cpu {
    memory: Memory,
    accumulator: Accumulator,
    state: State,
    trace: bool,
    events: VecDeque<Event>,
}

impl Cpu {
    pub fn new(memory: Memory, registers: usize) -> Cpu {
        Cpu {
            memory,
            accumulator: Accumulator::new(registers),
            state: State::Halted,
            trace: true,
            events: VecDeque::new(),
        }
    }

    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn register(&self, reg: Register) -> Option<f64> {
        self.accumulator.get(reg).ok()
    }

    /// Starts a run at the entry address with fresh registers.
    /// An invalid entry is reported and nothing executes.
    pub fn run(&mut self, entry: Address) {
        self.events.clear();
        self.accumulator.clear();
        match self.memory.set_position(entry) {
            Ok(()) => {
                debug!(entry, "run started");
                self.state = State::Running;
            }
            Err(error) => self.abort(error),
        }
    }

    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            info!(position = self.memory.position(), "run interrupted");
            self.state = State::Halted;
        }
    }

    /// Executes up to `cycles` instructions, stopping early at the first
    /// thing worth reporting. At least one instruction runs per call.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles.max(1) {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            if self.state == State::Halted {
                return Event::Stopped;
            }
            self.step();
        }
        match self.events.pop_front() {
            Some(event) => event,
            None => match self.state {
                State::Running => Event::Running,
                State::Halted => Event::Stopped,
            },
        }
    }

    /// One fetch-execute cycle. Events are queued for `execute`.
    pub fn step(&mut self) {
        if self.state == State::Halted {
            return;
        }
        let address = self.memory.position();
        let inst = match self.memory.fetch().cloned() {
            Some(inst) => inst,
            None => {
                debug!(position = self.memory.position(), "no more instructions");
                self.state = State::Halted;
                self.events.push_back(Event::Finished);
                return;
            }
        };
        if self.trace {
            self.events.push_back(Event::Trace(address, inst.clone()));
        }
        let mut output = vec![];
        let result = inst.execute(&mut self.accumulator, &mut self.memory, &mut output);
        self.events.extend(output.into_iter().map(Event::Print));
        if let Err(error) = result {
            let error = match (error.kind(), error.address()) {
                (ErrorKind::Execution, None) => error.at_address(address),
                _ => error,
            };
            self.abort(error);
        }
    }

    fn abort(&mut self, error: Error) {
        warn!("{}", error);
        self.state = State::Halted;
        self.events.push_back(Event::Error(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_invalid_entry_executes_nothing() {
        let mut mem = Memory::new(2);
        mem.put(Instruction::Load(1.0, 0), 0).unwrap();
        let mut cpu = Cpu::new(mem, 1);
        cpu.run(2);
        assert_eq!(cpu.state(), State::Halted);
        match cpu.execute(10) {
            Event::Error(e) => assert_eq!(e.code(), ErrorCode::AddressOutOfBounds),
            other => panic!("{:?}", other),
        }
        assert_eq!(cpu.execute(10), Event::Stopped);
        assert_eq!(cpu.register(0), Some(0.0));
    }

    #[test]
    fn test_cycle_budget() {
        let mut mem = Memory::new(1);
        mem.put(Instruction::Goto(0), 0).unwrap();
        let mut cpu = Cpu::new(mem, 1);
        cpu.set_trace(false);
        cpu.run(0);
        assert_eq!(cpu.execute(100), Event::Running);
        cpu.interrupt();
        assert_eq!(cpu.execute(100), Event::Stopped);
    }

    #[test]
    fn test_zero_cycles_still_progresses() {
        let mut mem = Memory::new(2);
        mem.put(Instruction::Load(1.0, 0), 0).unwrap();
        let mut cpu = Cpu::new(mem, 1);
        cpu.set_trace(false);
        cpu.run(0);
        assert_eq!(cpu.execute(0), Event::Running);
        assert_eq!(cpu.memory().position(), 1);
        assert_eq!(cpu.register(0), Some(1.0));
        assert_eq!(cpu.execute(0), Event::Finished);
        assert_eq!(cpu.execute(0), Event::Stopped);
    }

    #[test]
    fn test_execution_error_reports_instruction_address() {
        let mut mem = Memory::new(4);
        mem.put(Instruction::Get(3, 0), 1).unwrap();
        let mut cpu = Cpu::new(mem, 1);
        cpu.set_trace(false);
        cpu.run(1);
        match cpu.execute(10) {
            Event::Error(e) => {
                assert_eq!(e.address(), Some(1));
                assert_eq!(e.to_string(), "Instruction 1: Can't access address (@3)");
            }
            other => panic!("{:?}", other),
        }
    }
}
