/*!
## Rust Machine Module

This Rust module is the sevcsik virtual machine: a memory of instruction
slots, a register file, and the CPU that runs one against the other.

*/

pub type Address = usize;
pub type Register = usize;

mod accumulator;
mod cpu;
mod instruction;
mod memory;
mod printf;
mod program;

pub use accumulator::Accumulator;
pub use cpu::Cpu;
pub use cpu::Event;
pub use cpu::State;
pub use instruction::Instruction;
pub use memory::Memory;
pub use printf::Format;
pub use program::Program;

#[cfg(test)]
mod tests;
