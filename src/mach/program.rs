use super::{Address, Instruction, Memory};
use crate::lang::Error;
use tracing::debug;

/// ## Loaded program
///
/// Instructions in source order and the `org` address they start at.
/// Instruction `i` belongs at address `origin + i`.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    origin: Address,
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(origin: Address) -> Program {
        Program {
            origin,
            instructions: vec![],
        }
    }
    pub fn origin(&self) -> Address {
        self.origin
    }
    pub fn push(&mut self, inst: Instruction) {
        self.instructions.push(inst)
    }
    pub fn len(&self) -> usize {
        self.instructions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
    pub fn placements(&self) -> impl Iterator<Item = (Address, &Instruction)> + '_ {
        self.instructions
            .iter()
            .enumerate()
            .map(move |(i, inst)| (self.origin + i, inst))
    }

    /// Copies the program into memory and returns the entry address.
    pub fn load(&self, memory: &mut Memory) -> Result<Address, Error> {
        memory.set_position(self.origin)?;
        for inst in &self.instructions {
            memory.append(inst.clone())?;
        }
        memory.set_position(self.origin)?;
        debug!(
            origin = self.origin,
            instructions = self.instructions.len(),
            "program loaded"
        );
        Ok(self.origin)
    }
}
