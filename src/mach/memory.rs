use super::{Address, Instruction};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Instruction memory
///
/// A fixed number of slots, each empty or owning one instruction,
/// plus the cursor the CPU fetches from. The cursor is always in
/// `0..=capacity`; sitting on `capacity` means the program ran off the end.
///
/// Storing into a slot drops whatever instruction was there before.

#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    slots: Vec<Option<Instruction>>,
    position: Address,
}

impl Memory {
    pub fn new(capacity: usize) -> Memory {
        Memory {
            slots: vec![None; capacity],
            position: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn check(&self, addr: Address) -> Result<()> {
        if addr >= self.slots.len() {
            Err(error!(AddressOutOfBounds, @addr))
        } else {
            Ok(())
        }
    }

    /// Sequential fetch. Returns the instruction under the cursor and
    /// moves past it. `None` once the cursor reaches the end, or when the
    /// slot under it is empty.
    pub fn fetch(&mut self) -> Option<&Instruction> {
        if self.position >= self.slots.len() {
            return None;
        }
        self.position += 1;
        self.slots[self.position - 1].as_ref()
    }

    pub fn get(&self, addr: Address) -> Result<Option<&Instruction>> {
        self.check(addr)?;
        Ok(self.slots[addr].as_ref())
    }

    pub fn put(&mut self, inst: Instruction, addr: Address) -> Result<()> {
        self.check(addr)?;
        self.slots[addr] = Some(inst);
        Ok(())
    }

    /// Stores at the cursor and advances it. Only the loader does this.
    pub fn append(&mut self, inst: Instruction) -> Result<()> {
        if self.position >= self.slots.len() {
            return Err(error!(OutOfSpace, @self.position));
        }
        self.slots[self.position] = Some(inst);
        self.position += 1;
        Ok(())
    }

    pub fn position(&self) -> Address {
        self.position
    }

    pub fn set_position(&mut self, addr: Address) -> Result<()> {
        self.check(addr)?;
        self.position = addr;
        Ok(())
    }
}
