use super::Register;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Register file
///
/// Fixed number of floating point registers, all zero on reset.
/// Instructions address registers by index; an index past the end
/// is an execution error rather than a panic.

#[derive(Clone, PartialEq)]
pub struct Accumulator {
    registers: Vec<f64>,
}

impl std::fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.registers)
    }
}

impl Accumulator {
    pub fn new(size: usize) -> Accumulator {
        Accumulator {
            registers: vec![0.0; size],
        }
    }
    pub fn len(&self) -> usize {
        self.registers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
    pub fn clear(&mut self) {
        for r in self.registers.iter_mut() {
            *r = 0.0;
        }
    }
    pub fn get(&self, reg: Register) -> Result<f64> {
        match self.registers.get(reg) {
            Some(v) => Ok(*v),
            None => Err(error!(RegisterOutOfBounds; format!("*{}", reg))),
        }
    }
    pub fn set(&mut self, reg: Register, val: f64) -> Result<()> {
        match self.registers.get_mut(reg) {
            Some(r) => {
                *r = val;
                Ok(())
            }
            None => Err(error!(RegisterOutOfBounds; format!("*{}", reg))),
        }
    }
    pub fn get_2(&self, lhs: Register, rhs: Register) -> Result<(f64, f64)> {
        Ok((self.get(lhs)?, self.get(rhs)?))
    }
}
