use super::printf::{shortest, Format};
use super::{Accumulator, Address, Memory, Register};
use crate::error;
use crate::lang::Error;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// A `Get` may fetch a `Get`, which may fetch another. Past this depth
/// the chain is treated as a cycle.
const MAX_NESTING: usize = 64;

/// ## Machine instruction set
///
/// Every instruction lives in one memory slot. Executing it performs exactly
/// one effect on the accumulator and/or the memory and yields a value.
/// Only the value of `Data` means anything; `Get` relies on it to read
/// memory back into a register.
///
/// In trace output `*n` is register `n` and `@n` is memory address `n`.

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Holds a literal. Executing it has no effect and yields the literal.
    Data(f64),
    /// Load literal into register.
    Load(f64, Register),
    /// Overwrite the slot at Address with `Data` holding the register value.
    Put(Register, Address),
    /// Execute the instruction at Address and store its value in register.
    /// Error if the slot is empty.
    Get(Address, Register),
    Add(Register, Register, Register),
    Subtract(Register, Register, Register),
    Multiply(Register, Register, Register),
    /// No division by zero check; the register gets inf or NaN.
    Divide(Register, Register, Register),
    /// Unconditional branch to Address.
    Goto(Address),
    /// Branch to Address if register is zero.
    ZGoto(Register, Address),
    /// Branch to Address if register is not zero.
    NZGoto(Register, Address),
    /// Render register through the format and print it as one line.
    Print(Register, Format),
}

impl Instruction {
    /// Executes the instruction. Lines produced by `Print` are pushed
    /// on to `output`.
    pub fn execute(
        &self,
        acc: &mut Accumulator,
        mem: &mut Memory,
        output: &mut Vec<String>,
    ) -> Result<f64> {
        self.execute_nested(acc, mem, output, 0)
    }

    fn execute_nested(
        &self,
        acc: &mut Accumulator,
        mem: &mut Memory,
        output: &mut Vec<String>,
        depth: usize,
    ) -> Result<f64> {
        use Instruction::*;
        match self {
            Data(val) => Ok(*val),
            Load(val, dest) => {
                acc.set(*dest, *val)?;
                Ok(*val)
            }
            Put(src, addr) => {
                let val = acc.get(*src)?;
                mem.put(Data(val), *addr)?;
                trace!(address = *addr, value = val, "memory rewritten");
                Ok(val)
            }
            Get(addr, dest) => {
                let inst = match mem.get(*addr)? {
                    Some(inst) => inst.clone(),
                    None => return Err(error!(CantAccessAddress; format!("@{}", addr))),
                };
                if depth >= MAX_NESTING {
                    return Err(error!(NestingTooDeep; format!("@{}", addr)));
                }
                let val = inst.execute_nested(acc, mem, output, depth + 1)?;
                acc.set(*dest, val)?;
                Ok(val)
            }
            Add(lhs, rhs, dest) => binary(acc, *lhs, *rhs, *dest, |l, r| l + r),
            Subtract(lhs, rhs, dest) => binary(acc, *lhs, *rhs, *dest, |l, r| l - r),
            Multiply(lhs, rhs, dest) => binary(acc, *lhs, *rhs, *dest, |l, r| l * r),
            Divide(lhs, rhs, dest) => binary(acc, *lhs, *rhs, *dest, |l, r| l / r),
            Goto(addr) => {
                mem.set_position(*addr)?;
                Ok(1.0)
            }
            ZGoto(reg, addr) => {
                if acc.get(*reg)? == 0.0 {
                    mem.set_position(*addr)?;
                }
                Ok(1.0)
            }
            NZGoto(reg, addr) => {
                if acc.get(*reg)? != 0.0 {
                    mem.set_position(*addr)?;
                }
                Ok(1.0)
            }
            Print(reg, format) => {
                let val = acc.get(*reg)?;
                output.push(format.render(val));
                Ok(val)
            }
        }
    }
}

fn binary<F>(
    acc: &mut Accumulator,
    lhs: Register,
    rhs: Register,
    dest: Register,
    op: F,
) -> Result<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let (l, r) = acc.get_2(lhs, rhs)?;
    let val = op(l, r);
    acc.set(dest, val)?;
    Ok(val)
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Data(v) => write!(f, "Data {}", shortest(*v)),
            Load(v, d) => write!(f, "Load {} to *{}", shortest(*v), d),
            Put(r, a) => write!(f, "Put *{} to @{}", r, a),
            Get(a, d) => write!(f, "Get @{} to *{}", a, d),
            Add(l, r, d) => write!(f, "Add *{} *{} to *{}", l, r, d),
            Subtract(l, r, d) => write!(f, "Subtract *{} *{} to *{}", l, r, d),
            Multiply(l, r, d) => write!(f, "Multiply *{} *{} to *{}", l, r, d),
            Divide(l, r, d) => write!(f, "Divide *{} *{} to *{}", l, r, d),
            Goto(a) => write!(f, "Goto @{}", a),
            ZGoto(r, a) => write!(f, "ZGoto *{} to @{}", r, a),
            NZGoto(r, a) => write!(f, "NZGoto *{} to @{}", r, a),
            Print(r, s) => write!(f, "Print *{} like \"{}\"", r, s),
        }
    }
}
