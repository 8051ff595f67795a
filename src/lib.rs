//! # sevcsik
//!
//! A tiny assembly-like language and the register-and-memory machine
//! that runs it.
//!
//! A program is a list of instructions placed in memory, starting at the
//! address named by `org`. The CPU fetches from that address onwards and
//! stops when it runs out of instructions. Nothing stops a program from
//! writing over its own code: `put` turns any slot into plain data, and
//! `get` executes whatever a slot holds to read a value out of it.
//!
//! ```text
//! org       0
//! load      0  0        // counter
//! load      5  1        // limit
//! load      1  2        // step
//! print     0  "Counter: %lf"
//! add       0  2  0
//! subtract  0  1  3
//! nzgoto    3  3
//! print     0  "Done"
//! end
//! ```
//!
//! Run it with `sevcsikc counter.s`, or pipe it into `sevcsikc`.
//! Every executed instruction is traced as `<address>: <instruction>`,
//! with `*n` naming register `n` and `@n` naming memory address `n`.

pub mod lang;
pub mod mach;
pub mod term;
