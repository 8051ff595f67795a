/*!
# Rust Language Module

This Rust module reads sevcsik source text and turns it into a
[`Program`](crate::mach::Program) ready to be loaded into memory.

*/

pub type LineNumber = usize;

#[macro_use]
mod error;
mod lex;
mod parse;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use parse::parse;

#[cfg(test)]
mod tests;
