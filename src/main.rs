//! # sevcsikc
//!
//! Runs a sevcsik program, tracing every instruction it executes.
//!

fn main() {
    sevcsik::term::main();
}
