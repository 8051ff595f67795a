use super::*;
use crate::mach::{Format, Instruction};
