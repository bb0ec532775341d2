use std::io;

use thiserror::Error;

/// Everything that can go wrong while loading or running a program.
///
/// Errors are scoped to a single `load` or `step`; none of them leave the
/// machine in a state that prevents further execution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("call stack overflow: subroutine nesting exceeds 16 levels")]
    StackOverflow,

    #[error("call stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBoundsAccess { address: usize },

    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
