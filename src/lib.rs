pub use chip8::{Chip8, TickReport};
pub use constants::{CYCLES_PER_TICK, TIMER_HZ};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use pacer::Pacer;
pub use random::RandomSource;
pub use state::{FrameBuffer, Keypad};

mod chip8;
pub mod constants;
mod error;
mod instruction;
pub mod memory;
mod opcode;
mod operations;
mod pacer;
pub mod random;
pub mod state;
