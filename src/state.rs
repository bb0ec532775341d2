use crate::constants::{DISPLAY_SIZE, DISPLAY_WIDTH, KEY_COUNT, STACK_DEPTH};
use crate::memory::Memory;

/// The FrameBuffer is stored row-major and indexed as `x + DISPLAY_WIDTH * y`
pub type FrameBuffer = [u8; DISPLAY_SIZE];

/// Pressed status of keys 0..F
pub type Keypad = [bool; KEY_COUNT];

/// Whether the CPU is fetching instructions or parked on `Fx0A`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    /// Waiting for any key; its value will be written to the contained register
    WaitingForKey(u8),
}

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register, of which the low 12 bits address memory
///
/// Counter
/// - (pc) a 16-bit program counter, advanced two bytes at a time
///
/// Pointer
/// - (sp) the number of return addresses on the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - both are decremented at 60Hz by the driver, never by instructions
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
/// - 64x32 frame buffer of 1-bit pixels
///
/// ## Input
/// - Emulation halts in `Mode::WaitingForKey` until some key is pressed
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub mode: Mode,
}

impl State {
    /// Everything zeroed apart from the font set; the program counter starts at
    /// 0x000 until a ROM is loaded.
    pub fn new() -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: 0,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory: Memory::new(),
            frame_buffer: [0; DISPLAY_SIZE],
            draw_flag: false,
            mode: Mode::Running,
        }
    }

    /// The value of the pixel at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.frame_buffer[x + DISPLAY_WIDTH * y]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
