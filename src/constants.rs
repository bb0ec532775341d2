/// Bytes of addressable memory (0x000..=0xFFF)
pub const MEMORY_SIZE: usize = 0x1000;

/// Address that ROMs are loaded to and that the program counter starts from
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Highest valid memory address
pub const MAX_ADDRESS: u16 = (MEMORY_SIZE - 1) as u16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Number of return addresses the call stack can hold
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Register used to report carry, borrow, and collisions
pub const FLAG_REGISTER: usize = 0xF;

/// Rate at which the delay and sound timers are decremented
pub const TIMER_HZ: u32 = 60;

/// Instructions executed per timer tick by the reference driver
pub const CYCLES_PER_TICK: u32 = 11;

/// Bytes per glyph in the font table
pub const FONT_GLYPH_SIZE: u16 = 5;

/// # Font set
/// Glyphs for the hexadecimal digits 0..F, loaded at address 0x000.
///
/// Each glyph is 5 rows of 4 pixels, stored in the high nibble of each byte:
/// ```text
/// "0"  Binary    Hex
/// ###  11110000  0xF0
/// # #  10010000  0x90
/// # #  10010000  0x90
/// # #  10010000  0x90
/// ###  11110000  0xF0
/// ```
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
