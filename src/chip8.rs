use std::io::Read;

use log::{debug, trace};

use crate::constants::{FLAG_REGISTER, KEY_COUNT, PROGRAM_START, STACK_DEPTH};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::operations::first_pressed;
use crate::random::{self, RandomSource};
use crate::state::{FrameBuffer, Keypad, Mode, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `pressed_keys` with public interfaces for manipulating them
///  - `rng`, the source of random bytes for `Cxkk`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    pressed_keys: Keypad,
    rng: Box<dyn RandomSource>,
}

/// The outcome of one `run_tick`
#[derive(Debug, Default)]
pub struct TickReport {
    /// Whether the sound timer was running during this tick
    pub sound: bool,
    /// Errors raised by individual steps, in the order they happened
    pub errors: Vec<Error>,
}

impl Chip8 {
    /// A machine whose random bytes are seeded from system entropy
    pub fn new() -> Self {
        Self::with_random_source(random::from_entropy())
    }

    /// A machine whose random bytes are reproducible for a given `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_random_source(random::from_seed(seed))
    }

    pub fn with_random_source(rng: Box<dyn RandomSource>) -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; KEY_COUNT],
            rng,
        }
    }

    /// Copies `rom` to 0x200 and points the pc at it.
    ///
    /// Loading again replaces the previous program and restarts execution from
    /// 0x200 with an empty call stack; registers, timers and the display are
    /// left as they were. A ROM that doesn't fit leaves the machine untouched.
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        self.state.memory.load_program(rom)?;
        self.state.pc = PROGRAM_START;
        self.state.sp = 0;
        self.state.stack = [0; STACK_DEPTH];
        self.state.mode = Mode::Running;
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    /// Load a rom from some reader, e.g. a file
    ///
    /// # Arguments
    /// * `reader` a reader that yields the entire ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load(&rom)
    }

    /// Advances the CPU by a single cycle
    /// - while awaiting a keypress, only polls the keypad
    /// - otherwise fetches, decodes and executes the next opcode
    ///
    /// The pc is moved past the opcode before it is decoded, so a failing
    /// instruction is skipped on the next call.
    pub fn step(&mut self) -> Result<()> {
        if let Mode::WaitingForKey(register) = self.state.mode {
            if let Some(key) = first_pressed(&self.pressed_keys) {
                debug!("key {:X} pressed, resuming with V{:X} = {:X}", key, register, key);
                self.state.v[register as usize] = key;
                self.state.mode = Mode::Running;
            }
            return Ok(());
        }

        let op = self.state.memory.read_word(self.state.pc as usize)?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        self.state.pc += 0x2;

        let instruction = Instruction::decode(op)?;
        self.state = instruction.execute(&self.state, &self.pressed_keys, self.rng.as_mut())?;
        if let Mode::WaitingForKey(register) = self.state.mode {
            debug!("waiting for a key press for V{:X}", register);
        }
        Ok(())
    }

    /// Decrements the delay and sound timers, stopping at 0.
    ///
    /// Returns whether the sound timer was non-zero, i.e. whether a sound
    /// should be playing for this tick.
    pub fn tick_timers(&mut self) -> bool {
        let sound = self.state.sound_timer > 0;
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
        sound
    }

    /// One logical tick: a timer decrement followed by `cycles` steps.
    ///
    /// Steps keep running after an error; what to do about the errors is left
    /// to the caller.
    pub fn run_tick(&mut self, cycles: u32) -> TickReport {
        let sound = self.tick_timers();
        let errors = (0..cycles).filter_map(|_| self.step().err()).collect();
        TickReport { sound, errors }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the key that was pressed; only the low nibble is used
    pub fn key_press(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = true;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the key that was released; only the low nibble is used
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = false;
    }

    /// Replaces the whole keypad
    pub fn set_keys(&mut self, pressed_keys: Keypad) {
        self.pressed_keys = pressed_keys;
    }

    pub fn keys(&self) -> Keypad {
        self.pressed_keys
    }

    /// A snapshot of the FrameBuffer
    pub fn frame(&self) -> FrameBuffer {
        self.state.frame_buffer
    }

    /// Returns the FrameBuffer if it changed since the last call
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.state.pixel(x, y)
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn registers(&self) -> [u8; 16] {
        self.state.v
    }

    pub fn flag(&self) -> u8 {
        self.state.v[FLAG_REGISTER]
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn stack_depth(&self) -> u8 {
        self.state.sp
    }

    pub fn is_waiting_for_key(&self) -> bool {
        matches!(self.state.mode, Mode::WaitingForKey(_))
    }

    /// Reads a byte of memory, e.g. to inspect the results of `Fx33`/`Fx55`
    pub fn peek(&self, address: usize) -> Result<u8> {
        self.state.memory.read(address)
    }

    /// The full machine state
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
