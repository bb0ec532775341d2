use crate::constants::{FONT_SET, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte-addressable memory.
///
/// ```text
/// 0x000..0x050  font set (16 glyphs x 5 bytes)
/// 0x050..0x200  reserved for the interpreter, left zeroed
/// 0x200..0x1000 program and data
/// ```
///
/// Every access is bounds-checked; addresses past 0xFFF are an error rather
/// than being wrapped or clamped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the font set in place
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..FONT_SET.len()].copy_from_slice(&FONT_SET);
        Memory { bytes }
    }

    pub fn read(&self, address: usize) -> Result<u8> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Error::OutOfBoundsAccess { address })
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(address)
            .ok_or(Error::OutOfBoundsAccess { address })?;
        *byte = value;
        Ok(())
    }

    /// Reads a big-endian word; both bytes must be in range.
    pub fn read_word(&self, address: usize) -> Result<u16> {
        let high = u16::from(self.read(address)?);
        let low = u16::from(self.read(address + 1)?);
        Ok(high << 8 | low)
    }

    /// Borrows `len` bytes starting at `address`.
    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8]> {
        let end = Self::checked_end(address, len)?;
        Ok(&self.bytes[address..end])
    }

    /// Mutably borrows `len` bytes starting at `address`.
    pub fn slice_mut(&mut self, address: usize, len: usize) -> Result<&mut [u8]> {
        let end = Self::checked_end(address, len)?;
        Ok(&mut self.bytes[address..end])
    }

    /// Replaces the program region with `rom`, zeroing whatever it doesn't cover.
    ///
    /// Memory is untouched if the ROM doesn't fit.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        let program = &mut self.bytes[start..];
        program.iter_mut().for_each(|byte| *byte = 0);
        program[..rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// The exclusive end of `address..address + len`, if it lies within memory
    fn checked_end(address: usize, len: usize) -> Result<usize> {
        let end = address.saturating_add(len);
        if end > MEMORY_SIZE {
            // report the first byte that falls outside of memory
            return Err(Error::OutOfBoundsAccess {
                address: address.max(MEMORY_SIZE),
            });
        }
        Ok(end)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
