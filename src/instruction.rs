use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::operations::*;
use crate::random::RandomSource;
use crate::state::{Keypad, State};

/// A decoded instruction with its operands.
///
/// Register operands are indices into V0..VF, addresses are 12 bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jp(u16),
    /// 2nnn
    Call(u16),
    /// 3xkk
    SeByte(usize, u8),
    /// 4xkk
    SneByte(usize, u8),
    /// 5xy0
    SeReg(usize, usize),
    /// 6xkk
    LdByte(usize, u8),
    /// 7xkk
    AddByte(usize, u8),
    /// 8xy0
    LdReg(usize, usize),
    /// 8xy1
    Or(usize, usize),
    /// 8xy2
    And(usize, usize),
    /// 8xy3
    Xor(usize, usize),
    /// 8xy4
    AddReg(usize, usize),
    /// 8xy5
    Sub(usize, usize),
    /// 8xy6; Vy is ignored
    Shr(usize),
    /// 8xy7
    Subn(usize, usize),
    /// 8xyE; Vy is ignored
    Shl(usize),
    /// 9xy0
    SneReg(usize, usize),
    /// Annn
    LdI(u16),
    /// Bnnn, always offset by V0
    JpV0(u16),
    /// Cxkk
    Rnd(usize, u8),
    /// Dxyn
    Drw(usize, usize, u8),
    /// Ex9E
    Skp(usize),
    /// ExA1
    Sknp(usize),
    /// Fx07
    LdRegDt(usize),
    /// Fx0A
    LdKey(usize),
    /// Fx15
    LdDtReg(usize),
    /// Fx18
    LdStReg(usize),
    /// Fx1E
    AddI(usize),
    /// Fx29
    LdFont(usize),
    /// Fx33
    LdBcd(usize),
    /// Fx55
    Store(usize),
    /// Fx65
    Restore(usize),
}

impl Instruction {
    /// Selects the Instruction for a given opcode
    pub fn decode(op: u16) -> Result<Self> {
        let (x, y, n, kk, nnn) = (op.x(), op.y(), op.n(), op.kk(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Cls,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Ret,
            (0x1, ..) => Instruction::Jp(nnn),
            (0x2, ..) => Instruction::Call(nnn),
            (0x3, ..) => Instruction::SeByte(x, kk),
            (0x4, ..) => Instruction::SneByte(x, kk),
            (0x5, .., 0x0) => Instruction::SeReg(x, y),
            (0x6, ..) => Instruction::LdByte(x, kk),
            (0x7, ..) => Instruction::AddByte(x, kk),
            (0x8, .., 0x0) => Instruction::LdReg(x, y),
            (0x8, .., 0x1) => Instruction::Or(x, y),
            (0x8, .., 0x2) => Instruction::And(x, y),
            (0x8, .., 0x3) => Instruction::Xor(x, y),
            (0x8, .., 0x4) => Instruction::AddReg(x, y),
            (0x8, .., 0x5) => Instruction::Sub(x, y),
            (0x8, .., 0x6) => Instruction::Shr(x),
            (0x8, .., 0x7) => Instruction::Subn(x, y),
            (0x8, .., 0xE) => Instruction::Shl(x),
            (0x9, .., 0x0) => Instruction::SneReg(x, y),
            (0xA, ..) => Instruction::LdI(nnn),
            (0xB, ..) => Instruction::JpV0(nnn),
            (0xC, ..) => Instruction::Rnd(x, kk),
            (0xD, ..) => Instruction::Drw(x, y, n),
            (0xE, _, 0x9, 0xE) => Instruction::Skp(x),
            (0xE, _, 0xA, 0x1) => Instruction::Sknp(x),
            (0xF, _, 0x0, 0x7) => Instruction::LdRegDt(x),
            (0xF, _, 0x0, 0xA) => Instruction::LdKey(x),
            (0xF, _, 0x1, 0x5) => Instruction::LdDtReg(x),
            (0xF, _, 0x1, 0x8) => Instruction::LdStReg(x),
            (0xF, _, 0x1, 0xE) => Instruction::AddI(x),
            (0xF, _, 0x2, 0x9) => Instruction::LdFont(x),
            (0xF, _, 0x3, 0x3) => Instruction::LdBcd(x),
            (0xF, _, 0x5, 0x5) => Instruction::Store(x),
            (0xF, _, 0x6, 0x5) => Instruction::Restore(x),
            _ => return Err(Error::UnknownOpcode { opcode: op }),
        };
        Ok(instruction)
    }

    /// Applies the instruction to a state whose pc has already been advanced past it.
    ///
    /// # Arguments
    /// * `state` the state after fetching this instruction
    /// * `pressed_keys` the keypad as last written by the input collaborator
    /// * `rng` the source of bytes for `Cxkk`
    pub fn execute(
        self,
        state: &State,
        pressed_keys: &Keypad,
        rng: &mut dyn RandomSource,
    ) -> Result<State> {
        let next = match self {
            Instruction::Cls => clr(state),
            Instruction::Ret => rts(state)?,
            Instruction::Jp(addr) => jump(state, addr),
            Instruction::Call(addr) => call(state, addr)?,
            Instruction::SeByte(x, kk) => ske(state, x, kk),
            Instruction::SneByte(x, kk) => skne(state, x, kk),
            Instruction::SeReg(x, y) => skre(state, x, y),
            Instruction::LdByte(x, kk) => load(state, x, kk),
            Instruction::AddByte(x, kk) => add(state, x, kk),
            Instruction::LdReg(x, y) => mv(state, x, y),
            Instruction::Or(x, y) => or(state, x, y),
            Instruction::And(x, y) => and(state, x, y),
            Instruction::Xor(x, y) => xor(state, x, y),
            Instruction::AddReg(x, y) => addr(state, x, y),
            Instruction::Sub(x, y) => sub(state, x, y),
            Instruction::Shr(x) => shr(state, x),
            Instruction::Subn(x, y) => subn(state, x, y),
            Instruction::Shl(x) => shl(state, x),
            Instruction::SneReg(x, y) => skrne(state, x, y),
            Instruction::LdI(addr) => loadi(state, addr),
            Instruction::JpV0(addr) => jumpi(state, addr),
            Instruction::Rnd(x, kk) => rand(state, x, kk, rng),
            Instruction::Drw(x, y, n) => draw(state, x, y, n)?,
            Instruction::Skp(x) => skpr(state, x, pressed_keys),
            Instruction::Sknp(x) => skup(state, x, pressed_keys),
            Instruction::LdRegDt(x) => moved(state, x),
            Instruction::LdKey(x) => keyd(state, x, pressed_keys),
            Instruction::LdDtReg(x) => loads(state, x),
            Instruction::LdStReg(x) => ld(state, x),
            Instruction::AddI(x) => addi(state, x),
            Instruction::LdFont(x) => ldspr(state, x),
            Instruction::LdBcd(x) => bcd(state, x)?,
            Instruction::Store(x) => stor(state, x)?,
            Instruction::Restore(x) => read(state, x)?,
        };
        Ok(next)
    }
}
