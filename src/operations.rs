//! Instruction semantics.
//!
//! Every operation takes the state as it stands after the fetch (the program
//! counter already points past the opcode) and returns the state after the
//! instruction. Fallible operations return an error instead of a partially
//! updated state.

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_SIZE, DISPLAY_WIDTH, FLAG_REGISTER, FONT_GLYPH_SIZE, MAX_ADDRESS,
    STACK_DEPTH,
};
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::state::{Keypad, Mode, State};

/// The lowest-numbered key that is currently held down
pub fn first_pressed(pressed_keys: &Keypad) -> Option<u8> {
    pressed_keys.iter().position(|&pressed| pressed).map(|key| key as u8)
}

/// Moves the pc past the next instruction if `condition` holds
fn skip_if(state: &State, condition: bool) -> State {
    let pc = if condition { state.pc + 0x2 } else { state.pc };
    State { pc, ..*state }
}

/// Writes `value` to Vx and then `flag` to VF, so VF ends up holding the flag
/// even when it is also the destination.
fn with_flag(state: &State, x: usize, value: u8, flag: bool) -> State {
    let mut v = state.v;
    v[x] = value;
    v[FLAG_REGISTER] = u8::from(flag);
    State { v, ..*state }
}

/// clear
pub fn clr(state: &State) -> State {
    State {
        frame_buffer: [0; DISPLAY_SIZE],
        draw_flag: true,
        ..*state
    }
}

/// PC = STACK.pop()
pub fn rts(state: &State) -> Result<State> {
    let sp = state.sp.checked_sub(0x1).ok_or(Error::StackUnderflow)?;
    Ok(State {
        pc: state.stack[sp as usize],
        sp,
        ..*state
    })
}

/// PC = addr
pub fn jump(state: &State, addr: u16) -> State {
    State { pc: addr, ..*state }
}

/// STACK.push(PC); PC = addr
pub fn call(state: &State, addr: u16) -> Result<State> {
    if state.sp as usize >= STACK_DEPTH {
        return Err(Error::StackOverflow);
    }
    let mut stack = state.stack;
    stack[state.sp as usize] = state.pc;
    Ok(State {
        pc: addr,
        sp: state.sp + 0x1,
        stack,
        ..*state
    })
}

/// if Vx == kk then pc += 2
pub fn ske(state: &State, x: usize, kk: u8) -> State {
    skip_if(state, state.v[x] == kk)
}

/// if Vx != kk then pc += 2
pub fn skne(state: &State, x: usize, kk: u8) -> State {
    skip_if(state, state.v[x] != kk)
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &State, x: usize, y: usize) -> State {
    skip_if(state, state.v[x] == state.v[y])
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &State, x: usize, y: usize) -> State {
    skip_if(state, state.v[x] != state.v[y])
}

/// Vx = kk
pub fn load(state: &State, x: usize, kk: u8) -> State {
    let mut v = state.v;
    v[x] = kk;
    State { v, ..*state }
}

/// Vx += kk
/// Overflow wraps and VF is left alone
pub fn add(state: &State, x: usize, kk: u8) -> State {
    let mut v = state.v;
    v[x] = v[x].wrapping_add(kk);
    State { v, ..*state }
}

/// Vx = Vy
pub fn mv(state: &State, x: usize, y: usize) -> State {
    let mut v = state.v;
    v[x] = v[y];
    State { v, ..*state }
}

/// Vx |= Vy
pub fn or(state: &State, x: usize, y: usize) -> State {
    let mut v = state.v;
    v[x] |= v[y];
    State { v, ..*state }
}

/// Vx &= Vy
pub fn and(state: &State, x: usize, y: usize) -> State {
    let mut v = state.v;
    v[x] &= v[y];
    State { v, ..*state }
}

/// Vx ^= Vy
pub fn xor(state: &State, x: usize, y: usize) -> State {
    let mut v = state.v;
    v[x] ^= v[y];
    State { v, ..*state }
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &State, x: usize, y: usize) -> State {
    let (res, over) = state.v[x].overflowing_add(state.v[y]);
    with_flag(state, x, res, over)
}

/// Vx -= Vy; VF = !borrow
pub fn sub(state: &State, x: usize, y: usize) -> State {
    let (res, under) = state.v[x].overflowing_sub(state.v[y]);
    with_flag(state, x, res, !under)
}

/// Vx >>= 1; VF = old lsb
pub fn shr(state: &State, x: usize) -> State {
    let old = state.v[x];
    with_flag(state, x, old >> 1, old & 0x1 == 0x1)
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(state: &State, x: usize, y: usize) -> State {
    let (res, under) = state.v[y].overflowing_sub(state.v[x]);
    with_flag(state, x, res, !under)
}

/// Vx <<= 1; VF = old msb
pub fn shl(state: &State, x: usize) -> State {
    let old = state.v[x];
    with_flag(state, x, old << 1, old & 0x80 == 0x80)
}

/// I = addr
pub fn loadi(state: &State, addr: u16) -> State {
    State { i: addr, ..*state }
}

/// PC = V0 + addr
pub fn jumpi(state: &State, addr: u16) -> State {
    State {
        pc: u16::from(state.v[0x0]) + addr,
        ..*state
    }
}

/// Vx = rand_byte & kk
pub fn rand(state: &State, x: usize, kk: u8, rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[x] = rng.next_byte() & kk;
    State { v, ..*state }
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position Vx, Vy on the FrameBuffer.
/// The start position and every pixel wrap around the edges of the display.
/// Sets VF if any pixels are erased.
pub fn draw(state: &State, x: usize, y: usize, n: u8) -> Result<State> {
    let sprite = state.memory.slice(state.i as usize, n as usize)?;
    let mut frame_buffer = state.frame_buffer;
    let mut collision = false;

    let origin_x = state.v[x] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[y] as usize % DISPLAY_HEIGHT;

    for (row, byte) in sprite.iter().enumerate() {
        let py = (origin_y + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if (byte >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let px = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = &mut frame_buffer[px + DISPLAY_WIDTH * py];
            collision |= *pixel == 0x1;
            *pixel ^= 0x1;
        }
    }

    let mut v = state.v;
    v[FLAG_REGISTER] = u8::from(collision);
    Ok(State {
        draw_flag: true,
        v,
        frame_buffer,
        ..*state
    })
}

/// if key[Vx] pressed then pc += 2
pub fn skpr(state: &State, x: usize, pressed_keys: &Keypad) -> State {
    skip_if(state, pressed_keys[(state.v[x] & 0xF) as usize])
}

/// if !key[Vx] pressed then pc += 2
pub fn skup(state: &State, x: usize, pressed_keys: &Keypad) -> State {
    skip_if(state, !pressed_keys[(state.v[x] & 0xF) as usize])
}

/// Vx = DT
pub fn moved(state: &State, x: usize) -> State {
    let mut v = state.v;
    v[x] = state.delay_timer;
    State { v, ..*state }
}

/// Vx = first pressed key, or wait for one
pub fn keyd(state: &State, x: usize, pressed_keys: &Keypad) -> State {
    match first_pressed(pressed_keys) {
        Some(key) => load(state, x, key),
        None => State {
            mode: Mode::WaitingForKey(x as u8),
            ..*state
        },
    }
}

/// DT = Vx
pub fn loads(state: &State, x: usize) -> State {
    State {
        delay_timer: state.v[x],
        ..*state
    }
}

/// ST = Vx
pub fn ld(state: &State, x: usize) -> State {
    State {
        sound_timer: state.v[x],
        ..*state
    }
}

/// I += Vx; VF = I past the end of memory
pub fn addi(state: &State, x: usize) -> State {
    let i = state.i.wrapping_add(u16::from(state.v[x]));
    let mut v = state.v;
    v[FLAG_REGISTER] = u8::from(i > MAX_ADDRESS);
    State { i, v, ..*state }
}

/// I = (Vx & 0xF) * 5
/// Set I to the address of the font glyph for the low nibble of Vx
pub fn ldspr(state: &State, x: usize) -> State {
    State {
        i: u16::from(state.v[x] & 0xF) * FONT_GLYPH_SIZE,
        ..*state
    }
}

/// mem[I..I+3] = bcd(Vx)
/// Store the decimal digits of Vx in memory starting at address I, most significant first
pub fn bcd(state: &State, x: usize) -> Result<State> {
    let value = state.v[x];
    let mut memory = state.memory;
    memory
        .slice_mut(state.i as usize, 3)?
        .copy_from_slice(&[value / 100, value / 10 % 10, value % 10]);
    Ok(State { memory, ..*state })
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &State, x: usize) -> Result<State> {
    let mut memory = state.memory;
    memory
        .slice_mut(state.i as usize, x + 1)?
        .copy_from_slice(&state.v[..=x]);
    Ok(State { memory, ..*state })
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &State, x: usize) -> Result<State> {
    let mut v = state.v;
    v[..=x].copy_from_slice(state.memory.slice(state.i as usize, x + 1)?);
    Ok(State { v, ..*state })
}
