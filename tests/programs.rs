use emu8::random::Sequence;
use emu8::{Chip8, Error};
use pretty_assertions::assert_eq;

fn run(rom: &[u8], steps: usize) -> Chip8 {
    let mut chip8 = Chip8::with_seed(0x8);
    chip8.load(rom).unwrap();
    for _ in 0..steps {
        chip8.step().unwrap();
    }
    chip8
}

#[test]
fn load_and_add() {
    let chip8 = run(&[0x60, 0x0A, 0x70, 0x05], 2);
    assert_eq!(chip8.registers()[0x0], 0x0F);
    assert_eq!(chip8.pc(), 0x204);
}

#[test]
fn oversized_rom_is_rejected() {
    let mut chip8 = Chip8::new();
    let before = *chip8.state();
    let result = chip8.load(&[0xAA; 3585]);
    assert!(matches!(
        result,
        Err(Error::RomTooLarge {
            size: 3585,
            max_size: 3584
        })
    ));
    assert_eq!(*chip8.state(), before);
}

#[test]
fn font_glyph_for_zero() {
    let chip8 = Chip8::new();
    let glyph: Vec<u8> = (0..5).map(|a| chip8.peek(a).unwrap()).collect();
    assert_eq!(glyph, vec![0xF0, 0x90, 0x90, 0x90, 0xF0]);
}

/// Builds a ROM where the subroutine at each level calls the next one down.
/// Level `n` lives at `0x300 + 4 * n` and is `CALL next; RET`, the deepest
/// level is `RET; RET`.
fn nested_calls(depth: u16) -> Vec<u8> {
    let mut rom = vec![0x00; 0x200];
    // 0x200: CALL 0x300, 0x202: JP 0x202
    rom[0x0..0x4].copy_from_slice(&[0x23, 0x00, 0x12, 0x02]);
    for level in 0..depth {
        let at = 0x100 + 4 * level as usize;
        let call = if level + 1 < depth {
            0x2000 | (0x300 + 4 * (level + 1))
        } else {
            0x00EE
        };
        rom[at..at + 4].copy_from_slice(&[(call >> 8) as u8, call as u8, 0x00, 0xEE]);
    }
    rom
}

#[test]
fn sixteen_nested_calls_unwind_in_order() {
    let mut chip8 = Chip8::with_seed(0x8);
    chip8.load(&nested_calls(16)).unwrap();

    for depth in 1..=16u16 {
        chip8.step().unwrap();
        assert_eq!(chip8.stack_depth() as u16, depth);
    }
    // the deepest level returns straight away
    assert_eq!(chip8.pc(), 0x300 + 4 * 15);

    chip8.step().unwrap();
    let mut returns = vec![chip8.pc()];
    for _ in 0..15 {
        chip8.step().unwrap();
        returns.push(chip8.pc());
    }

    // each return lands just after the call that made it, innermost first
    let mut expected: Vec<u16> = (0..15).rev().map(|level| 0x300 + 4 * level + 2).collect();
    expected.push(0x202);
    assert_eq!(returns, expected);
    assert_eq!(chip8.stack_depth(), 0);
}

#[test]
fn seventeenth_call_overflows() {
    // 0x200: CALL 0x200, forever
    let mut chip8 = Chip8::with_seed(0x8);
    chip8.load(&[0x22, 0x00]).unwrap();
    for _ in 0..16 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.stack_depth(), 16);
    assert!(matches!(chip8.step(), Err(Error::StackOverflow)));
    assert_eq!(chip8.stack_depth(), 16);
    assert_eq!(chip8.pc(), 0x202);
}

#[test]
fn collision_clears_and_flags() {
    let rom = [
        0xA2, 0x0A, // I = sprite
        0xD0, 0x01, // draw at (0, 0)
        0xD0, 0x01, // draw again, erasing it
        0x12, 0x06, // loop
        0x00, 0x00, // padding
        0xFF, // sprite: one full row
    ];
    let mut chip8 = run(&rom, 2);
    assert_eq!(chip8.flag(), 0);
    assert!((0..8).all(|x| chip8.pixel(x, 0) == 1));

    chip8.step().unwrap();
    assert_eq!(chip8.flag(), 1);
    assert_eq!(chip8.frame().to_vec(), vec![0u8; 2048]);
}

#[test]
fn bcd_of_234() {
    // V5 = 234, I = 0x300, store BCD
    let chip8 = run(&[0x65, 0xEA, 0xA3, 0x00, 0xF5, 0x33], 3);
    let digits: Vec<u8> = (0x300..0x303).map(|a| chip8.peek(a).unwrap()).collect();
    assert_eq!(digits, vec![2, 3, 4]);
}

#[test]
fn store_then_restore_registers() {
    let rom = [
        0x60, 0x11, // V0 = 0x11
        0x61, 0x22, // V1 = 0x22
        0x62, 0x33, // V2 = 0x33
        0xA4, 0x00, // I = 0x400
        0xF2, 0x55, // store V0..=V2
        0x60, 0x00, // clear V0..=V2
        0x61, 0x00, //
        0x62, 0x00, //
        0xF2, 0x65, // restore V0..=V2
    ];
    let chip8 = run(&rom, 9);
    assert_eq!(chip8.registers()[..3].to_vec(), vec![0x11, 0x22, 0x33]);
}

#[test]
fn random_bytes_are_masked() {
    let mut chip8 = Chip8::with_random_source(Box::new(Sequence::new(&[0xAB, 0xCD])));
    chip8.load(&[0xC0, 0x0F, 0xC1, 0xF0, 0xC2, 0xFF]).unwrap();
    for _ in 0..3 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.registers()[..3].to_vec(), vec![0x0B, 0xC0, 0xAB]);
}

#[test]
fn keypad_skips() {
    let rom = [
        0x61, 0x04, // V1 = 4
        0xE1, 0x9E, // skip if key 4 is down
        0x62, 0x01, // V2 = 1 (skipped)
        0x63, 0x01, // V3 = 1
    ];
    let mut chip8 = Chip8::with_seed(0x8);
    chip8.load(&rom).unwrap();
    chip8.key_press(0x4);
    for _ in 0..3 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.registers()[0x2], 0x0);
    assert_eq!(chip8.registers()[0x3], 0x1);
}

#[test]
fn delay_timer_drives_a_wait_loop() {
    let rom = [
        0x60, 0x03, // V0 = 3
        0xF0, 0x15, // DT = V0
        0xF1, 0x07, // V1 = DT
        0x31, 0x00, // skip if V1 == 0
        0x12, 0x04, // JP 0x204
        0x12, 0x0A, // JP 0x20A
    ];
    let mut chip8 = Chip8::with_seed(0x8);
    chip8.load(&rom).unwrap();
    let mut ticks = 0;
    while chip8.pc() != 0x20A {
        let report = chip8.run_tick(11);
        assert!(report.errors.is_empty());
        ticks += 1;
        assert!(ticks < 10, "the wait loop never finished");
    }
    assert_eq!(chip8.delay_timer(), 0);
}
