use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

use emu8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8::{Chip8, FrameBuffer, Pacer, TIMER_HZ};

/// How a ROM should be run
pub struct Options {
    pub rom: PathBuf,
    pub cycles_per_tick: u32,
    pub ticks: u32,
    pub seed: Option<u64>,
    pub fast: bool,
    pub halt_on_error: bool,
    pub hold: Vec<u8>,
}

/// Runs a ROM for `options.ticks` logical ticks and returns the final frame.
///
/// Each tick decrements the timers and then executes a fixed burst of
/// instructions. Unless running `fast`, ticks are paced against the wall
/// clock and run back to back when the loop falls behind.
pub fn run(options: &Options) -> Result<FrameBuffer, Box<dyn Error>> {
    let mut chip8 = match options.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&options.rom)?;
    let mut reader = BufReader::new(file);
    chip8.load_rom_from(&mut reader)?;
    info!("loaded {}", options.rom.display());

    for &key in &options.hold {
        chip8.key_press(key);
    }

    let mut pacer = Pacer::new(TIMER_HZ);
    let mut last_cycle = Instant::now();
    let mut ticks_run = 0;

    'ticks: while ticks_run < options.ticks {
        let due = if options.fast {
            1
        } else {
            let current_time = Instant::now();
            let due = pacer.accumulate(current_time - last_cycle);
            last_cycle = current_time;
            due
        };

        for _ in 0..due.min(options.ticks - ticks_run) {
            let report = chip8.run_tick(options.cycles_per_tick);
            ticks_run += 1;
            for error in &report.errors {
                warn!("tick {}: {}", ticks_run, error);
            }
            if options.halt_on_error && !report.errors.is_empty() {
                break 'ticks;
            }
        }

        // Handle timing
        if !options.fast && due == 0 {
            std::thread::sleep(pacer.until_next());
        }
    }

    info!("ran {} ticks, pc is {:#05X}", ticks_run, chip8.pc());
    Ok(chip8.frame())
}

/// Draws a frame as text, one line per row of pixels
pub fn render(frame: &FrameBuffer) -> String {
    frame
        .chunks(DISPLAY_WIDTH)
        .take(DISPLAY_HEIGHT)
        .map(|row| {
            row.iter()
                .map(|&pixel| if pixel == 1 { '█' } else { ' ' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
