use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use emu8::CYCLES_PER_TICK;

mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(name = "chip8")]
#[command(about = "Runs a Chip-8 ROM headlessly and prints its final frame")]
struct Args {
    /// ROM file to run
    rom: PathBuf,

    /// Instructions executed per 60Hz tick
    #[arg(long, default_value_t = CYCLES_PER_TICK)]
    cycles_per_tick: u32,

    /// Number of 60Hz ticks to run for
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Run ticks back to back instead of pacing them against the clock
    #[arg(long)]
    fast: bool,

    /// Stop at the end of the first tick that raised an error
    #[arg(long)]
    halt_on_error: bool,

    /// Keys held down for the whole run, as hex digits (e.g. "4a")
    #[arg(long, value_parser = keymap::parse_keys, default_value = "")]
    hold: ::std::vec::Vec<u8>,

    /// Log every executed instruction
    #[arg(short, long)]
    verbose: bool,
}

/// Filters come from `RUST_LOG`, falling back to `info`; `verbose` raises
/// both crates to `trace` on top of that.
fn logger(env: Env, verbose: bool) -> env_logger::Builder {
    let mut logger = env_logger::Builder::from_env(env.default_filter_or("info"));
    if verbose {
        logger
            .filter_module("emu8", LevelFilter::Trace)
            .filter_module("chip8", LevelFilter::Trace);
    }
    logger
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    logger(Env::default(), args.verbose).init();

    let options = run::Options {
        rom: args.rom,
        cycles_per_tick: args.cycles_per_tick,
        ticks: args.ticks,
        seed: args.seed,
        fast: args.fast,
        halt_on_error: args.halt_on_error,
        hold: args.hold,
    };
    let frame = run::run(&options)?;
    println!("{}", run::render(&frame));
    Ok(())
}
