//! Headless driver for the simulation
//!
//! The frame clock lives here, outside the core: the loop paces `tick` at
//! the target rate and stops cooperatively between ticks once the budget
//! runs out. Rendering and tracked-paddle input would plug in at the
//! `TickInput` boundary.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;

use slot_hockey::SimConfig;
use slot_hockey::consts::TICK_RATE;
use slot_hockey::sim::{SimState, TickInput, tick};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            SimConfig::from_json(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => SimConfig::default(),
    };
    let budget: u64 = match args.next() {
        Some(arg) => arg.parse().context("tick budget must be an integer")?,
        None => 60 * TICK_RATE as u64,
    };

    let mut state = SimState::new(&config)?;
    log::info!("running {budget} ticks at {TICK_RATE} Hz");

    let frame = Duration::from_secs(1) / TICK_RATE;
    let input = TickInput::default();
    let mut goals = 0u32;
    for _ in 0..budget {
        let start = Instant::now();
        if tick(&mut state, &input).is_some() {
            goals += 1;
        }
        if let Some(rest) = frame.checked_sub(start.elapsed()) {
            thread::sleep(rest);
        }
    }

    log::info!("stopped after {} ticks, {goals} goals", state.time_ticks);
    Ok(())
}
