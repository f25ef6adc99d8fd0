//! Process bootstrap
//!
//! Sets up the logger, settings, sprite assets and terminal, constructs
//! the initial task set, then drives the scheduler on a fixed cadence.
//! Real wall-clock time is read only here.

use std::env;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use stardrift::config::Settings;
use stardrift::sim::tasks::{
    DebrisSpawner, ShipAnimator, ShipController, YearCaption, YearCounter, create_stars,
};
use stardrift::sim::{Scheduler, World};
use stardrift::terminal::TerminalCanvas;
use stardrift::{Canvas, assets};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("stardrift: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };
    let sprites = Rc::new(assets::builtin()?);

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut canvas = TerminalCanvas::new()?;
    let (height, width) = canvas.field_size();
    log::info!("starting: field {height}x{width}, seed {seed}");

    let mut world = World::new(seed, (height / 2) as f32, (width / 2) as f32);
    let mut scheduler = Scheduler::new();
    for star in create_stars(&mut world.rng, (height, width), settings.star_count) {
        scheduler.register(star);
    }
    scheduler.register(ShipAnimator::new());
    scheduler.register(ShipController::new(Rc::clone(&sprites)));
    scheduler.register(DebrisSpawner::new(Rc::clone(&sprites)));
    scheduler.register(YearCounter::new());
    scheduler.register(YearCaption::new(height.saturating_sub(2), 2));

    let tic = Duration::from_millis(settings.tic_timeout_ms);
    loop {
        let started = Instant::now();
        canvas.pump_events()?;
        if canvas.should_quit() {
            break;
        }
        scheduler.run_tick(&mut canvas, &mut world);
        canvas.flush()?;

        let elapsed = started.elapsed();
        if elapsed < tic {
            std::thread::sleep(tic - elapsed);
        }
    }
    log::info!("quit at year {}", world.year);
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
