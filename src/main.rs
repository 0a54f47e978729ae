use clap::Parser;
use log::info;
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use hexapod_idle::actuation::{startup_shake, ConsoleActuation};
use hexapod_idle::config::IdleConfig;
use hexapod_idle::console::Console;
use hexapod_idle::units::Seconds;
use hexapod_idle::{Clock, IdleScheduler, LegId, SeededRandom, SystemClock};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with idle settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Idle threshold in seconds before the first animation
    #[arg(long)]
    timeout: Option<u32>,

    /// Seed for the random source, to replay a session
    #[arg(long)]
    seed: Option<u64>,

    /// Start with idle animations switched off
    #[arg(long)]
    disabled: bool,

    /// Pause between control loop iterations
    #[arg(long)]
    tick_millis: Option<u64>,

    /// Skip the leg shake at power-on
    #[arg(long)]
    no_startup_shake: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => IdleConfig::from_file(path)?,
        None => IdleConfig::default(),
    };
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = timeout;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.disabled {
        config.enabled = false;
    }
    if let Some(tick_millis) = args.tick_millis {
        config.tick_millis = tick_millis;
    }

    let catalog = config.catalog()?;
    let random = match config.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy()?,
    };
    info!("Random seed {}", random.seed());

    let mut actuation = ConsoleActuation;
    if !args.no_startup_shake {
        startup_shake(&mut actuation, LegId::FRONT_RIGHT, 3);
    }

    let scheduler = IdleScheduler::new(catalog, Some(actuation), SystemClock::new(), random)
        .with_idle_threshold(Seconds(config.timeout_seconds));
    let mut console = Console::new(scheduler);
    console.scheduler_mut().set_enabled(config.enabled);

    println!("Hexapod idle ready, type 'help' for commands");
    let tick = Duration::from_millis(config.tick_millis);
    let mut input = Some(spawn_reader());
    loop {
        if let Some(lines) = &input {
            if !console.drain(lines, |reply| println!("{}", reply)) {
                info!("Input closed, idling on without a console");
                input = None;
            }
        }
        console.tick();
        console.scheduler().clock().sleep(tick);
    }
}

/// Read stdin on its own thread so the control loop never blocks on it.
fn spawn_reader() -> Receiver<String> {
    let (lines_tx, lines_rx) = channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if lines_tx.send(line).is_err() {
                break;
            }
        }
    });
    lines_rx
}
