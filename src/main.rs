use std::env;
use std::io::{self, Write};

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use vector2d::constants::*;
use vector2d::steering::{Simulation, SimulationConfig};

fn parse_arg(args: &[String], index: usize, default: u64) -> u64 {
    match args.get(index) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(num) => num,
            Err(_) => {
                error!("Ignoring invalid argument '{}', using {}", arg, default);
                default
            }
        },
        None => default,
    }
}

// Usage: vector2d-demo [frames] [seed]
fn main() -> io::Result<()> {
    if let Err(e) = simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info) {
        eprintln!("Failed to open log file {}: {}", LOG_FILE, e);
    }
    info!("Starting vector2d demo.");

    let args: Vec<String> = env::args().collect();
    let frames = parse_arg(&args, 1, DEFAULT_FRAMES);
    let seed = parse_arg(&args, 2, DEFAULT_SEED);
    info!("Running {} frames with seed {}", frames, seed);

    let config = SimulationConfig::default();
    let mut simulation = Simulation::new(config, StdRng::seed_from_u64(seed));
    let report = simulation.run(frames);
    info!("Simulation finished: {}", report);

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", report).map_err(|e| { error!("Failed to write report: {}", e); e })?;
    stdout.flush().map_err(|e| { error!("Failed to flush stdout: {}", e); e })?;

    info!("Exiting vector2d demo.");
    Ok(())
}
