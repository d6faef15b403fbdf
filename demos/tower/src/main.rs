//! tower — a small office building served by FIFO-dispatched cars.
//!
//! ```text
//! tower [CONFIG.json] [--rush | --script ARRIVALS.csv]
//! ```
//!
//! With no config file the defaults of `SimConfig` are used.  `--rush`
//! replays the embedded morning-rush script; `--script` replays a CSV with
//! columns `tick,origin,destination`.  Otherwise people appear at random.
//!
//! Set `RUST_LOG=debug` to see every dispatch decision.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use lift_core::{Floor, SimConfig};
use lift_dispatch::FifoDispatch;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{
    RandomSpawner, SimBuilder, Spawner, load_arrivals_csv, load_arrivals_reader,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/tower";

// ── Arrival script ────────────────────────────────────────────────────────────

// Morning rush: a burst from the lobby, then a few people moving between
// floors and one early leaver heading back down.
const RUSH_CSV: &str = "\
tick,origin,destination\n\
0,0,7\n\
0,0,3\n\
1,0,9\n\
2,0,5\n\
2,4,0\n\
4,0,8\n\
5,6,2\n\
6,0,4\n\
8,3,9\n\
9,0,6\n\
12,9,0\n\
";

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about = "Run a small building with FIFO-dispatched cars", long_about = None)]
struct Cli {
    /// JSON file with a `SimConfig`; missing fields take their defaults.
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Replay the embedded morning-rush script.
    #[arg(long, conflicts_with = "script")]
    rush: bool,

    /// Replay arrivals from a CSV file (`tick,origin,destination`).
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    // 1. Configuration.
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    config.validate()?;

    println!("=== tower — elevator dispatch ===");
    println!(
        "Floors: {}  |  Cars: {}  |  Ticks: {}  |  Seed: {}",
        config.num_floors, config.car_count, config.total_ticks, config.seed
    );
    println!();

    // 2. Pick the arrival source and run.
    if let Some(path) = cli.script {
        let script = load_arrivals_csv(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        println!("Arrivals: {}, {} people", path.display(), script.len());
        run(config, script)
    } else if cli.rush {
        let script = load_arrivals_reader(Cursor::new(RUSH_CSV))?;
        println!("Arrivals: morning rush, {} people", script.len());
        run(config, script)
    } else {
        println!("Arrivals: random, p = {}", config.spawn_probability);
        let spawner = RandomSpawner::new(config.spawn_probability);
        run(config, spawner)
    }
}

fn run<S: Spawner>(config: SimConfig, spawner: S) -> Result<()> {
    // 3. Build sim: cars spread evenly over the building.
    let initial_floors: Vec<Floor> = (0..config.car_count)
        .map(|i| Floor((i as u32 * config.num_floors) / config.car_count as u32))
        .collect();

    let mut sim = SimBuilder::new(config.clone(), FifoDispatch)
        .spawner(spawner)
        .initial_floors(initial_floors)
        .build()?;

    // 4. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    info!("output written to {OUTPUT_DIR}");

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let stats = &sim.stats;
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  spawned             : {}", stats.spawned);
    println!("  delivered           : {}", stats.delivered);
    println!("  dispatches          : {}", stats.dispatches);
    println!("  mean wait outside   : {:.2} ticks", stats.mean_wait_outside());
    println!("  mean wait inside    : {:.2} ticks", stats.mean_wait_inside());
    println!("  still waiting       : {}", sim.building.waiting_count());
    println!("  calls outstanding   : {}", sim.requests.len());
    println!();

    // 7. Final car table.
    println!("{:<8} {:<10} {:<8} {:<12}", "Car", "Position", "Riders", "Destination");
    println!("{}", "-".repeat(40));
    for car in &sim.cars {
        let destination = car
            .destination_floor()
            .map_or_else(|| "-".to_owned(), |f| f.to_string());
        println!(
            "{:<8} {:<10.2} {:<8} {:<12}",
            car.id.0,
            car.position(sim.clock),
            car.passengers.len(),
            destination,
        );
    }

    Ok(())
}
