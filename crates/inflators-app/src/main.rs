use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use inflators_app::game_loop;
use inflators_app::input::Autopilot;
use inflators_core::config::SimConfig;
use inflators_sim::World;

#[derive(Parser, Debug)]
#[command(name = "inflators")]
#[command(about = "Run a headless Space Inflators game driven by the autopilot")]
struct Args {
    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Print the run summary and final snapshot as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    log::info!("Space Inflators starting (seed {})", config.seed);

    let mut world = World::new(config);
    world.init();

    let mut audio_cues = 0usize;
    let summary = game_loop::run(&mut world, &mut Autopilot::default(), args.max_ticks, |s| {
        audio_cues += s.audio_events.len();
    });

    log::info!(
        "Finished after {} ticks: round {}, score {}, {} ship(s) lost, {} audio cue(s){}",
        summary.ticks,
        summary.round,
        summary.score,
        summary.ships_lost,
        audio_cues,
        if summary.game_over { ", game over" } else { "" }
    );

    if args.json {
        let report = serde_json::json!({
            "summary": summary,
            "final_snapshot": world.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
