use anyhow::Result;
use clap::Parser;

use charge_sim::charge::initialize_random_charges;
use charge_sim::config::SimConfig;
use charge_sim::simulation::simulate;

#[derive(Parser, Debug)]
struct Args {
    /// Path to a TOML scenario file. The built-in default scenario is used
    /// when omitted.
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => SimConfig::load_from_file(path)?,
        None => SimConfig::default(),
    };

    let mut rng = fastrand::Rng::with_seed(cfg.seed);
    let charges = initialize_random_charges(
        cfg.num_fixed,
        cfg.num_free,
        cfg.width,
        cfg.height,
        cfg.depth,
        (cfg.charge_min, cfg.charge_max),
        (cfg.mass_min, cfg.mass_max),
        &mut rng,
    );

    log::info!(
        "simulating {} charges ({} fixed) over {} snapshots, dt = {}",
        charges.len(),
        cfg.num_fixed,
        cfg.snapshots,
        cfg.dt
    );
    let sim = simulate(cfg.snapshots, cfg.dt, cfg.width, charges)?;
    log::info!("run complete: {} snapshots in memory", sim.snapshots.len());

    Ok(())
}
