use clap::Parser;
use risk_sim::core::ConfigProvider;
use risk_sim::utils::{logger, validation::Validate};
use risk_sim::{LocalStorage, MonteCarloPipeline, ScenarioConfig, SimulationEngine};

#[derive(Parser)]
#[command(name = "scenario-sim")]
#[command(about = "Monte Carlo risk simulation driven by a TOML scenario file")]
struct Args {
    /// Path to the TOML scenario file
    #[arg(short, long, default_value = "risk-scenario.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Show what would run without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting scenario-based risk simulation");
    tracing::info!("📁 Loading scenario from: {}", args.config);

    let mut config = match ScenarioConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Scenario validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Scenario loaded and validated successfully");

    display_scenario_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no simulation will run");
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = MonteCarloPipeline::new(storage, config);
    let engine = SimulationEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Simulation completed successfully!");
            tracing::info!("📁 Histogram saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Simulation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_scenario_summary(config: &ScenarioConfig, args: &Args) {
    println!("📋 Scenario Summary:");
    println!("  Name: {}", config.name());
    if let Some(description) = &config.simulation.description {
        println!("  Description: {}", description);
    }
    println!("  Iterations: {}", config.iterations());
    println!(
        "  Likelihood: [{}, {})",
        config.likelihood.min, config.likelihood.max
    );
    println!("  Impact: [{}, {})", config.impact.min, config.impact.max);
    println!(
        "  Output: {}/{}.png ({} bins)",
        config.output_path(),
        config.output_basename(),
        config.bins()
    );

    match config.seed() {
        Some(seed) => println!("  Seed: {} (reproducible)", seed),
        None => println!("  Seed: OS entropy"),
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
