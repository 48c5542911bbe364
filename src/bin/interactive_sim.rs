use anyhow::Context;
use risk_sim::utils::error::{Result, SimError};
use risk_sim::utils::validation::{parse_bound, parse_iterations, Validate};
use risk_sim::utils::logger;
use risk_sim::{CliConfig, LocalStorage, MonteCarloPipeline, SimulationEngine};
use std::io::{BufRead, Write};

const MAX_ATTEMPTS: usize = 3;

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    println!("Monte Carlo risk simulation (interactive)");
    println!("Press Enter to accept the default shown in brackets.");
    println!();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let iterations = prompt(&mut input, "Number of iterations [10000]", "10000", |raw| {
        parse_iterations(raw)
    })?;
    let likelihood_min = prompt(&mut input, "Likelihood minimum [2]", "2", parse_bound)?;
    let likelihood_max = prompt(&mut input, "Likelihood maximum [5]", "5", parse_bound)?;
    let impact_min = prompt(&mut input, "Impact minimum [2]", "2", parse_bound)?;
    let impact_max = prompt(&mut input, "Impact maximum [5]", "5", parse_bound)?;
    let output_name = read_line(&mut input, "Output file base name [risk_distribution]")?;

    let config = CliConfig {
        iterations,
        likelihood_min,
        likelihood_max,
        impact_min,
        impact_max,
        output_path: "./output".to_string(),
        // An empty name falls back to the default inside the pipeline.
        output_name,
        bins: 50,
        seed: None,
        verbose: false,
    };

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = MonteCarloPipeline::new(storage, config);
    let engine = SimulationEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Simulation completed successfully!");
            println!("📁 Histogram saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

/// Ask for one value, re-prompting on invalid input. After MAX_ATTEMPTS
/// failures the last error aborts the run.
fn prompt<R: BufRead, T>(
    input: &mut R,
    label: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T>,
) -> anyhow::Result<T> {
    let mut last_err = SimError::InvalidUserInput {
        input: String::new(),
        reason: "no input given".to_string(),
    };

    for _ in 0..MAX_ATTEMPTS {
        let raw = read_line(input, label)?;
        let candidate = if raw.is_empty() { default } else { raw.as_str() };

        match parse(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => {
                println!("❌ {}", e.user_friendly_message());
                println!("💡 {}", e.recovery_suggestion());
                last_err = e;
            }
        }
    }

    Err(last_err.into())
}

fn read_line<R: BufRead>(input: &mut R, label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    std::io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    Ok(line.trim().to_string())
}
