use std::{env, error::Error, fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use log::{debug, info};

use hadamard_sim::{Backend, RunConfig};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum BackendChoices {
    #[value(name = "local_simulator", alias = "qasm_simulator")]
    LocalSimulator,
}

impl BackendChoices {
    fn backend(self) -> Backend {
        match self {
            Self::LocalSimulator => Backend::LocalSimulator,
        }
    }
}

/// Apply a Hadamard to every qubit of a fresh register and histogram the measurements
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Number of qubits
    #[arg(short = 'n', long)]
    qubits: Option<usize>,
    /// Number of shots
    #[arg(short = 's', long)]
    shots: Option<usize>,
    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short = 'b', long, value_enum)]
    backend: Option<BackendChoices>,
    /// JSON run configuration; command-line flags override its fields
    /// before the combined configuration is validated
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    /// Print the full execution result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => {
                debug!("Reading configuration from {}", path.display());
                RunConfig::parse(&fs::read_to_string(path)?)?
            }
            None => RunConfig::default(),
        };

        config.override_with(
            self.qubits,
            self.shots,
            self.seed,
            self.backend.map(BackendChoices::backend),
        );

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // By default log INFO.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.run_config()?;
    info!("Executing on {} with {:?}", config.backend, config);

    let result = hadamard_sim::execute(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.counts);
    }

    Ok(())
}
