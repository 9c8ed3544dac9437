//! pkgroulette - main entry point

use anyhow::Context;
use std::io::stdout;
use std::str::FromStr;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use pkgroulette::cli::{Cli, Commands};
use pkgroulette::{Backend, Roulette, RouletteConfig, RouletteError, Settings};

/// Initialize tracing on stderr; stdout is reserved for the package name
fn init_logger(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("pkgroulette: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Commands::Validate { path }) = &cli.command {
        info!("Validating configuration file: {:?}", path);
        let loaded = RouletteConfig::load_from_file(path)?;
        loaded.validate()?;
        println!("Configuration file is valid: {}", path.display());
        return Ok(());
    }

    let settings = Settings::resolve(load_config(&cli)?)?;
    info!("Using backend {}", settings.backend);

    let roulette = Roulette::new(settings.package_source(), settings.exclude.clone());
    let out = stdout().lock();

    match cli.command {
        Some(Commands::Candidates) => {
            let count = roulette.list_all(out)?;
            info!("Listed {} candidate(s)", count);
        }
        _ => {
            let mut source = settings.index_source();
            roulette.pick(&mut source, out)?;
        }
    }

    Ok(())
}

/// Config file (if any) with command line overrides applied
fn load_config(cli: &Cli) -> anyhow::Result<RouletteConfig> {
    let file_config = match &cli.config {
        Some(path) => {
            let config = RouletteConfig::load_from_file(path)?;
            config
                .validate()
                .with_context(|| format!("Invalid configuration in {}", path.display()))?;
            config
        }
        None => RouletteConfig::new(),
    };

    let backend = cli
        .backend
        .as_deref()
        .map(Backend::from_str)
        .transpose()
        .map_err(|e| RouletteError::config(format!("invalid backend: {}", e)))?;

    let merged = file_config.merged_with(backend, cli.seed, &cli.exclude);
    merged.validate()?;
    Ok(merged)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RouletteError>()
        .map_or(1, RouletteError::exit_code)
}
