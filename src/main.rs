use anyhow::Result;

use rusty_du::cli::Cli;
use rusty_du::commands;
use rusty_du::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse_normalized();

    // Initialize logging based on verbosity
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        commands::completions::run(shell);
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    commands::scan::run(&cli, &config.scan)?;

    Ok(())
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rusty_du={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
