use clap::Parser;
use tracing_subscriber::EnvFilter;

use spoti::{
    cli::{self, Cli},
    config::{self, Config},
    error, warning,
};

fn init_tracing(verbose: bool) {
    let default = if verbose { "spoti=debug" } else { "spoti=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG may come from a .env file
    let env_loaded = config::load_env().await;
    init_tracing(cli.verbose);
    if let Err(e) = env_loaded {
        warning!("Cannot load environment. Err: {}", e);
    }
    let config = Config::from_env();

    if let Err(e) = cli::run(cli, &config).await {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
