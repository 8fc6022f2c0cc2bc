//! Vaultlink binary entry point

use clap::Parser;
use vaultlink_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    run(&cli)
}
