use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use nk_core::config::KernelConfig;
use nk_core::logger::{init_tracing, init_tracing_with};
use nk_kernel::Runner;
use tracing::debug;
mod cli;
mod commands;
mod error;
mod utils;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn kernel_config(cli: &Cli) -> Result<KernelConfig> {
    let mut config = KernelConfig::load(cli.config.as_deref())?;
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if cli.strict {
        config.strict = true;
    }
    Ok(config)
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.verbose {
        0 => init_tracing(),
        1 => init_tracing_with("debug"),
        _ => init_tracing_with("trace"),
    }

    let config = kernel_config(&cli)?;
    let runner = Runner::new(&config);
    debug!(
        "using {} kernel, strict: {}",
        runner.strategy(),
        runner.is_strict()
    );

    match &cli.command {
        Commands::Multiply(args) => commands::kernel::multiply::handle(&runner, args)?,
        Commands::RowMean(args) => commands::kernel::row_mean::handle(&runner, args)?,
        Commands::Cosine(args) => commands::kernel::cosine::handle(&runner, args)?,
        Commands::Compare(op) => commands::kernel::compare::handle(op)?,
        Commands::Tree { path, filter } => commands::util::tree::handle(path, filter.as_deref())?,
        Commands::Dict(args) => commands::util::dict::handle(args)?,
    }

    Ok(())
}
