//! csvdesc - summarize field types observed in (a sample of) CSV files

use std::process::ExitCode;

use clap::Parser;
use csv_describe::cli::commands::{DescribeArgs, handle_describe};
use csv_describe::cli::{Cli, init_logging};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.loglevel);

    if let Some(level) = cli.loglevel {
        tracing::info!("Logging level: {:?}", level);
    }

    let args = DescribeArgs::try_from(&cli)?;
    tracing::info!(
        style = args.config.sampling.style_name(),
        sampling = %args.config.sampling,
        "Sampling style"
    );

    let outcome = handle_describe(
        &args,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
