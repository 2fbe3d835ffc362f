use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use viewmodel_lint::{run, Args, LintConfig};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LintConfig::from(Args::parse());
    let mut stdout = std::io::stdout().lock();

    match run(&config, &mut stdout).await {
        Ok(summary) if summary.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("viewmodel-lint: {err:#}");
            ExitCode::from(2)
        }
    }
}
