//! Entry point for the arb-compare command line tool.

use std::io::Write;
use std::process::ExitCode;

use arb_compare::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match arb_compare::run(&cli, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!("Comparison aborted: {:?}", error);
            // stderr が閉じている場合は終了コードだけで失敗を伝える
            let _ = writeln!(std::io::stderr(), "error: {error}");
            ExitCode::FAILURE
        }
    }
}
