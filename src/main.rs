//! forge-outdated - find registry modules with outdated dependency ranges
//!
//! Pages through the Puppet Forge module listing and reports every module
//! whose version requirement on a dependency excludes the given version.

use clap::Parser;
use forge_outdated::cli::CliArgs;
use forge_outdated::orchestrator::Orchestrator;
use forge_outdated::output::{Reporter, Verbosity};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit with 1, help and version output with 0
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let verbosity = Verbosity::from_flag(args.is_verbose());
    let mut reporter = Reporter::stdio(verbosity, io::stderr().is_terminal());

    match run(args, &mut reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = reporter.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs, reporter: &mut Reporter<io::Stdout, io::Stderr>) -> anyhow::Result<()> {
    // Validate everything before the first request
    let config = args.to_config()?;

    let orchestrator = Orchestrator::new(config)?;
    orchestrator.run(reporter).await?;
    Ok(())
}
