mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Installs a `tracing` subscriber (which also receives `log` records) at the
/// level chosen by `--verbose` or, failing that, the `LOG_LEVEL` env var.
fn init_logging(cli: &Cli) {
    let (log_level, env_warning) = if cli.verbose {
        (tracing::Level::DEBUG, None)
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(value) => match parse_log_level(&value) {
                Some(level) => (level, None),
                None => (
                    DEFAULT_LOG_LEVEL,
                    Some(format!("Invalid `LOG_LEVEL` environment variable value: `{value}`")),
                ),
            },
            Err(_) => (DEFAULT_LOG_LEVEL, None),
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = env_warning {
        log::warn!("{warning}");
    }
}

fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
