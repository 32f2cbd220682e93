//! git-to-jj CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use git_to_jj::cli::{Cli, CommandDispatcher};
use git_to_jj::config::load_config;
use git_to_jj::jj::{Jj, ProcessExecutor};
use git_to_jj::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with jj's own stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("git_to_jj=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("git_to_jj=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("git-to-jj starting with args: {:?}", cli);

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let config = match load_config(&project_root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(OutputMode::Quiet, cli.no_color);
            ui.error(&format!("Error: {}", e));
            return exit_code(e.exit_code());
        }
    };

    let output_mode = OutputMode::resolve(cli.quiet, config.echo_commands);
    let mut ui = create_ui(output_mode, cli.no_color);

    let program = cli.jj.clone().unwrap_or_else(|| config.jj.program.clone());
    let executor = ProcessExecutor::new(program, &project_root).with_env(config.jj.env.clone());

    let dispatcher = CommandDispatcher::new(Jj::new(&executor), config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            exit_code(e.exit_code())
        }
    }
}
