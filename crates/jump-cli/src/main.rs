use std::process::ExitCode;

use clap::Parser;

use jump_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    jump_core::tracing::init_tracing(cli.effective_log_level());

    let stdout = std::io::stdout();
    match jump_cli::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "jump failed");
            ExitCode::FAILURE
        }
    }
}
