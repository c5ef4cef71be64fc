// src/main.rs
use clap::Parser;
use crossterm::style::Stylize;
use name_sorter::cli::Args;
use name_sorter::commands;
use name_sorter::config::Config;
use name_sorter::error::AppError;
use name_sorter::logging::setup_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.is_config_command() {
        return commands::handle_config_update_command(&args).await;
    }

    match commands::handle_sort_command(&args, &config).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_input_error() => {
            tracing::warn!("Input rejected: {e}");
            Err(e)
        }
        Err(e) => {
            tracing::error!("Sorting failed: {e}");
            Err(e)
        }
    }
}
