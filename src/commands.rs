use crate::cli::Args;
use crate::config::Config;
use crate::content::ContentKind;
use crate::error::AppError;
use crate::io::{display_sorted_names, read_name_lines, write_sorted_names};
use crate::pipeline::{FailurePolicy, SortPipeline};
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of one sorting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSummary {
    pub sorted: Vec<String>,
    pub output_path: PathBuf,
}

/// Builds the pipeline from CLI flags, falling back to config values.
pub fn pipeline_for(args: &Args, config: &Config) -> Result<SortPipeline, AppError> {
    let kind = match &args.kind {
        Some(kind) => kind.parse::<ContentKind>()?,
        None => config.content_kind,
    };
    let policy = if args.collect_errors {
        FailurePolicy::CollectAll
    } else {
        config.failure_policy
    };
    Ok(SortPipeline::new(kind, policy))
}

/// Reads `input`, sorts it, shows the result on `display` (if any) and
/// persists it to `output`.
///
/// Nothing is displayed or written when the pipeline fails.
pub async fn sort_file<W: Write>(
    input: &Path,
    output: &Path,
    pipeline: &SortPipeline,
    display: Option<&mut W>,
) -> Result<SortSummary, AppError> {
    let raw_lines = read_name_lines(input).await?;
    let sorted = pipeline.run(&raw_lines)?;

    if let Some(writer) = display {
        display_sorted_names(&sorted, writer)?;
    }
    let output_path = write_sorted_names(&sorted, output).await?;

    Ok(SortSummary {
        sorted,
        output_path,
    })
}

/// Handles the default command: sort the input file.
pub async fn handle_sort_command(args: &Args, config: &Config) -> Result<SortSummary, AppError> {
    let input = args.input.as_deref().ok_or(AppError::MissingInput)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_path));
    let pipeline = pipeline_for(args, config)?;

    info!(
        "Sorting {} into {} ({} policy)",
        input.display(),
        output.display(),
        pipeline.policy()
    );

    let summary = if args.quiet {
        sort_file::<std::io::Stdout>(input, &output, &pipeline, None).await?
    } else {
        let mut stdout = stdout();
        sort_file(input, &output, &pipeline, Some(&mut stdout)).await?
    };

    info!(
        "Sorted {} name(s) into {}",
        summary.sorted.len(),
        summary.output_path.display()
    );
    Ok(summary)
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-output, --set-log-file, --clear-log-file).
///
/// Changes are applied to the stored config file, not to environment overrides.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the config-changing CLI flags to `config`.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_output) = &args.new_output_path {
        config.output_path = new_output.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}
