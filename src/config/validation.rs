use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Output path cannot be empty
/// - Output path cannot point at an existing directory
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(output_path: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if Path::new(output_path).is_dir() {
        return Err(AppError::config_error(format!(
            "Output path '{output_path}' is a directory"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
