//! File and console collaborators around the sorting pipeline.

use crate::error::AppError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Returns the absolute form of the current working directory, or `"."` if it
/// cannot be resolved.
pub fn current_dir_display() -> String {
    std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| ".".to_string())
}

/// Reads the input file into raw lines, in file order.
///
/// No blank-line filtering is done; blank lines reach the parser and are
/// rejected there.
///
/// # Errors
/// * `AppError::InputNotFound` - The file does not exist
/// * `AppError::Io` - The file or its metadata could not be read
pub async fn read_name_lines(path: impl AsRef<Path>) -> Result<Vec<String>, AppError> {
    let path = path.as_ref();
    if !fs::try_exists(path).await? {
        return Err(AppError::input_not_found(
            path.display().to_string(),
            current_dir_display(),
        ));
    }

    let content = fs::read_to_string(path).await?;
    // Editors on Windows often prefix UTF-8 files with a byte order mark
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!("Read {} line(s) from {}", lines.len(), path.display());
    Ok(lines)
}

/// Writes each line to the display stream.
pub fn display_sorted_names<W: Write>(lines: &[String], writer: &mut W) -> Result<(), AppError> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Persists the sorted lines, newline-terminated, creating the parent
/// directory if needed. Returns the path written.
pub async fn write_sorted_names(
    lines: &[String],
    path: impl AsRef<Path>,
) -> Result<PathBuf, AppError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }

    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    let mut file = fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;

    info!("Wrote {} sorted line(s) to {}", lines.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_name_lines_keeps_order_and_blank_lines() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("names.txt");
        std::fs::write(&input, "Janet Parsons\r\n\nVaughn Lewis\n").unwrap();

        let lines = read_name_lines(&input).await.unwrap();
        assert_eq!(lines, vec!["Janet Parsons", "", "Vaughn Lewis"]);
    }

    #[tokio::test]
    async fn test_read_name_lines_missing_file() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.txt");

        let err = read_name_lines(&missing).await.unwrap_err();
        match err {
            AppError::InputNotFound { path, cwd } => {
                assert!(path.ends_with("nope.txt"));
                assert!(!cwd.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_name_lines_strips_byte_order_mark() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("names.txt");
        std::fs::write(&input, "\u{FEFF}Janet Parsons\nVaughn Lewis\n").unwrap();

        let lines = read_name_lines(&input).await.unwrap();
        assert_eq!(lines, vec!["Janet Parsons", "Vaughn Lewis"]);
    }

    #[tokio::test]
    async fn test_read_name_lines_keeps_inner_byte_order_mark_chars() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("names.txt");
        std::fs::write(&input, "Janet Parsons\n\u{FEFF}Vaughn Lewis\n").unwrap();

        let lines = read_name_lines(&input).await.unwrap();
        assert_eq!(lines[1], "\u{FEFF}Vaughn Lewis");
    }

    #[tokio::test]
    async fn test_read_name_lines_metadata_error_is_not_reported_as_missing() {
        let temp_dir = tempdir().unwrap();
        let not_a_dir = temp_dir.path().join("plain.txt");
        std::fs::write(&not_a_dir, "Janet Parsons\n").unwrap();

        // A path through a regular file fails with ENOTDIR, not NotFound
        let err = read_name_lines(not_a_dir.join("names.txt")).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn test_write_sorted_names_terminates_every_line() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out").join("sorted-names-list.txt");
        let lines = vec!["Shaun Chen".to_string(), "Vaughn Lewis".to_string()];

        let written = write_sorted_names(&lines, &output).await.unwrap();
        assert_eq!(written, output);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Shaun Chen\nVaughn Lewis\n"
        );
    }

    #[tokio::test]
    async fn test_write_sorted_names_empty_list_creates_empty_file() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("empty.txt");

        write_sorted_names(&[], &output).await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_display_sorted_names() {
        let mut buffer = Vec::new();
        let lines = vec!["Adonis Julius Archer".to_string(), "Shaun Chen".to_string()];
        display_sorted_names(&lines, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Adonis Julius Archer\nShaun Chen\n"
        );
    }
}
