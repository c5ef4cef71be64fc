use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Name Sorter
///
/// Reads a file with one personal name per line ("Given [Given [Given]] Surname"),
/// sorts the names by surname and then by given names, prints the result
/// and writes it to `sorted-names-list.txt` (or the configured output file).
///
/// Sorting stops at the first line that is not a valid name unless
/// --collect-errors is given. No output file is written when any line is invalid.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// File holding the names to sort, one per line.
    #[arg(
        value_name = "INPUT_FILE",
        required_unless_present_any = ["list_config", "new_output_path", "new_log_file_path", "clear_log_file_path"]
    )]
    pub input: Option<PathBuf>,

    /// Write the sorted list to this file instead of the configured one.
    #[arg(short = 'o', long = "output", help_heading = "Sorting")]
    pub output: Option<PathBuf>,

    /// Kind of content held by each input line.
    #[arg(short = 'k', long = "kind", help_heading = "Sorting")]
    pub kind: Option<String>,

    /// Report every invalid line instead of stopping at the first one.
    #[arg(long = "collect-errors", help_heading = "Sorting")]
    pub collect_errors: bool,

    /// Do not print the sorted list to stdout; only write the output file.
    #[arg(short = 'q', long = "quiet", help_heading = "Sorting")]
    pub quiet: bool,

    /// Persist a default output file path in the config.
    #[arg(long = "set-output", help_heading = "Configuration")]
    pub new_output_path: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write log output to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// True when the invocation only inspects or changes the config file.
    pub fn is_config_command(&self) -> bool {
        self.list_config
            || self.new_output_path.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_input_and_options() {
        let args = Args::try_parse_from([
            "name_sorter",
            "names.txt",
            "-o",
            "out.txt",
            "--collect-errors",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("names.txt")));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.collect_errors);
        assert!(args.quiet);
        assert!(!args.is_config_command());
    }

    #[test]
    fn test_input_required_without_config_command() {
        assert!(Args::try_parse_from(["name_sorter"]).is_err());
    }

    #[test]
    fn test_config_commands_do_not_need_input() {
        let args = Args::try_parse_from(["name_sorter", "--list-config"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.is_config_command());

        let args = Args::try_parse_from(["name_sorter", "--set-output", "x.txt"]).unwrap();
        assert_eq!(args.new_output_path.as_deref(), Some("x.txt"));
        assert!(args.is_config_command());
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
