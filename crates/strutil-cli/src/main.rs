//! strutil - apply the text helpers from the command line.
//!
//! Each command runs one helper either over the text given after `--` or
//! over every line of stdin, printing one result per line.

mod command;
mod config;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use command::{Cli, Command, Options};
use config::Config;

/// Log file name prefix inside the configured log directory
const LOG_FILE_PREFIX: &str = "strutil.log";

/// Daily rolling log file in `dir`, creating the directory if needed
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
        .with_context(|| format!("Failed to open log directory {}", dir.display()))
}

/// Initialize the tracing subscriber for logging.
///
/// Returns the file writer guard when a log directory is configured; it must
/// live until exit so buffered lines are flushed.
fn init_tracing(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(dir)?);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config_path = Config::path()?;
    let config = Config::load_from(&config_path)?;
    let _guard = init_tracing(config.log_dir.as_deref())?;
    debug!(command = ?cli.command, "Parsed command line");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, &config_path, cli, stdin.lock(), &mut stdout.lock())
}

fn run<R: BufRead, W: Write>(
    config: &Config,
    config_path: &Path,
    cli: Cli,
    input: R,
    out: &mut W,
) -> Result<()> {
    let Cli { overrides, command } = cli;

    let mut options = Options::from_config(config);
    overrides.apply(&mut options);

    match &command {
        Command::ShowConfig => {
            let effective = effective_config(config, &options);
            writeln!(out, "{}", serde_json::to_string_pretty(&effective)?)?;
        }
        Command::SaveConfig => {
            effective_config(config, &options)
                .save_to(config_path)
                .with_context(|| {
                    format!("Failed to write config file {}", config_path.display())
                })?;
            info!(path = %config_path.display(), "Saved config");
            writeln!(out, "{}", config_path.display())?;
        }
        cmd => match cmd.input().and_then(|i| i.text()) {
            Some(text) => write_lines(out, cmd.apply(&text, &options))?,
            None if cmd.input().is_none() => write_lines(out, cmd.apply("", &options))?,
            None => {
                let mut count = 0usize;
                for line in input.lines() {
                    let line = line.context("Failed to read stdin")?;
                    write_lines(out, cmd.apply(&line, &options))?;
                    count += 1;
                }
                debug!(lines = count, "Processed stdin");
            }
        },
    }

    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Config with command-line flags applied, keeping the configured log directory
fn effective_config(config: &Config, options: &Options) -> Config {
    Config {
        trim_space: options.trim_space,
        ellipsis: options.ellipsis,
        glue: options.glue.clone(),
        log_dir: config.log_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(config: &Config, args: &[&str], stdin: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        run_at(config, &dir.path().join("config.json"), args, stdin)
    }

    fn run_at(config: &Config, path: &Path, args: &[&str], stdin: &str) -> String {
        let cli = Cli::try_parse_from(std::iter::once("strutil").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(config, path, cli, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_text_after_separator() {
        let config = Config::default();
        assert_eq!(run_with(&config, &["words", "--", "AboutMe"], "ignored\n"), "About Me\n");
        assert_eq!(
            run_with(&config, &["--ellipsis", "substring", "1", "3", "--", "abcdef"], ""),
            "bc...\n"
        );
    }

    #[test]
    fn test_run_reads_stdin_line_by_line() {
        let config = Config::default();
        let out = run_with(&config, &["is-numeric"], "123\n12a\n\n");
        assert_eq!(out, "true\nfalse\ntrue\n");

        let out = run_with(&config, &["wrap", "3"], "abcdefgh\nab\n");
        assert_eq!(out, "abc\ndef\ngh\nab\n");
    }

    #[test]
    fn test_run_uses_config_defaults() {
        let config = Config {
            trim_space: true,
            ..Config::default()
        };
        assert_eq!(run_with(&config, &["trim", "x"], "  xx hi x \n"), "hi\n");
        assert_eq!(run_with(&config, &["--no-trim", "trim", "x"], " xhix\n"), " xhi\n");
    }

    #[test]
    fn test_run_iequal_ignores_input() {
        let config = Config::default();
        let out = run_with(&config, &["--trim", "iequal", "Foo", " foo "], "unrelated\nlines\n");
        assert_eq!(out, "true\n");
        assert_eq!(run_with(&config, &["iequal"], ""), "false\n");
    }

    #[test]
    fn test_run_config_prints_effective_settings() {
        let config = Config::default();
        let out = run_with(&config, &["--glue", ";", "--trim", "config"], "");
        let printed: Config = serde_json::from_str(&out).unwrap();
        assert!(printed.trim_space);
        assert!(!printed.ellipsis);
        assert_eq!(printed.glue, ";");
    }

    #[test]
    fn test_run_save_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let out = run_at(&Config::default(), &path, &["--ellipsis", "save-config"], "");
        assert_eq!(out.trim_end(), path.display().to_string());

        let saved = Config::load_from(&path).unwrap();
        assert!(saved.ellipsis);
        assert_eq!(saved.glue, ",");
    }

    #[test]
    fn test_file_appender_in_fresh_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        assert!(file_appender(&logs).is_ok());
        assert!(logs.is_dir());
    }

    #[test]
    fn test_file_appender_bad_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let err = file_appender(&blocker.join("logs")).unwrap_err();
        assert!(err.to_string().contains("Failed to open log directory"));
    }
}
