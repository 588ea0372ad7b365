//! Rover mission simulator CLI.
//!
//! Reads a mission file (grid bounds, then landing/directive line pairs),
//! drives each rover in landing order and prints its final `X Y HEADING`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rover::exit_codes;
use rover::io::config::{ConfigOverrides, MissionConfig, OutputFormat, load_config};
use rover::io::input::load_input;
use rover::io::report::{ReportWriter, fatal_notice};
use rover::logging;
use rover::mission::{MissionError, MissionSummary, check_mission, run_mission};

#[derive(Parser)]
#[command(
    name = "rover",
    version,
    about = "Land rovers on a plateau and follow their directives"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a mission and print each rover's final position.
    Run {
        /// Mission input file.
        input: PathBuf,
        /// Optional TOML config.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format for rover results (overrides config).
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Fail on unknown directive characters instead of skipping them.
        #[arg(long)]
        strict: bool,
        /// Do not print notices for rejected moves.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Parse a mission file without running it.
    Check {
        /// Mission input file.
        input: PathBuf,
        /// Optional TOML config.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Fail on unknown directive characters instead of skipping them.
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            input,
            config,
            format,
            strict,
            quiet,
        } => {
            let overrides = ConfigOverrides {
                format,
                strict,
                quiet,
            };
            let cfg = load_config(config.as_deref())?.apply(&overrides);
            cmd_run(&input, &cfg)
        }
        Command::Check {
            input,
            config,
            strict,
        } => {
            let overrides = ConfigOverrides {
                strict,
                ..ConfigOverrides::default()
            };
            let cfg = load_config(config.as_deref())?.apply(&overrides);
            cmd_check(&input, &cfg)
        }
    }
}

fn cmd_run(input_path: &Path, cfg: &MissionConfig) -> Result<i32> {
    let input = load_input(input_path)?;
    let mut writer = ReportWriter::new(
        io::stdout().lock(),
        io::stderr().lock(),
        cfg.format,
        cfg.quiet_notices,
    );
    let result = run_mission(&input, cfg.unknown_directives, &mut writer);
    let flushed = writer.finish().map(drop);
    finish_run(result, flushed, &mut io::stderr().lock())
}

/// Report the mission result. A fatal input diagnostic is written before any
/// flush failure is surfaced.
fn finish_run(
    result: Result<MissionSummary, MissionError>,
    flushed: io::Result<()>,
    stderr: &mut dyn Write,
) -> Result<i32> {
    let code = match result {
        Ok(_) => exit_codes::OK,
        Err(MissionError::Input(err)) => {
            writeln!(stderr, "{}", fatal_notice(&err)).context("write diagnostic")?;
            exit_codes::INVALID_INPUT
        }
        Err(MissionError::Report(err)) => return Err(err).context("write mission report"),
    };
    flushed.context("flush mission report")?;
    Ok(code)
}

/// Undecodable input is malformed input; any other failure is an I/O problem.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.is::<FromUtf8Error>()) {
        exit_codes::INVALID_INPUT
    } else {
        exit_codes::IO
    }
}

fn cmd_check(input_path: &Path, cfg: &MissionConfig) -> Result<i32> {
    let input = load_input(input_path)?;
    match check_mission(&input, cfg.unknown_directives) {
        Ok(rovers) => {
            println!("ok: {} rovers", rovers);
            Ok(exit_codes::OK)
        }
        Err(err) => {
            eprintln!("{}", fatal_notice(&err));
            Ok(exit_codes::INVALID_INPUT)
        }
    }
}
