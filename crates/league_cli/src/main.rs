//! League Tracker CLI
//!
//! Reads league commands from standard input or a script file and prints the
//! result of each one.

mod config;
mod formatter;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use league_core::{init_logging, LogSettings, Logic, SqliteLeagueRepository};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;

use config::{FileConfig, Overrides, Settings};
use session::SessionEnd;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "League Tracker - manage football players, teams and matches", long_about = None)]
#[command(version)]
struct Cli {
    /// League database file
    #[arg(long)]
    data_file: Option<PathBuf>,
    /// Directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,
    /// Config file (defaults to ~/.config/league_tracker/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Read commands from FILE instead of standard input
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => FileConfig::default_path()?,
    };
    let file_config = FileConfig::load(&config_path)?;
    let cwd = std::env::current_dir().context("Could not determine working directory")?;
    let settings = Settings::resolve(
        Overrides {
            data_file: cli.data_file,
            log_dir: cli.log_dir,
            log_level: cli.log_level,
        },
        file_config,
        &cwd,
    )?;

    init_logging(LogSettings::new(&settings.log_level, &settings.log_dir)?)
        .context("Failed to start logging")?;

    if let Some(dir) = settings.data_file.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory {:?}", dir))?;
    }
    let repo = SqliteLeagueRepository::open(&settings.data_file)
        .with_context(|| format!("Failed to open league file {:?}", settings.data_file))?;
    let mut logic = Logic::new(repo).context("Failed to load league")?;

    let mut stdout = io::stdout().lock();
    let end = match cli.script {
        Some(path) => {
            let script =
                File::open(&path).with_context(|| format!("Failed to open script {:?}", path))?;
            session::run(&mut logic, BufReader::new(script), &mut stdout)?
        }
        None => session::run(&mut logic, io::stdin().lock(), &mut stdout)?,
    };

    info!(
        "event=session_end module=cli status=ok reason={}",
        match end {
            SessionEnd::Exit => "exit",
            SessionEnd::EndOfInput => "end_of_input",
        }
    );
    Ok(())
}
