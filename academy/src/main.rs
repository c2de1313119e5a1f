//! Academy console examples.
//!
//! Without a subcommand, shows the launcher menu. `academy run <example>` jumps
//! straight into one example. All state lives in memory for one process run.

use std::path::{Path, PathBuf};

use academy::apps::{Academy, Example, launcher};
use academy::exit_codes;
use academy::io::config::{AcademyConfig, DEFAULT_CONFIG_PATH, load_config, write_config};
use academy::io::console::{StdConsole, is_end_of_input};
use academy::io::random::ThreadRandom;
use academy::logging;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "academy", version, about = "Menu-driven console examples")]
struct Cli {
    /// Path to the TOML config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single example without the launcher menu.
    Run {
        #[arg(value_enum)]
        example: Example,
    },
    /// Write the default config to `--config` if it does not exist yet.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => cmd_launcher(&cli.config),
        Some(Command::Run { example }) => cmd_run(&cli.config, example),
        Some(Command::InitConfig { force }) => cmd_init_config(&cli.config, force),
    }
}

fn cmd_launcher(config_path: &Path) -> Result<()> {
    let academy = load_academy(config_path)?;
    let mut console = StdConsole::stdio();
    let reason = launcher::session(academy).run(&mut console)?;
    info!(?reason, "launcher finished");
    Ok(())
}

fn cmd_run(config_path: &Path, example: Example) -> Result<()> {
    let mut academy = load_academy(config_path)?;
    let mut console = StdConsole::stdio();
    match example.run(&mut academy, &mut console) {
        Err(err) if is_end_of_input(&err) => {
            info!(?example, "input ended");
            Ok(())
        }
        other => other,
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        println!("config: kept existing {}", path.display());
        return Ok(());
    }
    write_config(path, &AcademyConfig::default())
        .with_context(|| format!("write default config {}", path.display()))?;
    println!("config: wrote {}", path.display());
    Ok(())
}

fn load_academy(config_path: &Path) -> Result<Academy> {
    let config = load_config(config_path).context("load config")?;
    Ok(Academy::new(config, Box::new(ThreadRandom)))
}
