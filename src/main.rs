// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};

use scriptline::app_config::{self, Config};
use scriptline::app_controller::{Controller, RenderOutcome};
use scriptline::ElementKind;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the element kind of every line
    Classify {
        /// Script file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rewrite one line of text for an element kind
    Format {
        /// Target element kind (e.g. scene_heading, character, transition)
        #[arg(short, long)]
        kind: ElementKind,

        /// Line text
        #[arg(value_name = "TEXT", num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Lay a script out as a plain-text screenplay
    Render {
        /// Script file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Write rendered files into this directory instead of printing
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force_overwrite: bool,
    },

    /// Show scene, character and page counts
    Stats {
        /// Script file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the element kinds with their descriptions
    Kinds,

    /// Generate shell completions for scriptline
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// scriptline - screenplay line classifier and formatter
#[derive(Parser, Debug)]
#[command(name = "scriptline")]
#[command(version)]
#[command(about = "Classify, format and lay out screenplay text")]
#[command(long_about = "scriptline recognises screenplay elements line by line and rewrites them to screenplay conventions.

EXAMPLES:
    scriptline classify pilot.fountain              # Element kind of every line
    scriptline classify --json drafts/              # JSON for every script in a folder
    scriptline format -k scene_heading kitchen      # Prints INT. KITCHEN
    scriptline render pilot.fountain                # Plain-text layout to stdout
    scriptline render -o out/ -f drafts/            # Render a folder, overwriting
    scriptline stats pilot.fountain                 # Scenes, characters, pages
    scriptline completions bash > scriptline.bash   # Generate bash completions

CONFIGURATION:
    Settings are read from scriptline.json by default. If the file doesn't
    exist, a default one is created.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "scriptline.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and tag for a level
    fn decoration(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, tag) = Self::decoration(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                colour, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "scriptline", &mut std::io::stdout());
        return Ok(());
    }

    // Command line level wins over the config file
    let cli_level: Option<app_config::LogLevel> = cli.log_level.clone().map(Into::into);
    if let Some(level) = cli_level {
        log::set_max_level(level.into());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    if let Some(level) = cli_level {
        config.log_level = level;
    }
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    match cli.command {
        Commands::Classify { path, json } => run_classify(&controller, &path, json),
        Commands::Format { kind, text } => {
            println!("{}", controller.format_line(kind, &text.join(" ")));
            Ok(())
        }
        Commands::Render { path, output_dir, force_overwrite } => {
            run_render(&controller, &path, output_dir.as_deref(), force_overwrite)
        }
        Commands::Stats { path, json } => run_stats(&controller, &path, json),
        Commands::Kinds => {
            for kind in ElementKind::ALL {
                println!("{:<14} {:<14} {}", kind.as_key(), kind.label(), kind.description());
            }
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn run_classify(controller: &Controller, path: &Path, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&classify_json(controller, path)?)?);
        return Ok(());
    }

    let scripts = Controller::collect_inputs(path)?;
    let many = path.is_dir();

    for script in &scripts {
        let lines = controller.classify_file(script)?;
        if many {
            println!("==> {} <==", script.display());
        }
        for line in &lines {
            println!("{:>5}  {:<14} {}", line.line_index + 1, line.kind.as_key(), line.content);
        }
    }

    Ok(())
}

/// Bare lines for a file PATH, one `{path, lines}` entry per script for a directory
fn classify_json(controller: &Controller, path: &Path) -> Result<serde_json::Value> {
    let scripts = Controller::collect_inputs(path)?;
    if !path.is_dir() {
        return Ok(json!(controller.classify_file(path)?));
    }

    let mut documents = Vec::with_capacity(scripts.len());
    for script in &scripts {
        documents.push(json!({ "path": script, "lines": controller.classify_file(script)? }));
    }
    Ok(serde_json::Value::Array(documents))
}

fn run_render(
    controller: &Controller,
    path: &Path,
    output_dir: Option<&Path>,
    force_overwrite: bool,
) -> Result<()> {
    if path.is_dir() {
        controller.render_folder(path, output_dir, force_overwrite)?;
        return Ok(());
    }

    match output_dir {
        Some(dir) => match controller.render_file(path, dir, force_overwrite)? {
            RenderOutcome::Written(output) => info!("Success: {:?}", output),
            RenderOutcome::Skipped(_) => {}
        },
        None => {
            let content = scriptline::file_utils::FileManager::read_to_string(path)?;
            print!("{}", controller.render_text(&content));
        }
    }

    Ok(())
}

fn run_stats(controller: &Controller, path: &Path, as_json: bool) -> Result<()> {
    let scripts = Controller::collect_inputs(path)?;
    let many = path.is_dir();
    let mut documents = Vec::with_capacity(scripts.len());

    for script in &scripts {
        let stats = controller.stats_file(script)?;
        if as_json {
            documents.push(json!({ "path": script, "stats": stats }));
        } else {
            if many {
                println!("==> {} <==", script.display());
            }
            print!("{}", stats);
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&documents)?);
    }

    Ok(())
}
