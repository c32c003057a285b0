use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minesweeper_report::{
    config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, InputSource, OutputSink},
    report::ReportFormat,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Writes the adjacent-mine counts of every field in the input
#[derive(Parser)]
#[command(name = "minesweeper-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minesweeper field hint report generator", long_about = None)]
struct Cli {
    /// Field descriptions to read, `-` for stdin
    #[arg(short, long, env = "MINESWEEPER_INPUT", default_value = DEFAULT_INPUT)]
    input: String,

    /// Report file to append to, `-` for stdout
    #[arg(short, long, env = "MINESWEEPER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: String,

    #[arg(short, long, env = "MINESWEEPER_FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Empty the report file before writing
    #[arg(long)]
    truncate: bool,

    /// JSON configuration file, used instead of the options above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            input: InputSource::parse(&self.input),
            output: OutputSink::parse(&self.output),
            format: self.format,
            truncate: self.truncate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout may carry the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => cli.to_config(),
    };

    let summary = minesweeper_report::run(&config)
        .with_context(|| format!("processing {} into {}", config.input, config.output))?;
    info!(
        "Wrote {} report blocks to {}",
        summary.fields, config.output
    );

    Ok(())
}
