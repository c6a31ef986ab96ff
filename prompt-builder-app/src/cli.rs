//! CLI argument parsing for prompt-builder

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prompt_builder::FileExport;

#[derive(Parser, Debug)]
#[command(name = "prompt-builder")]
#[command(author, version, about = "Build a structured prompt by answering guided questions", long_about = None)]
pub struct Cli {
    /// Interface used to ask the questions
    #[arg(short, long, value_enum, default_value_t = FrontendKind::Wizard)]
    pub frontend: FrontendKind,

    /// Disable colors in the wizard
    #[arg(long)]
    pub plain: bool,

    /// Directory the prompt is saved to (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name of the saved prompt (default: prompt-complexo.txt)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Print the final prompt to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Write logs to this file instead of stderr (required to get logs from the TUI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontendKind {
    /// Line-by-line prompts
    Wizard,
    /// Full-screen terminal UI
    Tui,
}

/// Where log records go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
    /// The TUI owns the terminal, so without a log file nothing is logged.
    Disabled,
}

impl Cli {
    /// File export configured from the output flags.
    pub fn export(&self) -> FileExport {
        let mut export = FileExport::new();
        if let Some(dir) = &self.output_dir {
            export = export.with_dir(dir.clone());
        }
        if let Some(name) = &self.file_name {
            export = export.with_file_name(name.clone());
        }
        export
    }

    /// Log destination for the chosen front end.
    pub fn log_sink(&self) -> LogSink {
        match (&self.log_file, self.frontend) {
            (Some(path), _) => LogSink::File(path.clone()),
            (None, FrontendKind::Tui) => LogSink::Disabled,
            (None, FrontendKind::Wizard) => LogSink::Stderr,
        }
    }

    /// Log level from the number of `-v` flags. `RUST_LOG` still overrides it.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
