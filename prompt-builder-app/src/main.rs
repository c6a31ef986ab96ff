mod cli;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, FrontendKind, LogSink};
use env_logger::{Target, WriteStyle};
use log::{LevelFilter, info};
use prompt_builder::{ComplexPrompt, Frontend, Questionnaire, SessionError};
use prompt_builder_dialoguer::DialoguerFrontend;
use prompt_builder_ratatui::RatatuiFrontend;

fn setup_logging(cli: &Cli) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    match cli.log_sink() {
        LogSink::Stderr => {
            builder.filter_level(cli.log_level()).parse_default_env();
        }
        LogSink::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .filter_level(cli.log_level())
                .parse_default_env()
                .write_style(WriteStyle::Never)
                .target(Target::Pipe(Box::new(file)));
        }
        LogSink::Disabled => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli).context("Failed to setup logging")?;

    let export = cli.export();
    let mut session =
        Questionnaire::new(ComplexPrompt).context("Failed to load the questionnaire")?;

    info!("starting {:?} front end, export to {}", cli.frontend, export.path().display());

    let result = match cli.frontend {
        FrontendKind::Wizard => {
            let frontend = if cli.plain {
                DialoguerFrontend::plain()
            } else {
                DialoguerFrontend::new()
            };
            frontend
                .with_export(export)
                .run(&mut session)
                .map_err(SessionError::from)
        }
        FrontendKind::Tui => RatatuiFrontend::new()
            .with_export(export)
            .run(&mut session)
            .map_err(SessionError::from),
    };

    match result {
        Ok(()) => {}
        Err(SessionError::Cancelled) => {
            info!("session cancelled");
            eprintln!("Cancelado.");
            return Ok(());
        }
        Err(err) => return Err(err).context("Session failed"),
    }

    if cli.print
        && let Some(output) = session.output()
    {
        println!("{output}");
    }

    Ok(())
}
