//! Complex prompt TUI wizard. Run with: cargo run --example complex_prompt_tui

use prompt_builder::{ComplexPrompt, Frontend, Questionnaire};
use prompt_builder_ratatui::RatatuiFrontend;

fn main() -> anyhow::Result<()> {
    let mut session = Questionnaire::new(ComplexPrompt)?;
    RatatuiFrontend::new().run(&mut session)?;
    if let Some(output) = session.output() {
        println!("{output}");
    }
    Ok(())
}
