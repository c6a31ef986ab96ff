//! Complex prompt wizard. Run with: cargo run --example complex_prompt

use prompt_builder::{ComplexPrompt, Frontend, Questionnaire};
use prompt_builder_dialoguer::DialoguerFrontend;

fn main() -> anyhow::Result<()> {
    let mut session = Questionnaire::new(ComplexPrompt)?;
    DialoguerFrontend::new().run(&mut session)?;
    Ok(())
}
