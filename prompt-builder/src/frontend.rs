use prompt_builder_types::Template;

use crate::Questionnaire;

/// Trait for front ends that drive a questionnaire session.
///
/// A front end decides how questions are presented (line-oriented prompts,
/// a full-screen TUI, a script) and feeds user input into the controller.
/// The controller stays the single owner of position and answers.
pub trait Frontend {
    /// The error type for this front end.
    type Error: Into<anyhow::Error>;

    /// Run the session from its current phase until the user is done with
    /// the rendered output.
    ///
    /// # Returns
    /// * `Ok(())` once the user quits with a rendered output
    /// * `Err` on cancellation or front-end failure
    fn run<T: Template>(&self, questionnaire: &mut Questionnaire<T>) -> Result<(), Self::Error>;
}
