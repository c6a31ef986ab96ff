use crate::{AnswerSet, QuestionnaireDefinition};

/// A document template driven by a questionnaire.
///
/// The template owns both halves of the contract: the questions to ask and
/// the function that turns the collected answers into text. Both are
/// expected to be consistent, i.e. `render` only reads ids `definition`
/// declares.
pub trait Template {
    /// Returns the questionnaire structure (questions, prompts, intro and result text).
    fn definition(&self) -> QuestionnaireDefinition;

    /// Renders the answers into the final document.
    ///
    /// Must be pure: the same `AnswerSet` always yields byte-identical output.
    /// Missing answers are allowed and rendered as the template sees fit.
    fn render(&self, answers: &AnswerSet) -> String;
}
