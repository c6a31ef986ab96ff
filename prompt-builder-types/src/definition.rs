use std::collections::HashSet;

use crate::{Question, QuestionId};

/// Error type for malformed questionnaire definitions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DefinitionError {
    #[error("Questionnaire has no questions")]
    Empty,

    #[error("Duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("Choice question '{0}' declares no options")]
    NoOptions(QuestionId),
}

/// The static structure of a questionnaire.
///
/// A questionnaire is an ordered list of questions plus the texts shown
/// around it. It's presentation-agnostic and never mutated by a session.
#[derive(Debug, Clone)]
pub struct QuestionnaireDefinition {
    /// Title shown on the intro screen.
    pub title: String,

    /// Optional message shown before the questionnaire starts.
    pub prelude: Option<String>,

    /// All questions in presentation order.
    pub questions: Vec<Question>,

    /// Optional message shown with the rendered result.
    pub epilogue: Option<String>,
}

impl QuestionnaireDefinition {
    /// Create a new definition with the given questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Check if the questionnaire has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check the definition can drive a session: at least one question,
    /// unique ids, and options on every choice question.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.questions.is_empty() {
            return Err(DefinitionError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id()) {
                return Err(DefinitionError::DuplicateId(question.id().clone()));
            }
            if let Some(choices) = question.kind().choices()
                && choices.is_empty()
            {
                return Err(DefinitionError::NoOptions(question.id().clone()));
            }
        }

        Ok(())
    }
}
