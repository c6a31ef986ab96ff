//! Scripted front end for running questionnaires without user interaction.
//!
//! `ScriptedFrontend` answers every question from a pre-defined table and
//! advances through the whole questionnaire. This is useful for testing
//! templates end to end.
//!
//! # Example
//!
//! ```rust
//! use prompt_builder::{ComplexPrompt, Frontend, Phase, Questionnaire, ScriptedFrontend};
//!
//! let mut session = Questionnaire::new(ComplexPrompt).unwrap();
//! ScriptedFrontend::new()
//!     .with_text("objetivo", "Resumir artigos")
//!     .with_text("audiencia", "Pesquisadores")
//!     .with_text("contexto", "Revisão bibliográfica")
//!     .with_choice("tom", "Técnico e detalhado")
//!     .with_choice("formato", "Lista com marcadores")
//!     .with_choice("comprimento", "Curta (3-5 parágrafos)")
//!     .with_choice("perspectiva", "Impessoal")
//!     .run(&mut session)
//!     .unwrap();
//!
//! assert_eq!(session.phase(), Phase::Done);
//! assert!(session.output().unwrap().contains("Resumir artigos"));
//! ```

use std::collections::HashMap;

use log::debug;
use prompt_builder_types::{Answer, QuestionId, Template};

use crate::{Advance, Frontend, Phase, Questionnaire};

/// A front end that replays pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    answers: HashMap<QuestionId, Answer>,
}

/// Error type for ScriptedFrontend.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScriptError {
    #[error("Required question '{0}' has no scripted answer")]
    Blocked(QuestionId),

    #[error("Scripted answer for '{0}' does not fit the question")]
    Rejected(QuestionId),
}

impl ScriptedFrontend {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Add an answer for a given question.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, answer: Answer) -> Self {
        self.answers.insert(id.into(), answer);
        self
    }

    /// Add a text answer.
    pub fn with_text(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, Answer::Text(value.into()))
    }

    /// Add a single choice answer.
    pub fn with_choice(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, Answer::Choice(value.into()))
    }

    /// Add a multiple choice answer.
    pub fn with_choices<I, S>(self, id: impl Into<QuestionId>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_answer(
            id,
            Answer::Choices(values.into_iter().map(Into::into).collect()),
        )
    }
}

impl Frontend for ScriptedFrontend {
    type Error = ScriptError;

    fn run<T: Template>(&self, questionnaire: &mut Questionnaire<T>) -> Result<(), Self::Error> {
        questionnaire.start();

        while questionnaire.phase() == Phase::Collecting {
            let id = questionnaire.current_question().id().clone();

            if let Some(answer) = self.answers.get(&id)
                && !questionnaire.record(answer.clone())
            {
                return Err(ScriptError::Rejected(id));
            }

            match questionnaire.advance() {
                Advance::Blocked { id } => return Err(ScriptError::Blocked(id)),
                Advance::Moved { index } => debug!("script moved to question {index}"),
                Advance::Finished | Advance::Ignored => {}
            }
        }

        Ok(())
    }
}
