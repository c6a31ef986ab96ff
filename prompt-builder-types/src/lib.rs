//! Core types for the prompt-builder crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `QuestionnaireDefinition` - The static question table plus intro/result text
//! - `Question` and `QuestionKind` - Individual questions and their input kinds
//! - `Answer` and `AnswerSet` - Collected answers keyed by `QuestionId`
//! - `Template` trait - Turns a completed `AnswerSet` into the rendered document

mod question_id;
pub use question_id::QuestionId;

mod answer;
pub use answer::Answer;

mod answers;
pub use answers::{AnswerError, AnswerSet};

mod question;
pub use question::{Choices, Question, QuestionKind};

mod definition;
pub use definition::{DefinitionError, QuestionnaireDefinition};

mod error;
pub use error::SessionError;

mod traits;
pub use traits::Template;
