//! # prompt-builder
//!
//! A guided questionnaire that collects answers across a fixed sequence of
//! questions and renders them into a structured prompt document.
//! Frontend-agnostic.
//!
//! ## Usage
//!
//! ```rust
//! use prompt_builder::{Advance, ComplexPrompt, Phase, Questionnaire};
//!
//! let mut session = Questionnaire::new(ComplexPrompt).unwrap();
//! session.start();
//!
//! // The first question is required: advancing without an answer is refused.
//! assert!(!session.can_advance());
//! assert!(matches!(session.advance(), Advance::Blocked { .. }));
//!
//! session.set_text("Gerar ideias de nomes para um produto");
//! assert_eq!(session.advance(), Advance::Moved { index: 1 });
//! assert_eq!(session.phase(), Phase::Collecting);
//! ```
//!
//! ## Pieces
//!
//! - [`Questionnaire`] - the controller: phase, position, answers, output
//! - [`ComplexPrompt`] - the question table and the prompt renderer
//! - [`FileExport`] and `Clipboard` - one-shot output sinks
//! - [`Frontend`] - trait implemented by the interactive front ends:
//!   - `prompt-builder-dialoguer` - CLI prompts via dialoguer
//!   - `prompt-builder-ratatui` - full-screen TUI wizard

// Re-export all types from prompt-builder-types
pub use prompt_builder_types::*;

mod controller;
pub use controller::{Advance, Phase, Questionnaire};

pub mod complex_prompt;
pub use complex_prompt::ComplexPrompt;

mod export;
#[cfg(feature = "clipboard")]
pub use export::Clipboard;
pub use export::{CONTENT_TYPE, DEFAULT_FILE_NAME, ExportError, FileExport, OutputSink};

mod frontend;
pub use frontend::Frontend;

// Scripted front end for running questionnaires without user interaction
mod scripted;
pub use scripted::{ScriptError, ScriptedFrontend};
