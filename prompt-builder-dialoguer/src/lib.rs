//! # prompt-builder-dialoguer
//!
//! Dialoguer wizard front end for prompt-builder.
//!
//! This crate provides a command-line wizard interface for building a prompt
//! using the `dialoguer` library. Questions are presented step-by-step in a
//! classic CLI wizard style, with a next/back menu between questions and a
//! copy/save/restart menu once the prompt is rendered.
//!
//! ## Example
//!
//! ```rust,no_run
//! use prompt_builder::{ComplexPrompt, Frontend, Questionnaire};
//! use prompt_builder_dialoguer::DialoguerFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = Questionnaire::new(ComplexPrompt)?;
//!     DialoguerFrontend::new().run(&mut session)?;
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerFrontend};
