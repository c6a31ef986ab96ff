//! # prompt-builder-ratatui
//!
//! Ratatui wizard front end for prompt-builder.
//!
//! Presents one question per screen with a progress bar, keyboard
//! navigation back and forth, and a result screen from which the rendered
//! prompt can be copied, saved or discarded for a new one.
//!
//! ## Keys
//!
//! - `Enter` / `Tab` - next question (`Enter` adds a line break in long answers)
//! - `Shift+Tab` - previous question
//! - `↑`/`↓` and `Space` - pick options
//! - `Esc` - cancel
//!
//! ## Example
//!
//! ```rust,no_run
//! use prompt_builder::{ComplexPrompt, Frontend, Questionnaire};
//! use prompt_builder_ratatui::RatatuiFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = Questionnaire::new(ComplexPrompt)?;
//!     RatatuiFrontend::new().with_title("Prompts").run(&mut session)?;
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiError, RatatuiFrontend, Theme};
