//! Dialoguer front end implementation for the Frontend trait.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Editor, Input, MultiSelect, Select};
use log::debug;
use prompt_builder::{
    Advance, Choices, Clipboard, FileExport, Frontend, OutputSink, Phase, Question, QuestionKind,
    Questionnaire, SessionError, Template,
};
use thiserror::Error;

/// Error type for the Dialoguer front end.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the session (e.g., pressed Ctrl+C or declined to start).
    #[error("Session cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for SessionError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SessionError::Cancelled,
            other => SessionError::frontend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

const NEXT: &str = "Próxima";
const GENERATE: &str = "Gerar Prompt";
const BACK: &str = "Voltar";
const OPTIONAL_SUFFIX: &str = "(Opcional)";
const REQUIRED_NOTICE: &str = "Esta pergunta é obrigatória. Responda antes de continuar.";

/// Actions offered once the prompt is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultAction {
    Copy,
    Save,
    Restart,
    Quit,
}

impl ResultAction {
    const ALL: [Self; 4] = [Self::Copy, Self::Save, Self::Restart, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Copy => "Copiar Prompt",
            Self::Save => "Baixar (.txt)",
            Self::Restart => "Novo Prompt",
            Self::Quit => "Sair",
        }
    }
}

/// Dialoguer front end for interactive CLI prompts.
///
/// This front end uses the `dialoguer` library to present one question at
/// a time, followed by a next/back menu, in a command-line interface.
#[derive(Debug, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
    /// Where "Baixar (.txt)" writes the prompt.
    export: FileExport,
}

impl Default for DialoguerFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerFrontend {
    /// Create a new Dialoguer front end with default (colorful) theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            export: FileExport::new(),
        }
    }

    /// Create a front end with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            ..Self::new()
        }
    }

    /// Set the file export used by the result menu.
    pub fn with_export(mut self, export: FileExport) -> Self {
        self.export = export;
        self
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn intro<T: Template>(&self, questionnaire: &mut Questionnaire<T>) -> Result<(), DialoguerError> {
        let definition = questionnaire.definition();
        println!();
        println!("{}", definition.title);
        if let Some(prelude) = &definition.prelude {
            println!();
            println!("{prelude}");
        }
        println!();

        let theme = self.theme();
        let start = Confirm::with_theme(theme.as_ref())
            .with_prompt("Começar?")
            .default(true)
            .interact()
            .map_err(prompt_error)?;

        if !start {
            return Err(DialoguerError::Cancelled);
        }
        questionnaire.start();
        Ok(())
    }

    /// Ask the current question, then let the user move on or go back.
    fn ask_current<T: Template>(
        &self,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<(), DialoguerError> {
        let question = questionnaire.current_question().clone();
        let (position, total) = questionnaire.progress();

        println!();
        println!(
            "Pergunta {position} de {total} ({}%)",
            questionnaire.percent()
        );

        let prompt = prompt_text(&question);
        match question.kind() {
            QuestionKind::ShortText => self.ask_short_text(&prompt, questionnaire)?,
            QuestionKind::LongText => self.ask_long_text(&prompt, questionnaire)?,
            QuestionKind::SingleChoice(choices) => {
                self.ask_single_choice(&prompt, choices, questionnaire)?
            }
            QuestionKind::MultiChoice(choices) => {
                self.ask_multi_choice(&prompt, choices, questionnaire)?
            }
        }

        self.navigate(questionnaire)
    }

    fn ask_short_text<T: Template>(
        &self,
        prompt: &str,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<(), DialoguerError> {
        let current = current_text(questionnaire);
        let theme = self.theme();

        let value: String = Input::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        questionnaire.set_text(value);
        Ok(())
    }

    fn ask_long_text<T: Template>(
        &self,
        prompt: &str,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<(), DialoguerError> {
        println!("{prompt}");
        println!("  (o editor será aberto; salve e feche para continuar)");

        let current = current_text(questionnaire);
        match Editor::new().edit(&current) {
            Ok(Some(value)) => {
                questionnaire.set_text(value.trim_end_matches(['\r', '\n']));
            }
            Ok(None) => {
                // Editor closed without saving: keep whatever was there
                debug!("editor aborted, answer unchanged");
            }
            Err(e) => return Err(prompt_error(e)),
        }
        Ok(())
    }

    fn ask_single_choice<T: Template>(
        &self,
        prompt: &str,
        choices: &Choices,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<(), DialoguerError> {
        let default = questionnaire
            .current_answer()
            .and_then(|a| a.as_choice())
            .and_then(|label| choices.position(label))
            .unwrap_or(0);

        let theme = self.theme();
        let selection = Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(choices.options())
            .default(default)
            .interact()
            .map_err(prompt_error)?;

        questionnaire.set_single_choice(&choices.options()[selection]);
        Ok(())
    }

    fn ask_multi_choice<T: Template>(
        &self,
        prompt: &str,
        choices: &Choices,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<(), DialoguerError> {
        let selected = questionnaire
            .current_answer()
            .and_then(|a| a.as_choices())
            .unwrap_or(&[]);
        let defaults: Vec<bool> = choices
            .options()
            .iter()
            .map(|option| selected.contains(option))
            .collect();

        let theme = self.theme();
        let picked = MultiSelect::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(choices.options())
            .defaults(&defaults)
            .interact()
            .map_err(prompt_error)?;

        // Drop deselected options first so previously chosen ones keep their order.
        // Untouched questions stay unanswered.
        for (idx, option) in choices.options().iter().enumerate() {
            if defaults[idx] && !picked.contains(&idx) {
                questionnaire.toggle_choice(option, false);
            }
        }
        for idx in picked {
            questionnaire.toggle_choice(&choices.options()[idx], true);
        }
        Ok(())
    }

    fn navigate<T: Template>(
        &self,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<(), DialoguerError> {
        let forward = if questionnaire.is_last() { GENERATE } else { NEXT };

        let go_back = if questionnaire.index() == 0 {
            false
        } else {
            let theme = self.theme();
            let choice = Select::with_theme(theme.as_ref())
                .items(&[forward, BACK])
                .default(0)
                .interact()
                .map_err(prompt_error)?;
            choice == 1
        };

        if go_back {
            questionnaire.retreat();
            return Ok(());
        }

        if let Advance::Blocked { id } = questionnaire.advance() {
            debug!("question {id} still unanswered");
            println!("{REQUIRED_NOTICE}");
        }
        Ok(())
    }

    fn show_result<T: Template>(&self, questionnaire: &Questionnaire<T>) {
        let definition = questionnaire.definition();
        println!();
        if let Some(epilogue) = &definition.epilogue {
            println!("{epilogue}");
            println!();
        }
        println!("{}", questionnaire.output().unwrap_or_default());
        println!();
    }

    /// Offer the result actions until the user starts over or quits.
    ///
    /// Returns `true` when the user quits.
    fn result_menu<T: Template>(
        &self,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<bool, DialoguerError> {
        let output = questionnaire.output().unwrap_or_default().to_string();
        let labels: Vec<&str> = ResultAction::ALL.iter().map(|a| a.label()).collect();

        loop {
            let theme = self.theme();
            let idx = Select::with_theme(theme.as_ref())
                .items(&labels)
                .default(0)
                .interact()
                .map_err(prompt_error)?;

            match ResultAction::ALL[idx] {
                ResultAction::Copy => match Clipboard.deliver(&output) {
                    Ok(()) => println!("Copiado!"),
                    Err(e) => println!("Erro: {e}"),
                },
                ResultAction::Save => match self.export.deliver(&output) {
                    Ok(()) => println!("Salvo em {}", self.export.describe()),
                    Err(e) => println!("Erro: {e}"),
                },
                ResultAction::Restart => {
                    questionnaire.reset();
                    return Ok(false);
                }
                ResultAction::Quit => return Ok(true),
            }
        }
    }
}

fn prompt_text(question: &Question) -> String {
    if question.is_required() {
        question.ask().to_string()
    } else {
        format!("{} {OPTIONAL_SUFFIX}", question.ask())
    }
}

fn current_text<T: Template>(questionnaire: &Questionnaire<T>) -> String {
    questionnaire
        .current_answer()
        .and_then(|a| a.as_text())
        .unwrap_or_default()
        .to_string()
}

impl Frontend for DialoguerFrontend {
    type Error = DialoguerError;

    fn run<T: Template>(&self, questionnaire: &mut Questionnaire<T>) -> Result<(), Self::Error> {
        loop {
            match questionnaire.phase() {
                Phase::Intro => self.intro(questionnaire)?,
                Phase::Collecting => self.ask_current(questionnaire)?,
                Phase::Done => {
                    self.show_result(questionnaire);
                    if self.result_menu(questionnaire)? {
                        return Ok(());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_builder::ComplexPrompt;

    #[test]
    fn frontend_creation() {
        let _frontend = DialoguerFrontend::new();
        let plain = DialoguerFrontend::plain();
        assert!(!plain.colorful);

        let custom = DialoguerFrontend::new().with_export(FileExport::new().with_dir("/tmp"));
        assert!(custom.export.path().starts_with("/tmp"));
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Session cancelled by user");
    }

    #[test]
    fn converts_to_session_error() {
        assert!(SessionError::from(DialoguerError::Cancelled).is_cancelled());

        let err = DialoguerError::Dialoguer(dialoguer::Error::IO(std::io::Error::other("eof")));
        assert!(matches!(SessionError::from(err), SessionError::Frontend(_)));
    }

    #[test]
    fn interrupted_io_is_cancellation() {
        let err = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(prompt_error(err), DialoguerError::Cancelled));

        let err = dialoguer::Error::IO(std::io::Error::other("broken pipe"));
        assert!(matches!(prompt_error(err), DialoguerError::Dialoguer(_)));
    }

    #[test]
    fn optional_questions_are_marked() {
        let definition = ComplexPrompt.definition();
        let prompts: Vec<String> = definition.questions().iter().map(prompt_text).collect();

        assert_eq!(prompts[0], "Qual é o objetivo principal do seu prompt?");
        assert_eq!(
            prompts[5],
            "Há alguma restrição ou limitação importante? (Opcional)"
        );
    }

    #[test]
    fn result_actions_labels() {
        let labels: Vec<&str> = ResultAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec!["Copiar Prompt", "Baixar (.txt)", "Novo Prompt", "Sair"]
        );
    }
}
