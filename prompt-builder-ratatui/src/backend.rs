//! Ratatui implementation of the `Frontend` trait.
//!
//! Provides a rich terminal UI with panels, a progress bar, keyboard
//! navigation between questions and a result screen with copy/save actions.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use prompt_builder::{
    Advance, Answer, Clipboard, FileExport, Frontend, OutputSink, Phase, QuestionKind,
    Questionnaire, SessionError, Template,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;

const OPTIONAL_SUFFIX: &str = "(Opcional)";
const REQUIRED_NOTICE: &str = "Esta pergunta é obrigatória. Responda antes de continuar.";
const COPIED: &str = "Copiado!";

/// Error type for the Ratatui front end.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the session (e.g., pressed Esc).
    #[error("Session cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RatatuiError> for SessionError {
    fn from(err: RatatuiError) -> Self {
        match err {
            RatatuiError::Cancelled => SessionError::Cancelled,
            other => SessionError::frontend(other),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI front end.
///
/// Questions are presented one at a time with progress tracking. Text edits
/// are recorded as they are typed, so moving back and forth never loses an
/// answer.
#[derive(Debug, Clone)]
pub struct RatatuiFrontend {
    /// Title shown at the top of the wizard. Defaults to the questionnaire title.
    title: Option<String>,
    /// Color theme for the UI.
    theme: Theme,
    /// Where the `s` key on the result screen saves the prompt.
    export: FileExport,
}

impl Default for RatatuiFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFrontend {
    /// Create a new Ratatui front end with default settings.
    pub fn new() -> Self {
        Self {
            title: None,
            theme: Theme::default(),
            export: FileExport::new(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set where the rendered prompt is saved.
    pub fn with_export(mut self, export: FileExport) -> Self {
        self.export = export;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop<T: Template>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        questionnaire: &mut Questionnaire<T>,
    ) -> Result<(), RatatuiError> {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| questionnaire.definition().title.clone());
        let clipboard = Clipboard::new();
        let sinks = Sinks {
            clipboard: &clipboard,
            file: &self.export,
        };

        let mut state = WizardState::default();
        state.load(questionnaire);

        loop {
            terminal.draw(|frame| draw(frame, &state, questionnaire, &self.theme, &title))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match state.handle_key(key, questionnaire, &sinks) {
                    Flow::Continue => {}
                    Flow::Quit => return Ok(()),
                    Flow::Cancel => return Err(RatatuiError::Cancelled),
                }
            }
        }
    }
}

impl Frontend for RatatuiFrontend {
    type Error = RatatuiError;

    fn run<T: Template>(&self, questionnaire: &mut Questionnaire<T>) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, questionnaire);
        self.restore_terminal(&mut terminal)?;
        result
    }
}

/// Destinations reachable from the result screen.
struct Sinks<'a> {
    clipboard: &'a dyn OutputSink,
    file: &'a dyn OutputSink,
}

/// What the event loop does after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

/// View state layered over the controller: edit buffer, list highlight,
/// result scroll and the status line. Answers live in the controller.
#[derive(Debug, Default)]
struct WizardState {
    /// Edit buffer of the current text question.
    input: String,
    /// Cursor position in `input`, in characters.
    cursor_pos: usize,
    /// Highlighted option of the current choice question.
    selected_option: usize,
    /// Vertical scroll of the result screen.
    scroll: u16,
    /// Feedback shown below the input or the result.
    status: Option<(StatusKind, String)>,
}

impl WizardState {
    /// Sync the view with the controller's current question.
    fn load<T: Template>(&mut self, questionnaire: &Questionnaire<T>) {
        self.input.clear();
        self.cursor_pos = 0;
        self.selected_option = 0;
        self.scroll = 0;
        self.status = None;

        if questionnaire.phase() != Phase::Collecting {
            return;
        }
        let question = questionnaire.current_question();
        match (question.kind(), questionnaire.current_answer()) {
            (QuestionKind::ShortText | QuestionKind::LongText, Some(Answer::Text(text))) => {
                self.input = text.clone();
                self.cursor_pos = self.input.chars().count();
            }
            (QuestionKind::SingleChoice(choices), Some(Answer::Choice(choice))) => {
                self.selected_option = choices.position(choice).unwrap_or(0);
            }
            _ => {}
        }
    }

    fn handle_key<T: Template>(
        &mut self,
        key: KeyEvent,
        questionnaire: &mut Questionnaire<T>,
        sinks: &Sinks<'_>,
    ) -> Flow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Cancel;
        }

        match questionnaire.phase() {
            Phase::Intro => match key.code {
                KeyCode::Enter => {
                    questionnaire.start();
                    self.load(questionnaire);
                    Flow::Continue
                }
                KeyCode::Esc | KeyCode::Char('q') => Flow::Cancel,
                _ => Flow::Continue,
            },
            Phase::Collecting => self.handle_question_key(key, questionnaire),
            Phase::Done => self.handle_result_key(key, questionnaire, sinks),
        }
    }

    fn handle_question_key<T: Template>(
        &mut self,
        key: KeyEvent,
        questionnaire: &mut Questionnaire<T>,
    ) -> Flow {
        let kind = questionnaire.current_question().kind().clone();
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => return Flow::Cancel,
            KeyCode::Tab => self.next_question(questionnaire),
            KeyCode::BackTab => self.prev_question(questionnaire),
            KeyCode::Enter => match &kind {
                QuestionKind::LongText => self.edit(KeyCode::Char('\n'), questionnaire),
                QuestionKind::SingleChoice(choices) => {
                    if let Some(option) = choices.options().get(self.selected_option) {
                        questionnaire.set_single_choice(option);
                    }
                    self.next_question(questionnaire);
                }
                _ => self.next_question(questionnaire),
            },
            KeyCode::Up if kind.is_choice() => {
                self.selected_option = self.selected_option.saturating_sub(1);
            }
            KeyCode::Down if kind.is_choice() => {
                let last = kind.choices().map_or(0, |c| c.len().saturating_sub(1));
                if self.selected_option < last {
                    self.selected_option += 1;
                }
            }
            KeyCode::Char(' ') if kind.is_choice() => {
                let Some(option) = kind
                    .choices()
                    .and_then(|c| c.options().get(self.selected_option))
                else {
                    return Flow::Continue;
                };
                match &kind {
                    QuestionKind::SingleChoice(_) => {
                        questionnaire.set_single_choice(option);
                    }
                    _ => {
                        let included = questionnaire
                            .current_answer()
                            .and_then(Answer::as_choices)
                            .is_some_and(|selected| selected.contains(option));
                        questionnaire.toggle_choice(option, !included);
                    }
                }
                self.status = None;
            }
            KeyCode::Backspace if kind.is_choice() || self.input.is_empty() => {
                self.prev_question(questionnaire);
            }
            code if kind.is_text() && plain => self.edit(code, questionnaire),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_result_key<T: Template>(
        &mut self,
        key: KeyEvent,
        questionnaire: &mut Questionnaire<T>,
        sinks: &Sinks<'_>,
    ) -> Flow {
        match key.code {
            KeyCode::Char('c') => self.deliver(questionnaire, sinks.clipboard, COPIED),
            KeyCode::Char('s') => {
                let saved = format!("Salvo em {}", sinks.file.describe());
                self.deliver(questionnaire, sinks.file, &saved);
            }
            KeyCode::Char('n') => {
                questionnaire.reset();
                self.load(questionnaire);
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn deliver<T: Template>(
        &mut self,
        questionnaire: &Questionnaire<T>,
        sink: &dyn OutputSink,
        success: &str,
    ) {
        let Some(output) = questionnaire.output() else {
            return;
        };
        debug!("delivering output to {}", sink.describe());
        self.status = Some(match sink.deliver(output) {
            Ok(()) => (StatusKind::Info, success.to_string()),
            Err(err) => (StatusKind::Error, err.to_string()),
        });
    }

    fn next_question<T: Template>(&mut self, questionnaire: &mut Questionnaire<T>) {
        match questionnaire.advance() {
            Advance::Moved { .. } => self.load(questionnaire),
            Advance::Finished => {
                info!("prompt rendered");
                self.load(questionnaire);
            }
            Advance::Blocked { .. } => {
                self.status = Some((StatusKind::Error, REQUIRED_NOTICE.to_string()));
            }
            Advance::Ignored => {}
        }
    }

    fn prev_question<T: Template>(&mut self, questionnaire: &mut Questionnaire<T>) {
        if questionnaire.retreat() {
            self.load(questionnaire);
        }
    }

    /// Apply an editing key to the buffer and record the new text.
    fn edit<T: Template>(&mut self, key: KeyCode, questionnaire: &mut Questionnaire<T>) {
        let changed = match key {
            KeyCode::Char(c) => {
                let at = self.byte_index();
                self.input.insert(at, c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                let at = self.byte_index();
                self.input.remove(at);
                true
            }
            KeyCode::Delete if self.cursor_pos < self.input.chars().count() => {
                let at = self.byte_index();
                self.input.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor_pos < self.input.chars().count() {
                    self.cursor_pos += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = self.input.chars().count();
                false
            }
            _ => false,
        };

        if changed {
            questionnaire.set_text(self.input.clone());
            self.status = None;
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Cursor line and column within the edit buffer.
    fn cursor_line_col(&self) -> (u16, u16) {
        let before: String = self.input.chars().take(self.cursor_pos).collect();
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |last| last.chars().count());
        (line as u16, col as u16)
    }
}

fn draw<T: Template>(
    frame: &mut Frame,
    state: &WizardState,
    questionnaire: &Questionnaire<T>,
    theme: &Theme,
    title: &str,
) {
    match questionnaire.phase() {
        Phase::Intro => draw_intro(frame, questionnaire, theme, title),
        Phase::Collecting => draw_question(frame, state, questionnaire, theme, title),
        Phase::Done => draw_result(frame, state, questionnaire, theme),
    }
}

fn draw_intro<T: Template>(
    frame: &mut Frame,
    questionnaire: &Questionnaire<T>,
    theme: &Theme,
    title: &str,
) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(theme.primary).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(inner);

    let prelude = questionnaire
        .definition()
        .prelude
        .clone()
        .unwrap_or_default();
    let text = format!("{title}\n\n{prelude}");
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered[1]);

    let help = Paragraph::new("Enter: Começar  Esc: Sair")
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center);
    frame.render_widget(help, centered[2]);
}

fn draw_question<T: Template>(
    frame: &mut Frame,
    state: &WizardState,
    questionnaire: &Questionnaire<T>,
    theme: &Theme,
    title: &str,
) {
    let area = frame.area();

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(area);

    // Header
    let header = Paragraph::new(title.to_string())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    // Progress - thin bar with text
    let (current, total) = questionnaire.progress();
    let progress_text = format!(
        " Pergunta {} de {} · {}% ",
        current,
        total,
        questionnaire.percent()
    );

    let progress_area = chunks[1];
    let bar_width = progress_area.width.saturating_sub(2);
    let text_width = progress_text.chars().count() as u16;

    let ratio = questionnaire.percent() as f32 / 100.0;
    let filled_width = (ratio * bar_width as f32) as u16;

    let bar_y = progress_area.y;
    let bar_x = progress_area.x + 1;

    // Background track
    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, bar_y, bar_width, 1));

    // Filled portion
    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, bar_y, filled_width, 1));
    }

    let text_x = bar_x + (bar_width.saturating_sub(text_width)) / 2;
    let text_widget = Paragraph::new(progress_text).style(Style::default().fg(theme.secondary));
    frame.render_widget(
        text_widget,
        Rect::new(text_x, bar_y + 1, text_width.min(bar_width), 1),
    );

    // Content area
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Question prompt
            Constraint::Min(5),    // Input area
            Constraint::Length(2), // Status line
        ])
        .split(chunks[2]);

    let question = questionnaire.current_question();
    let mut prompt_text = question.ask().to_string();
    if !question.is_required() {
        prompt_text = format!("{prompt_text} {OPTIONAL_SUFFIX}");
    }
    let prompt = Paragraph::new(prompt_text)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Pergunta ")
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, content_chunks[0]);

    let input_area = content_chunks[1];
    match question.kind() {
        QuestionKind::ShortText | QuestionKind::LongText => {
            let long = matches!(question.kind(), QuestionKind::LongText);
            let input_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(if long { " Resposta (texto longo) " } else { " Resposta " })
                .title_style(Style::default().fg(theme.secondary));

            let input_widget = Paragraph::new(state.input.clone())
                .style(Style::default().fg(theme.text))
                .block(input_block);
            frame.render_widget(input_widget, input_area);

            let (line, col) = state.cursor_line_col();
            let cursor_x = input_area.x + 1 + col;
            let cursor_y = input_area.y + 1 + line;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
        QuestionKind::SingleChoice(choices) => {
            let chosen = questionnaire.current_answer().and_then(Answer::as_choice);
            let items: Vec<ListItem> = choices
                .options()
                .iter()
                .enumerate()
                .map(|(i, opt)| {
                    let marker = if chosen == Some(opt.as_str()) { "(•)" } else { "( )" };
                    let style = if i == state.selected_option {
                        Style::default().fg(theme.highlight).bold()
                    } else {
                        Style::default().fg(theme.text)
                    };
                    ListItem::new(format!("  {marker} {opt}")).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(" Selecione uma opção ")
                        .title_style(Style::default().fg(theme.secondary)),
                )
                .highlight_symbol("► ");

            let mut list_state = ListState::default();
            list_state.select(Some(state.selected_option));
            frame.render_stateful_widget(list, input_area, &mut list_state);
        }
        QuestionKind::MultiChoice(choices) => {
            let selected = questionnaire
                .current_answer()
                .and_then(Answer::as_choices)
                .unwrap_or_default();
            let items: Vec<ListItem> = choices
                .options()
                .iter()
                .enumerate()
                .map(|(i, opt)| {
                    let is_selected = selected.contains(opt);
                    let checkbox = if is_selected { "[✓]" } else { "[ ]" };
                    let style = if i == state.selected_option {
                        Style::default().fg(theme.highlight).bold()
                    } else if is_selected {
                        Style::default().fg(theme.secondary)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    ListItem::new(format!("  {checkbox} {opt}")).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(format!(" {} selecionado(s) ", selected.len()))
                        .title_style(Style::default().fg(theme.secondary)),
                )
                .highlight_symbol("► ");

            let mut list_state = ListState::default();
            list_state.select(Some(state.selected_option));
            frame.render_stateful_widget(list, input_area, &mut list_state);
        }
    }

    draw_status(frame, state, theme, content_chunks[2]);

    // Help bar
    let forward = if questionnaire.is_last() { "Gerar Prompt" } else { "Próxima" };
    let help_text = match question.kind() {
        QuestionKind::SingleChoice(_) => {
            format!("↑/↓: Navegar  Enter: Escolher  Tab: {forward}  Shift+Tab: Voltar  Esc: Cancelar")
        }
        QuestionKind::MultiChoice(_) => {
            format!("↑/↓: Navegar  Space: Marcar  Enter: {forward}  Shift+Tab: Voltar  Esc: Cancelar")
        }
        QuestionKind::LongText => {
            format!("Enter: Nova linha  Tab: {forward}  Shift+Tab: Voltar  Esc: Cancelar")
        }
        QuestionKind::ShortText => {
            format!("Enter: {forward}  Shift+Tab: Voltar  Esc: Cancelar")
        }
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

fn draw_result<T: Template>(
    frame: &mut Frame,
    state: &WizardState,
    questionnaire: &Questionnaire<T>,
    theme: &Theme,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Output
            Constraint::Length(1), // Status line
            Constraint::Length(2), // Help
        ])
        .split(area);

    let heading = questionnaire
        .definition()
        .epilogue
        .clone()
        .unwrap_or_else(|| "Pronto".to_string());

    let output = Paragraph::new(questionnaire.output().unwrap_or_default().to_string())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success))
                .title(format!(" {heading} "))
                .title_style(Style::default().fg(theme.success).bold()),
        );
    frame.render_widget(output, chunks[0]);

    draw_status(frame, state, theme, chunks[1]);

    let help = Paragraph::new(
        "c: Copiar Prompt  s: Baixar (.txt)  n: Novo Prompt  ↑/↓: Rolar  q: Sair",
    )
    .style(Style::default().fg(theme.border))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(help, chunks[2]);
}

fn draw_status(frame: &mut Frame, state: &WizardState, theme: &Theme, area: Rect) {
    if let Some((kind, message)) = &state.status {
        let color = match kind {
            StatusKind::Info => theme.success,
            StatusKind::Error => theme.error,
        };
        let status = Paragraph::new(message.clone())
            .style(Style::default().fg(color).bold())
            .alignment(Alignment::Center);
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_builder::complex_prompt::{
        AUDIENCIA, COMPRIMENTO, CONTEXTO, ELEMENTOS, FORMATO, OBJETIVO, PERSPECTIVA, TOM,
    };
    use prompt_builder::{ComplexPrompt, QuestionId, ScriptedFrontend};
    use ratatui::backend::TestBackend;

    fn id(name: &str) -> QuestionId {
        QuestionId::from(name)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text<T: Template>(
        state: &mut WizardState,
        questionnaire: &mut Questionnaire<T>,
        sinks: &Sinks<'_>,
        text: &str,
    ) {
        for c in text.chars() {
            assert_eq!(
                state.handle_key(press(KeyCode::Char(c)), questionnaire, sinks),
                Flow::Continue
            );
        }
    }

    fn started() -> (WizardState, Questionnaire<ComplexPrompt>) {
        let mut questionnaire = Questionnaire::new(ComplexPrompt).unwrap();
        questionnaire.start();
        let mut state = WizardState::default();
        state.load(&questionnaire);
        (state, questionnaire)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn backend_creation() {
        let _backend = RatatuiFrontend::new();
        let _with_title = RatatuiFrontend::new().with_title("Test");
        let _with_theme = RatatuiFrontend::new().with_theme(Theme::default());
        let _with_export = RatatuiFrontend::new().with_export(FileExport::new());
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Cancelled;
        assert_eq!(err.to_string(), "Session cancelled by user");

        let err = RatatuiError::from(io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "I/O error: broken pipe");
        assert!(!SessionError::from(err).is_cancelled());
        assert!(SessionError::from(RatatuiError::Cancelled).is_cancelled());
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn enter_on_intro_starts_session() {
        let dir = tempfile::tempdir().unwrap();
        let export = FileExport::new().with_dir(dir.path());
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let mut questionnaire = Questionnaire::new(ComplexPrompt).unwrap();
        let mut state = WizardState::default();

        state.handle_key(press(KeyCode::Enter), &mut questionnaire, &sinks);
        assert_eq!(questionnaire.phase(), Phase::Collecting);
        assert_eq!(questionnaire.index(), 0);
    }

    #[test]
    fn typing_records_answer_immediately() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();

        type_text(&mut state, &mut questionnaire, &sinks, "Explicar ação");
        assert_eq!(questionnaire.answers().get_text(&id(OBJETIVO)).unwrap(), "Explicar ação");

        state.handle_key(press(KeyCode::Left), &mut questionnaire, &sinks);
        state.handle_key(press(KeyCode::Backspace), &mut questionnaire, &sinks);
        assert_eq!(questionnaire.answers().get_text(&id(OBJETIVO)).unwrap(), "Explicar aço");
    }

    #[test]
    fn required_question_blocks_with_notice() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();

        state.handle_key(press(KeyCode::Tab), &mut questionnaire, &sinks);
        assert_eq!(questionnaire.index(), 0);
        assert!(matches!(&state.status, Some((StatusKind::Error, _))));

        type_text(&mut state, &mut questionnaire, &sinks, "x");
        assert!(state.status.is_none());
        state.handle_key(press(KeyCode::Tab), &mut questionnaire, &sinks);
        assert_eq!(questionnaire.index(), 1);

        // audiencia is a short text question: Enter moves on
        type_text(&mut state, &mut questionnaire, &sinks, "y");
        state.handle_key(press(KeyCode::Enter), &mut questionnaire, &sinks);
        assert_eq!(questionnaire.index(), 2);
    }

    #[test]
    fn control_and_alt_chords_do_not_edit() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();
        type_text(&mut state, &mut questionnaire, &sinks, "ok");

        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(state.handle_key(ctrl_a, &mut questionnaire, &sinks), Flow::Continue);
        assert_eq!(state.handle_key(alt_x, &mut questionnaire, &sinks), Flow::Continue);

        let shifted = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT);
        state.handle_key(shifted, &mut questionnaire, &sinks);

        assert_eq!(state.input, "okK");
        assert_eq!(questionnaire.answers().get_text(&id(OBJETIVO)).unwrap(), "okK");
    }

    #[test]
    fn back_restores_previous_text() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();

        type_text(&mut state, &mut questionnaire, &sinks, "objetivo");
        state.handle_key(press(KeyCode::Tab), &mut questionnaire, &sinks);
        type_text(&mut state, &mut questionnaire, &sinks, "público");
        state.handle_key(press(KeyCode::BackTab), &mut questionnaire, &sinks);

        assert_eq!(questionnaire.index(), 0);
        assert_eq!(state.input, "objetivo");
        assert_eq!(state.cursor_pos, 8);
        assert_eq!(questionnaire.answers().get_text(&id(AUDIENCIA)).unwrap(), "público");
    }

    #[test]
    fn enter_in_long_text_inserts_newline() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();

        type_text(&mut state, &mut questionnaire, &sinks, "um");
        state.handle_key(press(KeyCode::Enter), &mut questionnaire, &sinks);
        type_text(&mut state, &mut questionnaire, &sinks, "dois");

        assert_eq!(questionnaire.index(), 0);
        assert_eq!(state.input, "um\ndois");
        assert_eq!(state.cursor_line_col(), (1, 4));
        assert_eq!(questionnaire.answers().get_text(&id(OBJETIVO)).unwrap(), "um\ndois");
    }

    #[test]
    fn single_choice_enter_selects_highlighted() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();
        for _ in 0..3 {
            type_text(&mut state, &mut questionnaire, &sinks, "x");
            state.handle_key(press(KeyCode::Tab), &mut questionnaire, &sinks);
        }
        assert_eq!(questionnaire.current_question().id().as_str(), TOM);

        state.handle_key(press(KeyCode::Down), &mut questionnaire, &sinks);
        state.handle_key(press(KeyCode::Enter), &mut questionnaire, &sinks);

        let second = questionnaire.definition().questions()[3].options()[1].clone();
        assert_eq!(questionnaire.answers().get_choice(&id(TOM)).unwrap(), second);
        assert_eq!(questionnaire.index(), 4);

        state.handle_key(press(KeyCode::BackTab), &mut questionnaire, &sinks);
        assert_eq!(state.selected_option, 1);
    }

    #[test]
    fn space_toggles_multi_choice() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();
        while questionnaire.current_question().id().as_str() != ELEMENTOS {
            if questionnaire.current_question().kind().is_text() {
                type_text(&mut state, &mut questionnaire, &sinks, "x");
                state.handle_key(press(KeyCode::Tab), &mut questionnaire, &sinks);
            } else {
                state.handle_key(press(KeyCode::Enter), &mut questionnaire, &sinks);
            }
        }

        let options = questionnaire.current_question().options().to_vec();
        state.handle_key(press(KeyCode::Down), &mut questionnaire, &sinks);
        state.handle_key(press(KeyCode::Char(' ')), &mut questionnaire, &sinks);
        state.handle_key(press(KeyCode::Up), &mut questionnaire, &sinks);
        state.handle_key(press(KeyCode::Char(' ')), &mut questionnaire, &sinks);
        assert_eq!(
            questionnaire.answers().get_choices(&id(ELEMENTOS)).unwrap(),
            &[options[1].clone(), options[0].clone()][..]
        );

        state.handle_key(press(KeyCode::Char(' ')), &mut questionnaire, &sinks);
        assert_eq!(
            questionnaire.answers().get_choices(&id(ELEMENTOS)).unwrap(),
            &[options[1].clone()][..]
        );
    }

    #[test]
    fn result_screen_saves_and_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let export = FileExport::new().with_dir(dir.path());
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();
        while questionnaire.phase() == Phase::Collecting {
            if questionnaire.current_question().kind().is_text() {
                type_text(&mut state, &mut questionnaire, &sinks, "x");
                state.handle_key(press(KeyCode::Tab), &mut questionnaire, &sinks);
            } else {
                state.handle_key(press(KeyCode::Enter), &mut questionnaire, &sinks);
            }
        }
        assert_eq!(questionnaire.phase(), Phase::Done);

        state.handle_key(press(KeyCode::Char('s')), &mut questionnaire, &sinks);
        let written = std::fs::read_to_string(export.path()).unwrap();
        assert_eq!(written, questionnaire.output().unwrap());
        assert!(matches!(&state.status, Some((StatusKind::Info, _))));

        state.handle_key(press(KeyCode::Char('n')), &mut questionnaire, &sinks);
        assert_eq!(questionnaire.phase(), Phase::Intro);
        assert!(questionnaire.answers().is_empty());
        assert!(state.status.is_none());
    }

    #[test]
    fn escape_cancels_and_q_quits() {
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();
        assert_eq!(
            state.handle_key(press(KeyCode::Esc), &mut questionnaire, &sinks),
            Flow::Cancel
        );

        let mut done = Questionnaire::new(ComplexPrompt).unwrap();
        ScriptedFrontend::new()
            .with_text(OBJETIVO, "a")
            .with_text(AUDIENCIA, "b")
            .with_text(CONTEXTO, "c")
            .with_choice(TOM, "Profissional e formal")
            .with_choice(FORMATO, "Texto narrativo")
            .with_choice(COMPRIMENTO, "Curta (3-5 parágrafos)")
            .with_choice(PERSPECTIVA, "Primeira pessoa (eu/nós)")
            .run(&mut done)
            .unwrap();
        assert_eq!(
            state.handle_key(press(KeyCode::Char('q')), &mut done, &sinks),
            Flow::Quit
        );
    }

    #[test]
    fn draws_question_screen() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let (state, questionnaire) = started();

        terminal
            .draw(|frame| draw(frame, &state, &questionnaire, &Theme::default(), "Prompts"))
            .unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("Pergunta 1 de 11"));
        assert!(screen.contains("9%"));
        assert!(screen.contains("Prompts"));
    }

    #[test]
    fn draws_optional_suffix() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let export = FileExport::new();
        let sinks = Sinks {
            clipboard: &export,
            file: &export,
        };
        let (mut state, mut questionnaire) = started();
        while questionnaire.current_question().is_required() {
            if questionnaire.current_question().kind().is_text() {
                type_text(&mut state, &mut questionnaire, &sinks, "x");
                state.handle_key(press(KeyCode::Tab), &mut questionnaire, &sinks);
            } else {
                state.handle_key(press(KeyCode::Enter), &mut questionnaire, &sinks);
            }
        }

        terminal
            .draw(|frame| draw(frame, &state, &questionnaire, &Theme::default(), "Prompts"))
            .unwrap();
        assert!(screen_text(&terminal).contains(OPTIONAL_SUFFIX));
    }
}
