//! The questionnaire controller: a linear state machine over a static question list.

use log::debug;
use prompt_builder_types::{
    Answer, AnswerSet, DefinitionError, Question, QuestionKind, QuestionnaireDefinition, Template,
};

/// Coarse lifecycle stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the intro, waiting for `start()`.
    Intro,
    /// Asking questions.
    Collecting,
    /// All questions traversed, output rendered.
    Done,
}

/// Outcome of [`Questionnaire::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at `index`.
    Moved { index: usize },
    /// The last question was passed; the output is rendered.
    Finished,
    /// The current question is required and has no non-empty answer.
    /// Nothing changed.
    Blocked { id: prompt_builder_types::QuestionId },
    /// Not collecting answers; nothing to advance.
    Ignored,
}

impl Advance {
    /// Check whether the session moved forward.
    pub fn is_progress(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::Finished)
    }
}

/// Holds the position, the answers and the rendered output of one session.
///
/// Every input operation acts on the current question and is a no-op
/// (returning `false`) when it does not apply: wrong phase, wrong question
/// kind, or an option the question does not declare.
#[derive(Debug, Clone)]
pub struct Questionnaire<T> {
    template: T,
    definition: QuestionnaireDefinition,
    phase: Phase,
    index: usize,
    answers: AnswerSet,
    output: Option<String>,
}

impl<T: Template> Questionnaire<T> {
    /// Create a session for `template`, rejecting definitions that cannot
    /// be traversed.
    pub fn new(template: T) -> Result<Self, DefinitionError> {
        let definition = template.definition();
        definition.validate()?;

        Ok(Self {
            template,
            definition,
            phase: Phase::Intro,
            index: 0,
            answers: AnswerSet::new(),
            output: None,
        })
    }

    /// Get the template driving this session.
    pub fn template(&self) -> &T {
        &self.template
    }

    /// Get the questionnaire structure.
    pub fn definition(&self) -> &QuestionnaireDefinition {
        &self.definition
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the 0-based index of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.definition.len()
    }

    /// Always `false`: construction rejects empty definitions.
    pub fn is_empty(&self) -> bool {
        self.definition.is_empty()
    }

    /// Check whether the current question is the last one.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len()
    }

    /// Get the collected answers.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Get the rendered output, present once the session is done.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the current question.
    pub fn current_question(&self) -> &Question {
        &self.definition.questions[self.index]
    }

    /// Get the answer recorded for the current question.
    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(self.current_question().id())
    }

    /// 1-based position of the current question and the question count.
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.len())
    }

    /// Progress as a rounded percentage.
    pub fn percent(&self) -> usize {
        let (position, total) = self.progress();
        (position * 100 + total / 2) / total
    }

    /// Leave the intro and start asking questions.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Intro {
            return false;
        }
        self.phase = Phase::Collecting;
        debug!("session started, {} questions", self.len());
        true
    }

    /// Record free text for the current text question.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        if !self.collecting() || !self.current_question().kind().is_text() {
            return false;
        }
        let id = self.current_question().id().clone();
        self.answers.insert(id, Answer::Text(value.into()));
        true
    }

    /// Record the chosen option for the current single choice question.
    pub fn set_single_choice(&mut self, value: &str) -> bool {
        if !self.collecting() {
            return false;
        }
        let question = self.current_question();
        let QuestionKind::SingleChoice(choices) = question.kind() else {
            return false;
        };
        if !choices.contains(value) {
            debug!("ignoring undeclared option {value:?} for {}", question.id());
            return false;
        }
        let id = question.id().clone();
        self.answers.insert(id, Answer::Choice(value.to_string()));
        true
    }

    /// Include or exclude an option of the current multiple choice question.
    ///
    /// Including an option twice keeps a single entry; newly included options
    /// go to the end of the selection.
    pub fn toggle_choice(&mut self, value: &str, included: bool) -> bool {
        if !self.collecting() {
            return false;
        }
        let question = self.current_question();
        let QuestionKind::MultiChoice(choices) = question.kind() else {
            return false;
        };
        if !choices.contains(value) {
            debug!("ignoring undeclared option {value:?} for {}", question.id());
            return false;
        }

        let id = question.id().clone();
        let mut selected = self
            .answers
            .get(&id)
            .and_then(Answer::as_choices)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        if included {
            if !selected.iter().any(|s| s == value) {
                selected.push(value.to_string());
            }
        } else {
            selected.retain(|s| s != value);
        }

        self.answers.insert(id, Answer::Choices(selected));
        true
    }

    /// Overwrite the current question's answer.
    ///
    /// Rejected when the answer's shape does not match the question kind or
    /// it names options the question does not declare.
    pub fn record(&mut self, answer: Answer) -> bool {
        if !self.collecting() {
            return false;
        }
        let question = self.current_question();
        if !answer.fits(question.kind()) {
            debug!(
                "rejecting {} answer for {} question {}",
                answer.type_name(),
                question.kind().name(),
                question.id()
            );
            return false;
        }
        let id = question.id().clone();
        self.answers.insert(id, answer);
        true
    }

    /// Check whether `advance()` would move the session forward.
    pub fn can_advance(&self) -> bool {
        self.collecting() && self.current_question().is_satisfied_by(self.current_answer())
    }

    /// Move to the next question, or render the output after the last one.
    pub fn advance(&mut self) -> Advance {
        if !self.collecting() {
            return Advance::Ignored;
        }

        if !self.can_advance() {
            let id = self.current_question().id().clone();
            debug!("advance blocked: {id} is required");
            return Advance::Blocked { id };
        }

        if self.is_last() {
            self.output = Some(self.template.render(&self.answers));
            self.phase = Phase::Done;
            debug!("session done, {} answers", self.answers.len());
            return Advance::Finished;
        }

        self.index += 1;
        debug!("advanced to question {}", self.index);
        Advance::Moved { index: self.index }
    }

    /// Go back one question. Answers are kept.
    pub fn retreat(&mut self) -> bool {
        if !self.collecting() || self.index == 0 {
            return false;
        }
        self.index -= 1;
        debug!("retreated to question {}", self.index);
        true
    }

    /// Discard every answer and the output, and return to the intro.
    pub fn reset(&mut self) {
        self.phase = Phase::Intro;
        self.index = 0;
        self.answers.clear();
        self.output = None;
        debug!("session reset");
    }

    fn collecting(&self) -> bool {
        self.phase == Phase::Collecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_builder_types::QuestionId;

    struct Echo;

    impl Template for Echo {
        fn definition(&self) -> QuestionnaireDefinition {
            QuestionnaireDefinition::new(
                "Echo",
                vec![
                    Question::new("name", "Name?", QuestionKind::ShortText),
                    Question::new("color", "Color?", QuestionKind::single_choice(["red", "blue"])),
                    Question::new("tags", "Tags?", QuestionKind::multi_choice(["a", "b", "c"]))
                        .optional(),
                ],
            )
        }

        fn render(&self, answers: &AnswerSet) -> String {
            let name = answers.get_text(&QuestionId::new("name")).unwrap_or("");
            let color = answers.get_choice(&QuestionId::new("color")).unwrap_or("");
            let tags = answers
                .get_choices(&QuestionId::new("tags"))
                .map(|t| t.join(", "))
                .unwrap_or_default();
            format!("{name}/{color}/{tags}")
        }
    }

    fn started() -> Questionnaire<Echo> {
        let mut q = Questionnaire::new(Echo).unwrap();
        assert!(q.start());
        q
    }

    #[test]
    fn initial_state() {
        let q = Questionnaire::new(Echo).unwrap();
        assert_eq!(q.phase(), Phase::Intro);
        assert_eq!(q.index(), 0);
        assert!(q.answers().is_empty());
        assert!(q.output().is_none());
        assert!(!q.can_advance());
    }

    #[test]
    fn start_only_from_intro() {
        let mut q = started();
        assert_eq!(q.phase(), Phase::Collecting);
        assert!(!q.start());
    }

    #[test]
    fn inputs_ignored_before_start() {
        let mut q = Questionnaire::new(Echo).unwrap();
        assert!(!q.set_text("Ana"));
        assert_eq!(q.advance(), Advance::Ignored);
        assert!(!q.retreat());
        assert!(q.answers().is_empty());
    }

    #[test]
    fn required_question_blocks() {
        let mut q = started();
        assert_eq!(
            q.advance(),
            Advance::Blocked {
                id: QuestionId::new("name")
            }
        );
        assert_eq!(q.index(), 0);

        q.set_text("");
        assert!(!q.can_advance());
        assert!(!q.advance().is_progress());

        q.set_text("Ana");
        assert!(q.can_advance());
        assert_eq!(q.advance(), Advance::Moved { index: 1 });
    }

    #[test]
    fn wrong_kind_is_noop() {
        let mut q = started();
        assert!(!q.set_single_choice("red"));
        assert!(!q.toggle_choice("a", true));
        assert!(!q.record(Answer::Choice("red".into())));
        assert!(q.answers().is_empty());
    }

    #[test]
    fn undeclared_option_is_noop() {
        let mut q = started();
        q.set_text("Ana");
        q.advance();

        assert!(!q.set_single_choice("green"));
        assert!(q.current_answer().is_none());
        assert!(q.set_single_choice("blue"));
        assert_eq!(q.current_answer(), Some(&Answer::Choice("blue".into())));
    }

    #[test]
    fn toggle_keeps_order_and_uniqueness() {
        let mut q = started();
        q.set_text("Ana");
        q.advance();
        q.set_single_choice("red");
        q.advance();

        assert!(q.toggle_choice("c", true));
        assert!(q.toggle_choice("a", true));
        assert!(q.toggle_choice("a", true));
        assert_eq!(
            q.current_answer(),
            Some(&Answer::Choices(vec!["c".into(), "a".into()]))
        );

        assert!(q.toggle_choice("c", false));
        assert_eq!(q.current_answer(), Some(&Answer::Choices(vec!["a".into()])));

        assert!(!q.toggle_choice("z", true));
    }

    #[test]
    fn retreat_keeps_answers() {
        let mut q = started();
        assert!(!q.retreat());

        q.set_text("Ana");
        q.advance();
        q.set_single_choice("red");
        let before = q.answers().clone();

        assert!(q.retreat());
        assert_eq!(q.index(), 0);
        assert_eq!(q.answers(), &before);

        assert_eq!(q.advance(), Advance::Moved { index: 1 });
        assert_eq!(q.answers(), &before);
    }

    #[test]
    fn finishing_renders_output() {
        let mut q = started();
        q.set_text("Ana");
        q.advance();
        q.set_single_choice("blue");
        q.advance();
        assert!(q.is_last());
        assert!(q.can_advance());

        assert_eq!(q.advance(), Advance::Finished);
        assert_eq!(q.phase(), Phase::Done);
        assert_eq!(q.output(), Some("Ana/blue/"));

        assert_eq!(q.advance(), Advance::Ignored);
        assert!(!q.retreat());
        assert!(!q.set_text("late"));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut q = started();
        q.set_text("Ana");
        q.advance();
        q.set_single_choice("blue");
        q.advance();
        q.advance();

        q.reset();
        assert_eq!(q.phase(), Phase::Intro);
        assert_eq!(q.index(), 0);
        assert!(q.answers().is_empty());
        assert!(q.output().is_none());
    }

    #[test]
    fn record_overwrites() {
        let mut q = started();
        assert!(q.record(Answer::Text("first".into())));
        assert!(q.record(Answer::Text("second".into())));
        assert_eq!(q.current_answer(), Some(&Answer::Text("second".into())));
    }

    #[test]
    fn progress_and_percent() {
        let mut q = started();
        assert_eq!(q.progress(), (1, 3));
        assert_eq!(q.percent(), 33);
        q.set_text("Ana");
        q.advance();
        assert_eq!(q.percent(), 67);
        q.set_single_choice("red");
        q.advance();
        assert_eq!(q.percent(), 100);
    }

    #[test]
    fn rejects_empty_definition() {
        struct Nothing;
        impl Template for Nothing {
            fn definition(&self) -> QuestionnaireDefinition {
                QuestionnaireDefinition::new("Nothing", Vec::new())
            }
            fn render(&self, _answers: &AnswerSet) -> String {
                String::new()
            }
        }

        assert!(matches!(
            Questionnaire::new(Nothing),
            Err(DefinitionError::Empty)
        ));
    }
}
