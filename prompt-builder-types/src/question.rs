use crate::{Answer, QuestionId};

/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key of this question's answer in the `AnswerSet`.
    id: QuestionId,

    /// The prompt text shown to the user.
    ask: String,

    /// The kind of input this question collects.
    kind: QuestionKind,

    /// Whether a non-empty answer is needed before moving past this question.
    required: bool,
}

impl Question {
    /// Create a new required question.
    pub fn new(id: impl Into<QuestionId>, ask: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            ask: ask.into(),
            kind,
            required: true,
        }
    }

    /// Mark this question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Get the question identifier.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn ask(&self) -> &str {
        &self.ask
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check if this question must be answered.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the declared options, empty for text questions.
    pub fn options(&self) -> &[String] {
        self.kind.choices().map(Choices::options).unwrap_or(&[])
    }

    /// Check whether `answer` satisfies this question's presence requirement.
    ///
    /// Optional questions are always satisfied.
    pub fn is_satisfied_by(&self, answer: Option<&Answer>) -> bool {
        !self.required || answer.is_some_and(|a| !a.is_empty())
    }
}

/// The kind of question, determining the input widget and answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Single-line text input.
    ShortText,

    /// Multi-line text input (opens editor or textarea).
    LongText,

    /// Pick exactly one of the declared options.
    SingleChoice(Choices),

    /// Pick any number of the declared options.
    MultiChoice(Choices),
}

impl QuestionKind {
    /// Single choice over the given options.
    pub fn single_choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SingleChoice(Choices::new(options))
    }

    /// Multiple choice over the given options.
    pub fn multi_choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiChoice(Choices::new(options))
    }

    /// Check if this is a free text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::ShortText | Self::LongText)
    }

    /// Check if this is a choice kind.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice(_) | Self::MultiChoice(_))
    }

    /// Get the declared options of a choice kind.
    pub fn choices(&self) -> Option<&Choices> {
        match self {
            Self::SingleChoice(choices) | Self::MultiChoice(choices) => Some(choices),
            Self::ShortText | Self::LongText => None,
        }
    }

    /// Short name of the kind for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShortText => "ShortText",
            Self::LongText => "LongText",
            Self::SingleChoice(_) => "SingleChoice",
            Self::MultiChoice(_) => "MultiChoice",
        }
    }
}

/// The ordered option labels of a choice question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choices {
    options: Vec<String>,
}

impl Choices {
    /// Create a choice list from option labels.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the options in declaration order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Check whether `label` is one of the declared options.
    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }

    /// Position of `label` in the declared options.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|o| o == label)
    }

    /// Get the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_by_default() {
        let q = Question::new("objetivo", "Objetivo?", QuestionKind::LongText);
        assert!(q.is_required());
        assert!(!q.clone().optional().is_required());
    }

    #[test]
    fn satisfied_by() {
        let q = Question::new("audiencia", "Público?", QuestionKind::ShortText);
        assert!(!q.is_satisfied_by(None));
        assert!(!q.is_satisfied_by(Some(&Answer::Text(String::new()))));
        assert!(q.is_satisfied_by(Some(&Answer::Text("devs".into()))));

        let optional = q.optional();
        assert!(optional.is_satisfied_by(None));
    }

    #[test]
    fn text_kinds_have_no_options() {
        let q = Question::new("extras", "Extras?", QuestionKind::LongText);
        assert!(q.options().is_empty());
        assert!(q.kind().choices().is_none());
    }

    #[test]
    fn choices_lookup() {
        let kind = QuestionKind::single_choice(["A", "B", "C"]);
        let choices = kind.choices().unwrap();
        assert!(choices.contains("B"));
        assert!(!choices.contains("D"));
        assert_eq!(choices.position("C"), Some(2));
        assert_eq!(choices.len(), 3);
    }
}
