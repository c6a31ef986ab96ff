use crate::QuestionKind;

/// A single answer recorded for a question.
///
/// The variant mirrors the question kind it was collected for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free text (from ShortText or LongText questions).
    Text(String),

    /// The chosen option label (from SingleChoice questions).
    Choice(String),

    /// The chosen option labels in selection order, without duplicates
    /// (from MultiChoice questions).
    Choices(Vec<String>),
}

impl Answer {
    /// Try to get this value as a text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a chosen option label.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as the chosen option labels.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(labels) => Some(labels),
            _ => None,
        }
    }

    /// Check whether the answer carries nothing: an empty string or an empty selection.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Choice(s) => s.is_empty(),
            Self::Choices(labels) => labels.is_empty(),
        }
    }

    /// Check whether this answer has the shape `kind` expects and only
    /// names options the kind declares.
    pub fn fits(&self, kind: &QuestionKind) -> bool {
        match (self, kind) {
            (Self::Text(_), QuestionKind::ShortText | QuestionKind::LongText) => true,
            (Self::Choice(label), QuestionKind::SingleChoice(choices)) => choices.contains(label),
            (Self::Choices(labels), QuestionKind::MultiChoice(choices)) => {
                labels.iter().all(|l| choices.contains(l))
                    && labels
                        .iter()
                        .enumerate()
                        .all(|(i, l)| !labels[..i].contains(l))
            }
            _ => false,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Choices(_) => "Choices",
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for Answer {
    fn from(labels: Vec<String>) -> Self {
        Self::Choices(labels)
    }
}
