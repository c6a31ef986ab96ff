use std::fmt;

/// The identifier of a question, e.g. `"objetivo"`.
///
/// Used as the key in `AnswerSet`. Identifiers are unique within a
/// `QuestionnaireDefinition`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let id = QuestionId::new("objetivo");
        assert_eq!(id.as_str(), "objetivo");
        assert!(!id.is_empty());
    }

    #[test]
    fn display() {
        let id = QuestionId::new("audiencia");
        assert_eq!(format!("{}", id), "audiencia");
    }

    #[test]
    fn from_str() {
        let id: QuestionId = "tom".into();
        assert_eq!(id, QuestionId::new(String::from("tom")));
    }
}
