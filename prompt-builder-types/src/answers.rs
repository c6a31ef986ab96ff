use std::collections::HashMap;

use crate::{Answer, QuestionId};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Collected answers of one questionnaire session.
///
/// Each key holds at most one answer; inserting again overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    values: HashMap<QuestionId, Answer>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given question, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<Answer>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for the given question.
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.values.get(id)
    }

    /// Check if an answer exists for the given question.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for the given question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<Answer> {
        self.values.remove(id)
    }

    /// Drop every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer.
    pub fn get_text(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(Answer::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a single chosen option.
    pub fn get_choice(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(Answer::Choice(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Choice",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get the chosen options of a multiple choice answer.
    pub fn get_choices(&self, id: &QuestionId) -> Result<&[String], AnswerError> {
        match self.get(id) {
            Some(Answer::Choices(labels)) => Ok(labels),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Choices",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Check if an answer is present and non-empty.
    pub fn has_value(&self, id: &QuestionId) -> bool {
        self.get(id).is_some_and(|a| !a.is_empty())
    }
}

impl IntoIterator for AnswerSet {
    type Item = (QuestionId, Answer);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = (&'a QuestionId, &'a Answer);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = AnswerSet::new();
        answers.insert("objetivo", "Explicar Rust");
        answers.insert("tom", Answer::Choice("Conciso e direto".into()));

        assert_eq!(
            answers.get_text(&QuestionId::new("objetivo")).unwrap(),
            "Explicar Rust"
        );
        assert_eq!(
            answers.get_choice(&QuestionId::new("tom")).unwrap(),
            "Conciso e direto"
        );
    }

    #[test]
    fn last_write_wins() {
        let mut answers = AnswerSet::new();
        answers.insert("audiencia", "alunos");
        answers.insert("audiencia", "professores");

        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers.get_text(&QuestionId::new("audiencia")).unwrap(),
            "professores"
        );
    }

    #[test]
    fn type_mismatch_error() {
        let mut answers = AnswerSet::new();
        answers.insert("elementos", vec!["Exemplos práticos".to_string()]);

        let result = answers.get_text(&QuestionId::new("elementos"));
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
    }

    #[test]
    fn missing_error() {
        let answers = AnswerSet::new();
        let result = answers.get_choices(&QuestionId::new("elementos"));
        assert!(matches!(result, Err(AnswerError::Missing(_))));
    }

    #[test]
    fn has_value() {
        let mut answers = AnswerSet::new();
        answers.insert("restricoes", "");
        answers.insert("extras", "nenhum");

        assert!(!answers.has_value(&QuestionId::new("restricoes")));
        assert!(answers.has_value(&QuestionId::new("extras")));
        assert!(!answers.has_value(&QuestionId::new("exemplos")));
    }
}
