use serde::Deserialize;
use thiserror::Error;

const BUILTIN_QUESTIONS: &str = include_str!("questions.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    prompt: String,
    #[serde(default)]
    hint: Option<String>,
    options: Vec<String>,
    scores: Vec<u32>,
}

impl Question {
    #[cfg(test)]
    pub fn new(prompt: impl Into<String>, options: Vec<String>, scores: Vec<u32>) -> Self {
        Self {
            prompt: prompt.into(),
            hint: None,
            options,
            scores,
        }
    }

    #[cfg(test)]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Empty when the question carries no hint.
    pub fn hint(&self) -> &str {
        self.hint.as_deref().unwrap_or("")
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn score_for(&self, option: usize) -> Option<u32> {
        self.scores.get(option).copied()
    }
}

#[derive(Debug, Error)]
pub enum QuestionSetError {
    #[error("question set is empty")]
    Empty,
    #[error("question {index} has no options")]
    NoOptions { index: usize },
    #[error("question {index} has {options} options but {scores} scores")]
    ScoreMismatch {
        index: usize,
        options: usize,
        scores: usize,
    },
    #[error("failed to parse question set: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, validated list of questions. Never changes once built.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(QuestionSetError::NoOptions { index });
            }
            if question.options.len() != question.scores.len() {
                return Err(QuestionSetError::ScoreMismatch {
                    index,
                    options: question.options.len(),
                    scores: question.scores.len(),
                });
            }
        }
        Ok(Self { questions })
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionSetError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The ten social-media influence questions shipped with the site.
    pub fn builtin() -> Result<Self, QuestionSetError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {}", i)).collect()
    }

    #[test]
    fn builtin_set_has_ten_four_option_questions() {
        let set = QuestionSet::builtin().unwrap();
        assert_eq!(set.len(), 10);
        assert_eq!(set.last_index(), 9);
        for question in set.iter() {
            assert_eq!(question.option_count(), 4);
            assert_eq!(question.score_for(0), Some(0));
            assert_eq!(question.score_for(3), Some(3));
            assert_eq!(question.hint(), "");
        }
        assert_eq!(
            set.get(0).unwrap().prompt(),
            "How much time do you spend on social media daily?"
        );
    }

    #[test]
    fn rejects_empty_set() {
        assert!(matches!(QuestionSet::new(vec![]), Err(QuestionSetError::Empty)));
    }

    #[test]
    fn rejects_scores_not_parallel_to_options() {
        let questions = vec![
            Question::new("fine", labels(2), vec![0, 1]),
            Question::new("broken", labels(3), vec![0, 1]),
        ];
        match QuestionSet::new(questions) {
            Err(QuestionSetError::ScoreMismatch { index, options, scores }) => {
                assert_eq!((index, options, scores), (1, 3, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_question_without_options() {
        let questions = vec![Question::new("nothing to pick", vec![], vec![])];
        assert!(matches!(
            QuestionSet::new(questions),
            Err(QuestionSetError::NoOptions { index: 0 })
        ));
    }

    #[test]
    fn parses_optional_hint() {
        let set = QuestionSet::from_json(
            r#"[{"prompt": "p", "hint": "pick one", "options": ["a"], "scores": [5]}]"#,
        )
        .unwrap();
        let question = set.get(0).unwrap();
        assert_eq!(question.hint(), "pick one");
        assert_eq!(question.score_for(0), Some(5));
        assert_eq!(question.score_for(1), None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            QuestionSet::from_json("[{\"prompt\": 1}]"),
            Err(QuestionSetError::Parse(_))
        ));
    }
}
