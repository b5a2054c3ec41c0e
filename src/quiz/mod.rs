pub mod collector;
pub mod deadline;
pub mod score;
pub mod session;
pub mod source;

/// A question as loaded from the question file. Never changed after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answer: String,
}
impl Question {
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
        }
    }
}

/// What the user submitted for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub submitted: String,
    pub is_correct: bool,
}
impl AnsweredQuestion {
    /// Answers match on exact equality once surrounding whitespace is trimmed.
    pub fn new(question: Question, submitted: &str) -> Self {
        let submitted = submitted.trim().to_string();
        let is_correct = submitted == question.answer.trim();
        Self {
            question,
            submitted,
            is_correct,
        }
    }
}

/// The loaded questions of one run, in the order they are asked.
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}
