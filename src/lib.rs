//! Timed quiz runner: asks the question/answer pairs of a csv file on the
//! terminal and stops at the end of the file or when the time limit expires,
//! whichever comes first.

pub mod config;
pub mod error;
pub mod quiz;

pub use config::Config;
pub use error::{QuizError, Result, EXIT_FATAL, EXIT_QUIZ_ENDED};
pub use quiz::score::Summary;
pub use quiz::session::{load_quiz, run, Outcome};
pub use quiz::{AnsweredQuestion, Question, Quiz};
