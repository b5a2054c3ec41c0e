use std::path::PathBuf;

use thiserror::Error;

/// Exit status once a quiz session has ended and its summary was printed,
/// whether the questions ran out or the time limit expired.
pub const EXIT_QUIZ_ENDED: i32 = 3;

/// Exit status for a fatal error: the question file could not be loaded or
/// the answers could not be read. No summary is printed in that case.
pub const EXIT_FATAL: i32 = 1;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("cannot open question file '{}': {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question on line {line}: expected 2 fields, found {fields}")]
    Format { line: u64, fields: usize },

    #[error("cannot decode question file: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot read an answer after {attempts} attempts: {source}")]
    Input {
        attempts: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("cannot write to output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
