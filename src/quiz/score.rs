use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::quiz::AnsweredQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub attempted: usize,
}

pub fn score(results: &[AnsweredQuestion]) -> Score {
    Score {
        correct: results.iter().filter(|r| r.is_correct).count(),
        attempted: results.len(),
    }
}

/// Final tally of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub attempted: usize,
    pub correct: usize,
    /// Whether the time limit cut the quiz short.
    pub interrupted: bool,
}

impl Summary {
    pub fn new(total: usize, score: Score, interrupted: bool) -> Self {
        Self {
            total,
            attempted: score.attempted,
            correct: score.correct,
            interrupted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub async fn report<W>(writer: &mut W, summary: &Summary, format: ReportFormat) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let out = match format {
        ReportFormat::Text => format!(
            "Total Questions in Quiz {}\nTotal Answers Attempted {}\nTotal Correct Answers {}\n",
            summary.total, summary.attempted, summary.correct
        ),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(summary).map_err(std::io::Error::from)?;
            json.push('\n');
            json
        }
    };
    writer.write_all(out.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
