//! Drives a quiz run: load the questions, then race the question loop
//! against the deadline and report the result once.
//!
//! Both ways a run can end (questions exhausted, time limit hit) meet in a
//! single `tokio::select!`, so the summary is written from exactly one place.
//! The results vector is only ever touched by the question loop, which is
//! dropped before the summary is computed.

use log::info;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::config::Config;
use crate::error::Result;
use crate::quiz::collector::ResponseCollector;
use crate::quiz::deadline::Deadline;
use crate::quiz::score::{report, score, ReportFormat, Summary};
use crate::quiz::{source, AnsweredQuestion, Quiz};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question was answered before the deadline.
    Completed,
    /// The deadline fired first.
    Interrupted,
}

/// Loads the question file, shuffling it when configured.
pub fn load_quiz(config: &Config) -> Result<Quiz> {
    let mut questions = source::load(&config.filename)?;
    if config.shuffle {
        questions = source::shuffle(questions, &mut source::quiz_rng(config.seed));
        info!("Shuffled {} questions", questions.len());
    }
    Ok(Quiz::new(questions))
}

/// Asks every question of `quiz` until either all are answered or the time
/// limit is reached, then writes the summary to `writer`.
///
/// Input failures abort the run without a summary.
pub async fn run<R, W>(quiz: &Quiz, config: &Config, reader: R, writer: W) -> Result<Summary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let total = quiz.total();
    let mut collector = ResponseCollector::new(reader, writer, config.retries);
    let mut results: Vec<AnsweredQuestion> = Vec::with_capacity(total);

    if config.shuffle {
        collector.writer().write_all(b"Shuffled!\n").await?;
    }

    let mut deadline = Deadline::arm(config.time_limit());
    let outcome = tokio::select! {
        biased;
        () = deadline.expired() => Outcome::Interrupted,
        finished = ask_all(quiz, &mut collector, &mut results) => {
            finished?;
            Outcome::Completed
        }
    };
    deadline.cancel();
    info!(
        "Quiz {:?} with {} of {} questions answered",
        outcome,
        results.len(),
        total
    );

    let writer = collector.writer();
    if outcome == Outcome::Interrupted {
        let notice = format!("\n\nTime limit of {}s expired\n", deadline.limit().as_secs());
        writer.write_all(notice.as_bytes()).await?;
    }

    let summary = Summary::new(total, score(&results), outcome == Outcome::Interrupted);
    let format = if config.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    report(writer, &summary, format).await?;
    Ok(summary)
}

async fn ask_all<R, W>(
    quiz: &Quiz,
    collector: &mut ResponseCollector<R, W>,
    results: &mut Vec<AnsweredQuestion>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for (index, question) in quiz.questions.iter().enumerate() {
        // Counted as soon as the line is read, even if the echo is cut off.
        results.push(collector.answer(question, index).await?);
        collector.feedback(&results[index]).await?;
    }
    Ok(())
}
