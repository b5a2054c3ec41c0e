use log::warn;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{QuizError, Result};
use crate::quiz::{AnsweredQuestion, Question};

/// Asks questions on `writer` and reads the answers, one line each, from `reader`.
pub struct ResponseCollector<R, W> {
    reader: R,
    writer: W,
    retries: u32,
}

impl<R, W> ResponseCollector<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// `retries` is how many times an unreadable line is re-prompted before giving up.
    pub fn new(reader: R, writer: W, retries: u32) -> Self {
        Self {
            reader,
            writer,
            retries,
        }
    }

    /// Asks the question with the given 0-based index, blocks until a line is
    /// read, then echoes the answer back.
    pub async fn ask(&mut self, question: &Question, index: usize) -> Result<AnsweredQuestion> {
        let answered = self.answer(question, index).await?;
        self.feedback(&answered).await?;
        Ok(answered)
    }

    /// Prompt and read half of [`ResponseCollector::ask`]. The answer is
    /// final once this returns, before anything is echoed.
    pub async fn answer(&mut self, question: &Question, index: usize) -> Result<AnsweredQuestion> {
        let prompt = format!("Question {}\n{}\n", index + 1, question.text);
        self.writer.write_all(prompt.as_bytes()).await?;

        let line = self.read_answer().await?;
        Ok(AnsweredQuestion::new(question.clone(), &line))
    }

    /// Echo half of [`ResponseCollector::ask`].
    pub async fn feedback(&mut self, answered: &AnsweredQuestion) -> Result<()> {
        let mut feedback = format!(
            "\nYou Answered: {}\nCorrect Answer {}\n",
            answered.submitted, answered.question.answer
        );
        if answered.is_correct {
            feedback.push_str("Correct!\n");
        }
        feedback.push('\n');
        self.writer.write_all(feedback.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn read_answer(&mut self) -> Result<String> {
        let mut retried: u32 = 0;
        loop {
            self.writer.write_all(b"Enter Answer: ").await?;
            self.writer.flush().await?;

            let mut line = String::new();
            match self.reader.read_line(&mut line).await {
                Ok(0) => return Err(QuizError::InputClosed),
                Ok(_) => return Ok(line),
                Err(source) if retried >= self.retries => {
                    return Err(QuizError::Input {
                        attempts: retried.saturating_add(1),
                        source,
                    })
                }
                Err(err) => {
                    retried += 1;
                    warn!("Could not read answer ({}), asking again", err);
                }
            }
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
