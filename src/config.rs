use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_FILENAME: &str = "./problems.csv";

/// Runtime settings of a quiz run, read once from the command line (or the
/// matching `QUIZ_*` environment variables) and handed to the quiz by reference.
#[derive(Parser, Debug, Clone)]
#[command(name = "csv-quiz", version, about = "Ask questions from a csv file within a time limit")]
pub struct Config {
    #[arg(
        long,
        env = "QUIZ_FILENAME",
        default_value = DEFAULT_FILENAME,
        help = "The csv file of questions (question,answer per row)"
    )]
    pub filename: PathBuf,

    #[arg(long, env = "QUIZ_SHUFFLE", help = "Shuffle the order the questions are asked in")]
    pub shuffle: bool,

    #[arg(
        long,
        env = "QUIZ_TIMER",
        default_value_t = 5,
        help = "Time limit for the whole quiz, in seconds"
    )]
    pub timer: u64,

    #[arg(long, env = "QUIZ_SEED", help = "Seed for a reproducible shuffle")]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = "QUIZ_RETRIES",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(0..=100),
        help = "How many times to re-prompt after an unreadable answer"
    )]
    pub retries: u32,

    #[arg(long, help = "Print the final summary as JSON")]
    pub json: bool,
}

impl Config {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.timer)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filename: PathBuf::from(DEFAULT_FILENAME),
            shuffle: false,
            timer: 5,
            seed: None,
            retries: 1,
            json: false,
        }
    }
}
