use std::process;

use clap::Parser;
use dotenv::dotenv;
use log::{error, info};
use tokio::io::BufReader;

use csv_quiz::{Config, QuizError, EXIT_FATAL, EXIT_QUIZ_ENDED};

#[tokio::main]
async fn main() {
    // A missing .env is fine, flags and their defaults still apply.
    dotenv().ok();
    pretty_env_logger::init();

    let config = Config::parse();
    info!("Starting quiz from {}", config.filename.display());

    let quiz = match csv_quiz::load_quiz(&config) {
        Ok(quiz) => quiz,
        Err(err) => fail(err),
    };

    let stdin = BufReader::new(tokio::io::stdin());
    match csv_quiz::run(&quiz, &config, stdin, tokio::io::stdout()).await {
        // Exit right away: a read cut short by the deadline would otherwise
        // keep the runtime from shutting down until the next line arrives.
        Ok(_) => process::exit(EXIT_QUIZ_ENDED),
        Err(err) => fail(err),
    }
}

fn fail(err: QuizError) -> ! {
    error!("Quiz aborted: {:?}", err);
    eprintln!("error: {}", err);
    process::exit(EXIT_FATAL)
}
