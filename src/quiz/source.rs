use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{QuizError, Result};
use crate::quiz::Question;

/// Loads the questions from a csv file, one `question,answer` pair per row,
/// keeping the file order.
pub fn load(path: &Path) -> Result<Vec<Question>> {
    let file = File::open(path).map_err(|source| QuizError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = load_from_reader(file)?;
    info!(
        "Loaded {} questions from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}

/// Same as [`load`] for any reader. There is no header row, and every row
/// must have exactly two fields.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Question>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() != 2 {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(QuizError::Format {
                line,
                fields: record.len(),
            });
        }
        questions.push(Question::new(&record[0], &record[1]));
    }
    Ok(questions)
}

/// Random source for [`shuffle`]: reproducible with an explicit seed,
/// seeded from OS entropy otherwise.
pub fn quiz_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Shuffling with seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Returns the questions in a uniformly random order (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Vec<Question> {
    let mut shuffled = questions;
    shuffled.shuffle(rng);
    shuffled
}
