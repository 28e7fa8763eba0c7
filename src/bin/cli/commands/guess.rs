use anyhow::{bail, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, language_name: &str, answer: &str, format: &OutputFormat) -> Result<()> {
    if answer.trim().is_empty() {
        bail!("Missing guess: give the translation of the prompted word");
    }

    let language = app.find_language(language_name)?;
    let outcome = app.storage.submit_guess(language.id, answer)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Plain => {
            if outcome.is_correct {
                println!("Correct! \"{}\"", outcome.answer);
            } else {
                println!("Incorrect. The answer was \"{}\"", outcome.answer);
            }
            println!("  Score: {}", outcome.language_score);
            println!("  Next word: {}", outcome.next_word);
        }
    }

    Ok(())
}
