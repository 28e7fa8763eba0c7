use anyhow::{Context, Result};

use wordchain::languages::WordChain;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, language_name: &str, format: &OutputFormat) -> Result<()> {
    let language = app.find_language(language_name)?;
    let words = app.storage.get_words(language.id)?;
    let chain = WordChain::from_rows(&language, words)
        .context("Stored review queue is corrupt")?;

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = chain
                .iter()
                .map(|word| {
                    serde_json::json!({
                        "id": word.id.to_string(),
                        "original": word.original,
                        "translation": word.translation,
                        "memoryValue": word.memory_value,
                        "correctCount": word.correct_count,
                        "incorrectCount": word.incorrect_count,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if chain.is_empty() {
                println!("{} has no words yet.", language.name);
                return Ok(());
            }

            println!("{} ({} words, score {})", language.name, chain.len(), chain.score());
            for (position, word) in chain.iter().enumerate() {
                println!(
                    "{:3}. {} → {}  (mv {}, {} right / {} wrong)",
                    position + 1,
                    word.original,
                    word.translation,
                    word.memory_value,
                    word.correct_count,
                    word.incorrect_count,
                );
            }
        }
    }

    Ok(())
}
