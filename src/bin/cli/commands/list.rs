use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let languages = app.storage.list_languages(app.user_id)?;

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = languages
                .iter()
                .map(|language| {
                    let word_count = app
                        .storage
                        .get_words(language.id)
                        .map(|words| words.len())
                        .unwrap_or(0);
                    serde_json::json!({
                        "id": language.id.to_string(),
                        "name": language.name,
                        "score": language.score,
                        "wordCount": word_count,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if languages.is_empty() {
                println!("No languages yet. Create one with: wordchain-cli new <name>");
                return Ok(());
            }

            for language in &languages {
                let word_count = app
                    .storage
                    .get_words(language.id)
                    .map(|words| words.len())
                    .unwrap_or(0);
                println!(
                    "{}  ({} words, score {})",
                    language.name, word_count, language.score
                );
            }
        }
    }

    Ok(())
}
