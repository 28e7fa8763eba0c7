use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, language_name: &str, format: &OutputFormat) -> Result<()> {
    let language = app.find_language(language_name)?;
    let head = app.storage.head_word(language.id)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nextWord": head.next_word,
                "languageScore": head.language_score,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Next word: {}", head.next_word);
            println!("  Score: {}", head.language_score);
        }
    }

    Ok(())
}
