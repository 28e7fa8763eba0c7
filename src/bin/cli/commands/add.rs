use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    language_name: &str,
    original: &str,
    translation: &str,
    format: &OutputFormat,
) -> Result<()> {
    let language = app.find_language(language_name)?;
    let word = app
        .storage
        .add_word(language.id, original.to_string(), translation.to_string())?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": word.id.to_string(),
                "languageId": language.id.to_string(),
                "original": word.original,
                "translation": word.translation,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Added \"{}\" → \"{}\" to {}",
                word.original, word.translation, language.name
            );
        }
    }

    Ok(())
}
