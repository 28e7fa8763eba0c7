use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, name: &str, format: &OutputFormat) -> Result<()> {
    let language = app.storage.create_language(app.user_id, name.to_string())?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": language.id.to_string(),
                "name": language.name,
                "createdAt": language.created_at.to_rfc3339(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Created language \"{}\"", language.name);
            println!("  ID: {}", language.id);
        }
    }

    Ok(())
}
