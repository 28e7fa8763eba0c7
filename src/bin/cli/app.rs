use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use wordchain::languages::{Language, LanguageStorage};

/// Shared application state for CLI commands
pub struct App {
    pub storage: LanguageStorage,
    pub user_id: Uuid,
}

impl App {
    /// Initialize from the given or default data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => LanguageStorage::default_data_dir()
                .context("Failed to resolve data directory")?,
        };

        let storage = LanguageStorage::new(data_dir.clone())
            .context("Failed to initialize language storage")?;
        let user_id = load_profile(&data_dir)?;

        Ok(Self { storage, user_id })
    }

    /// Find a language by name (case-insensitive prefix match)
    pub fn find_language(&self, name: &str) -> Result<Language> {
        let languages = self
            .storage
            .list_languages(self.user_id)
            .context("Failed to list languages")?;

        let name_lower = name.to_lowercase();

        // Exact match first
        if let Some(language) = languages
            .iter()
            .find(|l| l.name.to_lowercase() == name_lower)
        {
            return Ok(language.clone());
        }

        let mut matches: Vec<Language> = languages
            .into_iter()
            .filter(|l| l.name.to_lowercase().starts_with(&name_lower))
            .collect();

        if matches.is_empty() {
            bail!("Language '{}' not found", name);
        }
        if matches.len() > 1 {
            let names: Vec<&str> = matches.iter().map(|l| l.name.as_str()).collect();
            bail!("Language '{}' is ambiguous: {}", name, names.join(", "));
        }
        Ok(matches.remove(0))
    }
}

/// Load the local profile id, creating one on first run.
/// Stands in for the authenticated user of the hosted deployment.
fn load_profile(data_dir: &Path) -> Result<Uuid> {
    let path = data_dir.join("profile.json");
    if path.exists() {
        let content = fs::read_to_string(&path).context("Failed to read profile")?;
        let id: Uuid = serde_json::from_str(&content).context("Failed to parse profile")?;
        return Ok(id);
    }

    let id = Uuid::new_v4();
    fs::create_dir_all(data_dir)?;
    fs::write(&path, serde_json::to_string_pretty(&id)?)
        .context("Failed to write profile")?;
    log::info!("Created profile {}", id);
    Ok(id)
}
