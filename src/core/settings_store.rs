use std::path::PathBuf;

use anyhow::Context;

use super::models::ImportSettings;

pub const SETTINGS_PATH_ENV: &str = "RESUME_IMPORT_SETTINGS";

pub struct SettingsStore {
    file_path: PathBuf,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            file_path: settings_path(),
        }
    }

    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }

    pub async fn load(&self) -> anyhow::Result<ImportSettings> {
        if !tokio::fs::try_exists(&self.file_path)
            .await
            .unwrap_or(false)
        {
            return Ok(ImportSettings::default());
        }

        let content = tokio::fs::read_to_string(&self.file_path)
            .await
            .with_context(|| {
                format!("failed to read settings file {}", self.file_path.display())
            })?;

        let parsed = serde_json::from_str::<ImportSettings>(&content).with_context(|| {
            format!("invalid JSON in settings file {}", self.file_path.display())
        })?;

        Ok(parsed.sanitized())
    }

    pub async fn save(&self, settings: &ImportSettings) -> anyhow::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.file_path, json)
            .await
            .with_context(|| {
                format!("failed to write settings file {}", self.file_path.display())
            })?;
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

fn settings_path() -> PathBuf {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    app_data_root().join("import-settings.json")
}

pub fn app_data_root() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(local_app_data) = std::env::var("LOCALAPPDATA") {
            return PathBuf::from(local_app_data).join("ResumeImport");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("ResumeImport");
        }
    }

    if let Some(path) = dirs::data_local_dir() {
        return path.join("ResumeImport");
    }

    PathBuf::from(".").join("ResumeImport")
}
