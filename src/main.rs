use std::path::Path;

use anyhow::Context;
use tracing::info;

use resume_import_lib::core::settings_store::SettingsStore;
use resume_import_lib::{init_tracing, ResumeImporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: resume-import <path-to-resume.json|txt|docx|pdf>");
        std::process::exit(1);
    }

    let path = &args[1];
    if !Path::new(path).exists() {
        eprintln!("File not found: {path}");
        std::process::exit(2);
    }

    let file_name = Path::new(path)
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("resume.txt")
        .to_string();

    let store = SettingsStore::new();
    let settings = store.load().await?;
    info!(settings = %store.path().display(), "settings loaded");

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {path}"))?;

    let importer = ResumeImporter::new(settings);
    let cv = importer
        .import_bytes(&file_name, &bytes)
        .with_context(|| format!("failed to import {file_name}"))?;

    println!("{}", serde_json::to_string_pretty(&cv)?);
    Ok(())
}
