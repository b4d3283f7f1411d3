use anyhow::{anyhow, Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

mod import;
mod output;
mod question;
mod sample;
mod settings;
mod storage;
mod uploads;

use crate::output::console::ConsoleOutput;
use crate::settings::Settings;
use crate::storage::MemoryStorage;
use crate::uploads::{import_upload, LocalUploads, UploadHandle};

const USAGE: &str = "Usage: quiztools import <upload-name> | quiztools sample";

fn init_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn import(
    settings: &Settings,
    upload_name: Option<&String>,
    storage: &MemoryStorage,
) -> Result<()> {
    let uploads = LocalUploads::new(&settings.upload_dir);
    uploads.create_root()?;
    tracing::debug!("Reading uploads from {}", uploads.get_root().display());
    let handle = upload_name.map(|name| UploadHandle(name.clone()));
    let summary = import_upload(
        &uploads,
        handle.as_ref(),
        storage,
        settings.owner_id,
        &ConsoleOutput::new(),
    )
    .context("Nothing was imported")?;
    tracing::info!(
        "{} rows skipped, {} rows failed, {} questions stored",
        summary.skipped(),
        summary.failed(),
        storage.question_count()
    );
    if let Some((row, _)) = &summary.interrupted {
        tracing::warn!("Rows from {} on were never read", row);
    }
    Ok(())
}

fn run(settings: &Settings, args: &[String]) -> Result<()> {
    let storage = MemoryStorage::new();
    match args {
        [command] if command == "import" => import(settings, None, &storage)?,
        [command, name] if command == "import" => import(settings, Some(name), &storage)?,
        [command] if command == "sample" => {
            sample::create_sample_question(&storage, settings.owner_id, &ConsoleOutput::new())
                .context("Could not create the sample question")?;
        }
        _ => return Err(anyhow!(USAGE)),
    }

    let questions = serde_json::to_string_pretty(&storage.get_questions())?;
    println!("{}", questions);
    Ok(())
}

fn main() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(2);
        }
    };
    init_logging(&settings);

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&settings, &args) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
