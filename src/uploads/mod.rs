use anyhow::Result;
use std::fmt;
use std::io::Read;

use crate::import::{import_questions, ImportSummary};
use crate::output::{ImportOutput, Message};
use crate::question::UserId;
use crate::storage::QuestionStorage;

pub mod local;

pub use local::LocalUploads;


#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UploadHandle(pub String);

impl fmt::Display for UploadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait UploadStore {
    fn open(&self, handle: &UploadHandle) -> Result<Box<dyn Read>>;
    fn delete(&self, handle: &UploadHandle) -> Result<()>;
}

fn run_import<U, S, O>(
    uploads: &U,
    handle: &UploadHandle,
    storage: &S,
    owner: UserId,
    output: &O,
) -> Option<ImportSummary>
where
    U: UploadStore,
    S: QuestionStorage,
    O: ImportOutput,
{
    let source = match uploads.open(handle) {
        Ok(source) => source,
        Err(e) => {
            output.say(&Message::UploadUnreadable(format!("{:#}", e)));
            return None;
        }
    };

    match import_questions(source, storage, owner, output) {
        Ok(summary) => Some(summary),
        Err(e) => {
            output.say(&Message::HeaderUnreadable(format!("{:#}", e)));
            None
        }
    }
}

/// Imports an uploaded CSV file, then discards the upload.
///
/// Returns `None` when nothing could be imported at all. The upload is
/// deleted whatever happened during the import; a failed deletion is only
/// logged.
pub fn import_upload<U, S, O>(
    uploads: &U,
    handle: Option<&UploadHandle>,
    storage: &S,
    owner: UserId,
    output: &O,
) -> Option<ImportSummary>
where
    U: UploadStore,
    S: QuestionStorage,
    O: ImportOutput,
{
    let handle = match handle {
        Some(handle) => handle,
        None => {
            output.say(&Message::NoUpload);
            return None;
        }
    };

    tracing::info!("Importing questions from upload {}", handle);
    let summary = run_import(uploads, handle, storage, owner, output);

    match uploads.delete(handle) {
        Ok(()) => output.say(&Message::UploadDeleted),
        Err(e) => tracing::warn!("Could not delete upload {}: {:#}", handle, e),
    }

    summary
}
