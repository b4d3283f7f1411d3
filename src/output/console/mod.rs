use crate::import::MIN_FIELDS;
use crate::output::{ImportOutput, Message, Severity};


#[derive(Clone, Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            HeaderUnreadable(cause) => format!("Could not read the CSV header: {}", cause),
            ImportSummary(count) => format!(
                "Successfully imported {} multiple choice questions.",
                count
            ),
            NoUpload => "No CSV file uploaded.".into(),
            NoValidOptions(row, title) => format!(
                "Skipping question \"{}\" from row {}: no valid alternatives found.",
                title, row
            ),
            QuestionCreated(title, handle) => format!(
                "New multiple choice question \"{}\" (ID: {}) was created.",
                title, handle
            ),
            QuestionCreationFailed(cause) => {
                format!("Saving the multiple choice question failed: {}", cause)
            }
            QuestionImportFailed(row, title, cause) => format!(
                "Error importing question \"{}\" from row {}: {}",
                title, row, cause
            ),
            ReadInterrupted(row, cause) => format!(
                "Could not read the CSV file past row {}: {}",
                row - 1,
                cause
            ),
            RowTooShort(row, found) => format!(
                "Skipping row {}: not enough columns. Expected at least {}, found {}.",
                row, MIN_FIELDS, found
            ),
            UploadDeleted => "Temporary CSV file has been deleted.".into(),
            UploadUnreadable(cause) => {
                format!("Could not open the CSV file for reading: {}", cause)
            }
        }
    }
}

impl ImportOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        match message.severity() {
            Severity::Status => tracing::info!("{}", text),
            Severity::Warning => tracing::warn!("{}", text),
            Severity::Error => tracing::error!("{}", text),
        }
    }
}
