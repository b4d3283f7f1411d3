use crate::storage::QuestionHandle;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Status,
    Warning,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    HeaderUnreadable(String),
    ImportSummary(usize),
    NoUpload,
    NoValidOptions(usize, String),
    QuestionCreated(String, QuestionHandle),
    QuestionCreationFailed(String),
    QuestionImportFailed(usize, String, String),
    ReadInterrupted(usize, String),
    RowTooShort(usize, usize),
    UploadDeleted,
    UploadUnreadable(String),
}

impl Message {
    pub fn severity(&self) -> Severity {
        use Message::*;
        match self {
            ImportSummary(_) | QuestionCreated(_, _) | UploadDeleted => Severity::Status,
            NoValidOptions(_, _) | RowTooShort(_, _) => Severity::Warning,
            HeaderUnreadable(_)
            | NoUpload
            | QuestionCreationFailed(_)
            | QuestionImportFailed(_, _, _)
            | ReadInterrupted(_, _)
            | UploadUnreadable(_) => Severity::Error,
        }
    }
}

pub trait ImportOutput {
    fn say(&self, message: &Message);
}
