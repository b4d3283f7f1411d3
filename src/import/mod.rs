use anyhow::Result;
use csv::{ByteRecord, ReaderBuilder, Terminator};
use std::fmt;
use std::io::{self, Read};

use crate::output::{ImportOutput, Message};
use crate::question::{QuestionRecord, UserId};
use crate::storage::{save_question, QuestionHandle, QuestionStorage};

pub mod row;

pub use row::{parse_row, RowIssue, MIN_FIELDS};


const HEADER_ROW: usize = 1;

/// The source has no usable header row. Nothing was imported.
#[derive(Debug)]
pub struct MalformedInput(pub String);

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MalformedInput {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowOutcome {
    Created(QuestionHandle),
    Skipped(RowIssue),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ImportSummary {
    pub outcomes: Vec<(usize, RowOutcome)>,
    /// Row at which reading the source failed, with the cause.
    pub interrupted: Option<(usize, String)>,
}

impl ImportSummary {
    pub fn imported(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Created(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Failed(_)))
    }

    #[cfg(test)]
    pub fn get_outcome(&self, row: usize) -> Option<&RowOutcome> {
        self.outcomes
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, outcome)| outcome)
    }

    fn count<F: Fn(&RowOutcome) -> bool>(&self, predicate: F) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}

fn describe_issue(row: usize, issue: &RowIssue) -> Message {
    match issue {
        RowIssue::TooShort(found) => Message::RowTooShort(row, *found),
        RowIssue::NoValidOptions(title) => Message::NoValidOptions(row, title.clone()),
    }
}

fn import_row<S, O>(
    fields: &[String],
    row: usize,
    storage: &S,
    owner: UserId,
    output: &O,
) -> RowOutcome
where
    S: QuestionStorage,
    O: ImportOutput,
{
    let draft = match parse_row(fields) {
        Ok(draft) => draft,
        Err(issue) => {
            output.say(&describe_issue(row, &issue));
            return RowOutcome::Skipped(issue);
        }
    };

    let title = draft.title.clone();
    let saved =
        QuestionRecord::new(draft, owner).and_then(|question| save_question(storage, &question));
    match saved {
        Ok(handle) => {
            tracing::debug!("Row {} imported as question {}", row, handle);
            RowOutcome::Created(handle)
        }
        Err(e) => {
            let cause = format!("{:#}", e);
            output.say(&Message::QuestionImportFailed(row, title, cause.clone()));
            RowOutcome::Failed(cause)
        }
    }
}

/// Adds a final line break when the source does not end with one, so every
/// line of the file is terminated.
struct TerminatedLines<R> {
    inner: R,
    last_byte: Option<u8>,
    finished: bool,
}

impl<R: Read> TerminatedLines<R> {
    fn new(inner: R) -> Self {
        TerminatedLines {
            inner,
            last_byte: None,
            finished: false,
        }
    }
}

impl<R: Read> Read for TerminatedLines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.finished || buf.is_empty() {
            return Ok(0);
        }
        let read = self.inner.read(buf)?;
        if read > 0 {
            self.last_byte = Some(buf[read - 1]);
            return Ok(read);
        }
        self.finished = true;
        match self.last_byte {
            Some(byte) if byte != b'\n' => {
                buf[0] = b'\n';
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

fn count_line_breaks(record: &ByteRecord) -> u64 {
    record
        .iter()
        .map(|field| field.iter().filter(|&&b| b == b'\n').count() as u64)
        .sum()
}

/// Numbers rows as they come and routes each data row to `import_row`.
struct RowImporter<'a, S, O> {
    storage: &'a S,
    owner: UserId,
    output: &'a O,
    row: usize,
    summary: ImportSummary,
}

impl<'a, S, O> RowImporter<'a, S, O>
where
    S: QuestionStorage,
    O: ImportOutput,
{
    fn next_row(&mut self, fields: &[String]) {
        self.row += 1;
        if self.row == HEADER_ROW {
            return;
        }
        let outcome = import_row(fields, self.row, self.storage, self.owner, self.output);
        self.summary.outcomes.push((self.row, outcome));
    }

    // A blank line is a row holding a single empty field.
    fn blank_rows(&mut self, count: u64) {
        for _ in 0..count {
            self.next_row(&[String::new()]);
        }
    }
}

/// Imports every data row of a CSV source into `storage`.
///
/// The first line is a header and is discarded. Every following record or
/// blank line is a row and yields exactly one outcome; skipped or failed rows
/// never stop the import. Only a missing header aborts. A source that fails
/// after the header ends the import early: rows read so far are kept and the
/// summary is still reported.
pub fn import_questions<R, S, O>(
    source: R,
    storage: &S,
    owner: UserId,
    output: &O,
) -> Result<ImportSummary>
where
    R: Read,
    S: QuestionStorage,
    O: ImportOutput,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(TerminatedLines::new(source));

    let mut rows = RowImporter {
        storage,
        owner,
        output,
        row: 0,
        summary: ImportSummary::default(),
    };
    // The csv reader skips blank lines; they show up as extra line breaks
    // consumed together with the next record.
    let mut next_line = reader.position().line();
    let mut record = ByteRecord::new();
    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => {
                rows.blank_rows(reader.position().line().saturating_sub(next_line));
                break;
            }
            Err(e) if rows.row < HEADER_ROW => {
                let cause = format!("the header row is unreadable ({})", e);
                return Err(MalformedInput(cause).into());
            }
            Err(e) => {
                let row = rows.row + 1;
                let cause = e.to_string();
                tracing::warn!("Stopped reading the source at row {}: {}", row, cause);
                output.say(&Message::ReadInterrupted(row, cause.clone()));
                rows.summary.interrupted = Some((row, cause));
                break;
            }
        }

        let end_line = reader.position().line();
        let record_lines = count_line_breaks(&record) + 1;
        rows.blank_rows((end_line - next_line).saturating_sub(record_lines));
        let fields: Vec<String> = record
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .collect();
        rows.next_row(&fields);
        next_line = end_line;
    }

    if rows.row < HEADER_ROW {
        return Err(MalformedInput("the header row is missing".to_owned()).into());
    }

    let summary = rows.summary;
    tracing::debug!(
        "Import finished: {} imported, {} skipped, {} failed",
        summary.imported(),
        summary.skipped(),
        summary.failed()
    );
    output.say(&Message::ImportSummary(summary.imported()));
    Ok(summary)
}
