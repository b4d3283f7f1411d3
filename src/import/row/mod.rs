use crate::question::{trim_blank, AnswerOption, QuestionDraft, MAX_OPTIONS};


/// Title, body, both flags and one alternative pair.
pub const MIN_FIELDS: usize = 6;

const TITLE_FIELD: usize = 0;
const BODY_FIELD: usize = 1;
const MULTI_FIELD: usize = 2;
const RANDOM_FIELD: usize = 3;
const FIRST_OPTION_FIELD: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowIssue {
    TooShort(usize),
    NoValidOptions(String),
}

fn field<S: AsRef<str>>(fields: &[S], index: usize) -> &str {
    fields.get(index).map(|f| trim_blank(f.as_ref())).unwrap_or("")
}

// Mirrors a loose integer cast: the longest leading [+-]?digits prefix, 0 otherwise.
fn leading_integer(value: &str) -> i64 {
    let digits_start = if value.starts_with('+') || value.starts_with('-') {
        1
    } else {
        0
    };
    let digits_end = value[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| i + digits_start)
        .unwrap_or_else(|| value.len());
    let digits = &value[digits_start..digits_end];
    if digits.is_empty() {
        return 0;
    }
    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as i64));
    if value.starts_with('-') {
        -magnitude
    } else {
        magnitude
    }
}

fn parse_multi_flag(value: &str) -> bool {
    leading_integer(value) != 0
}

fn parse_random_flag(value: &str) -> bool {
    value != "0"
}

fn parse_options<S: AsRef<str>>(fields: &[S]) -> Vec<AnswerOption> {
    (0..MAX_OPTIONS)
        .map(|i| FIRST_OPTION_FIELD + i * 2)
        .filter_map(|text_index| {
            let text = field(fields, text_index);
            if text.is_empty() {
                return None;
            }
            let is_correct = field(fields, text_index + 1) == "1";
            Some(AnswerOption::new(text, is_correct))
        })
        .collect()
}

/// Maps one data row onto a question draft.
///
/// Rows shorter than `MIN_FIELDS` are rejected before any option is looked
/// at. Blank flags fall back to single answer and randomized order. Columns
/// past the fourth alternative pair are ignored. A blank body is left blank
/// here; `QuestionRecord::new` falls back to the title.
pub fn parse_row<S: AsRef<str>>(fields: &[S]) -> Result<QuestionDraft, RowIssue> {
    if fields.len() < MIN_FIELDS {
        return Err(RowIssue::TooShort(fields.len()));
    }

    let title = field(fields, TITLE_FIELD).to_owned();
    let options = parse_options(fields);
    if options.is_empty() {
        return Err(RowIssue::NoValidOptions(title));
    }

    Ok(QuestionDraft {
        title,
        body: field(fields, BODY_FIELD).to_owned(),
        allow_multiple_answers: parse_multi_flag(field(fields, MULTI_FIELD)),
        randomize_option_order: parse_random_flag(field(fields, RANDOM_FIELD)),
        options,
    })
}
