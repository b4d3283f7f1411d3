use anyhow::*;
use serde::Serialize;
use std::fmt;


pub const MAX_OPTIONS: usize = 4;

// Spaces, tabs, line breaks, NUL and vertical tab. Other Unicode whitespace is content.
const BLANK_CHARACTERS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(BLANK_CHARACTERS)
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
    pub score_if_chosen: i32,
    pub score_if_not_chosen: i32,
}

impl AnswerOption {
    pub fn new(text: &str, is_correct: bool) -> Self {
        AnswerOption {
            text: trim_blank(text).to_owned(),
            is_correct,
            score_if_chosen: if is_correct { 1 } else { 0 },
            score_if_not_chosen: 0,
        }
    }
}

/// A multiple choice question ready to be handed to storage.
///
/// Records are only built through `QuestionRecord::new`, which guarantees a
/// non-blank title and between one and `MAX_OPTIONS` non-blank options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionRecord {
    pub title: String,
    pub body: String,
    pub allow_multiple_answers: bool,
    pub randomize_option_order: bool,
    pub options: Vec<AnswerOption>,
    pub owner_id: UserId,
    pub published: bool,
}

#[derive(Clone, Debug, Default)]
pub struct QuestionDraft {
    pub title: String,
    pub body: String,
    pub allow_multiple_answers: bool,
    pub randomize_option_order: bool,
    pub options: Vec<AnswerOption>,
}

impl QuestionRecord {
    pub fn new(draft: QuestionDraft, owner_id: UserId) -> Result<QuestionRecord> {
        let title = trim_blank(&draft.title).to_owned();
        if title.is_empty() {
            return Err(anyhow!("Question title cannot be blank"));
        }

        let options: Vec<AnswerOption> = draft
            .options
            .into_iter()
            .filter(|o| !trim_blank(&o.text).is_empty())
            .collect();
        if options.is_empty() {
            return Err(anyhow!("Question \"{}\" has no valid alternatives", title));
        }
        if options.len() > MAX_OPTIONS {
            return Err(anyhow!(
                "Question \"{}\" has {} alternatives, at most {} are supported",
                title,
                options.len(),
                MAX_OPTIONS
            ));
        }

        let body = match trim_blank(&draft.body) {
            "" => title.clone(),
            body => body.to_owned(),
        };

        Ok(QuestionRecord {
            title,
            body,
            allow_multiple_answers: draft.allow_multiple_answers,
            randomize_option_order: draft.randomize_option_order,
            options,
            owner_id,
            published: true,
        })
    }
}
