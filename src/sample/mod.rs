use crate::output::{ImportOutput, Message};
use crate::question::{AnswerOption, QuestionDraft, QuestionRecord, UserId};
use crate::storage::{save_question, QuestionHandle, QuestionStorage};

#[cfg(test)]
mod tests;

pub const SAMPLE_TITLE: &str = "A multiple choice question created from code";

pub fn sample_question(owner: UserId) -> anyhow::Result<QuestionRecord> {
    let draft = QuestionDraft {
        title: SAMPLE_TITLE.to_owned(),
        body: String::new(),
        allow_multiple_answers: false,
        randomize_option_order: false,
        options: vec![
            AnswerOption::new("Option A", true),
            AnswerOption::new("Option B", false),
        ],
    };
    QuestionRecord::new(draft, owner)
}

/// Creates a single hand-built question, bypassing CSV parsing entirely.
pub fn create_sample_question<S, O>(
    storage: &S,
    owner: UserId,
    output: &O,
) -> Option<QuestionHandle>
where
    S: QuestionStorage,
    O: ImportOutput,
{
    let saved = sample_question(owner).and_then(|question| {
        let handle = save_question(storage, &question)?;
        Ok((question.title, handle))
    });
    match saved {
        Ok((title, handle)) => {
            output.say(&Message::QuestionCreated(title, handle));
            Some(handle)
        }
        Err(e) => {
            output.say(&Message::QuestionCreationFailed(format!("{:#}", e)));
            None
        }
    }
}
