use anyhow::*;
use serde::Serialize;
use std::fmt;

use crate::question::{AnswerOption, QuestionRecord};

pub mod memory;

pub use memory::MemoryStorage;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct OptionHandle(pub u64);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct QuestionHandle(pub u64);

impl fmt::Display for QuestionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where created questions end up.
///
/// Options are created first and the question then references them by
/// handle. Either call may fail; callers treat a failure as the loss of the
/// whole question and carry on with the next one.
pub trait QuestionStorage {
    fn create_answer_option(&self, option: &AnswerOption) -> Result<OptionHandle>;

    fn create_question(
        &self,
        question: &QuestionRecord,
        options: Vec<OptionHandle>,
    ) -> Result<QuestionHandle>;
}

pub fn save_question<S: QuestionStorage>(
    storage: &S,
    question: &QuestionRecord,
) -> Result<QuestionHandle> {
    let mut option_handles = Vec::with_capacity(question.options.len());
    for option in &question.options {
        let handle = storage
            .create_answer_option(option)
            .with_context(|| format!("Could not create alternative \"{}\"", option.text))?;
        option_handles.push(handle);
    }
    storage.create_question(question, option_handles)
}
