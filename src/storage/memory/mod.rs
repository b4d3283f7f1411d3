use anyhow::*;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::question::{AnswerOption, QuestionRecord};
use crate::storage::{OptionHandle, QuestionHandle, QuestionStorage};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredQuestion {
    pub id: QuestionHandle,
    pub question: QuestionRecord,
    pub option_ids: Vec<OptionHandle>,
}

#[derive(Debug, Default)]
struct Tables {
    options: HashMap<OptionHandle, AnswerOption>,
    questions: Vec<StoredQuestion>,
    next_option_id: u64,
    next_question_id: u64,
}

/// Insert-only storage kept in process memory. Clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get_questions(&self) -> Vec<StoredQuestion> {
        self.tables.read().questions.clone()
    }

    #[cfg(test)]
    pub fn get_option(&self, handle: OptionHandle) -> Option<AnswerOption> {
        self.tables.read().options.get(&handle).cloned()
    }

    pub fn question_count(&self) -> usize {
        self.tables.read().questions.len()
    }
}

impl QuestionStorage for MemoryStorage {
    fn create_answer_option(&self, option: &AnswerOption) -> Result<OptionHandle> {
        let mut tables = self.tables.write();
        tables.next_option_id += 1;
        let handle = OptionHandle(tables.next_option_id);
        tables.options.insert(handle, option.clone());
        Ok(handle)
    }

    fn create_question(
        &self,
        question: &QuestionRecord,
        options: Vec<OptionHandle>,
    ) -> Result<QuestionHandle> {
        let mut tables = self.tables.write();
        if let Some(missing) = options.iter().find(|h| !tables.options.contains_key(*h)) {
            return Err(anyhow!("Unknown alternative {:?}", missing));
        }
        tables.next_question_id += 1;
        let id = QuestionHandle(tables.next_question_id);
        tables.questions.push(StoredQuestion {
            id,
            question: question.clone(),
            option_ids: options,
        });
        Ok(id)
    }
}
