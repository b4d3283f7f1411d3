use super::*;
use anyhow::anyhow;

use crate::output::mock::MockImportOutput;
use crate::storage::{MemoryStorage, OptionHandle};

struct ReadOnlyStorage;

impl QuestionStorage for ReadOnlyStorage {
    fn create_answer_option(&self, _option: &AnswerOption) -> anyhow::Result<OptionHandle> {
        Err(anyhow!("storage is read-only"))
    }

    fn create_question(
        &self,
        _question: &QuestionRecord,
        _options: Vec<OptionHandle>,
    ) -> anyhow::Result<QuestionHandle> {
        Err(anyhow!("storage is read-only"))
    }
}

#[test]
fn creates_question_with_two_alternatives() {
    let storage = MemoryStorage::new();
    let output = MockImportOutput::new();

    let handle = create_sample_question(&storage, UserId(9), &output).unwrap();
    let stored = storage.get_questions();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, handle);

    let question = &stored[0].question;
    assert_eq!(question.title, SAMPLE_TITLE);
    assert_eq!(question.body, SAMPLE_TITLE);
    assert_eq!(question.owner_id, UserId(9));
    assert!(question.published);
    assert!(!question.allow_multiple_answers);
    assert!(!question.randomize_option_order);
    assert_eq!(question.options.iter().filter(|o| o.is_correct).count(), 1);
    assert_eq!(question.options[0].score_if_chosen, 1);
    assert_eq!(question.options[1].score_if_chosen, 0);

    assert!(output.contains_message(&Message::QuestionCreated(
        SAMPLE_TITLE.to_owned(),
        handle
    )));
}

#[test]
fn reports_storage_failure() {
    let output = MockImportOutput::new();

    assert!(create_sample_question(&ReadOnlyStorage, UserId(1), &output).is_none());
    let messages = output.flush();
    assert_eq!(messages.len(), 1);
    match &messages[0] {
        Message::QuestionCreationFailed(cause) => assert!(cause.contains("read-only")),
        other => panic!("Unexpected message {:?}", other),
    }
}
