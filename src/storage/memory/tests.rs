use super::*;
use crate::question::{QuestionDraft, UserId};
use crate::storage::save_question;

fn sample_record(title: &str) -> QuestionRecord {
    let draft = QuestionDraft {
        title: title.to_owned(),
        body: String::new(),
        allow_multiple_answers: false,
        randomize_option_order: true,
        options: vec![AnswerOption::new("A", true), AnswerOption::new("B", false)],
    };
    QuestionRecord::new(draft, UserId(1)).unwrap()
}

#[test]
fn assigns_sequential_handles() {
    let storage = MemoryStorage::new();
    let first = save_question(&storage, &sample_record("Q1")).unwrap();
    let second = save_question(&storage, &sample_record("Q2")).unwrap();
    assert_eq!(first, QuestionHandle(1));
    assert_eq!(second, QuestionHandle(2));

    let questions = storage.get_questions();
    assert_eq!(questions[0].option_ids, vec![OptionHandle(1), OptionHandle(2)]);
    assert_eq!(questions[1].option_ids, vec![OptionHandle(3), OptionHandle(4)]);
    assert_eq!(storage.get_option(OptionHandle(3)).unwrap().text, "A");
}

#[test]
fn clones_share_tables() {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    save_question(&storage, &sample_record("Q1")).unwrap();
    assert_eq!(view.question_count(), 1);
}

#[test]
fn does_not_deduplicate() {
    let storage = MemoryStorage::new();
    let record = sample_record("Q1");
    save_question(&storage, &record).unwrap();
    save_question(&storage, &record).unwrap();
    let questions = storage.get_questions();
    assert_eq!(questions.len(), 2);
    assert_ne!(questions[0].id, questions[1].id);
    assert_eq!(questions[0].question, questions[1].question);
}

#[test]
fn rejects_unknown_options() {
    let storage = MemoryStorage::new();
    let result = storage.create_question(&sample_record("Q1"), vec![OptionHandle(42)]);
    assert!(result.is_err());
    assert_eq!(storage.question_count(), 0);
}

#[test]
fn stored_questions_serialize_to_json() {
    let storage = MemoryStorage::new();
    save_question(&storage, &sample_record("Q1")).unwrap();

    let json = serde_json::to_value(&storage.get_questions()).unwrap();
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["option_ids"], serde_json::json!([1, 2]));
    assert_eq!(json[0]["question"]["body"], "Q1");
    assert_eq!(json[0]["question"]["owner_id"], 1);
    assert_eq!(json[0]["question"]["options"][0]["score_if_chosen"], 1);
}
