use super::*;
use std::collections::HashSet;

use crate::widget::fixtures;

fn question_ids(quiz: &Quiz) -> Vec<String> {
    quiz.questions.iter().map(|q| q.id.clone()).collect()
}

#[test]
fn loads_every_question_without_cap() {
    let tables = fixtures::tables();
    let definition = tables.get_quiz_definition("what-is-ethereum").unwrap();
    let quiz = Quiz::load(definition, &tables, None, &mut fixtures::rng()).unwrap();

    assert_eq!(quiz.key, "what-is-ethereum");
    assert_eq!(quiz.title, "What is Ethereum?");
    assert!(!quiz.is_empty());
    let mut loaded = question_ids(&quiz);
    loaded.sort();
    assert_eq!(loaded, definition.question_ids);
}

#[test]
fn cap_keeps_a_subset() {
    let tables = fixtures::tables();
    let definition = tables.get_quiz_definition("what-is-ethereum").unwrap();
    let quiz = Quiz::load(definition, &tables, Some(3), &mut fixtures::rng()).unwrap();

    let loaded: HashSet<String> = question_ids(&quiz).into_iter().collect();
    assert_eq!(loaded.len(), 3);
    assert!(loaded
        .iter()
        .all(|id| definition.question_ids.contains(id)));
}

#[test]
fn cap_larger_than_quiz_keeps_everything() {
    let tables = fixtures::tables();
    let definition = tables.get_quiz_definition("ethereum-basics").unwrap();
    let quiz = Quiz::load(definition, &tables, Some(10), &mut fixtures::rng()).unwrap();
    assert_eq!(quiz.len(), 3);
}

#[test]
fn repeated_loads_vary_order() {
    let tables = fixtures::tables();
    let definition = tables.get_quiz_definition("what-is-ethereum").unwrap();
    let mut rng = fixtures::rng();
    let orders: HashSet<Vec<String>> = (0..20)
        .map(|_| question_ids(&Quiz::load(definition, &tables, None, &mut rng).unwrap()))
        .collect();
    assert!(orders.len() > 1);
}

#[test]
fn missing_question_aborts_loading() {
    let tables = fixtures::tables();
    let definition = QuizDefinition {
        key: "broken".to_owned(),
        title: "Broken".to_owned(),
        question_ids: vec!["a001".to_owned(), "zzz".to_owned()],
    };
    let result = Quiz::load(&definition, &tables, None, &mut fixtures::rng());
    assert!(result.is_err());
}
