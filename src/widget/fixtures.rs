use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use url::Url;

use crate::widget::page::PageContext;
use crate::widget::quiz::definition::QuizTables;
use crate::widget::quiz::Quiz;
use crate::widget::session::Session;

pub const QUIZZES_CSV: &'static str = include_str!("../../data/quizzes.csv");
pub const QUESTIONS_CSV: &'static str = include_str!("../../data/questions.csv");

pub fn tables() -> Arc<QuizTables> {
    Arc::new(QuizTables::from_readers(QUIZZES_CSV.as_bytes(), QUESTIONS_CSV.as_bytes()).unwrap())
}

pub fn page(path: &str) -> PageContext {
    let url = Url::parse("https://ethereum.org").unwrap().join(path).unwrap();
    PageContext::new(url)
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(99)
}

// b001 -> b, b002 -> b, b003 -> a
pub fn basics_session() -> Session {
    let tables = tables();
    let questions = ["b001", "b002", "b003"]
        .iter()
        .map(|id| tables.get_question(id).unwrap().clone())
        .collect();
    Session::new(Some(Quiz {
        key: "ethereum-basics".to_owned(),
        title: "Ethereum basics".to_owned(),
        questions,
    }))
}

pub fn answer(session: &mut Session, answer_id: &str) {
    session.select(answer_id).unwrap();
    session.reveal().unwrap();
    session.advance().unwrap();
}
