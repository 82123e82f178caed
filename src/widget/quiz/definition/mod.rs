use anyhow::{anyhow, Context, Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::widget::page::sanitize_key;

pub mod question;

pub use question::{AnswerOption, Question, RawQuestion};


#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuizDefinition {
    pub id: String,
    pub title: String,
    pub questions: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizDefinition {
    pub key: String,
    pub title: String,
    pub question_ids: Vec<String>,
}

impl TryFrom<RawQuizDefinition> for QuizDefinition {
    type Error = Error;

    fn try_from(raw_definition: RawQuizDefinition) -> Result<Self> {
        let key = sanitize_key(&raw_definition.id);
        if key.is_empty() {
            return Err(anyhow!("Quiz `{}` has an invalid id", raw_definition.id));
        }
        let question_ids: Vec<String> = raw_definition
            .questions
            .split('|')
            .map(sanitize_key)
            .filter(|id| !id.is_empty())
            .collect();
        if question_ids.is_empty() {
            return Err(anyhow!("Quiz `{}` has no questions", key));
        }
        for (index, question_id) in question_ids.iter().enumerate() {
            if question_ids[..index].contains(question_id) {
                return Err(anyhow!(
                    "Quiz `{}` lists question `{}` more than once",
                    key,
                    question_id
                ));
            }
        }
        Ok(QuizDefinition {
            key,
            title: raw_definition.title.trim().to_owned(),
            question_ids,
        })
    }
}

#[derive(Debug, Default)]
pub struct QuizTables {
    quizzes: Vec<QuizDefinition>,
    questions: HashMap<String, Question>,
}

impl QuizTables {
    pub fn new(quizzes: Vec<QuizDefinition>, questions: Vec<Question>) -> Result<QuizTables> {
        let mut question_table = HashMap::new();
        for question in questions {
            let id = question.id.clone();
            if question_table.insert(id.clone(), question).is_some() {
                return Err(anyhow!("Duplicate question `{}`", id));
            }
        }

        for (index, definition) in quizzes.iter().enumerate() {
            if quizzes[..index].iter().any(|d| d.key == definition.key) {
                return Err(anyhow!("Duplicate quiz `{}`", definition.key));
            }
            for question_id in &definition.question_ids {
                if !question_table.contains_key(question_id) {
                    return Err(anyhow!(
                        "Quiz `{}` references unknown question `{}`",
                        definition.key,
                        question_id
                    ));
                }
            }
        }

        Ok(QuizTables {
            quizzes,
            questions: question_table,
        })
    }

    pub fn open(quizzes: &Path, questions: &Path) -> Result<QuizTables> {
        let quizzes_file =
            File::open(quizzes).with_context(|| format!("Could not open {:?}", quizzes))?;
        let questions_file =
            File::open(questions).with_context(|| format!("Could not open {:?}", questions))?;
        QuizTables::from_readers(quizzes_file, questions_file)
    }

    pub fn from_readers<A: Read, B: Read>(quizzes: A, questions: B) -> Result<QuizTables> {
        let mut definitions = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(quizzes);
        for (row, definition) in csv_reader.deserialize().enumerate() {
            let raw_definition: RawQuizDefinition =
                definition.with_context(|| format!("Invalid quiz on row {}", row + 1))?;
            definitions.push(QuizDefinition::try_from(raw_definition)?);
        }

        let mut all_questions = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(questions);
        for (row, question) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion =
                question.with_context(|| format!("Invalid question on row {}", row + 1))?;
            all_questions.push(Question::try_from(raw_question)?);
        }

        QuizTables::new(definitions, all_questions)
    }

    pub fn get_quiz_definitions(&self) -> &Vec<QuizDefinition> {
        &self.quizzes
    }

    pub fn get_quiz_definition(&self, key: &str) -> Option<&QuizDefinition> {
        self.quizzes.iter().find(|d| d.key == key)
    }

    pub fn get_question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }
}
