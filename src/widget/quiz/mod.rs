use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use self::definition::*;

pub mod definition;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub key: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn load<R: Rng + ?Sized>(
        definition: &QuizDefinition,
        tables: &QuizTables,
        max_questions: Option<usize>,
        rng: &mut R,
    ) -> Result<Quiz> {
        let mut questions = definition
            .question_ids
            .iter()
            .map(|id| {
                tables.get_question(id).cloned().with_context(|| {
                    format!("Quiz `{}` references unknown question `{}`", definition.key, id)
                })
            })
            .collect::<Result<Vec<Question>>>()?;

        questions.shuffle(rng);
        if let Some(max_questions) = max_questions {
            questions.truncate(max_questions);
        }

        Ok(Quiz {
            key: definition.key.clone(),
            title: definition.title.clone(),
            questions,
        })
    }

    pub fn get_question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
