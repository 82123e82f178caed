use anyhow::{anyhow, Context, Error, Result};
use serde::Deserialize;
use std::convert::TryFrom;

use crate::widget::page::sanitize_key;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub id: String,
    pub prompt: String,
    pub answers: String,
    pub correct_answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOption {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub answers: Vec<AnswerOption>,
    pub correct_answer: String,
}

impl Question {
    pub fn is_answer_correct(&self, answer_id: &str) -> bool {
        self.correct_answer == answer_id
    }

    pub fn get_answer(&self, answer_id: &str) -> Option<&AnswerOption> {
        self.answers.iter().find(|a| a.id == answer_id)
    }
}

fn parse_answer(entry: &str) -> Result<AnswerOption> {
    let mut parts = entry.splitn(2, ':');
    let id = parts.next().map(str::trim).unwrap_or_default();
    let label = parts
        .next()
        .map(str::trim)
        .with_context(|| format!("Answer `{}` has no label", entry))?;
    if id.is_empty() {
        return Err(anyhow!("Answer `{}` has no id", entry));
    }
    Ok(AnswerOption {
        id: id.to_owned(),
        label: label.to_owned(),
    })
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let id = sanitize_key(&raw_question.id);
        if id.is_empty() {
            return Err(anyhow!("Question `{}` has an invalid id", raw_question.id));
        }

        let answers = raw_question
            .answers
            .split('|')
            .filter(|entry| !entry.trim().is_empty())
            .map(parse_answer)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Could not read answers of question `{}`", id))?;
        if answers.is_empty() {
            return Err(anyhow!("Question `{}` has no answers", id));
        }
        for (index, answer) in answers.iter().enumerate() {
            if answers[..index].iter().any(|a| a.id == answer.id) {
                return Err(anyhow!(
                    "Question `{}` has duplicate answer `{}`",
                    id,
                    answer.id
                ));
            }
        }

        let correct_answer = raw_question.correct_answer.trim().to_owned();
        if !answers.iter().any(|a| a.id == correct_answer) {
            return Err(anyhow!(
                "Question `{}` names `{}` as its correct answer but has no such answer",
                id,
                correct_answer
            ));
        }

        Ok(Question {
            id,
            prompt: raw_question.prompt,
            answers,
            correct_answer,
        })
    }
}
