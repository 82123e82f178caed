use anyhow::{anyhow, Context, Result};

use crate::widget::quiz::definition::Question;
use crate::widget::quiz::Quiz;


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerChoice {
    pub answer_id: String,
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Unanswered,
    Drafted,
    Revealed,
    Completed,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    quiz: Option<Quiz>,
    answers: Vec<AnswerChoice>,
    draft: Option<AnswerChoice>,
    revealed: bool,
    retries: u32,
}

impl Session {
    pub fn new(quiz: Option<Quiz>) -> Self {
        Session {
            quiz,
            ..Default::default()
        }
    }

    pub fn get_quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn get_answers(&self) -> &Vec<AnswerChoice> {
        &self.answers
    }

    pub fn get_draft(&self) -> Option<&AnswerChoice> {
        self.draft.as_ref()
    }

    pub fn get_selected_answer_id(&self) -> Option<&str> {
        self.draft.as_ref().map(|d| d.answer_id.as_str())
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn get_retries(&self) -> u32 {
        self.retries
    }

    pub fn get_current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn get_current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|q| q.get_question(self.get_current_index()))
    }

    pub fn get_question_count(&self) -> usize {
        self.quiz.as_ref().map_or(0, |q| q.len())
    }

    pub fn is_completed(&self) -> bool {
        self.quiz.is_some() && self.answers.len() == self.get_question_count()
    }

    pub fn get_correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    pub fn get_phase(&self) -> Phase {
        if self.quiz.is_none() {
            Phase::Empty
        } else if self.is_completed() {
            Phase::Completed
        } else if self.revealed {
            Phase::Revealed
        } else if self.draft.is_some() {
            Phase::Drafted
        } else {
            Phase::Unanswered
        }
    }

    pub fn select(&mut self, answer_id: &str) -> Result<&AnswerChoice> {
        match self.get_phase() {
            Phase::Unanswered | Phase::Drafted => (),
            Phase::Empty => return Err(anyhow!("There is no quiz to answer")),
            Phase::Revealed => return Err(anyhow!("The answer was already revealed")),
            Phase::Completed => return Err(anyhow!("Every question was already answered")),
        };
        let question = self
            .get_current_question()
            .context("There is no active question")?;
        if question.get_answer(answer_id).is_none() {
            return Err(anyhow!(
                "Question `{}` has no answer `{}`",
                question.id,
                answer_id
            ));
        }
        let choice = AnswerChoice {
            answer_id: answer_id.to_owned(),
            is_correct: question.is_answer_correct(answer_id),
        };
        Ok(self.draft.insert(choice))
    }

    pub fn reveal(&mut self) -> Result<&AnswerChoice> {
        if self.revealed {
            return Err(anyhow!("The answer was already revealed"));
        }
        let draft = self.draft.as_ref().context("No answer was selected")?;
        self.revealed = true;
        Ok(draft)
    }

    pub fn retry(&mut self) -> Result<()> {
        let is_correct = match (&self.draft, self.revealed) {
            (Some(draft), true) => draft.is_correct,
            _ => return Err(anyhow!("Cannot retry before the answer is revealed")),
        };
        if is_correct {
            return Err(anyhow!("Cannot retry a correctly answered question"));
        }
        self.draft = None;
        self.revealed = false;
        self.retries += 1;
        Ok(())
    }

    pub fn advance(&mut self) -> Result<()> {
        if !self.revealed {
            return Err(anyhow!("Cannot move on before the answer is revealed"));
        }
        let draft = self.draft.take().context("No answer was selected")?;
        self.answers.push(draft);
        self.revealed = false;
        self.retries = 0;
        Ok(())
    }
}
