use crate::widget::quiz::definition::Question;
use crate::widget::quiz::Quiz;
use crate::widget::session::{AnswerChoice, Phase, Session};
use crate::widget::settings::Settings;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressColor {
    Correct,
    Incorrect,
    Current,
    Dim,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub select: bool,
    pub submit: bool,
    pub retry: bool,
    pub next: bool,
    pub share: bool,
    pub retake: bool,
}

pub fn compute_score(correct_count: usize, question_count: usize) -> u32 {
    if question_count == 0 {
        return 0;
    }
    (100 * correct_count / question_count) as u32
}

pub fn compute_progress(session: &Session) -> Vec<ProgressColor> {
    let current_index = session.get_current_index();
    let revealed_draft = session.get_draft().filter(|_| session.is_revealed());
    (0..session.get_question_count())
        .map(|index| {
            let is_current = index == current_index;
            let outcome = match (is_current, revealed_draft) {
                (true, Some(draft)) => Some(draft.is_correct),
                _ => session.get_answers().get(index).map(|a| a.is_correct),
            };
            match outcome {
                Some(true) => ProgressColor::Correct,
                Some(false) => ProgressColor::Incorrect,
                None if is_current => ProgressColor::Current,
                None => ProgressColor::Dim,
            }
        })
        .collect()
}

#[derive(Debug)]
pub struct ViewModel<'a> {
    pub heading: &'a str,
    pub quiz: Option<&'a Quiz>,
    pub phase: Phase,
    pub current_index: usize,
    pub current_question: Option<&'a Question>,
    pub draft: Option<&'a AnswerChoice>,
    pub selected_answer_id: Option<&'a str>,
    pub revealed: bool,
    pub question_count: usize,
    pub correct_count: usize,
    pub completed: bool,
    pub score: u32,
    pub passed: bool,
    pub celebrate: bool,
    pub progress: Vec<ProgressColor>,
    pub controls: Controls,
}

impl<'a> ViewModel<'a> {
    pub fn new(session: &'a Session, settings: &'a Settings) -> Self {
        let phase = session.get_phase();
        let quiz = session.get_quiz();
        let question_count = session.get_question_count();
        let correct_count = session.get_correct_count();
        let completed = session.is_completed();
        let score = compute_score(correct_count, question_count);
        let passed = score > settings.passing_score;
        let draft = session.get_draft();

        let controls = Controls {
            select: phase == Phase::Unanswered || phase == Phase::Drafted,
            submit: phase == Phase::Drafted,
            retry: phase == Phase::Revealed && draft.map_or(false, |d| !d.is_correct),
            next: phase == Phase::Revealed,
            share: phase == Phase::Completed,
            retake: quiz.is_some(),
        };

        ViewModel {
            heading: &settings.heading,
            quiz,
            phase,
            current_index: session.get_current_index(),
            current_question: session.get_current_question(),
            draft,
            selected_answer_id: session.get_selected_answer_id(),
            revealed: session.is_revealed(),
            question_count,
            correct_count,
            completed,
            score,
            passed,
            celebrate: quiz.is_some() && completed && passed,
            progress: compute_progress(session),
            controls,
        }
    }
}
