use rand::Rng;

use crate::output::WidgetOutput;
use crate::widget::quiz::definition::Question;
use crate::widget::session::{AnswerChoice, Phase};
use crate::widget::view::{Controls, ProgressColor};
use crate::widget::Widget;

pub mod text;


pub trait QuestionRenderer {
    // Returns the answer the user picked, if any.
    fn render_question(
        &mut self,
        question: &Question,
        revealed: bool,
        draft: Option<&AnswerChoice>,
    ) -> Option<String>;
}

pub trait ResultsRenderer {
    fn render_results(&mut self, correct_count: usize, question_count: usize);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Empty,
    Question {
        title: String,
        index: usize,
        question_count: usize,
    },
    Summary {
        title: String,
        score: u32,
        passed: bool,
        celebrate: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub heading: String,
    pub progress: Vec<ProgressColor>,
    pub body: Body,
    pub controls: Controls,
}

pub fn present<O, R, Q, S>(widget: &mut Widget<O, R>, questions: &mut Q, results: &mut S) -> Frame
where
    O: WidgetOutput,
    R: Rng,
    Q: QuestionRenderer,
    S: ResultsRenderer,
{
    let (frame, choice) = {
        let view = widget.view();
        let can_select = view.controls.select;
        let mut choice = None;
        let body = match (view.quiz, view.phase) {
            (None, _) => Body::Empty,
            (Some(quiz), Phase::Completed) => {
                results.render_results(view.correct_count, view.question_count);
                Body::Summary {
                    title: quiz.title.clone(),
                    score: view.score,
                    passed: view.passed,
                    celebrate: view.celebrate,
                }
            }
            (Some(quiz), _) => {
                if let Some(question) = view.current_question {
                    choice = questions.render_question(question, view.revealed, view.draft);
                }
                Body::Question {
                    title: quiz.title.clone(),
                    index: view.current_index,
                    question_count: view.question_count,
                }
            }
        };
        let frame = Frame {
            heading: view.heading.to_owned(),
            progress: view.progress,
            body,
            controls: view.controls,
        };
        (frame, choice.filter(|_| can_select))
    };

    // The choice shows up on the next frame.
    if let Some(answer_id) = choice {
        widget.select_answer(&answer_id);
    }
    frame
}
