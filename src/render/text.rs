use itertools::Itertools;

use crate::render::{Body, Frame, QuestionRenderer, ResultsRenderer};
use crate::widget::quiz::definition::Question;
use crate::widget::session::AnswerChoice;
use crate::widget::view::ProgressColor;

fn progress_symbol(color: &ProgressColor) -> char {
    match color {
        ProgressColor::Correct => '+',
        ProgressColor::Incorrect => 'x',
        ProgressColor::Current => '>',
        ProgressColor::Dim => '.',
    }
}

pub fn render_progress(progress: &[ProgressColor]) -> String {
    progress.iter().map(progress_symbol).collect()
}

#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
    queued_choice: Option<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn choose<S: Into<String>>(&mut self, answer_id: S) {
        self.queued_choice = Some(answer_id.into());
    }

    pub fn render_frame(&mut self, frame: &Frame) {
        self.lines.push(format!("== {} ==", frame.heading));
        match &frame.body {
            Body::Empty => (),
            Body::Question {
                title,
                index,
                question_count,
            } => {
                self.lines.push(format!(
                    "{} ({}/{}) [{}]",
                    title,
                    index + 1,
                    question_count,
                    render_progress(&frame.progress)
                ));
            }
            Body::Summary {
                title,
                score,
                passed,
                celebrate,
            } => {
                let verdict = if *passed { "passed" } else { "not passed" };
                self.lines
                    .push(format!("{}: {}% ({})", title, score, verdict));
                if *celebrate {
                    self.lines.push("*** Congratulations! ***".to_owned());
                }
            }
        }

        let controls = &frame.controls;
        let buttons = [
            ("submit", controls.submit),
            ("retry", controls.retry),
            ("next", controls.next),
            ("share", controls.share),
            ("retake", controls.retake),
        ];
        let enabled = buttons
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| *name)
            .join(" ");
        if !enabled.is_empty() {
            self.lines.push(format!("<{}>", enabled));
        }
    }

    pub fn flush(&mut self) -> String {
        std::mem::replace(&mut self.lines, Vec::new()).join("\n")
    }
}

impl QuestionRenderer for TextRenderer {
    fn render_question(
        &mut self,
        question: &Question,
        revealed: bool,
        draft: Option<&AnswerChoice>,
    ) -> Option<String> {
        self.lines.push(question.prompt.clone());
        for answer in &question.answers {
            let selected = draft.map_or(false, |d| d.answer_id == answer.id);
            let marker = if selected { "*" } else { " " };
            let verdict = match (revealed && selected, draft) {
                (true, Some(d)) if d.is_correct => " - correct",
                (true, Some(_)) => " - incorrect",
                _ => "",
            };
            self.lines.push(format!(
                "{} ({}) {}{}",
                marker, answer.id, answer.label, verdict
            ));
        }
        if revealed {
            return None;
        }
        self.queued_choice.take()
    }
}

impl ResultsRenderer for TextRenderer {
    fn render_results(&mut self, correct_count: usize, question_count: usize) {
        self.lines.push(format!(
            "You got {} of {} questions right",
            correct_count, question_count
        ));
    }
}
