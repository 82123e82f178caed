use anyhow::*;
use url::Url;

pub mod share;

#[cfg(test)]
pub mod mock;

pub const ANALYTICS_CATEGORY: &'static str = "Quiz widget";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Correct,
    Incorrect(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    AnswerRevealed { question_id: String, outcome: Outcome },
    QuestionRetried { question_id: String, attempt: u32 },
    ResultsSubmitted { quiz_key: String, score: u32 },
    ResultsShared { quiz_key: String },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub name: String,
    pub value: Option<u32>,
}

impl From<&Event> for AnalyticsEvent {
    fn from(event: &Event) -> Self {
        use Event::*;
        let (action, name, value) = match event {
            AnswerRevealed {
                question_id,
                outcome,
            } => {
                let detail = match outcome {
                    Outcome::Correct => "correct",
                    Outcome::Incorrect(answer_id) => answer_id.as_str(),
                };
                (
                    "Question answered",
                    format!("QID: {}, {}", question_id, detail),
                    None,
                )
            }
            QuestionRetried {
                question_id,
                attempt,
            } => (
                "Other",
                format!("Retry question QID: {}", question_id),
                Some(*attempt),
            ),
            ResultsSubmitted { quiz_key, score } => {
                ("Submit results", quiz_key.clone(), Some(*score))
            }
            ResultsShared { quiz_key } => ("Other", format!("Share results: {}", quiz_key), None),
        };
        AnalyticsEvent {
            category: ANALYTICS_CATEGORY.to_owned(),
            action: action.to_owned(),
            name,
            value,
        }
    }
}

pub trait WidgetOutput {
    fn report(&mut self, event: &Event);

    fn open_link(&mut self, url: &Url) -> Result<()>;
}
