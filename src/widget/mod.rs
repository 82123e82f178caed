use anyhow::{Context, Result};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::sync::Arc;

use crate::output::share::{share_link, ShareDetails};
use crate::output::{Event, Outcome, WidgetOutput};

pub mod page;
pub mod quiz;
pub mod session;
pub mod settings;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;

use self::page::{resolve_quiz_key, PageContext};
use self::quiz::definition::QuizTables;
use self::quiz::Quiz;
use self::session::Session;
use self::settings::{Settings, WidgetConfig};
use self::view::{compute_score, ViewModel};

pub struct Widget<O: WidgetOutput, R: Rng = ThreadRng> {
    tables: Arc<QuizTables>,
    config: WidgetConfig,
    page: PageContext,
    settings: Settings,
    session: Session,
    output: O,
    rng: R,
}

impl<O: WidgetOutput> Widget<O, ThreadRng> {
    pub fn new(
        tables: Arc<QuizTables>,
        config: WidgetConfig,
        page: PageContext,
        settings: Settings,
        output: O,
    ) -> Result<Self> {
        Widget::with_rng(tables, config, page, settings, output, rand::thread_rng())
    }
}

impl<O: WidgetOutput, R: Rng> Widget<O, R> {
    pub fn with_rng(
        tables: Arc<QuizTables>,
        config: WidgetConfig,
        page: PageContext,
        settings: Settings,
        output: O,
        rng: R,
    ) -> Result<Self> {
        let mut widget = Widget {
            tables,
            config,
            page,
            settings,
            session: Session::default(),
            output,
            rng,
        };
        widget.load()?;
        Ok(widget)
    }

    fn load(&mut self) -> Result<()> {
        self.session = Session::default();

        let key = match resolve_quiz_key(self.config.quiz_key.as_deref(), &self.page, &self.tables)
        {
            Some(key) => key,
            None => {
                log::info!("No quiz to show on {}", self.page.url);
                return Ok(());
            }
        };
        let definition = self
            .tables
            .get_quiz_definition(&key)
            .with_context(|| format!("Quiz `{}` not found", key))?;

        let max_questions = self.get_max_questions();
        let quiz = Quiz::load(definition, &self.tables, max_questions, &mut self.rng)
            .with_context(|| format!("Could not load quiz `{}`", key))?;
        log::info!(
            "Loaded quiz `{}` with {} questions",
            quiz.key,
            quiz.questions.len()
        );
        self.session = Session::new(Some(quiz));
        Ok(())
    }

    fn get_max_questions(&self) -> Option<usize> {
        match self.config.max_questions {
            Some(0) => {
                log::warn!("Ignoring a maximum of 0 questions");
                None
            }
            max_questions => max_questions,
        }
    }

    pub fn get_session(&self) -> &Session {
        &self.session
    }

    pub fn get_config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn get_page(&self) -> &PageContext {
        &self.page
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> ViewModel<'_> {
        ViewModel::new(&self.session, &self.settings)
    }

    pub fn set_quiz_key(&mut self, quiz_key: Option<String>) -> Result<()> {
        if self.config.quiz_key == quiz_key {
            return Ok(());
        }
        self.config.quiz_key = quiz_key;
        self.load()
    }

    pub fn set_max_questions(&mut self, max_questions: Option<usize>) {
        self.config.max_questions = max_questions;
    }

    pub fn select_answer(&mut self, answer_id: &str) {
        if !self.view().controls.select {
            log::debug!("Ignoring answer selection");
            return;
        }
        if let Err(e) = self.session.select(answer_id) {
            log::debug!("Ignoring answer selection: {:#}", e);
        }
    }

    pub fn submit_answer(&mut self) {
        if !self.view().controls.submit {
            log::debug!("Ignoring answer submission");
            return;
        }
        let question_id = match self.session.get_current_question() {
            Some(question) => question.id.clone(),
            None => return,
        };
        let outcome = match self.session.reveal() {
            Err(e) => {
                log::debug!("Ignoring answer submission: {:#}", e);
                return;
            }
            Ok(draft) if draft.is_correct => Outcome::Correct,
            Ok(draft) => Outcome::Incorrect(draft.answer_id.clone()),
        };
        self.output.report(&Event::AnswerRevealed {
            question_id,
            outcome,
        });
    }

    pub fn retry_question(&mut self) {
        if !self.view().controls.retry {
            log::debug!("Ignoring question retry");
            return;
        }
        let question_id = match self.session.get_current_question() {
            Some(question) => question.id.clone(),
            None => return,
        };
        if let Err(e) = self.session.retry() {
            log::debug!("Ignoring question retry: {:#}", e);
            return;
        }
        self.output.report(&Event::QuestionRetried {
            question_id,
            attempt: self.session.get_retries(),
        });
    }

    pub fn next_question(&mut self) {
        if !self.view().controls.next {
            log::debug!("Ignoring next question");
            return;
        }
        if let Err(e) = self.session.advance() {
            log::debug!("Ignoring next question: {:#}", e);
            return;
        }
        if let (true, Some(quiz)) = (self.session.is_completed(), self.session.get_quiz()) {
            let score = compute_score(
                self.session.get_correct_count(),
                self.session.get_question_count(),
            );
            log::info!("Quiz `{}` completed with a score of {}", quiz.key, score);
            self.output.report(&Event::ResultsSubmitted {
                quiz_key: quiz.key.clone(),
                score,
            });
        }
    }

    pub fn retake(&mut self) -> Result<()> {
        self.load()
    }

    pub fn share_results(&mut self) {
        let quiz = match self.session.get_quiz() {
            Some(quiz) if self.session.is_completed() => quiz,
            _ => {
                log::debug!("Ignoring share request before the quiz is completed");
                return;
            }
        };

        let details = ShareDetails {
            title: &quiz.title,
            correct_count: self.session.get_correct_count(),
            question_count: self.session.get_question_count(),
            page_url: &self.page.url,
        };
        let link = match share_link(&self.settings.share, &details) {
            Ok(link) => link,
            Err(e) => {
                log::warn!("Could not build share link: {:#}", e);
                return;
            }
        };

        self.output.report(&Event::ResultsShared {
            quiz_key: quiz.key.clone(),
        });
        if let Err(e) = self.output.open_link(&link) {
            log::warn!("Could not open share link: {:#}", e);
        }
    }
}
