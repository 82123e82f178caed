use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;
use url::Url;

use crate::widget::quiz::definition::QuizTables;


lazy_static! {
    static ref FORBIDDEN_KEY_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9-]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new("\\s+").unwrap();
}

pub fn sanitize_key(key: &str) -> String {
    let key = unidecode(key).to_lowercase();
    let key: String = WHITESPACE_REGEX.replace_all(key.trim(), "-").into();
    FORBIDDEN_KEY_CHARACTERS_REGEX
        .replace_all(&key, "")
        .into()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageContext {
    pub url: Url,
    pub quiz_key: Option<String>,
}

impl PageContext {
    pub fn new(url: Url) -> Self {
        PageContext {
            url,
            quiz_key: None,
        }
    }

    pub fn with_quiz_key<S: Into<String>>(mut self, quiz_key: S) -> Self {
        self.quiz_key = Some(quiz_key.into());
        self
    }

    /// Finds the first quiz, in table order, whose key is a whole segment of the page path.
    fn infer_quiz_key(&self, tables: &QuizTables) -> Option<String> {
        let segments: Vec<String> = match self.url.path_segments() {
            Some(segments) => segments.map(str::to_lowercase).collect(),
            None => return None,
        };
        tables
            .get_quiz_definitions()
            .iter()
            .find(|definition| segments.iter().any(|s| *s == definition.key))
            .map(|definition| definition.key.clone())
    }
}

// Explicit key first, then the key handed over by the page, then whatever the page path names.
pub fn resolve_quiz_key(
    explicit_key: Option<&str>,
    page: &PageContext,
    tables: &QuizTables,
) -> Option<String> {
    let supplied_key = explicit_key.or_else(|| page.quiz_key.as_deref());
    match supplied_key {
        Some(key) => {
            let key = sanitize_key(key);
            if tables.get_quiz_definition(&key).is_some() {
                Some(key)
            } else {
                log::warn!("No quiz named `{}`", key);
                None
            }
        }
        None => page.infer_quiz_key(tables),
    }
}
