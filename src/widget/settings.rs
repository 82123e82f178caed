use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShareSettings {
    pub intent_url: String,
    pub site_name: String,
    pub hashtags: Vec<String>,
}

impl Default for ShareSettings {
    fn default() -> Self {
        ShareSettings {
            intent_url: "https://twitter.com/intent/tweet".to_owned(),
            site_name: "ethereum.org".to_owned(),
            hashtags: vec![
                "ethereumquiz".to_owned(),
                "ethereum".to_owned(),
                "quiz".to_owned(),
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub heading: String,
    pub passing_score: u32,
    pub share: ShareSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            heading: "Test your knowledge".to_owned(),
            passing_score: 65,
            share: Default::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    pub quiz_key: Option<String>,
    pub max_questions: Option<usize>,
}

impl WidgetConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn quiz_key<S: Into<String>>(mut self, quiz_key: S) -> Self {
        self.quiz_key = Some(quiz_key.into());
        self
    }

    pub fn max_questions(mut self, max_questions: usize) -> Self {
        self.max_questions = Some(max_questions);
        self
    }
}
