use anyhow::*;
use url::Url;

use crate::widget::settings::ShareSettings;

#[derive(Debug)]
pub struct ShareDetails<'a> {
    pub title: &'a str,
    pub correct_count: usize,
    pub question_count: usize,
    pub page_url: &'a Url,
}

pub fn share_text(settings: &ShareSettings, details: &ShareDetails) -> String {
    let mut quiz_url = details.page_url.clone();
    quiz_url.set_fragment(Some("quiz"));
    format!(
        "I just took the \"{}\" quiz on {} and scored {} out of {}! Try it yourself at {}",
        details.title,
        settings.site_name,
        details.correct_count,
        details.question_count,
        quiz_url
    )
}

pub fn share_link(settings: &ShareSettings, details: &ShareDetails) -> Result<Url> {
    let text = share_text(settings, details);
    let mut params = vec![("text", text)];
    if !settings.hashtags.is_empty() {
        params.push(("hashtags", settings.hashtags.join(",")));
    }
    Url::parse_with_params(&settings.intent_url, &params)
        .with_context(|| format!("Invalid share intent URL {:?}", settings.intent_url))
}
