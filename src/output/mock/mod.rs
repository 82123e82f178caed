use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;

use crate::output::{Event, WidgetOutput};

#[derive(Clone, Default)]
pub struct MockWidgetOutput {
    events: Arc<RwLock<Vec<Event>>>,
    links: Arc<RwLock<Vec<Url>>>,
    fail_links: bool,
}

impl MockWidgetOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn failing_links() -> Self {
        MockWidgetOutput {
            fail_links: true,
            ..Default::default()
        }
    }

    pub fn flush(&self) -> Vec<Event> {
        std::mem::replace(&mut *self.events.write(), Vec::new())
    }

    pub fn contains_event(&self, event: &Event) -> bool {
        self.events.read().iter().any(|e| e == event)
    }

    pub fn get_opened_links(&self) -> Vec<Url> {
        self.links.read().clone()
    }
}

impl WidgetOutput for MockWidgetOutput {
    fn report(&mut self, event: &Event) {
        self.events.write().push(event.clone());
    }

    fn open_link(&mut self, url: &Url) -> Result<()> {
        if self.fail_links {
            return Err(anyhow!("Popups are blocked"));
        }
        self.links.write().push(url.clone());
        Ok(())
    }
}
