pub mod output;
pub mod render;
pub mod widget;

pub use crate::output::{AnalyticsEvent, Event, Outcome, WidgetOutput};
pub use crate::widget::page::PageContext;
pub use crate::widget::quiz::definition::QuizTables;
pub use crate::widget::settings::{Settings, ShareSettings, WidgetConfig};
pub use crate::widget::Widget;
