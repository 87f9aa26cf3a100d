//! Rendering of a [`TodayView`] for the consumer.

pub mod alfred;
pub mod text;

use crate::errors::AppResult;
use crate::models::TodayView;
use clap::ValueEnum;

pub const NO_DATA_TITLE: &str = "No prayer data available";
pub const UNAVAILABLE_TITLE: &str = "Prayer times unavailable";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Alfred script filter JSON
    #[default]
    Alfred,
    /// Plain text, one prayer per line
    Text,
}

pub fn render(view: &TodayView, format: OutputFormat, icon_path: &str) -> AppResult<String> {
    match format {
        OutputFormat::Alfred => alfred::render(view, icon_path),
        OutputFormat::Text => Ok(text::render(view)),
    }
}
