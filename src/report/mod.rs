mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::generate::GenerationSummary;
use miette::Result;

/// Output format for run summaries
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for outputting a generation summary
pub struct Reporter {
    format: ReportFormat,
    show_views: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            show_views: false,
        }
    }

    /// List every bound view in terminal output
    pub fn with_views(mut self, show: bool) -> Self {
        self.show_views = show;
        self
    }

    /// Report the outcome of a run
    pub fn report(&self, summary: &GenerationSummary) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => TerminalReporter::new()
                .with_views(self.show_views)
                .report(summary),
            ReportFormat::Json => JsonReporter::new().report(summary),
        }
    }
}
