use crate::extract::ViewInfo;
use crate::generate::GenerationSummary;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

/// JSON reporter for programmatic output
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, summary: &GenerationSummary) -> Result<()> {
        println!("{}", self.to_json(summary)?);
        Ok(())
    }

    /// Serialize a summary as pretty-printed JSON
    pub fn to_json(&self, summary: &GenerationSummary) -> Result<String> {
        let report = JsonReport::from_summary(summary);
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    syntax: &'static str,
    output_dir: String,
    dry_run: bool,
    files: Vec<JsonFile<'a>>,
    failures: Vec<JsonFailure<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    source: String,
    output: String,
    views: &'a [ViewInfo],
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    source: String,
    reason: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    generated: usize,
    failed: usize,
    views: usize,
}

impl<'a> JsonReport<'a> {
    fn from_summary(summary: &'a GenerationSummary) -> Self {
        let files = summary
            .generated
            .iter()
            .map(|f| JsonFile {
                source: f.source.to_string_lossy().to_string(),
                output: f.output.to_string_lossy().to_string(),
                views: &f.views,
            })
            .collect();

        let failures = summary
            .failed
            .iter()
            .map(|f| JsonFailure {
                source: f.source.to_string_lossy().to_string(),
                reason: &f.reason,
            })
            .collect();

        Self {
            version: "1.0",
            syntax: summary.syntax.extension(),
            output_dir: summary.output_dir.to_string_lossy().to_string(),
            dry_run: summary.dry_run,
            files,
            failures,
            summary: JsonSummary {
                generated: summary.generated.len(),
                failed: summary.failed.len(),
                views: summary.total_views(),
            },
        }
    }
}
