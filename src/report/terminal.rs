use crate::generate::{GeneratedFile, GenerationSummary};
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    /// List the views of each generated file
    show_views: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { show_views: false }
    }

    pub fn with_views(mut self, show: bool) -> Self {
        self.show_views = show;
        self
    }

    pub fn report(&self, summary: &GenerationSummary) -> Result<()> {
        if summary.generated.is_empty() && summary.failed.is_empty() {
            println!("{}", "No layout files found.".yellow());
            return Ok(());
        }

        println!();
        let verb = if summary.dry_run { "Would generate" } else { "Generated" };
        println!(
            "{}",
            format!(
                "{} {} {} files in {}:",
                verb,
                summary.generated.len(),
                summary.syntax,
                summary.output_dir.display()
            )
            .green()
            .bold()
        );

        for file in &summary.generated {
            self.print_file(file);
        }

        if summary.has_failures() {
            println!();
            println!(
                "{}",
                format!("Failed to process {} layouts:", summary.failed.len())
                    .red()
                    .bold()
            );
            for failure in &summary.failed {
                println!(
                    "  {} {}",
                    failure.source.display().to_string().cyan(),
                    failure.reason.dimmed()
                );
            }
        }

        println!("{}", "─".repeat(60).dimmed());
        println!(
            "Summary: {} files, {} views, {}",
            summary.generated.len(),
            summary.total_views(),
            if summary.has_failures() {
                format!("{} failed", summary.failed.len()).red().to_string()
            } else {
                "0 failed".green().to_string()
            }
        );

        Ok(())
    }

    fn print_file(&self, file: &GeneratedFile) {
        println!(
            "  {} {} {}",
            file.output.display().to_string().cyan(),
            "←".dimmed(),
            format!("{} views", file.views.len()).dimmed()
        );

        if self.show_views {
            for view in &file.views {
                println!("    {} {} {}", "→".dimmed(), view.id.white(), view.class_name.dimmed());
            }
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
