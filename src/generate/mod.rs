//! Generation pipeline
//!
//! Prepares the output directory, then runs read → parse → extract → render
//! → write for every layout file. Files are independent of each other, so
//! they may be processed in parallel.

use crate::config::Config;
use crate::discovery::{LayoutFile, LayoutFinder};
use crate::extract::{extract_view_info, ViewInfo};
use crate::parser::{LayoutError, LayoutParser};
use crate::render::{BindingRenderer, OutputSyntax};
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use miette::Diagnostic;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop a whole run
#[derive(Error, Diagnostic, Debug)]
pub enum GenerateError {
    #[error("Invalid layouts path: {} does not exist", .0.display())]
    #[diagnostic(code(layoutbind::generate::layouts_not_found))]
    LayoutsNotFound(PathBuf),

    #[error("Invalid layouts path: {} is not a directory", .0.display())]
    #[diagnostic(code(layoutbind::generate::layouts_not_dir))]
    LayoutsNotADirectory(PathBuf),

    #[error("Output path {} contains the layouts directory", .0.display())]
    #[diagnostic(
        code(layoutbind::generate::output_contains_layouts),
        help("the output directory is removed before generating; pick a separate one")
    )]
    OutputContainsLayouts(PathBuf),

    #[error("Aborted: output path {} was not removed", .0.display())]
    #[diagnostic(code(layoutbind::generate::aborted))]
    Aborted(PathBuf),

    #[error("Confirmation prompt failed")]
    #[diagnostic(code(layoutbind::generate::prompt))]
    Prompt(#[source] dialoguer::Error),

    #[error("I/O error on {}", .path.display())]
    #[diagnostic(code(layoutbind::generate::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Views and generated text for one layout
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLayout {
    pub views: Vec<ViewInfo>,
    pub text: String,
}

/// A layout that produced an output file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub views: Vec<ViewInfo>,
}

/// A layout that could not be processed
#[derive(Debug, Clone)]
pub struct FailedLayout {
    pub source: PathBuf,
    pub reason: String,
}

impl FailedLayout {
    fn new(layout: &LayoutFile, reason: impl ToString) -> Self {
        Self {
            source: layout.path.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Outcome of a run
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub syntax: OutputSyntax,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub generated: Vec<GeneratedFile>,
    pub failed: Vec<FailedLayout>,
}

impl GenerationSummary {
    /// Total number of views across generated files
    pub fn total_views(&self) -> usize {
        self.generated.iter().map(|f| f.views.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Runs the generation pipeline for one configuration
pub struct Generator<'a> {
    config: &'a Config,
    parser: LayoutParser,
    renderer: BindingRenderer,
    dry_run: bool,
    interactive: bool,
    progress: bool,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            parser: LayoutParser::new(),
            renderer: BindingRenderer::new(config.syntax),
            dry_run: false,
            interactive: false,
            progress: false,
        }
    }

    /// Render everything but write nothing
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Ask before removing an existing output directory
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Show a progress bar while processing
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Generate binding code for every layout in `layouts_dir`
    pub fn run(&self, layouts_dir: &Path, output_dir: &Path) -> Result<GenerationSummary, GenerateError> {
        if !layouts_dir.exists() {
            return Err(GenerateError::LayoutsNotFound(layouts_dir.to_path_buf()));
        }
        if !layouts_dir.is_dir() {
            return Err(GenerateError::LayoutsNotADirectory(layouts_dir.to_path_buf()));
        }
        self.check_output_location(layouts_dir, output_dir)?;

        self.prepare_output(output_dir)?;

        let layouts = LayoutFinder::new(self.config).find_layouts(layouts_dir);
        info!("Found {} XML files, starting output...", layouts.len());

        let pb = self.progress_bar(layouts.len());
        let outcomes: Vec<Result<GeneratedFile, FailedLayout>> = if self.config.parallel {
            layouts
                .par_iter()
                .map(|layout| {
                    let outcome = self.process(layout, output_dir);
                    pb.inc(1);
                    outcome
                })
                .collect()
        } else {
            layouts
                .iter()
                .map(|layout| {
                    let outcome = self.process(layout, output_dir);
                    pb.inc(1);
                    outcome
                })
                .collect()
        };
        pb.finish_and_clear();

        let mut summary = GenerationSummary {
            syntax: self.renderer.syntax(),
            output_dir: output_dir.to_path_buf(),
            dry_run: self.dry_run,
            ..GenerationSummary::default()
        };
        for outcome in outcomes {
            match outcome {
                Ok(file) => summary.generated.push(file),
                Err(failure) => summary.failed.push(failure),
            }
        }

        info!("Done! {} generated, {} failed", summary.generated.len(), summary.failed.len());
        Ok(summary)
    }

    /// Parse, extract and render one layout document
    pub fn render_layout(&self, path: &Path, contents: &str) -> Result<RenderedLayout, LayoutError> {
        let root = self.parser.parse(path, contents)?;
        let views = extract_view_info(&root);
        let text = self.renderer.render(&views);
        Ok(RenderedLayout { views, text })
    }

    /// Remove a stale output directory (when configured) and create a fresh one
    pub fn prepare_output(&self, output_dir: &Path) -> Result<(), GenerateError> {
        if output_dir.exists() && self.config.clean_output {
            if self.interactive && !self.confirm_removal(output_dir)? {
                return Err(GenerateError::Aborted(output_dir.to_path_buf()));
            }

            info!("Output path exists, removing it...");
            if self.dry_run {
                debug!("Dry run: keeping {}", output_dir.display());
                return Ok(());
            }

            let removed = if output_dir.is_dir() {
                std::fs::remove_dir_all(output_dir)
            } else {
                std::fs::remove_file(output_dir)
            };
            removed.map_err(|e| GenerateError::io(output_dir, e))?;
        }

        if !self.dry_run {
            std::fs::create_dir_all(output_dir).map_err(|e| GenerateError::io(output_dir, e))?;
        }

        Ok(())
    }

    fn process(&self, layout: &LayoutFile, output_dir: &Path) -> Result<GeneratedFile, FailedLayout> {
        info!("Reading file {}...", layout.file_name());

        let contents = layout.read_contents().map_err(|e| {
            warn!("Could not read {}: {}", layout.path.display(), e);
            FailedLayout::new(layout, e)
        })?;

        let rendered = self.render_layout(&layout.path, &contents).map_err(|e| {
            warn!("Skipping {}: {}", layout.path.display(), e);
            FailedLayout::new(layout, e)
        })?;

        let output = layout.output_path(output_dir, self.renderer.syntax());
        if self.dry_run {
            debug!("Dry run: would write {}", output.display());
        } else {
            write_output(&output, &rendered.text).map_err(|e| {
                warn!("Could not write {}: {}", output.display(), e);
                FailedLayout::new(layout, e)
            })?;
            debug!("Wrote {} ({} views)", output.display(), rendered.views.len());
        }

        Ok(GeneratedFile {
            source: layout.path.clone(),
            output,
            views: rendered.views,
        })
    }

    fn check_output_location(&self, layouts_dir: &Path, output_dir: &Path) -> Result<(), GenerateError> {
        if !self.config.clean_output || !output_dir.exists() {
            return Ok(());
        }

        let layouts = layouts_dir
            .canonicalize()
            .map_err(|e| GenerateError::io(layouts_dir, e))?;
        let output = output_dir
            .canonicalize()
            .map_err(|e| GenerateError::io(output_dir, e))?;

        if layouts.starts_with(&output) {
            return Err(GenerateError::OutputContainsLayouts(output_dir.to_path_buf()));
        }
        Ok(())
    }

    fn confirm_removal(&self, output_dir: &Path) -> Result<bool, GenerateError> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Output path {} exists. Remove it?", output_dir.display()))
            .default(false)
            .interact()
            .map_err(GenerateError::Prompt)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

fn write_output(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)
}
