use crate::config::Config;
use crate::render::OutputSyntax;
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A layout file found in the layouts directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LayoutFile {
    /// Path to the file on disk
    pub path: PathBuf,

    /// Path relative to the layouts directory
    pub relative: PathBuf,
}

impl LayoutFile {
    pub fn new(path: PathBuf, relative: PathBuf) -> Self {
        Self { path, relative }
    }

    /// File name, e.g. `activity_main.xml`
    pub fn file_name(&self) -> String {
        self.relative
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Load file contents
    pub fn read_contents(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).into_diagnostic()
    }

    /// Where the generated file goes: `<output>/<relative>.<ext>`
    pub fn output_path(&self, output_dir: &Path, syntax: OutputSyntax) -> PathBuf {
        let mut name = OsString::from(self.relative.as_os_str());
        name.push(".");
        name.push(syntax.extension());
        output_dir.join(name)
    }
}

/// Check if a file name looks like a layout file
pub fn is_layout_name(file_name: &str) -> bool {
    file_name.ends_with("xml")
}

/// Finds layout XML files in a layouts directory
pub struct LayoutFinder<'a> {
    config: &'a Config,
}

impl<'a> LayoutFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all layout files under `root`, sorted by path
    pub fn find_layouts(&self, root: &Path) -> Vec<LayoutFile> {
        debug!("Scanning for layouts in: {}", root.display());

        if !root.is_dir() {
            trace!("Not a directory: {}", root.display());
            return Vec::new();
        }

        let max_depth = if self.config.recursive { None } else { Some(1) };

        let walker = WalkBuilder::new(root)
            .standard_filters(false) // Plain directory listing, no ignore files
            .follow_links(false)
            .max_depth(max_depth)
            .build();

        let mut files: Vec<LayoutFile> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();
                let file_name = path.file_name()?.to_str()?;

                if !is_layout_name(file_name) {
                    return None;
                }

                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                let relative = path.strip_prefix(root).ok()?.to_path_buf();
                trace!("Found layout: {}", path.display());
                Some(LayoutFile::new(path.to_path_buf(), relative))
            })
            .collect();

        files.sort();

        debug!("Found {} layouts", files.len());
        files
    }
}
