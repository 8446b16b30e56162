use crate::render::OutputSyntax;
use glob::Pattern;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file names, searched in order
const DEFAULT_NAMES: [&str; 6] = [
    ".layoutbind.yml",
    ".layoutbind.yaml",
    ".layoutbind.toml",
    "layoutbind.yml",
    "layoutbind.yaml",
    "layoutbind.toml",
];

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output syntax: kt or java
    pub syntax: OutputSyntax,

    /// Descend into subdirectories of the layouts directory
    pub recursive: bool,

    /// Patterns of layout files to skip
    pub exclude: Vec<String>,

    /// Remove an existing output directory before generating
    pub clean_output: bool,

    /// Process layout files in parallel
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            syntax: OutputSyntax::Kotlin,
            recursive: false,
            exclude: vec![],
            clean_output: true,
            parallel: false,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations in `dir`
    pub fn from_default_locations(dir: &Path) -> Result<Self> {
        for name in &DEFAULT_NAMES {
            let path = dir.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check if a layout path matches an exclude pattern
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.exclude
            .iter()
            .any(|pattern| glob_match(pattern, &path_str) || glob_match(pattern, &file_name))
    }
}

/// Match `text` against a shell-style pattern such as "activity_*.xml" or "**/tmp/**".
/// A pattern that is not valid glob syntax only matches itself.
fn glob_match(pattern: &str, text: &str) -> bool {
    match Pattern::new(pattern) {
        Ok(glob) => glob.matches(text),
        Err(_) => text == pattern,
    }
}
