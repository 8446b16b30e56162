//! Watch mode
//!
//! Monitors the layouts directory and re-runs generation whenever a layout
//! file changes.

use crate::discovery::is_layout_name;
use colored::Colorize;
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;
use thiserror::Error;

/// Watch mode errors
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Failed to create file watcher: {0}")]
    WatcherError(#[from] notify::Error),
    #[error("Failed to receive events: {0}")]
    RecvError(#[from] std::sync::mpsc::RecvError),
}

/// File watcher for continuous generation
pub struct FileWatcher {
    /// Debounce duration in milliseconds
    debounce_ms: u64,
    /// Watch subdirectories too
    recursive: bool,
}

impl FileWatcher {
    pub fn new() -> Self {
        Self {
            debounce_ms: 500,
            recursive: false,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Check if a changed path should trigger regeneration
    fn should_trigger(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(is_layout_name)
            .unwrap_or(false)
    }

    /// Run `on_change` once, then again after every batch of layout changes.
    ///
    /// Stops when the callback returns false.
    pub fn watch<F>(&self, path: &Path, mut on_change: F) -> Result<(), WatchError>
    where
        F: FnMut() -> bool,
    {
        let (tx, rx) = channel();

        let mut debouncer = new_debouncer(Duration::from_millis(self.debounce_ms), tx)?;

        let mode = if self.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        debouncer.watcher().watch(path, mode)?;

        println!();
        println!("{}", "Watch mode active. Press Ctrl+C to stop.".cyan().bold());
        println!("{}", format!("   Watching: {}", path.display()).dimmed());
        println!();

        if !on_change() {
            return Ok(());
        }

        loop {
            match rx.recv()? {
                Ok(events) => {
                    let relevant: Vec<_> = events
                        .iter()
                        .filter(|e| {
                            matches!(e.kind, DebouncedEventKind::Any | DebouncedEventKind::AnyContinuous)
                                && self.should_trigger(&e.path)
                        })
                        .collect();

                    if relevant.is_empty() {
                        continue;
                    }

                    println!();
                    println!(
                        "{}",
                        format!(
                            "Changes detected in {} layout(s), regenerating...",
                            relevant.len()
                        )
                        .yellow()
                    );
                    for event in relevant.iter().take(5) {
                        if let Some(name) = event.path.file_name() {
                            println!("   • {}", name.to_string_lossy().dimmed());
                        }
                    }
                    if relevant.len() > 5 {
                        println!("   • ... and {} more", relevant.len() - 5);
                    }
                    println!();

                    if !on_change() {
                        break;
                    }
                }
                Err(e) => {
                    eprintln!("{}: {:?}", "Watch error".red(), e);
                }
            }
        }

        Ok(())
    }
}

impl Default for FileWatcher {
    fn default() -> Self {
        Self::new()
    }
}
