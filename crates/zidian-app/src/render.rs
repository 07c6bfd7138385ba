use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use zidian_config::ui::UiConfig;
use zidian_core::ValidationError;
use zidian_types::{Entry, SearchState};

use crate::state::AppState;

/// Turns published search state into terminal output
pub struct Renderer {
    ui: UiConfig,
    json: bool,
    thumbnail_dir: Option<PathBuf>,
    prompt: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Renderer {
    pub fn new(ui: UiConfig, json: bool, thumbnail_dir: Option<PathBuf>) -> Self {
        Self {
            ui,
            json,
            thumbnail_dir,
            prompt: false,
            out: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Write output somewhere other than stdout
    pub fn with_output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Mutex::new(Box::new(out));
        self
    }

    /// Show a `> ` prompt after every block of output
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn render(&self, state: &SearchState) -> anyhow::Result<String> {
        if self.json {
            return serde_json::to_string_pretty(state).context("Failed to serialize results");
        }

        if let Some(error) = state.error() {
            return Ok(format!("error: {error}"));
        }

        if state.entries().is_empty() {
            return Ok("No entries found.".to_string());
        }

        let blocks: Vec<String> = state
            .entries()
            .iter()
            .map(|entry| self.render_entry(entry))
            .collect();
        Ok(blocks.join("\n"))
    }

    fn render_entry(&self, entry: &Entry) -> String {
        let mut out = String::new();

        if entry.simplified == entry.traditional {
            let _ = writeln!(out, "{}  {}", entry.simplified, entry.pinyin);
        } else {
            let _ = writeln!(
                out,
                "{} ({})  {}",
                entry.simplified, entry.traditional, entry.pinyin
            );
        }
        let _ = writeln!(out, "  {}", entry.definitions);

        if self.ui.show_explanation && !entry.explanation.is_empty() {
            let _ = writeln!(out, "  {}", entry.explanation);
        }

        if !entry.examples.is_empty() && self.ui.max_examples > 0 {
            let shown: Vec<&str> = entry
                .examples
                .iter()
                .take(self.ui.max_examples)
                .map(String::as_str)
                .collect();
            let _ = writeln!(out, "  Examples: {}", shown.join(", "));
        }

        if let Some(thumbnail) = &entry.thumbnail {
            let _ = writeln!(out, "  Image: {} base64 chars", thumbnail.payload().len());
        }

        out
    }

    pub fn print(&self, state: &SearchState) {
        match self.render(state) {
            Ok(text) => self.emit(&text),
            Err(e) => tracing::error!("Failed to render results: {e:#}"),
        }

        if let Err(e) = self.save_thumbnails(state) {
            tracing::error!("Failed to save thumbnails: {e:#}");
        }
    }

    pub fn print_validation(&self, error: ValidationError) {
        self.emit(&format!("error: {error}"));
    }

    pub fn show_prompt(&self) {
        if self.prompt {
            self.write_out(|out| write!(out, "> "));
        }
    }

    fn emit(&self, text: &str) {
        self.write_out(|out| {
            writeln!(out, "{text}")?;
            if self.prompt {
                write!(out, "> ")?;
            }
            Ok(())
        });
    }

    fn write_out(&self, f: impl FnOnce(&mut dyn Write) -> io::Result<()>) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = f(&mut **out).and_then(|_| out.flush()) {
            tracing::error!("Failed to write output: {e}");
        }
    }

    /// Decode each entry's thumbnail into the thumbnail directory.
    /// Entries that fail to decode or write are skipped.
    pub fn save_thumbnails(&self, state: &SearchState) -> anyhow::Result<Vec<PathBuf>> {
        let Some(dir) = &self.thumbnail_dir else {
            return Ok(vec![]);
        };

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let mut written = Vec::new();
        for (index, entry) in state.entries().iter().enumerate() {
            let Some(thumbnail) = &entry.thumbnail else {
                continue;
            };

            let bytes = match thumbnail.decode() {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Skipping thumbnail for {}: {e}", entry.simplified);
                    continue;
                }
            };

            let path = dir.join(thumbnail_file_name(index, &entry.simplified));
            if let Err(e) = fs::write(&path, bytes) {
                tracing::warn!("Failed to write {}: {e}", path.display());
                continue;
            }
            tracing::debug!("Saved thumbnail to {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

/// File name inside the thumbnail directory. Only alphanumeric characters
/// of the server-provided text are kept, so the name never contains a path
/// separator or `..`.
fn thumbnail_file_name(index: usize, simplified: &str) -> String {
    let name: String = simplified.chars().filter(|c| c.is_alphanumeric()).collect();
    if name.is_empty() {
        format!("{index}.jpg")
    } else {
        format!("{index}-{name}.jpg")
    }
}

/// Print every state the service publishes until cancelled
pub async fn render_loop(
    state: Arc<AppState>,
    mut state_rx: watch::Receiver<SearchState>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    tracing::warn!("State publisher dropped");
                    break;
                }
                let snapshot = state_rx.borrow_and_update().clone();
                state.renderer.print(&snapshot);
            }
            _ = cancel.cancelled() => {
                // Lookups that finished right before shutdown
                if state_rx.has_changed().unwrap_or(false) {
                    let snapshot = state_rx.borrow_and_update().clone();
                    state.renderer.print(&snapshot);
                }
                break;
            }
        }
    }

    Ok(())
}
