use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::{FileManager, SourceDocument};
use crate::providers::Provider;
use crate::providers::anthropic::{AnthropicRequest, AnthropicResponse};
use crate::translation::{DocumentTranslator, GateDecision, Reason, TranslationRecord, TranslatorSettings, assess};

// @module: Application controller for Markdown translation

/// Counters for one run over the source directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files translated and written
    pub translated: usize,
    /// Files skipped because the recorded fingerprint matched
    pub skipped: usize,
    /// Translated files whose output stopped before the closing marker
    pub incomplete: usize,
}

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Skipped,
    Translated { complete: bool },
}

/// Main application controller for Markdown translation
pub struct Controller<P> {
    // @field: App configuration
    config: Config,
    // @field: Translator bound to the completion provider
    translator: DocumentTranslator<P>,
}

impl<P> Controller<P>
where
    P: Provider<Request = AnthropicRequest, Response = AnthropicResponse>,
{
    // @method: Create a new controller with the given configuration and provider
    pub fn with_config(config: Config, provider: P) -> Self {
        let translator = DocumentTranslator::new(provider, TranslatorSettings::from(&config));
        Self { config, translator }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn translator(&self) -> &DocumentTranslator<P> {
        &self.translator
    }

    /// Translate every Markdown file in the source directory, one at a time.
    ///
    /// A provider failure aborts the run; files after the failing one are
    /// left untouched.
    pub async fn run(&self) -> Result<RunSummary> {
        let output_dir = self.config.output_dir();
        FileManager::ensure_dir(&output_dir)?;

        let files = FileManager::find_files(&self.config.source_dir, "md")?;
        info!(
            "Found {} Markdown file(s) in {:?}, writing {} translations to {:?}",
            files.len(),
            self.config.source_dir,
            self.config.target_language,
            output_dir
        );

        let mut summary = RunSummary::default();
        for file in &files {
            match self.process_file(file, &output_dir).await? {
                FileOutcome::Skipped => summary.skipped += 1,
                FileOutcome::Translated { complete } => {
                    summary.translated += 1;
                    if !complete {
                        summary.incomplete += 1;
                    }
                }
            }
        }

        info!(
            "Finished: {} translated ({} incomplete), {} skipped",
            summary.translated, summary.incomplete, summary.skipped
        );
        Ok(summary)
    }

    /// Gate, translate and persist one file
    pub async fn process_file(&self, input_file: &Path, output_dir: &Path) -> Result<FileOutcome> {
        let document = SourceDocument::read(input_file)?;
        let save_path = FileManager::output_path(input_file, output_dir);
        let existing = match FileManager::read_optional(&save_path) {
            Ok(existing) => existing,
            Err(e) => {
                warn!("Cannot read existing translation {:?} ({:#}), retranslating", save_path, e);
                None
            }
        };

        match assess(&document.content, existing.as_deref()) {
            GateDecision::Skip => {
                info!("Skipping {} as it has already been translated.", document.name);
                return Ok(FileOutcome::Skipped);
            }
            GateDecision::Translate(Reason::Malformed) => {
                warn!("Existing translation {:?} has no readable header, retranslating", save_path);
            }
            GateDecision::Translate(reason) => {
                debug!("Translating {} ({:?})", document.name, reason);
            }
        }

        info!("Translating {}...", document.name);
        let outcome = self
            .translator
            .translate_with_outcome(&document.content, &self.config.target_language)
            .await
            .with_context(|| format!("Failed to translate {}", document.name))?;

        if !outcome.is_complete() {
            warn!(
                "{} may be truncated: no closing marker after {} request(s)",
                document.name, outcome.requests
            );
        }

        let complete = outcome.is_complete();
        let record = TranslationRecord {
            fingerprint: document.fingerprint(),
            body: outcome.text,
        };
        FileManager::write_to_file(&save_path, &record.render())?;
        debug!("Wrote {:?}", save_path);

        Ok(FileOutcome::Translated { complete })
    }
}
