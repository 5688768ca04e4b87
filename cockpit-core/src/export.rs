//! Document assembly and the single-shot file write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::document::{CockpitExport, PropInstance, DEFAULT_MODEL};
use crate::scene::{PropSource, SceneFile};

/// Export configuration options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Export only the active collection instead of the whole scene
    pub active_collection: bool,
    /// Override the scene's `model_path` metadata
    pub model_override: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            active_collection: true,
            model_override: None,
        }
    }
}

/// Export result information
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Output file path
    pub path: PathBuf,
    /// Bytes written to disk
    pub bytes_written: u64,
    /// Number of props in the document
    pub props_exported: usize,
    /// Export duration
    pub duration_ms: u64,
}

/// Main exporter for converting scene dumps into cockpit JSON.
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create a new exporter with default options
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Create exporter with custom options
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Assemble the output document without touching the filesystem.
    ///
    /// `source_name` is the fallback document name when the scene dump does
    /// not record one.
    pub fn build_document(&self, scene: &SceneFile, source_name: &str) -> CockpitExport {
        let props: Vec<PropInstance> = scene
            .select_objects(self.options.active_collection)
            .into_iter()
            .filter_map(PropSource::from_object)
            .map(|source| PropInstance::from_source(&source))
            .collect();

        let name = scene
            .name
            .clone()
            .unwrap_or_else(|| source_name.to_string());

        let model = self
            .options
            .model_override
            .clone()
            .or_else(|| scene.model_path.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        debug!(props = props.len(), model = %model, "assembled cockpit document");

        CockpitExport::new(name, model, props)
    }

    /// Build the document and write it to `output`, overwriting any
    /// existing file. The write is not atomic; a crash mid-write leaves a
    /// truncated file.
    pub fn export_to_path(
        &self,
        scene: &SceneFile,
        source_name: &str,
        output: &Path,
    ) -> Result<ExportResult> {
        let start_time = std::time::Instant::now();

        let document = self.build_document(scene, source_name);

        let json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize cockpit document")?;

        std::fs::write(output, json.as_bytes())
            .with_context(|| format!("Failed to write cockpit file '{}'", output.display()))?;

        let result = ExportResult {
            path: output.to_path_buf(),
            bytes_written: json.len() as u64,
            props_exported: document.props.len(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            props = result.props_exported,
            bytes = result.bytes_written,
            path = %output.display(),
            "wrote cockpit export"
        );

        Ok(result)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
