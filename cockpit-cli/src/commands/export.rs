use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cockpit_core::{ExportOptions, Exporter, SceneFile};

use crate::ui::{format_duration, info, success};

/// Export a scene dump to a cockpit JSON file
#[derive(Args)]
pub struct ExportCommand {
    /// Scene dump to export from
    pub scene: PathBuf,

    /// Destination cockpit JSON file (.json appended if missing)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Export the entire scene instead of the active collection
    #[arg(long)]
    pub all: bool,

    /// Override the scene's model path metadata
    #[arg(long)]
    pub model: Option<String>,
}

impl ExportCommand {
    pub fn execute(&self) -> Result<()> {
        info(&format!("Exporting scene dump: {}", self.scene.display()));

        let scene = SceneFile::load(&self.scene)
            .with_context(|| format!("Failed to load scene dump '{}'", self.scene.display()))?;

        tracing::debug!(
            objects = scene.objects.len(),
            all = self.all,
            "scene dump loaded"
        );

        let exporter = Exporter::with_options(ExportOptions {
            active_collection: !self.all,
            model_override: self.model.clone(),
        });

        let output = ensure_json_extension(&self.output);
        let source_name = source_name(&self.scene);

        let result = exporter.export_to_path(&scene, &source_name, &output)?;

        success(&format!(
            "Exported {} props to {} ({} bytes, {})",
            result.props_exported,
            result.path.display(),
            result.bytes_written,
            format_duration(result.duration_ms)
        ));

        Ok(())
    }
}

/// Mirror the host file picker: the destination always ends in `.json`.
fn ensure_json_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(_) => path.to_path_buf(),
        None => path.with_extension("json"),
    }
}

/// Base name of the source document, used when the dump records no name.
pub fn source_name(scene_path: &Path) -> String {
    scene_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string())
}
