use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cockpit_core::{
    export_location,
    scene::{PropSource, PROP_ID_KEY},
    SceneFile,
};

use crate::ui::{info, warning};

/// List the exportable props in a scene dump without writing anything
#[derive(Args)]
pub struct InspectCommand {
    /// Scene dump to inspect
    pub scene: PathBuf,

    /// Inspect the entire scene instead of the active collection
    #[arg(long)]
    pub all: bool,
}

impl InspectCommand {
    pub fn execute(&self) -> Result<()> {
        let scene = SceneFile::load(&self.scene)
            .with_context(|| format!("Failed to load scene dump '{}'", self.scene.display()))?;

        let objects = scene.select_objects(!self.all);
        let mut exportable = 0usize;

        for obj in objects.iter().copied() {
            match PropSource::from_object(obj) {
                Some(source) => {
                    exportable += 1;
                    let [x, y, z] = export_location(source.location);
                    println!("  {:<24} [{:.3}, {:.3}, {:.3}]", source.id, x, y, z);
                }
                None => {
                    // A tagged-but-mistyped prop_id is almost always an
                    // authoring mistake worth surfacing.
                    if obj.properties.contains_key(PROP_ID_KEY) {
                        warning(&format!(
                            "Object '{}' has a non-string prop_id and will not export",
                            obj.name
                        ));
                    }
                }
            }
        }

        info(&format!(
            "{} of {} objects exportable (model: {})",
            exportable,
            objects.len(),
            scene.model_path.as_deref().unwrap_or("default_cockpit")
        ));

        Ok(())
    }
}
