//! Output document types for the engine's cockpit prop loader.

use serde::{Deserialize, Serialize};

use crate::scene::PropSource;
use crate::transform::{export_location, export_orient};

/// Schema version written into every export.
pub const COCKPIT_VERSION: u32 = 1;

/// Model the engine falls back to when the scene names none.
pub const DEFAULT_MODEL: &str = "default_cockpit";

/// A single prop placement in engine space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropInstance {
    pub id: String,

    /// Engine-space position.
    pub position: [f32; 3],

    /// Engine-space orientation quaternion, laid out `[x, y, z, w]`.
    pub orient: [f32; 4],
}

impl PropInstance {
    pub fn from_source(source: &PropSource) -> Self {
        Self {
            id: source.id.clone(),
            position: export_location(source.location),
            orient: export_orient(&source.matrix_world),
        }
    }
}

/// The complete cockpit description written to disk.
///
/// `props` preserves the order of the source objects; the loader indexes
/// props by position in this array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CockpitExport {
    pub name: String,
    pub version: u32,
    pub model: String,
    pub props: Vec<PropInstance>,
}

impl CockpitExport {
    pub fn new(name: String, model: String, props: Vec<PropInstance>) -> Self {
        Self {
            name,
            version: COCKPIT_VERSION,
            model,
            props,
        }
    }
}
