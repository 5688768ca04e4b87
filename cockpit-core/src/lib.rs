//! # Cockpit Export Core
//!
//! Core library for exporting cockpit prop placements to engine-ready JSON.
//!
//! Artists author clickable cockpit props by placing tagged marker objects
//! in their 3D scene. A scene dump of those markers is fed through this
//! crate, which:
//!
//! - filters the objects tagged with a `prop_id` string property,
//! - converts each position and orientation from the host application's
//!   coordinate convention into the engine's right-handed, Y-up convention,
//! - assembles and writes the versioned cockpit JSON document the engine's
//!   prop loader consumes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cockpit_core::{export::Exporter, scene::SceneFile};
//! use std::path::Path;
//!
//! let scene = SceneFile::load(Path::new("cockpit_scene.json"))?;
//! let exporter = Exporter::new();
//! let result = exporter.export_to_path(&scene, "cockpit_scene", Path::new("cockpit.json"))?;
//!
//! println!("exported {} props", result.props_exported);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod export;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use document::{CockpitExport, PropInstance, COCKPIT_VERSION, DEFAULT_MODEL};
pub use export::{ExportOptions, ExportResult, Exporter};
pub use scene::{is_exportable, PropSource, PropertyBag, SceneError, SceneFile, SceneObject};
pub use transform::{export_location, export_orient};

/// Version information for the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
