//! Scene dump records and the export filter.
//!
//! The exporter does not talk to a live scene graph. The host-side adapter
//! dumps marker objects into a small JSON document (name, location, world
//! matrix, property bag), and this module parses that dump and decides which
//! objects are exportable cockpit props.

use std::path::Path;

use glam::{Mat4, Vec3};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Property key that tags a marker object as a cockpit prop.
pub const PROP_ID_KEY: &str = "prop_id";

/// Arbitrary key-value properties attached to a scene object by the host.
pub type PropertyBag = Map<String, Value>;

/// Errors produced while loading a scene dump.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene dump '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene dump '{path}'")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single marker object as dumped by the host application.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneObject {
    pub name: String,

    /// Object location in host space.
    pub location: [f32; 3],

    /// World transform in the host's row-major layout.
    pub matrix_world: [[f32; 4]; 4],

    #[serde(default)]
    pub properties: PropertyBag,

    /// Collection the object belongs to, if any.
    #[serde(default)]
    pub collection: Option<String>,
}

impl SceneObject {
    /// World transform as a column-major matrix.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.matrix_world).transpose()
    }
}

/// Returns whether a property bag tags its object as an exportable prop.
///
/// True iff the bag contains a `prop_id` key holding a JSON string. Any
/// other value type (number, bool, array, object, null) does not count.
pub fn is_exportable(bag: &PropertyBag) -> bool {
    matches!(bag.get(PROP_ID_KEY), Some(Value::String(_)))
}

/// An exportable prop lifted out of the duck-typed property bag.
///
/// Construction only succeeds for objects that pass [`is_exportable`], so
/// downstream code deals with a plain record instead of re-checking the bag.
#[derive(Debug, Clone)]
pub struct PropSource {
    pub id: String,
    pub location: Vec3,
    pub matrix_world: Mat4,
}

impl PropSource {
    pub fn from_object(obj: &SceneObject) -> Option<Self> {
        match obj.properties.get(PROP_ID_KEY) {
            Some(Value::String(id)) => Some(Self {
                id: id.clone(),
                location: Vec3::from_array(obj.location),
                matrix_world: obj.world_matrix(),
            }),
            _ => None,
        }
    }
}

/// A parsed scene dump: scene-level metadata plus the marker objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneFile {
    /// Base name of the source document, recorded by the host-side dumper.
    #[serde(default)]
    pub name: Option<String>,

    /// Scene metadata naming the cockpit model the props belong to.
    #[serde(default)]
    pub model_path: Option<String>,

    /// Name of the collection that was active when the dump was taken.
    #[serde(default)]
    pub active_collection: Option<String>,

    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl SceneFile {
    /// Load and parse a scene dump from disk.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let scene: SceneFile =
            serde_json::from_str(&text).map_err(|source| SceneError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        debug!(
            objects = scene.objects.len(),
            active_collection = scene.active_collection.as_deref().unwrap_or("<none>"),
            "loaded scene dump"
        );

        Ok(scene)
    }

    /// Select the source objects for an export, preserving dump order.
    ///
    /// With `active_collection` set, only objects in the scene's active
    /// collection are considered (all objects when the scene names none);
    /// otherwise the entire scene is used.
    pub fn select_objects(&self, active_collection: bool) -> Vec<&SceneObject> {
        if active_collection {
            if let Some(active) = &self.active_collection {
                return self
                    .objects
                    .iter()
                    .filter(|obj| obj.collection.as_deref() == Some(active.as_str()))
                    .collect();
            }
        }

        self.objects.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> PropertyBag {
        let mut bag = PropertyBag::new();
        bag.insert(PROP_ID_KEY.to_string(), value);
        bag
    }

    fn object(name: &str, properties: PropertyBag, collection: Option<&str>) -> SceneObject {
        SceneObject {
            name: name.to_string(),
            location: [0.0, 0.0, 0.0],
            matrix_world: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
            properties,
            collection: collection.map(str::to_string),
        }
    }

    #[test]
    fn string_prop_id_is_exportable() {
        assert!(is_exportable(&bag(json!("lever_01"))));
    }

    #[test]
    fn missing_or_non_string_prop_id_is_not_exportable() {
        assert!(!is_exportable(&PropertyBag::new()));
        assert!(!is_exportable(&bag(json!(42))));
        assert!(!is_exportable(&bag(json!(1.5))));
        assert!(!is_exportable(&bag(json!(true))));
        assert!(!is_exportable(&bag(json!(null))));
        assert!(!is_exportable(&bag(json!(["lever_01"]))));
        assert!(!is_exportable(&bag(json!({ "id": "lever_01" }))));
    }

    #[test]
    fn prop_source_agrees_with_filter() {
        let tagged = object("Empty.001", bag(json!("switch_03")), None);
        let untagged = object("Empty.002", bag(json!(7)), None);

        let source = PropSource::from_object(&tagged).unwrap();
        assert_eq!(source.id, "switch_03");
        assert!(PropSource::from_object(&untagged).is_none());
    }

    #[test]
    fn world_matrix_transposes_row_major_input() {
        let mut obj = object("Empty.001", PropertyBag::new(), None);
        // Translation lives in the last row of the host's row-major layout.
        obj.matrix_world[0][3] = 2.0;
        obj.matrix_world[1][3] = 3.0;
        obj.matrix_world[2][3] = 4.0;

        let translation = obj.world_matrix().to_scale_rotation_translation().2;
        assert_eq!(translation, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn selection_honors_active_collection() {
        let scene = SceneFile {
            name: None,
            model_path: None,
            active_collection: Some("Props".to_string()),
            objects: vec![
                object("a", PropertyBag::new(), Some("Props")),
                object("b", PropertyBag::new(), Some("Reference")),
                object("c", PropertyBag::new(), None),
                object("d", PropertyBag::new(), Some("Props")),
            ],
        };

        let active: Vec<_> = scene
            .select_objects(true)
            .into_iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(active, ["a", "d"]);

        let all: Vec<_> = scene
            .select_objects(false)
            .into_iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(all, ["a", "b", "c", "d"]);
    }

    #[test]
    fn selection_without_active_collection_falls_back_to_whole_scene() {
        let scene = SceneFile {
            objects: vec![
                object("a", PropertyBag::new(), Some("Props")),
                object("b", PropertyBag::new(), None),
            ],
            ..SceneFile::default()
        };

        assert_eq!(scene.select_objects(true).len(), 2);
    }

    #[test]
    fn load_reports_parse_failures() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        match SceneFile::load(&path) {
            Err(SceneError::Parse { .. }) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn load_reports_missing_files() {
        match SceneFile::load(Path::new("/nonexistent/scene.json")) {
            Err(SceneError::Io { .. }) => {}
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
