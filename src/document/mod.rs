//! Loading and saving layered voxel documents (JSON).
//!
//! ```json
//! { "layers": { "<type>": { "last_edited_variation": "...",
//!     "variations": { "<name>": { "voxels": [ { "loc": [x, y, z], "color": [r, g, b, a] } ] } } } } }
//! ```
//!
//! Layer types keep their document order. A voxel with a missing or
//! malformed `loc` makes the whole document invalid; every other missing
//! field falls back to a default.

pub mod records;

use std::path::Path;

use crate::core::types::Result;
use crate::voxel::{Layer, LayerType, Model, Voxel, VoxelStore};

use records::{DocumentRecord, LayerTypeRecord, OrderedMap, VariationRecord, VoxelRecord};

/// Build the model from parsed records
pub fn from_record(record: DocumentRecord) -> Model {
    let layer_types = record
        .layers
        .0
        .into_iter()
        .map(|(name, layer_type)| read_layer_type(name, layer_type))
        .collect();
    Model::new(layer_types)
}

fn read_layer_type(name: String, record: LayerTypeRecord) -> LayerType {
    let variations = record
        .variations
        .unwrap_or_default()
        .into_iter()
        .map(|(variation_name, variation)| {
            let store: VoxelStore = variation
                .voxels
                .unwrap_or_default()
                .into_iter()
                .map(|v| (v.loc, Voxel::new(v.color)))
                .collect();
            Layer::with_store(variation_name, store)
        });
    LayerType::from_variations(name, record.last_edited_variation, variations)
}

/// Structural inverse of [`from_record`]
pub fn to_record(model: &Model) -> DocumentRecord {
    let layers = model
        .layer_types
        .iter()
        .map(|layer_type| {
            let variations = layer_type
                .variations
                .iter()
                .map(|(name, layer)| {
                    let voxels = layer
                        .store
                        .iter()
                        .map(|(loc, voxel)| VoxelRecord { loc, color: voxel.color })
                        .collect();
                    let record = VariationRecord {
                        name: Some(name.clone()),
                        voxels: Some(voxels),
                    };
                    (name.clone(), record)
                })
                .collect();

            let record = LayerTypeRecord {
                name: Some(layer_type.name.clone()),
                last_edited_variation: layer_type.last_edited_variation.clone(),
                variations: Some(variations),
            };
            (layer_type.name.clone(), record)
        })
        .collect();

    DocumentRecord { layers: OrderedMap(layers) }
}

/// Parse a document
pub fn from_str(json: &str) -> Result<Model> {
    let record: DocumentRecord = serde_json::from_str(json)?;
    Ok(from_record(record))
}

/// Serialize a document as pretty JSON
pub fn to_string(model: &Model) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_record(model))?)
}

/// Load a document from disk
pub fn load(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let model = from_str(&json)?;
    log::info!(
        "Loaded {}: {} layer types, {} voxels",
        path.display(),
        model.layer_types.len(),
        model.voxel_count()
    );
    Ok(model)
}

/// Write a document to disk, creating parent directories
pub fn save(path: impl AsRef<Path>, model: &Model) -> Result<()> {
    let path = path.as_ref();
    let json = to_string(model)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;
    log::info!("Saved {} ({} voxels)", path.display(), model.voxel_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::voxel::{Color, VoxelPos, DEFAULT_VARIATION};
    use tempfile::TempDir;

    fn sample_model() -> Model {
        let mut hill = Layer::new("hill");
        hill.store.set(VoxelPos::new(0, 0, 0), Voxel::new(Color::rgb(0, 128, 0)));
        hill.store.set(VoxelPos::new(-3, 1, 7), Voxel::new(Color::new(1, 2, 3, 4)));

        let ground = LayerType::from_variations("ground", "hill", vec![hill, Layer::new("flat")]);

        Model::new(vec![
            LayerType::from_variations("trunk", "", vec![Layer::new("oak")]),
            ground,
            LayerType::with_default_variation("canopy"),
        ])
    }

    #[test]
    fn test_round_trip() {
        let model = sample_model();
        let json = to_string(&model).unwrap();
        assert_eq!(from_str(&json).unwrap(), model);
    }

    #[test]
    fn test_layer_order_preserved() {
        let json = to_string(&sample_model()).unwrap();
        let model = from_str(&json).unwrap();
        let names: Vec<_> = model.layer_types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["trunk", "ground", "canopy"]);
    }

    #[test]
    fn test_missing_variations_synthesize_default() {
        let model = from_str(r#"{ "layers": { "a": {}, "b": { "variations": null }, "c": { "variations": {} } } }"#).unwrap();
        assert_eq!(model.layer_types.len(), 3);
        for layer_type in &model.layer_types {
            assert_eq!(layer_type.variation_names().collect::<Vec<_>>(), vec![DEFAULT_VARIATION]);
            assert_eq!(layer_type.last_edited_variation, "");
        }
    }

    #[test]
    fn test_null_voxels_is_empty_store() {
        let model = from_str(r#"{ "layers": { "a": { "variations": { "v": { "voxels": null } } } } }"#).unwrap();
        assert!(model.layer_types[0].variation("v").unwrap().store.is_empty());
    }

    #[test]
    fn test_missing_layers_is_empty_model() {
        assert_eq!(from_str("{}").unwrap(), Model::default());
    }

    #[test]
    fn test_bad_location_is_fatal() {
        let json = r#"{ "layers": { "a": { "variations": { "v": { "voxels": [ { "loc": [0, 0], "color": [1, 1, 1, 1] } ] } } } } }"#;
        assert!(matches!(from_str(json), Err(Error::Document(_))));

        let json = r#"{ "layers": { "a": { "variations": { "v": { "voxels": [ { "color": [1, 1, 1, 1] } ] } } } } }"#;
        assert!(matches!(from_str(json), Err(Error::Document(_))));
    }

    #[test]
    fn test_written_shape() {
        let value: serde_json::Value = serde_json::from_str(&to_string(&sample_model()).unwrap()).unwrap();
        let ground = &value["layers"]["ground"];
        assert_eq!(ground["name"], "ground");
        assert_eq!(ground["last_edited_variation"], "hill");
        assert_eq!(ground["variations"]["hill"]["name"], "hill");
        assert_eq!(
            ground["variations"]["hill"]["voxels"][0],
            serde_json::json!({ "loc": [-3, 1, 7], "color": [1, 2, 3, 4] })
        );
        assert_eq!(ground["variations"]["flat"]["voxels"], serde_json::json!([]));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("models").join("tree.json");

        let model = sample_model();
        save(&path, &model).expect("save failed");
        assert_eq!(load(&path).expect("load failed"), model);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        assert!(matches!(load(temp_dir.path().join("nope.json")), Err(Error::Io(_))));
    }
}
