//! Layered voxel model.
//!
//! A model is an ordered list of layer types ("ground", "trunk", ...). Each
//! layer type holds interchangeable named variations, and exactly one
//! variation per type is active in an editing session.

pub mod compositor;

pub use compositor::CompositeView;

use std::collections::BTreeMap;

use super::store::VoxelStore;

/// Name of the variation synthesized for layer types with none
pub const DEFAULT_VARIATION: &str = "default";

/// Name of the layer type of a model created without a document
pub const DEFAULT_LAYER_TYPE: &str = "default";

/// One named variation of a layer type
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub store: VoxelStore,
}

impl Layer {
    /// Create an empty variation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store: VoxelStore::new(),
        }
    }

    /// Create a variation with existing content
    pub fn with_store(name: impl Into<String>, store: VoxelStore) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }
}

/// Named family of variations.
///
/// `variations` is never empty once constructed through this API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerType {
    pub name: String,
    pub variations: BTreeMap<String, Layer>,
    /// Variation to activate on load; may name a missing variation
    pub last_edited_variation: String,
}

impl LayerType {
    /// Layer type holding only an empty "default" variation
    pub fn with_default_variation(name: impl Into<String>) -> Self {
        let mut variations = BTreeMap::new();
        variations.insert(DEFAULT_VARIATION.to_string(), Layer::new(DEFAULT_VARIATION));
        Self {
            name: name.into(),
            variations,
            last_edited_variation: String::new(),
        }
    }

    /// Build from variations, falling back to the default variation if there are none
    pub fn from_variations(
        name: impl Into<String>,
        last_edited_variation: impl Into<String>,
        variations: impl IntoIterator<Item = Layer>,
    ) -> Self {
        let variations: BTreeMap<_, _> = variations
            .into_iter()
            .map(|layer| (layer.name.clone(), layer))
            .collect();

        let mut layer_type = if variations.is_empty() {
            Self::with_default_variation(name)
        } else {
            Self {
                name: name.into(),
                variations,
                last_edited_variation: String::new(),
            }
        };
        layer_type.last_edited_variation = last_edited_variation.into();
        layer_type
    }

    /// Variation a session activates on load: the last edited one if it
    /// exists, otherwise the first by name.
    pub fn initial_variation(&self) -> Option<&str> {
        if self.variations.contains_key(&self.last_edited_variation) {
            Some(self.last_edited_variation.as_str())
        } else {
            self.variations.keys().next().map(String::as_str)
        }
    }

    pub fn variation(&self, name: &str) -> Option<&Layer> {
        self.variations.get(name)
    }

    pub fn variation_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.variations.get_mut(name)
    }

    /// Variation names in name order
    pub fn variation_names(&self) -> impl Iterator<Item = &str> {
        self.variations.keys().map(String::as_str)
    }
}

/// Full persisted document: ordered layer types
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    pub layer_types: Vec<LayerType>,
}

impl Model {
    pub fn new(layer_types: Vec<LayerType>) -> Self {
        Self { layer_types }
    }

    /// Model for a session started without a document
    pub fn blank() -> Self {
        Self::new(vec![LayerType::with_default_variation(DEFAULT_LAYER_TYPE)])
    }

    pub fn layer_type(&self, index: usize) -> Option<&LayerType> {
        self.layer_types.get(index)
    }

    /// Total voxel count over every variation
    pub fn voxel_count(&self) -> usize {
        self.layer_types
            .iter()
            .flat_map(|t| t.variations.values())
            .map(|layer| layer.store.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variation() {
        let layer_type = LayerType::with_default_variation("ground");
        assert_eq!(layer_type.variations.len(), 1);
        assert!(layer_type.variation(DEFAULT_VARIATION).unwrap().store.is_empty());
        assert_eq!(layer_type.initial_variation(), Some(DEFAULT_VARIATION));
    }

    #[test]
    fn test_from_empty_variations() {
        let layer_type = LayerType::from_variations("ground", "missing", Vec::new());
        assert_eq!(layer_type.variation_names().collect::<Vec<_>>(), vec![DEFAULT_VARIATION]);
        assert_eq!(layer_type.last_edited_variation, "missing");
    }

    #[test]
    fn test_initial_variation() {
        let mut layer_type = LayerType::from_variations(
            "hair",
            "long",
            vec![Layer::new("short"), Layer::new("long"), Layer::new("bald")],
        );
        assert_eq!(layer_type.initial_variation(), Some("long"));

        // Unknown last-edited name falls back to the first name in order
        layer_type.last_edited_variation = "mohawk".to_string();
        assert_eq!(layer_type.initial_variation(), Some("bald"));
    }

    #[test]
    fn test_blank_model() {
        let model = Model::blank();
        assert_eq!(model.layer_types.len(), 1);
        assert_eq!(model.layer_types[0].name, DEFAULT_LAYER_TYPE);
        assert_eq!(model.voxel_count(), 0);
    }
}
