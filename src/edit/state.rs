//! Undoable editing state.

use crate::voxel::layer::{Layer, LayerType, DEFAULT_LAYER_TYPE};
use crate::voxel::{MirrorPolicy, Model, VoxelStore};

/// Stands in for an active slot whose variation cannot be found
static EMPTY_STORE: VoxelStore = VoxelStore::new();

/// Everything an edit command may touch: the model, the active variation of
/// each layer type, the layer receiving edits, and the symmetry setting.
#[derive(Clone, Debug, PartialEq)]
pub struct EditState {
    model: Model,
    /// Active variation name per layer type, index-aligned with the model
    active: Vec<String>,
    /// Index of the active layer receiving new edits
    pub(crate) current_layer: usize,
    pub(crate) mirror: MirrorPolicy,
}

impl EditState {
    /// Activate the initial variation of every layer type.
    ///
    /// A model without layer types gets the blank "default" layer type so
    /// that there is always a current layer.
    pub fn new(mut model: Model) -> Self {
        if model.layer_types.is_empty() {
            model.layer_types.push(LayerType::with_default_variation(DEFAULT_LAYER_TYPE));
        }

        let active = model
            .layer_types
            .iter_mut()
            .map(|layer_type| {
                if layer_type.variations.is_empty() {
                    let name = std::mem::take(&mut layer_type.name);
                    let last_edited = std::mem::take(&mut layer_type.last_edited_variation);
                    *layer_type = LayerType::from_variations(name, last_edited, Vec::new());
                }
                layer_type.initial_variation().unwrap_or_default().to_string()
            })
            .collect();

        Self {
            model,
            active,
            current_layer: 0,
            mirror: MirrorPolicy::default(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Number of active layers (one per layer type)
    pub fn layer_count(&self) -> usize {
        self.active.len()
    }

    pub fn current_layer(&self) -> usize {
        self.current_layer
    }

    pub fn symmetric(&self) -> bool {
        self.mirror.enabled
    }

    pub fn mirror(&self) -> MirrorPolicy {
        self.mirror
    }

    /// Active variation name of layer `index`
    pub fn active_variation(&self, index: usize) -> Option<&str> {
        self.active.get(index).map(String::as_str)
    }

    /// Active variation of layer `index`
    pub fn active_layer(&self, index: usize) -> Option<&Layer> {
        let name = self.active.get(index)?;
        self.model.layer_types.get(index)?.variation(name)
    }

    pub(crate) fn active_layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        let name = self.active.get(index)?;
        self.model.layer_types.get_mut(index)?.variation_mut(name)
    }

    /// Stores of all active layers in index order, one per layer type.
    ///
    /// The n-th item always belongs to layer n; an unresolvable slot yields
    /// an empty store.
    pub fn active_stores(&self) -> impl Iterator<Item = &VoxelStore> {
        (0..self.active.len()).map(|index| {
            self.active_layer(index)
                .map_or(&EMPTY_STORE, |layer| &layer.store)
        })
    }

    /// Store receiving new edits
    pub fn current_store(&self) -> Option<&VoxelStore> {
        self.active_layer(self.current_layer).map(|layer| &layer.store)
    }

    pub(crate) fn set_active_variation(&mut self, index: usize, name: &str) {
        if let Some(slot) = self.active.get_mut(index) {
            *slot = name.to_string();
        }
    }

    /// Record each active variation as its type's last edited one, ready for saving
    pub fn sync_last_edited(&mut self) {
        for (layer_type, active) in self.model.layer_types.iter_mut().zip(&self.active) {
            layer_type.last_edited_variation = active.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::{Color, Voxel, VoxelPos};

    fn hair_model() -> Model {
        let mut long = Layer::new("long");
        long.store.set(VoxelPos::ORIGIN, Voxel::new(Color::BLACK));
        Model::new(vec![
            LayerType::with_default_variation("body"),
            LayerType::from_variations("hair", "long", vec![Layer::new("short"), long]),
        ])
    }

    #[test]
    fn test_initial_activation() {
        let state = EditState::new(hair_model());
        assert_eq!(state.layer_count(), 2);
        assert_eq!(state.active_variation(0), Some("default"));
        assert_eq!(state.active_variation(1), Some("long"));
        assert_eq!(state.current_layer(), 0);
        assert!(!state.symmetric());
        assert_eq!(state.active_stores().map(VoxelStore::len).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_empty_model_gets_default_layer() {
        let state = EditState::new(Model::default());
        assert_eq!(state.layer_count(), 1);
        assert!(state.current_store().is_some());
    }

    #[test]
    fn test_layer_type_without_variations_is_repaired() {
        let mut model = Model::blank();
        model.layer_types[0].variations.clear();
        let state = EditState::new(model);
        assert_eq!(state.active_variation(0), Some("default"));
        assert!(state.current_store().is_some());
    }

    #[test]
    fn test_active_stores_stay_index_aligned() {
        let mut model = hair_model();
        let mut cap = Layer::new("cap");
        cap.store.set(VoxelPos::new(0, 9, 0), Voxel::new(Color::WHITE));
        model.layer_types.push(LayerType::from_variations("hat", "cap", vec![cap]));

        let mut state = EditState::new(model);
        state.active[1] = "missing".to_string();

        let lens: Vec<_> = state.active_stores().map(VoxelStore::len).collect();
        assert_eq!(lens, vec![0, 0, 1]);

        let mut composite = crate::voxel::CompositeView::new();
        composite.rebuild(state.active_stores());
        assert_eq!(composite.get(VoxelPos::new(0, 9, 0)).unwrap().layer_index, 2);
    }

    #[test]
    fn test_sync_last_edited() {
        let mut state = EditState::new(hair_model());
        state.set_active_variation(1, "short");
        state.sync_last_edited();
        assert_eq!(state.model().layer_types[0].last_edited_variation, "default");
        assert_eq!(state.model().layer_types[1].last_edited_variation, "short");
    }
}
