//! The editing session: single owner of the model, history, composite view
//! and interaction state. Views and renderers borrow it.

use std::path::{Path, PathBuf};

use glam::{IVec3, Vec3};

use crate::core::config::EditorConfig;
use crate::core::types::Result;
use crate::core::Error;
use crate::document;
use crate::edit::{CommandStack, EditCommand, EditState};
use crate::pick::{resolver, world};
use crate::voxel::{Axis, Color, CompositeView, Model, Voxel, VoxelPos};

use super::tool::{Modifiers, PointerButton, Tool};

/// An open document being edited
pub struct EditorSession {
    /// Undoable state (model, active variations, current layer, symmetry)
    state: EditState,
    history: CommandStack<EditCommand>,
    /// Flattened active layers, rebuilt after every accepted change
    composite: CompositeView,
    cursor: Option<VoxelPos>,
    tool: Tool,
    primary_color: Color,
    secondary_color: Color,
    /// Save destination; `None` for a session started without a file
    path: Option<PathBuf>,
    config: EditorConfig,
}

impl EditorSession {
    /// Start a session on a blank model with no save destination
    pub fn new(config: EditorConfig) -> Self {
        Self::from_model(Model::blank(), None, config)
    }

    /// Open a document from disk
    pub fn open(path: impl Into<PathBuf>, config: EditorConfig) -> Result<Self> {
        let path = path.into();
        let model = document::load(&path)?;
        Ok(Self::from_model(model, Some(path), config))
    }

    /// Start a session on an in-memory model
    pub fn from_model(model: Model, path: Option<PathBuf>, config: EditorConfig) -> Self {
        let mut session = Self {
            state: EditState::new(model),
            history: CommandStack::with_limit(config.history_limit),
            composite: CompositeView::new(),
            cursor: None,
            tool: Tool::default(),
            primary_color: config.primary_color,
            secondary_color: config.secondary_color,
            path,
            config,
        };
        session.rebuild_composite();
        session
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn model(&self) -> &Model {
        self.state.model()
    }

    pub fn composite(&self) -> &CompositeView {
        &self.composite
    }

    pub fn history(&self) -> &CommandStack<EditCommand> {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // ---- cursor ----

    pub fn cursor(&self) -> Option<VoxelPos> {
        self.cursor
    }

    /// Move the cursor. Returns false if it was already there.
    pub fn set_cursor(&mut self, pos: VoxelPos) -> bool {
        if self.cursor == Some(pos) {
            return false;
        }
        self.cursor = Some(pos);
        true
    }

    // ---- tools and colors ----

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Tool in effect for an event carrying `modifiers`
    pub fn effective_tool(&self, modifiers: Modifiers) -> Tool {
        self.tool.effective(modifiers)
    }

    pub fn primary_color(&self) -> Color {
        self.primary_color
    }

    pub fn secondary_color(&self) -> Color {
        self.secondary_color
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.primary_color = color;
    }

    pub fn set_secondary_color(&mut self, color: Color) {
        self.secondary_color = color;
    }

    /// Copy the color under the cursor into the primary or secondary slot
    pub fn pick_color(&mut self, button: PointerButton) -> Option<Color> {
        let color = self.composite.get(self.cursor?)?.voxel.color;
        match button {
            PointerButton::Primary => self.primary_color = color,
            PointerButton::Secondary => self.secondary_color = color,
        }
        Some(color)
    }

    // ---- voxel edits ----

    /// Paint the primary color at the cursor
    pub fn pencil(&mut self) -> bool {
        match self.cursor {
            Some(pos) => self.place(pos, self.primary_color),
            None => false,
        }
    }

    /// Erase the current layer's voxel at the cursor
    pub fn erase(&mut self) -> bool {
        match self.cursor {
            Some(pos) => self.remove(pos),
            None => false,
        }
    }

    /// Place a voxel in the current layer (and its mirror when symmetric).
    /// Returns false if nothing changed.
    pub fn place(&mut self, pos: VoxelPos, color: Color) -> bool {
        self.paint(pos, Some(Voxel::new(color)))
    }

    /// Erase a voxel from the current layer (and its mirror when symmetric).
    /// Does nothing unless the current layer has a voxel at `pos`.
    pub fn remove(&mut self, pos: VoxelPos) -> bool {
        let present = self.state.current_store().is_some_and(|store| store.contains(pos));
        present && self.paint(pos, None)
    }

    fn paint(&mut self, pos: VoxelPos, voxel: Option<Voxel>) -> bool {
        let Some(store) = self.state.current_store() else {
            return false;
        };
        let changes = self.state.mirror().plan(store, pos, voxel);
        if changes.is_empty() {
            return false;
        }

        self.execute(EditCommand::Paint {
            layer: self.state.current_layer(),
            changes,
        });
        true
    }

    // ---- undoable settings ----

    pub fn symmetric(&self) -> bool {
        self.state.symmetric()
    }

    /// Enable or disable symmetric editing. Existing voxels are untouched.
    pub fn set_symmetric(&mut self, enabled: bool) -> bool {
        let before = self.state.symmetric();
        if before == enabled {
            return false;
        }
        self.execute(EditCommand::SetSymmetric { before, after: enabled });
        true
    }

    pub fn toggle_symmetric(&mut self) -> bool {
        self.set_symmetric(!self.symmetric())
    }

    pub fn current_layer(&self) -> usize {
        self.state.current_layer()
    }

    /// Make `index` the layer receiving edits. Out of range is a no-op.
    pub fn select_layer(&mut self, index: usize) -> bool {
        let before = self.state.current_layer();
        if index >= self.state.layer_count() || index == before {
            return false;
        }
        log::info!("Selected layer {}: {}", index, self.layer_label(index).unwrap_or_default());
        self.execute(EditCommand::SelectLayer { before, after: index });
        true
    }

    /// Activate another variation of layer type `layer`
    pub fn select_variation(&mut self, layer: usize, name: &str) -> bool {
        let Some(before) = self.state.active_variation(layer) else {
            return false;
        };
        let exists = self
            .model()
            .layer_type(layer)
            .is_some_and(|layer_type| layer_type.variation(name).is_some());
        if !exists || before == name {
            return false;
        }

        let cmd = EditCommand::SelectVariation {
            layer,
            before: before.to_string(),
            after: name.to_string(),
        };
        log::info!("Layer {} now uses variation '{}'", layer, name);
        self.execute(cmd);
        true
    }

    // ---- history ----

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.state);
        if undone {
            log::debug!("Undo");
            self.rebuild_composite();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.state);
        if redone {
            log::debug!("Redo");
            self.rebuild_composite();
        }
        redone
    }

    fn execute(&mut self, cmd: EditCommand) {
        log::debug!("Execute {:?}", cmd);
        self.history.execute(cmd, &mut self.state);
        self.rebuild_composite();
    }

    fn rebuild_composite(&mut self) {
        self.composite.rebuild(self.state.active_stores());
    }

    // ---- picking ----

    /// Occlusion-resolved voxel along `facing`, see [`resolver::resolve`]
    pub fn resolve(&self, query: VoxelPos, facing: Axis, reverse: bool) -> VoxelPos {
        resolver::resolve(&self.composite, query, facing, reverse)
    }

    /// Handle a pick in the 3D view at `point` on a face pointing along `facing`.
    ///
    /// Moves the cursor only when an occupied voxel was hit; with ctrl held the
    /// cursor goes to the empty cell in front of the hit face.
    pub fn pick_world(&mut self, point: Vec3, facing: IVec3, modifiers: Modifiers) -> bool {
        let pos = world::voxel_at_world(point, facing);
        if !self.composite.contains(pos) {
            return false;
        }
        let pos = if modifiers.ctrl { pos.offset(facing) } else { pos };
        self.set_cursor(pos)
    }

    // ---- layer list ----

    /// "type: variation" for active layer `index`
    pub fn layer_label(&self, index: usize) -> Option<String> {
        let layer_type = self.model().layer_type(index)?;
        let variation = self.state.active_variation(index)?;
        Some(format!("{}: {}", layer_type.name, variation))
    }

    /// Labels of all active layers in order
    pub fn layer_labels(&self) -> Vec<String> {
        (0..self.state.layer_count())
            .filter_map(|index| self.layer_label(index))
            .collect()
    }

    /// Highlight a layer the user hovers in the layer list
    pub fn hover_layer(&mut self, layer: Option<usize>) {
        let layer = layer.filter(|&index| index < self.state.layer_count());
        self.composite.set_highlighted_layer(layer);
    }

    // ---- persistence ----

    /// Write the document to its path.
    ///
    /// Fails with [`Error::NoDestination`] when the session has no path;
    /// editing can continue either way.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            log::warn!("No filename, cannot save");
            return Err(Error::NoDestination);
        };
        self.state.sync_last_edited();
        document::save(&path, self.state.model())
    }

    /// Set a new destination and save to it
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.path = Some(path.into());
        self.save()
    }
}
