//! Editor configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::voxel::Color;

/// Default number of undoable commands kept before the oldest is evicted
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Configuration for an editing session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum undo depth (`None` keeps every command)
    pub history_limit: Option<usize>,
    /// Initial primary (pencil) color
    pub primary_color: Color,
    /// Initial secondary color
    pub secondary_color: Color,
    /// Initial pixel width of one cell in the orthographic views
    pub view_zoom: i32,
    /// Smallest cell width reachable by zooming out
    pub min_zoom: i32,
    /// Largest cell width reachable by zooming in
    pub max_zoom: i32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            primary_color: Color::rgb(255, 0, 0),
            secondary_color: Color::WHITE,
            view_zoom: 20,
            min_zoom: 5,
            max_zoom: 80,
        }
    }
}

impl EditorConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load configuration, falling back to defaults if the file is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default editor config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}
