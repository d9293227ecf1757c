//! Editing tools and modifier handling

use serde::{Deserialize, Serialize};

/// Tool chosen in the toolbar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Paint the resolved voxel (primary button) or erase it (secondary)
    #[default]
    Pencil,
    /// Paint on top of the resolved voxel, one step toward the viewer
    PencilAbove,
    /// Copy the resolved voxel's color
    Picker,
}

/// Modifier keys held at the time of an input event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, shift: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, shift: false };
    pub const SHIFT: Modifiers = Modifiers { ctrl: false, shift: true };
}

/// Pointer button of an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
}

impl Tool {
    /// Tool actually in effect while `modifiers` are held.
    ///
    /// Shift turns the pencil into pencil-above; ctrl turns either pencil
    /// into the picker.
    pub fn effective(self, modifiers: Modifiers) -> Tool {
        match self {
            Tool::Pencil if modifiers.shift => Tool::PencilAbove,
            Tool::Pencil | Tool::PencilAbove if modifiers.ctrl => Tool::Picker,
            tool => tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_tool() {
        assert_eq!(Tool::Pencil.effective(Modifiers::NONE), Tool::Pencil);
        assert_eq!(Tool::Pencil.effective(Modifiers::SHIFT), Tool::PencilAbove);
        assert_eq!(Tool::Pencil.effective(Modifiers::CTRL), Tool::Picker);
        assert_eq!(Tool::PencilAbove.effective(Modifiers::CTRL), Tool::Picker);
        assert_eq!(Tool::Picker.effective(Modifiers::SHIFT), Tool::Picker);
    }

    #[test]
    fn test_shift_wins_over_ctrl_for_pencil() {
        let both = Modifiers { ctrl: true, shift: true };
        assert_eq!(Tool::Pencil.effective(both), Tool::PencilAbove);
        assert_eq!(Tool::PencilAbove.effective(both), Tool::Picker);
    }
}
