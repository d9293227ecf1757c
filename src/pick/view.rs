//! Orthographic 2D views.
//!
//! Each view looks down one signed axis. Pointer positions arrive as pixel
//! offsets from the view's center (screen y grows downward) and are turned
//! into cursor positions through the projection and resolver. Mutations go
//! through the session so every paint stays undoable.

use std::collections::HashSet;

use glam::{IVec2, IVec3};

use crate::core::config::EditorConfig;
use crate::editor::{EditorSession, Modifiers, PointerButton, Tool};
use crate::voxel::Axis;

use super::projection::{to_2d, to_3d};

/// Signed axis a view looks along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewDirection {
    facing: Axis,
    reversed: bool,
}

impl ViewDirection {
    pub const SIDE: ViewDirection = ViewDirection::new(Axis::X, false);
    pub const REVERSE: ViewDirection = ViewDirection::new(Axis::X, true);
    pub const TOP: ViewDirection = ViewDirection::new(Axis::Y, false);
    pub const BOTTOM: ViewDirection = ViewDirection::new(Axis::Y, true);
    pub const FRONT: ViewDirection = ViewDirection::new(Axis::Z, false);
    pub const BACK: ViewDirection = ViewDirection::new(Axis::Z, true);

    pub const fn new(facing: Axis, reversed: bool) -> Self {
        Self { facing, reversed }
    }

    /// Axis collapsed by this view
    pub fn facing(self) -> Axis {
        self.facing
    }

    /// Whether the view vector points toward -facing
    pub fn reverse(self) -> bool {
        self.reversed
    }

    /// Facing component of the view vector (+1 or -1)
    pub fn step(self) -> i32 {
        if self.reversed { -1 } else { 1 }
    }

    /// Unit vector pointing from the scene toward the viewer
    pub fn vector(self) -> IVec3 {
        let mut vector = IVec3::ZERO;
        vector[self.facing.index()] = self.step();
        vector
    }

    pub fn flip(self) -> Self {
        Self::new(self.facing, !self.reversed)
    }

    pub fn label(self) -> &'static str {
        match (self.facing, self.reversed) {
            (Axis::X, false) => "Side",
            (Axis::X, true) => "Reverse",
            (Axis::Y, false) => "Top",
            (Axis::Y, true) => "Bottom",
            (Axis::Z, false) => "Front",
            (Axis::Z, true) => "Back",
        }
    }
}

/// Drag in progress: the button held and the 2D cells already painted
#[derive(Clone, Debug)]
struct Stroke {
    button: PointerButton,
    drawn: HashSet<IVec2>,
}

/// Interaction state of one orthographic panel
#[derive(Clone, Debug)]
pub struct OrthoView {
    direction: ViewDirection,
    /// Pixel width of one cell
    zoom: i32,
    min_zoom: i32,
    max_zoom: i32,
    /// Last pointer offset inside the view, `None` once the pointer left
    last_point: Option<IVec2>,
    stroke: Option<Stroke>,
}

impl OrthoView {
    /// Create a view with the configured zoom. Zoom bounds are clamped to at
    /// least one pixel per cell and the initial zoom to the bounds.
    pub fn new(direction: ViewDirection, config: &EditorConfig) -> Self {
        let min_zoom = config.min_zoom.max(1);
        let max_zoom = config.max_zoom.max(min_zoom);
        let zoom = config.view_zoom.clamp(min_zoom, max_zoom);
        if zoom != config.view_zoom || min_zoom != config.min_zoom || max_zoom != config.max_zoom {
            log::warn!(
                "Zoom config {}/{}..{} out of range, using {}/{}..{}",
                config.view_zoom, config.min_zoom, config.max_zoom, zoom, min_zoom, max_zoom
            );
        }
        Self {
            direction,
            zoom,
            min_zoom,
            max_zoom,
            last_point: None,
            stroke: None,
        }
    }

    pub fn direction(&self) -> ViewDirection {
        self.direction
    }

    pub fn label(&self) -> &'static str {
        self.direction.label()
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        if self.zoom < self.max_zoom {
            self.zoom = self.zoom.saturating_mul(2);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom > self.min_zoom {
            self.zoom /= 2;
        }
    }

    /// Look from the opposite side. Any stroke in progress ends.
    pub fn flip(&mut self) {
        self.direction = self.direction.flip();
        self.stroke = None;
    }

    /// Screen y runs opposite to cell y in every view but the top/bottom one
    fn invert_y(&self) -> i32 {
        if self.direction.facing() == Axis::Y { 1 } else { -1 }
    }

    /// 2D cell under a pixel offset from the view center.
    ///
    /// Offsets left of or below the center land in the next cell over, so
    /// the cell at the origin sits up and right of the center.
    pub fn cell_at(&self, offset: IVec2) -> IVec2 {
        let mut x = offset.x;
        let mut y = offset.y;
        if x < 0 {
            x = x.saturating_sub(self.zoom);
        }
        if y > 0 {
            y = y.saturating_add(self.zoom);
        }
        IVec2::new(x / self.zoom, (y / self.zoom) * self.invert_y())
    }

    /// Pixel offset from the view center of a cell's top-left corner
    pub fn cell_origin(&self, cell: IVec2) -> IVec2 {
        IVec2::new(
            cell.x.saturating_mul(self.zoom),
            cell.y.saturating_mul(self.zoom).saturating_mul(self.invert_y()),
        )
    }

    fn calculate_cursor(&self, session: &mut EditorSession, offset: IVec2, modifiers: Modifiers) -> bool {
        let query = to_3d(self.cell_at(offset), self.direction.facing());
        let mut cursor = session.resolve(query, self.direction.facing(), self.direction.reverse());
        if session.effective_tool(modifiers) == Tool::PencilAbove && session.composite().contains(cursor) {
            cursor = cursor.offset(self.direction.vector());
        }
        session.set_cursor(cursor)
    }

    fn recalculate(&self, session: &mut EditorSession, modifiers: Modifiers) -> bool {
        match self.last_point {
            Some(offset) => self.calculate_cursor(session, offset, modifiers),
            None => false,
        }
    }

    fn apply(session: &mut EditorSession, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => session.pencil(),
            PointerButton::Secondary => session.erase(),
        }
    }

    fn drawn_cell(&self, session: &EditorSession) -> Option<IVec2> {
        session.cursor().map(|cursor| to_2d(cursor, self.direction.facing()))
    }

    /// Pointer moved to `offset` inside the view.
    ///
    /// Updates the cursor and, while a pencil stroke is held, paints or
    /// erases each 2D cell once. Returns whether the cursor moved.
    pub fn pointer_moved(&mut self, session: &mut EditorSession, offset: IVec2, modifiers: Modifiers) -> bool {
        self.last_point = Some(offset);
        let moved = self.calculate_cursor(session, offset, modifiers);
        if !moved || session.effective_tool(modifiers) != Tool::Pencil {
            return moved;
        }

        let Some(cell) = self.drawn_cell(session) else {
            return moved;
        };
        let Some(button) = self.stroke.as_ref().map(|stroke| stroke.button) else {
            return moved;
        };
        if self.stroke.as_ref().is_some_and(|stroke| stroke.drawn.contains(&cell)) {
            return moved;
        }

        Self::apply(session, button);
        self.calculate_cursor(session, offset, modifiers);
        if let (Some(cell), Some(stroke)) = (self.drawn_cell(session), self.stroke.as_mut()) {
            stroke.drawn.insert(cell);
        }
        moved
    }

    /// Button pressed at `offset` inside the view
    pub fn pointer_pressed(
        &mut self,
        session: &mut EditorSession,
        offset: IVec2,
        button: PointerButton,
        modifiers: Modifiers,
    ) {
        self.last_point = Some(offset);
        self.calculate_cursor(session, offset, modifiers);

        match session.effective_tool(modifiers) {
            Tool::Pencil | Tool::PencilAbove => {
                Self::apply(session, button);
                self.recalculate(session, modifiers);
                let drawn = self.drawn_cell(session).into_iter().collect();
                self.stroke = Some(Stroke { button, drawn });
            }
            Tool::Picker => {
                session.pick_color(button);
            }
        }
    }

    /// Any button released; ends the stroke
    pub fn pointer_released(&mut self) {
        self.stroke = None;
    }

    /// Pointer left the view
    pub fn pointer_left(&mut self) {
        self.last_point = None;
        self.stroke = None;
    }

    /// Modifier keys changed; the effective tool may offset the cursor differently
    pub fn modifiers_changed(&self, session: &mut EditorSession, modifiers: Modifiers) -> bool {
        self.recalculate(session, modifiers)
    }

    /// Wheel over the view moves the cursor along the facing axis, away from
    /// the viewer when scrolling up.
    pub fn scroll(&self, session: &mut EditorSession, up: bool) -> bool {
        if self.last_point.is_none() {
            return false;
        }
        let Some(mut cursor) = session.cursor() else {
            return false;
        };
        let facing = self.direction.facing();
        let step = self.direction.step();
        cursor[facing] = if up {
            cursor[facing].wrapping_sub(step)
        } else {
            cursor[facing].wrapping_add(step)
        };
        session.set_cursor(cursor)
    }

    /// Whether a stroke is in progress
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }
}
