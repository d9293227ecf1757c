//! Editing session and tools

pub mod session;
pub mod tool;

pub use session::EditorSession;
pub use tool::{Modifiers, PointerButton, Tool};
