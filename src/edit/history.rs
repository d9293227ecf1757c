//! Linear undo/redo history.

use std::collections::VecDeque;

/// An edit that can be applied to and reverted from a target.
///
/// Implementations carry all before/after data by value, so `revert` after
/// `apply` restores the target exactly.
pub trait Reversible<T> {
    fn apply(&self, target: &mut T);
    fn revert(&self, target: &mut T);
}

/// Undo (`history`) and redo (`future`) stacks, most recent last.
#[derive(Clone, Debug)]
pub struct CommandStack<C> {
    history: VecDeque<C>,
    future: Vec<C>,
    /// Maximum history depth; `None` is unbounded
    limit: Option<usize>,
}

impl<C> Default for CommandStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CommandStack<C> {
    /// Create an unbounded stack
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create a stack that evicts its oldest command beyond `limit` entries
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            history: VecDeque::new(),
            future: Vec::new(),
            limit,
        }
    }

    /// Apply `cmd`, record it, and drop every redoable command.
    pub fn execute<T>(&mut self, cmd: C, target: &mut T)
    where
        C: Reversible<T>,
    {
        cmd.apply(target);
        self.history.push_back(cmd);
        self.future.clear();
        self.enforce_limit();
    }

    /// Revert the most recent command. Returns false if there is nothing to undo.
    pub fn undo<T>(&mut self, target: &mut T) -> bool
    where
        C: Reversible<T>,
    {
        match self.history.pop_back() {
            Some(cmd) => {
                cmd.revert(target);
                self.future.push(cmd);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone command. Returns false if there is nothing to redo.
    pub fn redo<T>(&mut self, target: &mut T) -> bool
    where
        C: Reversible<T>,
    {
        match self.future.pop() {
            Some(cmd) => {
                cmd.apply(target);
                self.history.push_back(cmd);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Undoable commands, oldest first
    pub fn history(&self) -> impl Iterator<Item = &C> {
        self.history.iter()
    }

    /// Redoable commands, the next redo last
    pub fn future(&self) -> &[C] {
        &self.future
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the depth limit, evicting old commands if needed
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.enforce_limit();
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.history.clear();
        self.future.clear();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }
}
