//=========================================================================
// Transition Queue
//=========================================================================
//
// FIFO of scene transitions. Scenes and callers queue transitions during
// a tick; the scene manager applies them at the tick boundary.
//
//=========================================================================

//=== SceneTransition =====================================================

/// Scene stack operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneTransition {
    /// Adds a scene to the top of the stack.
    Push(String),

    /// Removes a scene from anywhere in the stack.
    Remove(String),

    /// Swaps a scene in the stack for another, keeping its position.
    Replace(String, String),

    /// Empties the stack.
    Clear,
}

//=== TransitionQueue =====================================================

#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<SceneTransition>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, transition: SceneTransition) {
        self.queue.push(transition);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all queued transitions, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneTransition> {
        std::mem::take(&mut self.queue)
    }
}
