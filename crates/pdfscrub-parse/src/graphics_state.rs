//! Graphics state stack with a nested text-object stack.
//!
//! The graphics stack never empties: popping the root is a no-op. While a
//! text object is open (`BT` .. `ET`) a second stack of [`TextState`]s is
//! authoritative for text operators; outside it, the top graphics state's
//! persistent text state is.

use pdfscrub_core::Matrix;

use crate::text_state::TextState;

/// One `q`-level snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsState {
    pub ctm: Matrix,
    /// Persistent text state, outliving individual text objects.
    pub text: TextState,
}

/// The `q`/`Q` stack plus the text-object stack.
#[derive(Debug, Clone)]
pub struct StateStack {
    graphics: Vec<GraphicsState>,
    text_object: Option<Vec<TextState>>,
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStack {
    pub fn new() -> Self {
        Self {
            graphics: vec![GraphicsState::default()],
            text_object: None,
        }
    }

    /// `q`: clone the top graphics state and, inside a text object, the top
    /// text state.
    pub fn push_state(&mut self) {
        let top = self.current_graphics().clone();
        self.graphics.push(top);
        if let Some(stack) = self.text_object.as_mut() {
            if let Some(top) = stack.last().cloned() {
                stack.push(top);
            }
        }
    }

    /// `Q`: pop both stacks, never below their root entry.
    pub fn pop_state(&mut self) {
        if self.graphics.len() > 1 {
            self.graphics.pop();
        }
        if let Some(stack) = self.text_object.as_mut() {
            if stack.len() > 1 {
                stack.pop();
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.graphics.len()
    }

    pub fn in_text_object(&self) -> bool {
        self.text_object.is_some()
    }

    pub fn current_graphics(&self) -> &GraphicsState {
        // the stack is never empty
        &self.graphics[self.graphics.len() - 1]
    }

    fn current_graphics_mut(&mut self) -> &mut GraphicsState {
        let last = self.graphics.len() - 1;
        &mut self.graphics[last]
    }

    pub fn current_ctm(&self) -> Matrix {
        self.current_graphics().ctm
    }

    /// `cm`: `CTM = m × CTM`.
    pub fn concat_ctm(&mut self, m: &Matrix) {
        let state = self.current_graphics_mut();
        state.ctm = m.multiply(&state.ctm);
    }

    /// The text state text operators act on.
    pub fn current_text_state(&self) -> &TextState {
        match self.text_object.as_ref().and_then(|s| s.last()) {
            Some(ts) => ts,
            None => &self.current_graphics().text,
        }
    }

    pub fn current_text_state_mut(&mut self) -> &mut TextState {
        if self.text_object.as_ref().is_some_and(|s| !s.is_empty()) {
            return self.text_object.as_mut().and_then(|s| s.last_mut()).unwrap();
        }
        &mut self.current_graphics_mut().text
    }

    /// `BT`: open a text-object stack seeded from the persistent text state.
    pub fn start_text_object(&mut self) {
        let seed = self.current_graphics().text.clone();
        self.text_object = Some(vec![seed]);
    }

    /// `ET`: copy the surviving fields back onto the persistent text state
    /// and drop the text-object stack. Returns `false` when no text object
    /// was open.
    pub fn end_text_object(&mut self) -> bool {
        let Some(stack) = self.text_object.take() else {
            return false;
        };
        if let Some(last) = stack.last() {
            self.current_graphics_mut().text.persist_from(last);
        }
        true
    }
}
