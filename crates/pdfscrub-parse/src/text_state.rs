//! Text state for the placement collector.
//!
//! Holds the text state parameters set by `Tc`, `Tw`, `Tz`, `TL`, `Ts` and
//! `Tf`, the text and line matrices, and the two dirty flags that record
//! whether a matrix was set since the last text placement consumed it.

use pdfscrub_core::Matrix;

use crate::resources::FontRef;

/// Font selected by `Tf` or by an ExtGState `/Font` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSelection {
    /// Copied by identity; the decoder behind it is shared document-wide.
    pub font: FontRef,
    pub size: f64,
}

/// Text state parameters and matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct TextState {
    /// Character spacing (`Tc`).
    pub char_space: f64,
    /// Word spacing (`Tw`).
    pub word_space: f64,
    /// Horizontal scaling in percent (`Tz`).
    pub scale: f64,
    /// Leading (`TL`).
    pub leading: f64,
    /// Rise (`Ts`).
    pub rise: f64,
    pub font: Option<FontSelection>,
    /// Text matrix (Tm).
    pub tm: Matrix,
    /// Text line matrix (Tlm).
    pub tlm: Matrix,
    pub tm_dirty: bool,
    pub tlm_dirty: bool,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            char_space: 0.0,
            word_space: 0.0,
            scale: 100.0,
            leading: 0.0,
            rise: 0.0,
            font: None,
            tm: Matrix::IDENTITY,
            tlm: Matrix::IDENTITY,
            tm_dirty: true,
            tlm_dirty: true,
        }
    }
}

impl TextState {
    /// `Tm`: set both matrices directly and mark them dirty.
    pub fn set_text_matrix(&mut self, m: Matrix) {
        self.tm = m;
        self.tlm = m;
        self.tm_dirty = true;
        self.tlm_dirty = true;
    }

    /// `Td`: `Tlm = translate(tx, ty) × Tlm`, then `Tm = Tlm`.
    pub fn move_text_position(&mut self, tx: f64, ty: f64) {
        let moved = Matrix::translation(tx, ty).multiply(&self.tlm);
        self.set_text_matrix(moved);
    }

    /// `TD`: set leading to `-ty`, then `Td`.
    pub fn move_text_position_and_set_leading(&mut self, tx: f64, ty: f64) {
        self.leading = -ty;
        self.move_text_position(tx, ty);
    }

    /// `T*`: `Td(0, -leading)`.
    pub fn move_to_next_line(&mut self) {
        let leading = self.leading;
        self.move_text_position(0.0, -leading);
    }

    /// Clear both dirty flags once a placement has taken a snapshot.
    pub fn mark_consumed(&mut self) {
        self.tm_dirty = false;
        self.tlm_dirty = false;
    }

    /// Copy the fields that outlive a text object (`ET`) onto `self`.
    pub fn persist_from(&mut self, other: &TextState) {
        self.char_space = other.char_space;
        self.word_space = other.word_space;
        self.scale = other.scale;
        self.leading = other.leading;
        self.rise = other.rise;
        self.font = other.font.clone();
    }
}
