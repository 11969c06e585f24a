//! Operator callback trait for content stream interpretation.
//!
//! The interpreter performs no semantic interpretation: it hands every
//! operator to an [`OperatorHandler`], which ignores the ones it does not
//! recognize.

use pdfscrub_core::ExtractWarning;

use crate::tokenizer::Operand;

/// Receives operators in document order.
pub trait OperatorHandler {
    /// Called once per operator. `index` counts operators from 0 within the
    /// current content holder.
    fn on_operator(&mut self, index: usize, name: &str, operands: &[Operand]);

    /// Called for non-fatal issues noticed by the handler or interpreter.
    fn on_warning(&mut self, _warning: ExtractWarning) {}
}
