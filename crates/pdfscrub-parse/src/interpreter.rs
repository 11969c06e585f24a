//! Content stream interpreter.
//!
//! Drives the [`Lexer`] over a content holder's bytes and dispatches each
//! `(operator, operands)` event to an [`OperatorHandler`]. Operands are
//! cleared after every dispatch. Unknown operators are passed through.

use tracing::debug;

use crate::error::BackendError;
use crate::handler::OperatorHandler;
use crate::tokenizer::Lexer;

/// Interpret `content`, returning the number of operators dispatched.
///
/// # Errors
///
/// Returns [`BackendError::MalformedStream`] when the lexer cannot make
/// progress. Operators before the malformed token have already been
/// dispatched; callers discard the holder's partial result.
pub fn interpret(content: &[u8], handler: &mut dyn OperatorHandler) -> Result<usize, BackendError> {
    let mut count = 0;
    for op in Lexer::new(content) {
        let op = op?;
        handler.on_operator(count, &op.name, &op.operands);
        count += 1;
    }
    debug!(operators = count, bytes = content.len(), "interpreted content stream");
    Ok(count)
}
