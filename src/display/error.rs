//! Error types for display operations.

use thiserror::Error;

use crate::base::TextSize;
use crate::model::{MethodKind, SymbolId};

/// Errors a display call can raise.
///
/// Missing text and unsupported primitive values are not errors; they are
/// absorbed where they occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    /// The anchor position of a minimal display lies past the document.
    #[error("position {position:?} is outside the document (length {len:?})")]
    PositionOutOfRange { position: TextSize, len: TextSize },

    /// A method kind that has no display form reached the visitor.
    #[error("method {method} has unexpected kind {kind:?}")]
    UnexpectedMethodKind { method: SymbolId, kind: MethodKind },

    /// The symbol graph does not have the shape its kind requires.
    #[error("malformed symbol {symbol}: {reason}")]
    MalformedSymbol { symbol: SymbolId, reason: &'static str },
}

impl DisplayError {
    pub fn malformed(symbol: SymbolId, reason: &'static str) -> Self {
        Self::MalformedSymbol { symbol, reason }
    }
}
