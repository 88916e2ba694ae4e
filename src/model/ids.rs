//! Symbol identifiers.

use std::fmt;

/// Index of a symbol inside a [`SymbolGraph`](super::SymbolGraph).
///
/// Ids are only meaningful for the graph that produced them. Every back
/// reference in the model (containing symbol, alias target, associated
/// property, ...) is a `SymbolId`, so the graph owns all symbols and
/// references never keep anything alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Position of the symbol in the graph's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
