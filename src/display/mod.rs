//! Display engine: symbols and literals to classified text.
//!
//! Every entry point checks a [`PartBuilder`] out of a shared pool, runs
//! one structural visit over the symbol graph and hands back the frozen
//! parts:
//!
//! ```text
//! display(graph, id, format)
//!     │
//!     ▼
//! BUILDER_POOL.acquire()        ← bounded free list, overflow allocates
//!     │
//!     ▼
//! DisplayVisitor::visit(ROOT)   ← one case per symbol kind
//!     │   └── MinimalContext    ← only for display_minimal: oracle + aliases
//!     ▼
//! PartBuilder::freeze()         → Vec<DisplayPart>
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! display/
//! ├── mod.rs       # public entry points
//! ├── format.rs    # DisplayFormat, option groups, presets
//! ├── parts.rs     # DisplayPart, DisplayPartKind, PartBuilder
//! ├── pool.rs      # bounded, thread-safe free list
//! ├── literal.rs   # literal and primitive formatting
//! ├── oracle.rs    # BindingOracle, LexicalScopes
//! ├── minimal.rs   # alias substitution, minimal qualification
//! ├── visitor/     # structural visitor
//! └── error.rs     # DisplayError
//! ```

mod error;
mod format;
mod literal;
mod minimal;
mod oracle;
mod parts;
mod pool;
mod visitor;

pub use error::DisplayError;
pub use format::{
    CompilerInternalOptions, DelegateStyle, DisplayFormat, ExtensionMethodStyle, GenericsOptions,
    GlobalNamespaceStyle, KindOptions, LocalOptions, MemberOptions, MiscellaneousOptions, ParameterOptions,
    PropertyStyle, TypeQualificationStyle,
};
pub use literal::{
    format_code_point, format_constant, format_literal, format_literal_char, format_primitive, format_string,
    needs_escaping, LiteralOptions,
};
pub use oracle::{BindingOracle, LexicalScopes};
pub use parts::{parts_to_string, DisplayPart, DisplayPartKind, PartBuilder};
pub use pool::{Pool, PoolGuard, Poolable};

use crate::base::TextSize;
use crate::model::{SymbolGraph, SymbolId};

use minimal::MinimalContext;
use visitor::{DisplayVisitor, VisitMode};

/// Builders kept around between calls.
const POOL_CAPACITY: usize = 32;

static BUILDER_POOL: Pool<PartBuilder> = Pool::new(POOL_CAPACITY);

/// Render `id` as display parts.
///
/// Pure: the same graph, symbol and format always produce the same parts.
pub fn display(graph: &SymbolGraph, id: SymbolId, format: &DisplayFormat) -> Result<Vec<DisplayPart>, DisplayError> {
    tracing::debug!("[DISPLAY] {} {} '{}'", graph[id].kind_name(), id, graph[id].name);
    run(graph, id, format, None)
}

/// Render `id` as the shortest text that binds to it at `position`.
///
/// Names are qualified only as far as `oracle` says they must be, and a
/// using-alias in scope replaces its target when its name re-binds to it.
pub fn display_minimal(
    graph: &SymbolGraph,
    id: SymbolId,
    oracle: &dyn BindingOracle,
    position: TextSize,
    format: &DisplayFormat,
) -> Result<Vec<DisplayPart>, DisplayError> {
    let len = oracle.document_len();
    if position > len {
        return Err(DisplayError::PositionOutOfRange { position, len });
    }
    tracing::debug!("[DISPLAY] {} {} '{}' at {:?}", graph[id].kind_name(), id, graph[id].name, position);
    let context = MinimalContext::new(oracle, position);
    run(graph, id, format, Some(&context))
}

/// [`display`], concatenated.
pub fn display_string(graph: &SymbolGraph, id: SymbolId, format: &DisplayFormat) -> Result<String, DisplayError> {
    display(graph, id, format).map(|parts| parts_to_string(&parts))
}

/// [`display_minimal`], concatenated.
pub fn display_minimal_string(
    graph: &SymbolGraph,
    id: SymbolId,
    oracle: &dyn BindingOracle,
    position: TextSize,
    format: &DisplayFormat,
) -> Result<String, DisplayError> {
    display_minimal(graph, id, oracle, position, format).map(|parts| parts_to_string(&parts))
}

fn run(
    graph: &SymbolGraph,
    id: SymbolId,
    format: &DisplayFormat,
    minimal: Option<&MinimalContext<'_>>,
) -> Result<Vec<DisplayPart>, DisplayError> {
    let mut builder = BUILDER_POOL.acquire();
    builder.set_escape_keywords(format.misc(MiscellaneousOptions::ESCAPE_KEYWORD_IDENTIFIERS));
    DisplayVisitor::new(graph, format, &mut builder, minimal).visit(id, VisitMode::ROOT)?;
    Ok(builder.freeze())
}

/// Number of pooled builders currently idle.
pub fn pooled_builders() -> usize {
    BUILDER_POOL.available()
}
