//! # symbol-display
//!
//! Renders a semantic symbol model and primitive values as source-language
//! text, split into classified parts for colorization and navigation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! display   → Public API, structural visitor, minimal qualification,
//!             literal formatter, builder pool
//!   ↓
//! model     → Symbol graph (arena addressed by SymbolId), constants
//!   ↓
//! syntax    → Keyword/punctuation table, reserved words, operator names
//!   ↓
//! base      → Primitives (Name, TextRange, TextSize)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → model → display)
// ============================================================================

/// Foundation types: Name, TextRange, TextSize
pub mod base;

/// Syntax: keyword and punctuation table, reserved words
pub mod syntax;

/// Symbol model: SymbolGraph, Symbol, TypeRef, ConstantValue
pub mod model;

/// Display engine: display, display_minimal, literal formatting
pub mod display;

// Re-export the display API
pub use display::{
    display, display_minimal, display_minimal_string, display_string, format_literal, format_literal_char,
    format_primitive, parts_to_string, BindingOracle, DisplayError, DisplayFormat, DisplayPart, DisplayPartKind,
    LexicalScopes, LiteralOptions,
};

// Re-export foundation types
pub use base::{Name, TextRange, TextSize};
pub use model::{Symbol, SymbolGraph, SymbolId, SymbolKind};
