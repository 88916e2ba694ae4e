//! Foundation types for the display engine.
//!
//! This module provides the primitives shared by every other module:
//! - [`Name`] - Cheap-to-clone symbol names
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other crate modules.

pub use smol_str::SmolStr;
pub use text_size::{TextRange, TextSize};

/// A symbol or alias name. Short names are stored inline, so cloning is cheap.
pub type Name = SmolStr;

/// Returns `true` if `text` lexes as a single identifier token.
///
/// Only the identifier grammar is checked here; reserved words are the
/// business of [`crate::syntax::is_reserved_word`].
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
