//! Keyword and punctuation table.
//!
//! Maps token kinds to their canonical text and answers reserved-word
//! questions for identifier escaping. Read-only; no parsing happens here.

mod keywords;
mod syntax_kind;

pub use keywords::{is_reserved_word, keyword_kind, needs_verbatim_escape, operator_kind, operator_token};
pub use syntax_kind::SyntaxKind;
