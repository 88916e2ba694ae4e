//! Classified output fragments and the builder that accumulates them.

use std::fmt;

use smol_str::SmolStr;

use crate::model::SymbolId;
use crate::syntax::{needs_verbatim_escape, SyntaxKind};

use super::pool::Poolable;

/// Semantic class of a [`DisplayPart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayPartKind {
    AliasName,
    AssemblyName,
    ClassName,
    DelegateName,
    EnumName,
    ErrorTypeName,
    EventName,
    FieldName,
    InterfaceName,
    Keyword,
    LabelName,
    NumericLiteral,
    StringLiteral,
    LocalName,
    MethodName,
    ModuleName,
    NamespaceName,
    Operator,
    ParameterName,
    PropertyName,
    Punctuation,
    Space,
    StructName,
    AnonymousTypeIndicator,
    Text,
    TypeParameterName,
    RangeVariableName,
    EnumMemberName,
    ExtensionMethodName,
    ConstantName,
    Other,
}

impl DisplayPartKind {
    /// Name kinds that get a verbatim `@` prefix when they collide with a
    /// reserved word.
    pub fn is_escapable(self) -> bool {
        matches!(
            self,
            DisplayPartKind::AliasName
                | DisplayPartKind::ClassName
                | DisplayPartKind::StructName
                | DisplayPartKind::InterfaceName
                | DisplayPartKind::EnumName
                | DisplayPartKind::DelegateName
                | DisplayPartKind::TypeParameterName
                | DisplayPartKind::MethodName
                | DisplayPartKind::PropertyName
                | DisplayPartKind::FieldName
                | DisplayPartKind::LocalName
                | DisplayPartKind::NamespaceName
                | DisplayPartKind::ParameterName
        )
    }
}

/// One classified fragment of a rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayPart {
    pub kind: DisplayPartKind,
    /// The symbol this fragment names, if any.
    pub symbol: Option<SymbolId>,
    pub text: SmolStr,
}

impl DisplayPart {
    pub fn new(kind: DisplayPartKind, symbol: Option<SymbolId>, text: impl Into<SmolStr>) -> Self {
        Self { kind, symbol, text: text.into() }
    }
}

impl fmt::Display for DisplayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenate the text of `parts`.
pub fn parts_to_string(parts: &[DisplayPart]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.text.len()).sum());
    for part in parts {
        out.push_str(&part.text);
    }
    out
}

// ============================================================================
// PART BUILDER
// ============================================================================

/// Ordered accumulation of parts for one display call.
#[derive(Debug, Default)]
pub struct PartBuilder {
    parts: Vec<DisplayPart>,
    escape_keywords: bool,
}

impl Poolable for PartBuilder {
    fn reset(&mut self) {
        self.parts.clear();
        self.escape_keywords = false;
    }
}

impl PartBuilder {
    pub fn new(escape_keywords: bool) -> Self {
        Self { parts: Vec::new(), escape_keywords }
    }

    pub(crate) fn set_escape_keywords(&mut self, escape_keywords: bool) {
        self.escape_keywords = escape_keywords;
    }

    /// Append a part. Empty text becomes `?`; escapable names that collide
    /// with a reserved word get the `@` prefix.
    pub fn push(&mut self, kind: DisplayPartKind, symbol: Option<SymbolId>, text: &str) {
        let text: SmolStr = if text.is_empty() {
            SmolStr::new_static("?")
        } else if self.escape_keywords && kind.is_escapable() && needs_verbatim_escape(text) {
            smol_str::format_smolstr!("@{text}")
        } else {
            SmolStr::new(text)
        };
        self.parts.push(DisplayPart { kind, symbol, text });
    }

    pub fn keyword(&mut self, keyword: SyntaxKind) {
        self.push(DisplayPartKind::Keyword, None, keyword.text());
    }

    pub fn punct(&mut self, punct: SyntaxKind) {
        self.push(DisplayPartKind::Punctuation, None, punct.text());
    }

    pub fn operator(&mut self, operator: SyntaxKind) {
        self.push(DisplayPartKind::Operator, None, operator.text());
    }

    pub fn space(&mut self) {
        self.push(DisplayPartKind::Space, None, " ");
    }

    pub fn text(&mut self, text: &str) {
        self.push(DisplayPartKind::Text, None, text);
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[DisplayPart] {
        &self.parts
    }

    /// Remove and return every part pushed after the first `at`.
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<DisplayPart> {
        self.parts.split_off(at)
    }

    /// Take the accumulated parts, keeping the buffer for reuse.
    pub fn freeze(&mut self) -> Vec<DisplayPart> {
        self.parts.drain(..).collect()
    }
}
