//! Display assertion helpers.

#![allow(dead_code)]

use symdisplay::display::{display, display_string, DisplayFormat, DisplayPart, DisplayPartKind};
use symdisplay::model::{SymbolGraph, SymbolId};

/// Render `id` to a string, failing the test on error.
pub fn render(graph: &SymbolGraph, id: SymbolId, format: DisplayFormat) -> String {
    display_string(graph, id, &format).unwrap_or_else(|e| panic!("display of {id} failed: {e}"))
}

pub fn parts(graph: &SymbolGraph, id: SymbolId, format: DisplayFormat) -> Vec<DisplayPart> {
    display(graph, id, &format).unwrap_or_else(|e| panic!("display of {id} failed: {e}"))
}

/// The kind of the first part whose text is `text`.
pub fn kind_of(parts: &[DisplayPart], text: &str) -> DisplayPartKind {
    parts
        .iter()
        .find(|p| p.text == text)
        .map(|p| p.kind)
        .unwrap_or_else(|| panic!("no part '{}' in {:?}", text, parts.iter().map(|p| &p.text).collect::<Vec<_>>()))
}

/// Assert the rendering of `id` under `format`.
pub fn assert_renders(graph: &SymbolGraph, id: SymbolId, format: DisplayFormat, expected: &str) {
    let actual = render(graph, id, format);
    assert_eq!(actual, expected, "unexpected rendering of {id}");
}
