//! Position-relative qualification.
//!
//! A minimal display asks the [`BindingOracle`] what each name binds to at
//! the anchor position and drops every qualifier that is not needed:
//!
//! ```text
//! anchor inside namespace N1.N2, `using Foo = N1.N2.N3;` in scope
//!
//!   N1.N2.N3.C   -> Foo.C     alias re-binds to itself
//!   N1.N2.C2     -> C2        `C2` binds to the same type
//!   N1.N2.Color  -> N2.Color  `Color` is shadowed by a member of another type
//!   N1.N2.Color  -> Color     shadowed by a member of type `Color`
//! ```
//!
//! Qualification is rebuilt from the nearest qualifier that makes the name
//! bind correctly, so a shadowed simple name only costs the segments it
//! needs.

use std::cell::OnceCell;

use rustc_hash::FxHashMap;

use crate::base::TextSize;
use crate::display::error::DisplayError;
use crate::display::format::GlobalNamespaceStyle;
use crate::display::oracle::BindingOracle;
use crate::display::parts::DisplayPartKind;
use crate::display::visitor::{DisplayVisitor, VisitMode};
use crate::model::{SymbolGraph, SymbolId, SymbolKind, TypeKind};
use crate::syntax::SyntaxKind;

/// Oracle and anchor for one minimal display call.
pub(crate) struct MinimalContext<'a> {
    oracle: &'a dyn BindingOracle,
    position: TextSize,
    /// Alias target to alias, built on first use.
    aliases: OnceCell<FxHashMap<SymbolId, SymbolId>>,
}

impl<'a> MinimalContext<'a> {
    pub fn new(oracle: &'a dyn BindingOracle, position: TextSize) -> Self {
        Self { oracle, position, aliases: OnceCell::new() }
    }

    /// The nearest alias in scope whose target is `target`.
    fn alias_for(&self, graph: &SymbolGraph, target: SymbolId) -> Option<SymbolId> {
        let aliases = self.aliases.get_or_init(|| {
            let mut map = FxHashMap::default();
            for alias in self.oracle.enclosing_aliases(self.position) {
                if let Some(data) = graph.get(alias).and_then(|s| s.as_alias()) {
                    map.entry(data.target).or_insert(alias);
                }
            }
            tracing::trace!("[ALIAS] {} alias(es) in scope at {:?}", map.len(), self.position);
            map
        });
        aliases.get(&target).copied()
    }

    /// Candidates for `name`, restricted to namespaces and types where only
    /// those can appear.
    fn bind(&self, name: &str, mode: VisitMode) -> Vec<SymbolId> {
        if mode.in_namespace_or_type || self.oracle.is_type_only_context(self.position) {
            self.oracle.lookup_types_and_namespaces(self.position, name)
        } else {
            self.oracle.lookup(self.position, name)
        }
    }

    fn lookup_types_and_namespaces(&self, name: &str) -> Vec<SymbolId> {
        self.oracle.lookup_types_and_namespaces(self.position, name)
    }
}

/// The single candidate whose arity matches, if exactly one does.
fn single_symbol_with_arity(graph: &SymbolGraph, candidates: &[SymbolId], arity: usize) -> Option<SymbolId> {
    let mut matching = candidates.iter().copied().filter(|&c| graph.arity(c) == arity);
    let first = matching.next()?;
    matching.next().is_none().then_some(first)
}

/// The type a name stands for when used as a value: a member's declared
/// type, an alias's type target, or a type itself.
fn symbol_type(graph: &SymbolGraph, id: SymbolId) -> Option<SymbolId> {
    let symbol = graph.get(id)?;
    let ty = match &symbol.kind {
        SymbolKind::Field(data) => data.ty.ty,
        SymbolKind::Property(data) => data.ty.ty,
        SymbolKind::Local(data) => data.ty.ty,
        SymbolKind::Parameter(data) => data.ty.ty,
        SymbolKind::Alias(data) => data.target,
        _ if symbol.is_type() => return Some(graph.original_definition(id)),
        _ => return None,
    };
    graph.get(ty).is_some_and(|s| s.is_type()).then(|| graph.original_definition(ty))
}

impl DisplayVisitor<'_> {
    /// Emit an alias in place of `id` when one is in scope and its name
    /// re-binds to that same alias.
    pub(crate) fn try_add_alias(&mut self, id: SymbolId) -> bool {
        let graph = self.graph;
        let Some(context) = self.minimal else {
            return false;
        };
        let Some(alias) = context.alias_for(graph, id) else {
            return false;
        };

        let name = &graph[alias].name;
        let bound = context.lookup_types_and_namespaces(name);
        if bound != [alias] {
            tracing::debug!("[ALIAS] '{}' does not re-bind to itself ({} candidate(s))", name, bound.len());
            return false;
        }

        tracing::trace!("[ALIAS] {} displayed as '{}'", id, name);
        self.part(DisplayPartKind::AliasName, alias, name);
        true
    }

    pub(crate) fn minimally_qualify_namespace(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        if graph.is_global_namespace(id) {
            return Ok(());
        }

        let name = &graph[id].name;
        let binds_here = match self.minimal {
            Some(context) => context.bind(name, mode) == [id],
            None => true,
        };
        if !binds_here {
            tracing::debug!("[MINIMAL] Namespace '{}' needs qualification", name);
            if let Some(parent) = graph[id].containing {
                if graph.is_global_namespace(parent) {
                    self.add_global_qualifier(parent);
                } else {
                    self.visit(parent, VisitMode::NOT_FIRST)?;
                    self.punct(SyntaxKind::DOT);
                }
            }
        }

        self.part(DisplayPartKind::NamespaceName, id, name);
        Ok(())
    }

    pub(crate) fn minimally_qualify_named_type(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let data = graph[id].as_named_type().ok_or_else(|| DisplayError::malformed(id, "expected a named type"))?;

        if !data.is_anonymous && !data.is_tuple() && !self.name_binds_to(id, mode) {
            tracing::debug!("[MINIMAL] Type '{}' needs qualification", graph[id].name);
            if let Some(container) = self.include_named_type(graph.containing_type(id)) {
                self.visit(container, VisitMode::NOT_FIRST)?;
                self.punct(SyntaxKind::DOT);
            } else if let Some(namespace) = graph.containing_namespace(id) {
                if graph.is_global_namespace(namespace) {
                    if data.type_kind != TypeKind::Error {
                        self.add_global_qualifier(namespace);
                    }
                } else {
                    self.visit(namespace, VisitMode::NOT_FIRST)?;
                    self.punct(SyntaxKind::DOT);
                }
            }
        }

        self.add_name_and_type_arguments(id, mode)
    }

    /// Whether the simple name of `id` binds back to its definition.
    fn name_binds_to(&self, id: SymbolId, mode: VisitMode) -> bool {
        let graph = self.graph;
        let Some(context) = self.minimal else {
            return true;
        };
        let name = &graph[id].name;
        let arity = graph.arity(id);
        let target = graph.original_definition(id);
        let Some(bound) = single_symbol_with_arity(graph, &context.bind(name, mode), arity) else {
            return false;
        };
        if bound == target {
            return true;
        }

        // `Color Color`: a member whose type is the type it shadows still
        // lets the simple name stand for that type.
        let Some(type_only) = single_symbol_with_arity(graph, &context.lookup_types_and_namespaces(name), arity) else {
            return false;
        };
        type_only == target && symbol_type(graph, bound).is_some_and(|ty| Some(ty) == symbol_type(graph, type_only))
    }

    /// `global::`, only when the format includes the global namespace.
    fn add_global_qualifier(&mut self, global: SymbolId) {
        if self.format.global_namespace_style == GlobalNamespaceStyle::Included {
            self.builder.push(DisplayPartKind::Keyword, Some(global), SyntaxKind::GLOBAL_KW.text());
            self.punct(SyntaxKind::COLON_COLON);
        }
    }
}
