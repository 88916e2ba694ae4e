//! Name resolution consulted by position-relative display.
//!
//! [`BindingOracle`] is the boundary to whatever semantic engine owns the
//! source document. [`LexicalScopes`] is a self-contained implementation
//! over a [`SymbolGraph`] for hosts (and tests) without one.
//!
//! ```text
//! region [0, 120)  global      aliases: Foo = N1.N2
//!   region [10, 110) N1.N2      imports: System
//!     region [40, 90) C.M      locals: x
//! ```
//!
//! Lookup at a position walks the scope chain from the innermost region's
//! container outwards. The first scope that produces candidates wins.

use indexmap::IndexMap;

use crate::base::{Name, TextRange, TextSize};
use crate::model::{Symbol, SymbolGraph, SymbolId, SymbolKind};

/// Semantic name lookup at a document position.
pub trait BindingOracle {
    /// Length of the document positions refer to.
    fn document_len(&self) -> TextSize;

    /// Every symbol `name` binds to at `position`.
    fn lookup(&self, position: TextSize, name: &str) -> Vec<SymbolId>;

    /// Like [`lookup`](Self::lookup), restricted to namespaces, types and
    /// aliases.
    fn lookup_types_and_namespaces(&self, position: TextSize, name: &str) -> Vec<SymbolId>;

    /// Whether only a type or namespace can appear at `position`.
    fn is_type_only_context(&self, position: TextSize) -> bool;

    /// Alias symbols visible at `position`, nearest scope first and in
    /// declaration order within a scope.
    fn enclosing_aliases(&self, position: TextSize) -> Vec<SymbolId>;
}

/// Upper bound on scope-chain and base-type walks.
const MAX_SCOPE_DEPTH: usize = 256;

#[derive(Debug, Clone)]
struct Region {
    range: TextRange,
    container: SymbolId,
    /// Alias declarations keyed by alias name, in declaration order.
    aliases: IndexMap<Name, SymbolId>,
    imports: Vec<SymbolId>,
    locals: Vec<SymbolId>,
}

/// Region-based binding oracle over a symbol graph.
#[derive(Debug, Clone)]
pub struct LexicalScopes<'g> {
    graph: &'g SymbolGraph,
    document_len: TextSize,
    regions: Vec<Region>,
    type_only: Vec<TextRange>,
}

impl<'g> LexicalScopes<'g> {
    /// Scopes for a document of `document_len`; the whole document starts
    /// out as a region of the global namespace.
    pub fn new(graph: &'g SymbolGraph, document_len: TextSize) -> Self {
        let root = Region {
            range: TextRange::new(TextSize::from(0), document_len),
            container: graph.global_namespace(),
            aliases: IndexMap::new(),
            imports: Vec::new(),
            locals: Vec::new(),
        };
        Self { graph, document_len, regions: vec![root], type_only: Vec::new() }
    }

    /// Index of the region covering the whole document.
    pub fn root(&self) -> usize {
        0
    }

    /// Declare that `range` is inside `container` (a namespace, type or
    /// method body). Returns the region index.
    pub fn region(&mut self, range: TextRange, container: SymbolId) -> usize {
        self.regions.push(Region {
            range,
            container,
            aliases: IndexMap::new(),
            imports: Vec::new(),
            locals: Vec::new(),
        });
        self.regions.len() - 1
    }

    /// Declare a using-alias in `region`.
    pub fn alias(&mut self, region: usize, alias: SymbolId) {
        let name = self.graph[alias].name.clone();
        self.regions[region].aliases.insert(name, alias);
    }

    /// Import the types of `namespace` into `region`.
    pub fn import(&mut self, region: usize, namespace: SymbolId) {
        self.regions[region].imports.push(namespace);
    }

    /// Declare a local (or range variable, label) visible in `region`.
    pub fn local(&mut self, region: usize, symbol: SymbolId) {
        self.regions[region].locals.push(symbol);
    }

    /// Mark `range` as a context where only types and namespaces can appear.
    pub fn type_only(&mut self, range: TextRange) {
        self.type_only.push(range);
    }

    /// Regions containing `position`, innermost first. Equal ranges put
    /// the later declaration first.
    fn regions_at(&self, position: TextSize) -> Vec<&Region> {
        let mut regions: Vec<(usize, &Region)> =
            self.regions.iter().enumerate().filter(|(_, r)| r.range.contains_inclusive(position)).collect();
        regions.sort_by_key(|&(index, r)| (r.range.len(), std::cmp::Reverse(index)));
        regions.into_iter().map(|(_, r)| r).collect()
    }

    /// Containers from the innermost region's container out to the global
    /// namespace.
    fn scope_chain(&self, innermost: SymbolId) -> Vec<SymbolId> {
        let mut chain = Vec::new();
        let mut current = Some(innermost);
        while let Some(id) = current {
            if chain.len() >= MAX_SCOPE_DEPTH {
                break;
            }
            chain.push(id);
            current = self.graph[id].containing;
        }
        chain
    }

    fn lookup_filtered(&self, position: TextSize, name: &str, accept: impl Fn(&Symbol) -> bool) -> Vec<SymbolId> {
        let regions = self.regions_at(position);
        let Some(innermost) = regions.first() else {
            return Vec::new();
        };

        for container in self.scope_chain(innermost.container) {
            let scope_regions = || regions.iter().filter(move |r| r.container == container);

            let mut found: Vec<SymbolId> = scope_regions()
                .flat_map(|r| r.locals.iter().copied())
                .filter(|&local| self.graph[local].name == name)
                .collect();
            found.extend(self.declared_in(container, name));
            found.retain(|&id| accept(&self.graph[id]));

            if found.is_empty() {
                found.extend(scope_regions().filter_map(|r| r.aliases.get(name).copied()));
                for region in scope_regions() {
                    for &namespace in &region.imports {
                        found.extend(
                            self.graph
                                .members_named(namespace, name)
                                .filter(|&m| matches!(self.graph[m].kind, SymbolKind::NamedType(_))),
                        );
                    }
                }
                found.retain(|&id| accept(&self.graph[id]));
            }

            if !found.is_empty() {
                tracing::trace!(
                    "[LOOKUP] '{}' at {:?} bound in {} -> {} candidate(s)",
                    name,
                    position,
                    container,
                    found.len()
                );
                found.dedup();
                return found;
            }
        }
        Vec::new()
    }

    /// Members, type parameters and parameters `container` declares under
    /// `name`, plus inherited members for types.
    fn declared_in(&self, container: SymbolId, name: &str) -> Vec<SymbolId> {
        let graph = self.graph;
        let mut found: Vec<SymbolId> = graph
            .members_named(container, name)
            .filter(|&m| !matches!(graph[m].kind, SymbolKind::Alias(_)))
            .collect();
        let named = |ids: &[SymbolId]| ids.iter().copied().filter(|&id| graph[id].name == name).collect::<Vec<_>>();

        match &graph[container].kind {
            SymbolKind::NamedType(data) => {
                found.extend(named(&data.type_parameters));
                let mut base = data.base_type;
                for _ in 0..MAX_SCOPE_DEPTH {
                    let Some(base_id) = base else { break };
                    if !found.is_empty() {
                        break;
                    }
                    found.extend(graph.members_named(base_id, name));
                    base = graph[base_id].as_named_type().and_then(|t| t.base_type);
                }
            }
            SymbolKind::Method(data) => {
                found.extend(named(&data.type_parameters));
                found.extend(named(&data.parameters));
            }
            _ => {}
        }
        found
    }
}

fn is_type_or_namespace(symbol: &Symbol) -> bool {
    matches!(
        symbol.kind,
        SymbolKind::Namespace | SymbolKind::NamedType(_) | SymbolKind::TypeParameter(_) | SymbolKind::Alias(_)
    )
}

impl BindingOracle for LexicalScopes<'_> {
    fn document_len(&self) -> TextSize {
        self.document_len
    }

    fn lookup(&self, position: TextSize, name: &str) -> Vec<SymbolId> {
        self.lookup_filtered(position, name, |_| true)
    }

    fn lookup_types_and_namespaces(&self, position: TextSize, name: &str) -> Vec<SymbolId> {
        self.lookup_filtered(position, name, is_type_or_namespace)
    }

    fn is_type_only_context(&self, position: TextSize) -> bool {
        self.type_only.iter().any(|range| range.contains_inclusive(position))
    }

    fn enclosing_aliases(&self, position: TextSize) -> Vec<SymbolId> {
        self.regions_at(position)
            .into_iter()
            .flat_map(|region| region.aliases.values().copied())
            .collect()
    }
}
