//! Arena that owns every symbol.
//!
//! Symbols are stored in a `Vec` and addressed by [`SymbolId`]. The graph
//! also tracks member lists per container and a registry of special types.
//! Display code only reads the graph; all mutation happens while the caller
//! builds it.

use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;

use crate::base::Name;

use super::constant::ConstantValue;
use super::symbol::{Accessibility, MethodData, MethodKind, Modifiers, Symbol, SymbolKind};
use super::types::{
    ArrayTypeData, NamedTypeData, PointerTypeData, SpecialType, TupleElement, TypeKind, TypeParameterData, TypeRef,
    VALUE_TUPLE_REST_POSITION,
};
use super::SymbolId;

/// Upper bound on base-type and containment walks, guarding against
/// accidentally cyclic graphs.
const MAX_CHAIN_DEPTH: usize = 256;

#[derive(Debug, Clone)]
pub struct SymbolGraph {
    symbols: Vec<Symbol>,
    members: Vec<Vec<SymbolId>>,
    global_namespace: SymbolId,
    special_types: FxHashMap<SpecialType, SymbolId>,
}

impl Default for SymbolGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolGraph {
    /// An empty graph holding only the global namespace.
    pub fn new() -> Self {
        let global = Symbol::new("", SymbolKind::Namespace);
        Self {
            symbols: vec![global],
            members: vec![Vec::new()],
            global_namespace: SymbolId::from_index(0),
            special_types: FxHashMap::default(),
        }
    }

    /// A graph with `System` and every special type already defined.
    pub fn with_core_library() -> Self {
        let mut graph = Self::new();
        for &special in SpecialType::CORE {
            graph.special_or_define(special);
        }
        for arity in 1..=VALUE_TUPLE_REST_POSITION as u8 {
            graph.special_or_define(SpecialType::ValueTuple(arity));
        }
        graph
    }

    pub fn global_namespace(&self) -> SymbolId {
        self.global_namespace
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Add `symbol` as a member of `container`.
    ///
    /// Type parameters and parameters are registered on their owner instead
    /// of the member list, and receive their ordinal.
    pub fn add(&mut self, container: SymbolId, mut symbol: Symbol) -> SymbolId {
        symbol.containing = Some(container);
        let id = SymbolId::from_index(self.symbols.len());

        match &mut symbol.kind {
            SymbolKind::TypeParameter(data) => {
                data.ordinal = match &mut self[container].kind {
                    SymbolKind::NamedType(owner) => {
                        owner.type_parameters.push(id);
                        owner.type_parameters.len() - 1
                    }
                    SymbolKind::Method(owner) => {
                        owner.type_parameters.push(id);
                        owner.type_parameters.len() - 1
                    }
                    _ => 0,
                };
            }
            SymbolKind::Parameter(data) => {
                data.ordinal = match &mut self[container].kind {
                    SymbolKind::Method(owner) => {
                        owner.parameters.push(id);
                        owner.parameters.len() - 1
                    }
                    SymbolKind::Property(owner) => {
                        owner.parameters.push(id);
                        owner.parameters.len() - 1
                    }
                    _ => 0,
                };
            }
            _ => self.members[container.index()].push(id),
        }

        self.push(symbol)
    }

    /// Get or create the namespace `name` directly inside `parent`.
    pub fn add_namespace(&mut self, parent: SymbolId, name: &str) -> SymbolId {
        let existing = self
            .members_named(parent, name)
            .find(|&member| matches!(self[member].kind, SymbolKind::Namespace));
        match existing {
            Some(id) => id,
            None => self.add(parent, Symbol::new(name, SymbolKind::Namespace)),
        }
    }

    /// Get or create a dotted namespace path such as `N1.N2.N3`.
    pub fn namespace_path(&mut self, path: &str) -> SymbolId {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .fold(self.global_namespace, |parent, segment| self.add_namespace(parent, segment))
    }

    pub fn add_type(&mut self, container: SymbolId, name: &str, type_kind: TypeKind) -> SymbolId {
        let mut data = NamedTypeData::new(type_kind);
        if type_kind == TypeKind::Class {
            data.base_type = self.special(SpecialType::Object);
        }
        self.add(container, Symbol::new(name, SymbolKind::NamedType(data)))
    }

    pub fn add_type_parameter(&mut self, owner: SymbolId, name: &str) -> SymbolId {
        self.add(owner, Symbol::new(name, SymbolKind::TypeParameter(TypeParameterData::default())))
    }

    /// Add a `get`/`set` (or `add`/`remove`) accessor for a property or
    /// event and link it both ways.
    pub fn add_accessor(&mut self, owner: SymbolId, method_kind: MethodKind) -> SymbolId {
        let owner_symbol = &self[owner];
        let prefix = match method_kind {
            MethodKind::PropertyGet => "get_",
            MethodKind::PropertySet => "set_",
            MethodKind::EventAdd => "add_",
            MethodKind::EventRemove => "remove_",
            _ => "",
        };
        let mut data = MethodData::new(method_kind);
        data.associated = Some(owner);
        if method_kind == MethodKind::PropertyGet {
            data.return_type = owner_symbol.as_property().map(|p| p.ty.clone());
        }
        let accessor = Symbol::new(format!("{prefix}{}", owner_symbol.name), SymbolKind::Method(data))
            .with_accessibility(owner_symbol.accessibility)
            .with_modifiers(owner_symbol.modifiers)
            .implicit();
        let container = owner_symbol.containing.unwrap_or(self.global_namespace);
        let id = self.add(container, accessor);

        match (&mut self[owner].kind, method_kind) {
            (SymbolKind::Property(p), MethodKind::PropertyGet) => p.getter = Some(id),
            (SymbolKind::Property(p), MethodKind::PropertySet) => p.setter = Some(id),
            (SymbolKind::Event(e), MethodKind::EventAdd) => e.add = Some(id),
            (SymbolKind::Event(e), MethodKind::EventRemove) => e.remove = Some(id),
            _ => {}
        }
        id
    }

    /// Construct a generic type from `definition` with `type_arguments`.
    pub fn construct(&mut self, definition: SymbolId, type_arguments: Vec<TypeRef>) -> SymbolId {
        let mut symbol = self[definition].clone();
        let mut tuple_elements = None;
        if let SymbolKind::NamedType(data) = &mut symbol.kind {
            if let Some(SpecialType::ValueTuple(_)) = data.special {
                tuple_elements = Some(self.flatten_tuple_arguments(&type_arguments));
            }
            data.original_definition = Some(definition);
            data.type_arguments = type_arguments;
            data.is_unbound = false;
            data.special = None;
            data.tuple_elements = tuple_elements;
        }
        self.push(symbol)
    }

    /// The unbound form `C<,>` of a generic definition.
    pub fn construct_unbound(&mut self, definition: SymbolId) -> SymbolId {
        let arguments = self.type_arguments(definition);
        let id = self.construct(definition, arguments);
        if let SymbolKind::NamedType(data) = &mut self[id].kind {
            data.is_unbound = true;
            data.tuple_elements = None;
        }
        id
    }

    /// `element[]` for rank 1, `element[,]` and up otherwise.
    pub fn array_of(&mut self, element: impl Into<TypeRef>, rank: u32) -> SymbolId {
        let data = ArrayTypeData { element: element.into(), rank: rank.max(1), is_sz: rank <= 1 };
        self.push(Symbol::new("", SymbolKind::ArrayType(data)))
    }

    /// A rank-1 array that is not zero-based single-dimensional (`T[*]`).
    pub fn multi_dimensional_array_of(&mut self, element: impl Into<TypeRef>, rank: u32) -> SymbolId {
        let data = ArrayTypeData { element: element.into(), rank: rank.max(1), is_sz: false };
        self.push(Symbol::new("", SymbolKind::ArrayType(data)))
    }

    pub fn pointer_to(&mut self, pointed_at: impl Into<TypeRef>) -> SymbolId {
        let data = PointerTypeData { pointed_at: pointed_at.into() };
        self.push(Symbol::new("", SymbolKind::PointerType(data)))
    }

    pub fn dynamic_type(&mut self) -> SymbolId {
        self.push(Symbol::new("dynamic", SymbolKind::DynamicType))
    }

    /// `Nullable<T>` over `underlying`.
    pub fn nullable_of(&mut self, underlying: impl Into<TypeRef>) -> SymbolId {
        let definition = self.special_or_define(SpecialType::Nullable);
        self.construct(definition, vec![underlying.into()])
    }

    /// A tuple type over `elements`.
    ///
    /// More than seven elements nest the remainder into a rest tuple held by
    /// the eighth type argument, recursively.
    pub fn tuple(&mut self, elements: Vec<TupleElement>) -> SymbolId {
        let rest_index = VALUE_TUPLE_REST_POSITION - 1;
        let arguments: Vec<TypeRef> = if elements.len() < VALUE_TUPLE_REST_POSITION {
            elements.iter().map(|e| e.ty.clone()).collect()
        } else {
            let rest_elements = elements[rest_index..]
                .iter()
                .map(|e| TupleElement { ty: e.ty.clone(), name: None })
                .collect();
            let rest = self.tuple(rest_elements);
            elements[..rest_index]
                .iter()
                .map(|e| e.ty.clone())
                .chain(std::iter::once(TypeRef::new(rest)))
                .collect()
        };
        let arity = u8::try_from(arguments.len()).unwrap_or(VALUE_TUPLE_REST_POSITION as u8);
        let definition = self.special_or_define(SpecialType::ValueTuple(arity));
        let id = self.construct(definition, arguments);
        if let SymbolKind::NamedType(data) = &mut self[id].kind {
            data.tuple_elements = Some(elements);
        }
        id
    }

    /// The instance form of a static extension method, called on
    /// `receiver`. Links the two methods both ways.
    pub fn reduce_extension(&mut self, method: SymbolId, receiver: impl Into<TypeRef>) -> SymbolId {
        let mut symbol = self[method].clone();
        symbol.modifiers.remove(Modifiers::STATIC);
        if let SymbolKind::Method(data) = &mut symbol.kind {
            data.method_kind = MethodKind::ReducedExtension;
            data.parameters = data.parameters.iter().skip(1).copied().collect();
            data.reduced_from = Some(method);
            data.reduced_form = None;
            data.receiver_type = Some(receiver.into());
        }
        let reduced = self.push(symbol);
        if let SymbolKind::Method(data) = &mut self[method].kind {
            data.reduced_form.get_or_insert(reduced);
        }
        reduced
    }

    /// Register `id` as the definition of `special`.
    pub fn register_special(&mut self, special: SpecialType, id: SymbolId) {
        self.special_types.insert(special, id);
    }

    fn push(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId::from_index(self.symbols.len());
        self.symbols.push(symbol);
        self.members.push(Vec::new());
        id
    }

    fn special_or_define(&mut self, special: SpecialType) -> SymbolId {
        if let Some(id) = self.special(special) {
            return id;
        }
        let system = self.add_namespace(self.global_namespace, "System");
        let (name, type_kind, arity) = special.definition();
        let mut data = NamedTypeData::new(type_kind);
        data.special = Some(special);
        if type_kind == TypeKind::Class && special != SpecialType::Object {
            data.base_type = self.special(SpecialType::Object);
        }
        let symbol = Symbol::new(name, SymbolKind::NamedType(data)).with_accessibility(Accessibility::Public);
        let id = self.add(system, symbol);
        for ordinal in 0..arity {
            let name = match special {
                SpecialType::Nullable => "T".to_string(),
                _ if ordinal + 1 == VALUE_TUPLE_REST_POSITION => "TRest".to_string(),
                _ => format!("T{}", ordinal + 1),
            };
            self.add_type_parameter(id, &name);
        }
        self.register_special(special, id);
        id
    }

    fn flatten_tuple_arguments(&self, arguments: &[TypeRef]) -> Vec<TupleElement> {
        let mut elements = Vec::with_capacity(arguments.len());
        for (index, argument) in arguments.iter().enumerate() {
            let nested = (index + 1 == VALUE_TUPLE_REST_POSITION)
                .then(|| self[argument.ty].as_named_type().and_then(|t| t.tuple_elements.as_ref()))
                .flatten();
            match nested {
                Some(rest) => elements.extend(rest.iter().map(|e| TupleElement { ty: e.ty.clone(), name: None })),
                None => elements.push(TupleElement { ty: argument.clone(), name: None }),
            }
        }
        elements
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn special(&self, special: SpecialType) -> Option<SymbolId> {
        self.special_types.get(&special).copied()
    }

    pub fn members(&self, id: SymbolId) -> &[SymbolId] {
        self.members.get(id.index()).map_or(&[], Vec::as_slice)
    }

    pub fn members_named<'a>(&'a self, id: SymbolId, name: &'a str) -> impl Iterator<Item = SymbolId> + 'a {
        self.members(id).iter().copied().filter(move |&member| self[member].name == name)
    }

    pub fn is_global_namespace(&self, id: SymbolId) -> bool {
        id == self.global_namespace
    }

    /// The directly containing named type, if any.
    pub fn containing_type(&self, id: SymbolId) -> Option<SymbolId> {
        self[id].containing.filter(|&c| self[c].as_named_type().is_some())
    }

    /// The nearest named type up the containment chain, e.g. the type
    /// declaring the method a local function lives in.
    pub fn enclosing_type(&self, id: SymbolId) -> Option<SymbolId> {
        let mut current = self[id].containing;
        for _ in 0..MAX_CHAIN_DEPTH {
            let candidate = current?;
            if self[candidate].as_named_type().is_some() {
                return Some(candidate);
            }
            current = self[candidate].containing;
        }
        None
    }

    /// The nearest containing namespace.
    pub fn containing_namespace(&self, id: SymbolId) -> Option<SymbolId> {
        let mut current = self[id].containing;
        for _ in 0..MAX_CHAIN_DEPTH {
            let candidate = current?;
            if matches!(self[candidate].kind, SymbolKind::Namespace) {
                return Some(candidate);
            }
            current = self[candidate].containing;
        }
        None
    }

    /// Definition of a constructed type or method; the symbol itself
    /// otherwise.
    pub fn original_definition(&self, id: SymbolId) -> SymbolId {
        self[id].as_named_type().and_then(|t| t.original_definition).unwrap_or(id)
    }

    /// Generic arity of a named type or method; zero for everything else.
    pub fn arity(&self, id: SymbolId) -> usize {
        match &self[id].kind {
            SymbolKind::NamedType(data) => data.arity(),
            SymbolKind::Method(data) => data.arity(),
            _ => 0,
        }
    }

    /// Type arguments of a named type or method. Definitions report their
    /// own type parameters.
    pub fn type_arguments(&self, id: SymbolId) -> Vec<TypeRef> {
        let (parameters, arguments) = match &self[id].kind {
            SymbolKind::NamedType(data) => (&data.type_parameters, &data.type_arguments),
            SymbolKind::Method(data) => (&data.type_parameters, &data.type_arguments),
            _ => return Vec::new(),
        };
        if arguments.is_empty() {
            parameters.iter().copied().map(TypeRef::new).collect()
        } else {
            arguments.clone()
        }
    }

    /// Whether `id` is `Nullable<T>` constructed over some `T`.
    pub fn is_nullable_type(&self, id: SymbolId) -> bool {
        let Some(data) = self[id].as_named_type() else {
            return false;
        };
        data.original_definition
            .and_then(|def| self[def].as_named_type())
            .is_some_and(|def| def.special == Some(SpecialType::Nullable))
    }

    pub fn is_value_type(&self, id: SymbolId) -> bool {
        match &self[id].kind {
            SymbolKind::NamedType(data) => data.type_kind.is_value_type(),
            SymbolKind::TypeParameter(data) => data.constraints.value_type || data.constraints.unmanaged,
            _ => false,
        }
    }

    pub fn is_reference_type(&self, id: SymbolId) -> bool {
        match &self[id].kind {
            SymbolKind::NamedType(data) => {
                matches!(data.type_kind, TypeKind::Class | TypeKind::Interface | TypeKind::Delegate)
            }
            SymbolKind::ArrayType(_) | SymbolKind::DynamicType => true,
            SymbolKind::TypeParameter(data) => {
                data.constraints.reference_type
                    || data.constraints.types.iter().any(|c| {
                        self[c.ty]
                            .as_named_type()
                            .is_some_and(|t| t.type_kind == TypeKind::Class && t.special != Some(SpecialType::Object))
                    })
            }
            _ => false,
        }
    }

    /// Whether the type has `System.Attribute` in its base-type chain.
    pub fn derives_from_attribute(&self, id: SymbolId) -> bool {
        let mut current = Some(self.original_definition(id));
        for _ in 0..MAX_CHAIN_DEPTH {
            let Some(data) = current.and_then(|c| self[c].as_named_type()) else {
                return false;
            };
            if data.special == Some(SpecialType::Attribute) {
                return true;
            }
            current = data.base_type;
        }
        false
    }

    /// Constant-valued fields declared by an enum type.
    pub fn enum_fields(&self, enum_type: SymbolId) -> impl Iterator<Item = (SymbolId, &Name, &ConstantValue)> + '_ {
        let definition = self.original_definition(enum_type);
        self.members(definition).iter().filter_map(move |&member| {
            let symbol = &self[member];
            let constant = symbol.as_field()?.constant.as_ref()?;
            Some((member, &symbol.name, constant))
        })
    }
}

impl Index<SymbolId> for SymbolGraph {
    type Output = Symbol;

    fn index(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }
}

impl IndexMut<SymbolId> for SymbolGraph {
    fn index_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }
}
