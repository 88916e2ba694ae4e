//! The symbol node and its per-kind data.

use bitflags::bitflags;

use crate::base::Name;

use super::constant::ConstantValue;
use super::types::{
    ArrayTypeData, CallingConvention, FunctionPointerData, NamedTypeData, PointerTypeData, TypeParameterData,
    TypeRef,
};
use super::SymbolId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accessibility {
    #[default]
    NotApplicable,
    Private,
    ProtectedAndInternal,
    Protected,
    Internal,
    ProtectedOrInternal,
    Public,
}

bitflags! {
    /// Declaration modifiers shared by all member kinds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        const STATIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        const SEALED = 1 << 2;
        const VIRTUAL = 1 << 3;
        const OVERRIDE = 1 << 4;
        const EXTERN = 1 << 5;
        const READONLY = 1 << 6;
        const CONST = 1 << 7;
        const VOLATILE = 1 << 8;
    }
}

/// How a parameter, local or return value is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
    RefReadOnly,
}

// ============================================================================
// SYMBOL
// ============================================================================

/// One declared program entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: Name,
    /// Set by the graph when the symbol is added.
    pub containing: Option<SymbolId>,
    pub accessibility: Accessibility,
    pub modifiers: Modifiers,
    pub is_implicit: bool,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<Name>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            containing: None,
            accessibility: Accessibility::NotApplicable,
            modifiers: Modifiers::empty(),
            is_implicit: false,
            kind,
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn implicit(mut self) -> Self {
        self.is_implicit = true;
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    /// Short lowercase name of the symbol kind, for logs and errors.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            SymbolKind::Assembly(_) => "assembly",
            SymbolKind::Module => "module",
            SymbolKind::Namespace => "namespace",
            SymbolKind::NamedType(_) => "named type",
            SymbolKind::ArrayType(_) => "array type",
            SymbolKind::PointerType(_) => "pointer type",
            SymbolKind::FunctionPointerType(_) => "function pointer type",
            SymbolKind::TypeParameter(_) => "type parameter",
            SymbolKind::DynamicType => "dynamic type",
            SymbolKind::Field(_) => "field",
            SymbolKind::Property(_) => "property",
            SymbolKind::Event(_) => "event",
            SymbolKind::Method(_) => "method",
            SymbolKind::Parameter(_) => "parameter",
            SymbolKind::Local(_) => "local",
            SymbolKind::Discard(_) => "discard",
            SymbolKind::RangeVariable => "range variable",
            SymbolKind::Label => "label",
            SymbolKind::Alias(_) => "alias",
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::NamedType(_)
                | SymbolKind::ArrayType(_)
                | SymbolKind::PointerType(_)
                | SymbolKind::FunctionPointerType(_)
                | SymbolKind::TypeParameter(_)
                | SymbolKind::DynamicType
        )
    }

    pub fn as_named_type(&self) -> Option<&NamedTypeData> {
        match &self.kind {
            SymbolKind::NamedType(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodData> {
        match &self.kind {
            SymbolKind::Method(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldData> {
        match &self.kind {
            SymbolKind::Field(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyData> {
        match &self.kind {
            SymbolKind::Property(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_event(&self) -> Option<&EventData> {
        match &self.kind {
            SymbolKind::Event(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&ParameterData> {
        match &self.kind {
            SymbolKind::Parameter(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_type_parameter(&self) -> Option<&TypeParameterData> {
        match &self.kind {
            SymbolKind::TypeParameter(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayTypeData> {
        match &self.kind {
            SymbolKind::ArrayType(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_alias(&self) -> Option<&AliasData> {
        match &self.kind {
            SymbolKind::Alias(data) => Some(data),
            _ => None,
        }
    }
}

/// The closed set of declaration kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Assembly(AssemblyData),
    Module,
    Namespace,
    NamedType(NamedTypeData),
    ArrayType(ArrayTypeData),
    PointerType(PointerTypeData),
    FunctionPointerType(FunctionPointerData),
    TypeParameter(TypeParameterData),
    DynamicType,
    Field(FieldData),
    Property(PropertyData),
    Event(EventData),
    Method(MethodData),
    Parameter(ParameterData),
    Local(LocalData),
    Discard(DiscardData),
    RangeVariable,
    Label,
    Alias(AliasData),
}

// ============================================================================
// MEMBER DATA
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FieldData {
    pub ty: TypeRef,
    pub constant: Option<ConstantValue>,
}

impl FieldData {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self { ty: ty.into(), constant: None }
    }

    pub fn constant(ty: impl Into<TypeRef>, value: ConstantValue) -> Self {
        Self { ty: ty.into(), constant: Some(value) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyData {
    pub ty: TypeRef,
    pub ref_kind: RefKind,
    pub parameters: Vec<SymbolId>,
    pub is_indexer: bool,
    pub getter: Option<SymbolId>,
    pub setter: Option<SymbolId>,
    pub explicit_interface: Option<SymbolId>,
}

impl PropertyData {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            ref_kind: RefKind::None,
            parameters: Vec::new(),
            is_indexer: false,
            getter: None,
            setter: None,
            explicit_interface: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventData {
    pub ty: TypeRef,
    pub add: Option<SymbolId>,
    pub remove: Option<SymbolId>,
    pub explicit_interface: Option<SymbolId>,
}

impl EventData {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self { ty: ty.into(), add: None, remove: None, explicit_interface: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    StaticConstructor,
    Destructor,
    PropertyGet,
    PropertySet,
    EventAdd,
    EventRemove,
    EventRaise,
    ExplicitInterfaceImplementation,
    UserDefinedOperator,
    BuiltinOperator,
    Conversion,
    DelegateInvoke,
    ReducedExtension,
    LambdaMethod,
    LocalFunction,
    FunctionPointerSignature,
    DeclareMethod,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodData {
    pub method_kind: MethodKind,
    /// `None` means `void`.
    pub return_type: Option<TypeRef>,
    pub ref_kind: RefKind,
    pub parameters: Vec<SymbolId>,
    pub type_parameters: Vec<SymbolId>,
    /// Type arguments of a constructed generic method; empty otherwise.
    pub type_arguments: Vec<TypeRef>,
    pub is_extension: bool,
    pub is_vararg: bool,
    pub is_init_only: bool,
    pub is_synthesized_global: bool,
    /// Property or event an accessor belongs to.
    pub associated: Option<SymbolId>,
    pub explicit_interface: Option<SymbolId>,
    /// Static definition a reduced extension method came from.
    pub reduced_from: Option<SymbolId>,
    /// Instance form of a static extension method.
    pub reduced_form: Option<SymbolId>,
    /// Receiver of a reduced extension method.
    pub receiver_type: Option<TypeRef>,
    pub calling_convention: CallingConvention,
}

impl MethodData {
    pub fn new(method_kind: MethodKind) -> Self {
        Self { method_kind, ..Self::default() }
    }

    pub fn returning(mut self, ty: impl Into<TypeRef>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterData {
    pub ty: TypeRef,
    pub ref_kind: RefKind,
    pub ordinal: usize,
    pub is_params: bool,
    pub is_optional: bool,
    pub is_this: bool,
    /// Explicit default value; `Some(ConstantValue::Null)` for `= null`
    /// and `= default`.
    pub default_value: Option<ConstantValue>,
}

impl ParameterData {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            ref_kind: RefKind::None,
            ordinal: 0,
            is_params: false,
            is_optional: false,
            is_this: false,
            default_value: None,
        }
    }

    pub fn with_ref_kind(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    pub fn params(mut self) -> Self {
        self.is_params = true;
        self
    }

    pub fn optional(mut self, default_value: ConstantValue) -> Self {
        self.is_optional = true;
        self.default_value = Some(default_value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalData {
    pub ty: TypeRef,
    pub ref_kind: RefKind,
    pub is_const: bool,
    pub constant: Option<ConstantValue>,
}

impl LocalData {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self { ty: ty.into(), ref_kind: RefKind::None, is_const: false, constant: None }
    }

    pub fn constant(ty: impl Into<TypeRef>, value: ConstantValue) -> Self {
        Self { ty: ty.into(), ref_kind: RefKind::None, is_const: true, constant: Some(value) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscardData {
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasData {
    pub target: SymbolId,
}

/// Assembly identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssemblyData {
    pub version: [u16; 4],
    /// Empty means neutral.
    pub culture: Name,
    pub public_key_token: Option<[u8; 8]>,
}
