//! Type-side data: type references, named types, arrays, pointers,
//! function pointers and type parameters.

use crate::base::Name;
use crate::syntax::SyntaxKind;

use super::SymbolId;

// ============================================================================
// TYPE REFERENCES
// ============================================================================

/// Nullable annotation carried by a type use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullability {
    /// No annotation context.
    #[default]
    Oblivious,
    /// Declared without `?` in an annotated context.
    NotAnnotated,
    /// Declared with `?`.
    Annotated,
}

/// A `modopt(T)` / `modreq(T)` attached to a type use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomModifier {
    pub modifier: SymbolId,
    pub is_optional: bool,
}

impl CustomModifier {
    pub fn optional(modifier: SymbolId) -> Self {
        Self { modifier, is_optional: true }
    }

    pub fn required(modifier: SymbolId) -> Self {
        Self { modifier, is_optional: false }
    }
}

/// A use of a type: the type symbol plus what the use site adds to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub ty: SymbolId,
    pub nullability: Nullability,
    pub custom_modifiers: Vec<CustomModifier>,
}

impl TypeRef {
    pub fn new(ty: SymbolId) -> Self {
        Self { ty, nullability: Nullability::Oblivious, custom_modifiers: Vec::new() }
    }

    pub fn annotated(ty: SymbolId) -> Self {
        Self { nullability: Nullability::Annotated, ..Self::new(ty) }
    }

    pub fn not_annotated(ty: SymbolId) -> Self {
        Self { nullability: Nullability::NotAnnotated, ..Self::new(ty) }
    }

    pub fn with_modifier(mut self, modifier: CustomModifier) -> Self {
        self.custom_modifiers.push(modifier);
        self
    }
}

impl From<SymbolId> for TypeRef {
    fn from(ty: SymbolId) -> Self {
        Self::new(ty)
    }
}

// ============================================================================
// NAMED TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Module,
    Error,
    Submission,
}

impl TypeKind {
    /// Declaration keyword for the kind, if the language has one.
    pub fn keyword(self) -> Option<SyntaxKind> {
        match self {
            TypeKind::Class => Some(SyntaxKind::CLASS_KW),
            TypeKind::Struct => Some(SyntaxKind::STRUCT_KW),
            TypeKind::Interface => Some(SyntaxKind::INTERFACE_KW),
            TypeKind::Enum => Some(SyntaxKind::ENUM_KW),
            TypeKind::Delegate => Some(SyntaxKind::DELEGATE_KW),
            TypeKind::Module | TypeKind::Error | TypeKind::Submission => None,
        }
    }

    pub fn is_value_type(self) -> bool {
        matches!(self, TypeKind::Struct | TypeKind::Enum)
    }
}

/// Types the core library provides and the engine treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialType {
    Object,
    Void,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    IntPtr,
    UIntPtr,
    /// `System.Nullable<T>`
    Nullable,
    /// `System.Attribute`
    Attribute,
    /// `System.ValueTuple` of the given arity (1 through 8)
    ValueTuple(u8),
}

impl SpecialType {
    /// The built-in keyword spelling, e.g. `int` for `System.Int32`.
    pub fn keyword(self) -> Option<SyntaxKind> {
        let kind = match self {
            SpecialType::Object => SyntaxKind::OBJECT_KW,
            SpecialType::Void => SyntaxKind::VOID_KW,
            SpecialType::Boolean => SyntaxKind::BOOL_KW,
            SpecialType::Char => SyntaxKind::CHAR_KW,
            SpecialType::SByte => SyntaxKind::SBYTE_KW,
            SpecialType::Byte => SyntaxKind::BYTE_KW,
            SpecialType::Int16 => SyntaxKind::SHORT_KW,
            SpecialType::UInt16 => SyntaxKind::USHORT_KW,
            SpecialType::Int32 => SyntaxKind::INT_KW,
            SpecialType::UInt32 => SyntaxKind::UINT_KW,
            SpecialType::Int64 => SyntaxKind::LONG_KW,
            SpecialType::UInt64 => SyntaxKind::ULONG_KW,
            SpecialType::Decimal => SyntaxKind::DECIMAL_KW,
            SpecialType::Single => SyntaxKind::FLOAT_KW,
            SpecialType::Double => SyntaxKind::DOUBLE_KW,
            SpecialType::String => SyntaxKind::STRING_KW,
            SpecialType::IntPtr
            | SpecialType::UIntPtr
            | SpecialType::Nullable
            | SpecialType::Attribute
            | SpecialType::ValueTuple(_) => return None,
        };
        Some(kind)
    }

    /// Metadata name, kind and arity used when the core library is built.
    pub(crate) fn definition(self) -> (&'static str, TypeKind, usize) {
        match self {
            SpecialType::Object => ("Object", TypeKind::Class, 0),
            SpecialType::Void => ("Void", TypeKind::Struct, 0),
            SpecialType::Boolean => ("Boolean", TypeKind::Struct, 0),
            SpecialType::Char => ("Char", TypeKind::Struct, 0),
            SpecialType::SByte => ("SByte", TypeKind::Struct, 0),
            SpecialType::Byte => ("Byte", TypeKind::Struct, 0),
            SpecialType::Int16 => ("Int16", TypeKind::Struct, 0),
            SpecialType::UInt16 => ("UInt16", TypeKind::Struct, 0),
            SpecialType::Int32 => ("Int32", TypeKind::Struct, 0),
            SpecialType::UInt32 => ("UInt32", TypeKind::Struct, 0),
            SpecialType::Int64 => ("Int64", TypeKind::Struct, 0),
            SpecialType::UInt64 => ("UInt64", TypeKind::Struct, 0),
            SpecialType::Decimal => ("Decimal", TypeKind::Struct, 0),
            SpecialType::Single => ("Single", TypeKind::Struct, 0),
            SpecialType::Double => ("Double", TypeKind::Struct, 0),
            SpecialType::String => ("String", TypeKind::Class, 0),
            SpecialType::IntPtr => ("IntPtr", TypeKind::Struct, 0),
            SpecialType::UIntPtr => ("UIntPtr", TypeKind::Struct, 0),
            SpecialType::Nullable => ("Nullable", TypeKind::Struct, 1),
            SpecialType::Attribute => ("Attribute", TypeKind::Class, 0),
            SpecialType::ValueTuple(arity) => ("ValueTuple", TypeKind::Struct, usize::from(arity)),
        }
    }

    /// Every special type with a fixed definition, in registration order.
    pub(crate) const CORE: &'static [SpecialType] = &[
        SpecialType::Object,
        SpecialType::Void,
        SpecialType::Boolean,
        SpecialType::Char,
        SpecialType::SByte,
        SpecialType::Byte,
        SpecialType::Int16,
        SpecialType::UInt16,
        SpecialType::Int32,
        SpecialType::UInt32,
        SpecialType::Int64,
        SpecialType::UInt64,
        SpecialType::Decimal,
        SpecialType::Single,
        SpecialType::Double,
        SpecialType::String,
        SpecialType::IntPtr,
        SpecialType::UIntPtr,
        SpecialType::Nullable,
        SpecialType::Attribute,
    ];
}

/// Number of elements a single `ValueTuple` can hold before the last type
/// argument becomes the nested rest tuple.
pub const VALUE_TUPLE_REST_POSITION: usize = 8;

/// One element of a tuple type, flattened across rest nesting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleElement {
    pub ty: TypeRef,
    /// Explicitly written name; `None` for the default `ItemN` element.
    pub name: Option<Name>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedTypeData {
    pub type_kind: TypeKind,
    pub special: Option<SpecialType>,
    /// Type parameters of the definition (shared by constructed types).
    pub type_parameters: Vec<SymbolId>,
    /// Type arguments; empty for definitions.
    pub type_arguments: Vec<TypeRef>,
    /// Definition this type was constructed from.
    pub original_definition: Option<SymbolId>,
    pub is_unbound: bool,
    pub is_anonymous: bool,
    pub is_script_class: bool,
    pub is_missing_metadata: bool,
    /// Flattened elements when the type is a tuple.
    pub tuple_elements: Option<Vec<TupleElement>>,
    pub delegate_invoke: Option<SymbolId>,
    pub enum_underlying: Option<SpecialType>,
    pub is_flags: bool,
    pub base_type: Option<SymbolId>,
}

impl NamedTypeData {
    pub fn new(type_kind: TypeKind) -> Self {
        Self { type_kind, ..Self::default() }
    }

    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }

    pub fn is_definition(&self) -> bool {
        self.original_definition.is_none()
    }

    pub fn is_tuple(&self) -> bool {
        self.tuple_elements.is_some()
    }
}

// ============================================================================
// ARRAYS, POINTERS, FUNCTION POINTERS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTypeData {
    pub element: TypeRef,
    pub rank: u32,
    /// Single-dimensional, zero-based (`T[]`); rank-1 arrays without this
    /// flag print as `T[*]`.
    pub is_sz: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerTypeData {
    pub pointed_at: TypeRef,
}

/// Calling convention of a function pointer signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CallingConvention {
    #[default]
    Managed,
    /// `unmanaged` with an optional list of convention names, e.g. `Cdecl`.
    Unmanaged(Vec<Name>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPointerData {
    /// A method symbol of kind `FunctionPointerSignature`.
    pub signature: SymbolId,
}

// ============================================================================
// TYPE PARAMETERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variance {
    #[default]
    None,
    In,
    Out,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeParameterConstraints {
    pub reference_type: bool,
    pub value_type: bool,
    pub unmanaged: bool,
    pub not_null: bool,
    pub constructor: bool,
    pub types: Vec<TypeRef>,
}

impl TypeParameterConstraints {
    pub fn is_empty(&self) -> bool {
        !self.reference_type
            && !self.value_type
            && !self.unmanaged
            && !self.not_null
            && !self.constructor
            && self.types.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeParameterData {
    pub ordinal: usize,
    pub variance: Variance,
    pub constraints: TypeParameterConstraints,
}
