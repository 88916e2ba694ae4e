//! Symbol model
//!
//! The read-only view of program entities that the display engine renders.
//! Every symbol lives in a [`SymbolGraph`] arena and refers to other symbols
//! through [`SymbolId`].
//!
//! ## Module Structure
//!
//! ```text
//! model/
//! ├── ids.rs       # SymbolId
//! ├── types.rs     # TypeRef, named types, arrays, pointers, type parameters
//! ├── symbol.rs    # Symbol, SymbolKind and per-kind member data
//! ├── constant.rs  # ConstantValue, Decimal
//! └── graph.rs     # SymbolGraph arena, construction helpers, queries
//! ```

mod constant;
mod graph;
mod ids;
mod symbol;
mod types;

pub use constant::{ConstantValue, Decimal, ParseDecimalError};
pub use graph::SymbolGraph;
pub use ids::SymbolId;
pub use symbol::{
    Accessibility, AliasData, AssemblyData, DiscardData, EventData, FieldData, LocalData, MethodData, MethodKind,
    Modifiers, ParameterData, PropertyData, RefKind, Symbol, SymbolKind,
};
pub use types::{
    ArrayTypeData, CallingConvention, CustomModifier, FunctionPointerData, NamedTypeData, Nullability,
    PointerTypeData, SpecialType, TupleElement, TypeKind, TypeParameterConstraints, TypeParameterData, TypeRef,
    Variance, VALUE_TUPLE_REST_POSITION,
};
