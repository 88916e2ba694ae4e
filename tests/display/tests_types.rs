//! Type rendering: qualification, generics, nullable, tuples, arrays,
//! pointers, delegates and the synthesized type names.

use rstest::rstest;
use symdisplay::display::{
    CompilerInternalOptions, DelegateStyle, DisplayFormat, DisplayPartKind, GenericsOptions, KindOptions,
    MiscellaneousOptions, TypeQualificationStyle,
};
use symdisplay::model::{
    CallingConvention, CustomModifier, FunctionPointerData, MethodData, MethodKind, NamedTypeData, ParameterData,
    PropertyData, RefKind, SpecialType, Symbol, SymbolGraph, SymbolId, SymbolKind, TupleElement, TypeKind,
    TypeParameterConstraints, TypeRef, Variance,
};

use crate::helpers::fixtures::*;
use crate::helpers::part_assertions::*;

// =============================================================================
// HELPERS
// =============================================================================

/// `N.Outer.Inner`, returning `(graph, inner)`.
fn nested() -> (SymbolGraph, SymbolId) {
    let mut graph = core();
    let n = graph.namespace_path("N");
    let outer = graph.add_type(n, "Outer", TypeKind::Class);
    let inner = graph.add_type(outer, "Inner", TypeKind::Class);
    (graph, inner)
}

fn element(ty: SymbolId, name: Option<&str>) -> TupleElement {
    TupleElement { ty: TypeRef::new(ty), name: name.map(Into::into) }
}

fn set_constraints(graph: &mut SymbolGraph, type_parameter: SymbolId, constraints: TypeParameterConstraints) {
    if let SymbolKind::TypeParameter(data) = &mut graph[type_parameter].kind {
        data.constraints = constraints;
    }
}

// =============================================================================
// QUALIFICATION
// =============================================================================

#[rstest]
#[case(DisplayFormat::ERROR_MESSAGE, "N.Outer.Inner")]
#[case(DisplayFormat::SHORT_ERROR_MESSAGE, "Inner")]
#[case(DisplayFormat::FULLY_QUALIFIED, "global::N.Outer.Inner")]
#[case(
    DisplayFormat::ERROR_MESSAGE.with_type_qualification_style(TypeQualificationStyle::NameAndContainingTypes),
    "Outer.Inner"
)]
fn test_nested_type_qualification(#[case] format: DisplayFormat, #[case] expected: &str) {
    let (graph, inner) = nested();
    assert_renders(&graph, inner, format, expected);
}

#[test]
fn test_type_in_global_namespace() {
    let mut graph = core();
    let c = graph.add_type(graph.global_namespace(), "C", TypeKind::Class);
    assert_renders(&graph, c, DisplayFormat::ERROR_MESSAGE, "C");
    assert_renders(&graph, c, DisplayFormat::FULLY_QUALIFIED, "global::C");
}

#[test]
fn test_global_namespace_itself() {
    let graph = core();
    let global = graph.global_namespace();
    assert_renders(&graph, global, DisplayFormat::ERROR_MESSAGE, "<global namespace>");
    assert_renders(&graph, global, DisplayFormat::FULLY_QUALIFIED, "<global namespace>");
    assert_renders(&graph, global, DisplayFormat::MINIMALLY_QUALIFIED, "");
}

#[test]
fn test_namespace_keyword() {
    let mut graph = core();
    let n2 = graph.namespace_path("N1.N2");
    let format = DisplayFormat::ERROR_MESSAGE.add_kind_options(KindOptions::INCLUDE_NAMESPACE_KEYWORD);
    assert_renders(&graph, n2, format, "namespace N1.N2");
    assert_renders(&graph, n2, DisplayFormat::ERROR_MESSAGE, "N1.N2");
}

#[rstest]
#[case(TypeKind::Class, "class N.T")]
#[case(TypeKind::Struct, "struct N.T")]
#[case(TypeKind::Interface, "interface N.T")]
#[case(TypeKind::Enum, "enum N.T")]
#[case(TypeKind::Delegate, "delegate N.T")]
fn test_type_keyword_only_on_root(#[case] kind: TypeKind, #[case] expected: &str) {
    let mut graph = core();
    let n = graph.namespace_path("N");
    let t = graph.add_type(n, "T", kind);
    let nested = graph.add_type(t, "Nested", TypeKind::Class);
    let format = DisplayFormat::ERROR_MESSAGE.add_kind_options(KindOptions::INCLUDE_TYPE_KEYWORD);

    assert_renders(&graph, t, format, expected);
    assert_renders(&graph, nested, format, "class N.T.Nested");
}

#[test]
fn test_error_type_never_shows_global_qualifier() {
    let mut graph = core();
    let missing = graph.add_type(graph.global_namespace(), "Missing", TypeKind::Error);
    let named = DisplayFormat::FULLY_QUALIFIED.add_miscellaneous_options(MiscellaneousOptions::USE_ERROR_TYPE_SYMBOL_NAME);
    assert_renders(&graph, missing, named, "Missing");

    let parts = parts(&graph, missing, DisplayFormat::ERROR_MESSAGE);
    assert_eq!(kind_of(&parts, "Missing"), DisplayPartKind::ErrorTypeName);
}

#[test]
fn test_error_type_name_needs_option() {
    let mut graph = core();
    let n = graph.namespace_path("N");
    let missing = graph.add_type(n, "Missing", TypeKind::Error);

    assert_renders(&graph, missing, DisplayFormat::ERROR_MESSAGE, "N.Missing");
    let hidden =
        DisplayFormat::ERROR_MESSAGE.remove_miscellaneous_options(MiscellaneousOptions::USE_ERROR_TYPE_SYMBOL_NAME);
    assert_renders(&graph, missing, hidden, "N.?");
    assert_renders(&graph, missing, DisplayFormat::FULLY_QUALIFIED, "global::N.?");

    let parts = parts(&graph, missing, hidden);
    assert_eq!(kind_of(&parts, "?"), DisplayPartKind::ErrorTypeName);
}

// =============================================================================
// SPECIAL TYPES AND KEYWORD ESCAPING
// =============================================================================

#[rstest]
#[case(SpecialType::Int32, DisplayFormat::ERROR_MESSAGE, "int")]
#[case(SpecialType::Int32, DisplayFormat::EMPTY, "Int32")]
#[case(SpecialType::String, DisplayFormat::FULLY_QUALIFIED, "string")]
#[case(SpecialType::Object, DisplayFormat::MINIMALLY_QUALIFIED, "object")]
#[case(
    SpecialType::UInt64,
    DisplayFormat::ERROR_MESSAGE.remove_miscellaneous_options(MiscellaneousOptions::USE_SPECIAL_TYPES),
    "System.UInt64"
)]
#[case(SpecialType::IntPtr, DisplayFormat::ERROR_MESSAGE, "System.IntPtr")]
fn test_special_types(#[case] special_type: SpecialType, #[case] format: DisplayFormat, #[case] expected: &str) {
    let graph = core();
    assert_renders(&graph, special(&graph, special_type), format, expected);
}

#[test]
fn test_special_type_is_keyword_part() {
    let graph = core();
    let parts = parts(&graph, int(&graph), DisplayFormat::ERROR_MESSAGE);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].kind, DisplayPartKind::Keyword);
    assert_eq!(parts[0].symbol, Some(int(&graph)));
}

#[test]
fn test_reserved_names_escaped() {
    let mut graph = core();
    let record = graph.namespace_path("record");
    let class = graph.add_type(record, "class", TypeKind::Class);

    assert_renders(&graph, class, DisplayFormat::ERROR_MESSAGE, "@record.@class");
    let plain = DisplayFormat::EMPTY
        .with_type_qualification_style(TypeQualificationStyle::NameAndContainingTypesAndNamespaces);
    assert_renders(&graph, class, plain, "record.class");

    let parts = parts(&graph, class, DisplayFormat::ERROR_MESSAGE);
    assert_eq!(kind_of(&parts, "@class"), DisplayPartKind::ClassName);
    assert_eq!(kind_of(&parts, "@record"), DisplayPartKind::NamespaceName);
}

#[test]
fn test_dynamic() {
    let mut graph = core();
    let dynamic = graph.dynamic_type();
    assert_renders(&graph, dynamic, DisplayFormat::ERROR_MESSAGE, "dynamic");
}

// =============================================================================
// GENERICS
// =============================================================================

#[test]
fn test_constructed_and_definition_generics() {
    let mut graph = core();
    let list = generic_list(&mut graph);
    let list_of_int = graph.construct(list, vec![TypeRef::new(int(&graph))]);

    assert_renders(&graph, list_of_int, DisplayFormat::ERROR_MESSAGE, "System.Collections.Generic.List<int>");
    assert_renders(&graph, list, DisplayFormat::ERROR_MESSAGE, "System.Collections.Generic.List<T>");
    assert_renders(&graph, list_of_int, DisplayFormat::SHORT_ERROR_MESSAGE, "List<int>");
    assert_renders(&graph, list_of_int, DisplayFormat::EMPTY, "List");
}

#[test]
fn test_unbound_generic() {
    let mut graph = core();
    let dictionary = graph.add_type(graph.global_namespace(), "Dictionary", TypeKind::Class);
    graph.add_type_parameter(dictionary, "TKey");
    graph.add_type_parameter(dictionary, "TValue");
    let unbound = graph.construct_unbound(dictionary);

    assert_renders(&graph, unbound, DisplayFormat::ERROR_MESSAGE, "Dictionary<,>");
}

#[test]
fn test_arity_suffix() {
    let mut graph = core();
    let list = generic_list(&mut graph);
    let list_of_int = graph.construct(list, vec![TypeRef::new(int(&graph))]);
    let format =
        DisplayFormat::ERROR_MESSAGE.add_compiler_internal_options(CompilerInternalOptions::USE_ARITY_FOR_GENERIC_TYPES);

    assert_renders(&graph, list_of_int, format, "System.Collections.Generic.List`1");
    assert_renders(&graph, int(&graph), format, "int");
}

#[test]
fn test_variance() {
    let mut graph = core();
    let enumerable = graph.add_type(graph.global_namespace(), "IEnumerable", TypeKind::Interface);
    let t = graph.add_type_parameter(enumerable, "T");
    if let SymbolKind::TypeParameter(data) = &mut graph[t].kind {
        data.variance = Variance::Out;
    }

    assert_renders(&graph, enumerable, DisplayFormat::ERROR_MESSAGE, "IEnumerable<out T>");
    assert_renders(&graph, enumerable, DisplayFormat::FULLY_QUALIFIED, "global::IEnumerable<T>");
}

#[test]
fn test_constraints_only_on_root_definition() {
    let mut graph = core();
    let global = graph.global_namespace();
    let comparable = graph.add_type(global, "IComparable", TypeKind::Interface);
    let c = graph.add_type(global, "C", TypeKind::Class);
    let t = graph.add_type_parameter(c, "T");
    set_constraints(
        &mut graph,
        t,
        TypeParameterConstraints {
            reference_type: true,
            constructor: true,
            types: vec![TypeRef::new(comparable)],
            ..Default::default()
        },
    );
    let c_of_int = graph.construct(c, vec![TypeRef::new(int(&graph))]);
    let format = DisplayFormat::ERROR_MESSAGE.add_generics_options(GenericsOptions::INCLUDE_TYPE_CONSTRAINTS);

    assert_renders(&graph, c, format, "C<T> where T : class, IComparable, new()");
    assert_renders(&graph, c, DisplayFormat::ERROR_MESSAGE, "C<T>");
    assert_renders(&graph, c_of_int, format, "C<int>");
}

#[test]
fn test_unmanaged_constraint_wins_over_struct() {
    let mut graph = core();
    let s = graph.add_type(graph.global_namespace(), "S", TypeKind::Struct);
    let t = graph.add_type_parameter(s, "T");
    set_constraints(
        &mut graph,
        t,
        TypeParameterConstraints { value_type: true, unmanaged: true, ..Default::default() },
    );
    let format = DisplayFormat::ERROR_MESSAGE.add_generics_options(GenericsOptions::INCLUDE_TYPE_CONSTRAINTS);

    assert_renders(&graph, s, format, "S<T> where T : unmanaged");
}

// =============================================================================
// NULLABLE
// =============================================================================

#[test]
fn test_nullable_value_type() {
    let mut graph = core();
    let nullable_int = graph.nullable_of(int(&graph));

    assert_renders(&graph, nullable_int, DisplayFormat::ERROR_MESSAGE, "int?");
    let expanded = DisplayFormat::ERROR_MESSAGE.add_miscellaneous_options(MiscellaneousOptions::EXPAND_NULLABLE);
    assert_renders(&graph, nullable_int, expanded, "System.Nullable<int>");
}

#[test]
fn test_nullable_pointer_is_not_shortened() {
    let mut graph = core();
    let pointer = graph.pointer_to(int(&graph));
    let nullable = graph.nullable_of(pointer);
    assert_renders(&graph, nullable, DisplayFormat::ERROR_MESSAGE, "System.Nullable<int*>");
}

// =============================================================================
// TUPLES
// =============================================================================

#[test]
fn test_named_tuple_uses_literal_syntax() {
    let mut graph = core();
    let (int, string) = (int(&graph), string(&graph));
    let tuple = graph.tuple(vec![element(int, Some("a")), element(string, Some("b"))]);
    assert_renders(&graph, tuple, DisplayFormat::ERROR_MESSAGE, "(int a, string b)");
}

#[test]
fn test_two_int_tuple_renders_names_verbatim() {
    let mut graph = core();
    let int = int(&graph);
    let tuple = graph.tuple(vec![element(int, Some("a")), element(int, Some("b"))]);
    assert_renders(&graph, tuple, DisplayFormat::MINIMALLY_QUALIFIED, "(int a, int b)");
}

#[test]
fn test_unnamed_and_partially_named_tuples() {
    let mut graph = core();
    let (int, string) = (int(&graph), string(&graph));
    let unnamed = graph.tuple(vec![element(int, None), element(string, None)]);
    let partial = graph.tuple(vec![element(int, Some("a")), element(string, None)]);

    assert_renders(&graph, unnamed, DisplayFormat::ERROR_MESSAGE, "(int, string)");
    assert_renders(&graph, partial, DisplayFormat::ERROR_MESSAGE, "(int a, string)");
}

#[test]
fn test_long_tuple_walks_rest_chain() {
    let mut graph = core();
    let int = int(&graph);
    let tuple = graph.tuple((0..9).map(|_| element(int, None)).collect());
    assert_renders(&graph, tuple, DisplayFormat::ERROR_MESSAGE, "(int, int, int, int, int, int, int, int, int)");
}

#[test]
fn test_tuple_falls_back_to_generic_form() {
    let mut graph = core();
    let int = int(&graph);
    let is_const = graph.add_type(graph.global_namespace(), "IsConst", TypeKind::Class);

    let single = graph.tuple(vec![element(int, None)]);
    assert_renders(&graph, single, DisplayFormat::ERROR_MESSAGE, "ValueTuple<int>");

    let modified = TypeRef::new(int).with_modifier(CustomModifier::optional(is_const));
    let with_modifier =
        graph.tuple(vec![TupleElement { ty: modified, name: None }, element(int, None)]);
    assert_renders(&graph, with_modifier, DisplayFormat::ERROR_MESSAGE, "ValueTuple<int, int>");
}

#[test]
fn test_expand_value_tuple() {
    let mut graph = core();
    let (int, string) = (int(&graph), string(&graph));
    let tuple = graph.tuple(vec![element(int, Some("a")), element(string, None)]);
    let format = DisplayFormat::ERROR_MESSAGE.add_miscellaneous_options(MiscellaneousOptions::EXPAND_VALUE_TUPLE);
    assert_renders(&graph, tuple, format, "System.ValueTuple<int, string>");
}

// =============================================================================
// ARRAYS AND POINTERS
// =============================================================================

#[test]
fn test_array_ranks() {
    let mut graph = core();
    let int = int(&graph);
    let single = graph.array_of(int, 1);
    let two = graph.array_of(int, 2);
    let non_zero_based = graph.multi_dimensional_array_of(int, 1);

    assert_renders(&graph, single, DisplayFormat::ERROR_MESSAGE, "int[]");
    assert_renders(&graph, two, DisplayFormat::ERROR_MESSAGE, "int[*,*]");
    assert_renders(&graph, two, DisplayFormat::FULLY_QUALIFIED, "int[,]");
    assert_renders(&graph, non_zero_based, DisplayFormat::FULLY_QUALIFIED, "int[*]");
}

#[test]
fn test_jagged_array_order() {
    let mut graph = core();
    let inner = graph.array_of(int(&graph), 2);
    let outer = graph.array_of(inner, 1);

    assert_renders(&graph, outer, DisplayFormat::FULLY_QUALIFIED, "int[][,]");
    assert_renders(&graph, outer, DisplayFormat::ERROR_MESSAGE, "int[][*,*]");
    let reversed = DisplayFormat::FULLY_QUALIFIED
        .add_compiler_internal_options(CompilerInternalOptions::REVERSE_ARRAY_RANK_SPECIFIERS);
    assert_renders(&graph, outer, reversed, "int[,][]");
}

#[test]
fn test_array_element_omits_type_keyword() {
    let mut graph = core();
    let n = graph.namespace_path("N");
    let c = graph.add_type(n, "C", TypeKind::Class);
    let array = graph.array_of(c, 1);
    let format = DisplayFormat::ERROR_MESSAGE.add_kind_options(KindOptions::INCLUDE_TYPE_KEYWORD);

    assert_renders(&graph, array, format, "N.C[]");
    let reversed = format.add_compiler_internal_options(CompilerInternalOptions::REVERSE_ARRAY_RANK_SPECIFIERS);
    assert_renders(&graph, array, reversed, "N.C[]");
}

#[test]
fn test_pointers() {
    let mut graph = core();
    let pointer = graph.pointer_to(int(&graph));
    let double_pointer = graph.pointer_to(pointer);
    assert_renders(&graph, pointer, DisplayFormat::ERROR_MESSAGE, "int*");
    assert_renders(&graph, double_pointer, DisplayFormat::ERROR_MESSAGE, "int**");
}

#[test]
fn test_function_pointer() {
    let mut graph = core();
    let global = graph.global_namespace();
    let (int, string) = (int(&graph), string(&graph));
    let signature = method(&mut graph, global, "", MethodData::new(MethodKind::FunctionPointerSignature), &[("", int)]);
    parameter(&mut graph, signature, "", ParameterData::new(string).with_ref_kind(RefKind::Ref));
    let pointer = graph.add(global, Symbol::new("", SymbolKind::FunctionPointerType(FunctionPointerData { signature })));

    assert_renders(&graph, pointer, DisplayFormat::ERROR_MESSAGE, "delegate*<int, ref string, void>");

    method_mut(&mut graph, signature).calling_convention = CallingConvention::Unmanaged(vec!["Cdecl".into()]);
    assert_renders(&graph, pointer, DisplayFormat::ERROR_MESSAGE, "delegate* unmanaged[Cdecl]<int, ref string, void>");
}

// =============================================================================
// DELEGATES
// =============================================================================

#[rstest]
#[case(DelegateStyle::NameOnly, "N.D")]
#[case(DelegateStyle::NameAndParameters, "N.D(string)")]
#[case(DelegateStyle::NameAndSignature, "int N.D(string)")]
fn test_delegate_styles(#[case] style: DelegateStyle, #[case] expected: &str) {
    let mut graph = core();
    let n = graph.namespace_path("N");
    let (int, string) = (int(&graph), string(&graph));
    let d = delegate(&mut graph, n, "D", Some(int), &[("s", string)]);

    assert_renders(&graph, d, DisplayFormat::ERROR_MESSAGE.with_delegate_style(style), expected);
}

#[test]
fn test_delegate_signature_not_shown_when_nested_in_qualification() {
    let mut graph = core();
    let global = graph.global_namespace();
    let d = delegate(&mut graph, global, "D", None, &[]);
    let nested = graph.add_type(d, "Nested", TypeKind::Class);
    let format = DisplayFormat::ERROR_MESSAGE.with_delegate_style(DelegateStyle::NameAndSignature);

    assert_renders(&graph, d, format, "void D()");
    assert_renders(&graph, nested, format, "D.Nested");
}

// =============================================================================
// SYNTHESIZED NAMES
// =============================================================================

#[test]
fn test_attribute_suffix_removal() {
    let mut graph = core();
    let global = graph.global_namespace();
    let attribute = special(&graph, SpecialType::Attribute);
    let obsolete = graph.add_type(global, "ObsoleteAttribute", TypeKind::Class);
    let keyword_like = graph.add_type(global, "classAttribute", TypeKind::Class);
    let plain = graph.add_type(global, "PlainAttribute", TypeKind::Class);
    named_type_mut(&mut graph, obsolete).base_type = Some(attribute);
    named_type_mut(&mut graph, keyword_like).base_type = Some(attribute);
    let format = DisplayFormat::ERROR_MESSAGE.add_miscellaneous_options(MiscellaneousOptions::REMOVE_ATTRIBUTE_SUFFIX);

    assert_renders(&graph, obsolete, format, "Obsolete");
    assert_renders(&graph, obsolete, DisplayFormat::ERROR_MESSAGE, "ObsoleteAttribute");
    assert_renders(&graph, keyword_like, format, "classAttribute");
    assert_renders(&graph, plain, format, "PlainAttribute");
    assert_renders(&graph, attribute, format, "System.Attribute");
}

#[test]
fn test_anonymous_types() {
    let mut graph = core();
    let global = graph.global_namespace();
    let (int, string) = (int(&graph), string(&graph));

    let mut data = NamedTypeData::new(TypeKind::Class);
    data.is_anonymous = true;
    let anonymous = graph.add(global, Symbol::new("<>f__AnonymousType0", SymbolKind::NamedType(data.clone())));
    graph.add(anonymous, Symbol::new("a", SymbolKind::Property(PropertyData::new(int))));
    graph.add(anonymous, Symbol::new("b", SymbolKind::Property(PropertyData::new(string))));
    let empty = graph.add(global, Symbol::new("<>f__AnonymousType1", SymbolKind::NamedType(data)));

    let mut delegate_data = NamedTypeData::new(TypeKind::Delegate);
    delegate_data.is_anonymous = true;
    let anonymous_delegate = graph.add(global, Symbol::new("<>f__AnonymousDelegate0", SymbolKind::NamedType(delegate_data)));

    assert_renders(&graph, anonymous, DisplayFormat::ERROR_MESSAGE, "<anonymous type: int a, string b>");
    assert_renders(&graph, empty, DisplayFormat::ERROR_MESSAGE, "<empty anonymous type>");
    assert_renders(&graph, anonymous_delegate, DisplayFormat::ERROR_MESSAGE, "<anonymous delegate>");

    let keyworded = DisplayFormat::ERROR_MESSAGE.add_kind_options(KindOptions::INCLUDE_TYPE_KEYWORD);
    let parts = parts(&graph, anonymous, keyworded);
    assert_eq!(parts[0].kind, DisplayPartKind::AnonymousTypeIndicator);
    assert_eq!(parts.len(), 3);
}

#[test]
fn test_missing_metadata_flag() {
    let mut graph = core();
    let global = graph.global_namespace();
    let c = graph.add_type(global, "C", TypeKind::Class);
    let g = graph.add_type(global, "G", TypeKind::Class);
    graph.add_type_parameter(g, "T");
    named_type_mut(&mut graph, c).is_missing_metadata = true;
    named_type_mut(&mut graph, g).is_missing_metadata = true;

    assert_renders(&graph, c, DisplayFormat::TEST, "C[missing]");
    assert_renders(&graph, g, DisplayFormat::TEST, "G<>[missing]");
    assert_renders(&graph, c, DisplayFormat::ERROR_MESSAGE, "C");
}

// =============================================================================
// PURITY AND PART CLASSIFICATION
// =============================================================================

#[test]
fn test_display_is_deterministic() {
    let mut graph = core();
    let list = generic_list(&mut graph);
    let list_of_int = graph.construct(list, vec![TypeRef::new(int(&graph))]);

    let first = parts(&graph, list_of_int, DisplayFormat::TEST);
    let second = parts(&graph, list_of_int, DisplayFormat::TEST);
    assert_eq!(first, second);
}

#[test]
fn test_part_kinds_of_generic_type() {
    let mut graph = core();
    let list = generic_list(&mut graph);
    let list_of_int = graph.construct(list, vec![TypeRef::new(int(&graph))]);
    let parts = parts(&graph, list_of_int, DisplayFormat::ERROR_MESSAGE);

    assert_eq!(kind_of(&parts, "System"), DisplayPartKind::NamespaceName);
    assert_eq!(kind_of(&parts, "List"), DisplayPartKind::ClassName);
    assert_eq!(kind_of(&parts, "int"), DisplayPartKind::Keyword);
    assert_eq!(kind_of(&parts, "<"), DisplayPartKind::Punctuation);
}
