//! Constant values as they appear in parameter defaults: literals,
//! `null`/`default`, enum members and flag combinations.

use rstest::rstest;
use symdisplay::display::{DisplayFormat, DisplayPartKind, MiscellaneousOptions};
use symdisplay::model::{
    ConstantValue, Decimal, MethodData, MethodKind, ParameterData, SpecialType, SymbolGraph, SymbolId, TypeKind,
};

use crate::helpers::fixtures::*;
use crate::helpers::part_assertions::*;

// =============================================================================
// HELPERS
// =============================================================================

/// An optional parameter `name` of type `ty` defaulting to `value`, on a
/// method `C.M`.
fn optional_parameter(graph: &mut SymbolGraph, name: &str, ty: SymbolId, value: ConstantValue) -> SymbolId {
    let global = graph.global_namespace();
    let c = graph.add_type(global, "C", TypeKind::Class);
    let m = method(graph, c, "M", MethodData::new(MethodKind::Ordinary), &[]);
    parameter(graph, m, name, ParameterData::new(ty).optional(value))
}

fn render_default(graph: &mut SymbolGraph, ty: SymbolId, value: ConstantValue) -> String {
    let p = optional_parameter(graph, "p", ty, value);
    render(graph, p, DisplayFormat::MINIMALLY_QUALIFIED)
}

/// `[Flags] enum F { None = 0, A = 1, B = 2, AB = 3, C = 4 }`
fn flags_enum(graph: &mut SymbolGraph) -> SymbolId {
    let global = graph.global_namespace();
    enumeration(graph, global, "F", true, &[("None", 0), ("A", 1), ("B", 2), ("AB", 3), ("C", 4)])
}

// =============================================================================
// ENUMS
// =============================================================================

#[test]
fn test_enum_member_by_value() {
    let mut graph = core();
    let global = graph.global_namespace();
    let color = enumeration(&mut graph, global, "Color", false, &[("Red", 0), ("Green", 1), ("Blue", 2)]);
    let c = optional_parameter(&mut graph, "c", color, ConstantValue::I32(1));

    assert_renders(&graph, c, DisplayFormat::MINIMALLY_QUALIFIED, "Color c = Color.Green");
    let parts = parts(&graph, c, DisplayFormat::MINIMALLY_QUALIFIED);
    assert_eq!(kind_of(&parts, "Green"), DisplayPartKind::EnumMemberName);
}

#[test]
fn test_enum_value_without_member_is_cast() {
    let mut graph = core();
    let global = graph.global_namespace();
    let color = enumeration(&mut graph, global, "Color", false, &[("Red", 0), ("Green", 1)]);

    assert_eq!(render_default(&mut graph, color, ConstantValue::I32(5)), "Color p = (Color)5");
}

#[test]
fn test_enum_alias_picks_first_name() {
    let mut graph = core();
    let global = graph.global_namespace();
    let e = enumeration(&mut graph, global, "E", false, &[("Zulu", 1), ("Alpha", 1), ("Mike", 1)]);

    assert_eq!(render_default(&mut graph, e, ConstantValue::I32(1)), "E p = E.Alpha");
}

#[test]
fn test_negative_enum_member() {
    let mut graph = core();
    let global = graph.global_namespace();
    let e = enumeration(&mut graph, global, "E", false, &[("Negative", -1), ("Zero", 0)]);

    assert_eq!(render_default(&mut graph, e, ConstantValue::I32(-1)), "E p = E.Negative");
}

#[rstest]
#[case(5, "F p = F.A | F.C")]
#[case(3, "F p = F.AB")]
#[case(7, "F p = F.AB | F.C")]
#[case(0, "F p = F.None")]
#[case(8, "F p = (F)8")]
#[case(9, "F p = (F)9")]
fn test_flags_decomposition(#[case] value: i32, #[case] expected: &str) {
    let mut graph = core();
    let flags = flags_enum(&mut graph);
    assert_eq!(render_default(&mut graph, flags, ConstantValue::I32(value)), expected);
}

#[rstest]
#[case(&[("None", 0), ("A", 1), ("B", 2), ("All", -1)], -1, "F p = F.All")]
#[case(&[("None", 0), ("A", 1), ("B", 2), ("All", -1)], 3, "F p = F.A | F.B")]
#[case(&[("A", 1), ("B", 3), ("C", 6)], 7, "F p = F.B | F.C")]
#[case(&[("A", 1), ("B", 3), ("C", 6)], 6, "F p = F.C")]
#[case(&[("A", 1), ("B", 3), ("C", 6)], 5, "F p = (F)5")]
fn test_flags_with_negative_and_overlapping_members(
    #[case] members: &[(&str, i32)],
    #[case] value: i32,
    #[case] expected: &str,
) {
    let mut graph = core();
    let global = graph.global_namespace();
    let flags = enumeration(&mut graph, global, "F", true, members);
    assert_eq!(render_default(&mut graph, flags, ConstantValue::I32(value)), expected);
}

#[test]
fn test_flags_zero_without_zero_member() {
    let mut graph = core();
    let global = graph.global_namespace();
    let g = enumeration(&mut graph, global, "G", true, &[("A", 1), ("B", 2)]);

    assert_eq!(render_default(&mut graph, g, ConstantValue::I32(0)), "G p = (G)0");
}

#[test]
fn test_flags_parts_are_separated_by_pipes() {
    let mut graph = core();
    let flags = flags_enum(&mut graph);
    let p = optional_parameter(&mut graph, "p", flags, ConstantValue::I32(5));
    let parts = parts(&graph, p, DisplayFormat::MINIMALLY_QUALIFIED);

    assert_eq!(kind_of(&parts, "|"), DisplayPartKind::Punctuation);
    assert_eq!(kind_of(&parts, "A"), DisplayPartKind::EnumMemberName);
}

// =============================================================================
// NULL AND DEFAULT
// =============================================================================

#[test]
fn test_null_for_reference_and_nullable_types() {
    let mut graph = core();
    let string = string(&graph);
    let nullable_int = graph.nullable_of(int(&graph));

    assert_eq!(render_default(&mut graph, string, ConstantValue::Null), "string p = null");
    assert_eq!(render_default(&mut graph, nullable_int, ConstantValue::Null), "int? p = null");
}

#[test]
fn test_default_for_value_types() {
    let mut graph = core();
    let global = graph.global_namespace();
    let int = int(&graph);
    let point = graph.add_type(global, "Point", TypeKind::Struct);

    assert_eq!(render_default(&mut graph, int, ConstantValue::Null), "int p = default(int)");
    assert_eq!(render_default(&mut graph, point, ConstantValue::Null), "Point p = default(Point)");

    let p = optional_parameter(&mut graph, "i", int, ConstantValue::Null);
    let format = DisplayFormat::MINIMALLY_QUALIFIED.add_miscellaneous_options(MiscellaneousOptions::ALLOW_DEFAULT_LITERAL);
    assert_renders(&graph, p, format, "int i = default");
}

#[test]
fn test_null_for_pointer() {
    let mut graph = core();
    let pointer = graph.pointer_to(int(&graph));
    assert_eq!(render_default(&mut graph, pointer, ConstantValue::Null), "int* p = null");
}

// =============================================================================
// LITERALS
// =============================================================================

#[rstest]
#[case(SpecialType::String, ConstantValue::String("a\tb".to_string()), "string p = \"a\\tb\"")]
#[case(SpecialType::String, ConstantValue::String(String::new()), "string p = \"\"")]
#[case(SpecialType::Char, ConstantValue::Char(u16::from(b'x')), "char p = 'x'")]
#[case(SpecialType::Char, ConstantValue::Char(0xD800), "char p = '\\ud800'")]
#[case(SpecialType::Boolean, ConstantValue::Bool(true), "bool p = true")]
#[case(SpecialType::Int64, ConstantValue::I64(-42), "long p = -42")]
#[case(SpecialType::UInt32, ConstantValue::U32(7), "uint p = 7")]
#[case(SpecialType::Double, ConstantValue::F64(0.5), "double p = 0.5")]
#[case(SpecialType::Single, ConstantValue::F32(1e7), "float p = 1E+07")]
fn test_literal_defaults(#[case] special_type: SpecialType, #[case] value: ConstantValue, #[case] expected: &str) {
    let mut graph = core();
    let ty = special(&graph, special_type);
    assert_eq!(render_default(&mut graph, ty, value), expected);
}

#[test]
fn test_decimal_keeps_trailing_zeros() {
    let mut graph = core();
    let decimal = special(&graph, SpecialType::Decimal);
    let value = Decimal::new(150, 2).expect("in range");

    assert_eq!(render_default(&mut graph, decimal, ConstantValue::Decimal(value)), "decimal p = 1.50");
}

#[test]
fn test_literal_part_kinds() {
    let mut graph = core();
    let bool_type = special(&graph, SpecialType::Boolean);
    let string = string(&graph);
    let int = int(&graph);
    let b = optional_parameter(&mut graph, "b", bool_type, ConstantValue::Bool(false));
    let s = optional_parameter(&mut graph, "s", string, ConstantValue::from("hi"));
    let i = optional_parameter(&mut graph, "i", int, ConstantValue::from(3));

    let format = DisplayFormat::MINIMALLY_QUALIFIED;
    assert_eq!(kind_of(&parts(&graph, b, format), "false"), DisplayPartKind::Keyword);
    assert_eq!(kind_of(&parts(&graph, s, format), "\"hi\""), DisplayPartKind::StringLiteral);
    assert_eq!(kind_of(&parts(&graph, i, format), "3"), DisplayPartKind::NumericLiteral);
}

#[test]
fn test_default_value_requires_name() {
    let mut graph = core();
    let int = int(&graph);
    let p = optional_parameter(&mut graph, "x", int, ConstantValue::I32(1));

    assert_renders(&graph, p, DisplayFormat::ERROR_MESSAGE, "int");
    assert_renders(&graph, p, DisplayFormat::MINIMALLY_QUALIFIED, "int x = 1");
}
