//! Position-relative display against a region-based binding oracle.
//!
//! ```text
//! [0, 200)    global       using Foo = N1.N2.N3;
//!   [10, 190)  N1.N2
//!     [50, 100)  N1.N2.Holder   (declares a field named Color)
//!       [60, 80)   type-only context
//!     [110, 140) N1.N2.Palette  (declares a field `Color Color`)
//!     [150, 190) N1.N2     using Bar = N1.N2;
//! ```

use symdisplay::display::{
    display_minimal, display_minimal_string, DisplayError, DisplayFormat, DisplayPartKind, GlobalNamespaceStyle,
    LexicalScopes,
};
use symdisplay::model::{
    AliasData, FieldData, MethodData, MethodKind, ParameterData, Symbol, SymbolGraph, SymbolId, SymbolKind, TypeKind, TypeRef,
};
use symdisplay::{TextRange, TextSize};

use crate::helpers::fixtures::*;

// =============================================================================
// FIXTURE
// =============================================================================

const DOCUMENT_LEN: u32 = 200;

struct World {
    graph: SymbolGraph,
    n2: SymbolId,
    n3: SymbolId,
    c: SymbolId,
    c2: SymbolId,
    color: SymbolId,
    global_color: SymbolId,
    holder: SymbolId,
    palette: SymbolId,
    foo: SymbolId,
    bar: SymbolId,
}

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

fn world(shadow_alias: bool) -> World {
    let mut graph = core();
    let global = graph.global_namespace();
    let int = int(&graph);
    let n2 = graph.namespace_path("N1.N2");
    let n3 = graph.namespace_path("N1.N2.N3");
    let c = graph.add_type(n3, "C", TypeKind::Class);
    let c2 = graph.add_type(n2, "C2", TypeKind::Class);
    let color = graph.add_type(n2, "Color", TypeKind::Class);
    let global_color = graph.add_type(global, "Color", TypeKind::Class);
    let holder = graph.add_type(n2, "Holder", TypeKind::Class);
    graph.add(holder, Symbol::new("Color", SymbolKind::Field(FieldData::new(int))));
    let palette = graph.add_type(n2, "Palette", TypeKind::Class);
    graph.add(palette, Symbol::new("Color", SymbolKind::Field(FieldData::new(color))));
    if shadow_alias {
        graph.add_type(n2, "Foo", TypeKind::Class);
    }
    let foo = graph.add(global, Symbol::new("Foo", SymbolKind::Alias(AliasData { target: n3 })));
    let bar = graph.add(global, Symbol::new("Bar", SymbolKind::Alias(AliasData { target: n2 })));

    World { graph, n2, n3, c, c2, color, global_color, holder, palette, foo, bar }
}

fn scopes(world: &World) -> LexicalScopes<'_> {
    let mut scopes = LexicalScopes::new(&world.graph, TextSize::from(DOCUMENT_LEN));
    scopes.alias(scopes.root(), world.foo);
    scopes.region(range(10, 190), world.n2);
    scopes.region(range(50, 100), world.holder);
    scopes.type_only(range(60, 80));
    scopes.region(range(110, 140), world.palette);
    let inner = scopes.region(range(150, 190), world.n2);
    scopes.alias(inner, world.bar);
    scopes
}

fn render_at(world: &World, scopes: &LexicalScopes<'_>, id: SymbolId, position: u32, format: DisplayFormat) -> String {
    display_minimal_string(&world.graph, id, scopes, TextSize::from(position), &format)
        .unwrap_or_else(|e| panic!("minimal display of {id} failed: {e}"))
}

fn minimal_at(world: &World, id: SymbolId, position: u32) -> String {
    render_at(world, &scopes(world), id, position, DisplayFormat::MINIMALLY_QUALIFIED)
}

// =============================================================================
// ALIASES
// =============================================================================

#[test]
fn test_alias_replaces_its_target() {
    let world = world(false);
    assert_eq!(minimal_at(&world, world.c, 20), "Foo.C");
    assert_eq!(minimal_at(&world, world.n3, 20), "Foo");

    let scopes = scopes(&world);
    let parts =
        display_minimal(&world.graph, world.c, &scopes, TextSize::from(20), &DisplayFormat::MINIMALLY_QUALIFIED)
            .expect("display");
    assert_eq!(parts[0].kind, DisplayPartKind::AliasName);
    assert_eq!(parts[0].symbol, Some(world.foo));
}

#[test]
fn test_shadowed_alias_is_not_used() {
    let world = world(true);
    assert_eq!(minimal_at(&world, world.c, 20), "N3.C");
}

#[test]
fn test_alias_only_inside_its_region() {
    let world = world(false);
    assert_eq!(minimal_at(&world, world.n2, 160), "Bar");
    assert_eq!(minimal_at(&world, world.n2, 20), "N2");
    assert_eq!(minimal_at(&world, world.c, 160), "Foo.C");
}

// =============================================================================
// QUALIFICATION
// =============================================================================

#[test]
fn test_name_in_scope_needs_no_qualifier() {
    let world = world(false);
    assert_eq!(minimal_at(&world, world.c2, 20), "C2");
    assert_eq!(minimal_at(&world, world.color, 20), "Color");
}

#[test]
fn test_shadowed_name_takes_shortest_qualifier() {
    let world = world(false);
    assert_eq!(minimal_at(&world, world.color, 55), "N2.Color");
}

#[test]
fn test_member_of_the_same_type_keeps_simple_name() {
    let world = world(false);
    assert_eq!(minimal_at(&world, world.color, 120), "Color");
    assert_eq!(minimal_at(&world, world.color, 55), "N2.Color");
}

#[test]
fn test_member_of_the_same_type_in_signature() {
    let mut world = world(false);
    let m = method(&mut world.graph, world.palette, "Mix", MethodData::new(MethodKind::Ordinary), &[]);
    parameter(&mut world.graph, m, "other", ParameterData::new(TypeRef::new(world.color)));

    assert_eq!(minimal_at(&world, m, 120), "void Palette.Mix(Color other)");
}

#[test]
fn test_type_only_context_skips_value_members() {
    let world = world(false);
    assert_eq!(minimal_at(&world, world.color, 70), "Color");
}

#[test]
fn test_global_type_shadowed_by_namespace_member() {
    let world = world(false);
    let scopes = scopes(&world);
    assert_eq!(render_at(&world, &scopes, world.global_color, 20, DisplayFormat::MINIMALLY_QUALIFIED), "Color");

    let included = DisplayFormat::MINIMALLY_QUALIFIED.with_global_namespace_style(GlobalNamespaceStyle::Included);
    assert_eq!(render_at(&world, &scopes, world.global_color, 20, included), "global::Color");
    assert_eq!(render_at(&world, &scopes, world.global_color, 5, included), "Color");
}

#[test]
fn test_outside_every_namespace_region() {
    let world = world(false);
    assert_eq!(minimal_at(&world, world.c2, 5), "N1.N2.C2");
    assert_eq!(minimal_at(&world, world.color, 195), "N1.N2.Color");
}

#[test]
fn test_method_parameters_are_minimized() {
    let mut world = world(false);
    let m = method(&mut world.graph, world.holder, "M", MethodData::new(MethodKind::Ordinary), &[]);
    parameter(&mut world.graph, m, "c", ParameterData::new(TypeRef::new(world.color)));

    assert_eq!(minimal_at(&world, m, 70), "void Holder.M(Color c)");
    assert_eq!(minimal_at(&world, m, 55), "void Holder.M(N2.Color c)");
}

// =============================================================================
// IMPORTS AND GENERICS
// =============================================================================

#[test]
fn test_import_brings_generic_type_into_scope() {
    let mut graph = core();
    let list = generic_list(&mut graph);
    let list_of_int = graph.construct(list, vec![TypeRef::new(int(&graph))]);
    let generic = graph.namespace_path("System.Collections.Generic");
    let format = DisplayFormat::MINIMALLY_QUALIFIED;

    let mut scopes = LexicalScopes::new(&graph, TextSize::from(50));
    let bare = display_minimal_string(&graph, list_of_int, &scopes, TextSize::from(5), &format).expect("display");
    assert_eq!(bare, "System.Collections.Generic.List<int>");

    scopes.import(scopes.root(), generic);
    let imported = display_minimal_string(&graph, list_of_int, &scopes, TextSize::from(5), &format).expect("display");
    assert_eq!(imported, "List<int>");
}

#[test]
fn test_arity_mismatch_forces_qualification() {
    let mut graph = core();
    let global = graph.global_namespace();
    let list = generic_list(&mut graph);
    graph.add_type(global, "List", TypeKind::Class);
    let list_of_int = graph.construct(list, vec![TypeRef::new(int(&graph))]);
    let generic = graph.namespace_path("System.Collections.Generic");

    let mut scopes = LexicalScopes::new(&graph, TextSize::from(50));
    scopes.import(scopes.root(), generic);
    let rendered = display_minimal_string(
        &graph,
        list_of_int,
        &scopes,
        TextSize::from(5),
        &DisplayFormat::MINIMALLY_QUALIFIED,
    )
    .expect("display");
    assert_eq!(rendered, "System.Collections.Generic.List<int>");
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_position_past_document_end() {
    let world = world(false);
    let scopes = scopes(&world);
    let end = TextSize::from(DOCUMENT_LEN);
    let past = TextSize::from(DOCUMENT_LEN + 1);

    let error = display_minimal(&world.graph, world.c, &scopes, past, &DisplayFormat::MINIMALLY_QUALIFIED).unwrap_err();
    assert_eq!(error, DisplayError::PositionOutOfRange { position: past, len: end });
    assert!(display_minimal(&world.graph, world.c, &scopes, end, &DisplayFormat::MINIMALLY_QUALIFIED).is_ok());
}
