//! Structural visitor
//!
//! One recursive pass over the symbol graph per display call. The root
//! symbol is visited with [`VisitMode::ROOT`]; every related symbol
//! (containing namespace or type, return and parameter types, type
//! arguments, constraints, tuple elements) is visited with a non-first
//! mode, which suppresses the verbose root-only segments.
//!
//! ## Module Structure
//!
//! ```text
//! visitor/
//! ├── mod.rs        # dispatch, modifiers, custom modifiers, nullable sigils
//! ├── types.rs      # namespaces, named types, tuples, arrays, pointers
//! ├── members.rs    # methods, fields, properties, events, parameters, locals
//! └── constants.rs  # constant values, enum members and flags
//! ```

mod constants;
mod members;
mod types;

use crate::display::error::DisplayError;
use crate::display::format::{CompilerInternalOptions, DisplayFormat, MemberOptions, MiscellaneousOptions};
use crate::display::minimal::MinimalContext;
use crate::display::parts::{DisplayPartKind, PartBuilder};
use crate::model::{
    Accessibility, CustomModifier, MethodKind, Modifiers, Nullability, RefKind, SymbolGraph, SymbolId, SymbolKind,
    TypeKind, TypeRef,
};
use crate::syntax::SyntaxKind;

/// Emission verbosity for one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VisitMode {
    /// The symbol is the one the caller asked to display.
    pub first: bool,
    /// The symbol is being visited as a qualifier, where only namespaces
    /// and types can appear.
    pub in_namespace_or_type: bool,
}

impl VisitMode {
    pub const ROOT: Self = Self { first: true, in_namespace_or_type: false };
    pub const NOT_FIRST: Self = Self { first: false, in_namespace_or_type: false };
    pub const NOT_FIRST_NAMESPACE_OR_TYPE: Self = Self { first: false, in_namespace_or_type: true };
}

pub(crate) struct DisplayVisitor<'a> {
    pub(super) graph: &'a SymbolGraph,
    pub(super) format: &'a DisplayFormat,
    pub(super) builder: &'a mut PartBuilder,
    pub(super) minimal: Option<&'a MinimalContext<'a>>,
}

impl<'a> DisplayVisitor<'a> {
    pub fn new(
        graph: &'a SymbolGraph,
        format: &'a DisplayFormat,
        builder: &'a mut PartBuilder,
        minimal: Option<&'a MinimalContext<'a>>,
    ) -> Self {
        Self { graph, format, builder, minimal }
    }

    pub fn is_minimizing(&self) -> bool {
        self.minimal.is_some()
    }

    /// Visit `id`, dispatching on its kind.
    pub fn visit(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        tracing::trace!("[DISPLAY] Visiting {} {} '{}' (first: {})", symbol.kind_name(), id, symbol.name, mode.first);

        match &symbol.kind {
            SymbolKind::Assembly(_) => self.visit_assembly(id),
            SymbolKind::Module => {
                self.part(DisplayPartKind::ModuleName, id, &symbol.name);
                Ok(())
            }
            SymbolKind::Namespace => self.visit_namespace(id, mode),
            SymbolKind::NamedType(_) => self.visit_named_type(id, mode),
            SymbolKind::ArrayType(_) => self.visit_array_type(id, mode),
            SymbolKind::PointerType(_) => self.visit_pointer_type(id, mode),
            SymbolKind::FunctionPointerType(data) => self.visit_method(data.signature, mode),
            SymbolKind::TypeParameter(_) => {
                self.part(DisplayPartKind::TypeParameterName, id, &symbol.name);
                Ok(())
            }
            SymbolKind::DynamicType => {
                self.builder.push(DisplayPartKind::Keyword, Some(id), SyntaxKind::DYNAMIC_KW.text());
                Ok(())
            }
            SymbolKind::Field(_) => self.visit_field(id, mode),
            SymbolKind::Property(_) => self.visit_property(id, mode),
            SymbolKind::Event(_) => self.visit_event(id, mode),
            SymbolKind::Method(_) => self.visit_method(id, mode),
            SymbolKind::Parameter(_) => self.visit_parameter(id),
            SymbolKind::Local(_) => self.visit_local(id),
            SymbolKind::Discard(_) => self.visit_discard(id),
            SymbolKind::RangeVariable => {
                self.part(DisplayPartKind::RangeVariableName, id, &symbol.name);
                Ok(())
            }
            SymbolKind::Label => {
                self.part(DisplayPartKind::LabelName, id, &symbol.name);
                Ok(())
            }
            SymbolKind::Alias(_) => self.visit_alias(id),
        }
    }

    // ========================================================================
    // EMISSION HELPERS
    // ========================================================================

    pub(super) fn part(&mut self, kind: DisplayPartKind, id: SymbolId, text: &str) {
        self.builder.push(kind, Some(id), text);
    }

    pub(super) fn keyword(&mut self, keyword: SyntaxKind) {
        self.builder.keyword(keyword);
    }

    pub(super) fn punct(&mut self, punct: SyntaxKind) {
        self.builder.punct(punct);
    }

    pub(super) fn space(&mut self) {
        self.builder.space();
    }

    /// Visit a type use site and append its nullable sigil, if any.
    pub(super) fn visit_type_ref(&mut self, ty: &TypeRef, mode: VisitMode) -> Result<(), DisplayError> {
        self.visit(ty.ty, mode)?;
        if let Some(sigil) = self.nullable_annotation(ty) {
            self.punct(sigil);
        }
        Ok(())
    }

    /// `?` or `!` for a type use site, when the format asks for it.
    pub(super) fn nullable_annotation(&self, ty: &TypeRef) -> Option<SyntaxKind> {
        let graph = self.graph;
        match ty.nullability {
            Nullability::Annotated
                if self.format.misc(MiscellaneousOptions::INCLUDE_NULLABLE_REFERENCE_TYPE_MODIFIER)
                    && !graph.is_nullable_type(ty.ty)
                    && !graph.is_value_type(ty.ty) =>
            {
                Some(SyntaxKind::QUESTION)
            }
            Nullability::NotAnnotated
                if self
                    .format
                    .internal(CompilerInternalOptions::INCLUDE_NOT_NULLABLE_REFERENCE_TYPE_MODIFIER)
                    && graph.is_reference_type(ty.ty) =>
            {
                Some(SyntaxKind::BANG)
            }
            _ => None,
        }
    }

    /// `modopt(T)` / `modreq(T)` list. The first modifier gets a leading
    /// space only when asked; later ones always do.
    pub(super) fn add_custom_modifiers(
        &mut self,
        modifiers: &[CustomModifier],
        leading_space: bool,
        trailing_space: bool,
    ) -> Result<(), DisplayError> {
        if modifiers.is_empty() || !self.format.internal(CompilerInternalOptions::INCLUDE_CUSTOM_MODIFIERS) {
            return Ok(());
        }
        for (index, modifier) in modifiers.iter().enumerate() {
            if index > 0 || leading_space {
                self.space();
            }
            let prefix = if modifier.is_optional { "modopt(" } else { "modreq(" };
            self.builder.push(DisplayPartKind::Other, None, prefix);
            self.visit(modifier.modifier, VisitMode::NOT_FIRST)?;
            self.builder.push(DisplayPartKind::Other, None, ")");
        }
        if trailing_space {
            self.space();
        }
        Ok(())
    }

    // ========================================================================
    // MEMBER DECORATIONS
    // ========================================================================

    /// Members of interfaces, enum members and local functions never show
    /// accessibility or modifiers.
    fn decorations_suppressed(&self, id: SymbolId) -> bool {
        let graph = self.graph;
        let symbol = &graph[id];
        if symbol.as_method().is_some_and(|m| m.method_kind == MethodKind::LocalFunction) {
            return true;
        }
        match graph.containing_type(id).and_then(|c| graph[c].as_named_type()) {
            Some(container) => matches!(container.type_kind, TypeKind::Interface | TypeKind::Enum),
            None => false,
        }
    }

    pub(super) fn is_enum_member(&self, id: SymbolId) -> bool {
        let graph = self.graph;
        graph[id].as_field().is_some()
            && graph
                .containing_type(id)
                .and_then(|c| graph[c].as_named_type())
                .is_some_and(|t| t.type_kind == TypeKind::Enum)
    }

    pub(super) fn add_accessibility_if_required(&mut self, id: SymbolId) {
        if self.format.member(MemberOptions::INCLUDE_ACCESSIBILITY) && !self.decorations_suppressed(id) {
            self.add_accessibility(self.graph[id].accessibility);
        }
    }

    pub(super) fn add_accessibility(&mut self, accessibility: Accessibility) {
        let keywords: &[SyntaxKind] = match accessibility {
            Accessibility::NotApplicable => return,
            Accessibility::Private => &[SyntaxKind::PRIVATE_KW],
            Accessibility::ProtectedAndInternal => &[SyntaxKind::PRIVATE_KW, SyntaxKind::PROTECTED_KW],
            Accessibility::Protected => &[SyntaxKind::PROTECTED_KW],
            Accessibility::Internal => &[SyntaxKind::INTERNAL_KW],
            Accessibility::ProtectedOrInternal => &[SyntaxKind::PROTECTED_KW, SyntaxKind::INTERNAL_KW],
            Accessibility::Public => &[SyntaxKind::PUBLIC_KW],
        };
        for &keyword in keywords {
            self.keyword(keyword);
            self.space();
        }
    }

    pub(super) fn add_member_modifiers_if_required(&mut self, id: SymbolId) {
        if !self.format.member(MemberOptions::INCLUDE_MODIFIERS) || self.decorations_suppressed(id) {
            return;
        }
        let modifiers = self.graph[id].modifiers;
        let is_const = modifiers.contains(Modifiers::CONST);
        let ordered = [
            (Modifiers::STATIC, SyntaxKind::STATIC_KW),
            (Modifiers::OVERRIDE, SyntaxKind::OVERRIDE_KW),
            (Modifiers::ABSTRACT, SyntaxKind::ABSTRACT_KW),
            (Modifiers::SEALED, SyntaxKind::SEALED_KW),
            (Modifiers::EXTERN, SyntaxKind::EXTERN_KW),
            (Modifiers::VIRTUAL, SyntaxKind::VIRTUAL_KW),
        ];
        for (flag, keyword) in ordered {
            // Constants are implicitly static.
            if flag == Modifiers::STATIC && is_const {
                continue;
            }
            if modifiers.contains(flag) {
                self.keyword(keyword);
                self.space();
            }
        }
    }

    /// `ref ` or `ref readonly ` before a by-ref member type.
    pub(super) fn add_ref_kind_if_required(&mut self, ref_kind: RefKind) {
        if !self.format.member(MemberOptions::INCLUDE_REF) {
            return;
        }
        match ref_kind {
            RefKind::Ref => {
                self.keyword(SyntaxKind::REF_KW);
                self.space();
            }
            RefKind::RefReadOnly => {
                self.keyword(SyntaxKind::REF_KW);
                self.space();
                self.keyword(SyntaxKind::READONLY_KW);
                self.space();
            }
            RefKind::None | RefKind::Out | RefKind::In => {}
        }
    }

    /// The containing type when the format may show it.
    pub(super) fn include_named_type(&self, ty: Option<SymbolId>) -> Option<SymbolId> {
        let id = ty?;
        let data = self.graph[id].as_named_type()?;
        if data.is_script_class && !self.format.internal(CompilerInternalOptions::INCLUDE_SCRIPT_TYPE) {
            return None;
        }
        Some(id)
    }

    /// `I.` before an explicitly implemented member.
    pub(super) fn add_explicit_interface_if_required(
        &mut self,
        interface: Option<SymbolId>,
    ) -> Result<(), DisplayError> {
        if let Some(interface) = interface {
            if self.format.member(MemberOptions::INCLUDE_EXPLICIT_INTERFACE) {
                self.visit(interface, VisitMode::NOT_FIRST)?;
                self.punct(SyntaxKind::DOT);
            }
        }
        Ok(())
    }
}
