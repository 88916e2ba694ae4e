//! Namespaces, named types and the constructed type forms.

use crate::base::is_identifier;
use crate::display::error::DisplayError;
use crate::display::format::{
    CompilerInternalOptions, DelegateStyle, GenericsOptions, GlobalNamespaceStyle, KindOptions, MiscellaneousOptions,
    TypeQualificationStyle,
};
use crate::display::parts::{parts_to_string, DisplayPartKind};
use crate::model::{
    NamedTypeData, SymbolId, SymbolKind, TupleElement, TypeKind, TypeRef, Variance, VALUE_TUPLE_REST_POSITION,
};
use crate::syntax::{is_reserved_word, SyntaxKind};

use super::{DisplayVisitor, VisitMode};

const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// Part kind for the name of a type of `kind`.
pub(super) fn type_name_kind(kind: TypeKind) -> DisplayPartKind {
    match kind {
        TypeKind::Class | TypeKind::Module | TypeKind::Submission => DisplayPartKind::ClassName,
        TypeKind::Delegate => DisplayPartKind::DelegateName,
        TypeKind::Enum => DisplayPartKind::EnumName,
        TypeKind::Error => DisplayPartKind::ErrorTypeName,
        TypeKind::Interface => DisplayPartKind::InterfaceName,
        TypeKind::Struct => DisplayPartKind::StructName,
    }
}

impl DisplayVisitor<'_> {
    // ========================================================================
    // NAMESPACES
    // ========================================================================

    pub(super) fn visit_namespace(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        if mode.first && self.format.kind(KindOptions::INCLUDE_NAMESPACE_KEYWORD) {
            self.keyword(SyntaxKind::NAMESPACE_KW);
            self.space();
        }

        if self.is_minimizing() {
            if self.try_add_alias(id) {
                return Ok(());
            }
            return self.minimally_qualify_namespace(id, mode);
        }

        if let Some(parent) = self.namespace_to_visit(graph[id].containing) {
            self.visit(parent, VisitMode::NOT_FIRST_NAMESPACE_OR_TYPE)?;
            self.add_namespace_separator(parent);
        }

        if graph.is_global_namespace(id) {
            self.add_global_namespace(id, mode);
        } else {
            self.part(DisplayPartKind::NamespaceName, id, &graph[id].name);
        }
        Ok(())
    }

    fn add_global_namespace(&mut self, id: SymbolId, mode: VisitMode) {
        match self.format.global_namespace_style {
            GlobalNamespaceStyle::Included if !mode.first => {
                self.builder.push(DisplayPartKind::Keyword, Some(id), SyntaxKind::GLOBAL_KW.text());
            }
            GlobalNamespaceStyle::Included | GlobalNamespaceStyle::OmittedAsContaining if mode.first => {
                self.builder.push(DisplayPartKind::Text, Some(id), "<global namespace>");
            }
            _ => {}
        }
    }

    /// The containing namespace when fully qualified output should show it.
    pub(super) fn namespace_to_visit(&self, containing: Option<SymbolId>) -> Option<SymbolId> {
        let graph = self.graph;
        let id = containing.filter(|&c| matches!(graph[c].kind, SymbolKind::Namespace))?;
        if self.format.type_qualification_style != TypeQualificationStyle::NameAndContainingTypesAndNamespaces {
            return None;
        }
        if graph.is_global_namespace(id) && self.format.global_namespace_style != GlobalNamespaceStyle::Included {
            return None;
        }
        Some(id)
    }

    /// `::` after the global namespace, `.` after any other.
    pub(crate) fn add_namespace_separator(&mut self, namespace: SymbolId) {
        if self.graph.is_global_namespace(namespace) {
            self.punct(SyntaxKind::COLON_COLON);
        } else {
            self.punct(SyntaxKind::DOT);
        }
    }

    // ========================================================================
    // NAMED TYPES
    // ========================================================================

    pub(super) fn visit_named_type(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let data = symbol.as_named_type().ok_or_else(|| DisplayError::malformed(id, "expected a named type"))?;

        if self.is_minimizing() && self.try_add_alias(id) {
            return Ok(());
        }

        if self.format.misc(MiscellaneousOptions::USE_SPECIAL_TYPES) {
            if let Some(keyword) = data.special.and_then(|s| s.keyword()) {
                self.builder.push(DisplayPartKind::Keyword, Some(id), keyword.text());
                return Ok(());
            }
        }

        if !self.format.misc(MiscellaneousOptions::EXPAND_NULLABLE) && graph.is_nullable_type(id) {
            if let Some(underlying) = data.type_arguments.first() {
                if !matches!(graph[underlying.ty].kind, SymbolKind::PointerType(_)) {
                    self.visit_type_ref(underlying, VisitMode::NOT_FIRST)?;
                    self.punct(SyntaxKind::QUESTION);
                    return Ok(());
                }
            }
        }

        self.add_type_kind(data, mode);

        if self.is_minimizing() || self.uses_tuple_display(data) {
            return self.minimally_qualify_named_type(id, mode);
        }

        if let Some(invoke) = self.delegate_signature(data, mode) {
            if self.format.delegate_style == DelegateStyle::NameAndSignature {
                let invoke =
                    graph[invoke].as_method().ok_or_else(|| DisplayError::malformed(invoke, "expected a method"))?;
                self.add_ref_kind_if_required(invoke.ref_kind);
                self.add_return_type(invoke.return_type.as_ref())?;
                self.space();
            }
        }

        if let Some(namespace) = self.namespace_to_visit(symbol.containing) {
            let skip = graph.is_global_namespace(namespace) && data.type_kind == TypeKind::Error;
            if !skip {
                self.visit(namespace, VisitMode::NOT_FIRST_NAMESPACE_OR_TYPE)?;
                self.add_namespace_separator(namespace);
            }
        }

        if self.format.type_qualification_style != TypeQualificationStyle::NameOnly {
            if let Some(container) = self.include_named_type(graph.containing_type(id)) {
                self.visit(container, VisitMode::NOT_FIRST_NAMESPACE_OR_TYPE)?;
                self.punct(SyntaxKind::DOT);
            }
        }

        self.add_name_and_type_arguments(id, mode)
    }

    fn uses_tuple_display(&self, data: &NamedTypeData) -> bool {
        data.is_tuple() && !self.displays_as_value_tuple()
    }

    fn displays_as_value_tuple(&self) -> bool {
        self.format.misc(MiscellaneousOptions::EXPAND_VALUE_TUPLE)
            || self.format.internal(CompilerInternalOptions::USE_VALUE_TUPLE)
    }

    fn add_type_kind(&mut self, data: &NamedTypeData, mode: VisitMode) {
        if !mode.first || !self.format.kind(KindOptions::INCLUDE_TYPE_KEYWORD) {
            return;
        }
        if data.is_anonymous {
            self.builder.push(DisplayPartKind::AnonymousTypeIndicator, None, "AnonymousType");
            self.space();
        } else if self.uses_tuple_display(data) {
            self.builder.push(DisplayPartKind::AnonymousTypeIndicator, None, "Tuple");
            self.space();
        } else if let Some(keyword) = data.type_kind.keyword() {
            self.keyword(keyword);
            self.space();
        }
    }

    /// The invoke method, when a delegate's signature may be shown.
    fn delegate_signature(&self, data: &NamedTypeData, mode: VisitMode) -> Option<SymbolId> {
        if !mode.first || data.type_kind != TypeKind::Delegate || self.format.delegate_style == DelegateStyle::NameOnly
        {
            return None;
        }
        data.delegate_invoke
    }

    /// `void` or the visited return type.
    pub(super) fn add_return_type(&mut self, return_type: Option<&TypeRef>) -> Result<(), DisplayError> {
        match return_type {
            Some(ty) => self.visit_type_ref(ty, VisitMode::NOT_FIRST),
            None => {
                self.keyword(SyntaxKind::VOID_KW);
                Ok(())
            }
        }
    }

    /// The simple name of a named type followed by whatever the format
    /// shows after it: type arguments, delegate parameters, constraints.
    pub(crate) fn add_name_and_type_arguments(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let data = symbol.as_named_type().ok_or_else(|| DisplayError::malformed(id, "expected a named type"))?;

        if data.is_anonymous {
            return self.add_anonymous_type_name(id, data);
        }

        if let Some(elements) = &data.tuple_elements {
            let has_names = elements.iter().any(|e| e.name.is_some());
            if !self.displays_as_value_tuple() && (has_names || self.can_use_tuple_syntax(data)) {
                return self.add_tuple_type_name(elements);
            }
        }

        let kind = type_name_kind(data.type_kind);
        let hide_error_name =
            data.type_kind == TypeKind::Error && !self.format.misc(MiscellaneousOptions::USE_ERROR_TYPE_SYMBOL_NAME);
        let name = if hide_error_name {
            "?"
        } else {
            self.remove_attribute_suffix(id, &symbol.name)
        };
        self.part(kind, id, name);

        let arity = data.arity();
        if self.format.internal(CompilerInternalOptions::USE_ARITY_FOR_GENERIC_TYPES) {
            if arity > 0 {
                self.builder.text(&format!("`{arity}"));
            }
        } else if arity > 0 && self.format.generics(GenericsOptions::INCLUDE_TYPE_PARAMETERS) {
            if data.is_unbound || data.is_missing_metadata {
                self.punct(SyntaxKind::LT);
                for _ in 1..arity {
                    self.punct(SyntaxKind::COMMA);
                }
                self.punct(SyntaxKind::GT);
            } else {
                let arguments = graph.type_arguments(id);
                self.add_type_arguments(&arguments)?;
                self.add_delegate_parameters(data, mode)?;
                self.add_type_parameter_constraints(&arguments, mode)?;
            }
        } else {
            self.add_delegate_parameters(data, mode)?;
        }

        if data.is_missing_metadata && self.format.internal(CompilerInternalOptions::FLAG_MISSING_METADATA_TYPES) {
            self.punct(SyntaxKind::L_BRACKET);
            self.builder.push(DisplayPartKind::Other, Some(id), "missing");
            self.punct(SyntaxKind::R_BRACKET);
        }
        Ok(())
    }

    fn remove_attribute_suffix<'n>(&self, id: SymbolId, name: &'n str) -> &'n str {
        if !self.format.misc(MiscellaneousOptions::REMOVE_ATTRIBUTE_SUFFIX) || !self.graph.derives_from_attribute(id) {
            return name;
        }
        match name.strip_suffix(ATTRIBUTE_SUFFIX) {
            Some(stripped) if is_identifier(stripped) && !is_reserved_word(stripped) => stripped,
            _ => name,
        }
    }

    fn add_anonymous_type_name(&mut self, id: SymbolId, data: &NamedTypeData) -> Result<(), DisplayError> {
        if data.type_kind == TypeKind::Delegate {
            self.part(DisplayPartKind::DelegateName, id, "<anonymous delegate>");
            return Ok(());
        }

        let graph = self.graph;
        let start = self.builder.len();
        let properties = graph
            .members(graph.original_definition(id))
            .iter()
            .filter_map(|&member| Some((member, graph[member].as_property()?)));
        for (index, (member, property)) in properties.enumerate() {
            if index > 0 {
                self.builder.text(", ");
            }
            self.visit_type_ref(&property.ty, VisitMode::NOT_FIRST)?;
            self.space();
            self.part(DisplayPartKind::PropertyName, member, &graph[member].name);
        }
        let members = parts_to_string(&self.builder.split_off(start));

        if members.is_empty() {
            self.part(DisplayPartKind::ClassName, id, "<empty anonymous type>");
        } else {
            self.part(DisplayPartKind::ClassName, id, &format!("<anonymous type: {members}>"));
        }
        Ok(())
    }

    fn add_tuple_type_name(&mut self, elements: &[TupleElement]) -> Result<(), DisplayError> {
        self.punct(SyntaxKind::L_PAREN);
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                self.punct(SyntaxKind::COMMA);
                self.space();
            }
            self.visit_type_ref(&element.ty, VisitMode::NOT_FIRST)?;
            if let Some(name) = &element.name {
                self.space();
                self.builder.push(DisplayPartKind::FieldName, None, name);
            }
        }
        self.punct(SyntaxKind::R_PAREN);
        Ok(())
    }

    /// Tuple syntax needs at least two elements, no custom modifiers and
    /// a chain of unnamed rest tuples.
    fn can_use_tuple_syntax(&self, data: &NamedTypeData) -> bool {
        let graph = self.graph;
        let has_modifiers = |d: &NamedTypeData| d.type_arguments.iter().any(|a| !a.custom_modifiers.is_empty());

        if has_modifiers(data) || data.type_arguments.len() <= 1 {
            return false;
        }
        let mut current = data;
        while current.type_arguments.len() == VALUE_TUPLE_REST_POSITION {
            let rest = &current.type_arguments[VALUE_TUPLE_REST_POSITION - 1];
            let Some(rest) = graph[rest.ty].as_named_type() else {
                return false;
            };
            let named = rest.tuple_elements.as_ref().is_some_and(|e| e.iter().any(|e| e.name.is_some()));
            if rest.is_definition() || !rest.is_tuple() || named || has_modifiers(rest) {
                return false;
            }
            current = rest;
        }
        true
    }

    // ========================================================================
    // TYPE ARGUMENTS AND CONSTRAINTS
    // ========================================================================

    /// `<A, B>`; nothing when there are no arguments or the format hides
    /// them.
    pub(super) fn add_type_arguments(&mut self, arguments: &[TypeRef]) -> Result<(), DisplayError> {
        if arguments.is_empty() || !self.format.generics(GenericsOptions::INCLUDE_TYPE_PARAMETERS) {
            return Ok(());
        }
        let graph = self.graph;
        self.punct(SyntaxKind::LT);
        for (index, argument) in arguments.iter().enumerate() {
            if index > 0 {
                self.punct(SyntaxKind::COMMA);
                self.space();
            }
            let mode = match graph[argument.ty].as_type_parameter() {
                Some(parameter) => {
                    self.add_variance_if_required(parameter.variance);
                    VisitMode::NOT_FIRST
                }
                None => VisitMode::NOT_FIRST_NAMESPACE_OR_TYPE,
            };
            self.visit_type_ref(argument, mode)?;
            self.add_custom_modifiers(&argument.custom_modifiers, true, false)?;
        }
        self.punct(SyntaxKind::GT);
        Ok(())
    }

    pub(super) fn add_variance_if_required(&mut self, variance: Variance) {
        if !self.format.generics(GenericsOptions::INCLUDE_VARIANCE) {
            return;
        }
        let keyword = match variance {
            Variance::None => return,
            Variance::In => SyntaxKind::IN_KW,
            Variance::Out => SyntaxKind::OUT_KW,
        };
        self.keyword(keyword);
        self.space();
    }

    /// ` where T : class, IFoo, new()` for every constrained type parameter.
    pub(super) fn add_type_parameter_constraints(
        &mut self,
        arguments: &[TypeRef],
        mode: VisitMode,
    ) -> Result<(), DisplayError> {
        if !mode.first || !self.format.generics(GenericsOptions::INCLUDE_TYPE_CONSTRAINTS) {
            return Ok(());
        }
        let graph = self.graph;
        for argument in arguments {
            let Some(parameter) = graph[argument.ty].as_type_parameter() else {
                continue;
            };
            let constraints = &parameter.constraints;
            if constraints.is_empty() {
                continue;
            }

            self.space();
            self.keyword(SyntaxKind::WHERE_KW);
            self.space();
            self.visit(argument.ty, VisitMode::NOT_FIRST)?;
            self.space();
            self.punct(SyntaxKind::COLON);
            self.space();

            let primary = if constraints.reference_type {
                Some(SyntaxKind::CLASS_KW)
            } else if constraints.unmanaged {
                Some(SyntaxKind::UNMANAGED_KW)
            } else if constraints.value_type {
                Some(SyntaxKind::STRUCT_KW)
            } else if constraints.not_null {
                Some(SyntaxKind::NOTNULL_KW)
            } else {
                None
            };
            let mut need_comma = false;
            if let Some(keyword) = primary {
                self.keyword(keyword);
                need_comma = true;
            }
            for constraint in &constraints.types {
                if need_comma {
                    self.punct(SyntaxKind::COMMA);
                    self.space();
                }
                self.visit_type_ref(constraint, VisitMode::NOT_FIRST)?;
                need_comma = true;
            }
            if constraints.constructor {
                if need_comma {
                    self.punct(SyntaxKind::COMMA);
                    self.space();
                }
                self.keyword(SyntaxKind::NEW_KW);
                self.punct(SyntaxKind::L_PAREN);
                self.punct(SyntaxKind::R_PAREN);
            }
        }
        Ok(())
    }

    fn add_delegate_parameters(&mut self, data: &NamedTypeData, mode: VisitMode) -> Result<(), DisplayError> {
        let Some(invoke) = self.delegate_signature(data, mode) else {
            return Ok(());
        };
        let graph = self.graph;
        let method = graph[invoke].as_method().ok_or_else(|| DisplayError::malformed(invoke, "expected a method"))?;
        self.punct(SyntaxKind::L_PAREN);
        self.add_parameters_if_required(false, method.is_vararg, &method.parameters)?;
        self.punct(SyntaxKind::R_PAREN);
        Ok(())
    }

    // ========================================================================
    // ARRAYS AND POINTERS
    // ========================================================================

    pub(super) fn visit_array_type(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let array = graph[id].as_array().ok_or_else(|| DisplayError::malformed(id, "expected an array"))?;

        if self.format.internal(CompilerInternalOptions::REVERSE_ARRAY_RANK_SPECIFIERS) {
            self.visit_type_ref(&array.element, VisitMode::NOT_FIRST)?;
            self.add_custom_modifiers(&array.element.custom_modifiers, true, true)?;
            self.add_array_rank(array.rank, array.is_sz);
            return Ok(());
        }

        // `int[][,]` is an array of two-dimensional arrays: the element type
        // comes first, then the rank specifiers from the outside in.
        let mut levels = vec![array];
        let mut innermost = &array.element;
        while let Some(inner) = graph[innermost.ty].as_array() {
            if self.nullable_annotation(innermost).is_some() {
                break;
            }
            levels.push(inner);
            innermost = &inner.element;
        }

        self.visit_type_ref(innermost, VisitMode::NOT_FIRST)?;
        for level in levels {
            if !mode.first {
                self.add_custom_modifiers(&level.element.custom_modifiers, true, true)?;
            }
            self.add_array_rank(level.rank, level.is_sz);
        }
        Ok(())
    }

    fn add_array_rank(&mut self, rank: u32, is_sz: bool) {
        let stars = self.format.misc(MiscellaneousOptions::USE_ASTERISKS_IN_MULTI_DIMENSIONAL_ARRAYS);
        self.punct(SyntaxKind::L_BRACKET);
        if (rank > 1 && stars) || (rank <= 1 && !is_sz) {
            self.punct(SyntaxKind::STAR);
        }
        for _ in 1..rank {
            self.punct(SyntaxKind::COMMA);
            if stars {
                self.punct(SyntaxKind::STAR);
            }
        }
        self.punct(SyntaxKind::R_BRACKET);
    }

    pub(super) fn visit_pointer_type(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let SymbolKind::PointerType(pointer) = &graph[id].kind else {
            return Err(DisplayError::malformed(id, "expected a pointer"));
        };
        self.visit_type_ref(&pointer.pointed_at, VisitMode::NOT_FIRST)?;
        if !mode.first {
            self.add_custom_modifiers(&pointer.pointed_at.custom_modifiers, true, true)?;
        }
        self.punct(SyntaxKind::STAR);
        Ok(())
    }
}
