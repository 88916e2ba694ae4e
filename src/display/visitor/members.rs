//! Methods, properties, events, fields and the value-level symbols.

use crate::display::error::DisplayError;
use crate::display::format::{
    CompilerInternalOptions, ExtensionMethodStyle, KindOptions, LocalOptions, MemberOptions, ParameterOptions,
    PropertyStyle, TypeQualificationStyle,
};
use crate::display::parts::DisplayPartKind;
use crate::model::{CallingConvention, MethodData, MethodKind, Modifiers, RefKind, SymbolId, SymbolKind};
use crate::syntax::{operator_kind, SyntaxKind};

use super::types::type_name_kind;
use super::{DisplayVisitor, VisitMode};

impl DisplayVisitor<'_> {
    // ========================================================================
    // METHODS
    // ========================================================================

    pub(super) fn visit_method(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let method = graph[id].as_method().ok_or_else(|| DisplayError::malformed(id, "expected a method"))?;

        match method.method_kind {
            MethodKind::LambdaMethod => {
                self.part(DisplayPartKind::NumericLiteral, id, "lambda expression");
                return Ok(());
            }
            MethodKind::FunctionPointerSignature => return self.add_function_pointer_signature(method),
            _ if method.is_synthesized_global => {
                self.part(DisplayPartKind::NumericLiteral, id, &graph[id].name);
                return Ok(());
            }
            _ => {}
        }

        let id = self.extension_method_form(id, method);
        let symbol = &graph[id];
        let method = symbol.as_method().ok_or_else(|| DisplayError::malformed(id, "expected a method"))?;

        if let Some(enclosing) = graph.enclosing_type(id) {
            self.add_accessibility_if_required(id);
            self.add_member_modifiers_if_required(id);

            if self.format.member(MemberOptions::INCLUDE_TYPE) && self.shows_return_type(method.method_kind) {
                self.add_ref_kind_if_required(method.ref_kind);
                self.add_return_type(method.return_type.as_ref())?;
                self.space();
                if let Some(return_type) = &method.return_type {
                    self.add_custom_modifiers(&return_type.custom_modifiers, false, true)?;
                }
            }

            if self.format.member(MemberOptions::INCLUDE_CONTAINING_TYPE) {
                match method.method_kind {
                    MethodKind::LocalFunction => {}
                    MethodKind::ReducedExtension => {
                        if let Some(receiver) = &method.receiver_type {
                            self.visit_type_ref(receiver, VisitMode::NOT_FIRST)?;
                            self.punct(SyntaxKind::DOT);
                        }
                    }
                    _ => {
                        let container = graph.containing_type(id).unwrap_or(enclosing);
                        if let Some(container) = self.include_named_type(Some(container)) {
                            self.visit(container, VisitMode::NOT_FIRST)?;
                            self.punct(SyntaxKind::DOT);
                        }
                    }
                }
            }
        }

        let is_accessor = self.add_method_name(id, method)?;

        if !is_accessor {
            let arguments = graph.type_arguments(id);
            self.add_type_arguments(&arguments)?;
            if self.format.member(MemberOptions::INCLUDE_PARAMETERS) {
                let has_this = method.is_extension && method.method_kind != MethodKind::ReducedExtension;
                self.punct(SyntaxKind::L_PAREN);
                self.add_parameters_if_required(has_this, method.is_vararg, &method.parameters)?;
                self.punct(SyntaxKind::R_PAREN);
            }
            self.add_type_parameter_constraints(&arguments, mode)?;
        }
        Ok(())
    }

    /// Swap an extension method for the form the format asks for.
    fn extension_method_form(&self, id: SymbolId, method: &MethodData) -> SymbolId {
        if !method.is_extension {
            return id;
        }
        match (self.format.extension_method_style, method.method_kind) {
            (ExtensionMethodStyle::StaticMethod, MethodKind::ReducedExtension) => method.reduced_from.unwrap_or(id),
            (ExtensionMethodStyle::InstanceMethod, kind) if kind != MethodKind::ReducedExtension => {
                method.reduced_form.unwrap_or(id)
            }
            _ => id,
        }
    }

    fn shows_return_type(&self, kind: MethodKind) -> bool {
        match kind {
            MethodKind::Constructor | MethodKind::StaticConstructor => false,
            // Redundant in source form; metadata names show it.
            MethodKind::Destructor | MethodKind::Conversion => {
                self.format.internal(CompilerInternalOptions::USE_METADATA_METHOD_NAMES)
            }
            _ => true,
        }
    }

    /// Emit the method's name. Returns whether the method was rendered as
    /// an accessor, which owns no type arguments or parameter list.
    fn add_method_name(&mut self, id: SymbolId, method: &MethodData) -> Result<bool, DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let metadata_names = self.format.internal(CompilerInternalOptions::USE_METADATA_METHOD_NAMES);

        match method.method_kind {
            MethodKind::PropertyGet | MethodKind::PropertySet => {
                if let Some(property) = method.associated.filter(|&p| graph[p].as_property().is_some()) {
                    self.add_property_name_and_parameters(property)?;
                    self.punct(SyntaxKind::DOT);
                    let keyword = match method.method_kind {
                        MethodKind::PropertyGet => SyntaxKind::GET_KW,
                        _ if method.is_init_only => SyntaxKind::INIT_KW,
                        _ => SyntaxKind::SET_KW,
                    };
                    self.keyword(keyword);
                    return Ok(true);
                }
                self.part(DisplayPartKind::MethodName, id, &symbol.name);
            }
            MethodKind::EventAdd | MethodKind::EventRemove => {
                if let Some(event) = method.associated.filter(|&e| graph[e].as_event().is_some()) {
                    self.add_event_name(event)?;
                    self.punct(SyntaxKind::DOT);
                    let keyword = match method.method_kind {
                        MethodKind::EventAdd => SyntaxKind::ADD_KW,
                        _ => SyntaxKind::REMOVE_KW,
                    };
                    self.keyword(keyword);
                    return Ok(true);
                }
                self.part(DisplayPartKind::MethodName, id, &symbol.name);
            }
            MethodKind::Ordinary | MethodKind::DelegateInvoke | MethodKind::LocalFunction => {
                self.part(DisplayPartKind::MethodName, id, &symbol.name);
            }
            MethodKind::ReducedExtension => {
                self.part(DisplayPartKind::ExtensionMethodName, id, &symbol.name);
            }
            MethodKind::Constructor | MethodKind::StaticConstructor => {
                let container = graph.containing_type(id);
                let anonymous = container.and_then(|c| graph[c].as_named_type()).is_some_and(|t| t.is_anonymous);
                let name = match container {
                    Some(container) if !metadata_names && !anonymous => &graph[container].name,
                    _ => &symbol.name,
                };
                let kind = self.constructor_part_kind(id);
                self.part(kind, id, name);
            }
            MethodKind::Destructor => {
                let kind = self.constructor_part_kind(id);
                match graph.containing_type(id) {
                    Some(container) if !metadata_names => {
                        self.punct(SyntaxKind::TILDE);
                        self.part(kind, id, &graph[container].name);
                    }
                    _ => self.part(kind, id, &symbol.name),
                }
            }
            MethodKind::ExplicitInterfaceImplementation => {
                self.add_explicit_interface_if_required(method.explicit_interface)?;
                self.part(DisplayPartKind::MethodName, id, &symbol.name);
            }
            MethodKind::UserDefinedOperator | MethodKind::BuiltinOperator => {
                if metadata_names {
                    self.part(DisplayPartKind::MethodName, id, &symbol.name);
                } else {
                    self.add_explicit_interface_if_required(method.explicit_interface)?;
                    self.keyword(SyntaxKind::OPERATOR_KW);
                    self.space();
                    match operator_kind(&symbol.name) {
                        Some(kind @ (SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW)) => self.keyword(kind),
                        Some(kind) => self.part(DisplayPartKind::MethodName, id, kind.text()),
                        None => self.part(DisplayPartKind::MethodName, id, &symbol.name),
                    }
                }
            }
            MethodKind::Conversion => {
                if metadata_names {
                    self.part(DisplayPartKind::MethodName, id, &symbol.name);
                } else {
                    self.add_explicit_interface_if_required(method.explicit_interface)?;
                    let keyword = match operator_kind(&symbol.name) {
                        Some(SyntaxKind::EXPLICIT_KW) => SyntaxKind::EXPLICIT_KW,
                        _ => SyntaxKind::IMPLICIT_KW,
                    };
                    self.keyword(keyword);
                    self.space();
                    self.keyword(SyntaxKind::OPERATOR_KW);
                    self.space();
                    self.add_return_type(method.return_type.as_ref())?;
                }
            }
            kind @ (MethodKind::EventRaise | MethodKind::DeclareMethod) => {
                return Err(DisplayError::UnexpectedMethodKind { method: id, kind });
            }
            MethodKind::LambdaMethod | MethodKind::FunctionPointerSignature => {
                return Err(DisplayError::UnexpectedMethodKind { method: id, kind: method.method_kind });
            }
        }
        Ok(false)
    }

    fn constructor_part_kind(&self, id: SymbolId) -> DisplayPartKind {
        let graph = self.graph;
        graph
            .containing_type(id)
            .and_then(|c| graph[c].as_named_type())
            .map_or(DisplayPartKind::MethodName, |t| type_name_kind(t.type_kind))
    }

    /// `delegate* unmanaged[Cdecl]<int, ref string, void>`
    fn add_function_pointer_signature(&mut self, method: &MethodData) -> Result<(), DisplayError> {
        let graph = self.graph;
        self.keyword(SyntaxKind::DELEGATE_KW);
        self.punct(SyntaxKind::STAR);

        if let CallingConvention::Unmanaged(conventions) = &method.calling_convention {
            self.space();
            self.keyword(SyntaxKind::UNMANAGED_KW);
            if !conventions.is_empty() {
                self.punct(SyntaxKind::L_BRACKET);
                for (index, convention) in conventions.iter().enumerate() {
                    if index > 0 {
                        self.punct(SyntaxKind::COMMA);
                        self.space();
                    }
                    self.builder.push(DisplayPartKind::ClassName, None, convention);
                }
                self.punct(SyntaxKind::R_BRACKET);
            }
        }

        self.punct(SyntaxKind::LT);
        for &parameter in &method.parameters {
            let data = graph[parameter]
                .as_parameter()
                .ok_or_else(|| DisplayError::malformed(parameter, "expected a parameter"))?;
            self.add_parameter_ref_kind(data.ref_kind);
            self.visit_type_ref(&data.ty, VisitMode::NOT_FIRST)?;
            self.add_custom_modifiers(&data.ty.custom_modifiers, true, false)?;
            self.punct(SyntaxKind::COMMA);
            self.space();
        }
        match method.ref_kind {
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
        self.add_return_type(method.return_type.as_ref())?;
        if let Some(return_type) = &method.return_type {
            self.add_custom_modifiers(&return_type.custom_modifiers, true, false)?;
        }
        self.punct(SyntaxKind::GT);
        Ok(())
    }

    // ========================================================================
    // PARAMETERS
    // ========================================================================

    /// Comma-separated parameters; nothing at all when no parameter option
    /// is set.
    pub(super) fn add_parameters_if_required(
        &mut self,
        has_this: bool,
        is_vararg: bool,
        parameters: &[SymbolId],
    ) -> Result<(), DisplayError> {
        if self.format.parameter_options.is_empty() {
            return Ok(());
        }
        for (index, &parameter) in parameters.iter().enumerate() {
            if index > 0 {
                self.punct(SyntaxKind::COMMA);
                self.space();
            } else if has_this && self.format.parameter(ParameterOptions::INCLUDE_EXTENSION_THIS) {
                self.keyword(SyntaxKind::THIS_KW);
                self.space();
            }
            self.visit(parameter, VisitMode::NOT_FIRST)?;
        }
        if is_vararg {
            if !parameters.is_empty() {
                self.punct(SyntaxKind::COMMA);
                self.space();
            }
            self.keyword(SyntaxKind::ARGLIST_KW);
        }
        Ok(())
    }

    fn add_parameter_ref_kind(&mut self, ref_kind: RefKind) {
        let keywords: &[SyntaxKind] = match ref_kind {
            RefKind::None => return,
            RefKind::Ref => &[SyntaxKind::REF_KW],
            RefKind::Out => &[SyntaxKind::OUT_KW],
            RefKind::In => &[SyntaxKind::IN_KW],
            RefKind::RefReadOnly => &[SyntaxKind::REF_KW, SyntaxKind::READONLY_KW],
        };
        for &keyword in keywords {
            self.keyword(keyword);
            self.space();
        }
    }

    pub(super) fn visit_parameter(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let data = symbol.as_parameter().ok_or_else(|| DisplayError::malformed(id, "expected a parameter"))?;

        let include_type = self.format.parameter(ParameterOptions::INCLUDE_TYPE);
        let include_name = self.format.parameter(ParameterOptions::INCLUDE_NAME) && !symbol.name.is_empty();
        let brackets = data.is_optional && self.format.parameter(ParameterOptions::INCLUDE_OPTIONAL_BRACKETS);
        let default_value = data.default_value.as_ref().filter(|_| {
            self.format.parameter(ParameterOptions::INCLUDE_DEFAULT_VALUE)
                && self.format.parameter(ParameterOptions::INCLUDE_NAME)
        });

        if brackets {
            self.punct(SyntaxKind::L_BRACKET);
        }

        if include_type {
            if self.format.parameter(ParameterOptions::INCLUDE_PARAMS_REF_OUT) {
                self.add_parameter_ref_kind(data.ref_kind);
                if data.is_params {
                    self.keyword(SyntaxKind::PARAMS_KW);
                    self.space();
                }
            }
            self.visit_type_ref(&data.ty, VisitMode::NOT_FIRST)?;
            self.add_custom_modifiers(&data.ty.custom_modifiers, true, false)?;
        }

        if include_name {
            if include_type {
                self.space();
            }
            let kind = if data.is_this { DisplayPartKind::Keyword } else { DisplayPartKind::ParameterName };
            self.part(kind, id, &symbol.name);
        }

        if let Some(value) = default_value {
            if include_name || include_type {
                self.space();
            }
            self.punct(SyntaxKind::EQ);
            self.space();
            self.add_constant_value(&data.ty, value, false)?;
        }

        if brackets {
            self.punct(SyntaxKind::R_BRACKET);
        }
        Ok(())
    }

    // ========================================================================
    // PROPERTIES AND EVENTS
    // ========================================================================

    pub(super) fn visit_property(&mut self, id: SymbolId, _mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let property = symbol.as_property().ok_or_else(|| DisplayError::malformed(id, "expected a property"))?;

        self.add_accessibility_if_required(id);
        self.add_member_modifiers_if_required(id);

        if self.format.member(MemberOptions::INCLUDE_TYPE) {
            self.add_ref_kind_if_required(property.ref_kind);
            self.visit_type_ref(&property.ty, VisitMode::NOT_FIRST)?;
            self.space();
            self.add_custom_modifiers(&property.ty.custom_modifiers, false, true)?;
        }

        self.add_containing_type_if_required(id)?;
        self.add_property_name_and_parameters(id)?;

        if self.format.property_style == PropertyStyle::ShowReadWriteDescriptor {
            self.space();
            self.punct(SyntaxKind::L_BRACE);
            self.add_accessor_descriptor(id, property.getter, SyntaxKind::GET_KW);
            let setter_keyword = match property.setter.and_then(|s| graph[s].as_method()) {
                Some(setter) if setter.is_init_only => SyntaxKind::INIT_KW,
                _ => SyntaxKind::SET_KW,
            };
            self.add_accessor_descriptor(id, property.setter, setter_keyword);
            self.space();
            self.punct(SyntaxKind::R_BRACE);
        }
        Ok(())
    }

    /// ` get;` with the accessor's accessibility when it differs from the
    /// property's.
    fn add_accessor_descriptor(&mut self, property: SymbolId, accessor: Option<SymbolId>, keyword: SyntaxKind) {
        let Some(accessor) = accessor else {
            return;
        };
        let graph = self.graph;
        self.space();
        let accessibility = graph[accessor].accessibility;
        if accessibility != graph[property].accessibility {
            self.add_accessibility(accessibility);
        }
        self.keyword(keyword);
        self.punct(SyntaxKind::SEMICOLON);
    }

    fn add_property_name_and_parameters(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let property = symbol.as_property().ok_or_else(|| DisplayError::malformed(id, "expected a property"))?;

        self.add_explicit_interface_if_required(property.explicit_interface)?;
        if property.is_indexer {
            self.keyword(SyntaxKind::THIS_KW);
        } else {
            self.part(DisplayPartKind::PropertyName, id, &symbol.name);
        }

        if self.format.member(MemberOptions::INCLUDE_PARAMETERS) && !property.parameters.is_empty() {
            self.punct(SyntaxKind::L_BRACKET);
            self.add_parameters_if_required(false, false, &property.parameters)?;
            self.punct(SyntaxKind::R_BRACKET);
        }
        Ok(())
    }

    pub(super) fn visit_event(&mut self, id: SymbolId, _mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let event = graph[id].as_event().ok_or_else(|| DisplayError::malformed(id, "expected an event"))?;

        self.add_accessibility_if_required(id);
        self.add_member_modifiers_if_required(id);

        if self.format.kind(KindOptions::INCLUDE_MEMBER_KEYWORD) {
            self.keyword(SyntaxKind::EVENT_KW);
            self.space();
        }
        if self.format.member(MemberOptions::INCLUDE_TYPE) {
            self.visit_type_ref(&event.ty, VisitMode::NOT_FIRST)?;
            self.space();
        }

        self.add_containing_type_if_required(id)?;
        self.add_event_name(id)
    }

    fn add_event_name(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        let graph = self.graph;
        let event = graph[id].as_event().ok_or_else(|| DisplayError::malformed(id, "expected an event"))?;
        self.add_explicit_interface_if_required(event.explicit_interface)?;
        self.part(DisplayPartKind::EventName, id, &graph[id].name);
        Ok(())
    }

    fn add_containing_type_if_required(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        if !self.format.member(MemberOptions::INCLUDE_CONTAINING_TYPE) {
            return Ok(());
        }
        if let Some(container) = self.include_named_type(self.graph.containing_type(id)) {
            self.visit(container, VisitMode::NOT_FIRST)?;
            self.punct(SyntaxKind::DOT);
        }
        Ok(())
    }

    // ========================================================================
    // FIELDS
    // ========================================================================

    pub(super) fn visit_field(&mut self, id: SymbolId, mode: VisitMode) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let field = symbol.as_field().ok_or_else(|| DisplayError::malformed(id, "expected a field"))?;
        let is_enum_member = self.is_enum_member(id);
        let is_const = is_enum_member || symbol.modifiers.contains(Modifiers::CONST);

        self.add_accessibility_if_required(id);
        self.add_member_modifiers_if_required(id);

        if self.format.member(MemberOptions::INCLUDE_MODIFIERS) && !is_enum_member {
            let ordered = [
                (Modifiers::CONST, SyntaxKind::CONST_KW),
                (Modifiers::READONLY, SyntaxKind::READONLY_KW),
                (Modifiers::VOLATILE, SyntaxKind::VOLATILE_KW),
            ];
            for (flag, keyword) in ordered {
                if symbol.modifiers.contains(flag) {
                    self.keyword(keyword);
                    self.space();
                }
            }
        }

        if self.format.member(MemberOptions::INCLUDE_TYPE) && mode.first && !is_enum_member {
            self.visit_type_ref(&field.ty, VisitMode::NOT_FIRST)?;
            self.space();
            self.add_custom_modifiers(&field.ty.custom_modifiers, false, true)?;
        }

        self.add_containing_type_if_required(id)?;

        let kind = if is_enum_member {
            DisplayPartKind::EnumMemberName
        } else if is_const {
            DisplayPartKind::ConstantName
        } else {
            DisplayPartKind::FieldName
        };
        self.part(kind, id, &symbol.name);

        if mode.first && is_const && self.format.member(MemberOptions::INCLUDE_CONSTANT_VALUE) {
            if let Some(value) = &field.constant {
                self.space();
                self.punct(SyntaxKind::EQ);
                self.space();
                self.add_constant_value(&field.ty, value, is_enum_member)?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // LOCALS AND OTHER VALUE SYMBOLS
    // ========================================================================

    pub(super) fn visit_local(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let SymbolKind::Local(local) = &symbol.kind else {
            return Err(DisplayError::malformed(id, "expected a local"));
        };

        if self.format.local(LocalOptions::INCLUDE_REF) && matches!(local.ref_kind, RefKind::Ref | RefKind::RefReadOnly)
        {
            self.keyword(SyntaxKind::REF_KW);
            self.space();
            if local.ref_kind == RefKind::RefReadOnly {
                self.keyword(SyntaxKind::READONLY_KW);
                self.space();
            }
        }

        if self.format.local(LocalOptions::INCLUDE_TYPE) {
            self.visit_type_ref(&local.ty, VisitMode::NOT_FIRST)?;
            self.space();
        }

        let kind = if local.is_const { DisplayPartKind::ConstantName } else { DisplayPartKind::LocalName };
        self.part(kind, id, &symbol.name);

        if local.is_const && self.format.local(LocalOptions::INCLUDE_CONSTANT_VALUE) {
            if let Some(value) = &local.constant {
                self.space();
                self.punct(SyntaxKind::EQ);
                self.space();
                self.add_constant_value(&local.ty, value, false)?;
            }
        }
        Ok(())
    }

    pub(super) fn visit_discard(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        let graph = self.graph;
        let SymbolKind::Discard(discard) = &graph[id].kind else {
            return Err(DisplayError::malformed(id, "expected a discard"));
        };
        if self.format.local(LocalOptions::INCLUDE_TYPE) {
            self.visit_type_ref(&discard.ty, VisitMode::NOT_FIRST)?;
            self.space();
        }
        self.part(DisplayPartKind::Punctuation, id, "_");
        Ok(())
    }

    pub(super) fn visit_alias(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        let graph = self.graph;
        let alias = graph[id].as_alias().ok_or_else(|| DisplayError::malformed(id, "expected an alias"))?;
        self.part(DisplayPartKind::AliasName, id, &graph[id].name);
        if self.format.local(LocalOptions::INCLUDE_TYPE) {
            self.space();
            self.punct(SyntaxKind::EQ);
            self.space();
            self.visit(alias.target, VisitMode::NOT_FIRST)?;
        }
        Ok(())
    }

    /// `Name, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null`, or
    /// just the name when types are shown unqualified.
    pub(super) fn visit_assembly(&mut self, id: SymbolId) -> Result<(), DisplayError> {
        let graph = self.graph;
        let symbol = &graph[id];
        let SymbolKind::Assembly(identity) = &symbol.kind else {
            return Err(DisplayError::malformed(id, "expected an assembly"));
        };

        if self.format.type_qualification_style == TypeQualificationStyle::NameOnly {
            self.part(DisplayPartKind::AssemblyName, id, &symbol.name);
            return Ok(());
        }

        let [major, minor, build, revision] = identity.version;
        let culture = if identity.culture.is_empty() { "neutral" } else { identity.culture.as_str() };
        let token = match identity.public_key_token {
            Some(bytes) => bytes.iter().map(|b| format!("{b:02x}")).collect::<String>(),
            None => "null".to_string(),
        };
        let text = format!(
            "{}, Version={major}.{minor}.{build}.{revision}, Culture={culture}, PublicKeyToken={token}",
            symbol.name
        );
        self.part(DisplayPartKind::AssemblyName, id, &text);
        Ok(())
    }
}
