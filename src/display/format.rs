//! Display configuration.
//!
//! A [`DisplayFormat`] is an immutable bundle of independent option groups.
//! Flag groups are `bitflags` sets, styles are plain enums. Presets are
//! `const` values; the `with_*` methods return modified copies.

use bitflags::bitflags;

/// How the global namespace shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlobalNamespaceStyle {
    /// Never shown.
    #[default]
    Omitted,
    /// Shown only when it is the symbol being displayed.
    OmittedAsContaining,
    /// Shown as a `global::` qualifier, and as text when displayed itself.
    Included,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeQualificationStyle {
    #[default]
    NameOnly,
    NameAndContainingTypes,
    NameAndContainingTypesAndNamespaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DelegateStyle {
    #[default]
    NameOnly,
    NameAndParameters,
    NameAndSignature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtensionMethodStyle {
    /// Show the method in whatever form it was given.
    #[default]
    Default,
    /// Show static extension methods in their reduced, instance form.
    InstanceMethod,
    /// Show reduced extension methods in their static form.
    StaticMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyStyle {
    #[default]
    NameOnly,
    ShowReadWriteDescriptor,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GenericsOptions: u8 {
        const INCLUDE_TYPE_PARAMETERS = 1 << 0;
        const INCLUDE_TYPE_CONSTRAINTS = 1 << 1;
        const INCLUDE_VARIANCE = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MemberOptions: u8 {
        const INCLUDE_TYPE = 1 << 0;
        const INCLUDE_MODIFIERS = 1 << 1;
        const INCLUDE_ACCESSIBILITY = 1 << 2;
        const INCLUDE_EXPLICIT_INTERFACE = 1 << 3;
        const INCLUDE_PARAMETERS = 1 << 4;
        const INCLUDE_CONTAINING_TYPE = 1 << 5;
        const INCLUDE_CONSTANT_VALUE = 1 << 6;
        const INCLUDE_REF = 1 << 7;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParameterOptions: u8 {
        const INCLUDE_EXTENSION_THIS = 1 << 0;
        const INCLUDE_PARAMS_REF_OUT = 1 << 1;
        const INCLUDE_TYPE = 1 << 2;
        /// Also enables default values.
        const INCLUDE_NAME = 1 << 3;
        const INCLUDE_DEFAULT_VALUE = 1 << 4;
        const INCLUDE_OPTIONAL_BRACKETS = 1 << 5;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LocalOptions: u8 {
        const INCLUDE_TYPE = 1 << 0;
        const INCLUDE_CONSTANT_VALUE = 1 << 1;
        const INCLUDE_REF = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KindOptions: u8 {
        const INCLUDE_NAMESPACE_KEYWORD = 1 << 0;
        const INCLUDE_TYPE_KEYWORD = 1 << 1;
        const INCLUDE_MEMBER_KEYWORD = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MiscellaneousOptions: u16 {
        const USE_SPECIAL_TYPES = 1 << 0;
        const ESCAPE_KEYWORD_IDENTIFIERS = 1 << 1;
        const USE_ASTERISKS_IN_MULTI_DIMENSIONAL_ARRAYS = 1 << 2;
        const USE_ERROR_TYPE_SYMBOL_NAME = 1 << 3;
        const REMOVE_ATTRIBUTE_SUFFIX = 1 << 4;
        const EXPAND_NULLABLE = 1 << 5;
        const INCLUDE_NULLABLE_REFERENCE_TYPE_MODIFIER = 1 << 6;
        const ALLOW_DEFAULT_LITERAL = 1 << 7;
        const EXPAND_VALUE_TUPLE = 1 << 8;
    }
}

bitflags! {
    /// Diagnostic options used by compiler tests and internal tooling.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompilerInternalOptions: u8 {
        const USE_METADATA_METHOD_NAMES = 1 << 0;
        const USE_ARITY_FOR_GENERIC_TYPES = 1 << 1;
        const FLAG_MISSING_METADATA_TYPES = 1 << 2;
        const INCLUDE_SCRIPT_TYPE = 1 << 3;
        const INCLUDE_CUSTOM_MODIFIERS = 1 << 4;
        const REVERSE_ARRAY_RANK_SPECIFIERS = 1 << 5;
        const USE_VALUE_TUPLE = 1 << 6;
        const INCLUDE_NOT_NULLABLE_REFERENCE_TYPE_MODIFIER = 1 << 7;
    }
}

// ============================================================================
// DISPLAY FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayFormat {
    pub global_namespace_style: GlobalNamespaceStyle,
    pub type_qualification_style: TypeQualificationStyle,
    pub generics_options: GenericsOptions,
    pub member_options: MemberOptions,
    pub parameter_options: ParameterOptions,
    pub delegate_style: DelegateStyle,
    pub extension_method_style: ExtensionMethodStyle,
    pub property_style: PropertyStyle,
    pub local_options: LocalOptions,
    pub kind_options: KindOptions,
    pub miscellaneous_options: MiscellaneousOptions,
    pub compiler_internal_options: CompilerInternalOptions,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::ERROR_MESSAGE
    }
}

impl DisplayFormat {
    /// Every option off.
    pub const EMPTY: Self = Self {
        global_namespace_style: GlobalNamespaceStyle::Omitted,
        type_qualification_style: TypeQualificationStyle::NameOnly,
        generics_options: GenericsOptions::empty(),
        member_options: MemberOptions::empty(),
        parameter_options: ParameterOptions::empty(),
        delegate_style: DelegateStyle::NameOnly,
        extension_method_style: ExtensionMethodStyle::Default,
        property_style: PropertyStyle::NameOnly,
        local_options: LocalOptions::empty(),
        kind_options: KindOptions::empty(),
        miscellaneous_options: MiscellaneousOptions::empty(),
        compiler_internal_options: CompilerInternalOptions::empty(),
    };

    /// The format used in diagnostic messages.
    pub const ERROR_MESSAGE: Self = Self {
        global_namespace_style: GlobalNamespaceStyle::OmittedAsContaining,
        type_qualification_style: TypeQualificationStyle::NameAndContainingTypesAndNamespaces,
        generics_options: GenericsOptions::INCLUDE_TYPE_PARAMETERS.union(GenericsOptions::INCLUDE_VARIANCE),
        member_options: MemberOptions::INCLUDE_PARAMETERS
            .union(MemberOptions::INCLUDE_CONTAINING_TYPE)
            .union(MemberOptions::INCLUDE_EXPLICIT_INTERFACE),
        parameter_options: ParameterOptions::INCLUDE_PARAMS_REF_OUT.union(ParameterOptions::INCLUDE_TYPE),
        delegate_style: DelegateStyle::NameOnly,
        extension_method_style: ExtensionMethodStyle::Default,
        property_style: PropertyStyle::NameOnly,
        local_options: LocalOptions::empty(),
        kind_options: KindOptions::empty(),
        miscellaneous_options: MiscellaneousOptions::ESCAPE_KEYWORD_IDENTIFIERS
            .union(MiscellaneousOptions::USE_SPECIAL_TYPES)
            .union(MiscellaneousOptions::USE_ASTERISKS_IN_MULTI_DIMENSIONAL_ARRAYS)
            .union(MiscellaneousOptions::USE_ERROR_TYPE_SYMBOL_NAME),
        compiler_internal_options: CompilerInternalOptions::empty(),
    };

    /// Like [`Self::ERROR_MESSAGE`] without any qualification.
    pub const SHORT_ERROR_MESSAGE: Self =
        Self { type_qualification_style: TypeQualificationStyle::NameOnly, ..Self::ERROR_MESSAGE };

    /// Unambiguous anywhere: `global::` plus every containing namespace.
    pub const FULLY_QUALIFIED: Self = Self {
        global_namespace_style: GlobalNamespaceStyle::Included,
        type_qualification_style: TypeQualificationStyle::NameAndContainingTypesAndNamespaces,
        generics_options: GenericsOptions::INCLUDE_TYPE_PARAMETERS,
        miscellaneous_options: MiscellaneousOptions::ESCAPE_KEYWORD_IDENTIFIERS
            .union(MiscellaneousOptions::USE_SPECIAL_TYPES),
        ..Self::EMPTY
    };

    /// The format quick info and signature help use; intended for
    /// position-relative display.
    pub const MINIMALLY_QUALIFIED: Self = Self {
        global_namespace_style: GlobalNamespaceStyle::Omitted,
        type_qualification_style: TypeQualificationStyle::NameOnly,
        generics_options: GenericsOptions::INCLUDE_TYPE_PARAMETERS,
        member_options: MemberOptions::INCLUDE_PARAMETERS
            .union(MemberOptions::INCLUDE_TYPE)
            .union(MemberOptions::INCLUDE_REF)
            .union(MemberOptions::INCLUDE_CONTAINING_TYPE),
        parameter_options: ParameterOptions::INCLUDE_PARAMS_REF_OUT
            .union(ParameterOptions::INCLUDE_EXTENSION_THIS)
            .union(ParameterOptions::INCLUDE_TYPE)
            .union(ParameterOptions::INCLUDE_NAME)
            .union(ParameterOptions::INCLUDE_DEFAULT_VALUE),
        kind_options: KindOptions::INCLUDE_MEMBER_KEYWORD,
        miscellaneous_options: MiscellaneousOptions::ESCAPE_KEYWORD_IDENTIFIERS
            .union(MiscellaneousOptions::USE_SPECIAL_TYPES)
            .union(MiscellaneousOptions::USE_ERROR_TYPE_SYMBOL_NAME),
        ..Self::EMPTY
    };

    /// Verbose format for compiler tests; exercises most internal options.
    pub const TEST: Self = Self {
        global_namespace_style: GlobalNamespaceStyle::OmittedAsContaining,
        type_qualification_style: TypeQualificationStyle::NameAndContainingTypesAndNamespaces,
        generics_options: GenericsOptions::INCLUDE_TYPE_PARAMETERS.union(GenericsOptions::INCLUDE_VARIANCE),
        member_options: MemberOptions::INCLUDE_PARAMETERS
            .union(MemberOptions::INCLUDE_CONTAINING_TYPE)
            .union(MemberOptions::INCLUDE_TYPE)
            .union(MemberOptions::INCLUDE_REF)
            .union(MemberOptions::INCLUDE_EXPLICIT_INTERFACE),
        parameter_options: ParameterOptions::INCLUDE_OPTIONAL_BRACKETS
            .union(ParameterOptions::INCLUDE_DEFAULT_VALUE)
            .union(ParameterOptions::INCLUDE_PARAMS_REF_OUT)
            .union(ParameterOptions::INCLUDE_EXTENSION_THIS)
            .union(ParameterOptions::INCLUDE_TYPE)
            .union(ParameterOptions::INCLUDE_NAME),
        kind_options: KindOptions::INCLUDE_MEMBER_KEYWORD,
        property_style: PropertyStyle::ShowReadWriteDescriptor,
        miscellaneous_options: MiscellaneousOptions::INCLUDE_NULLABLE_REFERENCE_TYPE_MODIFIER,
        compiler_internal_options: CompilerInternalOptions::INCLUDE_SCRIPT_TYPE
            .union(CompilerInternalOptions::USE_METADATA_METHOD_NAMES)
            .union(CompilerInternalOptions::FLAG_MISSING_METADATA_TYPES)
            .union(CompilerInternalOptions::INCLUDE_CUSTOM_MODIFIERS),
        ..Self::EMPTY
    };

    // ========================================================================
    // BUILDERS
    // ========================================================================

    pub fn with_global_namespace_style(self, style: GlobalNamespaceStyle) -> Self {
        Self { global_namespace_style: style, ..self }
    }

    pub fn with_type_qualification_style(self, style: TypeQualificationStyle) -> Self {
        Self { type_qualification_style: style, ..self }
    }

    pub fn with_generics_options(self, options: GenericsOptions) -> Self {
        Self { generics_options: options, ..self }
    }

    pub fn with_member_options(self, options: MemberOptions) -> Self {
        Self { member_options: options, ..self }
    }

    pub fn with_parameter_options(self, options: ParameterOptions) -> Self {
        Self { parameter_options: options, ..self }
    }

    pub fn with_delegate_style(self, style: DelegateStyle) -> Self {
        Self { delegate_style: style, ..self }
    }

    pub fn with_extension_method_style(self, style: ExtensionMethodStyle) -> Self {
        Self { extension_method_style: style, ..self }
    }

    pub fn with_property_style(self, style: PropertyStyle) -> Self {
        Self { property_style: style, ..self }
    }

    pub fn with_local_options(self, options: LocalOptions) -> Self {
        Self { local_options: options, ..self }
    }

    pub fn with_kind_options(self, options: KindOptions) -> Self {
        Self { kind_options: options, ..self }
    }

    pub fn with_miscellaneous_options(self, options: MiscellaneousOptions) -> Self {
        Self { miscellaneous_options: options, ..self }
    }

    pub fn with_compiler_internal_options(self, options: CompilerInternalOptions) -> Self {
        Self { compiler_internal_options: options, ..self }
    }

    pub fn add_member_options(self, options: MemberOptions) -> Self {
        self.with_member_options(self.member_options | options)
    }

    pub fn remove_member_options(self, options: MemberOptions) -> Self {
        self.with_member_options(self.member_options - options)
    }

    pub fn add_parameter_options(self, options: ParameterOptions) -> Self {
        self.with_parameter_options(self.parameter_options | options)
    }

    pub fn add_miscellaneous_options(self, options: MiscellaneousOptions) -> Self {
        self.with_miscellaneous_options(self.miscellaneous_options | options)
    }

    pub fn remove_miscellaneous_options(self, options: MiscellaneousOptions) -> Self {
        self.with_miscellaneous_options(self.miscellaneous_options - options)
    }

    pub fn add_kind_options(self, options: KindOptions) -> Self {
        self.with_kind_options(self.kind_options | options)
    }

    pub fn add_compiler_internal_options(self, options: CompilerInternalOptions) -> Self {
        self.with_compiler_internal_options(self.compiler_internal_options | options)
    }

    pub fn add_generics_options(self, options: GenericsOptions) -> Self {
        self.with_generics_options(self.generics_options | options)
    }

    // ========================================================================
    // FLAG SHORTHANDS
    // ========================================================================

    pub(crate) fn generics(&self, flag: GenericsOptions) -> bool {
        self.generics_options.contains(flag)
    }

    pub(crate) fn member(&self, flag: MemberOptions) -> bool {
        self.member_options.contains(flag)
    }

    pub(crate) fn parameter(&self, flag: ParameterOptions) -> bool {
        self.parameter_options.contains(flag)
    }

    pub(crate) fn local(&self, flag: LocalOptions) -> bool {
        self.local_options.contains(flag)
    }

    pub(crate) fn kind(&self, flag: KindOptions) -> bool {
        self.kind_options.contains(flag)
    }

    pub(crate) fn misc(&self, flag: MiscellaneousOptions) -> bool {
        self.miscellaneous_options.contains(flag)
    }

    pub(crate) fn internal(&self, flag: CompilerInternalOptions) -> bool {
        self.compiler_internal_options.contains(flag)
    }
}
