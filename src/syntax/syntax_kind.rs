//! Token kinds the display engine can emit.
//!
//! This enum covers every punctuation, operator and keyword token that can
//! appear in a rendered symbol. Ranges are laid out so that category checks
//! are simple discriminant comparisons.

/// All token kinds the engine emits.
///
/// Layout: punctuation, then operators, then reserved keywords, then
/// contextual keywords. `is_*` checks depend on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE = 0,        // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    DOT,                // .
    COMMA,              // ,
    COLON,              // :
    COLON_COLON,        // ::
    SEMICOLON,          // ;
    EQ,                 // =
    LT,                 // <
    GT,                 // >
    QUESTION,           // ?
    BANG,               // !
    STAR,               // *
    PIPE,               // |
    TILDE,              // ~

    // =========================================================================
    // OPERATORS (only used for user-defined operator names)
    // =========================================================================
    PLUS,               // +
    MINUS,              // -
    SLASH,              // /
    PERCENT,            // %
    AMP,                // &
    CARET,              // ^
    PLUS_PLUS,          // ++
    MINUS_MINUS,        // --
    LT_LT,              // <<
    GT_GT,              // >>
    GT_GT_GT,           // >>>
    EQ_EQ,              // ==
    BANG_EQ,            // !=
    LT_EQ,              // <=
    GT_EQ,              // >=

    // =========================================================================
    // KEYWORDS - reserved
    // =========================================================================
    ABSTRACT_KW,
    AS_KW,
    BASE_KW,
    BOOL_KW,
    BREAK_KW,
    BYTE_KW,
    CASE_KW,
    CATCH_KW,
    CHAR_KW,
    CHECKED_KW,
    CLASS_KW,
    CONST_KW,
    CONTINUE_KW,
    DECIMAL_KW,
    DEFAULT_KW,
    DELEGATE_KW,
    DO_KW,
    DOUBLE_KW,
    ELSE_KW,
    ENUM_KW,
    EVENT_KW,
    EXPLICIT_KW,
    EXTERN_KW,
    FALSE_KW,
    FINALLY_KW,
    FIXED_KW,
    FLOAT_KW,
    FOR_KW,
    FOREACH_KW,
    GOTO_KW,
    IF_KW,
    IMPLICIT_KW,
    IN_KW,
    INT_KW,
    INTERFACE_KW,
    INTERNAL_KW,
    IS_KW,
    LOCK_KW,
    LONG_KW,
    NAMESPACE_KW,
    NEW_KW,
    NULL_KW,
    OBJECT_KW,
    OPERATOR_KW,
    OUT_KW,
    OVERRIDE_KW,
    PARAMS_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    READONLY_KW,
    REF_KW,
    RETURN_KW,
    SBYTE_KW,
    SEALED_KW,
    SHORT_KW,
    SIZEOF_KW,
    STACKALLOC_KW,
    STATIC_KW,
    STRING_KW,
    STRUCT_KW,
    SWITCH_KW,
    THIS_KW,
    THROW_KW,
    TRUE_KW,
    TRY_KW,
    TYPEOF_KW,
    UINT_KW,
    ULONG_KW,
    UNCHECKED_KW,
    UNSAFE_KW,
    USHORT_KW,
    USING_KW,
    VIRTUAL_KW,
    VOID_KW,
    VOLATILE_KW,
    WHILE_KW,
    ARGLIST_KW,         // __arglist
    MAKEREF_KW,         // __makeref
    REFTYPE_KW,         // __reftype
    REFVALUE_KW,        // __refvalue

    // =========================================================================
    // KEYWORDS - contextual
    // =========================================================================
    ADD_KW,
    DYNAMIC_KW,
    GET_KW,
    GLOBAL_KW,
    INIT_KW,
    NOTNULL_KW,
    RECORD_KW,
    REMOVE_KW,
    SET_KW,
    UNMANAGED_KW,
    WHERE_KW,
}

impl SyntaxKind {
    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) <= (Self::TILDE as u16)
    }

    /// Check if this is an operator token
    pub fn is_operator(self) -> bool {
        (self as u16) >= (Self::PLUS as u16) && (self as u16) <= (Self::GT_EQ as u16)
    }

    /// Check if this is a keyword (reserved or contextual)
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16)
    }

    /// Check if this is a reserved keyword, i.e. one that can never be used
    /// as a plain identifier.
    pub fn is_reserved_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::REFVALUE_KW as u16)
    }

    /// Canonical source text of the token.
    pub fn text(self) -> &'static str {
        match self {
            Self::L_BRACE => "{",
            Self::R_BRACE => "}",
            Self::L_BRACKET => "[",
            Self::R_BRACKET => "]",
            Self::L_PAREN => "(",
            Self::R_PAREN => ")",
            Self::DOT => ".",
            Self::COMMA => ",",
            Self::COLON => ":",
            Self::COLON_COLON => "::",
            Self::SEMICOLON => ";",
            Self::EQ => "=",
            Self::LT => "<",
            Self::GT => ">",
            Self::QUESTION => "?",
            Self::BANG => "!",
            Self::STAR => "*",
            Self::PIPE => "|",
            Self::TILDE => "~",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::SLASH => "/",
            Self::PERCENT => "%",
            Self::AMP => "&",
            Self::CARET => "^",
            Self::PLUS_PLUS => "++",
            Self::MINUS_MINUS => "--",
            Self::LT_LT => "<<",
            Self::GT_GT => ">>",
            Self::GT_GT_GT => ">>>",
            Self::EQ_EQ => "==",
            Self::BANG_EQ => "!=",
            Self::LT_EQ => "<=",
            Self::GT_EQ => ">=",
            Self::ABSTRACT_KW => "abstract",
            Self::AS_KW => "as",
            Self::BASE_KW => "base",
            Self::BOOL_KW => "bool",
            Self::BREAK_KW => "break",
            Self::BYTE_KW => "byte",
            Self::CASE_KW => "case",
            Self::CATCH_KW => "catch",
            Self::CHAR_KW => "char",
            Self::CHECKED_KW => "checked",
            Self::CLASS_KW => "class",
            Self::CONST_KW => "const",
            Self::CONTINUE_KW => "continue",
            Self::DECIMAL_KW => "decimal",
            Self::DEFAULT_KW => "default",
            Self::DELEGATE_KW => "delegate",
            Self::DO_KW => "do",
            Self::DOUBLE_KW => "double",
            Self::ELSE_KW => "else",
            Self::ENUM_KW => "enum",
            Self::EVENT_KW => "event",
            Self::EXPLICIT_KW => "explicit",
            Self::EXTERN_KW => "extern",
            Self::FALSE_KW => "false",
            Self::FINALLY_KW => "finally",
            Self::FIXED_KW => "fixed",
            Self::FLOAT_KW => "float",
            Self::FOR_KW => "for",
            Self::FOREACH_KW => "foreach",
            Self::GOTO_KW => "goto",
            Self::IF_KW => "if",
            Self::IMPLICIT_KW => "implicit",
            Self::IN_KW => "in",
            Self::INT_KW => "int",
            Self::INTERFACE_KW => "interface",
            Self::INTERNAL_KW => "internal",
            Self::IS_KW => "is",
            Self::LOCK_KW => "lock",
            Self::LONG_KW => "long",
            Self::NAMESPACE_KW => "namespace",
            Self::NEW_KW => "new",
            Self::NULL_KW => "null",
            Self::OBJECT_KW => "object",
            Self::OPERATOR_KW => "operator",
            Self::OUT_KW => "out",
            Self::OVERRIDE_KW => "override",
            Self::PARAMS_KW => "params",
            Self::PRIVATE_KW => "private",
            Self::PROTECTED_KW => "protected",
            Self::PUBLIC_KW => "public",
            Self::READONLY_KW => "readonly",
            Self::REF_KW => "ref",
            Self::RETURN_KW => "return",
            Self::SBYTE_KW => "sbyte",
            Self::SEALED_KW => "sealed",
            Self::SHORT_KW => "short",
            Self::SIZEOF_KW => "sizeof",
            Self::STACKALLOC_KW => "stackalloc",
            Self::STATIC_KW => "static",
            Self::STRING_KW => "string",
            Self::STRUCT_KW => "struct",
            Self::SWITCH_KW => "switch",
            Self::THIS_KW => "this",
            Self::THROW_KW => "throw",
            Self::TRUE_KW => "true",
            Self::TRY_KW => "try",
            Self::TYPEOF_KW => "typeof",
            Self::UINT_KW => "uint",
            Self::ULONG_KW => "ulong",
            Self::UNCHECKED_KW => "unchecked",
            Self::UNSAFE_KW => "unsafe",
            Self::USHORT_KW => "ushort",
            Self::USING_KW => "using",
            Self::VIRTUAL_KW => "virtual",
            Self::VOID_KW => "void",
            Self::VOLATILE_KW => "volatile",
            Self::WHILE_KW => "while",
            Self::ARGLIST_KW => "__arglist",
            Self::MAKEREF_KW => "__makeref",
            Self::REFTYPE_KW => "__reftype",
            Self::REFVALUE_KW => "__refvalue",
            Self::ADD_KW => "add",
            Self::DYNAMIC_KW => "dynamic",
            Self::GET_KW => "get",
            Self::GLOBAL_KW => "global",
            Self::INIT_KW => "init",
            Self::NOTNULL_KW => "notnull",
            Self::RECORD_KW => "record",
            Self::REMOVE_KW => "remove",
            Self::SET_KW => "set",
            Self::UNMANAGED_KW => "unmanaged",
            Self::WHERE_KW => "where",
        }
    }
}
