//! Keyword lookup, reserved-word membership and operator metadata names.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::SyntaxKind;

static KEYWORDS: LazyLock<FxHashMap<&'static str, SyntaxKind>> =
    LazyLock::new(|| ALL_KEYWORDS.iter().map(|&kind| (kind.text(), kind)).collect());

const ALL_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::ABSTRACT_KW,
    SyntaxKind::AS_KW,
    SyntaxKind::BASE_KW,
    SyntaxKind::BOOL_KW,
    SyntaxKind::BREAK_KW,
    SyntaxKind::BYTE_KW,
    SyntaxKind::CASE_KW,
    SyntaxKind::CATCH_KW,
    SyntaxKind::CHAR_KW,
    SyntaxKind::CHECKED_KW,
    SyntaxKind::CLASS_KW,
    SyntaxKind::CONST_KW,
    SyntaxKind::CONTINUE_KW,
    SyntaxKind::DECIMAL_KW,
    SyntaxKind::DEFAULT_KW,
    SyntaxKind::DELEGATE_KW,
    SyntaxKind::DO_KW,
    SyntaxKind::DOUBLE_KW,
    SyntaxKind::ELSE_KW,
    SyntaxKind::ENUM_KW,
    SyntaxKind::EVENT_KW,
    SyntaxKind::EXPLICIT_KW,
    SyntaxKind::EXTERN_KW,
    SyntaxKind::FALSE_KW,
    SyntaxKind::FINALLY_KW,
    SyntaxKind::FIXED_KW,
    SyntaxKind::FLOAT_KW,
    SyntaxKind::FOR_KW,
    SyntaxKind::FOREACH_KW,
    SyntaxKind::GOTO_KW,
    SyntaxKind::IF_KW,
    SyntaxKind::IMPLICIT_KW,
    SyntaxKind::IN_KW,
    SyntaxKind::INT_KW,
    SyntaxKind::INTERFACE_KW,
    SyntaxKind::INTERNAL_KW,
    SyntaxKind::IS_KW,
    SyntaxKind::LOCK_KW,
    SyntaxKind::LONG_KW,
    SyntaxKind::NAMESPACE_KW,
    SyntaxKind::NEW_KW,
    SyntaxKind::NULL_KW,
    SyntaxKind::OBJECT_KW,
    SyntaxKind::OPERATOR_KW,
    SyntaxKind::OUT_KW,
    SyntaxKind::OVERRIDE_KW,
    SyntaxKind::PARAMS_KW,
    SyntaxKind::PRIVATE_KW,
    SyntaxKind::PROTECTED_KW,
    SyntaxKind::PUBLIC_KW,
    SyntaxKind::READONLY_KW,
    SyntaxKind::REF_KW,
    SyntaxKind::RETURN_KW,
    SyntaxKind::SBYTE_KW,
    SyntaxKind::SEALED_KW,
    SyntaxKind::SHORT_KW,
    SyntaxKind::SIZEOF_KW,
    SyntaxKind::STACKALLOC_KW,
    SyntaxKind::STATIC_KW,
    SyntaxKind::STRING_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::SWITCH_KW,
    SyntaxKind::THIS_KW,
    SyntaxKind::THROW_KW,
    SyntaxKind::TRUE_KW,
    SyntaxKind::TRY_KW,
    SyntaxKind::TYPEOF_KW,
    SyntaxKind::UINT_KW,
    SyntaxKind::ULONG_KW,
    SyntaxKind::UNCHECKED_KW,
    SyntaxKind::UNSAFE_KW,
    SyntaxKind::USHORT_KW,
    SyntaxKind::USING_KW,
    SyntaxKind::VIRTUAL_KW,
    SyntaxKind::VOID_KW,
    SyntaxKind::VOLATILE_KW,
    SyntaxKind::WHILE_KW,
    SyntaxKind::ARGLIST_KW,
    SyntaxKind::MAKEREF_KW,
    SyntaxKind::REFTYPE_KW,
    SyntaxKind::REFVALUE_KW,
    SyntaxKind::ADD_KW,
    SyntaxKind::DYNAMIC_KW,
    SyntaxKind::GET_KW,
    SyntaxKind::GLOBAL_KW,
    SyntaxKind::INIT_KW,
    SyntaxKind::NOTNULL_KW,
    SyntaxKind::RECORD_KW,
    SyntaxKind::REMOVE_KW,
    SyntaxKind::SET_KW,
    SyntaxKind::UNMANAGED_KW,
    SyntaxKind::WHERE_KW,
];

/// Contextual keywords that still need the `@` sigil when used as a
/// declared name.
const VERBATIM_EXCEPTIONS: &[SyntaxKind] = &[SyntaxKind::RECORD_KW];

/// Look up the keyword (reserved or contextual) spelled `text`.
pub fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(text).copied()
}

/// Whether `text` is a reserved keyword and can't be used as a bare
/// identifier.
pub fn is_reserved_word(text: &str) -> bool {
    keyword_kind(text).is_some_and(SyntaxKind::is_reserved_keyword)
}

/// Whether a declared name spelled `text` must be written `@text`.
pub fn needs_verbatim_escape(text: &str) -> bool {
    match keyword_kind(text) {
        Some(kind) => kind.is_reserved_keyword() || VERBATIM_EXCEPTIONS.contains(&kind),
        None => false,
    }
}

/// Map an operator's metadata name to the token that follows `operator`.
///
/// `op_True`/`op_False` map to keywords, `op_Implicit`/`op_Explicit` to the
/// conversion keywords. Unknown names yield `None`.
pub fn operator_kind(metadata_name: &str) -> Option<SyntaxKind> {
    let kind = match metadata_name {
        "op_Addition" | "op_UnaryPlus" => SyntaxKind::PLUS,
        "op_Subtraction" | "op_UnaryNegation" => SyntaxKind::MINUS,
        "op_Multiply" => SyntaxKind::STAR,
        "op_Division" => SyntaxKind::SLASH,
        "op_Modulus" => SyntaxKind::PERCENT,
        "op_BitwiseAnd" => SyntaxKind::AMP,
        "op_BitwiseOr" => SyntaxKind::PIPE,
        "op_ExclusiveOr" => SyntaxKind::CARET,
        "op_LeftShift" => SyntaxKind::LT_LT,
        "op_RightShift" => SyntaxKind::GT_GT,
        "op_UnsignedRightShift" => SyntaxKind::GT_GT_GT,
        "op_Equality" => SyntaxKind::EQ_EQ,
        "op_Inequality" => SyntaxKind::BANG_EQ,
        "op_LessThan" => SyntaxKind::LT,
        "op_GreaterThan" => SyntaxKind::GT,
        "op_LessThanOrEqual" => SyntaxKind::LT_EQ,
        "op_GreaterThanOrEqual" => SyntaxKind::GT_EQ,
        "op_LogicalNot" => SyntaxKind::BANG,
        "op_OnesComplement" => SyntaxKind::TILDE,
        "op_Increment" => SyntaxKind::PLUS_PLUS,
        "op_Decrement" => SyntaxKind::MINUS_MINUS,
        "op_True" => SyntaxKind::TRUE_KW,
        "op_False" => SyntaxKind::FALSE_KW,
        "op_Implicit" => SyntaxKind::IMPLICIT_KW,
        "op_Explicit" => SyntaxKind::EXPLICIT_KW,
        _ => return None,
    };
    Some(kind)
}

/// Token text for an operator metadata name.
pub fn operator_token(metadata_name: &str) -> Option<&'static str> {
    operator_kind(metadata_name).map(SyntaxKind::text)
}
