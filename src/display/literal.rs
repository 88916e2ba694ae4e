//! Literal formatting for primitive values.
//!
//! All output is culture-invariant. Strings are processed as UTF-16 code
//! units so that unpaired surrogates survive and escape exactly like the
//! modeled language prints them.
//!
//! ```text
//! "a\tb"   escaped   → "a\tb"
//! "a\nb"   quoted    → @"a
//!                       b"
//! -1i8     hex       → 0xffffffff
//! 1e15f64            → 1E+15
//! ```

use std::any::Any;
use std::fmt::Write as _;

use bitflags::bitflags;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::model::{ConstantValue, Decimal};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LiteralOptions: u8 {
        const USE_QUOTES = 1 << 0;
        const ESCAPE_NON_PRINTABLE = 1 << 1;
        const USE_HEXADECIMAL_NUMBERS = 1 << 2;
        const INCLUDE_TYPE_SUFFIX = 1 << 3;
        const INCLUDE_CODE_POINTS = 1 << 4;
    }
}

const NULL_LITERAL: &str = "null";

/// Format a string literal, always escaping non-printable characters.
pub fn format_literal(value: &str, quote: bool) -> String {
    let units: Vec<u16> = value.encode_utf16().collect();
    format_string(&units, escaping_options(quote))
}

/// Format a character literal, always escaping non-printable characters.
pub fn format_literal_char(value: char, quote: bool) -> String {
    format_code_point(u32::from(value), escaping_options(quote))
}

fn escaping_options(quote: bool) -> LiteralOptions {
    if quote {
        LiteralOptions::ESCAPE_NON_PRINTABLE | LiteralOptions::USE_QUOTES
    } else {
        LiteralOptions::ESCAPE_NON_PRINTABLE
    }
}

/// Format a runtime value of one of the supported primitive types.
///
/// `None` formats as `null`. Returns `None` for any value whose type is
/// not supported.
pub fn format_primitive(value: Option<&dyn Any>, options: LiteralOptions) -> Option<String> {
    let Some(value) = value else {
        return Some(NULL_LITERAL.to_string());
    };

    macro_rules! try_format {
        ($($ty:ty => $format:expr),* $(,)?) => {
            $(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return Some($format(v));
                }
            )*
        };
    }

    try_format! {
        bool => |v: &bool| format_bool(*v),
        char => |v: &char| format_code_point(u32::from(*v), options),
        String => |v: &String| format_literal_str(v, options),
        &str => |v: &&str| format_literal_str(v, options),
        i8 => |v: &i8| format_integer(i128::from(*v), IntegerWidth::I8, options),
        u8 => |v: &u8| format_integer(i128::from(*v), IntegerWidth::U8, options),
        i16 => |v: &i16| format_integer(i128::from(*v), IntegerWidth::I16, options),
        u16 => |v: &u16| format_integer(i128::from(*v), IntegerWidth::U16, options),
        i32 => |v: &i32| format_integer(i128::from(*v), IntegerWidth::I32, options),
        u32 => |v: &u32| format_integer(i128::from(*v), IntegerWidth::U32, options),
        i64 => |v: &i64| format_integer(i128::from(*v), IntegerWidth::I64, options),
        u64 => |v: &u64| format_integer(i128::from(*v), IntegerWidth::U64, options),
        f32 => |v: &f32| format_f32(*v, options),
        f64 => |v: &f64| format_f64(*v, options),
        Decimal => |v: &Decimal| format_decimal(v, options),
        ConstantValue => |v: &ConstantValue| format_constant(v, options),
    }

    None
}

/// Format a model constant.
pub fn format_constant(value: &ConstantValue, options: LiteralOptions) -> String {
    match value {
        ConstantValue::Null => NULL_LITERAL.to_string(),
        ConstantValue::Bool(v) => format_bool(*v),
        ConstantValue::Char(unit) => format_code_point(u32::from(*unit), options),
        ConstantValue::String(v) => format_literal_str(v, options),
        ConstantValue::I8(v) => format_integer(i128::from(*v), IntegerWidth::I8, options),
        ConstantValue::U8(v) => format_integer(i128::from(*v), IntegerWidth::U8, options),
        ConstantValue::I16(v) => format_integer(i128::from(*v), IntegerWidth::I16, options),
        ConstantValue::U16(v) => format_integer(i128::from(*v), IntegerWidth::U16, options),
        ConstantValue::I32(v) => format_integer(i128::from(*v), IntegerWidth::I32, options),
        ConstantValue::U32(v) => format_integer(i128::from(*v), IntegerWidth::U32, options),
        ConstantValue::I64(v) => format_integer(i128::from(*v), IntegerWidth::I64, options),
        ConstantValue::U64(v) => format_integer(i128::from(*v), IntegerWidth::U64, options),
        ConstantValue::F32(v) => format_f32(*v, options),
        ConstantValue::F64(v) => format_f64(*v, options),
        ConstantValue::Decimal(v) => format_decimal(v, options),
    }
}

fn format_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

fn format_literal_str(value: &str, options: LiteralOptions) -> String {
    let units: Vec<u16> = value.encode_utf16().collect();
    format_string(&units, options)
}

// ============================================================================
// STRINGS AND CHARACTERS
// ============================================================================

/// Format UTF-16 text as a string literal.
pub fn format_string(units: &[u16], options: LiteralOptions) -> String {
    let use_quotes = options.contains(LiteralOptions::USE_QUOTES);
    let escape = options.contains(LiteralOptions::ESCAPE_NON_PRINTABLE);
    let verbatim = use_quotes && !escape && units.iter().copied().any(is_newline);

    let mut out = String::with_capacity(units.len() + 3);
    if verbatim {
        out.push('@');
    }
    if use_quotes {
        out.push('"');
    }

    let mut index = 0;
    while index < units.len() {
        let unit = units[index];
        index += 1;

        if is_surrogate(unit) {
            let pair = units.get(index).and_then(|&low| combine_surrogates(unit, low));
            match pair {
                Some(code_point) => {
                    index += 1;
                    if escape && needs_escaping(code_point) {
                        let _ = write!(out, "\\U{code_point:08x}");
                    } else if let Some(c) = char::from_u32(code_point) {
                        out.push(c);
                    }
                }
                // A lone surrogate has no `char`; it is always escaped.
                None => {
                    let _ = write!(out, "\\u{unit:04x}");
                }
            }
            continue;
        }

        let code_point = u32::from(unit);
        if escape {
            if let Some(replacement) = replacement(code_point) {
                out.push_str(&replacement);
                continue;
            }
        }
        if use_quotes && unit == u16::from(b'"') {
            out.push_str(if verbatim { "\"\"" } else { "\\\"" });
            continue;
        }
        push_code_point(&mut out, code_point);
    }

    if use_quotes {
        out.push('"');
    }
    out
}

/// Format a single character literal given its code point.
pub fn format_code_point(code_point: u32, options: LiteralOptions) -> String {
    let use_quotes = options.contains(LiteralOptions::USE_QUOTES);
    let mut out = String::with_capacity(8);

    if options.contains(LiteralOptions::INCLUDE_CODE_POINTS) {
        if options.contains(LiteralOptions::USE_HEXADECIMAL_NUMBERS) {
            let _ = write!(out, "0x{code_point:04x} ");
        } else {
            let _ = write!(out, "{code_point} ");
        }
    }
    if use_quotes {
        out.push('\'');
    }

    let replaced = options
        .contains(LiteralOptions::ESCAPE_NON_PRINTABLE)
        .then(|| replacement(code_point))
        .flatten();
    match replaced {
        Some(replacement) => out.push_str(&replacement),
        None if use_quotes && code_point == u32::from(b'\'') => out.push_str("\\'"),
        None => push_code_point(&mut out, code_point),
    }

    if use_quotes {
        out.push('\'');
    }
    out
}

/// Short escape or `\u`/`\U` form for a code point that must not be
/// printed raw.
fn replacement(code_point: u32) -> Option<String> {
    let short = match code_point {
        0x5C => "\\\\",
        0x00 => "\\0",
        0x07 => "\\a",
        0x08 => "\\b",
        0x0C => "\\f",
        0x0A => "\\n",
        0x0D => "\\r",
        0x09 => "\\t",
        0x0B => "\\v",
        _ if needs_escaping(code_point) => {
            return Some(if code_point > 0xFFFF {
                format!("\\U{code_point:08x}")
            } else {
                format!("\\u{code_point:04x}")
            });
        }
        _ => return None,
    };
    Some(short.to_string())
}

/// Whether the character's general category is one that never prints.
pub fn needs_escaping(code_point: u32) -> bool {
    let Some(c) = char::from_u32(code_point) else {
        return true;
    };
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Unassigned
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::Surrogate
    )
}

fn push_code_point(out: &mut String, code_point: u32) {
    match char::from_u32(code_point) {
        Some(c) => out.push(c),
        None => {
            let _ = write!(out, "\\u{code_point:04x}");
        }
    }
}

fn is_newline(unit: u16) -> bool {
    matches!(unit, 0x0A | 0x0D | 0x85 | 0x2028 | 0x2029)
}

fn is_surrogate(unit: u16) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

fn combine_surrogates(high: u16, low: u16) -> Option<u32> {
    let high_ok = (0xD800..=0xDBFF).contains(&high);
    let low_ok = (0xDC00..=0xDFFF).contains(&low);
    (high_ok && low_ok).then(|| 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00))
}

// ============================================================================
// NUMBERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntegerWidth {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl IntegerWidth {
    fn hex_digits(self) -> usize {
        match self {
            IntegerWidth::I8 | IntegerWidth::U8 => 2,
            IntegerWidth::I16 | IntegerWidth::U16 => 4,
            IntegerWidth::I32 | IntegerWidth::U32 => 8,
            IntegerWidth::I64 | IntegerWidth::U64 => 16,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            IntegerWidth::U32 => "U",
            IntegerWidth::I64 => "L",
            IntegerWidth::U64 => "UL",
            _ => "",
        }
    }
}

fn format_integer(value: i128, width: IntegerWidth, options: LiteralOptions) -> String {
    let mut out = if options.contains(LiteralOptions::USE_HEXADECIMAL_NUMBERS) {
        let narrow_negative = value < 0 && matches!(width, IntegerWidth::I8 | IntegerWidth::I16);
        // Negative 8- and 16-bit values print as their 32-bit pattern.
        let digits = if narrow_negative { 8 } else { width.hex_digits() };
        let mask = (1u128 << (digits * 4)) - 1;
        format!("0x{:0digits$x}", (value as u128) & mask)
    } else {
        value.to_string()
    };
    if options.contains(LiteralOptions::INCLUDE_TYPE_SUFFIX) {
        out.push_str(width.suffix());
    }
    out
}

fn format_f64(value: f64, options: LiteralOptions) -> String {
    let mut out = format_float(value, format!("{value:e}"), 15);
    if options.contains(LiteralOptions::INCLUDE_TYPE_SUFFIX) {
        out.push('D');
    }
    out
}

fn format_f32(value: f32, options: LiteralOptions) -> String {
    let mut out = format_float(f64::from(value), format!("{value:e}"), 7);
    if options.contains(LiteralOptions::INCLUDE_TYPE_SUFFIX) {
        out.push('F');
    }
    out
}

fn format_decimal(value: &Decimal, options: LiteralOptions) -> String {
    let mut out = value.to_string();
    if options.contains(LiteralOptions::INCLUDE_TYPE_SUFFIX) {
        out.push('M');
    }
    out
}

/// Render the shortest round-trip digits in `scientific` (Rust `{:e}`
/// output) either positionally or as `d.dddE+XX`.
fn format_float(value: f64, scientific: String, max_positional_exponent: i32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if negative { "-" } else { "" };

    if digits.bytes().all(|b| b == b'0') {
        return format!("{sign}0");
    }

    if exponent >= max_positional_exponent || exponent < -4 {
        let (first, rest) = digits.split_at(1);
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        let fraction = if rest.is_empty() { String::new() } else { format!(".{rest}") };
        return format!("{sign}{first}{fraction}E{exponent_sign}{:02}", exponent.abs());
    }

    let point = exponent + 1;
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        format!("{sign}0.{zeros}{digits}")
    } else {
        let point = point as usize;
        if digits.len() <= point {
            format!("{sign}{digits}{}", "0".repeat(point - digits.len()))
        } else {
            let (int_part, frac_part) = digits.split_at(point);
            format!("{sign}{int_part}.{frac_part}")
        }
    }
}
