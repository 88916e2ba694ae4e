//! Compile-time constant values.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::SpecialType;

/// A constant attached to a field, local or parameter default.
///
/// `Char` is a single UTF-16 code unit, so lone surrogates are
/// representable.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Char(u16),
    String(String),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
}

impl ConstantValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConstantValue::Null)
    }

    /// Raw bit pattern of an integral value, sign-extended to 64 bits.
    pub fn integral_bits(&self) -> Option<u64> {
        self.integral_value().map(|v| v as u64)
    }

    /// Numeric value of an integral constant.
    pub fn integral_value(&self) -> Option<i128> {
        let value = match *self {
            ConstantValue::I8(v) => i128::from(v),
            ConstantValue::U8(v) => i128::from(v),
            ConstantValue::I16(v) => i128::from(v),
            ConstantValue::U16(v) => i128::from(v),
            ConstantValue::I32(v) => i128::from(v),
            ConstantValue::U32(v) => i128::from(v),
            ConstantValue::I64(v) => i128::from(v),
            ConstantValue::U64(v) => i128::from(v),
            ConstantValue::Char(v) => i128::from(v),
            _ => return None,
        };
        Some(value)
    }

    /// The special type a value of this variant naturally has.
    pub fn special_type(&self) -> Option<SpecialType> {
        let special = match self {
            ConstantValue::Null => return None,
            ConstantValue::Bool(_) => SpecialType::Boolean,
            ConstantValue::Char(_) => SpecialType::Char,
            ConstantValue::String(_) => SpecialType::String,
            ConstantValue::I8(_) => SpecialType::SByte,
            ConstantValue::U8(_) => SpecialType::Byte,
            ConstantValue::I16(_) => SpecialType::Int16,
            ConstantValue::U16(_) => SpecialType::UInt16,
            ConstantValue::I32(_) => SpecialType::Int32,
            ConstantValue::U32(_) => SpecialType::UInt32,
            ConstantValue::I64(_) => SpecialType::Int64,
            ConstantValue::U64(_) => SpecialType::UInt64,
            ConstantValue::F32(_) => SpecialType::Single,
            ConstantValue::F64(_) => SpecialType::Double,
            ConstantValue::Decimal(_) => SpecialType::Decimal,
        };
        Some(special)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_string())
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Bool(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::I32(value)
    }
}

// ============================================================================
// DECIMAL
// ============================================================================

const DECIMAL_MAX_MANTISSA: u128 = (1 << 96) - 1;
const DECIMAL_MAX_SCALE: u8 = 28;

/// A 96-bit scaled decimal. Formatting keeps trailing zeros, so `1.50`
/// stays `1.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    mantissa: u128,
    scale: u8,
    negative: bool,
}

impl Decimal {
    /// `value / 10^scale`; `None` when out of range.
    pub fn new(value: i128, scale: u8) -> Option<Self> {
        let mantissa = value.unsigned_abs();
        if mantissa > DECIMAL_MAX_MANTISSA || scale > DECIMAL_MAX_SCALE {
            return None;
        }
        Some(Self { mantissa, scale, negative: value < 0 })
    }

    pub fn mantissa(&self) -> u128 {
        self.mantissa
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_negative(&self) -> bool {
        self.negative && self.mantissa != 0
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.to_string();
        let scale = usize::from(self.scale);
        if self.is_negative() {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{int_part}.{frac_part}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDecimalError {
    #[error("invalid decimal literal: {0:?}")]
    Invalid(String),
    #[error("decimal literal out of range: {0:?}")]
    OutOfRange(String),
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(ParseDecimalError::Invalid(s.to_string()));
        }
        let scale = u8::try_from(frac_part.len()).map_err(|_| ParseDecimalError::OutOfRange(s.to_string()))?;
        let mantissa: u128 = format!("{int_part}{frac_part}")
            .parse()
            .map_err(|_| ParseDecimalError::OutOfRange(s.to_string()))?;
        if mantissa > DECIMAL_MAX_MANTISSA || scale > DECIMAL_MAX_SCALE {
            return Err(ParseDecimalError::OutOfRange(s.to_string()));
        }
        Ok(Self { mantissa, scale, negative })
    }
}
