//! Constant values: literals, `null`/`default`, enum members and flag
//! combinations.

use crate::base::Name;
use crate::display::error::DisplayError;
use crate::display::format::MiscellaneousOptions;
use crate::display::literal::{format_constant, LiteralOptions};
use crate::display::parts::DisplayPartKind;
use crate::model::{ConstantValue, SymbolId, SymbolKind, TypeKind, TypeRef};
use crate::syntax::SyntaxKind;

use super::{DisplayVisitor, VisitMode};

/// An enum member with its value widened to 64 bits.
struct EnumField<'g> {
    id: SymbolId,
    name: &'g Name,
    bits: u64,
}

impl<'a> DisplayVisitor<'a> {
    /// Render `value` as a constant of type `ty`.
    ///
    /// With `prefer_numeric`, enum values show as numbers (or, for flags
    /// enums, as the expanded member combination) instead of the member
    /// that holds exactly that value.
    pub(super) fn add_constant_value(
        &mut self,
        ty: &TypeRef,
        value: &ConstantValue,
        prefer_numeric: bool,
    ) -> Result<(), DisplayError> {
        let graph = self.graph;
        if value.is_null() {
            let is_pointer = matches!(graph[ty.ty].kind, SymbolKind::PointerType(_));
            if graph.is_reference_type(ty.ty) || is_pointer || graph.is_nullable_type(ty.ty) {
                self.keyword(SyntaxKind::NULL_KW);
            } else {
                self.keyword(SyntaxKind::DEFAULT_KW);
                if !self.format.misc(MiscellaneousOptions::ALLOW_DEFAULT_LITERAL) {
                    self.punct(SyntaxKind::L_PAREN);
                    self.visit(ty.ty, VisitMode::NOT_FIRST)?;
                    self.punct(SyntaxKind::R_PAREN);
                }
            }
            return Ok(());
        }

        let is_enum = graph[ty.ty].as_named_type().is_some_and(|t| t.type_kind == TypeKind::Enum);
        if is_enum {
            return self.add_enum_constant_value(ty.ty, value, prefer_numeric);
        }
        self.add_literal_value(value);
        Ok(())
    }

    fn add_literal_value(&mut self, value: &ConstantValue) {
        let text = format_constant(value, LiteralOptions::USE_QUOTES | LiteralOptions::ESCAPE_NON_PRINTABLE);
        let kind = match value {
            ConstantValue::Bool(_) => DisplayPartKind::Keyword,
            ConstantValue::String(_) | ConstantValue::Char(_) => DisplayPartKind::StringLiteral,
            _ => DisplayPartKind::NumericLiteral,
        };
        self.builder.push(kind, None, &text);
    }

    /// `(E)3` for a value no member (combination) represents.
    fn add_explicitly_cast_literal(&mut self, enum_type: SymbolId, value: &ConstantValue) -> Result<(), DisplayError> {
        self.punct(SyntaxKind::L_PAREN);
        self.visit(enum_type, VisitMode::NOT_FIRST)?;
        self.punct(SyntaxKind::R_PAREN);
        self.add_literal_value(value);
        Ok(())
    }

    fn add_enum_constant_value(
        &mut self,
        enum_type: SymbolId,
        value: &ConstantValue,
        prefer_numeric: bool,
    ) -> Result<(), DisplayError> {
        let graph = self.graph;
        let Some(bits) = value.integral_bits() else {
            self.add_literal_value(value);
            return Ok(());
        };
        let is_flags = graph[graph.original_definition(enum_type)].as_named_type().is_some_and(|t| t.is_flags);
        let fields = self.sorted_enum_fields(enum_type);

        if is_flags {
            return self.add_flags_enum_constant_value(enum_type, value, bits, &fields, prefer_numeric);
        }
        if prefer_numeric {
            self.add_literal_value(value);
            return Ok(());
        }

        // Fields are sorted by name within equal values, so the first hit
        // is the alphabetically first alias.
        match fields.iter().find(|field| field.bits == bits) {
            Some(field) => self.visit(field.id, VisitMode::NOT_FIRST),
            None => self.add_explicitly_cast_literal(enum_type, value),
        }
    }

    fn add_flags_enum_constant_value(
        &mut self,
        enum_type: SymbolId,
        value: &ConstantValue,
        bits: u64,
        fields: &[EnumField<'_>],
        prefer_numeric: bool,
    ) -> Result<(), DisplayError> {
        let mut result = 0u64;
        let mut used = Vec::new();

        if bits != 0 {
            for field in fields {
                // The member holding exactly this value would hide its
                // constituent flags.
                if prefer_numeric && field.bits == bits {
                    continue;
                }
                if field.bits != 0 && bits & field.bits == field.bits {
                    used.push(field.id);
                    result |= field.bits;
                    if result == bits {
                        break;
                    }
                }
            }
        }

        if result == bits && !used.is_empty() {
            tracing::trace!("[DISPLAY] Flags value {:#x} decomposed into {} member(s)", bits, used.len());
            for (index, &field) in used.iter().rev().enumerate() {
                if index > 0 {
                    self.space();
                    self.punct(SyntaxKind::PIPE);
                    self.space();
                }
                self.visit(field, VisitMode::NOT_FIRST)?;
            }
            return Ok(());
        }

        if prefer_numeric {
            self.add_literal_value(value);
            return Ok(());
        }
        if bits == 0 {
            if let Some(zero) = fields.iter().find(|field| field.bits == 0) {
                return self.visit(zero.id, VisitMode::NOT_FIRST);
            }
        }
        self.add_explicitly_cast_literal(enum_type, value)
    }

    /// Constant-valued members, by unsigned 64-bit value descending and
    /// then by name. Negative members sign-extend, so `-1` sorts first.
    fn sorted_enum_fields(&self, enum_type: SymbolId) -> Vec<EnumField<'a>> {
        let graph = self.graph;
        let mut fields: Vec<EnumField<'a>> = graph
            .enum_fields(enum_type)
            .filter_map(|(id, name, constant)| Some(EnumField { id, name, bits: constant.integral_bits()? }))
            .collect();
        fields.sort_by(|a, b| b.bits.cmp(&a.bits).then_with(|| a.name.cmp(b.name)));
        fields
    }
}
