//! Display engine tests
//!
//! End-to-end renderings of symbol graphs:
//! - Types: qualification, generics, nullable, tuples, arrays, delegates
//! - Members: methods, operators, properties, events, fields, locals
//! - Constants: literals, null/default, enum members and flags
//! - Minimal qualification: aliases, shadowing, imports
//! - Literals: scenarios and escaping properties
//! - Concurrency: pooled builders under parallel load

pub mod tests_constants;
pub mod tests_minimal;
pub mod tests_types;
