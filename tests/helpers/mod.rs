//! Shared helpers for integration tests.

pub mod part_assertions;
