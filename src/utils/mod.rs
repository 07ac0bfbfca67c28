//! Shared helpers for fixed-column records, template codes and paths.

pub mod columns;
pub mod validation;
