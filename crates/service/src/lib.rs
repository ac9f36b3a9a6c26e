//! Service layer for the portfolio site.
//! - Separates resolution/fallback rules from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod catalog;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
