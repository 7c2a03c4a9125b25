//! Service layer providing business-oriented restaurant operations on top of models.
//! - Separates business logic from data access behind repository traits.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod restaurant;
#[cfg(test)]
pub mod test_support;
