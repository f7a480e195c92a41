//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Owns the image file lifecycle tied to owner records.

pub mod errors;
pub mod assets;
pub mod rooms;
pub mod owners;
pub mod reviews;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
