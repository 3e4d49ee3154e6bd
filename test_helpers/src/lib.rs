//! Test helpers shared across the workspace.
//!
//! [`figment`] runs settings tests inside an isolated `figment::Jail`;
//! [`mappings`] builds small keyed fixtures for merge tests.

pub mod figment;
pub mod mappings;
