//! merge-2048 (workspace facade crate).
//!
//! Re-exports the rules engine and shared types under `merge_2048::{core, types}` and hosts the
//! headless [`driver`] used by the default binary.

pub mod driver;

pub use merge_2048_core as core;
pub use merge_2048_types as types;
