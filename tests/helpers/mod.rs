// Test Helper Modules
//
// Shared fixtures for the revenue test targets:
// - test_data: the reservation seed as Rust values
// - memory_executor: in-memory QueryExecutor over that seed
// - test_database: real MySQL pool for #[ignore]d tests
//
// Usage (from a test target):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod test_data;
pub mod test_database;

pub use memory_executor::*;
pub use test_data::*;
pub use test_database::*;
