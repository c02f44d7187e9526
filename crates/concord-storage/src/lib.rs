//! # concord-storage
//!
//! `InMemoryStore` implements the Concord store traits over concurrent maps.
//! It backs tests and single-process deployments; any other document store
//! can stand in by implementing the same traits.

mod memory;

pub use memory::InMemoryStore;
