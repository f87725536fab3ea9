//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters translate between domain types and transport representations.
//! They contain no business logic.

pub mod dummyjson;
