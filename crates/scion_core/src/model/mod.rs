//! Domain model for Scion genealogy imports.
//!
//! # Responsibility
//! - Mirror the raw export document shape (`document`).
//! - Define the composite date and its normalizer (`date`).
//! - Define the flat rows written to storage (`row`).
//!
//! # Invariants
//! - Every imported record keeps its externally assigned stable ID.
//! - Nothing here performs I/O.

pub mod date;
pub mod document;
pub mod row;
