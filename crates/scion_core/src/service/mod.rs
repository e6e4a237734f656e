//! Use-case services orchestrating mapping and persistence.
//!
//! # Responsibility
//! - Expose the import entry points used by the CLI.
//! - Keep services storage-agnostic by writing through `EntitySink`.

pub mod import_service;
