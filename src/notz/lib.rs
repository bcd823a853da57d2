//! # Notz Architecture
//!
//! Notz is a **UI-agnostic note-keeping library**. This is not a CLI application that happens
//! to have some library code—it's a library that happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Note Store (notes.rs)                                      │
//! │  - Owns the ordered note collection                         │
//! │  - Applies mutations, derives filtered views                │
//! │  - Persists a full snapshot after every mutation            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Storage trait (opaque bytes under a key)        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `notes.rs` inward (store core, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<...>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a GUI, a sync daemon, or any other UI.
//!
//! ## Fail-Open Policy
//!
//! Notz is a non-critical local tool, and the core degrades rather than
//! aborts: creating a note with blank text does nothing, editing or
//! archiving an unknown id does nothing, and a missing or corrupt
//! snapshot on disk opens as an empty collection. None of these surface
//! as errors to callers. The only `Err` the store ever returns comes
//! from the storage backend failing to write a snapshot.
//!
//! ## Module Overview
//!
//! - [`notes`]: The note store—entry point for all operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `Section`)
//! - [`id`]: Identifier generation seam
//! - [`logging`]: File logging bootstrap for the binary
//! - [`error`]: Error types

pub mod error;
pub mod id;
pub mod logging;
pub mod model;
pub mod notes;
pub mod store;
