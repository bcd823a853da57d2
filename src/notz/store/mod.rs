//! # Storage Layer
//!
//! This module defines the storage abstraction for notz. The [`Storage`]
//! trait allows the note store to work with different durable backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! The interface is deliberately a key-value seam over opaque bytes:
//! the note store serializes the whole collection itself and hands the
//! backend a finished snapshot. Every write is a full overwrite of the
//! key, never an append or a delta.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON file per key: `<key>.json` under a root directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Fixed key the full note collection snapshot lives under.
pub const NOTES_KEY: &str = "notes";

/// Abstract interface for durable key-value storage.
///
/// `load` distinguishes "key absent" (`Ok(None)`) from backend failure
/// (`Err`); callers that fail open treat both the same way.
pub trait Storage {
    /// Read the bytes stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `bytes` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}
