//! act-store - Durable session and alert storage for the ACT client.
//!
//! Provides the file-backed store used by the CLI (a single JSON document
//! holding tokens and price alerts under fixed keys) and an in-memory store
//! for tests and embedding.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
