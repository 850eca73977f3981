//! Store layer for the CSR data core.
//!
//! The canonical in-memory copy of all collections lives in a [`Database`]
//! value that is explicitly constructed and passed around (no module-global
//! state). Durability is a single JSON snapshot blob holding every collection
//! plus a `nextIds` counter object, written through a [`SnapshotBackend`].
//!
//! # Modules
//!
//! - [`error`]: [`StoreError`] with all failure modes
//! - [`database`]: the [`Database`] aggregate, counters, blob encode/decode
//! - [`seed`]: the fixed fallback dataset
//! - [`snapshot`]: [`SnapshotBackend`] trait, file and in-memory backends,
//!   [`load_or_seed`]

pub mod database;
pub mod error;
pub mod seed;
pub mod snapshot;

pub use database::{Database, NextIds};
pub use error::StoreError;
pub use snapshot::{decode_or_seed, load_or_seed, FileBackend, MemoryBackend, SnapshotBackend};
