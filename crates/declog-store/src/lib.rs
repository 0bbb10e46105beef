//! Persistence and state management for the decision journal.

pub mod blob;
pub mod error;
pub mod journal;
pub mod lockfile;
pub mod observer;
pub mod persistence;
pub mod store;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::StoreError;
pub use journal::Journal;
pub use observer::{Observers, Subscription};
pub use persistence::Persistence;
pub use store::{Filter, State, Stats, Store};
