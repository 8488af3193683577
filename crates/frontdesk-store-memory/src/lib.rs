//! Volatile in-process backend for the frontdesk record store.
//!
//! Contents live for the process lifetime only; restarts start empty. The
//! durable alternative is `frontdesk-store-sqlite`, which satisfies the
//! same [`RecordStore`](frontdesk_core::store::RecordStore) contract.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
