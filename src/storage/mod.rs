//! Persistence for the HR portal.
//!
//! The portal's state is three named collections held in a key-value medium
//! and read/written wholesale. [`KeyValueStore`] is the medium seam;
//! [`PortalStore`] is the typed collection layer on top.
//!
//! Writes are last-write-wins per collection. Two processes sharing one data
//! directory overwrite each other's changes.

mod backend;
mod portal_store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use portal_store::{ADMIN_TOKEN_KEY, EMPLOYEES_KEY, LEAVE_REQUESTS_KEY, PortalStore};
