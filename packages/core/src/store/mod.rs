//! Store Layer
//!
//! Contracts for the two external document stores the editing pipelines
//! consume, plus an in-memory reference implementation:
//!
//! - `ElementStore` - element reads and targeted partial updates
//! - `ContentTypeRegistry` - read access to the set of known content types
//! - `MemoryStore` - `RwLock`-backed implementation for tests and embedders
//!
//! Persistence details (transactions, real backends) belong to the host;
//! this crate only depends on the trait surface.

mod content_type_store;
mod element_store;
mod error;
mod memory;

pub use content_type_store::ContentTypeRegistry;
pub use element_store::ElementStore;
pub use error::StoreError;
pub use memory::MemoryStore;
