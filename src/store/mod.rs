//! Record storage for workers and attendance.
//!
//! [`RecordStore`] is the read contract the engine depends on; durable
//! storage lives outside this crate and implements it. [`MemoryStore`] is a
//! complete in-process implementation with change notifications.

mod memory;
mod traits;

pub use memory::{MemoryStore, StoreEvent};
pub use traits::RecordStore;
