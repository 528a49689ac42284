//! Session tracking state: mode flags and the box store.

pub mod flags;
pub mod store;

pub use flags::{ObjectType, TrackingFlags};
pub use store::BoxStore;
