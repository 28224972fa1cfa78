//! Specialized collection types

pub use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable key naming one render primitive owned by a backend
    pub struct PrimitiveHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<PrimitiveHandle, T>;
