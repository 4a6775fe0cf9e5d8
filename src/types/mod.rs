//! Core type definitions using newtype patterns for type safety.
//!
//! Depths and ranges are distinct types so the two halves of a
//! `depth: range` line cannot be swapped, and a zero range cannot exist.

mod firewall;
mod layer;

pub use firewall::Firewall;
pub use layer::{Depth, Layer, Range};
