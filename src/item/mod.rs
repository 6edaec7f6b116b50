// Item module
//
// Items are plain names; the only item-level property the player cares
// about is whether eating it restores power.

pub mod registry;

// Re-export main types for convenient access
pub use registry::EdibleRegistry;
