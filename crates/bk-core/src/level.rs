//! Troop levels.
//!
//! Level `0` is raw, untrained input.  Producers and trained inventory live at
//! levels `MIN_LEVEL..=MAX_LEVEL`.

/// A troop or producer level.
pub type Level = u32;

/// Raw input: units that have not been trained yet.
pub const RAW_LEVEL: Level = 0;

/// Lowest level a producer can have.
pub const MIN_LEVEL: Level = 1;

/// Highest level a producer can have.
pub const MAX_LEVEL: Level = 10;
