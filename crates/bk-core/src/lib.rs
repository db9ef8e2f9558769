//! `bk-core` — foundational types for the barracks pipeline simulator.
//!
//! This crate is a dependency of every other `bk-*` crate.  It has no `bk-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ProducerId`, `ActivityId`                            |
//! | [`level`]       | `Level`, `RAW_LEVEL`, `MIN_LEVEL`, `MAX_LEVEL`        |
//! | [`time`]        | `SimTime`, `parse_duration`, `format_duration`        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod level;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ActivityId, ProducerId};
pub use level::{Level, MAX_LEVEL, MIN_LEVEL, RAW_LEVEL};
pub use time::{SimTime, format_duration, parse_duration};
