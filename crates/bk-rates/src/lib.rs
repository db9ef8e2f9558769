//! `bk-rates` — the rate model.
//!
//! One measured sample per activity type is enough to price every action the
//! scheduler can take:
//!
//! ```text
//! train:   rate[s]   = duration / capacity              (s = sampled level)
//!          rate[L+1] = rate[L] * (L+2)/(L+1)            (upwards to max level)
//!          rate[L-1] = rate[L] * L/(L+1)                (downwards to level 1)
//!          cost      = rate[L] * count
//!
//! promote: cost      = count * levels * (duration / capacity)
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`sample`]   | `TrainSample`, `PromoteSample`             |
//! | [`table`]    | `RateTable`, `PromotionRate`               |
//! | [`error`]    | `RateError`, `RateResult<T>`               |

pub mod error;
pub mod sample;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{RateError, RateResult};
pub use sample::{PromoteSample, TrainSample};
pub use table::{PromotionRate, RateTable};
