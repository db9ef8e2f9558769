//! Training target-level policy.

use std::fmt;
use std::str::FromStr;

use bk_core::{Level, MIN_LEVEL};
use bk_schedule::Producer;

use crate::SimError;

/// Where freshly trained units land.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum TrainStrategy {
    /// Train one level below the lowest producer, then promote upwards.
    /// Clamped to level 1 when the lowest producer is already level 1.
    MinLevelMinusOne,
    /// Train directly at the producer's own level.
    MaxBarracksLevel,
}

impl TrainStrategy {
    pub const ALL: [TrainStrategy; 2] =
        [TrainStrategy::MinLevelMinusOne, TrainStrategy::MaxBarracksLevel];

    pub fn name(self) -> &'static str {
        match self {
            TrainStrategy::MinLevelMinusOne => "min level minus one",
            TrainStrategy::MaxBarracksLevel => "max barracks level",
        }
    }

    /// Level a training batch on `producer` should target.
    pub fn target_level(self, producer: &Producer, min_level: Level) -> Level {
        match self {
            TrainStrategy::MinLevelMinusOne => min_level.saturating_sub(1).max(MIN_LEVEL),
            TrainStrategy::MaxBarracksLevel => producer.level,
        }
    }
}

impl fmt::Display for TrainStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrainStrategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "min level minus one" | "min - 1"   => Ok(TrainStrategy::MinLevelMinusOne),
            "max barracks level"  | "max level" => Ok(TrainStrategy::MaxBarracksLevel),
            other => Err(SimError::Config(format!(
                "unknown strategy {other:?}: expected \"min level minus one\" or \"max barracks level\""
            ))),
        }
    }
}

impl TryFrom<String> for TrainStrategy {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TrainStrategy> for String {
    fn from(strategy: TrainStrategy) -> String {
        strategy.name().to_owned()
    }
}
