//! The fixed set of life-pillar categories.
//!
//! Every tracked entity (timers, time logs, goals, visions, journal entries)
//! carries exactly one pillar. The set is closed: progress aggregation and
//! table rendering iterate over `Pillar::ALL`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A life-pillar category label.
///
/// Serialized and stored by its capitalized display name ("Health"), while
/// the command line accepts the lowercase form (`--pillar health`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Pillar {
    Health,
    Academics,
    Passions,
    Relationship,
    Career,
}

impl Pillar {
    /// All pillars in canonical display order.
    pub const ALL: [Pillar; 5] = [Pillar::Health, Pillar::Academics, Pillar::Passions, Pillar::Relationship, Pillar::Career];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Health => "Health",
            Pillar::Academics => "Academics",
            Pillar::Passions => "Passions",
            Pillar::Relationship => "Relationship",
            Pillar::Career => "Career",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = String;

    // Case-insensitive so database TEXT columns and CLI input both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "health" => Ok(Pillar::Health),
            "academics" => Ok(Pillar::Academics),
            "passions" => Ok(Pillar::Passions),
            "relationship" => Ok(Pillar::Relationship),
            "career" => Ok(Pillar::Career),
            _ => Err(format!("unknown pillar: {}", s)),
        }
    }
}
