//! Routing preference profile.
//!
//! The planner scales each step by a per-node tag multiplier that is derived
//! from the node's map tags and the activity the route is planned for.  The
//! profile is carried through the graph builder to the `TagCost` hook in
//! `rp-graph`; the default cost ignores it.

/// What the route is for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Activity {
    /// Running (the default for the pace tracker).
    #[default]
    Run,
    /// Walking.
    Walk,
    /// Cycling.
    Ride,
}

impl Activity {
    /// Human-readable label, useful for logs and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Run  => "run",
            Activity::Walk => "walk",
            Activity::Ride => "ride",
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Activity {
    type Err = crate::GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "run"  => Ok(Activity::Run),
            "walk" => Ok(Activity::Walk),
            "ride" => Ok(Activity::Ride),
            other  => Err(crate::GeoError::Parse(format!(
                "invalid activity {other:?}: expected \"run\", \"walk\", or \"ride\""
            ))),
        }
    }
}
