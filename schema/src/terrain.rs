use serde::{Deserialize, Serialize};
use std::fmt;

/// Terrain classification derived from a sighting's Z coordinate.
///
/// Z grows downward in the game world: anything above the surface band is
/// mountain, anything below it is underground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Montanha,
    Subsolo,
    Planicie,
}

impl Terrain {
    /// Classify a Z coordinate against the fixed thresholds.
    pub fn from_z(z: f64) -> Terrain {
        if z < 7.0 {
            Terrain::Montanha
        } else if z > 7.0 {
            Terrain::Subsolo
        } else {
            Terrain::Planicie
        }
    }

    /// The label used in generated code and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Terrain::Montanha => "Montanha",
            Terrain::Subsolo => "Subsolo",
            Terrain::Planicie => "Planície", // accented form expected by the wiki
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
