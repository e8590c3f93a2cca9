use crate::Terrain;
use serde::{Deserialize, Serialize};

/// A single validated, in-bounds sighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub terrain: Terrain,
}

/// The averaged location of a group of sightings.
///
/// Coordinates are rounded to whole map units; `terrain` comes from the
/// unrounded mean Z, so it can disagree with every member sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageLocation {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub terrain: Terrain,
}

/// Aggregated map data for one Pokemon, as exported to the wiki map pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonLocation {
    /// Lowercased name, used as the element id on the map page.
    pub id: String,
    /// National dex number, or -1 when the name is not in the dex table.
    pub dex_number: i32,
    pub name: String,
    /// Number of sightings backing this entry. Always `locations.len()`.
    pub samples: usize,
    /// Sightings in input order.
    pub locations: Vec<Location>,
    pub average_location: AverageLocation,
}
