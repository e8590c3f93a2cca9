//! Pokemon Mapgen
//!
//! Turns flat text logs of Pokemon sightings into the generated
//! `pokemon_data.ts` module consumed by the wiki map pages: one pass of
//! parsing, per-Pokemon aggregation, and TypeScript code emission.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod aggregator;
pub mod dex;
pub mod errors;
pub mod record;
pub mod serializer;
pub mod transform;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-mapgen` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared map and location definitions.
pub use schema::{
    is_within_map,
    AverageLocation,
    Location,
    PokemonLocation,
    Terrain,
    MAPA_HEIGHT,
    MAPA_WIDTH,
};

// --- From this crate's modules (`src/`) ---

// Core pipeline stages.
pub use aggregator::{average_location, Aggregator};
pub use record::{parse_line, InvalidLine, InvalidReason, ParsedLine, RawRecord};
pub use serializer::{format_pokemon_object, render_locations, render_module};
pub use transform::{transform_file, transform_sightings};

// Static reference data.
pub use dex::DexLookup;

// Crate-specific error and result types.
pub use errors::{DexDataError, DexDataResult, TransformError, TransformResult};
