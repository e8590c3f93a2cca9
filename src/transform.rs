use crate::aggregator::Aggregator;
use crate::dex::DexLookup;
use crate::errors::{TransformError, TransformResult};
use crate::record::{parse_line, InvalidReason, ParsedLine};
use crate::serializer::render_module;
use schema::PokemonLocation;
use std::fs;
use std::path::Path;

/// Run the parse/aggregate pass over the whole input text.
///
/// Malformed lines are logged and skipped; everything else flows through
/// bounds filtering and grouping. Returns the summaries in first-appearance
/// order.
pub fn transform_sightings(input: &str, dex: &DexLookup) -> Vec<PokemonLocation> {
    let mut aggregator = Aggregator::new(dex);
    for line in input.lines() {
        match parse_line(line) {
            ParsedLine::Record(record) => aggregator.record(record),
            ParsedLine::Blank => {}
            ParsedLine::Invalid(invalid) => match invalid.reason {
                InvalidReason::Format => {
                    log::warn!("line ignored (invalid format): {}", invalid.text);
                }
                InvalidReason::Coordinates => {
                    log::warn!("line ignored (invalid coordinates): {}", invalid.text);
                }
            },
        }
    }
    aggregator.finish()
}

/// Read a sighting log and render the generated module text.
///
/// The module is rendered fully in memory and nothing is written to disk
/// here, so a failed run can never leave a partial artifact behind.
pub fn transform_file(path: &Path, dex: &DexLookup) -> TransformResult<String> {
    let input = fs::read_to_string(path)
        .map_err(|err| TransformError::Io(format!("{}: {}", path.display(), err)))?;
    let summaries = transform_sightings(&input, dex);
    Ok(render_module(&summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dex() -> DexLookup {
        DexLookup::from_entries([("Pikachu".to_string(), 25), ("Onix".to_string(), 95)])
    }

    #[test]
    fn end_to_end_input_to_module_text() {
        let input = "\
Pikachu,10,20,3
Pikachu,12,24,11

bad line with five separate whitespace fields
Onix,100,200,x
Onix 30 40 7
Pikachu,2000,20,3
";
        let dex = dex();
        let module = render_module(&transform_sightings(input, &dex));

        let expected = r#"// Auto-generated file
// Pokemon missing from the dex table have dexNumber = -1
// Map dimensions: 1680x3815
// Terrain derived from the Z coordinate:
// - Z < 7: Montanha
// - Z > 7: Subsolo
// - Z = 7: Planície

import { PokemonLocation } from './types';

export const pokemonLocations: PokemonLocation[] = [
{
    id: "pikachu",
    dexNumber: 25,
    name: "Pikachu",
    samples: 2,
    locations: [
      { x: 10.0, y: 20.0, z: 3.0, terrain: "Montanha" },
      { x: 12.0, y: 24.0, z: 11.0, terrain: "Subsolo" }
    ],
    averageLocation: { x: 11, y: 22, z: 7, terrain: "Planície" }
},

{
    id: "onix",
    dexNumber: 95,
    name: "Onix",
    samples: 1,
    locations: [
      { x: 30.0, y: 40.0, z: 7.0, terrain: "Planície" }
    ],
    averageLocation: { x: 30, y: 40, z: 7, terrain: "Planície" }
}
];"#;
        assert_eq!(module, expected);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let input = "Pikachu,10,20,3\nGhostmon 1 2 3\nOnix,2000,1,1\n";
        let dex = dex();
        let first = render_module(&transform_sightings(input, &dex));
        let second = render_module(&transform_sightings(input, &dex));
        assert_eq!(first, second);
    }

    #[test]
    fn missing_input_file_is_fatal() {
        let dex = dex();
        let err = transform_file(Path::new("no/such/log.txt"), &dex).unwrap_err();
        assert!(matches!(err, TransformError::Io(_)));
    }
}
