use schema::{AverageLocation, Location, PokemonLocation, MAPA_HEIGHT, MAPA_WIDTH};

/// Render one sighting as a TypeScript object literal.
///
/// Coordinates keep their float rendering (`10.0`, `12.5`) so the generated
/// source round-trips the sampled values exactly.
fn format_location(location: &Location) -> String {
    format!(
        "{{ x: {:?}, y: {:?}, z: {:?}, terrain: \"{}\" }}",
        location.x, location.y, location.z, location.terrain
    )
}

fn format_average_location(average: &AverageLocation) -> String {
    format!(
        "{{ x: {}, y: {}, z: {}, terrain: \"{}\" }}",
        average.x, average.y, average.z, average.terrain
    )
}

/// Render one Pokemon summary as a TypeScript object literal block.
pub fn format_pokemon_object(pokemon: &PokemonLocation) -> String {
    let locations = pokemon
        .locations
        .iter()
        .map(format_location)
        .collect::<Vec<_>>()
        .join(",\n      ");

    format!(
        "{{\n    id: \"{}\",\n    dexNumber: {},\n    name: \"{}\",\n    samples: {},\n    locations: [\n      {}\n    ],\n    averageLocation: {}\n}}",
        pokemon.id,
        pokemon.dex_number,
        pokemon.name,
        pokemon.samples,
        locations,
        format_average_location(&pokemon.average_location),
    )
}

/// Join the summary blocks into the body of the exported array literal.
///
/// Blocks are separated by a comma and a blank line; the enclosing `[ ... ]`
/// belongs to [`render_module`].
pub fn render_locations(summaries: &[PokemonLocation]) -> String {
    summaries
        .iter()
        .map(format_pokemon_object)
        .collect::<Vec<_>>()
        .join(",\n\n")
}

/// Render the complete generated TypeScript module, header included.
pub fn render_module(summaries: &[PokemonLocation]) -> String {
    let mut module = String::new();
    module.push_str("// Auto-generated file\n");
    module.push_str("// Pokemon missing from the dex table have dexNumber = -1\n");
    module.push_str(&format!("// Map dimensions: {}x{}\n", MAPA_WIDTH, MAPA_HEIGHT));
    module.push_str("// Terrain derived from the Z coordinate:\n");
    module.push_str("// - Z < 7: Montanha\n");
    module.push_str("// - Z > 7: Subsolo\n");
    module.push_str("// - Z = 7: Planície\n\n");
    module.push_str("import { PokemonLocation } from './types';\n\n");
    module.push_str("export const pokemonLocations: PokemonLocation[] = [\n");
    module.push_str(&render_locations(summaries));
    module.push_str("\n];");
    module
}
