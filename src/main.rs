use pokemon_mapgen::{transform_file, DexLookup};
use std::fs;
use std::path::Path;

/// Input candidates, tried in order: the raw log first, then the CSV export.
const INPUT_CANDIDATES: [&str; 2] = ["pokemon_data.txt", "pokemon_data.csv"];
const DEX_FILE: &str = "data/pokedex.ron";
const OUTPUT_FILE: &str = "pokemon_data.ts";

fn main() {
    env_logger::init();

    let Some(input_file) = INPUT_CANDIDATES.iter().map(Path::new).find(|p| p.exists()) else {
        println!("Error: pokemon_data.txt or pokemon_data.csv not found!");
        return;
    };

    let dex = match DexLookup::load(Path::new(DEX_FILE)) {
        Ok(dex) => dex,
        Err(e) => {
            println!("Error loading dex table: {}", e);
            return;
        }
    };
    log::info!(
        "loaded {} dex entries, reading {}",
        dex.len(),
        input_file.display()
    );

    match transform_file(input_file, &dex) {
        Ok(module) => {
            if let Err(e) = fs::write(OUTPUT_FILE, module) {
                println!("Error writing {}: {}", OUTPUT_FILE, e);
                return;
            }
            println!("{} generated successfully!", OUTPUT_FILE);
        }
        Err(e) => println!("Error processing file: {}", e),
    }
}
