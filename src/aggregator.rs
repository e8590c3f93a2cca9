use crate::dex::DexLookup;
use crate::record::RawRecord;
use schema::{is_within_map, AverageLocation, Location, PokemonLocation, Terrain};
use std::collections::{BTreeSet, HashMap};

/// One Pokemon's sightings, in input order.
#[derive(Debug)]
struct Group {
    name: String,
    locations: Vec<Location>,
}

/// Buckets valid records per Pokemon and produces the exported summaries.
///
/// Groups are created on a name's first sighting and emitted in that same
/// first-appearance order. Out-of-map records never enter a group; they are
/// collected (deduplicated by their formatted text) for the final report,
/// as are names missing from the dex table.
#[derive(Debug)]
pub struct Aggregator<'a> {
    dex: &'a DexLookup,
    groups: Vec<Group>,
    by_name: HashMap<String, usize>,
    missing_dex: BTreeSet<String>,
    out_of_map: BTreeSet<String>,
}

impl<'a> Aggregator<'a> {
    pub fn new(dex: &'a DexLookup) -> Self {
        Aggregator {
            dex,
            groups: Vec::new(),
            by_name: HashMap::new(),
            missing_dex: BTreeSet::new(),
            out_of_map: BTreeSet::new(),
        }
    }

    /// Feed one parsed record through bounds filtering, terrain
    /// classification and grouping.
    pub fn record(&mut self, record: RawRecord) {
        let RawRecord { name, x, y, z } = record;

        if !is_within_map(x, y) {
            self.out_of_map
                .insert(format!("{} ({:?}, {:?}, {:?})", name, x, y, z));
            return;
        }

        if !self.dex.contains(&name) {
            self.missing_dex.insert(name.clone());
        }

        let terrain = Terrain::from_z(z);
        let index = match self.by_name.get(&name) {
            Some(&index) => index,
            None => {
                let index = self.groups.len();
                self.groups.push(Group {
                    name: name.clone(),
                    locations: Vec::new(),
                });
                self.by_name.insert(name, index);
                index
            }
        };
        self.groups[index].locations.push(Location { x, y, z, terrain });
    }

    /// Names seen in-bounds but absent from the dex table, alphabetical.
    pub fn missing_dex(&self) -> Vec<&str> {
        self.missing_dex.iter().map(String::as_str).collect()
    }

    /// Formatted `name (x, y, z)` notices for excluded records, sorted.
    pub fn out_of_map(&self) -> Vec<&str> {
        self.out_of_map.iter().map(String::as_str).collect()
    }

    /// Report collected anomalies and emit the per-Pokemon summaries in
    /// first-appearance order.
    pub fn finish(self) -> Vec<PokemonLocation> {
        self.report_anomalies();

        let Aggregator { dex, groups, .. } = self;
        groups
            .into_iter()
            .filter(|group| !group.locations.is_empty())
            .map(|group| {
                let average = average_location(&group.locations);
                PokemonLocation {
                    id: group.name.to_lowercase(),
                    dex_number: dex.dex_number(&group.name),
                    name: group.name,
                    samples: group.locations.len(),
                    locations: group.locations,
                    average_location: average,
                }
            })
            .collect()
    }

    fn report_anomalies(&self) {
        if !self.missing_dex.is_empty() {
            log::warn!("Pokemon without a dex number (included with dexNumber = -1):");
            for name in &self.missing_dex {
                log::warn!("- {}", name);
            }
        }
        if !self.out_of_map.is_empty() {
            log::warn!("Pokemon ignored for being outside the map:");
            for notice in &self.out_of_map {
                log::warn!("- {}", notice);
            }
        }
    }
}

/// Arithmetic mean of a group of sightings.
///
/// Coordinates are rounded to the nearest whole unit (half away from zero);
/// terrain is classified from the unrounded mean Z. An empty slice yields
/// the origin on plain terrain.
pub fn average_location(locations: &[Location]) -> AverageLocation {
    if locations.is_empty() {
        return AverageLocation {
            x: 0,
            y: 0,
            z: 0,
            terrain: Terrain::Planicie,
        };
    }

    let count = locations.len() as f64;
    let sum_x: f64 = locations.iter().map(|location| location.x).sum();
    let sum_y: f64 = locations.iter().map(|location| location.y).sum();
    let sum_z: f64 = locations.iter().map(|location| location.z).sum();

    let avg_z = sum_z / count;
    AverageLocation {
        x: (sum_x / count).round() as i64,
        y: (sum_y / count).round() as i64,
        z: avg_z.round() as i64,
        terrain: Terrain::from_z(avg_z),
    }
}
