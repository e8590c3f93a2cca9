use crate::errors::{DexDataError, DexDataResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only reference table mapping canonical Pokemon names to their
/// National Dex numbers.
///
/// Names match exactly, case-sensitively. The table is loaded once and
/// handed to the [`Aggregator`](crate::Aggregator) by reference; nothing
/// ever writes to it after loading.
#[derive(Debug, Clone, Default)]
pub struct DexLookup {
    numbers: HashMap<String, i32>,
}

impl DexLookup {
    /// Load the lookup table from its RON file.
    ///
    /// The file holds a plain name -> number map, e.g.
    /// `{ "Pikachu": 25, "Onix": 95 }`.
    pub fn load(path: &Path) -> DexDataResult<DexLookup> {
        let content = fs::read_to_string(path).map_err(|err| {
            DexDataError::LookupFileNotFound(format!("{}: {}", path.display(), err))
        })?;
        let numbers: HashMap<String, i32> =
            ron::from_str(&content).map_err(|err| DexDataError::MalformedData(err.to_string()))?;
        Ok(DexLookup { numbers })
    }

    /// Build a lookup directly from entries.
    pub fn from_entries<I>(entries: I) -> DexLookup
    where
        I: IntoIterator<Item = (String, i32)>,
    {
        DexLookup {
            numbers: entries.into_iter().collect(),
        }
    }

    /// Whether the table knows this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.numbers.contains_key(name)
    }

    /// Dex number for a name, or -1 when the name is unknown.
    pub fn dex_number(&self, name: &str) -> i32 {
        self.numbers.get(name).copied().unwrap_or(-1)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DexLookup {
        DexLookup::from_entries([("Pikachu".to_string(), 25), ("Onix".to_string(), 95)])
    }

    #[test]
    fn known_names_resolve_to_their_number() {
        let dex = sample();
        assert_eq!(dex.dex_number("Pikachu"), 25);
        assert_eq!(dex.dex_number("Onix"), 95);
        assert!(dex.contains("Pikachu"));
    }

    #[test]
    fn unknown_names_resolve_to_minus_one() {
        let dex = sample();
        assert_eq!(dex.dex_number("Ghostmon"), -1);
        assert!(!dex.contains("Ghostmon"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dex = sample();
        assert_eq!(dex.dex_number("pikachu"), -1);
        assert_eq!(dex.dex_number("PIKACHU"), -1);
    }

    #[test]
    fn decodes_a_ron_map() {
        let dex_ron = r#"{ "Pikachu": 25, "Missingno": -1 }"#;
        let numbers: HashMap<String, i32> = ron::from_str(dex_ron).unwrap();
        let dex = DexLookup::from_entries(numbers);
        assert_eq!(dex.len(), 2);
        assert_eq!(dex.dex_number("Pikachu"), 25);
    }

    #[test]
    fn missing_file_is_a_typed_error() {
        let err = DexLookup::load(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, DexDataError::LookupFileNotFound(_)));
    }
}
