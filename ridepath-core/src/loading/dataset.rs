use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::{Error, GraphViolation};

/// One directed entry of the dataset, as supplied by the loader.
///
/// Traffic level stays textual here so that an unrecognized category
/// is reported as a graph violation naming the offending segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub distance: f64,
    pub traffic: String,
    #[serde(default, alias = "route_label")]
    pub route: String,
}

/// Location -> neighbour -> segment attributes
pub type AdjacencyTable = BTreeMap<String, BTreeMap<String, SegmentRecord>>;

/// JSON object read as an ordered list of entries, repeated keys included
struct Entries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by location name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

type RawDataset = Entries<Entries<SegmentRecord>>;

/// Collect raw entries into a table, refusing keys that appear twice
fn into_table(raw: RawDataset) -> Result<AdjacencyTable, Error> {
    let mut table = AdjacencyTable::new();
    for (from, neighbors) in raw.0 {
        let mut segments = BTreeMap::new();
        for (to, record) in neighbors.0 {
            if let Entry::Vacant(slot) = segments.entry(to.clone()) {
                slot.insert(record);
            } else {
                return Err(GraphViolation::DuplicateSegment { from, to }.into());
            }
        }
        match table.entry(from) {
            Entry::Vacant(slot) => {
                slot.insert(segments);
            }
            Entry::Occupied(slot) => {
                return Err(GraphViolation::DuplicateLocation {
                    location: slot.key().clone(),
                }
                .into());
            }
        }
    }
    Ok(table)
}

/// Parse a dataset from its JSON form
///
/// # Errors
///
/// Returns an error if the document is not a nested location mapping
/// or names a location or segment twice
pub fn parse_dataset(json: &str) -> Result<AdjacencyTable, Error> {
    into_table(serde_json::from_str(json)?)
}

/// Read a JSON dataset from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed,
/// or names a location or segment twice
pub fn read_dataset(path: &Path) -> Result<AdjacencyTable, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open dataset '{}': {}", path.display(), e),
        )
    })?;
    into_table(serde_json::from_reader(BufReader::new(file))?)
}
