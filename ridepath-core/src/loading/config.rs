use std::path::PathBuf;

use log::info;

use super::{build_graph, builtin_graph, read_dataset};
use crate::{Error, RoadGraph};

/// Where the road dataset comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatasetSource {
    /// The compiled-in city table
    #[default]
    Builtin,
    /// A JSON file in the nested `location -> neighbour -> segment` form
    File(PathBuf),
}

/// Load and validate a road graph
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or violates graph invariants
pub fn load_graph(source: &DatasetSource) -> Result<RoadGraph, Error> {
    match source {
        DatasetSource::Builtin => {
            info!("Loading built-in road dataset");
            builtin_graph()
        }
        DatasetSource::File(path) => {
            info!("Loading road dataset: {}", path.display());
            let table = read_dataset(path)?;
            build_graph(&table)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test_log::test]
    fn loads_builtin_by_default() {
        let graph = load_graph(&DatasetSource::default()).unwrap();
        assert!(graph.contains("Delhi"));
    }

    #[test_log::test]
    fn loads_json_file() {
        let path = std::env::temp_dir().join(format!("ridepath-dataset-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "X": {{ "Y": {{ "distance": 12.5, "traffic": "heavy", "route": "R9" }} }},
                "Y": {{ "X": {{ "distance": 12.5, "traffic": "heavy", "route": "R9" }} }}
            }}"#
        )
        .unwrap();
        drop(file);

        let graph = load_graph(&DatasetSource::File(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(graph.location_count(), 2);
        let (neighbor, segment) = graph.neighbors("X").unwrap()[0];
        assert_eq!(neighbor.name, "Y");
        assert_eq!(segment.distance, 12.5);
    }
}
