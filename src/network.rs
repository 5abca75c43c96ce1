//! Static network descriptions: the built-in transit network and JSON input.

use std::path::Path as FsPath;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::{GraphBuilder, TransitGraph};
use crate::types::GraphResult;

/// One connection in a network description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSpec {
    pub from: String,
    pub to: String,
    /// Travel cost; omitted means 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A finite, static description of stations and their connections.
///
/// JSON form:
///
/// ```json
/// {
///   "stations": ["A", "B"],
///   "connections": [{ "from": "A", "to": "B", "weight": 2.5 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub stations: Vec<String>,
    #[serde(default)]
    pub connections: Vec<ConnectionSpec>,
}

impl NetworkSpec {
    /// The seven-station city transit network.
    pub fn transit() -> Self {
        let stations = [
            "Central",
            "Parkside",
            "Museum",
            "Riverside",
            "University",
            "Airport",
            "Harbor",
        ];
        let connections = [
            ("Central", "Parkside", 5.0),
            ("Central", "Museum", 7.0),
            ("Parkside", "Riverside", 3.0),
            ("Museum", "University", 6.0),
            ("University", "Airport", 10.0),
            ("Riverside", "Harbor", 8.0),
            ("Harbor", "Airport", 4.0),
        ];
        Self {
            stations: stations.iter().map(|s| s.to_string()).collect(),
            connections: connections
                .iter()
                .map(|&(from, to, w)| ConnectionSpec {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight: Some(w),
                })
                .collect(),
        }
    }

    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a description from a JSON file.
    pub fn load(path: &FsPath) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let spec = Self::from_json_str(&text)?;
        debug!(
            "Loaded network {} ({} stations, {} connections)",
            path.display(),
            spec.stations.len(),
            spec.connections.len()
        );
        Ok(spec)
    }

    /// Build a graph. With `weighted == false` every edge gets weight 1.
    pub fn build(&self, weighted: bool) -> GraphResult<TransitGraph> {
        let mut builder = GraphBuilder::new();
        builder.stations(self.stations.iter().cloned());
        for c in &self.connections {
            match c.weight {
                Some(w) if weighted => builder.connect_weighted(c.from.as_str(), c.to.as_str(), w),
                _ => builder.connect(c.from.as_str(), c.to.as_str()),
            };
        }
        builder.build()
    }
}
