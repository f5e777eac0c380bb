//! Ingestion and serialization of network documents.
//!
//! A network document is the JSON interchange shape: a `data sources` list,
//! one `metros` entry per city, and one `routes` entry per physical flight
//! (`ports` pair plus `distance`). Ingestion applies each route in both
//! directions; serialization emits one entry per directed edge actually
//! present, so asymmetric networks survive a round-trip.
//!
//! Ingestion is transactional: the document is applied to a staged copy of
//! the store and committed only when every entry was accepted, so a
//! malformed entry mid-stream never leaves a partially populated network.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{City, Coordinates, Network};

/// Raw city entry as it appears under the document's `metros` key. Every
/// field is optional at the wire level so a missing one can be reported as
/// an [`Error::InvalidRecord`] instead of an opaque parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroEntry {
    pub code: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub timezone: Option<i32>,
    pub coordinates: Option<Coordinates>,
    pub population: Option<u64>,
    pub region: Option<i32>,
}

impl MetroEntry {
    fn into_city(self) -> Result<City> {
        Ok(City {
            code: self.code.ok_or(Error::InvalidRecord { field: "code" })?,
            name: self.name.ok_or(Error::InvalidRecord { field: "name" })?,
            country: self
                .country
                .ok_or(Error::InvalidRecord { field: "country" })?,
            continent: self
                .continent
                .ok_or(Error::InvalidRecord { field: "continent" })?,
            timezone: self
                .timezone
                .ok_or(Error::InvalidRecord { field: "timezone" })?,
            coordinates: self
                .coordinates
                .ok_or(Error::InvalidRecord { field: "coordinates" })?,
            population: self
                .population
                .ok_or(Error::InvalidRecord { field: "population" })?,
            region: self.region.ok_or(Error::InvalidRecord { field: "region" })?,
            neighbors: BTreeMap::new(),
        })
    }

    fn from_city(city: &City) -> Self {
        Self {
            code: Some(city.code.clone()),
            name: Some(city.name.clone()),
            country: Some(city.country.clone()),
            continent: Some(city.continent.clone()),
            timezone: Some(city.timezone),
            coordinates: Some(city.coordinates),
            population: Some(city.population),
            region: Some(city.region),
        }
    }
}

/// Raw route entry under the document's `routes` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub ports: Option<Vec<String>>,
    pub distance: Option<Number>,
}

impl RouteEntry {
    /// Validate the entry into an `(origin, destination, distance)` triple.
    /// Missing pieces are [`Error::MalformedRoute`]; a negative or
    /// non-integral distance is [`Error::InvalidDistance`].
    fn resolve(&self) -> Result<(&str, &str, u64)> {
        let ports = self
            .ports
            .as_ref()
            .ok_or(Error::MalformedRoute { field: "ports" })?;
        let [origin, destination] = ports.as_slice() else {
            return Err(Error::MalformedRoute { field: "ports" });
        };
        let distance = self
            .distance
            .as_ref()
            .ok_or(Error::MalformedRoute { field: "distance" })?;
        let distance = distance.as_u64().ok_or_else(|| Error::InvalidDistance {
            value: distance.to_string(),
        })?;
        Ok((origin.as_str(), destination.as_str(), distance))
    }
}

/// Top-level interchange document. `metros` and `routes` stay optional here
/// so their absence can surface as [`Error::MalformedDocument`] during
/// ingestion rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(rename = "data sources", default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub metros: Option<Vec<MetroEntry>>,
    #[serde(default)]
    pub routes: Option<Vec<RouteEntry>>,
}

impl Network {
    /// Merge a parsed document into this network. Sources are appended
    /// without duplicates, every metro is added as a city, and every route
    /// is applied once per direction. Any rejected entry aborts the whole
    /// ingestion and leaves the network unchanged.
    pub fn ingest_document(&mut self, document: NetworkDocument) -> Result<()> {
        let metros = document
            .metros
            .ok_or(Error::MalformedDocument { key: "metros" })?;
        let routes = document
            .routes
            .ok_or(Error::MalformedDocument { key: "routes" })?;

        // Stage on a copy so a mid-stream failure never commits partial state.
        let mut staged = self.clone();

        for source in document.sources {
            staged.add_source(source);
        }
        for metro in metros {
            staged.add_city(metro.into_city()?)?;
        }
        for route in routes {
            let (origin, destination, distance) = route.resolve()?;
            // Input routes describe physical flights, which run both ways.
            staged.add_route(origin, destination, distance)?;
            staged.add_route(destination, origin, distance)?;
        }

        debug!(
            cities = staged.len(),
            edges = staged.edge_count(),
            "ingested network document"
        );
        *self = staged;
        Ok(())
    }

    /// Parse a JSON document and merge it into this network.
    pub fn ingest_json_str(&mut self, text: &str) -> Result<()> {
        let document: NetworkDocument = serde_json::from_str(text)?;
        self.ingest_document(document)
    }

    /// Read a JSON document from disk and merge it into this network.
    pub fn ingest_json_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;
        self.ingest_json_str(&text)
    }

    /// Build a network from a single JSON document on disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let mut network = Network::new();
        network.ingest_json_file(path)?;
        Ok(network)
    }

    /// Produce the interchange document for this network: all accumulated
    /// sources, one metro entry per city, and one route entry per directed
    /// edge (edges are not re-collapsed into undirected pairs).
    pub fn to_document(&self) -> NetworkDocument {
        let metros = self.cities().map(MetroEntry::from_city).collect();
        let routes = self
            .directed_edges()
            .map(|(origin, destination, distance)| RouteEntry {
                ports: Some(vec![origin.to_string(), destination.to_string()]),
                distance: Some(Number::from(distance)),
            })
            .collect();

        NetworkDocument {
            sources: self.sources().to_vec(),
            metros: Some(metros),
            routes: Some(routes),
        }
    }

    /// Render the network as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}
