use std::collections::BTreeMap;

use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};

/// Latitude component of a city position, tagged with its hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Latitude {
    North(f64),
    South(f64),
}

impl Latitude {
    /// Single-letter hemisphere tag used in documents and reports.
    pub fn hemisphere(self) -> char {
        match self {
            Latitude::North(_) => 'N',
            Latitude::South(_) => 'S',
        }
    }

    /// Unsigned magnitude in degrees.
    pub fn magnitude(self) -> f64 {
        match self {
            Latitude::North(value) | Latitude::South(value) => value,
        }
    }
}

/// Longitude component of a city position, tagged with its hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Longitude {
    East(f64),
    West(f64),
}

impl Longitude {
    /// Single-letter hemisphere tag used in documents and reports.
    pub fn hemisphere(self) -> char {
        match self {
            Longitude::East(_) => 'E',
            Longitude::West(_) => 'W',
        }
    }

    /// Unsigned magnitude in degrees.
    pub fn magnitude(self) -> f64 {
        match self {
            Longitude::East(value) | Longitude::West(value) => value,
        }
    }
}

/// Geographic position of a city: one latitude and one longitude component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl Serialize for Coordinates {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(
            &self.latitude.hemisphere().to_string(),
            &self.latitude.magnitude(),
        )?;
        map.serialize_entry(
            &self.longitude.hemisphere().to_string(),
            &self.longitude.magnitude(),
        )?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;

        let latitude = match (raw.get("N"), raw.get("S")) {
            (Some(&magnitude), None) => Latitude::North(magnitude),
            (None, Some(&magnitude)) => Latitude::South(magnitude),
            _ => {
                return Err(de::Error::custom(
                    "coordinates require exactly one of 'N' or 'S'",
                ))
            }
        };
        let longitude = match (raw.get("E"), raw.get("W")) {
            (Some(&magnitude), None) => Longitude::East(magnitude),
            (None, Some(&magnitude)) => Longitude::West(magnitude),
            _ => {
                return Err(de::Error::custom(
                    "coordinates require exactly one of 'E' or 'W'",
                ))
            }
        };

        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

/// A metro served by the network: static attributes plus the outgoing-flight
/// map keyed by destination code.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub code: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub timezone: i32,
    pub coordinates: Coordinates,
    pub population: u64,
    pub region: i32,
    pub neighbors: BTreeMap<String, u64>,
}

impl City {
    /// Number of outgoing flights from this city.
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Partial update applied over an existing [`City`]. Absent fields retain
/// their prior value; a present `code` relocates the record within the store.
#[derive(Debug, Clone, Default)]
pub struct CityPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub timezone: Option<i32>,
    pub coordinates: Option<Coordinates>,
    pub population: Option<u64>,
    pub region: Option<i32>,
}

impl CityPatch {
    /// `true` when no field is set, making the edit a no-op.
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.country.is_none()
            && self.continent.is_none()
            && self.timezone.is_none()
            && self.coordinates.is_none()
            && self.population.is_none()
            && self.region.is_none()
    }
}

/// In-memory store owning every [`City`] record and the accumulated list of
/// data sources. Cities are kept in a `BTreeMap` so iteration order is
/// deterministic, which keeps statistics tie-breaking reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    cities: BTreeMap<String, City>,
    sources: Vec<String>,
}

impl Network {
    /// Create an empty network with no cities or sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the code names a city in the network.
    pub fn exists(&self, code: &str) -> bool {
        self.cities.contains_key(code)
    }

    /// `true` when both cities exist and a directed flight origin -> destination
    /// is present. Missing codes yield `false` rather than an error.
    pub fn adjacent(&self, origin: &str, destination: &str) -> bool {
        if !self.exists(destination) {
            return false;
        }
        self.cities
            .get(origin)
            .is_some_and(|city| city.neighbors.contains_key(destination))
    }

    /// Look up a city record by code.
    pub fn city(&self, code: &str) -> Option<&City> {
        self.cities.get(code)
    }

    /// Iterate over all city records in code order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// Number of cities in the network.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// `true` when the network holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Provenance strings accumulated across all ingested documents, in
    /// first-seen order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Iterate over every directed edge as `(origin, destination, distance)`,
    /// in deterministic code order.
    pub fn directed_edges(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.cities.values().flat_map(|city| {
            city.neighbors
                .iter()
                .map(move |(destination, &distance)| {
                    (city.code.as_str(), destination.as_str(), distance)
                })
        })
    }

    /// Number of directed edges in the network.
    pub fn edge_count(&self) -> usize {
        self.cities.values().map(City::out_degree).sum()
    }

    pub(crate) fn add_source(&mut self, source: String) {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    /// Insert a new city record. Fails with [`Error::DuplicateKey`] when the
    /// code is already taken.
    pub fn add_city(&mut self, city: City) -> Result<()> {
        if self.exists(&city.code) {
            return Err(Error::DuplicateKey {
                code: city.code.clone(),
            });
        }
        self.cities.insert(city.code.clone(), city);
        Ok(())
    }

    /// Set the directed edge origin -> destination, overwriting any previous
    /// distance. Fails with [`Error::UnknownCity`] when either code is absent.
    pub fn add_route(&mut self, origin: &str, destination: &str, distance: u64) -> Result<()> {
        if !self.exists(destination) {
            return Err(Error::UnknownCity {
                code: destination.to_string(),
            });
        }
        let Some(city) = self.cities.get_mut(origin) else {
            return Err(Error::UnknownCity {
                code: origin.to_string(),
            });
        };
        city.neighbors.insert(destination.to_string(), distance);
        Ok(())
    }

    /// Remove a city and every inbound edge pointing at it. Returns `false`
    /// when the code is absent. This is the only operation that repairs
    /// dangling inbound edges, so it scans every remaining record rather than
    /// only the removed city's own neighbours.
    pub fn remove_city(&mut self, code: &str) -> bool {
        if self.cities.remove(code).is_none() {
            return false;
        }
        let mut repaired = 0usize;
        for city in self.cities.values_mut() {
            if city.neighbors.remove(code).is_some() {
                repaired += 1;
            }
        }
        debug!(code, inbound_removed = repaired, "removed city");
        true
    }

    /// Remove exactly the directed edge origin -> destination, leaving any
    /// reverse edge untouched. Returns `false` when either city is absent or
    /// the edge does not exist.
    pub fn remove_route(&mut self, origin: &str, destination: &str) -> bool {
        if !self.exists(destination) {
            return false;
        }
        self.cities
            .get_mut(origin)
            .is_some_and(|city| city.neighbors.remove(destination).is_some())
    }

    /// Apply a partial update over an existing city. Absent patch fields keep
    /// their prior value; an empty patch is a no-op. When the patch renames the
    /// code, the record is relocated under the new key and every inbound edge
    /// is rewritten to the new code, so the store never holds a neighbour key
    /// without a matching record.
    pub fn edit_city(&mut self, code: &str, patch: &CityPatch) -> Result<()> {
        if !self.exists(code) {
            return Err(Error::UnknownCity {
                code: code.to_string(),
            });
        }
        if patch.is_empty() {
            return Ok(());
        }

        let renamed = match patch.code.as_deref() {
            Some(new_code) if new_code != code => {
                if self.exists(new_code) {
                    return Err(Error::DuplicateKey {
                        code: new_code.to_string(),
                    });
                }
                true
            }
            _ => false,
        };

        let mut city = self
            .cities
            .remove(code)
            .expect("presence checked above");

        if let Some(new_code) = &patch.code {
            city.code = new_code.clone();
        }
        if let Some(name) = &patch.name {
            city.name = name.clone();
        }
        if let Some(country) = &patch.country {
            city.country = country.clone();
        }
        if let Some(continent) = &patch.continent {
            city.continent = continent.clone();
        }
        if let Some(timezone) = patch.timezone {
            city.timezone = timezone;
        }
        if let Some(coordinates) = patch.coordinates {
            city.coordinates = coordinates;
        }
        if let Some(population) = patch.population {
            city.population = population;
        }
        if let Some(region) = patch.region {
            city.region = region;
        }

        let new_code = city.code.clone();
        self.cities.insert(new_code.clone(), city);

        if renamed {
            for other in self.cities.values_mut() {
                if let Some(distance) = other.neighbors.remove(code) {
                    other.neighbors.insert(new_code.clone(), distance);
                }
            }
            debug!(old = code, new = %new_code, "renamed city and repaired inbound edges");
        }

        Ok(())
    }
}
