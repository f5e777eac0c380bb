//! Aggregate, read-only queries over a [`Network`].
//!
//! Every function here is a full scan in the store's deterministic code
//! order, so extremum ties always resolve to the same edge or city for a
//! given network.

use std::collections::{BTreeMap, BTreeSet};

use crate::network::Network;

/// A single directed flight picked out by an extremum scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    pub distance: u64,
}

/// A city picked out by a population extremum scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationRecord {
    pub code: String,
    pub population: u64,
}

/// The cities sharing the network's maximum out-degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubReport {
    pub codes: Vec<String>,
    pub degree: usize,
}

/// Shortest directed flight in the network, or `None` when there are no
/// edges. The first edge achieving the minimum in scan order wins ties.
pub fn shortest_flight(network: &Network) -> Option<FlightRecord> {
    extremal_flight(network, |candidate, best| candidate < best)
}

/// Longest directed flight in the network, or `None` when there are no
/// edges. The first edge achieving the maximum in scan order wins ties.
pub fn longest_flight(network: &Network) -> Option<FlightRecord> {
    extremal_flight(network, |candidate, best| candidate > best)
}

fn extremal_flight(
    network: &Network,
    improves: impl Fn(u64, u64) -> bool,
) -> Option<FlightRecord> {
    let mut best: Option<FlightRecord> = None;
    for (origin, destination, distance) in network.directed_edges() {
        let replace = best
            .as_ref()
            .is_none_or(|current| improves(distance, current.distance));
        if replace {
            best = Some(FlightRecord {
                origin: origin.to_string(),
                destination: destination.to_string(),
                distance,
            });
        }
    }
    best
}

/// Mean directed-edge distance, truncated to an integer. Zero when the
/// network has no edges.
pub fn average_distance(network: &Network) -> u64 {
    let mut total = 0u64;
    let mut count = 0u64;
    for (_, _, distance) in network.directed_edges() {
        total += distance;
        count += 1;
    }
    if count == 0 {
        0
    } else {
        total / count
    }
}

/// City with the smallest population, or `None` for an empty network.
pub fn smallest_city(network: &Network) -> Option<PopulationRecord> {
    extremal_city(network, |candidate, best| candidate < best)
}

/// City with the largest population, or `None` for an empty network.
pub fn biggest_city(network: &Network) -> Option<PopulationRecord> {
    extremal_city(network, |candidate, best| candidate > best)
}

fn extremal_city(
    network: &Network,
    improves: impl Fn(u64, u64) -> bool,
) -> Option<PopulationRecord> {
    let mut best: Option<PopulationRecord> = None;
    for city in network.cities() {
        let replace = best
            .as_ref()
            .is_none_or(|current| improves(city.population, current.population));
        if replace {
            best = Some(PopulationRecord {
                code: city.code.clone(),
                population: city.population,
            });
        }
    }
    best
}

/// Mean city population, truncated to an integer. Zero for an empty network.
pub fn average_population(network: &Network) -> u64 {
    if network.is_empty() {
        return 0;
    }
    let total: u64 = network.cities().map(|city| city.population).sum();
    total / network.len() as u64
}

/// Group city codes by their literal continent string (case-sensitive).
pub fn continents_with_cities(network: &Network) -> BTreeMap<String, BTreeSet<String>> {
    let mut continents: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for city in network.cities() {
        continents
            .entry(city.continent.clone())
            .or_default()
            .insert(city.code.clone());
    }
    continents
}

/// All cities achieving the network's maximum out-degree, with the degree
/// itself. Ties are all included.
pub fn hub_cities(network: &Network) -> HubReport {
    let mut degree = 0usize;
    let mut codes: Vec<String> = Vec::new();
    for city in network.cities() {
        let out_degree = city.out_degree();
        if out_degree > degree {
            degree = out_degree;
            codes = vec![city.code.clone()];
        } else if out_degree == degree {
            codes.push(city.code.clone());
        }
    }
    HubReport { codes, degree }
}
