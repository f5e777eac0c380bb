//! Common test utilities and fixture helpers.

use std::collections::BTreeMap;
use std::path::PathBuf;

use airnet_lib::{City, Coordinates, Latitude, Longitude, Network};

/// Path to the JSON network fixture shared across the workspace.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

/// Build a minimal city record with the given code, continent, and
/// population; remaining fields use placeholder values.
#[allow(dead_code)]
pub fn city(code: &str, continent: &str, population: u64) -> City {
    City {
        code: code.to_string(),
        name: format!("City {code}"),
        country: "XX".to_string(),
        continent: continent.to_string(),
        timezone: 0,
        coordinates: Coordinates {
            latitude: Latitude::North(40.0),
            longitude: Longitude::East(117.0),
        },
        population,
        region: 1,
        neighbors: BTreeMap::new(),
    }
}

/// Five-city network with symmetric flights A-B (100), C-D (200), E-B (300),
/// and A-D (400).
#[allow(dead_code)]
pub fn sample_network() -> Network {
    let mut network = Network::new();
    network.add_city(city("A", "Asia", 100)).expect("add A");
    network.add_city(city("B", "Asia", 200)).expect("add B");
    network.add_city(city("C", "Europe", 500)).expect("add C");
    network.add_city(city("D", "Europe", 300)).expect("add D");
    network.add_city(city("E", "Europe", 400)).expect("add E");

    for (origin, destination, distance) in [
        ("A", "B", 100),
        ("C", "D", 200),
        ("E", "B", 300),
        ("A", "D", 400),
    ] {
        network
            .add_route(origin, destination, distance)
            .expect("add forward edge");
        network
            .add_route(destination, origin, distance)
            .expect("add reverse edge");
    }

    network
}
