//! Human-readable rendering of cities and edge lists.
//!
//! These helpers consume core data but carry no graph logic of their own;
//! they exist so front ends and the map service shim share one format.

use std::fmt::Write;

use crate::network::{City, Coordinates, Network};

/// Render coordinates in report style, e.g. `N 40, E 117`.
pub fn format_coordinates(coordinates: &Coordinates) -> String {
    format!(
        "{} {}, {} {}",
        coordinates.latitude.hemisphere(),
        format_magnitude(coordinates.latitude.magnitude()),
        coordinates.longitude.hemisphere(),
        format_magnitude(coordinates.longitude.magnitude()),
    )
}

fn format_magnitude(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Render the detailed report block for one city.
pub fn city_report(city: &City) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "Code: {}", city.code);
    let _ = writeln!(buffer, "Name: {}", city.name);
    let _ = writeln!(buffer, "Country: {}", city.country);
    let _ = writeln!(buffer, "Continent: {}", city.continent);
    let _ = writeln!(buffer, "Time Zone: {}", city.timezone);
    let _ = writeln!(buffer, "Coordinates: {}", format_coordinates(&city.coordinates));
    let _ = writeln!(buffer, "Population: {}", city.population);
    let _ = writeln!(buffer, "Region: {}", city.region);

    let connections = city
        .neighbors
        .iter()
        .map(|(code, distance)| format!("{code} - {distance}"))
        .collect::<Vec<_>>()
        .join(", ");
    if connections.is_empty() {
        let _ = writeln!(buffer, "Direct Connections:");
    } else {
        let _ = writeln!(buffer, "Direct Connections: {connections}.");
    }

    buffer
}

/// One `Name, CODE` line per city, in code order.
pub fn city_list(network: &Network) -> String {
    let mut buffer = String::new();
    for city in network.cities() {
        let _ = writeln!(buffer, "{}, {}", city.name, city.code);
    }
    buffer
}

/// Comma-joined `ORIGIN-DESTINATION` tokens for every directed edge, the
/// format consumed by the map-image service.
pub fn edge_pairs(network: &Network) -> String {
    network
        .directed_edges()
        .map(|(origin, destination, _)| format!("{origin}-{destination}"))
        .collect::<Vec<_>>()
        .join(",")
}
