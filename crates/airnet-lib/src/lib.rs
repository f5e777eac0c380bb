//! Airnet library entry points.
//!
//! This crate models an airline route network as a directed graph of cities
//! connected by point-to-point flights. It covers ingestion from JSON
//! documents, store mutation, shortest-path routing, network statistics, and
//! itinerary cost and duration estimation. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod document;
pub mod error;
pub mod itinerary;
pub mod map;
pub mod network;
pub mod output;
pub mod path;
pub mod stats;

pub use document::{MetroEntry, NetworkDocument, RouteEntry};
pub use error::{Error, Result};
pub use itinerary::{flight_minutes, layover_minutes, route_cost, ItineraryMetrics};
pub use map::{map_url, render_map};
pub use network::{City, CityPatch, Coordinates, Latitude, Longitude, Network};
pub use output::{city_list, city_report, edge_pairs, format_coordinates};
pub use path::shortest_path;
pub use stats::{
    average_distance, average_population, biggest_city, continents_with_cities, hub_cities,
    longest_flight, shortest_flight, smallest_city, FlightRecord, HubReport, PopulationRecord,
};
