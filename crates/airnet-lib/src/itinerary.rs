//! Per-leg duration and cost estimation for multi-city itineraries.
//!
//! Flight time uses a constant-cruising-speed approximation with symmetric
//! acceleration and deceleration phases; pricing starts at a base per-unit
//! rate on the first leg and discounts every subsequent leg until the rate
//! bottoms out at zero.

use crate::error::{Error, Result};
use crate::network::Network;

/// Cruising speed in distance units per hour.
pub const CRUISING_SPEED: f64 = 750.0;

/// Layover granted at an intermediate stop before outbound-connection
/// discounts are applied.
pub const BASE_LAYOVER_MINUTES: i64 = 120;

/// Per-unit-distance price of the first leg.
const FIRST_LEG_RATE: f64 = 0.35;

/// Per-leg discount applied to the rate after each flown leg.
const RATE_STEP: f64 = 0.05;

/// Accumulated metrics for a full itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryMetrics {
    /// Sum of leg distances.
    pub distance: u64,
    /// Total monetary cost across all legs.
    pub cost: f64,
    /// Total travel time including layovers, in whole minutes.
    pub minutes: i64,
}

/// Time in whole minutes for a direct flight of the given distance.
///
/// The aircraft accelerates over `min(distance / 2, 200)` units, decelerates
/// over the same span, and cruises at [`CRUISING_SPEED`] for whatever of
/// `distance - 400` remains. Fractional minutes are truncated toward zero.
pub fn flight_minutes(distance: u64) -> Result<i64> {
    if distance == 0 {
        return Err(Error::InvalidArgument {
            message: "flight distance must be positive".to_string(),
        });
    }

    let distance = distance as f64;
    let accelerating = (distance / 2.0).min(200.0);
    let cruising = distance - 400.0;

    // t = 2d / (v + u) with u = 0, once for take-off and once for landing.
    let mut hours = 2.0 * (2.0 * accelerating / CRUISING_SPEED);
    if cruising > 0.0 {
        hours += cruising / CRUISING_SPEED;
    }

    Ok((60.0 * hours).trunc() as i64)
}

/// Layover time in minutes at a stop with the given number of outgoing
/// connections: 120 minutes, less 10 per connection beyond the first, never
/// below zero.
pub fn layover_minutes(out_degree: usize) -> i64 {
    let reduction = out_degree.saturating_sub(1) as i64 * 10;
    (BASE_LAYOVER_MINUTES - reduction).max(0)
}

/// Walk an itinerary leg by leg, accumulating distance, cost, and duration.
///
/// Fails with [`Error::InvalidArgument`] for fewer than two codes or any
/// code absent from the network, and with [`Error::NoSuchConnection`] when a
/// consecutive pair lacks a direct flight; there is no fallback to
/// pathfinding. The first leg is priced at 0.35 per unit distance and each
/// later leg at 0.05 less than the previous one, floored at zero. Every
/// intermediate stop adds a layover based on its out-degree.
pub fn route_cost<S: AsRef<str>>(network: &Network, codes: &[S]) -> Result<ItineraryMetrics> {
    if codes.len() < 2 {
        return Err(Error::InvalidArgument {
            message: "itinerary requires at least two city codes".to_string(),
        });
    }
    for code in codes {
        if !network.exists(code.as_ref()) {
            return Err(Error::InvalidArgument {
                message: format!("unknown city code in itinerary: {}", code.as_ref()),
            });
        }
    }

    let mut metrics = ItineraryMetrics {
        distance: 0,
        cost: 0.0,
        minutes: 0,
    };
    let mut rate = FIRST_LEG_RATE;

    for (index, pair) in codes.windows(2).enumerate() {
        let origin = pair[0].as_ref();
        let destination = pair[1].as_ref();

        let leg = network
            .city(origin)
            .and_then(|city| city.neighbors.get(destination).copied())
            .ok_or_else(|| Error::NoSuchConnection {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })?;

        metrics.distance += leg;
        metrics.cost += leg as f64 * rate;
        metrics.minutes += flight_minutes(leg)?;
        rate = (rate - RATE_STEP).max(0.0);

        // Every arrival except the final destination is a layover stop.
        let is_last_leg = index + 2 == codes.len();
        if !is_last_leg {
            let out_degree = network
                .city(destination)
                .map(|city| city.out_degree())
                .unwrap_or(0);
            metrics.minutes += layover_minutes(out_degree);
        }
    }

    Ok(metrics)
}
