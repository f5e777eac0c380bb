mod common;

use airnet_lib::{flight_minutes, layover_minutes, route_cost, Error};
use common::{city, sample_network};

#[test]
fn short_leg_never_reaches_cruising_speed() {
    // accel = min(400/2, 200) = 200, cruise = 0: only the accel/decel term.
    // 2 * (2 * 200 / 750) hours = 64 minutes.
    assert_eq!(flight_minutes(400).expect("valid distance"), 64);
}

#[test]
fn long_leg_adds_cruising_time() {
    // accel capped at 200, cruise = 5379 - 400 = 4979.
    // 60 * (800/750 + 4979/750) = 462.32 minutes, truncated.
    assert_eq!(flight_minutes(5379).expect("valid distance"), 462);
}

#[test]
fn zero_distance_leg_is_rejected() {
    let err = flight_minutes(0).expect_err("zero distance");
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn layover_shrinks_with_connections_and_floors_at_zero() {
    assert_eq!(layover_minutes(0), 120);
    assert_eq!(layover_minutes(1), 120);
    assert_eq!(layover_minutes(3), 100);
    assert_eq!(layover_minutes(13), 0);
    assert_eq!(layover_minutes(50), 0);
}

#[test]
fn route_cost_walks_legs_with_decreasing_rate() {
    let mut network = sample_network();
    network.add_route("B", "D", 200).expect("edge B-D");
    network.add_route("D", "B", 200).expect("edge D-B");

    let metrics = route_cost(&network, &["A", "B", "D"]).expect("itinerary prices");

    assert_eq!(metrics.distance, 300);
    // Leg 1 at 0.35/unit, leg 2 at 0.30/unit.
    let expected_cost = 100.0 * 0.35 + 200.0 * (0.35 - 0.05);
    assert!((metrics.cost - expected_cost).abs() < 1e-9);
    // 16 min (100 units) + 32 min (200 units) + one layover at B, which now
    // has three outgoing connections: 120 - 2 * 10 = 100 minutes.
    assert_eq!(metrics.minutes, 16 + 32 + 100);
}

#[test]
fn leg_rate_floors_at_zero_for_long_itineraries() {
    let mut network = sample_network();
    let mut stops = vec!["A".to_string(), "B".to_string()];
    let mut previous = "B".to_string();
    for index in 0..8 {
        let code = format!("X{index}");
        network.add_city(city(&code, "Asia", 10)).expect("add stop");
        network
            .add_route(&previous, &code, 100)
            .expect("chain edge");
        stops.push(code.clone());
        previous = code;
    }

    let metrics = route_cost(&network, &stops).expect("itinerary prices");

    // Rates: 0.35, 0.30, ..., 0.05, then 0 for the remaining legs. With the
    // first leg at 100 units and eight more 100-unit legs, everything past
    // the seventh leg rides free.
    let rates = [0.35, 0.30, 0.25, 0.20, 0.15, 0.10, 0.05, 0.0, 0.0];
    let expected_cost: f64 = rates.iter().map(|rate| 100.0 * rate).sum();
    assert!((metrics.cost - expected_cost).abs() < 1e-9);
    assert_eq!(metrics.distance, 900);
}

#[test]
fn floored_rate_marginal_cost_is_distance_independent() {
    let mut network = sample_network();
    let mut stops = vec!["A".to_string(), "B".to_string()];
    let mut previous = "B".to_string();
    for index in 0..9 {
        let code = format!("X{index}");
        network.add_city(city(&code, "Asia", 10)).expect("add stop");
        network
            .add_route(&previous, &code, 100)
            .expect("chain edge");
        stops.push(code.clone());
        previous = code;
    }

    // Once the rate floors at zero, a further leg adds distance and time but
    // no cost.
    let shorter = route_cost(&network, &stops[..stops.len() - 1]).expect("shorter itinerary");
    let longer = route_cost(&network, &stops).expect("longer itinerary");
    assert!((longer.cost - shorter.cost).abs() < 1e-9);
    assert_eq!(longer.distance, shorter.distance + 100);
}

#[test]
fn too_few_codes_are_rejected() {
    let network = sample_network();
    assert!(matches!(
        route_cost(&network, &["A"]),
        Err(Error::InvalidArgument { .. })
    ));
    let empty: [&str; 0] = [];
    assert!(matches!(
        route_cost(&network, &empty),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn unknown_code_is_rejected() {
    let network = sample_network();
    let err = route_cost(&network, &["A", "ZZZ"]).expect_err("unknown code");
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn unconnected_leg_is_rejected_without_pathfinding() {
    let network = sample_network();
    // A and E are connected through B, but not directly.
    let err = route_cost(&network, &["A", "E"]).expect_err("no direct flight");
    assert!(matches!(
        err,
        Error::NoSuchConnection { origin, destination }
            if origin == "A" && destination == "E"
    ));
}
