use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::network::Network;

/// Find a minimum-distance path from `origin` to `destination` using
/// Dijkstra's algorithm over the directed edge weights.
///
/// Returns the full code sequence including both endpoints, or `None` when
/// either endpoint is absent or no path exists. Ties between equally cheap
/// frontier candidates are broken by code order, so the result is
/// deterministic for a given network.
pub fn shortest_path(network: &Network, origin: &str, destination: &str) -> Option<Vec<String>> {
    if !network.exists(origin) || !network.exists(destination) {
        return None;
    }
    if origin == destination {
        return Some(vec![origin.to_string()]);
    }

    let mut distances: HashMap<&str, u64> = HashMap::new();
    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(origin, 0);
    parents.insert(origin, None);
    queue.push(QueueEntry::new(origin, 0));

    while let Some(entry) = queue.pop() {
        match distances.get(entry.code) {
            // Stale heap entry superseded by a cheaper relaxation.
            Some(&best) if best < entry.cost => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.code == destination {
            return Some(reconstruct_path(&parents, origin, destination));
        }

        let Some(city) = network.city(entry.code) else {
            continue;
        };
        for (neighbor, &distance) in &city.neighbors {
            let next_cost = entry.cost + distance;
            if next_cost < *distances.get(neighbor.as_str()).unwrap_or(&u64::MAX) {
                distances.insert(neighbor, next_cost);
                parents.insert(neighbor, Some(entry.code));
                queue.push(QueueEntry::new(neighbor, next_cost));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<&str, Option<&str>>,
    origin: &str,
    destination: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(code) = current {
        path.push(code.to_string());
        if code == origin {
            break;
        }
        current = parents.get(code).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    code: &'a str,
    cost: u64,
}

impl<'a> QueueEntry<'a> {
    fn new(code: &'a str, cost: u64) -> Self {
        Self { code, cost }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.code.cmp(self.code))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
