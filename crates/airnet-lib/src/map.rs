//! Great-circle map rendering via the gcmap web service.
//!
//! This is an external collaborator: failures here are HTTP or filesystem
//! failures, never graph failures.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::network::Network;
use crate::output;

const GCMAP_ENDPOINT: &str = "http://www.gcmap.com/map";

/// Build the gcmap request URL for a comma-joined list of
/// `ORIGIN-DESTINATION` pairs.
pub fn map_url(edge_pairs: &str) -> String {
    format!("{GCMAP_ENDPOINT}?P={edge_pairs}&MS=bm&MR=120&MX=720x360&PM=*")
}

/// Fetch a map image of every directed edge in the network and write the
/// bytes to `target`.
pub fn render_map(network: &Network, target: &Path) -> Result<()> {
    let url = map_url(&output::edge_pairs(network));
    debug!(url = %url, "requesting route map image");

    let response = reqwest::blocking::get(&url)?.error_for_status()?;
    let bytes = response.bytes()?;
    fs::write(target, &bytes)?;

    Ok(())
}
