use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airnet_lib::{
    city_list, city_report, render_map, route_cost, shortest_path, stats, ItineraryMetrics,
    Network,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Airline route network utilities")]
struct Cli {
    /// Path to the network document (JSON).
    #[arg(long)]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every city in the network.
    List,
    /// Show the detailed report for one city.
    Info {
        /// City code to look up.
        code: String,
    },
    /// Print network-wide statistics.
    Stats,
    /// Compute the shortest route between two cities.
    Route {
        /// Starting city code.
        #[arg(long = "from")]
        from: String,
        /// Destination city code.
        #[arg(long = "to")]
        to: String,
    },
    /// Price an explicit multi-city itinerary of directly connected stops.
    Cost {
        /// City codes in travel order (at least two).
        codes: Vec<String>,
    },
    /// Serialize the loaded network back to a JSON document.
    Save {
        /// Output path for the serialized document.
        out: PathBuf,
    },
    /// Fetch a great-circle map image of every route in the network.
    Map {
        /// Output path for the image bytes.
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = load_network(&cli.data)?;

    match cli.command {
        Command::List => handle_list(&network),
        Command::Info { code } => handle_info(&network, &code),
        Command::Stats => handle_stats(&network),
        Command::Route { from, to } => handle_route(&network, &from, &to),
        Command::Cost { codes } => handle_cost(&network, &codes),
        Command::Save { out } => handle_save(&network, &out),
        Command::Map { out } => handle_map(&network, &out),
    }
}

fn load_network(path: &Path) -> Result<Network> {
    Network::from_json_file(path)
        .with_context(|| format!("failed to load network document from {}", path.display()))
}

fn handle_list(network: &Network) -> Result<()> {
    print!("{}", city_list(network));
    Ok(())
}

fn handle_info(network: &Network, code: &str) -> Result<()> {
    let city = network
        .city(code)
        .ok_or_else(|| anyhow!("unknown city code: {code}"))?;
    print!("{}", city_report(city));
    Ok(())
}

fn handle_stats(network: &Network) -> Result<()> {
    match stats::shortest_flight(network) {
        Some(flight) => println!(
            "Shortest flight: {} -> {} ({})",
            flight.origin, flight.destination, flight.distance
        ),
        None => println!("Shortest flight: no flights in the network"),
    }
    match stats::longest_flight(network) {
        Some(flight) => println!(
            "Longest flight: {} -> {} ({})",
            flight.origin, flight.destination, flight.distance
        ),
        None => println!("Longest flight: no flights in the network"),
    }
    println!("Average distance: {}", stats::average_distance(network));

    match stats::smallest_city(network) {
        Some(city) => println!("Smallest city: {} ({})", city.code, city.population),
        None => println!("Smallest city: no cities in the network"),
    }
    match stats::biggest_city(network) {
        Some(city) => println!("Biggest city: {} ({})", city.code, city.population),
        None => println!("Biggest city: no cities in the network"),
    }
    println!("Average population: {}", stats::average_population(network));

    for (continent, codes) in stats::continents_with_cities(network) {
        let joined = codes.into_iter().collect::<Vec<_>>().join(", ");
        println!("{continent}: {joined}");
    }

    let hubs = stats::hub_cities(network);
    println!(
        "Hub cities ({} connections): {}",
        hubs.degree,
        hubs.codes.join(", ")
    );

    Ok(())
}

fn handle_route(network: &Network, from: &str, to: &str) -> Result<()> {
    let path = shortest_path(network, from, to)
        .ok_or_else(|| anyhow!("no route found from {from} to {to}"))?;
    println!("Route: {}", path.join(" -> "));

    // The path traverses direct edges only, so itinerary pricing applies.
    if path.len() >= 2 {
        let metrics = route_cost(network, &path)?;
        print_metrics(&metrics);
    }
    Ok(())
}

fn handle_cost(network: &Network, codes: &[String]) -> Result<()> {
    let metrics =
        route_cost(network, codes).context("failed to price the requested itinerary")?;
    println!("Itinerary: {}", codes.join(" -> "));
    print_metrics(&metrics);
    Ok(())
}

fn print_metrics(metrics: &ItineraryMetrics) {
    println!("Total distance: {}", metrics.distance);
    println!("Total cost: {:.2}", metrics.cost);
    println!(
        "Total time: {}h {:02}m",
        metrics.minutes / 60,
        metrics.minutes % 60
    );
}

fn handle_save(network: &Network, out: &Path) -> Result<()> {
    let text = network
        .to_json_string()
        .context("failed to serialize the network document")?;
    fs::write(out, text)
        .with_context(|| format!("failed to write network document to {}", out.display()))?;
    println!("Network saved to {}", out.display());
    Ok(())
}

fn handle_map(network: &Network, out: &Path) -> Result<()> {
    render_map(network, out)
        .with_context(|| format!("failed to fetch route map into {}", out.display()))?;
    println!("Route map saved to {}", out.display());
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
