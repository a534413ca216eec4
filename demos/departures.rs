use anyhow::Result;
use bartapi::{Client, TripQuery};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Example program that calls the library API.
    // Configure the key via BART_API_KEY or a `.bartrc` file.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;
    let orig = std::env::args().nth(1).unwrap_or_else(|| "embr".to_string());

    let etd = client.estimated_departures(&orig, None, None)?;
    if let Some(note) = &etd.advisory {
        eprintln!("advisory: {note}");
    }
    println!("{}", serde_json::to_string_pretty(&etd.data)?);

    let trip = TripQuery::new(orig.as_str(), "sfia");
    let departures = client.departures(&trip)?;
    println!("{}", serde_json::to_string_pretty(&departures.data)?);
    Ok(())
}
