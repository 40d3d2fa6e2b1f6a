use bookswap::app_config::{AppConfig, ProviderKind};
use bookswap::books::{BookQuery, BooksClient, load_books_from};
use bookswap::domain::{Book, Coordinate};
use bookswap::http_client::new_client;
use bookswap::location::{FixedLocationProvider, IpLocationProvider, LocationProvider, get_current_location};
use bookswap::preferences::{JsonFileStore, Preferences};
use bookswap::proximity::{SortByDistance, WithDistance, format_distance, nearby};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = new_client(&config)?;
    let preferences = Preferences::new(JsonFileStore::new(config.preferences().path()));

    let provider: Box<dyn LocationProvider> = match config.location().provider() {
        ProviderKind::Fixed => Box::new(FixedLocationProvider::new(config.location().fixed())),
        ProviderKind::IpLookup => Box::new(IpLocationProvider::new(client.clone(), config.location().lookup_url())),
    };
    let origin = locate(provider.as_ref(), &config, &preferences).await;

    let books = match config.books().api_url() {
        Some(url) => {
            let query = origin.map(|origin| BookQuery::near(origin, config.location().radius_km())).unwrap_or_default();
            BooksClient::new(client, url).list_books(&query).await?
        }
        None => load_books_from(config.books().snapshot_directory(), "json").await?,
    };

    let Some(origin) = origin else {
        warn!("⚠️ No location known, listing {} book(s) unsorted", books.len());
        books.iter().for_each(|book| print_book(book, None));
        return Ok(());
    };

    let sorted: Vec<WithDistance<Book>> = match config.location().radius_km() {
        Some(radius_km) => nearby(&books, &origin, radius_km),
        None => books.sorted_by_distance_to(&origin),
    };
    info!("📍 {} book(s) near {}", sorted.len(), origin);
    sorted.iter().for_each(|annotated| print_book(&annotated.item, annotated.distance));

    Ok(())
}

/// The current location, else the last remembered one, else the configured fallback.
async fn locate(provider: &dyn LocationProvider, config: &AppConfig, preferences: &Preferences<JsonFileStore>) -> Option<Coordinate> {
    match get_current_location(provider, config.location().options()).await {
        Ok(coordinate) => {
            if let Err(e) = preferences.remember_location(coordinate).await {
                warn!("⚠️ Could not remember location: {}", e);
            }
            return Some(coordinate);
        }
        Err(e) => warn!("⚠️ Falling back, {}", e),
    }

    match preferences.last_location().await {
        Ok(Some(coordinate)) => {
            info!("📍 Using last known location {}", coordinate);
            Some(coordinate)
        }
        Ok(None) => config.location().fallback(),
        Err(e) => {
            warn!("⚠️ Could not read the last known location: {}", e);
            config.location().fallback()
        }
    }
}

fn print_book(book: &Book, distance: Option<f64>) {
    let distance = distance.map(format_distance).unwrap_or_else(|| "distance unknown".to_string());
    println!("{:<40} {:<25} {}", book.title, book.author, distance);
}
