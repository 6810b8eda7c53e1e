use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listing_store::{Config, InMemoryListingStore, ListingService, NewProperty, Property, SearchCriteria};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Browse and submit property listings
#[derive(Parser, Debug)]
#[command(name = "listing-store", version)]
struct Cli {
    /// Print listings as JSON instead of cards
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List listings, optionally filtered by a query string
    /// such as "propertyType=house&minPrice=100000"
    List { query: Option<String> },
    /// Show a single listing
    Get { id: String },
    /// Show the featured listings
    Featured,
    /// Show the newest listings
    Recent,
    /// Submit a listing from a JSON file
    Add { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let store = InMemoryListingStore::seeded(&config);

    info!("Using {} listing backend", store.backend_name());

    match cli.command {
        Command::List { query } => {
            let criteria = match query.as_deref() {
                Some(query) => Some(SearchCriteria::from_query(query)?),
                None => None,
            };
            match &criteria {
                Some(criteria) if !criteria.is_empty() => {
                    info!("Filtering with ?{}", criteria.to_query_string())
                }
                _ => info!("No filters, listing everything"),
            }
            let properties = store.list(criteria.as_ref()).await?;
            info!("{} properties found", properties.len());
            print_listings(&properties, cli.json)?;
        }
        Command::Get { id } => match store.get_by_id(&id).await? {
            Some(property) => print_detail(&property, cli.json)?,
            None => {
                warn!("Property {} not found", id);
                std::process::exit(1);
            }
        },
        Command::Featured => {
            let properties = store.featured().await?;
            print_listings(&properties, cli.json)?;
        }
        Command::Recent => {
            let properties = store.recent().await?;
            print_listings(&properties, cli.json)?;
        }
        Command::Add { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let new: NewProperty = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse listing in {}", file.display()))?;

            let property = store.add(new).await?;
            info!("Property listed successfully as /property/{}", property.id);
            print_detail(&property, cli.json)?;
        }
    }

    Ok(())
}

fn print_listings(properties: &[Property], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(properties)?);
        return Ok(());
    }

    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.price_label());
        println!(
            "   {} Beds, {} Baths, {} sqft",
            property.bedrooms, property.bathrooms, property.size
        );
        println!(
            "   {}, {}, {} {}",
            property.location.address,
            property.location.city,
            property.location.state,
            property.location.zip_code
        );
        println!("   ID: {}", property.id);
        println!("   Listed on {}", property.listed_date.format("%Y-%m-%d"));
        println!();
    }
    Ok(())
}

fn print_detail(property: &Property, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(property)?);
        return Ok(());
    }

    println!("{}", property.title);
    println!("{} · {} for {}", property.price_label(), property.property_type, property.listing_type);
    println!("Listed on {}", property.listed_date.format("%Y-%m-%d"));
    println!();
    println!(
        "{} Beds, {} Baths, {} sqft",
        property.bedrooms, property.bathrooms, property.size
    );
    println!(
        "{}, {}, {} {}, {}",
        property.location.address,
        property.location.city,
        property.location.state,
        property.location.zip_code,
        property.location.country
    );
    println!();
    println!("{}", property.description);
    if !property.features.is_empty() {
        println!();
        println!("Features: {}", property.features.join(", "));
    }
    println!("Images: {}", property.images.len());
    println!();
    println!("Contact: {}", property.seller.name);
    println!("   {}", property.seller.email);
    println!("   {}", property.seller.phone);
    Ok(())
}
