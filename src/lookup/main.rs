//! Zone lookup tool.
//!
//! Loads GeoJSON layers from files or URLs and reports which zones contain
//! a location, or summarizes a layer grouped by a property.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zonefence::config::{LayerConfig, LookupConfig};
use zonefence::fetch::HttpFetcher;
use zonefence::load::load_source;
use zonefence::models::{Coordinate, StringProperties};
use zonefence::pip::{PipService, ZoneHit, ZoneLayer};

#[derive(Parser, Debug)]
#[command(name = "zone-lookup")]
#[command(about = "Find the GeoJSON zones containing a location")]
struct Args {
    /// TOML file listing layers
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra layer as name=source (URL or file path); repeatable
    #[arg(short, long = "layer")]
    layers: Vec<String>,

    /// Latitude of the location to test
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    /// Longitude of the location to test
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// Only keep zones whose center lies inside this layer
    #[arg(long)]
    region: Option<String>,

    /// Print feature counts per value of this string property instead
    #[arg(long)]
    group_by: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct HitOutput<'a> {
    layer: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    geometry: &'a str,
    center: Coordinate,
    properties: &'a StringProperties,
}

impl<'a> From<&ZoneHit<'a>> for HitOutput<'a> {
    fn from(hit: &ZoneHit<'a>) -> Self {
        Self {
            layer: &hit.layer.name,
            label: hit.label(),
            id: hit.feature.id(),
            geometry: hit.feature.geometry().kind().as_str(),
            center: hit.feature.center(),
            properties: hit.feature.string_properties(),
        }
    }
}

#[derive(Serialize)]
struct GroupOutput<'a> {
    layer: &'a str,
    value: &'a str,
    count: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => LookupConfig::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => LookupConfig::default(),
    };
    for arg in &args.layers {
        config.layers.push(LayerConfig::from_arg(arg)?);
    }
    if args.region.is_some() {
        config.global.region = args.region.clone();
    }

    if config.layers.is_empty() {
        anyhow::bail!("No layers configured; pass --config or --layer");
    }

    let service = load_layers(&config).await?;
    info!("Loaded {} of {} layers", service.len(), config.layers.len());

    if let Some(key) = &args.group_by {
        print_groups(&service, key)?;
    }

    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        print_hits(&service, Coordinate::new(lat, lon), config.global.region.as_deref())?;
    } else if args.group_by.is_none() {
        anyhow::bail!("Nothing to do; pass --lat/--lon or --group-by");
    }

    Ok(())
}

/// Load every configured layer concurrently. A layer that fails is
/// logged and left out.
async fn load_layers(config: &LookupConfig) -> Result<PipService> {
    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(config.global.timeout_secs))
        .context("Failed to create HTTP client")?;

    let results = join_all(
        config
            .layers
            .iter()
            .map(|layer| load_source(&fetcher, &layer.source)),
    )
    .await;

    let mut service = PipService::default();
    for (layer, result) in config.layers.iter().zip(results) {
        match result {
            Ok(document) => {
                let mut zone = ZoneLayer::new(layer.name.clone(), document);
                if let Some(key) = &layer.label_property {
                    zone = zone.with_label_property(key.clone());
                }
                service.add_layer(zone);
            }
            Err(e) => warn!("Skipping layer {} ({}): {}", layer.name, layer.source, e),
        }
    }

    Ok(service)
}

fn print_hits(service: &PipService, point: Coordinate, region: Option<&str>) -> Result<()> {
    let mut hits = service.lookup(point);

    if let Some(region) = region {
        if service.layer(region).is_none() {
            warn!("Region layer {} is not loaded, not filtering", region);
        } else {
            hits.retain(|hit| {
                hit.layer.name != region && service.layer_contains(region, hit.feature.center())
            });
        }
    }

    info!("{} zones contain {}", hits.len(), point);
    for hit in &hits {
        println!("{}", serde_json::to_string(&HitOutput::from(hit))?);
    }
    Ok(())
}

fn print_groups(service: &PipService, key: &str) -> Result<()> {
    for layer in service.layers() {
        for (value, features) in layer.document.group_by_property(key) {
            let output = GroupOutput {
                layer: &layer.name,
                value: &value,
                count: features.len(),
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }
    Ok(())
}
