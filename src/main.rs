//! stencil-heatmap: estimate tile costs from the command line.
//!
//! Loads the heatmap once, then prints one JSON line per requested tile.

use clap::Parser;
use serde::Serialize;
use tracing::info;

use stencil_heatmap::config::{Cli, Config};
use stencil_heatmap::heatmap::data::HeatmapData;
use stencil_heatmap::{new_shared_estimator, CostSource, Tile};

#[derive(Serialize)]
struct Report {
    tile: Tile,
    throughput: f64,
    startup_cost: u32,
    source: CostSource,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "stencil_heatmap=trace"
    } else {
        "stencil_heatmap=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(&cli.config)?;
    if let Some(path) = cli.heatmap {
        config.heatmap.path = path;
    }

    let store = HeatmapData::load(&config.heatmap.path)?.into_store()?;
    info!(
        path = %config.heatmap.path.display(),
        entries = store.len(),
        startup_cost = config.estimator.startup_cost,
        "Heatmap ready"
    );

    let estimator = new_shared_estimator(store, config.estimator);

    for tile in cli.tiles {
        let estimate = estimator.explain(tile);
        let report = Report {
            tile,
            throughput: estimate.cost.throughput,
            startup_cost: estimate.cost.startup_cost,
            source: estimate.source,
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
